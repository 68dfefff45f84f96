use crate::BLINK_TARGETS;

#[tracing::instrument]
pub fn process(input: &str) -> miette::Result<String> {
    crate::process(input, BLINK_TARGETS[0])
}
