use crate::stone::Stone;

/// Expands the full row of stones, keeping row order.
///
/// The row roughly doubles every couple of blinks, so this is only usable for small
/// blink counts.
pub fn expand(stones: &[Stone], blinks: usize) -> Vec<Stone> {
    let mut current = stones.to_vec();
    let mut next = Vec::with_capacity(current.len() * 2);

    for _ in 0..blinks {
        next.clear();
        for stone in &current {
            next.extend(stone.blink());
        }
        std::mem::swap(&mut current, &mut next);
    }

    current
}
