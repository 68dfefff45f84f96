use nom::{
    character::complete::{digit1, multispace0, multispace1},
    combinator::{all_consuming, map, map_res},
    multi::separated_list0,
    sequence::delimited,
    IResult,
};
use num_bigint::BigUint;

use crate::{error::StoneError, stone::Stone};

fn stone(input: &str) -> IResult<&str, Stone> {
    map(map_res(digit1, str::parse::<BigUint>), Stone)(input)
}

fn stones(input: &str) -> IResult<&str, Vec<Stone>> {
    delimited(
        multispace0,
        separated_list0(multispace1, stone),
        multispace0,
    )(input)
}

/// Parses a whitespace-separated row of stones. The whole input must be consumed.
pub fn parse(input: &str) -> Result<Vec<Stone>, StoneError> {
    all_consuming(stones)(input)
        .map(|(_, stones)| stones)
        .map_err(|e| StoneError::Parse {
            reason: e.to_string(),
        })
}
