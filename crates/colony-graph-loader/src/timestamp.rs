//! Parser for colony `last_update` timestamps.
//!
//! The accepted form is `YYYY-MM-DDTHH:MM:SSZ`, always UTC. The grammar only
//! checks the shape, with fixed-width fields and no fraction or offset.
//! Calendar validity is left to chrono.

use chrono::{DateTime, NaiveDate, Utc};
use winnow::{
    Parser,
    error::{ContextError, ErrMode},
    token::take_while,
};

type Input<'src> = &'src str;
type IResult<O> = std::result::Result<O, ErrMode<ContextError>>;

/// A run of exactly `count` ASCII digits.
fn digits<'src>(count: usize) -> impl Parser<Input<'src>, u32, ErrMode<ContextError>> {
    take_while(count, |c: char| c.is_ascii_digit()).try_map(|s: &str| s.parse::<u32>())
}

fn timestamp_parts(input: &mut Input<'_>) -> IResult<[u32; 6]> {
    let year = digits(4).parse_next(input)?;
    '-'.parse_next(input)?;
    let month = digits(2).parse_next(input)?;
    '-'.parse_next(input)?;
    let day = digits(2).parse_next(input)?;
    'T'.parse_next(input)?;
    let hour = digits(2).parse_next(input)?;
    ':'.parse_next(input)?;
    let minute = digits(2).parse_next(input)?;
    ':'.parse_next(input)?;
    let second = digits(2).parse_next(input)?;
    'Z'.parse_next(input)?;
    Ok([year, month, day, hour, minute, second])
}

/// Parses a timestamp, returning `None` on malformed or out-of-range input.
pub fn parse_timestamp(source: &str) -> Option<DateTime<Utc>> {
    let mut input = source;
    let [year, month, day, hour, minute, second] = timestamp_parts(&mut input).ok()?;
    if !input.is_empty() {
        return None;
    }

    let date = NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, day)?;
    Some(date.and_hms_opt(hour, minute, second)?.and_utc())
}
