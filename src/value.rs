use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, digit0, digit1},
    combinator::{map, opt, recognize, value},
    sequence::tuple,
    IResult,
};

/// A raw value token, before normalisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueToken<'a> {
    /// A decimal number such as `0`, `-12.5` or `8.123213E-28`.
    Number(&'a str),
    NaN,
    /// Emitted by some RabbitMQ versions instead of a number.
    /// See <https://github.com/rabbitmq/rabbitmq-server/discussions/5143>
    Unknown,
}

type DecimalParts<'a> = (
    Option<char>,
    &'a str,
    Option<char>,
    &'a str,
    Option<char>,
    Option<char>,
    &'a str,
);

/// `-?\d+\.?\d*E?-?\d*`
///
/// Only negative exponents carry a sign, `E+10` is not a value.
fn read_decimal_parts(input: &str) -> IResult<&str, DecimalParts<'_>> {
    tuple((
        opt(char('-')),
        digit1,
        opt(char('.')),
        digit0,
        opt(char('E')),
        opt(char('-')),
        digit0,
    ))(input)
}

/// Reads a value token: a decimal number, `NaN` or `unknown`.
pub fn read_value(input: &str) -> IResult<&str, ValueToken<'_>> {
    alt((
        map(recognize(read_decimal_parts), ValueToken::Number),
        value(ValueToken::NaN, tag("NaN")),
        value(ValueToken::Unknown, tag("unknown")),
    ))(input)
}

/// Converts a value token to its floating point value.
///
/// Sentinel tokens become NaN. Numbers are read like a lenient
/// `to_f`: a dangling `E`, `E-` or `-` after the digits is ignored.
/// A number that does not even start with a digit is NaN.
pub fn normalize_value(token: ValueToken<'_>) -> f64 {
    match token {
        ValueToken::NaN | ValueToken::Unknown => f64::NAN,
        ValueToken::Number(number) => normalize_number(number).unwrap_or(f64::NAN),
    }
}

fn normalize_number(number: &str) -> Option<f64> {
    let (_, (sign, integer, _, fraction, marker, exponent_sign, exponent_digits)) =
        read_decimal_parts(number).ok()?;

    let sign = if sign.is_some() { "-" } else { "" };
    let fraction = if fraction.is_empty() { "0" } else { fraction };
    let exponent = match marker {
        Some(_) if !exponent_digits.is_empty() => {
            let exponent_sign = if exponent_sign.is_some() { "-" } else { "" };
            format!("{}{}", exponent_sign, exponent_digits)
        }
        _ => "0".to_string(),
    };

    format!("{}{}.{}e{}", sign, integer, fraction, exponent)
        .parse::<f64>()
        .ok()
}
