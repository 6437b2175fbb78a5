use nom::{bytes::complete::take_while1, IResult};

#[inline]
fn is_key_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == ':'
}

/// Reads a metric key: one or more word characters or colons.
pub fn read_key(input: &str) -> IResult<&str, &str> {
    take_while1(is_key_char)(input)
}
