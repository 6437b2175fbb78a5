use nom::{
    bytes::complete::{take_while, take_while1},
    character::complete::{char, one_of, satisfy},
    combinator::opt,
    error::ErrorKind,
    sequence::delimited,
    IResult,
};

use crate::record::Attributes;

/// Whitespace as exporters emit it: space, tabs, line breaks and form feeds.
#[inline]
fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

#[inline]
fn is_attribute_key_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | ' ')
}

fn error_at<O>(input: &str, kind: ErrorKind) -> IResult<&str, O> {
    Err(nom::Err::Error(nom::error::Error::new(input, kind)))
}

/// Reads an attribute name, trimmed.
///
/// Names may contain letters, digits, underscores, hyphens and spaces,
/// but must not be blank.
pub fn read_attribute_key(input: &str) -> IResult<&str, &str> {
    let (remaining_input, key) = take_while1(is_attribute_key_char)(input)?;
    let key = key.trim();
    if key.is_empty() {
        return error_at(input, ErrorKind::Verify);
    }
    Ok((remaining_input, key))
}

/// Reads the inside of a double-quoted string, up to the closing quote.
///
/// A backslash escapes the following character, so `\"` does not close the string.
/// Escapes are kept as-is in the returned slice.
fn read_quoted_body(input: &str) -> IResult<&str, &str> {
    let mut chars = input.char_indices();
    while let Some((index, c)) = chars.next() {
        match c {
            '"' => return Ok((&input[index..], &input[..index])),
            '\\' => {
                if chars.next().is_none() {
                    return error_at(input, ErrorKind::Escaped);
                }
            }
            _ => {}
        }
    }
    error_at(input, ErrorKind::Char)
}

/// Reads a quoted attribute value, with the whitespace around it.
///
/// Returns the raw body of the string, without the quotes.
pub fn read_attribute_value(input: &str) -> IResult<&str, &str> {
    delimited(
        take_while(is_space),
        delimited(char('"'), read_quoted_body, char('"')),
        take_while(is_space),
    )(input)
}

/// Parses the inside of a `{...}` block, the opening brace being already consumed.
///
/// Errors always point at the start of the step that failed.
fn read_attribute_block(input: &str) -> IResult<&str, Attributes> {
    let mut attrs = Attributes::new();
    let mut input_pointer = input;

    loop {
        // Empty block, or trailing comma
        if let Ok((remaining_input, _)) = char::<_, nom::error::Error<&str>>('}')(input_pointer)
        {
            input_pointer = remaining_input;
            break;
        }

        let (remaining_input, key) = read_attribute_key(input_pointer)?;
        let (remaining_input, _) = char('=')(remaining_input)?;
        let (remaining_input, value) = match read_attribute_value(remaining_input) {
            Ok(result) => result,
            Err(_) => return error_at(remaining_input, ErrorKind::Escaped),
        };

        attrs.insert(key.to_string(), value.to_string());

        // Without a separator, the next name is read right away.
        let (remaining_input, separator) = opt(one_of(",}"))(remaining_input)?;
        input_pointer = remaining_input;
        if separator == Some('}') {
            break;
        }
    }

    Ok((input_pointer, attrs))
}

/// Reads the optional attribute block that follows a metric key.
///
/// Either a single whitespace character (no attributes) or a `{name="value",...}`
/// block followed by at most one whitespace character.
/// Anything else consumes nothing and returns no attributes.
pub fn read_attributes(input: &str) -> IResult<&str, Attributes> {
    let (remaining_input, opening) = opt(satisfy(|c| c == '{' || is_space(c)))(input)?;
    if opening != Some('{') {
        return Ok((remaining_input, Attributes::new()));
    }

    let (remaining_input, attrs) = read_attribute_block(remaining_input)?;
    let (remaining_input, _) = opt(satisfy(is_space))(remaining_input)?;
    Ok((remaining_input, attrs))
}
