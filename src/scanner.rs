use tracing::{debug, trace};

use crate::{
    attributes::read_attributes,
    errors::{Expected, RustyPromTextError},
    key::read_key,
    record::MetricRecord,
    value::{normalize_value, read_value},
};

/// Skips everything up to and including the next line break.
fn skip_line(input: &str) -> &str {
    match input.find('\n') {
        Some(index) => &input[index + 1..],
        None => &input[input.len()..],
    }
}

/// Parses a whole Prometheus text exposition into metric records.
///
/// Comment and blank lines are skipped. A line whose attribute block is
/// malformed is dropped on its own, while a missing key or value makes
/// the whole parse fail, as the input is then unlikely to be this format at all.
///
/// ```rust
/// let records = rusty_promtext::parse(
///     "# TYPE up gauge\nup{job=\"kafka\"} 1\nrabbitmq_disk_free unknown\n",
/// )
/// .unwrap();
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[0].attr("job"), Some("kafka"));
/// assert!(records[1].is_nan());
/// ```
pub fn parse(input: &str) -> Result<Vec<MetricRecord>, RustyPromTextError> {
    let mut records = Vec::new();
    let mut skipped_lines = 0usize;
    let mut input_pointer = input;

    while !input_pointer.is_empty() {
        if input_pointer.starts_with('#') || input_pointer.starts_with('\n') {
            input_pointer = skip_line(input_pointer);
            continue;
        }

        let (remaining_input, key) = read_key(input_pointer)
            .map_err(|_| RustyPromTextError::invalid(Expected::Key, input, input_pointer))?;

        let (remaining_input, attrs) = match read_attributes(remaining_input) {
            Ok(result) => result,
            Err(err) => {
                let stopped_at = match err {
                    nom::Err::Error(error) | nom::Err::Failure(error) => error.input,
                    nom::Err::Incomplete(_) => remaining_input,
                };
                debug!(
                    key,
                    offset = input.len() - stopped_at.len(),
                    "Skipping metric with a malformed attribute block"
                );
                skipped_lines += 1;
                // The attribute reader may have crossed line breaks, drop the key's line only.
                input_pointer = skip_line(remaining_input);
                continue;
            }
        };

        let (remaining_input, token) = read_value(remaining_input)
            .map_err(|_| RustyPromTextError::invalid(Expected::Value, input, remaining_input))?;
        let value = normalize_value(token);

        input_pointer = remaining_input
            .strip_prefix('\n')
            .unwrap_or(remaining_input);

        records.push(MetricRecord::new(key, attrs, value));
    }

    trace!(
        records = records.len(),
        skipped_lines,
        "Parsed Prometheus text exposition"
    );

    Ok(records)
}
