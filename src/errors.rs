use std::fmt;

use thiserror::Error;

/// The token the scanner was looking for when it gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    Key,
    Value,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Key => write!(f, "metric key"),
            Expected::Value => write!(f, "metric value"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RustyPromTextError {
    #[error("Invalid input: expected {expected} at line {line} (offset {offset})")]
    Invalid {
        expected: Expected,
        offset: usize,
        line: usize,
    },
}

impl RustyPromTextError {
    /// Builds an `Invalid` error for the position of `remaining` inside `input`.
    pub(crate) fn invalid(expected: Expected, input: &str, remaining: &str) -> Self {
        let offset = input.len() - remaining.len();
        let line = input.as_bytes()[..offset]
            .iter()
            .filter(|&&byte| byte == b'\n')
            .count()
            + 1;
        RustyPromTextError::Invalid {
            expected,
            offset,
            line,
        }
    }

    /// Byte offset of the failure from the start of the input.
    pub fn offset(&self) -> usize {
        match self {
            RustyPromTextError::Invalid { offset, .. } => *offset,
        }
    }
}
