// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::{error, fmt, result};

pub type Result<T> = result::Result<T, Error>;

// Remember to add an arm to the `Display` impl for each new error.
#[derive(Debug)]
pub enum Error {
    /// The `#####` line that precedes the records never showed up.
    MalformedHeader,
    MalformedRecord {
        line: usize,
        reason: &'static str,
    },
    /// Records must be sorted by code point.
    UnsortedInput {
        line: usize,
        code_point: u32,
        previous: u32,
    },
    /// The same code point was listed twice, which would give it two table slots.
    DuplicateCodePoint {
        line: usize,
        code_point: u32,
    },
    EmptyTable,
    /// Fewer than `minimum` percent of the slots hold a real record.
    /// This usually means that the database format changed under us.
    SparseTable {
        occupancy: u32,
        minimum: u32,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::MalformedHeader => write!(f, "separator line not found in input header"),
            Error::MalformedRecord { line, reason } => {
                write!(f, "malformed record on line {line}: {reason}")
            }
            Error::UnsortedInput { line, code_point, previous } => write!(
                f,
                "input data character not sorted on line {line}: U+{code_point:04X} follows U+{previous:04X}"
            ),
            Error::DuplicateCodePoint { line, code_point } => {
                write!(f, "duplicate record for U+{code_point:04X} on line {line}")
            }
            Error::EmptyTable => write!(f, "input contains no records"),
            Error::SparseTable { occupancy, minimum } => write!(
                f,
                "table too sparse, please investigate: {occupancy}% occupancy (minimum {minimum}%)"
            ),
        }
    }
}

impl error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = Error::UnsortedInput { line: 12, code_point: 0x621, previous: 0x622 };
        assert_eq!(
            err.to_string(),
            "input data character not sorted on line 12: U+0621 follows U+0622"
        );

        let err = Error::SparseTable { occupancy: 12, minimum: 40 };
        assert_eq!(
            err.to_string(),
            "table too sparse, please investigate: 12% occupancy (minimum 40%)"
        );
    }
}
