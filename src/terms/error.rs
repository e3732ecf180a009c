//! Error types for term sets and truth tables

use std::fmt;
use std::io;
use std::sync::Arc;

/// Errors related to term classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermError {
    /// Two truth tables were compared over different variables
    VariableMismatch {
        /// Variables of the table being compared against
        expected: Arc<[char]>,
        /// Variables of the other table
        found: Arc<[char]>,
    },
    /// Two truth tables were compared over a different number of rows
    RowCountMismatch {
        /// Rows in the table being compared against
        expected: usize,
        /// Rows in the other table
        found: usize,
    },
    /// A don't-care list entry is not a non-negative integer
    InvalidDontCare {
        /// The offending entry, whitespace removed
        token: Arc<str>,
    },
    /// A don't-care term does not exist in the truth table
    DontCareOutOfRange {
        /// The requested term
        term: usize,
        /// Number of rows in the truth table
        max_inputs: usize,
    },
}

impl fmt::Display for TermError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TermError::VariableMismatch { expected, found } => write!(
                f,
                "Equations do not have the same variables: {} vs {}",
                expected.iter().collect::<String>(),
                found.iter().collect::<String>()
            ),
            TermError::RowCountMismatch { expected, found } => write!(
                f,
                "Truth tables have different row counts: {} vs {}",
                expected, found
            ),
            TermError::InvalidDontCare { token } => {
                write!(f, "Invalid don't-care term '{}'", token)
            }
            TermError::DontCareOutOfRange { term, max_inputs } => write!(
                f,
                "Don't-care term {} out of range (valid range: 0..{})",
                term, max_inputs
            ),
        }
    }
}

impl std::error::Error for TermError {}

impl From<TermError> for io::Error {
    fn from(err: TermError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variable_mismatch_message() {
        let err = TermError::VariableMismatch {
            expected: Arc::from(&['A', 'B'][..]),
            found: Arc::from(&['A', 'C'][..]),
        };
        assert_eq!(
            err.to_string(),
            "Equations do not have the same variables: AB vs AC"
        );
    }

    #[test]
    fn test_row_count_mismatch_message() {
        let err = TermError::RowCountMismatch {
            expected: 4,
            found: 2,
        };
        assert_eq!(err.to_string(), "Truth tables have different row counts: 4 vs 2");
    }

    #[test]
    fn test_out_of_range_message() {
        let err = TermError::DontCareOutOfRange {
            term: 9,
            max_inputs: 8,
        };
        assert!(err.to_string().contains("0..8"));
    }
}
