//! Error types for Karnaugh map axis headers

use super::Axis;
use std::fmt;
use std::io;
use std::sync::Arc;

/// Errors raised when assigning or addressing the map's column/row axes
///
/// All of these are local validation failures: a rejected call never changes the
/// map's state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderError {
    /// No variables were given
    Empty,
    /// A character is not one of the equation's variables
    InvalidVariable {
        /// The offending character, uppercased
        variable: char,
    },
    /// A variable repeats, or is already assigned to the other axis
    DuplicateVariable {
        /// The repeated variable
        variable: char,
    },
    /// The axis does not split the variables into the two most balanced sizes
    DimensionMismatch {
        /// Acceptable lengths for this axis
        expected: Vec<usize>,
        /// Length of the candidate
        found: usize,
    },
    /// A coordinate value does not match its axis
    InvalidValue {
        /// The axis the value was given for
        axis: Axis,
        /// The rejected value
        value: Arc<str>,
    },
}

impl fmt::Display for HeaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderError::Empty => write!(f, "No variables given"),
            HeaderError::InvalidVariable { variable } => {
                write!(f, "Invalid variable '{}' given", variable)
            }
            HeaderError::DuplicateVariable { variable } => {
                write!(f, "Cannot repeat variable '{}'", variable)
            }
            HeaderError::DimensionMismatch { expected, found } => {
                let expected: Vec<String> = expected.iter().map(|n| n.to_string()).collect();
                write!(
                    f,
                    "Does not match the dimension specifications: got {} variable(s), expected {} \
                     (rows and columns must have equal or off-by-one number of variables)",
                    found,
                    expected.join(" or ")
                )
            }
            HeaderError::InvalidValue { axis, value } => {
                write!(f, "Invalid {} value '{}'", axis, value)
            }
        }
    }
}

impl std::error::Error for HeaderError {}

impl From<HeaderError> for io::Error {
    fn from(err: HeaderError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}
