//! Error types for the binary algebra solver
//!
//! Each module has its own error enum; [`SolverError`] wraps them all for callers
//! that drive the whole pipeline through [`solve`](crate::solve).

use crate::expression::{EvalError, ParseError};
use crate::kmap::HeaderError;
use crate::terms::TermError;
use std::fmt;
use std::io;

/// The main error type of the crate
#[derive(Debug)]
pub enum SolverError {
    /// The equation (or the comparison equation) could not be parsed
    Parse(ParseError),
    /// An input row could not be evaluated, or the equation is malformed
    Eval(EvalError),
    /// Invalid Karnaugh map axis or coordinate
    Header(HeaderError),
    /// Invalid don't-care list or mismatched comparison
    Term(TermError),
    /// IO error wrapper, e.g. while reading an equation file
    Io(io::Error),
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverError::Parse(err) => write!(f, "{}", err),
            SolverError::Eval(err) => write!(f, "{}", err),
            SolverError::Header(err) => write!(f, "{}", err),
            SolverError::Term(err) => write!(f, "{}", err),
            SolverError::Io(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SolverError::Parse(err) => Some(err),
            SolverError::Eval(err) => Some(err),
            SolverError::Header(err) => Some(err),
            SolverError::Term(err) => Some(err),
            SolverError::Io(err) => Some(err),
        }
    }
}

impl From<ParseError> for SolverError {
    fn from(err: ParseError) -> Self {
        SolverError::Parse(err)
    }
}

impl From<EvalError> for SolverError {
    fn from(err: EvalError) -> Self {
        SolverError::Eval(err)
    }
}

impl From<HeaderError> for SolverError {
    fn from(err: HeaderError) -> Self {
        SolverError::Header(err)
    }
}

impl From<TermError> for SolverError {
    fn from(err: TermError) -> Self {
        SolverError::Term(err)
    }
}

impl From<io::Error> for SolverError {
    fn from(err: io::Error) -> Self {
        SolverError::Io(err)
    }
}

// Conversion from SolverError to io::Error so callers working in io::Result can use `?`
impl From<SolverError> for io::Error {
    fn from(err: SolverError) -> Self {
        match err {
            SolverError::Parse(e) => e.into(),
            SolverError::Eval(e) => e.into(),
            SolverError::Header(e) => e.into(),
            SolverError::Term(e) => e.into(),
            SolverError::Io(e) => e,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display_delegates() {
        let err = SolverError::from(ParseError::EmptyInput);
        assert_eq!(err.to_string(), "No equation given");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_to_io_error_kinds() {
        let parse: io::Error = SolverError::from(ParseError::EmptyInput).into();
        assert_eq!(parse.kind(), io::ErrorKind::InvalidData);

        let header: io::Error = SolverError::from(HeaderError::Empty).into();
        assert_eq!(header.kind(), io::ErrorKind::InvalidInput);

        let original = io::Error::new(io::ErrorKind::NotFound, "missing");
        let roundtrip: io::Error = SolverError::from(original).into();
        assert_eq!(roundtrip.kind(), io::ErrorKind::NotFound);
    }
}
