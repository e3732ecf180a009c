//! Error types for equation parsing and evaluation

use super::token::TokenKind;
use std::fmt;
use std::io;

/// Errors produced while normalizing and tokenizing an equation
///
/// Both variants abort the parse; no partial token stream is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The equation was empty or contained only whitespace
    EmptyInput,
    /// A character outside the equation alphabet was found
    InvalidLiteral {
        /// The offending character, as written in the input
        literal: char,
        /// Character index in the raw input
        position: usize,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::EmptyInput => write!(f, "No equation given"),
            ParseError::InvalidLiteral { literal, position } => write!(
                f,
                "Invalid literal {:?} in equation at position {}",
                literal, position
            ),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<ParseError> for io::Error {
    fn from(err: ParseError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

/// Errors produced while evaluating a parsed equation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// The input bit-string does not have one bit per variable
    InputLengthMismatch {
        /// Number of variables in the equation
        expected: usize,
        /// Number of bits supplied
        found: usize,
    },
    /// The input contains something other than `'0'` or `'1'`
    InvalidBit {
        /// The offending character
        bit: char,
        /// Index of the character in the input
        position: usize,
    },
    /// The token stream is not a well-formed expression
    ///
    /// Raised for unbalanced groups, operators missing an operand, and trailing
    /// tokens after a complete expression.
    Syntax {
        /// Index of the offending token in the token stream
        position: usize,
        /// Kind of the token found at that position
        found: TokenKind,
    },
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::InputLengthMismatch { expected, found } => write!(
                f,
                "Input has {} bit(s) but the equation has {} variable(s)",
                found, expected
            ),
            EvalError::InvalidBit { bit, position } => write!(
                f,
                "Invalid input bit {:?} at position {}. Only 1s and 0s are permitted",
                bit, position
            ),
            EvalError::Syntax { position, found } => write!(
                f,
                "Syntax error in equation: unexpected {} at token {}",
                found, position
            ),
        }
    }
}

impl std::error::Error for EvalError {}

impl From<EvalError> for io::Error {
    fn from(err: EvalError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}
