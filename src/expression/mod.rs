//! Boolean-algebra equations: parsing, normalization and evaluation
//!
//! An equation is written over single-letter variables with the operators
//! `*` (AND), `+` (OR), `^` (XOR) and the postfix `'` (NOT). Adjacent operands are
//! ANDed implicitly, so `AB'C` means `A * B' * C`.
//!
//! # Main Types
//!
//! - [`ParsedEquation`] - the normalized equation, its token stream and its sorted
//!   unique-variable list. Immutable once parsed.
//! - [`Token`] / [`TokenKind`] - the token vocabulary consumed by the evaluator.
//! - [`ParseError`] / [`EvalError`] - everything that can go wrong.
//!
//! # Quick Start
//!
//! ```
//! use binary_algebra::ParsedEquation;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let eq = ParsedEquation::parse("(A + B)'C")?;
//! assert_eq!(eq.clean_equation(), "(A+B)'*C");
//! assert_eq!(eq.variables(), &['A', 'B', 'C']);
//! assert_eq!(eq.max_inputs(), 8);
//!
//! // Bits follow the sorted variable order: A=0, B=0, C=1
//! assert!(eq.evaluate("001")?);
//! # Ok(())
//! # }
//! ```
//!
//! # Precedence
//!
//! From highest to lowest:
//! 1. `'` (NOT, postfix on a literal or a bracketed group)
//! 2. `*` (AND, explicit or implicit)
//! 3. `+` and `^` (OR and XOR, same level, left to right)

mod display;
pub mod error;
mod eval;
mod io;
mod parser;
mod token;

pub use error::{EvalError, ParseError};
pub use eval::evaluate;
pub use parser::parse;
pub use token::{Literal, Operand, Token, TokenKind};

/// A successfully parsed equation
///
/// Holds the normalized text, the token stream terminated by [`Token::End`], and the
/// distinct variables sorted ascending. The variable order defines how evaluation
/// inputs are bound and how term indices are numbered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEquation {
    clean: String,
    tokens: Vec<Token>,
    variables: Vec<char>,
}

impl ParsedEquation {
    /// The normalized equation: no whitespace, uppercase, implicit `*` made explicit
    ///
    /// A `*` is only inserted between two operands, so brackets are not padded:
    /// `(a+b)c` cleans to `(A+B)*C`, never `(*A+B*)*C`.
    pub fn clean_equation(&self) -> &str {
        &self.clean
    }

    /// The token stream, always ending with [`Token::End`]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Distinct variables, sorted ascending
    pub fn variables(&self) -> &[char] {
        &self.variables
    }

    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    /// Number of truth-table rows, `2^variable_count()`
    pub fn max_inputs(&self) -> usize {
        1usize << self.variables.len()
    }
}
