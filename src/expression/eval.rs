//! Recursive-descent evaluation over a parsed token stream
//!
//! Grammar, one cursor and no backtracking:
//!
//! ```text
//! Expression := Term ( ( '+' | '^' ) Term )*
//! Term       := Factor ( '*' Factor )*
//! Factor     := Literal | '(' Expression ')' [ GroupNegate ]
//! ```
//!
//! The cursor lives in a per-call [`Evaluator`], so a [`ParsedEquation`] can be
//! evaluated from any number of places at once.

use super::error::EvalError;
use super::token::Token;
use super::ParsedEquation;
use crate::bits::binary_string;

/// Cursor over a token stream bound to one variable assignment
struct Evaluator<'a> {
    tokens: &'a [Token],
    values: &'a [bool],
    cursor: usize,
}

impl<'a> Evaluator<'a> {
    fn new(tokens: &'a [Token], values: &'a [bool]) -> Self {
        Evaluator {
            tokens,
            values,
            cursor: 0,
        }
    }

    /// Current token; past the end reads as [`Token::End`]
    fn peek(&self) -> Token {
        self.tokens.get(self.cursor).copied().unwrap_or(Token::End)
    }

    fn advance(&mut self) {
        self.cursor += 1;
    }

    fn syntax_error(&self) -> EvalError {
        EvalError::Syntax {
            position: self.cursor,
            found: self.peek().kind(),
        }
    }

    /// Evaluate the whole stream; the expression must end exactly at `End`
    fn run(mut self) -> Result<bool, EvalError> {
        let result = self.expression()?;
        match self.peek() {
            Token::End => Ok(result),
            _ => Err(self.syntax_error()),
        }
    }

    fn expression(&mut self) -> Result<bool, EvalError> {
        let mut result = self.term()?;
        loop {
            match self.peek() {
                Token::Or => {
                    self.advance();
                    let rhs = self.term()?;
                    result = result || rhs;
                }
                Token::Xor => {
                    self.advance();
                    let rhs = self.term()?;
                    result ^= rhs;
                }
                _ => return Ok(result),
            }
        }
    }

    fn term(&mut self) -> Result<bool, EvalError> {
        let mut result = self.factor()?;
        while self.peek() == Token::And {
            self.advance();
            let rhs = self.factor()?;
            result = result && rhs;
        }
        Ok(result)
    }

    fn factor(&mut self) -> Result<bool, EvalError> {
        match self.peek() {
            Token::Literal(literal) => {
                self.advance();
                Ok(literal.value(self.values))
            }
            Token::LeftGroup => {
                self.advance();
                let mut result = self.expression()?;
                if self.peek() != Token::RightGroup {
                    return Err(self.syntax_error());
                }
                self.advance();
                if self.peek() == Token::GroupNegate {
                    self.advance();
                    result = !result;
                }
                Ok(result)
            }
            _ => Err(self.syntax_error()),
        }
    }
}

impl ParsedEquation {
    /// Evaluate the equation for one input row
    ///
    /// `bits[i]` is bound to `variables()[i]`, so the bits follow the sorted
    /// unique-variable order. Every operand is evaluated (no short-circuiting), so a
    /// malformed equation fails with [`EvalError::Syntax`] for every input.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_algebra::ParsedEquation;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let eq = ParsedEquation::parse("A'B")?;
    /// assert!(!eq.evaluate("01")?);
    /// assert!(eq.evaluate("10")?);
    /// assert!(eq.evaluate("1").is_err());
    /// # Ok(())
    /// # }
    /// ```
    pub fn evaluate(&self, bits: &str) -> Result<bool, EvalError> {
        let found = bits.chars().count();
        if found != self.variables.len() {
            return Err(EvalError::InputLengthMismatch {
                expected: self.variables.len(),
                found,
            });
        }

        let values = bits
            .chars()
            .enumerate()
            .map(|(position, bit)| match bit {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => Err(EvalError::InvalidBit { bit, position }),
            })
            .collect::<Result<Vec<bool>, _>>()?;

        Evaluator::new(&self.tokens, &values).run()
    }

    /// Evaluate the equation for an already decoded assignment
    ///
    /// `values[i]` is the value of `variables()[i]`.
    pub fn evaluate_values(&self, values: &[bool]) -> Result<bool, EvalError> {
        if values.len() != self.variables.len() {
            return Err(EvalError::InputLengthMismatch {
                expected: self.variables.len(),
                found: values.len(),
            });
        }
        Evaluator::new(&self.tokens, values).run()
    }

    /// Evaluate the truth-table row with index `term`
    pub fn evaluate_term(&self, term: usize) -> Result<bool, EvalError> {
        self.evaluate(&binary_string(term, self.variables.len()))
    }

    /// Check the token stream against the grammar
    ///
    /// Syntax does not depend on the input, so a single evaluation with every
    /// variable false catches every structural error.
    pub fn check_syntax(&self) -> Result<(), EvalError> {
        let values = vec![false; self.variables.len()];
        Evaluator::new(&self.tokens, &values).run().map(|_| ())
    }
}

/// Evaluate `parsed` for one input row, see [`ParsedEquation::evaluate`]
pub fn evaluate(parsed: &ParsedEquation, bits: &str) -> Result<bool, EvalError> {
    parsed.evaluate(bits)
}
