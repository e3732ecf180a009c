//! Normalization and tokenization of equation text
//!
//! Parsing runs in three passes over the input:
//!
//! 1. strip whitespace, uppercase letters and classify every character,
//! 2. insert the implicit `*` between adjacent operands,
//! 3. split the normalized text into [`Token`]s and resolve each variable to its
//!    slot in the sorted unique-variable list.
//!
//! No grammar checking happens here. Unbalanced brackets and dangling operators are
//! reported by the evaluator as [`EvalError::Syntax`](super::EvalError::Syntax).

use super::error::ParseError;
use super::token::{CharClass, Literal, Operand, Token};
use super::ParsedEquation;
use std::collections::BTreeSet;
use std::str::FromStr;

const IMPLICIT_AND: (char, CharClass) = ('*', CharClass::Operator);

impl ParsedEquation {
    /// Parse an equation from text
    ///
    /// Accepted syntax:
    /// - letters `A`-`Z` (case-insensitive) as variables
    /// - `0` / `1` as constants
    /// - `*` AND, `+` OR, `^` XOR; adjacent operands are ANDed implicitly
    /// - `'` as postfix NOT on a literal or a bracketed group
    /// - `()`, `[]`, `{}` for grouping (bracket types are interchangeable)
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_algebra::ParsedEquation;
    ///
    /// # fn main() -> Result<(), binary_algebra::ParseError> {
    /// let eq = ParsedEquation::parse("a'b + (c ^ 1)")?;
    /// assert_eq!(eq.clean_equation(), "A'*B+(C^1)");
    /// assert_eq!(eq.variables(), &['A', 'B', 'C']);
    /// # Ok(())
    /// # }
    /// ```
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        if input.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let classified = classify(input)?;
        if classified.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let normalized = insert_implicit_and(&classified);
        let variables: Vec<char> = normalized
            .iter()
            .filter(|(_, class)| *class == CharClass::Variable)
            .map(|(ch, _)| *ch)
            .collect::<BTreeSet<char>>()
            .into_iter()
            .collect();
        let tokens = tokenize(&normalized, &variables);

        Ok(ParsedEquation {
            clean: normalized.iter().map(|(ch, _)| *ch).collect(),
            tokens,
            variables,
        })
    }
}

impl FromStr for ParsedEquation {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ParsedEquation::parse(s)
    }
}

/// Parse an equation from text, see [`ParsedEquation::parse`]
pub fn parse(input: &str) -> Result<ParsedEquation, ParseError> {
    ParsedEquation::parse(input)
}

/// Drop whitespace, uppercase, and classify each remaining character
fn classify(input: &str) -> Result<Vec<(char, CharClass)>, ParseError> {
    input
        .chars()
        .enumerate()
        .filter(|(_, ch)| !ch.is_whitespace())
        .map(|(position, raw)| {
            let ch = raw.to_ascii_uppercase();
            CharClass::of(ch)
                .map(|class| (ch, class))
                .ok_or(ParseError::InvalidLiteral {
                    literal: raw,
                    position,
                })
        })
        .collect()
}

/// Insert `*` wherever one operand directly follows another
///
/// A single postfix NOT may sit between the two operands (`A'B`); the `*` then goes
/// after the NOT so negation keeps binding tighter. Only one character past the NOT
/// is inspected, so `A''B` is left alone.
fn insert_implicit_and(chars: &[(char, CharClass)]) -> Vec<(char, CharClass)> {
    let mut out = Vec::with_capacity(chars.len() * 2);

    for (i, &(ch, class)) in chars.iter().enumerate() {
        out.push((ch, class));

        let Some(&(_, next)) = chars.get(i + 1) else {
            break;
        };
        let closes_operand = class.ends_operand()
            || (class == CharClass::PostfixNot && i > 0 && chars[i - 1].1.ends_operand());
        if closes_operand && next.begins_operand() {
            out.push(IMPLICIT_AND);
        }
    }

    out
}

/// Split normalized text into tokens, terminated by [`Token::End`]
fn tokenize(chars: &[(char, CharClass)], variables: &[char]) -> Vec<Token> {
    let mut slots = [0usize; 26];
    for (slot, var) in variables.iter().enumerate() {
        slots[(*var as u8 - b'A') as usize] = slot;
    }

    let mut tokens = Vec::with_capacity(chars.len() + 1);
    let mut iter = chars.iter().peekable();

    while let Some(&(ch, class)) = iter.next() {
        let token = match class {
            CharClass::Variable | CharClass::Constant => {
                let negated = iter
                    .next_if(|(_, next)| *next == CharClass::PostfixNot)
                    .is_some();
                let operand = if class == CharClass::Constant {
                    Operand::Constant(ch == '1')
                } else {
                    Operand::Variable(slots[(ch as u8 - b'A') as usize])
                };
                Token::Literal(Literal {
                    symbol: ch,
                    negated,
                    operand,
                })
            }
            CharClass::Operator => match ch {
                '+' => Token::Or,
                '*' => Token::And,
                _ => Token::Xor,
            },
            CharClass::OpenGroup => Token::LeftGroup,
            CharClass::CloseGroup => Token::RightGroup,
            CharClass::PostfixNot => {
                // Only meaningful right after a closed group, dropped otherwise
                if tokens.last() != Some(&Token::RightGroup) {
                    continue;
                }
                Token::GroupNegate
            }
        };
        tokens.push(token);
    }

    tokens.push(Token::End);
    tokens
}
