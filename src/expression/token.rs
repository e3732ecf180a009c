//! Token vocabulary of the equation language

use std::fmt;

/// Classification of a single normalized equation character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CharClass {
    /// `A`-`Z`
    Variable,
    /// `0` or `1`
    Constant,
    /// `+`, `*` or `^`
    Operator,
    /// `(`, `[` or `{`
    OpenGroup,
    /// `)`, `]` or `}`
    CloseGroup,
    /// `'`
    PostfixNot,
}

impl CharClass {
    /// Classify a character, returning `None` for anything outside the alphabet
    pub(crate) fn of(ch: char) -> Option<Self> {
        match ch {
            c if c.is_ascii_alphabetic() => Some(CharClass::Variable),
            '0' | '1' => Some(CharClass::Constant),
            '+' | '*' | '^' => Some(CharClass::Operator),
            '(' | '[' | '{' => Some(CharClass::OpenGroup),
            ')' | ']' | '}' => Some(CharClass::CloseGroup),
            '\'' => Some(CharClass::PostfixNot),
            _ => None,
        }
    }

    /// Characters that can finish an operand: literals and closing brackets
    pub(crate) fn ends_operand(self) -> bool {
        matches!(
            self,
            CharClass::Variable | CharClass::Constant | CharClass::CloseGroup
        )
    }

    /// Characters that can start an operand: literals and opening brackets
    pub(crate) fn begins_operand(self) -> bool {
        matches!(
            self,
            CharClass::Variable | CharClass::Constant | CharClass::OpenGroup
        )
    }
}

/// The kind of a [`Token`], without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Literal,
    And,
    Or,
    Xor,
    LeftGroup,
    RightGroup,
    GroupNegate,
    End,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Literal => "literal",
            TokenKind::And => "'*'",
            TokenKind::Or => "'+'",
            TokenKind::Xor => "'^'",
            TokenKind::LeftGroup => "opening bracket",
            TokenKind::RightGroup => "closing bracket",
            TokenKind::GroupNegate => "group negation",
            TokenKind::End => "end of equation",
        };
        f.write_str(name)
    }
}

/// What a literal reads its value from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operand {
    /// One of the reserved constants `0` / `1`
    Constant(bool),
    /// Position of the variable in the sorted unique-variable list
    Variable(usize),
}

/// A variable or constant occurrence in the token stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Literal {
    pub(crate) symbol: char,
    pub(crate) negated: bool,
    pub(crate) operand: Operand,
}

impl Literal {
    /// The variable letter or constant digit
    pub fn symbol(&self) -> char {
        self.symbol
    }

    /// Whether a postfix NOT followed this literal
    pub fn is_negated(&self) -> bool {
        self.negated
    }

    pub fn operand(&self) -> Operand {
        self.operand
    }

    /// Value of this literal under `values`, indexed by variable slot
    #[inline]
    pub(crate) fn value(&self, values: &[bool]) -> bool {
        let raw = match self.operand {
            Operand::Constant(value) => value,
            Operand::Variable(slot) => values[slot],
        };
        raw != self.negated
    }
}

/// One unit of a normalized equation
///
/// Every token stream produced by the parser ends with exactly one [`Token::End`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    Literal(Literal),
    And,
    Or,
    Xor,
    LeftGroup,
    RightGroup,
    /// A postfix NOT applied to the group that was just closed
    GroupNegate,
    End,
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Literal(_) => TokenKind::Literal,
            Token::And => TokenKind::And,
            Token::Or => TokenKind::Or,
            Token::Xor => TokenKind::Xor,
            Token::LeftGroup => TokenKind::LeftGroup,
            Token::RightGroup => TokenKind::RightGroup,
            Token::GroupNegate => TokenKind::GroupNegate,
            Token::End => TokenKind::End,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Literal(lit) if lit.negated => write!(f, "{}'", lit.symbol),
            Token::Literal(lit) => write!(f, "{}", lit.symbol),
            Token::And => f.write_str("*"),
            Token::Or => f.write_str("+"),
            Token::Xor => f.write_str("^"),
            Token::LeftGroup => f.write_str("("),
            Token::RightGroup => f.write_str(")"),
            Token::GroupNegate => f.write_str("'"),
            Token::End => Ok(()),
        }
    }
}
