//! Display formatting for equations and token streams

use super::ParsedEquation;
use std::fmt;

impl fmt::Display for ParsedEquation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.clean)
    }
}

impl ParsedEquation {
    /// Render the token stream back to text
    ///
    /// Brackets are printed as `(`/`)` whatever was written, and stray NOTs that the
    /// tokenizer discarded are gone, so this can differ from [`clean_equation`].
    ///
    /// [`clean_equation`]: ParsedEquation::clean_equation
    pub fn token_string(&self) -> String {
        self.tokens.iter().map(|token| token.to_string()).collect()
    }
}
