//! Loading equations from files and readers

use super::error::ParseError;
use super::ParsedEquation;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

impl ParsedEquation {
    /// Parse the equation on the first line of `reader`
    ///
    /// The line terminator is dropped before parsing. An empty reader or a blank first
    /// line yields [`ParseError::EmptyInput`], reported as [`io::ErrorKind::InvalidData`].
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_algebra::ParsedEquation;
    /// use std::io::BufReader;
    ///
    /// # fn main() -> std::io::Result<()> {
    /// let reader = BufReader::new("A'B + C\nignored\n".as_bytes());
    /// let eq = ParsedEquation::from_reader(reader)?;
    /// assert_eq!(eq.clean_equation(), "A'*B+C");
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<Self> {
        let line = reader
            .lines()
            .next()
            .transpose()?
            .ok_or(ParseError::EmptyInput)?;
        Ok(ParsedEquation::parse(&line)?)
    }

    /// Parse the equation on the first line of the file at `path`
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_reader_uses_first_line() {
        let eq = ParsedEquation::from_reader("AB\r\nC\n".as_bytes()).unwrap();
        assert_eq!(eq.clean_equation(), "A*B");
    }

    #[test]
    fn test_from_reader_empty() {
        let err = ParsedEquation::from_reader("".as_bytes()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_from_reader_invalid_literal() {
        let err = ParsedEquation::from_reader("A & B\n".as_bytes()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert!(err.to_string().contains("'&'"));
    }
}
