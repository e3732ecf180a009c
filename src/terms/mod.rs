//! Minterm, maxterm and don't-care term sets
//!
//! A term index numbers one truth-table row: the row's input bits, ordered by the
//! sorted unique-variable list, read as an MSB-first binary number.
//!
//! [`TermSets`] keeps the three classifications apart. Don't-care terms are supplied
//! by the caller and are checked first, so they never land in the minterm or maxterm
//! set no matter what the equation evaluates to.

pub mod error;
mod table;

pub use error::TermError;
pub use table::{TermComparison, TruthRow, TruthTable};

use std::collections::BTreeSet;
use std::fmt::Write as _;
use std::sync::Arc;

/// Classification of a single term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TermClass {
    /// The equation is true for this term
    Minterm,
    /// The equation is false for this term
    Maxterm,
    /// Excluded from classification by the caller
    DontCare,
}

impl TermClass {
    /// Single-character cell marker: `1`, `0` or `X`
    pub fn symbol(self) -> char {
        match self {
            TermClass::Minterm => '1',
            TermClass::Maxterm => '0',
            TermClass::DontCare => 'X',
        }
    }
}

/// The minterm, maxterm and don't-care sets of one equation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermSets {
    minterms: BTreeSet<usize>,
    maxterms: BTreeSet<usize>,
    dont_cares: BTreeSet<usize>,
}

impl TermSets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a known set of don't-care terms
    pub fn with_dont_cares<I: IntoIterator<Item = usize>>(dont_cares: I) -> Self {
        TermSets {
            dont_cares: dont_cares.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Record the evaluated `value` of `term`
    ///
    /// Don't-care terms are left out of both the minterm and the maxterm set.
    /// Re-classifying a term moves it to the set matching the new value.
    pub fn classify(&mut self, term: usize, value: bool) -> TermClass {
        if self.dont_cares.contains(&term) {
            return TermClass::DontCare;
        }
        if value {
            self.maxterms.remove(&term);
            self.minterms.insert(term);
            TermClass::Minterm
        } else {
            self.minterms.remove(&term);
            self.maxterms.insert(term);
            TermClass::Maxterm
        }
    }

    /// Classification of `term`, or `None` if it was never recorded
    pub fn class_of(&self, term: usize) -> Option<TermClass> {
        if self.dont_cares.contains(&term) {
            Some(TermClass::DontCare)
        } else if self.minterms.contains(&term) {
            Some(TermClass::Minterm)
        } else if self.maxterms.contains(&term) {
            Some(TermClass::Maxterm)
        } else {
            None
        }
    }

    /// Classification used for grid cells: don't-care, then minterm, else maxterm
    pub fn cell_class(&self, term: usize) -> TermClass {
        match self.class_of(term) {
            Some(class) => class,
            None => TermClass::Maxterm,
        }
    }

    pub fn minterms(&self) -> &BTreeSet<usize> {
        &self.minterms
    }

    pub fn maxterms(&self) -> &BTreeSet<usize> {
        &self.maxterms
    }

    pub fn dont_cares(&self) -> &BTreeSet<usize> {
        &self.dont_cares
    }

    pub fn minterms_mut(&mut self) -> &mut BTreeSet<usize> {
        &mut self.minterms
    }

    pub fn maxterms_mut(&mut self) -> &mut BTreeSet<usize> {
        &mut self.maxterms
    }

    pub fn dont_cares_mut(&mut self) -> &mut BTreeSet<usize> {
        &mut self.dont_cares
    }

    /// Sum-of-minterms notation, e.g. `m(1, 3) + d(4)`
    pub fn minterm_notation(&self) -> String {
        self.notation('m', &self.minterms)
    }

    /// Product-of-maxterms notation, e.g. `M(0, 2) + d(4)`
    pub fn maxterm_notation(&self) -> String {
        self.notation('M', &self.maxterms)
    }

    fn notation(&self, prefix: char, terms: &BTreeSet<usize>) -> String {
        let mut out = format!("{}({})", prefix, join_terms(terms));
        if !self.dont_cares.is_empty() {
            let _ = write!(out, " + d({})", join_terms(&self.dont_cares));
        }
        out
    }
}

fn join_terms(terms: &BTreeSet<usize>) -> String {
    terms
        .iter()
        .map(|term| term.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse a comma-separated list of don't-care terms
///
/// Whitespace is ignored and empty entries are skipped, so `""` and `"1, 2,"` are
/// both accepted.
///
/// # Examples
///
/// ```
/// use binary_algebra::terms::parse_dont_cares;
///
/// assert_eq!(parse_dont_cares(" 3, 5 ,7").unwrap(), vec![3, 5, 7]);
/// assert!(parse_dont_cares("3, x").is_err());
/// ```
pub fn parse_dont_cares(text: &str) -> Result<Vec<usize>, TermError> {
    let compact: String = text.chars().filter(|ch| !ch.is_whitespace()).collect();
    compact
        .split(',')
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<usize>().map_err(|_| TermError::InvalidDontCare {
                token: Arc::from(token),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_splits_minterms_and_maxterms() {
        let mut sets = TermSets::new();
        assert_eq!(sets.classify(0, false), TermClass::Maxterm);
        assert_eq!(sets.classify(1, true), TermClass::Minterm);
        assert_eq!(sets.classify(3, true), TermClass::Minterm);
        assert_eq!(sets.minterms().iter().copied().collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(sets.maxterms().iter().copied().collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn test_dont_care_checked_first() {
        let mut sets = TermSets::with_dont_cares([2]);
        assert_eq!(sets.classify(2, true), TermClass::DontCare);
        assert_eq!(sets.classify(2, false), TermClass::DontCare);
        assert!(sets.minterms().is_empty());
        assert!(sets.maxterms().is_empty());
        assert_eq!(sets.class_of(2), Some(TermClass::DontCare));
    }

    #[test]
    fn test_reclassify_moves_term() {
        let mut sets = TermSets::new();
        sets.classify(5, true);
        sets.classify(5, false);
        assert!(!sets.minterms().contains(&5));
        assert!(sets.maxterms().contains(&5));
    }

    #[test]
    fn test_cell_class_defaults_to_maxterm() {
        let mut sets = TermSets::new();
        sets.classify(1, true);
        assert_eq!(sets.class_of(0), None);
        assert_eq!(sets.cell_class(0), TermClass::Maxterm);
        assert_eq!(sets.cell_class(1), TermClass::Minterm);
    }

    #[test]
    fn test_mutable_access() {
        let mut sets = TermSets::new();
        sets.dont_cares_mut().insert(4);
        sets.minterms_mut().insert(1);
        sets.maxterms_mut().insert(0);
        assert_eq!(sets.cell_class(4), TermClass::DontCare);
        assert_eq!(sets.cell_class(1), TermClass::Minterm);
        assert_eq!(sets.cell_class(0), TermClass::Maxterm);
    }

    #[test]
    fn test_notation() {
        let mut sets = TermSets::new();
        for (term, value) in [(0, false), (1, true), (2, false), (3, true)] {
            sets.classify(term, value);
        }
        assert_eq!(sets.minterm_notation(), "m(1, 3)");
        assert_eq!(sets.maxterm_notation(), "M(0, 2)");

        sets.dont_cares_mut().extend([6, 4]);
        assert_eq!(sets.minterm_notation(), "m(1, 3) + d(4, 6)");
        assert_eq!(sets.maxterm_notation(), "M(0, 2) + d(4, 6)");
    }

    #[test]
    fn test_notation_empty() {
        assert_eq!(TermSets::new().minterm_notation(), "m()");
    }

    #[test]
    fn test_parse_dont_cares() {
        assert_eq!(parse_dont_cares("").unwrap(), Vec::<usize>::new());
        assert_eq!(parse_dont_cares("4").unwrap(), vec![4]);
        assert_eq!(parse_dont_cares("1, 2,").unwrap(), vec![1, 2]);
        assert_eq!(parse_dont_cares("1 0 , 2").unwrap(), vec![10, 2]);
    }

    #[test]
    fn test_parse_dont_cares_rejects_garbage() {
        assert_eq!(
            parse_dont_cares("1,-2"),
            Err(TermError::InvalidDontCare {
                token: Arc::from("-2")
            })
        );
        assert!(parse_dont_cares("a").is_err());
    }
}
