//! Truth-table sweeps over a parsed equation

use super::error::TermError;
use super::TermSets;
use crate::bits::{binary_string, decode_binary};
use crate::expression::{EvalError, ParsedEquation};
use std::sync::Arc;

/// One evaluated input row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthRow {
    /// Term index of `input`
    pub term: usize,
    /// Input bits, ordered by the equation's variables
    pub input: String,
    /// Value of the equation for `input`
    pub value: bool,
}

/// Result of evaluating an equation over a list of inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    variables: Arc<[char]>,
    rows: Vec<TruthRow>,
}

impl TruthTable {
    /// Evaluate every row `0..max_inputs()` in term order
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_algebra::{ParsedEquation, TruthTable};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let eq = ParsedEquation::parse("A ^ B")?;
    /// let table = TruthTable::full(&eq)?;
    /// let values: Vec<bool> = table.rows().iter().map(|row| row.value).collect();
    /// assert_eq!(values, vec![false, true, true, false]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn full(equation: &ParsedEquation) -> Result<Self, EvalError> {
        let width = equation.variable_count();
        let inputs = (0..equation.max_inputs()).map(|term| binary_string(term, width));
        Self::from_inputs(equation, inputs)
    }

    /// Evaluate caller-supplied input rows, in the order given
    ///
    /// The term of each row is its input decoded as a binary number. The first input
    /// that fails to evaluate aborts the sweep.
    pub fn from_inputs<I, S>(equation: &ParsedEquation, inputs: I) -> Result<Self, EvalError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows = inputs
            .into_iter()
            .map(|input| {
                let input = input.as_ref();
                let value = equation.evaluate(input)?;
                Ok(TruthRow {
                    term: decode_binary(input),
                    input: input.to_string(),
                    value,
                })
            })
            .collect::<Result<Vec<_>, EvalError>>()?;

        Ok(TruthTable {
            variables: Arc::from(equation.variables()),
            rows,
        })
    }

    pub fn variables(&self) -> &[char] {
        &self.variables
    }

    pub fn rows(&self) -> &[TruthRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sort every row into minterms and maxterms, skipping `dont_cares`
    pub fn classify<I: IntoIterator<Item = usize>>(&self, dont_cares: I) -> TermSets {
        let mut sets = TermSets::with_dont_cares(dont_cares);
        for row in &self.rows {
            sets.classify(row.term, row.value);
        }
        sets
    }

    /// Compare this table row by row against `other`
    ///
    /// Both tables must be over the same variables and hold the same number of rows.
    /// Rows are paired by position, so both tables should have been built from the
    /// same inputs.
    pub fn compare(&self, other: &TruthTable) -> Result<Vec<TermComparison>, TermError> {
        if self.variables != other.variables {
            return Err(TermError::VariableMismatch {
                expected: Arc::clone(&self.variables),
                found: Arc::clone(&other.variables),
            });
        }
        if self.rows.len() != other.rows.len() {
            return Err(TermError::RowCountMismatch {
                expected: self.rows.len(),
                found: other.rows.len(),
            });
        }

        Ok(self
            .rows
            .iter()
            .zip(other.rows.iter())
            .map(|(expected, actual)| TermComparison {
                term: expected.term,
                expected: expected.value,
                actual: actual.value,
            })
            .collect())
    }
}

/// The values of two equations for the same term
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermComparison {
    pub term: usize,
    /// Value of the reference equation
    pub expected: bool,
    /// Value of the equation under test
    pub actual: bool,
}

impl TermComparison {
    pub fn is_equal(&self) -> bool {
        self.expected == self.actual
    }
}
