//! End-to-end solving: parse, sweep the truth table, classify terms
//!
//! [`solve`] runs the whole pipeline for one equation and, optionally, a reference
//! equation to compare against. Its behaviour is controlled by [`SolverConfig`].

use crate::error::SolverError;
use crate::expression::ParsedEquation;
use crate::kmap::{AxisOrder, KarnaughMap};
use crate::terms::{TermComparison, TermError, TermSets, TruthTable};
use std::sync::Arc;

/// Configuration for [`solve`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolverConfig {
    /// Input rows to evaluate; `None` evaluates every term in order
    pub inputs: Option<Vec<String>>,
    /// Terms excluded from minterm/maxterm classification
    pub dont_cares: Vec<usize>,
    /// Reference equation to compare against, evaluated on the same inputs
    pub comparison: Option<String>,
    /// Header ordering for Karnaugh maps built from the solution
    pub order: AxisOrder,
}

impl SolverConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }
}

/// Truth table and term sets of a reference equation
#[derive(Debug, Clone)]
pub struct Comparison {
    pub equation: ParsedEquation,
    pub table: TruthTable,
    pub terms: TermSets,
    /// Row-by-row values, reference first
    pub rows: Vec<TermComparison>,
}

impl Comparison {
    /// `true` if both equations agree on every evaluated row
    pub fn is_equivalent(&self) -> bool {
        self.rows.iter().all(TermComparison::is_equal)
    }

    /// Terms on which the equations disagree
    pub fn mismatches(&self) -> Vec<usize> {
        self.rows
            .iter()
            .filter(|row| !row.is_equal())
            .map(|row| row.term)
            .collect()
    }
}

/// Everything [`solve`] computed
#[derive(Debug, Clone)]
pub struct Solution {
    pub equation: ParsedEquation,
    pub table: TruthTable,
    pub terms: TermSets,
    pub comparison: Option<Comparison>,
    order: AxisOrder,
}

impl Solution {
    /// Build a Karnaugh map of the solved equation with the given axes
    pub fn karnaugh_map(&self, columns: &str, rows: &str) -> Result<KarnaughMap, SolverError> {
        let mut map = KarnaughMap::from_equation(&self.equation, self.terms.clone());
        map.set_order(self.order);
        map.set_column_vars(columns)?;
        map.set_row_vars(rows)?;
        Ok(map)
    }
}

/// Parse `equation`, evaluate it and classify every evaluated term
///
/// Syntax errors are reported up front, before any input is evaluated. Don't-care
/// terms must exist in the truth table. A comparison equation must use exactly the
/// same variables.
///
/// # Examples
///
/// ```
/// use binary_algebra::{solve, SolverConfig};
///
/// # fn main() -> Result<(), binary_algebra::SolverError> {
/// let config = SolverConfig {
///     dont_cares: vec![3],
///     comparison: Some("A'B + AB'".to_string()),
///     ..SolverConfig::default()
/// };
/// let solution = solve("A ^ B", &config)?;
/// assert_eq!(solution.terms.minterm_notation(), "m(1, 2) + d(3)");
/// assert!(solution.comparison.unwrap().is_equivalent());
/// # Ok(())
/// # }
/// ```
pub fn solve(equation: &str, config: &SolverConfig) -> Result<Solution, SolverError> {
    let equation = ParsedEquation::parse(equation)?;
    equation.check_syntax()?;

    let max_inputs = equation.max_inputs();
    if let Some(&term) = config.dont_cares.iter().find(|&&term| term >= max_inputs) {
        return Err(TermError::DontCareOutOfRange { term, max_inputs }.into());
    }

    let table = sweep(&equation, config)?;
    let terms = table.classify(config.dont_cares.iter().copied());

    let comparison = match &config.comparison {
        Some(text) => {
            let reference = ParsedEquation::parse(text)?;
            reference.check_syntax()?;
            if reference.variables() != equation.variables() {
                return Err(TermError::VariableMismatch {
                    expected: Arc::from(reference.variables()),
                    found: Arc::from(equation.variables()),
                }
                .into());
            }
            let reference_table = sweep(&reference, config)?;
            let rows = reference_table.compare(&table)?;
            Some(Comparison {
                terms: reference_table.classify(config.dont_cares.iter().copied()),
                equation: reference,
                table: reference_table,
                rows,
            })
        }
        None => None,
    };

    Ok(Solution {
        equation,
        table,
        terms,
        comparison,
        order: config.order,
    })
}

fn sweep(equation: &ParsedEquation, config: &SolverConfig) -> Result<TruthTable, SolverError> {
    let table = match &config.inputs {
        Some(inputs) => TruthTable::from_inputs(equation, inputs)?,
        None => TruthTable::full(equation)?,
    };
    Ok(table)
}
