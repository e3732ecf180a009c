//! Karnaugh-style term maps
//!
//! A [`KarnaughMap`] splits an equation's variables into a column axis and a row
//! axis, labels each axis with every combination of its variables, and classifies
//! every cell of the resulting grid as minterm, maxterm or don't-care.
//!
//! # Axis rules
//!
//! For `N` variables the two axes must hold `N / 2` and `ceil(N / 2)` variables, and
//! no variable may appear twice or on both axes. Once one axis is fixed, the other
//! must take the remaining size.
//!
//! # Term numbering
//!
//! The term index of a cell does not depend on how variables were split between the
//! axes: the column and row bits are merged in alphabetical variable order and read
//! as one binary number. With [`AxisOrder::Gray`] the headers follow Gray code, so
//! neighbouring cells differ in exactly one variable.
//!
//! # Examples
//!
//! ```
//! use binary_algebra::{KarnaughMap, ParsedEquation, TermClass, TruthTable};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let eq = ParsedEquation::parse("AB + C")?;
//! let terms = TruthTable::full(&eq)?.classify([]);
//!
//! let mut map = KarnaughMap::from_equation(&eq, terms);
//! map.set_column_vars("ab")?;
//! map.set_row_vars("c")?;
//!
//! assert_eq!(map.column_headers(), vec!["00", "01", "11", "10"]);
//! assert_eq!(map.term_index("11", "0")?, 6);
//! assert_eq!(map.classify_cell("11", "0")?, TermClass::Minterm);
//! # Ok(())
//! # }
//! ```

mod display;
pub mod error;

pub use error::HeaderError;

use crate::bits::{binary_string, decode_binary, gray_code, is_valid_binary_input};
use crate::expression::ParsedEquation;
use crate::terms::{TermClass, TermSets};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// One of the two grid dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Column,
    Row,
}

impl Axis {
    /// The opposite axis
    pub fn other(self) -> Axis {
        match self {
            Axis::Column => Axis::Row,
            Axis::Row => Axis::Column,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Column => f.write_str("column"),
            Axis::Row => f.write_str("row"),
        }
    }
}

/// How axis header values are ordered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AxisOrder {
    /// Reflected Gray code: adjacent headers differ in one bit
    #[default]
    Gray,
    /// Natural binary counting
    Binary,
}

/// One grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub term: usize,
    pub class: TermClass,
}

/// A fully laid out map, ready for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub column_vars: Vec<char>,
    pub row_vars: Vec<char>,
    pub column_headers: Vec<String>,
    pub row_headers: Vec<String>,
    /// Indexed `cells[row][column]`
    pub cells: Vec<Vec<Cell>>,
}

/// Term map over an equation's variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KarnaughMap {
    variables: Vec<char>,
    columns: Vec<char>,
    rows: Vec<char>,
    terms: TermSets,
    order: AxisOrder,
}

impl KarnaughMap {
    /// Create a map over `variables` with no axes assigned yet
    ///
    /// Variables are uppercased, sorted and de-duplicated, matching the order
    /// [`ParsedEquation::variables`] produces.
    pub fn new<I: IntoIterator<Item = char>>(variables: I, terms: TermSets) -> Self {
        let mut variables: Vec<char> = variables
            .into_iter()
            .map(|var| var.to_ascii_uppercase())
            .collect();
        variables.sort_unstable();
        variables.dedup();
        KarnaughMap {
            variables,
            columns: Vec::new(),
            rows: Vec::new(),
            terms,
            order: AxisOrder::default(),
        }
    }

    /// Create a map over the variables of `equation`
    pub fn from_equation(equation: &ParsedEquation, terms: TermSets) -> Self {
        Self::new(equation.variables().iter().copied(), terms)
    }

    pub fn variables(&self) -> &[char] {
        &self.variables
    }

    pub fn column_vars(&self) -> &[char] {
        &self.columns
    }

    pub fn row_vars(&self) -> &[char] {
        &self.rows
    }

    pub fn axis_vars(&self, axis: Axis) -> &[char] {
        match axis {
            Axis::Column => &self.columns,
            Axis::Row => &self.rows,
        }
    }

    pub fn terms(&self) -> &TermSets {
        &self.terms
    }

    pub fn terms_mut(&mut self) -> &mut TermSets {
        &mut self.terms
    }

    pub fn order(&self) -> AxisOrder {
        self.order
    }

    pub fn set_order(&mut self, order: AxisOrder) {
        self.order = order;
    }

    /// Check `candidate` as the variable list for `axis`
    ///
    /// The candidate is uppercased before checking and returned on success. It is
    /// compared against the *other* axis only, so re-assigning an axis with the same
    /// variables is allowed.
    pub fn validate_axis(&self, axis: Axis, candidate: &str) -> Result<Vec<char>, HeaderError> {
        let candidate: Vec<char> = candidate.chars().map(|c| c.to_ascii_uppercase()).collect();
        if candidate.is_empty() {
            return Err(HeaderError::Empty);
        }

        let other = self.axis_vars(axis.other());
        for (i, &variable) in candidate.iter().enumerate() {
            if !self.variables.contains(&variable) {
                return Err(HeaderError::InvalidVariable { variable });
            }
            if candidate[..i].contains(&variable) || other.contains(&variable) {
                return Err(HeaderError::DuplicateVariable { variable });
            }
        }

        let expected = self.expected_lengths(axis);
        if !expected.contains(&candidate.len()) {
            return Err(HeaderError::DimensionMismatch {
                expected,
                found: candidate.len(),
            });
        }

        Ok(candidate)
    }

    /// Lengths `axis` may take given what the other axis already holds
    fn expected_lengths(&self, axis: Axis) -> Vec<usize> {
        let total = self.variables.len();
        let half = total / 2;
        let other_half = total - half;
        let other = self.axis_vars(axis.other()).len();

        if other > 0 {
            vec![total.saturating_sub(other)]
        } else if half == other_half {
            vec![half]
        } else {
            vec![half, other_half]
        }
    }

    /// Validate and store the variables of `axis`
    pub fn set_axis(&mut self, axis: Axis, candidate: &str) -> Result<(), HeaderError> {
        let vars = self.validate_axis(axis, candidate)?;
        match axis {
            Axis::Column => self.columns = vars,
            Axis::Row => self.rows = vars,
        }
        Ok(())
    }

    pub fn set_column_vars(&mut self, candidate: &str) -> Result<(), HeaderError> {
        self.set_axis(Axis::Column, candidate)
    }

    pub fn set_row_vars(&mut self, candidate: &str) -> Result<(), HeaderError> {
        self.set_axis(Axis::Row, candidate)
    }

    /// Header values of `axis` in the current [`AxisOrder`]
    ///
    /// An axis without variables has a single empty header.
    pub fn headers(&self, axis: Axis) -> Vec<String> {
        let width = self.axis_vars(axis).len();
        if width == 0 {
            return vec![String::new()];
        }
        match self.order {
            AxisOrder::Gray => gray_code(width),
            AxisOrder::Binary => (0..1usize << width)
                .map(|value| binary_string(value, width))
                .collect(),
        }
    }

    pub fn column_headers(&self) -> Vec<String> {
        self.headers(Axis::Column)
    }

    pub fn row_headers(&self) -> Vec<String> {
        self.headers(Axis::Row)
    }

    /// Term index of the cell at (`column_bits`, `row_bits`)
    ///
    /// Each value must have one binary digit per variable of its axis. The bits of
    /// both axes are merged in alphabetical variable order before decoding.
    pub fn term_index(&self, column_bits: &str, row_bits: &str) -> Result<usize, HeaderError> {
        let mut assignment = BTreeMap::new();

        for (axis, value) in [(Axis::Column, column_bits), (Axis::Row, row_bits)] {
            let vars = self.axis_vars(axis);
            if value.chars().count() != vars.len() || !is_valid_binary_input(value) {
                return Err(HeaderError::InvalidValue {
                    axis,
                    value: Arc::from(value),
                });
            }
            assignment.extend(vars.iter().copied().zip(value.chars()));
        }

        let bits: String = assignment.into_values().collect();
        Ok(decode_binary(&bits))
    }

    /// Classification of the cell at (`column_bits`, `row_bits`)
    pub fn classify_cell(&self, column_bits: &str, row_bits: &str) -> Result<TermClass, HeaderError> {
        let term = self.term_index(column_bits, row_bits)?;
        Ok(self.terms.cell_class(term))
    }

    /// Lay out every cell of the map
    ///
    /// Together the two axes must cover every variable. The row axis may only be
    /// empty for maps over a single variable.
    pub fn grid(&self) -> Result<Grid, HeaderError> {
        if self.columns.is_empty() {
            return Err(HeaderError::Empty);
        }
        let remaining = self.variables.len() - self.columns.len();
        if self.rows.len() != remaining {
            if self.rows.is_empty() {
                return Err(HeaderError::Empty);
            }
            return Err(HeaderError::DimensionMismatch {
                expected: vec![remaining],
                found: self.rows.len(),
            });
        }

        let column_headers = self.column_headers();
        let row_headers = self.row_headers();
        let cells = row_headers
            .iter()
            .map(|row| {
                column_headers
                    .iter()
                    .map(|column| {
                        let term = self.term_index(column, row)?;
                        Ok(Cell {
                            term,
                            class: self.terms.cell_class(term),
                        })
                    })
                    .collect::<Result<Vec<_>, HeaderError>>()
            })
            .collect::<Result<Vec<_>, HeaderError>>()?;

        Ok(Grid {
            column_vars: self.columns.clone(),
            row_vars: self.rows.clone(),
            column_headers,
            row_headers,
            cells,
        })
    }
}
