//! # Binary Algebra Solver
//!
//! Evaluate boolean-algebra equations over single-letter variables, derive their
//! minterm / maxterm / don't-care sets, and lay the terms out on a Karnaugh map.
//!
//! ## Overview
//!
//! The crate is built around three pieces:
//!
//! - **Expression engine** ([`expression`]) - normalizes text such as `a'b + (c^d)'`,
//!   makes implicit ANDs explicit, and evaluates the result with a recursive-descent
//!   walk over the token stream (NOT > AND > XOR/OR).
//! - **Term sets** ([`terms`]) - sweeps inputs through an equation and sorts the
//!   resulting term indices into minterms, maxterms and caller-supplied don't-cares.
//! - **Karnaugh maps** ([`kmap`]) - validates a column/row split of the variables,
//!   maps grid coordinates to term indices, and orders the axes in Gray code.
//!
//! ## Quick Start
//!
//! ```
//! use binary_algebra::{solve, SolverConfig};
//!
//! # fn main() -> Result<(), binary_algebra::SolverError> {
//! let solution = solve("A'B + C", &SolverConfig::default())?;
//! assert_eq!(solution.equation.clean_equation(), "A'*B+C");
//! assert_eq!(solution.terms.minterm_notation(), "m(1, 2, 3, 5, 7)");
//! assert_eq!(solution.terms.maxterm_notation(), "M(0, 4, 6)");
//!
//! let map = solution.karnaugh_map("AB", "C")?;
//! println!("{}", map.render()?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Working with the pieces directly
//!
//! ```
//! use binary_algebra::{KarnaughMap, ParsedEquation, TermClass, TruthTable};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let eq = ParsedEquation::parse("(A + B)'")?;
//! assert!(eq.evaluate("00")?);
//!
//! let terms = TruthTable::full(&eq)?.classify([2]);
//! assert_eq!(terms.class_of(2), Some(TermClass::DontCare));
//!
//! let mut map = KarnaughMap::from_equation(&eq, terms);
//! map.set_column_vars("A")?;
//! map.set_row_vars("B")?;
//! assert_eq!(map.classify_cell("0", "0")?, TermClass::Minterm);
//! # Ok(())
//! # }
//! ```
//!
//! ## Compile-time checked equations
//!
//! The [`equation!`] macro rejects invalid characters and unbalanced brackets at
//! compile time:
//!
//! ```
//! use binary_algebra::equation;
//!
//! let eq = equation!("A'B + {C ^ D}");
//! assert_eq!(eq.variable_count(), 4);
//! ```
//!
//! ## Equation syntax
//!
//! | Syntax            | Meaning                                   |
//! |-------------------|-------------------------------------------|
//! | `A`-`Z`, `a`-`z`  | variable (case-insensitive)               |
//! | `0`, `1`          | constant false / true                     |
//! | `'`               | postfix NOT on a literal or group         |
//! | `*` or adjacency  | AND                                       |
//! | `+`               | OR                                        |
//! | `^`               | XOR                                       |
//! | `()` `[]` `{}`    | grouping, bracket types interchangeable   |

extern crate self as binary_algebra;

pub mod bits;
pub mod error;
pub mod expression;
pub mod kmap;
pub mod solver;
pub mod terms;

pub use binary_algebra_macros::equation;
pub use bits::is_valid_binary_input;
pub use error::SolverError;
pub use expression::{evaluate, parse, EvalError, ParseError, ParsedEquation};
pub use kmap::{Axis, AxisOrder, HeaderError, KarnaughMap};
pub use solver::{solve, Solution, SolverConfig};
pub use terms::{TermClass, TermError, TermSets, TruthTable};
