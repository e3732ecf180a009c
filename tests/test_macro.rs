//! Tests for the `equation!` procedural macro

use binary_algebra::{equation, ParsedEquation};

#[test]
fn test_macro_matches_runtime_parse() {
    let from_macro = equation!("a'b + [c ^ d]'");
    let runtime = ParsedEquation::parse("a'b + [c ^ d]'").unwrap();
    assert_eq!(from_macro, runtime);
}

#[test]
fn test_macro_evaluates() {
    let eq = equation!("(A + B)'C");
    assert_eq!(eq.variables(), &['A', 'B', 'C']);
    assert!(eq.evaluate("001").unwrap());
    assert!(!eq.evaluate("101").unwrap());
}

#[test]
fn test_macro_constants_only() {
    let eq = equation!("1 ^ 0");
    assert_eq!(eq.variable_count(), 0);
    assert!(eq.evaluate("").unwrap());
}

#[test]
fn test_macro_balanced_brackets_are_well_formed() {
    // Brackets are checked at compile time, so the grammar check only sees operators
    let eq = equation!("{A[B(C)]}'");
    assert!(eq.check_syntax().is_ok());
    assert_eq!(eq.clean_equation(), "{A*[B*(C)]}'");
}
