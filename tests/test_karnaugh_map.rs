//! Integration tests for Karnaugh map layout and classification

use binary_algebra::kmap::Grid;
use binary_algebra::*;
use std::collections::BTreeSet;

fn solved_map(equation: &str, dont_cares: &[usize], columns: &str, rows: &str) -> KarnaughMap {
    let eq = ParsedEquation::parse(equation).unwrap();
    let terms = TruthTable::full(&eq)
        .unwrap()
        .classify(dont_cares.iter().copied());
    let mut map = KarnaughMap::from_equation(&eq, terms);
    map.set_column_vars(columns).unwrap();
    map.set_row_vars(rows).unwrap();
    map
}

fn cells_of(grid: &Grid, class: TermClass) -> BTreeSet<usize> {
    grid.cells
        .iter()
        .flatten()
        .filter(|cell| cell.class == class)
        .map(|cell| cell.term)
        .collect()
}

#[test]
fn test_grid_classes_match_term_sets() {
    for (equation, columns, rows) in [
        ("A'B + CD", "AB", "CD"),
        ("A^B^C", "C", "AB"),
        ("(A+B)'C + D'E", "EC", "BAD"),
    ] {
        let map = solved_map(equation, &[], columns, rows);
        let grid = map.grid().unwrap();
        assert_eq!(&cells_of(&grid, TermClass::Minterm), map.terms().minterms());
        assert_eq!(&cells_of(&grid, TermClass::Maxterm), map.terms().maxterms());
        assert!(cells_of(&grid, TermClass::DontCare).is_empty());
    }
}

#[test]
fn test_dont_cares_override_evaluation() {
    let map = solved_map("A+B+C", &[0, 7], "AB", "C");
    let grid = map.grid().unwrap();
    assert_eq!(
        cells_of(&grid, TermClass::DontCare),
        BTreeSet::from([0, 7])
    );
    assert_eq!(
        cells_of(&grid, TermClass::Minterm),
        BTreeSet::from([1, 2, 3, 4, 5, 6])
    );
    assert!(cells_of(&grid, TermClass::Maxterm).is_empty());
}

#[test]
fn test_axis_split_does_not_change_terms() {
    // Swapping which variables go on which axis only moves cells around
    let a = solved_map("AB' + C", &[], "AB", "C");
    let b = solved_map("AB' + C", &[], "C", "BA");

    let minterms = |map: &KarnaughMap| cells_of(&map.grid().unwrap(), TermClass::Minterm);
    assert_eq!(minterms(&a), minterms(&b));
    assert_eq!(a.classify_cell("10", "0").unwrap(), TermClass::Minterm);
    assert_eq!(b.classify_cell("0", "01").unwrap(), TermClass::Minterm);
}

#[test]
fn test_gray_order_wraps_around() {
    let map = solved_map("ABCD", &[], "AB", "CD");
    let grid = map.grid().unwrap();
    for row in &grid.cells {
        let first = row.first().unwrap().term;
        let last = row.last().unwrap().term;
        assert_eq!((first ^ last).count_ones(), 1);
    }
    for pair in grid.cells.windows(2) {
        assert_eq!((pair[0][0].term ^ pair[1][0].term).count_ones(), 1);
    }
}

#[test]
fn test_binary_order() {
    let gray = solved_map("AB + C", &[], "AB", "C");
    assert_eq!(gray.column_headers(), vec!["00", "01", "11", "10"]);

    let mut binary = gray.clone();
    binary.set_order(AxisOrder::Binary);
    assert_eq!(binary.column_headers(), vec!["00", "01", "10", "11"]);
    assert_eq!(binary.row_headers(), vec!["0", "1"]);
    // Terms stay attached to their variables, only the positions move
    assert_eq!(binary.grid().unwrap().cells[0][3].term, 6);
}

#[test]
fn test_validation_messages() {
    let eq = ParsedEquation::parse("A+B+C+D").unwrap();
    let mut map = KarnaughMap::from_equation(&eq, TermSets::new());

    let err = map.set_column_vars("AE").unwrap_err();
    assert_eq!(err, HeaderError::InvalidVariable { variable: 'E' });
    assert!(err.to_string().contains('E'));

    let err = map.set_column_vars("ABC").unwrap_err();
    assert!(matches!(err, HeaderError::DimensionMismatch { found: 3, .. }));

    map.set_column_vars("AB").unwrap();
    let err = map.set_row_vars("BC").unwrap_err();
    assert_eq!(err, HeaderError::DuplicateVariable { variable: 'B' });
}

#[test]
fn test_render_four_variables() {
    let map = solved_map("AB'CD'", &[15], "AB", "CD");
    let expected = "\
CD\\AB | 00 | 01 | 11 | 10
------+----+----+----+----
   00 |  0 |  0 |  0 |  0
   01 |  0 |  0 |  0 |  0
   11 |  0 |  0 |  X |  0
   10 |  0 |  0 |  0 |  1
";
    assert_eq!(map.render().unwrap(), expected);
}

#[test]
fn test_render_requires_columns() {
    let eq = ParsedEquation::parse("A+B").unwrap();
    let map = KarnaughMap::from_equation(&eq, TermSets::new());
    assert_eq!(map.render(), Err(HeaderError::Empty));
}
