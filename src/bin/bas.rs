//! Binary Algebra Solver - Command Line Interface
//!
//! Evaluates an equation, prints its truth table and term sets, and optionally
//! compares it against a reference equation and draws a Karnaugh map.

use binary_algebra::terms::parse_dont_cares;
use binary_algebra::{solve, AxisOrder, ParsedEquation, Solution, SolverConfig};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Order {
    /// Gray-code axis headers (adjacent cells differ by one variable)
    Gray,
    /// Natural binary counting
    Binary,
}

impl From<Order> for AxisOrder {
    fn from(val: Order) -> Self {
        match val {
            Order::Gray => AxisOrder::Gray,
            Order::Binary => AxisOrder::Binary,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "bas")]
#[command(about = "Binary algebra solver: truth tables, minterms and Karnaugh maps", long_about = None)]
#[command(version)]
struct Args {
    /// Equation to evaluate, e.g. "A'B + (C ^ D)'"
    #[arg(value_name = "EQUATION")]
    equation: String,

    /// Input row to evaluate (repeatable); all rows are evaluated if omitted
    #[arg(short = 'i', long = "input", value_name = "BITS")]
    inputs: Vec<String>,

    /// Comma-separated don't-care terms, e.g. "3,5,7"
    #[arg(short = 'd', long = "dont-care", value_name = "LIST", default_value = "")]
    dont_cares: String,

    /// Reference equation to compare against
    #[arg(short = 'c', long = "compare", conflicts_with = "compare_file")]
    compare: Option<String>,

    /// Read the reference equation from the first line of a file
    #[arg(short = 'f', long = "compare-file", value_name = "FILE")]
    compare_file: Option<PathBuf>,

    /// Variables for the Karnaugh map columns
    #[arg(long = "columns", value_name = "VARS", requires = "rows")]
    columns: Option<String>,

    /// Variables for the Karnaugh map rows
    #[arg(long = "rows", value_name = "VARS", requires = "columns")]
    rows: Option<String>,

    /// Karnaugh map header ordering
    #[arg(long = "order", value_enum, default_value = "gray")]
    order: Order,

    /// Print progress to stderr
    #[arg(short = 's', long = "summary")]
    summary: bool,
}

fn fail(context: &str, err: impl std::fmt::Display) -> ! {
    eprintln!("ERROR: {}: {}", context, err);
    process::exit(1);
}

fn main() {
    let args = Args::parse();

    let dont_cares = match parse_dont_cares(&args.dont_cares) {
        Ok(terms) => terms,
        Err(e) => fail("Invalid don't-care list", e),
    };

    let comparison = match (&args.compare, &args.compare_file) {
        (Some(text), _) => Some(text.clone()),
        (None, Some(path)) => match ParsedEquation::from_file(path) {
            Ok(eq) => {
                if args.summary {
                    eprintln!("Comparison equation: {}", eq);
                }
                Some(eq.clean_equation().to_string())
            }
            Err(e) => fail(&format!("Reading '{}'", path.display()), e),
        },
        (None, None) => None,
    };

    let config = SolverConfig {
        inputs: (!args.inputs.is_empty()).then(|| args.inputs.clone()),
        dont_cares,
        comparison,
        order: args.order.into(),
    };

    if args.summary {
        eprintln!("Equation: {}", args.equation);
        eprintln!("Evaluating equation...");
    }

    let solution = match solve(&args.equation, &config) {
        Ok(solution) => solution,
        Err(e) => fail("Solving equation", e),
    };

    print_solution(&solution);

    if let (Some(columns), Some(rows)) = (&args.columns, &args.rows) {
        if args.summary {
            eprintln!("Generating K-Map ({}, {})...", columns, rows);
        }
        let rendered = solution
            .karnaugh_map(columns, rows)
            .and_then(|map| Ok(map.render()?));
        match rendered {
            Ok(text) => {
                println!();
                print!("{}", text);
            }
            Err(e) => fail("Building Karnaugh map", e),
        }
    }

    if args.summary {
        eprintln!("Done.");
    }
}

fn print_solution(solution: &Solution) {
    let variables: String = solution.equation.variables().iter().collect();
    println!("Equation: {}", solution.equation);
    println!("Variables: {}", variables);
    println!();

    match &solution.comparison {
        Some(comparison) => {
            for (row, cmp) in solution.table.rows().iter().zip(&comparison.rows) {
                println!(
                    "{:>4} | {} | {} (C: {}\tE: {})",
                    row.term,
                    row.input,
                    if cmp.is_equal() { "EQUAL " } else { "NEQUAL" },
                    bool_label(cmp.expected),
                    bool_label(cmp.actual)
                );
            }
        }
        None => {
            for row in solution.table.rows() {
                println!("{:>4} | {} | {}", row.term, row.input, bool_label(row.value));
            }
        }
    }
    println!();

    println!("Minterms (E): {}", solution.terms.minterm_notation());
    if let Some(comparison) = &solution.comparison {
        println!("Minterms (C): {}", comparison.terms.minterm_notation());
    }
    println!("Maxterms (E): {}", solution.terms.maxterm_notation());
    if let Some(comparison) = &solution.comparison {
        println!("Maxterms (C): {}", comparison.terms.maxterm_notation());
        if comparison.is_equivalent() {
            println!("Equations are equivalent on every evaluated input");
        }
    }
}

fn bool_label(value: bool) -> &'static str {
    if value {
        "TRUE"
    } else {
        "FALSE"
    }
}
