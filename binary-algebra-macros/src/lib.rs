use proc_macro::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream, Result};
use syn::{parse_macro_input, LitStr};

/// A single equation literal, validated before any code is generated
struct EquationLiteral {
    lit: LitStr,
}

impl Parse for EquationLiteral {
    fn parse(input: ParseStream) -> Result<Self> {
        let lit: LitStr = input.parse()?;
        if !input.is_empty() {
            return Err(input.error("expected a single string literal"));
        }
        check_equation(&lit)?;
        Ok(EquationLiteral { lit })
    }
}

/// Reject anything the runtime parser would refuse, plus unbalanced brackets
///
/// The runtime parser accepts unbalanced brackets and only reports them when the
/// equation is evaluated; a literal embedded in source code can be checked up front.
fn check_equation(lit: &LitStr) -> Result<()> {
    let text = lit.value();
    if text.chars().all(char::is_whitespace) {
        return Err(syn::Error::new(lit.span(), "equation must not be empty"));
    }

    let mut depth: usize = 0;
    for (position, ch) in text.chars().enumerate() {
        match ch {
            c if c.is_whitespace() => {}
            c if c.is_ascii_alphabetic() => {}
            '0' | '1' | '+' | '*' | '^' | '\'' => {}
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => {
                if depth == 0 {
                    return Err(syn::Error::new(
                        lit.span(),
                        format!("unmatched closing bracket '{}' at position {}", ch, position),
                    ));
                }
                depth -= 1;
            }
            other => {
                return Err(syn::Error::new(
                    lit.span(),
                    format!("invalid literal '{}' at position {}", other, position),
                ));
            }
        }
    }

    if depth != 0 {
        return Err(syn::Error::new(
            lit.span(),
            format!("{} unclosed bracket(s) in equation", depth),
        ));
    }
    Ok(())
}

/// Runtime parse of an already validated literal
fn expand(lit: &LitStr) -> proc_macro2::TokenStream {
    quote! {
        ::binary_algebra::ParsedEquation::parse(#lit)
            .expect("equation literal was validated at compile time")
    }
}

/// The `equation!` procedural macro
///
/// Checks a boolean-algebra equation literal at compile time and expands to the
/// corresponding `ParsedEquation`.
///
/// # Accepted characters
///
/// - `A`-`Z` / `a`-`z` - variables (case-insensitive)
/// - `0`, `1` - constants
/// - `*`, `+`, `^` - AND, OR, XOR (adjacent operands are ANDed implicitly)
/// - `'` - postfix NOT
/// - `()`, `[]`, `{}` - grouping, brackets are interchangeable
///
/// # Examples
///
/// ```ignore
/// use binary_algebra::equation;
///
/// let eq = equation!("A'B + (C ^ D)'");
/// assert_eq!(eq.variables(), &['A', 'B', 'C', 'D']);
///
/// // Fails to compile: '&' is not a valid literal
/// // let bad = equation!("A & B");
/// ```
#[proc_macro]
pub fn equation(input: TokenStream) -> TokenStream {
    let parsed = parse_macro_input!(input as EquationLiteral);
    TokenStream::from(expand(&parsed.lit))
}
