//! # Integer expression calculator
//!
//! Evaluates one line of infix arithmetic at a time over non-negative integer
//! literals. The evaluation is a single left-to-right pass that keeps two
//! stacks: operands and operators waiting for their right-hand side. Both
//! stacks belong to one evaluation, so separate lines can be evaluated on
//! separate threads without any coordination.
//!
//! Operators (starting from highest priority):
//! * `^` - power, right associative: `2^3^2` is `512`
//! * `*`, `/` - multiplication, truncating integer division
//! * `+`, `-` - addition, subtraction
//!
//! All arithmetic is done on 64-bit signed integers and wraps on overflow,
//! including number literals that do not fit. Raising to a negative power
//! gives `1`.
//!
//! Brackets are recognized and reported as notices, but they do not group:
//! `(2+3)*4` evaluates as `2+3*4`.
//!
//! ```
//! assert_eq!(infix_calc::eval("2+3*4"), Ok(14));
//! assert_eq!(
//!     infix_calc::render("2#3"),
//!     vec!["illegal expression: '#' is an illegal character"]
//! );
//! ```

pub mod errors;
pub mod parse;
pub mod stack;
pub mod value;

pub use errors::{CalcError, CalcResult};
pub use parse::{eval, eval_with_notices, render, Notice};
