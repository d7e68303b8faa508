//! Infix calculator core.
//!
//! [`evaluate`] reads an expression such as `2+3*4`, `sqrt(16)` or `5!` and
//! returns its value, using the shunting-yard algorithm over two stacks.
//! [`keypad::Calculator`] drives it from calculator button presses.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

use alloc::string::String;

pub mod evaluator;
pub mod format;
pub mod keypad;
pub mod math;
pub mod parser;
pub mod token;

pub use evaluator::{AngleUnit, Evaluator, Settings};
pub use format::format_result;
pub use keypad::{Button, Calculator};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Invalid expression")]
    MalformedExpression,
    #[error("Cannot divide by zero")]
    DivideByZero,
    #[error("Factorial is only for non-negative integers")]
    InvalidFactorial,
    #[error("Cannot take sqrt of negative number")]
    InvalidSqrt,
    #[error("Unknown token: {0}")]
    UnknownToken(String),
    #[error("Input is full")]
    InputFull,
}

/// Evaluates `input` with the default [`Settings`] (angles in degrees).
///
/// `log` and `ln` of non-positive numbers give NaN or -inf rather than an
/// error, so callers wanting to report those must check the value.
pub fn evaluate(input: &str) -> Result<f64, Error> {
    Evaluator::default().evaluate(input)
}
