//! Keypad front end for the evaluator.
//!
//! A [`Calculator`] owns the text typed so far and the error from the last
//! `=`. Buttons edit the text; only `=` evaluates it.

use alloc::{format, string::{String, ToString}};
use core::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use crate::{
    evaluator::{Evaluator, Settings},
    format::format_result,
    token::{Function, Operation},
    Error,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Clear,
    Delete,
    Equals,
    Digit(u8),
    Point,
    Paren(bool),
    Op(Operation),
    Func(Function),
}

impl Button {
    /// Text appended to the input, `None` for buttons that do not type.
    fn text(&self) -> Option<String> {
        Some(match self {
            Button::Clear | Button::Delete | Button::Equals => return None,
            Button::Digit(d) => d.to_string(),
            Button::Point => ".".to_string(),
            Button::Paren(true) => "(".to_string(),
            Button::Paren(false) => ")".to_string(),
            Button::Op(op) => op.to_string(),
            // inverse trig and root keys are typed with a leading space
            Button::Func(
                func @ (Function::Asin | Function::Acos | Function::Atan | Function::Sqrt),
            ) => format!(" {}(", func),
            Button::Func(func) => format!("{}(", func),
        })
    }
}

impl FromStr for Button {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "C" => Button::Clear,
            "DEL" => Button::Delete,
            "=" => Button::Equals,
            "." => Button::Point,
            "(" => Button::Paren(true),
            ")" => Button::Paren(false),
            "+" => Button::Op(Operation::Add),
            "-" => Button::Op(Operation::Subtract),
            "×" | "*" => Button::Op(Operation::Multiply),
            "÷" | "/" => Button::Op(Operation::Divide),
            "%" => Button::Op(Operation::Modulus),
            "x^y" => Button::Op(Operation::Power),
            "x!" => Button::Op(Operation::Factorial),
            "sin⁻¹" => Button::Func(Function::Asin),
            "cos⁻¹" => Button::Func(Function::Acos),
            "tan⁻¹" => Button::Func(Function::Atan),
            "√" => Button::Func(Function::Sqrt),
            "sin" => Button::Func(Function::Sin),
            "cos" => Button::Func(Function::Cos),
            "tan" => Button::Func(Function::Tan),
            "ln" => Button::Func(Function::Ln),
            "log" => Button::Func(Function::Log),
            _ => match s.as_bytes() {
                [d @ b'0'..=b'9'] => Button::Digit(d - b'0'),
                _ => return Err(Error::UnknownToken(s.to_string())),
            },
        })
    }
}

impl Display for Button {
    fn fmt(&self, f: &mut Formatter) -> core::fmt::Result {
        match self {
            Button::Clear => write!(f, "C"),
            Button::Delete => write!(f, "DEL"),
            Button::Equals => write!(f, "="),
            Button::Digit(d) => write!(f, "{}", d),
            Button::Point => write!(f, "."),
            Button::Paren(true) => write!(f, "("),
            Button::Paren(false) => write!(f, ")"),
            Button::Op(Operation::Multiply) => write!(f, "×"),
            Button::Op(Operation::Divide) => write!(f, "÷"),
            Button::Op(Operation::Power) => write!(f, "x^y"),
            Button::Op(Operation::Factorial) => write!(f, "x!"),
            Button::Op(op) => write!(f, "{}", op),
            Button::Func(Function::Asin) => write!(f, "sin⁻¹"),
            Button::Func(Function::Acos) => write!(f, "cos⁻¹"),
            Button::Func(Function::Atan) => write!(f, "tan⁻¹"),
            Button::Func(Function::Sqrt) => write!(f, "√"),
            Button::Func(func) => write!(f, "{}", func),
        }
    }
}

/// Input line plus the outcome of the last evaluation, holding at most `N`
/// bytes of input.
#[derive(Debug, Clone, Default)]
pub struct Calculator<const N: usize = 64> {
    input: heapless::String<N>,
    error: Option<Error>,
    evaluator: Evaluator,
}

impl<const N: usize> Calculator<N> {
    pub fn new(settings: Settings) -> Self {
        Calculator {
            input: heapless::String::new(),
            error: None,
            evaluator: Evaluator::new(settings),
        }
    }

    pub fn input(&self) -> &str {
        self.input.as_str()
    }

    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    /// The result line: empty, or `Error: <message>` after a failed `=`.
    pub fn status(&self) -> String {
        match &self.error {
            Some(err) => format!("Error: {}", err),
            None => String::new(),
        }
    }

    /// Applies one button press.
    ///
    /// Returns [`Error::InputFull`] when the edit does not fit, in which
    /// case the input is unchanged; a result too long for the input is also
    /// shown as the error. Evaluation errors are not returned; they are kept
    /// for [`Calculator::status`] with the input left as typed.
    pub fn press(&mut self, button: Button) -> Result<(), Error> {
        log::trace!("press {} on {:?}", button, self.input);

        match button {
            Button::Clear => {
                self.input.clear();
                self.error = None;
            }
            Button::Delete => {
                self.input.pop();
            }
            Button::Equals => match self.evaluator.evaluate(&self.input) {
                Ok(value) => match heapless::String::from_str(&format_result(value)) {
                    Ok(text) => {
                        self.input = text;
                        self.error = None;
                    }
                    Err(()) => {
                        self.error = Some(Error::InputFull);
                        return Err(Error::InputFull);
                    }
                },
                Err(err) => {
                    log::debug!("keeping input {:?} after {}", self.input, err);
                    self.error = Some(err);
                }
            },
            _ => {
                if let Some(text) = button.text() {
                    self.input.push_str(&text).map_err(|_| Error::InputFull)?;
                }
            }
        }

        Ok(())
    }

    /// Parses a button label and presses it.
    pub fn press_label(&mut self, label: &str) -> Result<(), Error> {
        self.press(label.parse()?)
    }
}
