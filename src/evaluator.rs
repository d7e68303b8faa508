use alloc::{string::ToString, vec::Vec};
use core::fmt::{Display, Formatter};

use crate::{
    math::{apply_function, apply_operation},
    parser::tokenize,
    token::{Function, Operation, Token},
    Error,
};

/// Unit used by `sin`/`cos`/`tan` arguments and `asin`/`acos`/`atan` results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleUnit {
    #[default]
    Degrees,
    Radians,
}

impl AngleUnit {
    pub fn to_radians(self, angle: f64) -> f64 {
        match self {
            AngleUnit::Degrees => angle * (core::f64::consts::PI / 180.0),
            AngleUnit::Radians => angle,
        }
    }

    pub fn from_radians(self, angle: f64) -> f64 {
        match self {
            AngleUnit::Degrees => angle * (180.0 / core::f64::consts::PI),
            AngleUnit::Radians => angle,
        }
    }
}

impl Display for AngleUnit {
    fn fmt(&self, f: &mut Formatter) -> core::fmt::Result {
        match self {
            AngleUnit::Degrees => write!(f, "deg"),
            AngleUnit::Radians => write!(f, "rad"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    pub angle: AngleUnit,
}

/// An entry waiting on the operator stack.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Pending {
    Op(Operation),
    Func(Function),
    LeftParen,
}

impl Pending {
    fn precedence(&self) -> u8 {
        match self {
            Pending::Op(op) => op.precedence(),
            Pending::Func(_) => Function::PRECEDENCE,
            Pending::LeftParen => 0,
        }
    }
}

/// Evaluates infix expressions with the shunting-yard algorithm, reducing
/// as it goes instead of producing a postfix sequence first.
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator {
    settings: Settings,
}

impl Evaluator {
    pub fn new(settings: Settings) -> Self {
        Evaluator { settings }
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub fn evaluate(&self, input: &str) -> Result<f64, Error> {
        let tokens = tokenize(input)?;
        let result = self.shunting_yard(&tokens);
        log::debug!("evaluate {:?} -> {:?}", input, result);
        result
    }

    fn shunting_yard(&self, tokens: &[Token]) -> Result<f64, Error> {
        let mut values: Vec<f64> = Vec::new();
        let mut stack: Vec<Pending> = Vec::new();

        for token in tokens {
            match *token {
                Token::Number(n) => values.push(n),
                Token::Identifier(name) => stack.push(Pending::Func(name.parse()?)),
                Token::Paren(true) => stack.push(Pending::LeftParen),
                Token::Paren(false) => {
                    while let Some(&top) = stack.last() {
                        if top == Pending::LeftParen {
                            break;
                        }
                        self.reduce(&mut stack, &mut values)?;
                    }
                    if stack.pop() != Some(Pending::LeftParen) {
                        return Err(Error::MalformedExpression);
                    }
                    if let Some(Pending::Func(_)) = stack.last() {
                        self.reduce(&mut stack, &mut values)?;
                    }
                }
                Token::Op(Operation::Factorial) => {
                    let result = apply_operation(Operation::Factorial, &mut values)?;
                    values.push(result);
                }
                Token::Op(op) => {
                    while let Some(&top) = stack.last() {
                        if op.precedence() > top.precedence() {
                            break;
                        }
                        if op.right_associative() && top == Pending::Op(op) {
                            break;
                        }
                        self.reduce(&mut stack, &mut values)?;
                    }
                    stack.push(Pending::Op(op));
                }
                Token::Unknown(c) => return Err(Error::UnknownToken(c.to_string())),
            }
        }

        while !stack.is_empty() {
            self.reduce(&mut stack, &mut values)?;
        }

        match values.as_slice() {
            [result] => Ok(*result),
            _ => Err(Error::MalformedExpression),
        }
    }

    /// Pops the top of the operator stack and applies it to the operand
    /// stack. Running out of operands means the expression is malformed.
    fn reduce(&self, stack: &mut Vec<Pending>, values: &mut Vec<f64>) -> Result<(), Error> {
        let top = stack.pop().ok_or(Error::MalformedExpression)?;
        log::trace!("reduce {:?} over {:?}", top, values);

        let result = match top {
            Pending::Func(func) => {
                let arg = values.pop().ok_or(Error::MalformedExpression)?;
                apply_function(func, arg, self.settings.angle)?
            }
            Pending::Op(op) => apply_operation(op, values)?,
            // an opening paren that was never closed
            Pending::LeftParen => return Err(Error::MalformedExpression),
        };

        values.push(result);
        Ok(())
    }
}
