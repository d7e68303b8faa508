use core::{
    fmt::{Display, Formatter, Result},
    str::FromStr,
};

use alloc::string::ToString;

use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token<'a> {
    Number(f64),
    Identifier(&'a str),
    Op(Operation),
    Paren(bool),
    Unknown(char),
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Identifier(name) => write!(f, "{}", name),
            Token::Op(op) => write!(f, "{}", op),
            Token::Paren(true) => write!(f, "("),
            Token::Paren(false) => write!(f, ")"),
            Token::Unknown(c) => write!(f, "{}", c),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulus,
    Power,
    Factorial,
}

impl Operation {
    pub fn from_char(c: char) -> Option<Self> {
        Some(match c {
            '+' => Operation::Add,
            '-' => Operation::Subtract,
            '*' => Operation::Multiply,
            '/' => Operation::Divide,
            '%' => Operation::Modulus,
            '^' => Operation::Power,
            '!' => Operation::Factorial,
            _ => return None,
        })
    }

    pub fn precedence(&self) -> u8 {
        match self {
            Operation::Add | Operation::Subtract => 1,
            Operation::Multiply | Operation::Divide | Operation::Modulus => 2,
            Operation::Power => 3,
            // applied on sight, never waits on the stack
            Operation::Factorial => 0,
        }
    }

    pub fn right_associative(&self) -> bool {
        matches!(self, Operation::Power)
    }

    /// Binary operators after which a `-` starts a negative literal.
    pub fn is_binary(&self) -> bool {
        !matches!(self, Operation::Factorial)
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Operation::Add => write!(f, "+"),
            Operation::Subtract => write!(f, "-"),
            Operation::Multiply => write!(f, "*"),
            Operation::Divide => write!(f, "/"),
            Operation::Modulus => write!(f, "%"),
            Operation::Power => write!(f, "^"),
            Operation::Factorial => write!(f, "!"),
        }
    }
}

/// Single-argument functions callable as `name(arg)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Log,
    Ln,
    Sqrt,
}

impl Function {
    pub const PRECEDENCE: u8 = 4;

    pub fn name(&self) -> &'static str {
        match self {
            Function::Sin => "sin",
            Function::Cos => "cos",
            Function::Tan => "tan",
            Function::Asin => "asin",
            Function::Acos => "acos",
            Function::Atan => "atan",
            Function::Log => "log",
            Function::Ln => "ln",
            Function::Sqrt => "sqrt",
        }
    }
}

impl FromStr for Function {
    type Err = Error;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        Ok(match s {
            "sin" => Function::Sin,
            "cos" => Function::Cos,
            "tan" => Function::Tan,
            "asin" => Function::Asin,
            "acos" => Function::Acos,
            "atan" => Function::Atan,
            "log" => Function::Log,
            "ln" => Function::Ln,
            "sqrt" => Function::Sqrt,
            _ => return Err(Error::UnknownToken(s.to_string())),
        })
    }
}

impl Display for Function {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{}", self.name())
    }
}
