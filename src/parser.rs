use alloc::vec::Vec;

use nom::{
    branch::alt,
    bytes::complete::{take_while, take_while1},
    character::complete::{anychar, char, one_of},
    combinator::{map, map_opt, recognize},
    error::Error as NomError,
    sequence::preceded,
    IResult,
};

use crate::{
    token::{Operation, Token},
    Error,
};

type ParseResult<'a> = IResult<&'a str, Token<'a>, NomError<&'a str>>;

fn is_numeric_value(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

fn whitespace(i: &str) -> IResult<&str, &str, NomError<&str>> {
    take_while(|c: char| c.is_whitespace())(i)
}

/// Longest run of digits and decimal points; `1.2.3` is taken whole and
/// rejected when it is converted.
fn number_literal(i: &str) -> IResult<&str, &str, NomError<&str>> {
    take_while1(is_numeric_value)(i)
}

/// `-` followed by an optional digit run, read as one literal.
fn negative_literal(i: &str) -> IResult<&str, &str, NomError<&str>> {
    recognize(preceded(char('-'), take_while(is_numeric_value)))(i)
}

fn identifier(i: &str) -> ParseResult<'_> {
    map(take_while1(|c: char| c.is_alphabetic()), Token::Identifier)(i)
}

fn parenthesis(i: &str) -> ParseResult<'_> {
    let (i, t) = one_of("()")(i)?;
    Ok((i, Token::Paren(t == '(')))
}

fn operation(i: &str) -> ParseResult<'_> {
    map_opt(anychar, |c| Operation::from_char(c).map(Token::Op))(i)
}

fn unknown(i: &str) -> ParseResult<'_> {
    map(anychar, Token::Unknown)(i)
}

fn parse_number(literal: &str) -> Result<Token<'_>, Error> {
    literal
        .parse::<f64>()
        .map(Token::Number)
        .map_err(|_| Error::MalformedExpression)
}

fn math_token(i: &str) -> ParseResult<'_> {
    alt((identifier, parenthesis, operation, unknown))(i)
}

/// Whether a `-` is the sign of a literal rather than a subtraction: it must
/// directly follow the start, a `(` or a binary operator, with no whitespace
/// in between.
fn starts_literal(previous: Option<&Token>, after_whitespace: bool) -> bool {
    if after_whitespace {
        return false;
    }
    match previous {
        None => true,
        Some(Token::Paren(true)) => true,
        Some(Token::Op(op)) => op.is_binary(),
        Some(_) => false,
    }
}

/// Splits an expression into tokens, left to right.
///
/// Whitespace separates tokens and otherwise only matters before a `-`,
/// which is a subtraction whenever whitespace precedes it. Characters outside
/// the calculator's alphabet come back as [`Token::Unknown`] so the caller
/// decides how to report them.
pub fn tokenize(input: &str) -> Result<Vec<Token<'_>>, Error> {
    let mut tokens = Vec::new();
    let mut rest = input;

    loop {
        let (i, skipped) = whitespace(rest).map_err(|_| Error::MalformedExpression)?;
        if i.is_empty() {
            break;
        }

        let signed = i.starts_with('-') && starts_literal(tokens.last(), !skipped.is_empty());
        let (i, token) = if signed {
            let (i, literal) = negative_literal(i).map_err(|_| Error::MalformedExpression)?;
            (i, parse_number(literal)?)
        } else if let Ok((i, literal)) = number_literal(i) {
            (i, parse_number(literal)?)
        } else {
            math_token(i).map_err(|_| Error::MalformedExpression)?
        };

        log::trace!("token {:?}", token);
        tokens.push(token);
        rest = i;
    }

    Ok(tokens)
}
