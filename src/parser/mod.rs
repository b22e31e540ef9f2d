use std::{error::Error, fmt::Display};

pub mod ast;

use crate::lexer::{Position, Terminal, Token, Tokens};

use self::ast::Statement;

#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub message: String,
    pub position: Option<Position>,
}

impl ParseError {
    pub fn eof(item: &str) -> ParseError {
        ParseError {
            message: format!("hit EOF while parsing {item}"),
            position: None,
        }
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.position {
            Some((line, col)) => write!(f, "{} at {line}:{col}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

impl Error for ParseError {}

pub trait FromTokens: Sized {
    fn parse(tokens: &mut Tokens<Token>) -> Result<Self, ParseError>;
}

/// Consume the next token, which has to be the given terminal; fail with
/// `message` otherwise.
pub(crate) fn expect(
    tokens: &mut Tokens<Token>,
    expected: Terminal,
    message: &str,
) -> Result<(), ParseError> {
    match tokens.next() {
        Some(token) if expected.matches(&token) => Ok(()),
        token => Err(ParseError {
            message: message.into(),
            position: token.map(|token| token.position()),
        }),
    }
}

/// Parse a whole program: statements until the tokens run out.
pub fn parse(tokens: &mut Tokens<Token>) -> Result<Vec<Statement>, ParseError> {
    let mut statements = vec![];

    while tokens.peek().is_some() {
        statements.push(Statement::parse(tokens)?);
    }

    Ok(statements)
}
