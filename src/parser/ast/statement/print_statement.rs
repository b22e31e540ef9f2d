use crate::{
    lexer::{Terminal, Token, Tokens},
    parser::{expect, FromTokens, ParseError},
};

use super::Expression;

/// `print(<expression>);` — the evaluated value goes to the page buffer,
/// not straight to the display.
#[derive(Debug, Clone, PartialEq)]
pub struct PrintStatement {
    pub value: Expression,
}

impl FromTokens for PrintStatement {
    fn parse(tokens: &mut Tokens<Token>) -> Result<Self, ParseError> {
        tokens.next();

        expect(tokens, Terminal::LParen, "Expected '(' after 'print'")?;

        let value = Expression::parse(tokens)?;

        expect(tokens, Terminal::RParen, "Expected ')' after print argument")?;
        expect(
            tokens,
            Terminal::Semicolon,
            "Expected ';' after print statement",
        )?;

        Ok(PrintStatement { value })
    }
}
