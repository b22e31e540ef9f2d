use crate::{
    lexer::{Terminal, Token, Tokens},
    parser::{expect, FromTokens, ParseError},
};

use super::Expression;

/// A `let` binding: `let <name> = <expression>;`. Re-binding an existing
/// name overwrites it; there is no separate assignment statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Initialisation {
    pub name: String,
    pub value: Expression,
}

impl FromTokens for Initialisation {
    fn parse(tokens: &mut Tokens<Token>) -> Result<Self, ParseError> {
        tokens.next();

        let name = match tokens.next() {
            Some(Token::Id { value, .. }) => value,
            token => {
                return Err(ParseError {
                    message: "Expected variable name after 'let'".into(),
                    position: token.map(|token| token.position()),
                })
            }
        };

        expect(tokens, Terminal::Assign, "Expected '=' after variable name")?;

        let value = Expression::parse(tokens)?;

        expect(
            tokens,
            Terminal::Semicolon,
            "Expected ';' after variable declaration",
        )?;

        Ok(Initialisation { name, value })
    }
}
