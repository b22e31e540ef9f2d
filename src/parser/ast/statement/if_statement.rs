use crate::{
    lexer::{Terminal, Token, Tokens},
    parser::{expect, FromTokens, ParseError},
};

use super::{parse_body, Expression, Statement};

/// `if (<condition>) { ... }`. There is no `else`.
#[derive(Debug, Clone, PartialEq)]
pub struct IfStatement {
    pub condition: Expression,
    pub body: Vec<Statement>,
}

impl FromTokens for IfStatement {
    fn parse(tokens: &mut Tokens<Token>) -> Result<Self, ParseError> {
        tokens.next();

        expect(tokens, Terminal::LParen, "Expected '(' after 'if'")?;
        let condition = Expression::parse(tokens)?;
        expect(tokens, Terminal::RParen, "Expected ')' after condition")?;

        expect(tokens, Terminal::LBrace, "Expected '{' to start if block")?;
        let body = parse_body(tokens)?;
        expect(tokens, Terminal::RBrace, "Expected '}' to end if block")?;

        Ok(IfStatement { condition, body })
    }
}
