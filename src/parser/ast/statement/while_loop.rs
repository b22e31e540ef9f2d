use crate::{
    lexer::{Terminal, Token, Tokens},
    parser::{expect, FromTokens, ParseError},
};

use super::{parse_body, Expression, Statement};

/// `while (<condition>) { ... }`. `break` and `continue` inside the body
/// steer the innermost enclosing loop.
#[derive(Debug, Clone, PartialEq)]
pub struct WhileLoop {
    pub condition: Expression,
    pub body: Vec<Statement>,
}

impl FromTokens for WhileLoop {
    fn parse(tokens: &mut Tokens<Token>) -> Result<Self, ParseError> {
        tokens.next();

        expect(tokens, Terminal::LParen, "Expected '(' after 'while'")?;
        let condition = Expression::parse(tokens)?;
        expect(tokens, Terminal::RParen, "Expected ')' after condition")?;

        expect(tokens, Terminal::LBrace, "Expected '{' to start while block")?;
        let body = parse_body(tokens)?;
        expect(tokens, Terminal::RBrace, "Expected '}' to end while block")?;

        Ok(WhileLoop { condition, body })
    }
}
