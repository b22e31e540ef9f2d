mod if_statement;
mod initialisation;
mod print_statement;
mod while_loop;

pub use self::if_statement::*;
pub use self::initialisation::*;
pub use self::print_statement::*;
pub use self::while_loop::*;

use crate::{
    lexer::{Terminal, Token, Tokens},
    parser::{expect, FromTokens, ParseError},
};

use super::Expression;

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Let(Initialisation),
    Print(PrintStatement),
    If(IfStatement),
    While(WhileLoop),
    Break,
    Continue,
    Page,
    Expression(Expression),
}

impl FromTokens for Statement {
    fn parse(tokens: &mut Tokens<Token>) -> Result<Self, ParseError> {
        let Some(next) = tokens.peek() else {
            return Err(ParseError::eof("statement"));
        };

        match next {
            Token::Let { .. } => Ok(Statement::Let(Initialisation::parse(tokens)?)),
            Token::Print { .. } => Ok(Statement::Print(PrintStatement::parse(tokens)?)),
            Token::If { .. } => Ok(Statement::If(IfStatement::parse(tokens)?)),
            Token::While { .. } => Ok(Statement::While(WhileLoop::parse(tokens)?)),
            Token::Break { .. } => {
                tokens.next();
                expect(tokens, Terminal::Semicolon, "Expected ';' after 'break'")?;
                Ok(Statement::Break)
            }
            Token::Continue { .. } => {
                tokens.next();
                expect(tokens, Terminal::Semicolon, "Expected ';' after 'continue'")?;
                Ok(Statement::Continue)
            }
            Token::Page { .. } => {
                tokens.next();
                expect(tokens, Terminal::Semicolon, "Expected ';' after 'page'")?;
                Ok(Statement::Page)
            }
            _ => Ok(Statement::Expression(Expression::parse(tokens)?)),
        }
    }
}

/// Parse the statements of an `if`/`while` body, up to (not including) the
/// closing brace.
pub(crate) fn parse_body(tokens: &mut Tokens<Token>) -> Result<Vec<Statement>, ParseError> {
    let mut body = vec![];

    while !matches!(tokens.peek(), None | Some(Token::RBrace { .. })) {
        body.push(Statement::parse(tokens)?);
    }

    Ok(body)
}

#[cfg(test)]
mod tests {
    use crate::lexer::Lexer;

    use super::*;

    #[test]
    fn test_parse_break() {
        let mut tokens = Lexer::new("break;").lex().into();

        assert_eq!(Ok(Statement::Break), Statement::parse(&mut tokens));
    }

    #[test]
    fn test_parse_continue() {
        let mut tokens = Lexer::new("continue;").lex().into();

        assert_eq!(Ok(Statement::Continue), Statement::parse(&mut tokens));
    }

    #[test]
    fn test_parse_page() {
        let mut tokens = Lexer::new("page;").lex().into();

        assert_eq!(Ok(Statement::Page), Statement::parse(&mut tokens));
    }

    #[test]
    fn test_break_needs_semicolon() {
        let mut tokens = Lexer::new("break").lex().into();

        assert_eq!(
            Err(ParseError {
                message: "Expected ';' after 'break'".into(),
                position: None,
            }),
            Statement::parse(&mut tokens)
        );
    }

    #[test]
    fn test_bare_expression_is_a_statement() {
        let mut tokens = Lexer::new("1 + 2").lex().into();

        let result = Statement::parse(&mut tokens);
        assert!(matches!(result, Ok(Statement::Expression(_))));
    }
}
