mod binary;
mod comparison;

pub use self::binary::*;
pub use self::comparison::*;

use crate::{
    lexer::{Terminal, Token, Tokens},
    parser::{expect, FromTokens, ParseError},
};

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Num(f64),
    Str(String),
    Bool(bool),
    Id(String),
    Array(Vec<Expression>),
    Index {
        target: Box<Expression>,
        index: Box<Expression>,
    },
    Binary(Box<BinaryExpression>),
    Comparison(Box<Comparison>),
}

impl FromTokens for Expression {
    /// expression := comparison indexing*
    ///
    /// Index suffixes attach once the whole comparison has parsed, so they
    /// bind less tightly than any operator: `x < y[0]` indexes the result
    /// of the comparison, not `y`.
    fn parse(tokens: &mut Tokens<Token>) -> Result<Self, ParseError> {
        let node = Self::parse_comparison(tokens)?;
        Self::parse_index(node, tokens)
    }
}

impl Expression {
    fn parse_index(
        mut node: Expression,
        tokens: &mut Tokens<Token>,
    ) -> Result<Expression, ParseError> {
        while let Some(Token::LBracket { .. }) = tokens.peek() {
            tokens.next();
            let index = Expression::parse(tokens)?;
            expect(tokens, Terminal::RBracket, "Expected ']' after array index")?;

            node = Expression::Index {
                target: Box::new(node),
                index: Box::new(index),
            };
        }

        Ok(node)
    }

    /// comparison := term (CMP term)?
    ///
    /// At most one comparison operator: chains like `a < b < c` do not
    /// parse.
    fn parse_comparison(tokens: &mut Tokens<Token>) -> Result<Expression, ParseError> {
        let node = Self::parse_term(tokens)?;

        let Some(next) = tokens.peek() else {
            return Ok(node);
        };

        let converter = match next {
            Token::Equal { .. } => Comparison::Equal as fn(_, _) -> _,
            Token::NotEqual { .. } => Comparison::NotEqual,
            Token::LessThan { .. } => Comparison::LessThan,
            Token::GreaterThan { .. } => Comparison::GreaterThan,
            Token::LessOrEqual { .. } => Comparison::LessOrEqual,
            Token::GreaterOrEqual { .. } => Comparison::GreaterOrEqual,
            _ => return Ok(node),
        };

        tokens.next();
        let right = Self::parse_term(tokens)?;

        Ok(Expression::Comparison(Box::new(converter(node, right))))
    }

    /// term := factor ((+|-) factor)*, left-associative.
    ///
    /// `*` and `/` lex but no rule here (or anywhere) consumes them; a
    /// stray `*` fails over in [`Self::parse_factor`] as an unexpected
    /// token.
    fn parse_term(tokens: &mut Tokens<Token>) -> Result<Expression, ParseError> {
        let mut node = Self::parse_factor(tokens)?;

        loop {
            let converter = match tokens.peek() {
                Some(Token::Plus { .. }) => BinaryExpression::Addition as fn(_, _) -> _,
                Some(Token::Minus { .. }) => BinaryExpression::Subtraction,
                _ => break,
            };

            tokens.next();
            let right = Self::parse_factor(tokens)?;

            node = Expression::Binary(Box::new(converter(node, right)));
        }

        Ok(node)
    }

    fn parse_factor(tokens: &mut Tokens<Token>) -> Result<Expression, ParseError> {
        match tokens.next() {
            Some(Token::Number { value, .. }) => Ok(Expression::Num(value)),
            Some(Token::Str { value, .. }) => Ok(Expression::Str(value)),
            Some(Token::True { .. }) => Ok(Expression::Bool(true)),
            Some(Token::False { .. }) => Ok(Expression::Bool(false)),
            Some(Token::Id { value, .. }) => Ok(Expression::Id(value)),
            Some(Token::LBracket { .. }) => Self::parse_array(tokens),
            Some(Token::LParen { .. }) => {
                let expression = Expression::parse(tokens)?;
                expect(tokens, Terminal::RParen, "Expected ')'")?;
                Ok(expression)
            }
            Some(token) => Err(ParseError {
                message: format!("Unexpected token: {token}"),
                position: Some(token.position()),
            }),
            None => Err(ParseError::eof("expression")),
        }
    }

    /// Array literal elements up to the closing bracket. The language has
    /// no comma token, so several elements are simply written side by side.
    fn parse_array(tokens: &mut Tokens<Token>) -> Result<Expression, ParseError> {
        let mut elements = vec![];

        while !matches!(tokens.peek(), None | Some(Token::RBracket { .. })) {
            elements.push(Expression::parse(tokens)?);
        }

        expect(
            tokens,
            Terminal::RBracket,
            "Expected ']' to close array literal",
        )?;

        Ok(Expression::Array(elements))
    }
}
