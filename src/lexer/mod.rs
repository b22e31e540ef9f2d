mod lexmap;
mod token;
mod tokens;

pub use lexmap::*;
pub use token::*;
pub use tokens::*;

use once_cell::sync::Lazy;

macro_rules! terminal {
    ($map:ident, $name:ident, $value:expr) => {
        $map.insert($value, Terminal::$name);
    };
}

static LEX_MAP: Lazy<LexMap> = Lazy::new(|| {
    let mut m = LexMap::default();

    terminal!(m, True, "true");
    terminal!(m, False, "false");
    terminal!(m, Let, "let");
    terminal!(m, Print, "print");
    terminal!(m, If, "if");
    terminal!(m, While, "while");
    terminal!(m, Break, "break");
    terminal!(m, Continue, "continue");
    terminal!(m, Page, "page");
    terminal!(m, Equal, "==");
    terminal!(m, NotEqual, "!=");
    terminal!(m, LessOrEqual, "<=");
    terminal!(m, GreaterOrEqual, ">=");
    terminal!(m, LessThan, "<");
    terminal!(m, GreaterThan, ">");
    terminal!(m, Assign, "=");
    terminal!(m, Plus, "+");
    terminal!(m, Minus, "-");
    terminal!(m, Times, "*");
    terminal!(m, Divide, "/");
    terminal!(m, LParen, "(");
    terminal!(m, RParen, ")");
    terminal!(m, LBrace, "{");
    terminal!(m, RBrace, "}");
    terminal!(m, LBracket, "[");
    terminal!(m, RBracket, "]");
    terminal!(m, Semicolon, ";");

    m
});

/// Lexer for turnways source. Scanning never fails: the first character
/// which starts no token (or an unterminated string) simply ends the token
/// stream, and the gap surfaces later as a failed parser expectation.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    tokens: Vec<Token>,
    input: &'a str,
    position: usize,
    line: usize,
    col: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            tokens: vec![],
            input,
            position: 0,
            line: 1,
            col: 1,
        }
    }

    fn peek_byte(&self) -> Option<u8> {
        self.input.as_bytes().get(self.position).copied()
    }

    fn advance(&mut self, len: usize) {
        self.position += len;
        self.col += len;
    }

    fn eat_whitespace(&mut self) {
        while let Some(next) = self.peek_byte() {
            if !next.is_ascii_whitespace() {
                return;
            }

            if next == b'\n' {
                self.line += 1;
                self.col = 1;
            } else {
                self.col += 1;
            }
            self.position += 1;
        }
    }

    pub fn lex(mut self) -> Vec<Token> {
        loop {
            self.eat_whitespace();

            let Some(next) = self.peek_byte() else {
                break;
            };

            let token = match next {
                b'a'..=b'z' | b'A'..=b'Z' | b'_' => Some(self.lex_word()),
                b'0'..=b'9' => Some(self.lex_number()),
                b'"' => self.lex_string(),
                _ => self.lex_terminal(),
            };

            match token {
                Some(token) => self.tokens.push(token),
                None => break,
            }
        }

        self.tokens
    }

    /// Lex a keyword or an identifier. Keywords win, but only over the
    /// whole word: `letter` is an identifier, not `let` plus `ter`.
    fn lex_word(&mut self) -> Token {
        let position = (self.line, self.col);
        let start = self.position;

        while let Some(next) = self.peek_byte() {
            if !next.is_ascii_alphanumeric() && next != b'_' {
                break;
            }
            self.advance(1);
        }

        let word = &self.input[start..self.position];

        match LEX_MAP.get(word) {
            Some(terminal) => terminal.to_token(position),
            None => Token::Id {
                value: word.to_string(),
                position,
            },
        }
    }

    /// Lex one or more digits, optionally followed by `.` and one or more
    /// digits. A trailing dot is not part of the number: `1.` lexes as `1`
    /// and leaves the dot behind (which ends the stream).
    fn lex_number(&mut self) -> Token {
        let position = (self.line, self.col);
        let start = self.position;

        self.eat_digits();

        let bytes = self.input.as_bytes();
        if bytes.get(self.position) == Some(&b'.')
            && bytes
                .get(self.position + 1)
                .is_some_and(|next| next.is_ascii_digit())
        {
            self.advance(1);
            self.eat_digits();
        }

        let value = self.input[start..self.position].parse().unwrap_or_default();

        Token::Number { value, position }
    }

    fn eat_digits(&mut self) {
        while self.peek_byte().is_some_and(|next| next.is_ascii_digit()) {
            self.advance(1);
        }
    }

    /// Lex a double-quoted string. There are no escapes; any character but
    /// the closing quote belongs to the string, newlines included. Returns
    /// `None` when the string never closes.
    fn lex_string(&mut self) -> Option<Token> {
        let position = (self.line, self.col);
        let start = self.position;

        self.advance(1);

        while let Some(next) = self.peek_byte() {
            match next {
                b'"' => {
                    self.advance(1);
                    let value = self.input[start + 1..self.position - 1].to_string();
                    return Some(Token::Str { value, position });
                }
                b'\n' => {
                    self.line += 1;
                    self.col = 1;
                    self.position += 1;
                }
                _ => self.advance(1),
            }
        }

        None
    }

    /// Lex a punctuator via maximal munch over the lex map, so `<=` wins
    /// over `<` followed by `=`. Returns `None` when the input matches no
    /// terminal.
    fn lex_terminal(&mut self) -> Option<Token> {
        let position = (self.line, self.col);
        let start = self.position;
        let mut end = start + 1;

        while self
            .input
            .get(start..end + 1)
            .is_some_and(|read| LEX_MAP.can_match(read))
        {
            end += 1;
        }

        let terminal = LEX_MAP.get(self.input.get(start..end)?)?;
        self.advance(end - start);

        Some(terminal.to_token(position))
    }
}
