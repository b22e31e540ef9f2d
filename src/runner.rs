//! The driver: from raw file text to rotated output on a sink.

use std::io::{self, Write};

use log::{debug, trace};

use crate::{
    interpreter::Interpreter,
    lexer::Lexer,
    page::PageBuffer,
    parser,
    rotate::{flip, flop},
};

/// Run a turnways source file against a sink for display text.
///
/// The raw text goes through both rotations before lexing, which squares
/// ragged lines up with trailing spaces. Parse and runtime errors are
/// reported through the page buffer, never as an `Err`; the buffer is
/// flushed at the end no matter what.
pub fn run(raw: &str, sink: &mut dyn Write) -> io::Result<()> {
    let source = flip(&flop(raw));
    trace!("normalized source:\n{source}");

    let mut page = PageBuffer::new();

    let tokens = Lexer::new(&source).lex();
    debug!("lexed {count} tokens", count = tokens.len());

    match parser::parse(&mut tokens.into()) {
        Ok(statements) => {
            debug!(
                "parsed {count} top-level statements",
                count = statements.len()
            );

            let interpreter = Interpreter::from_ast(statements);
            if let Err(error) = interpreter.run(&mut page, sink) {
                page.append(&format!("An error occurred: {error}"));
            }
        }
        Err(error) => page.append(&format!("An error occurred: {error}")),
    }

    page.flush(sink)
}
