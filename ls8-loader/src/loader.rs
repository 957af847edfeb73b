//! Main loader logic

use std::io::ErrorKind;
use std::num::IntErrorKind;
use std::path::Path;
use logos::Logos;
use ls8_spec::{Program, MEMORY_SIZE};
use crate::error::{LoaderError, Result};
use crate::lexer::Token;

/// Parse program source into a program.
///
/// One binary literal per line; `#` comments, blank lines and comment-only
/// lines are ignored.
pub fn parse(source: &str) -> Result<Program> {
    let mut code = Vec::new();
    let mut line = 1;
    let mut seen_on_line = false;

    let mut lex = Token::lexer(source);
    while let Some(token) = lex.next() {
        match token {
            Ok(Token::Newline) => {
                line += 1;
                seen_on_line = false;
            }
            Ok(Token::Word(word)) => {
                if seen_on_line {
                    return Err(LoaderError::UnexpectedToken { line, token: word });
                }
                code.push(parse_literal(&word, line)?);
                seen_on_line = true;
            }
            Err(()) => {
                return Err(LoaderError::InvalidLiteral {
                    line,
                    token: lex.slice().to_string(),
                });
            }
        }
    }

    if code.len() > MEMORY_SIZE {
        return Err(LoaderError::ProgramTooLarge { len: code.len() });
    }

    tracing::debug!(instructions = code.len(), "parsed program");
    Ok(Program { code })
}

fn parse_literal(token: &str, line: usize) -> Result<u8> {
    u8::from_str_radix(token, 2).map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow => LoaderError::LiteralOutOfRange {
            line,
            token: token.to_string(),
        },
        _ => LoaderError::InvalidLiteral {
            line,
            token: token.to_string(),
        },
    })
}

/// Read and parse a program file
pub fn load_file(path: impl AsRef<Path>) -> Result<Program> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => LoaderError::FileNotFound { path: path.to_path_buf() },
        _ => LoaderError::IoError(e),
    })?;
    parse(&source)
}

/// Like [`load_file`], but a missing file is reported and yields an empty program.
///
/// Parse errors and other I/O errors still propagate.
pub fn load_file_or_empty(path: impl AsRef<Path>) -> Result<Program> {
    match load_file(path) {
        Err(err @ LoaderError::FileNotFound { .. }) => {
            tracing::warn!("{}", err);
            Ok(Program::new())
        }
        other => other,
    }
}
