//! # Lexer for LS-8 program source

use logos::Logos;

/// Tokens for LS-8 program source
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[\p{White_Space}&&[^\n]]+")] // Skip whitespace (not newlines)
#[logos(skip r"#[^\n]*")] // Skip comments
pub enum Token {
    /// Any run of non-blank characters; validated as a binary literal by the loader
    #[regex(r"[^\p{White_Space}#]+", |lex| lex.slice().to_string())]
    Word(String),

    /// Newline
    #[token("\n")]
    Newline,
}
