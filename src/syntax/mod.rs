//! Syntax module
//!
//! This module provides the pieces every renderer builds on:
//! - Token types and their classification
//! - The lexer that produces them
//! - Terminal styling primitives

mod lexer;
mod style;
mod tokens;

pub use lexer::{tokenize, tokenize_lenient, Lexer, LexerOptions};
pub(crate) use style::emit;
pub use style::{Color, Paint, Rgb, Style, NAMED_COLORS, RESET};
pub use tokens::{
    keyword_type, operator_type, punctuation_type, Category, ColorRole, LiteralKind, Token,
    TokenType, KEYWORDS, OPERATORS,
};
