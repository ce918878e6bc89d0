//! Single-pass lexer
//!
//! Scans source text into a flat token stream. Every scanned byte belongs
//! to exactly one token; whitespace and comment tokens are only kept when
//! the options ask for them. The stream always ends with one `Eof` token.

use tracing::debug;

use super::tokens::{keyword_type, operator_type, punctuation_type, LiteralKind, Token, TokenType};
use crate::error::{Error, Result};

/// Lexer configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexerOptions {
    /// Emit `Whitespace` and `Newline` tokens
    pub include_whitespace: bool,
    /// Emit comment tokens
    pub include_comments: bool,
    /// Return an error instead of emitting recovery tokens
    pub raise_on_error: bool,
}

impl Default for LexerOptions {
    fn default() -> Self {
        Self {
            include_whitespace: false,
            include_comments: true,
            raise_on_error: false,
        }
    }
}

impl LexerOptions {
    /// Keep every token, never fail: what the renderers use
    pub fn lossless() -> Self {
        Self {
            include_whitespace: true,
            include_comments: true,
            raise_on_error: false,
        }
    }
}

/// Lexer over a borrowed source string
pub struct Lexer<'a> {
    source: &'a str,
    options: LexerOptions,
    /// Byte offset of the next unread character
    pos: usize,
    line: usize,
    column: usize,
    /// Position where the current token started
    token_start: usize,
    token_line: usize,
    token_column: usize,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a lexer for `source`
    pub fn new(source: &'a str, options: LexerOptions) -> Self {
        Self {
            source,
            options,
            pos: 0,
            line: 1,
            column: 1,
            token_start: 0,
            token_line: 1,
            token_column: 1,
            tokens: Vec::new(),
        }
    }

    /// Scan the whole input
    ///
    /// Can only fail when `raise_on_error` is set.
    pub fn tokenize(mut self) -> Result<Vec<Token>> {
        // Rough guess: one token every four bytes
        self.tokens.reserve(self.source.len() / 4 + 1);

        while !self.is_at_end() {
            self.token_start = self.pos;
            self.token_line = self.line;
            self.token_column = self.column;
            self.scan_token()?;
        }

        self.token_start = self.pos;
        self.token_line = self.line;
        self.token_column = self.column;
        self.push(TokenType::Eof);
        Ok(self.tokens)
    }

    fn scan_token(&mut self) -> Result<()> {
        let Some(ch) = self.advance() else {
            return Ok(());
        };

        match ch {
            '\n' => {
                if self.options.include_whitespace {
                    self.push(TokenType::Newline);
                }
                Ok(())
            }
            ' ' | '\t' | '\r' => {
                while matches!(self.peek(), Some(' ' | '\t' | '\r')) {
                    self.advance();
                }
                if self.options.include_whitespace {
                    self.push(TokenType::Whitespace);
                }
                Ok(())
            }
            '/' if self.peek() == Some('/') => {
                self.advance();
                self.scan_line_comment();
                Ok(())
            }
            '/' if self.peek() == Some('*') => {
                self.advance();
                self.scan_block_comment()
            }
            '"' | '\'' => self.scan_string(ch),
            'f' if matches!(self.peek(), Some('"' | '\'')) => {
                let quote = self.advance().unwrap_or('"');
                self.scan_template_string(quote)
            }
            'r' if matches!(self.peek(), Some('"' | '\'')) => {
                let quote = self.advance().unwrap_or('"');
                self.scan_raw_string(quote)
            }
            c if c.is_ascii_digit() => {
                self.scan_number(c);
                Ok(())
            }
            c if c.is_ascii_alphabetic() || c == '_' => {
                self.scan_identifier();
                Ok(())
            }
            c => self.scan_operator_or_punctuation(c),
        }
    }

    fn scan_line_comment(&mut self) {
        let is_doc = self.peek() == Some('/');
        while !matches!(self.peek(), Some('\n') | None) {
            self.advance();
        }
        if self.options.include_comments {
            self.push(if is_doc { TokenType::CommentDoc } else { TokenType::CommentLine });
        }
    }

    fn scan_block_comment(&mut self) -> Result<()> {
        // `/**` is a doc comment unless it is the empty `/**/`
        let is_doc = self.peek() == Some('*') && self.peek_next() != Some('/');

        let mut depth = 1usize;
        while depth > 0 {
            match (self.peek(), self.peek_next()) {
                (None, _) => break,
                (Some('/'), Some('*')) => {
                    depth += 1;
                    self.advance();
                    self.advance();
                }
                (Some('*'), Some('/')) => {
                    depth -= 1;
                    self.advance();
                    self.advance();
                }
                _ => {
                    self.advance();
                }
            }
        }

        if depth > 0 {
            self.unterminated(LiteralKind::BlockComment)?;
        }
        if self.options.include_comments {
            self.push(if is_doc { TokenType::CommentDoc } else { TokenType::CommentBlock });
        }
        Ok(())
    }

    fn scan_string(&mut self, quote: char) -> Result<()> {
        let kind = if quote == '"' { TokenType::String } else { TokenType::StringSingle };
        loop {
            match self.peek() {
                None => {
                    self.unterminated(LiteralKind::String)?;
                    break;
                }
                Some(c) if c == quote => {
                    self.advance();
                    break;
                }
                Some('\\') => {
                    // The escape char and whatever it escapes
                    self.advance();
                    self.advance();
                }
                Some(_) => {
                    self.advance();
                }
            }
        }
        self.push(kind);
        Ok(())
    }

    fn scan_template_string(&mut self, quote: char) -> Result<()> {
        loop {
            match self.peek() {
                None => {
                    self.unterminated(LiteralKind::TemplateString)?;
                    break;
                }
                Some(c) if c == quote => {
                    self.advance();
                    break;
                }
                Some('\\') => {
                    self.advance();
                    self.advance();
                }
                Some('{') => {
                    // Interpolation bodies are skipped, not tokenized
                    self.advance();
                    let mut depth = 1usize;
                    while depth > 0 {
                        match self.advance() {
                            Some('{') => depth += 1,
                            Some('}') => depth -= 1,
                            Some(_) => {}
                            None => break,
                        }
                    }
                }
                Some(_) => {
                    self.advance();
                }
            }
        }
        self.push(TokenType::StringTemplate);
        Ok(())
    }

    fn scan_raw_string(&mut self, quote: char) -> Result<()> {
        loop {
            match self.advance() {
                Some(c) if c == quote => break,
                Some(_) => {}
                None => {
                    self.unterminated(LiteralKind::RawString)?;
                    break;
                }
            }
        }
        self.push(TokenType::StringRaw);
        Ok(())
    }

    fn scan_number(&mut self, first: char) {
        if first == '0' {
            let radix = match self.peek() {
                Some('x' | 'X') => Some((TokenType::NumberHex, 16)),
                Some('b' | 'B') => Some((TokenType::NumberBinary, 2)),
                Some('o' | 'O') => Some((TokenType::NumberOctal, 8)),
                _ => None,
            };
            if let Some((kind, radix)) = radix {
                self.advance();
                self.advance_while(|c| c.is_digit(radix));
                self.push(kind);
                return;
            }
        }

        self.advance_while(|c| c.is_ascii_digit());

        let mut is_float = false;

        // `3.foo()` is a method call on an integer, not a float
        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            is_float = true;
            self.advance();
            self.advance_while(|c| c.is_ascii_digit());
        }

        // The exponent marker and sign belong to the number even without digits
        if matches!(self.peek(), Some('e' | 'E')) {
            is_float = true;
            self.advance();
            if matches!(self.peek(), Some('+' | '-')) {
                self.advance();
            }
            self.advance_while(|c| c.is_ascii_digit());
        }

        self.push(if is_float { TokenType::NumberFloat } else { TokenType::NumberInteger });
    }

    fn scan_identifier(&mut self) {
        self.advance_while(|c| c.is_ascii_alphanumeric() || c == '_');
        let word = &self.source[self.token_start..self.pos];
        let kind = keyword_type(word).unwrap_or(TokenType::Identifier);
        self.push(kind);
    }

    fn scan_operator_or_punctuation(&mut self, ch: char) -> Result<()> {
        // Longest match first: 3, then 2, then 1 characters
        for extra in [2usize, 1] {
            if let Some(end) = self.offset_after(extra) {
                let candidate = &self.source[self.token_start..end];
                if let Some(kind) = operator_type(candidate) {
                    for _ in 0..extra {
                        self.advance();
                    }
                    self.push(kind);
                    return Ok(());
                }
            }
        }

        let single = &self.source[self.token_start..self.pos];
        if let Some(kind) = operator_type(single) {
            self.push(kind);
            return Ok(());
        }

        if ch == ':' && self.peek() == Some(':') {
            self.advance();
            self.push(TokenType::DoubleColon);
            return Ok(());
        }

        match punctuation_type(ch) {
            Some(kind) => {
                self.push(kind);
                Ok(())
            }
            None => self.unexpected(ch),
        }
    }

    /// Unknown character: fail, or emit a one-character error token
    fn unexpected(&mut self, ch: char) -> Result<()> {
        if self.options.raise_on_error {
            return Err(Error::UnexpectedCharacter {
                ch,
                line: self.token_line,
                column: self.token_column,
            });
        }
        debug!(
            line = self.token_line,
            column = self.token_column,
            "unexpected character {ch:?}, emitting error token"
        );
        self.push(TokenType::Error);
        Ok(())
    }

    /// Literal ran off the end: fail, or keep the best-effort span
    fn unterminated(&self, kind: LiteralKind) -> Result<()> {
        if self.options.raise_on_error {
            return Err(Error::UnterminatedLiteral {
                kind,
                line: self.token_line,
                column: self.token_column,
            });
        }
        debug!(
            line = self.token_line,
            column = self.token_column,
            "unterminated {kind}, spanning to end of input"
        );
        Ok(())
    }

    fn push(&mut self, kind: TokenType) {
        self.tokens.push(Token {
            kind,
            text: self.source[self.token_start..self.pos].to_string(),
            start: self.token_start,
            end: self.pos,
            line: self.token_line,
            column: self.token_column,
        });
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn advance_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.advance();
        }
    }

    fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn peek_next(&self) -> Option<char> {
        self.peek_nth(1)
    }

    fn peek_nth(&self, n: usize) -> Option<char> {
        self.source[self.pos..].chars().nth(n)
    }

    /// Byte offset just past the next `n` characters, if there are that many
    fn offset_after(&self, n: usize) -> Option<usize> {
        let mut chars = self.source[self.pos..].char_indices();
        let (idx, ch) = chars.nth(n.checked_sub(1)?)?;
        Some(self.pos + idx + ch.len_utf8())
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }
}

/// Tokenize `source` with the given options
pub fn tokenize(source: &str, options: LexerOptions) -> Result<Vec<Token>> {
    Lexer::new(source, options).tokenize()
}

/// Tokenize with error recovery forced on
///
/// Never fails: bad input becomes `Error` tokens or literals spanning to
/// the end of the source.
pub fn tokenize_lenient(source: &str, options: LexerOptions) -> Vec<Token> {
    let options = LexerOptions {
        raise_on_error: false,
        ..options
    };
    match Lexer::new(source, options).tokenize() {
        Ok(tokens) => tokens,
        Err(e) => {
            // Every error path in the scanner is gated on `raise_on_error`
            debug!("lexer raised in recovery mode: {e}");
            whole_source_error(source)
        }
    }
}

/// One `Error` token covering `source`, then an EOF placed after it
fn whole_source_error(source: &str) -> Vec<Token> {
    let line = source.matches('\n').count() + 1;
    let last_line = source.rsplit('\n').next().unwrap_or_default();
    let mut tokens = Vec::with_capacity(2);
    if !source.is_empty() {
        tokens.push(Token {
            kind: TokenType::Error,
            text: source.to_string(),
            start: 0,
            end: source.len(),
            line: 1,
            column: 1,
        });
    }
    tokens.push(Token {
        kind: TokenType::Eof,
        text: String::new(),
        start: source.len(),
        end: source.len(),
        line,
        column: last_line.chars().count() + 1,
    });
    tokens
}
