use logos::Logos;
use std::fmt;

#[derive(Debug, Logos, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // identifiers and literals
    #[regex("[a-zA-Z_]+")]
    Ident,
    #[regex("[0-9]+")]
    Int,

    // operators
    #[token("=")]
    Assign,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus, // NOTE: can also be prefix
    #[token("!")]
    Bang,
    #[token("*")]
    Asterisk,
    #[token("/")]
    Slash,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("==")]
    Eq,
    #[token("!=")]
    NotEq,

    // punctuation
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,

    // keywords
    #[token("fn")]
    Function,
    #[token("let")]
    Let,
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("return")]
    Return,

    // misc
    #[regex(r"[ \t\n\r]+", logos::skip)]
    #[error]
    Illegal,

    /// Only generated by [`Lexer`] once the underlying logos lexer is exhausted.
    Eof,
}

impl TokenKind {
    /// The canonical upper-case name used in diagnostics and token dumps.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Ident => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Bang => "BANG",
            TokenKind::Asterisk => "ASTERISK",
            TokenKind::Slash => "SLASH",
            TokenKind::Lt => "LT",
            TokenKind::Gt => "GT",
            TokenKind::Eq => "EQ",
            TokenKind::NotEq => "NOT_EQ",
            TokenKind::Comma => "COMMA",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::Function => "FUNCTION",
            TokenKind::Let => "LET",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Return => "RETURN",
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Eof => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A lexed token. The literal is the exact source text (empty for [`TokenKind::Eof`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Self {
            kind,
            literal: literal.into(),
        }
    }

    pub fn eof() -> Self {
        Self::new(TokenKind::Eof, "")
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{kind: {}, literal: {:?}}}", self.kind, self.literal)
    }
}

/// Pull-based tokenizer over a source buffer.
///
/// [`Lexer::next_token`] keeps returning [`TokenKind::Eof`] once the input is exhausted.
/// Iterating the lexer yields exactly one `Eof` token and then stops.
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, TokenKind>,
    source: &'a str,
    emitted_eof: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            inner: TokenKind::lexer(source),
            source,
            emitted_eof: false,
        }
    }

    /// Returns the next token. Never fails: unrecognized characters become [`TokenKind::Illegal`].
    ///
    /// An `Illegal` token covers one whole UTF-8 character, not one byte, so that its literal is
    /// always valid text: `"é"` yields a single `Illegal` token with literal `"é"`. For ASCII input
    /// this is exactly one token per unrecognized byte.
    pub fn next_token(&mut self) -> Token {
        let kind = match self.inner.next() {
            Some(kind) => kind,
            None => return Token::eof(),
        };

        let span = self.inner.span();
        if kind == TokenKind::Illegal {
            // the illegal literal is always one whole character, even when it is multi-byte
            let ch = self.source[span.start..].chars().next().unwrap_or_default();
            let end = span.start + ch.len_utf8();
            if end > span.end {
                self.inner.bump(end - span.end);
            }
            tracing::trace!(character = ?ch, position = span.start, "illegal character");
            return Token::new(kind, ch.to_string());
        }

        Token::new(kind, &self.source[span])
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.emitted_eof {
            return None;
        }
        let token = self.next_token();
        if token.kind == TokenKind::Eof {
            self.emitted_eof = true;
        }
        Some(token)
    }
}

impl<'a> std::iter::FusedIterator for Lexer<'a> {}
