use crate::ast::{Expr, Program, Stmt};
use crate::lexer::{Lexer, Token, TokenKind};
use monkey_source::{Source, SyntaxError};
use std::collections::HashMap;
use std::mem;

mod expr;
mod stmt;

/// Maximum number of nested expressions (operands, groups, blocks) before parsing is abandoned.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Binding power of an infix-capable token. Higher binds tighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Lowest,
    /// `==` and `!=`
    Equals,
    /// `<` and `>`
    LessGreater,
    /// `+` and `-`
    Sum,
    /// `*` and `/`
    Product,
    /// `-x` and `!x`
    Prefix,
    /// `f(x)`
    Call,
}

impl TokenKind {
    /// Returns the infix precedence of the token, or [`Precedence::Lowest`] if it is not an infix
    /// operator.
    pub fn precedence(&self) -> Precedence {
        match self {
            TokenKind::Eq | TokenKind::NotEq => Precedence::Equals,
            TokenKind::Lt | TokenKind::Gt => Precedence::LessGreater,
            TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
            TokenKind::Asterisk | TokenKind::Slash => Precedence::Product,
            TokenKind::LParen => Precedence::Call,
            _ => Precedence::Lowest,
        }
    }
}

/// Rule invoked when a token starts an expression.
pub type PrefixParseFn<'a> = fn(&mut Parser<'a>) -> Option<Expr>;
/// Rule invoked when a token continues an expression. Receives the already parsed left operand.
pub type InfixParseFn<'a> = fn(&mut Parser<'a>, Expr) -> Option<Expr>;

pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current_token: Token,
    /// Cached token for peeking.
    peek_token: Token,
    prefix_parse_fns: HashMap<TokenKind, PrefixParseFn<'a>>,
    infix_parse_fns: HashMap<TokenKind, InfixParseFn<'a>>,
    /// Number of expressions currently being parsed, innermost included.
    depth: usize,
    /// Source code
    source: &'a Source<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a Source<'a>) -> Self {
        let mut lexer = Lexer::new(source.content);
        let current_token = lexer.next_token();
        let peek_token = lexer.next_token();

        let mut parser = Self {
            lexer,
            current_token,
            peek_token,
            prefix_parse_fns: HashMap::new(),
            infix_parse_fns: HashMap::new(),
            depth: 0,
            source,
        };

        parser.register_prefix(TokenKind::Ident, Parser::parse_identifier);
        parser.register_prefix(TokenKind::Int, Parser::parse_integer_lit);
        parser.register_prefix(TokenKind::True, Parser::parse_bool_lit);
        parser.register_prefix(TokenKind::False, Parser::parse_bool_lit);
        parser.register_prefix(TokenKind::Bang, Parser::parse_prefix_expr);
        parser.register_prefix(TokenKind::Minus, Parser::parse_prefix_expr);
        parser.register_prefix(TokenKind::LParen, Parser::parse_grouped_expr);
        parser.register_prefix(TokenKind::If, Parser::parse_if_expr);
        parser.register_prefix(TokenKind::Function, Parser::parse_fn_lit);

        for kind in &[
            TokenKind::Eq,
            TokenKind::NotEq,
            TokenKind::Lt,
            TokenKind::Gt,
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Asterisk,
            TokenKind::Slash,
        ] {
            parser.register_infix(*kind, Parser::parse_infix_expr);
        }
        parser.register_infix(TokenKind::LParen, Parser::parse_fn_call_expr);

        parser
    }

    fn register_prefix(&mut self, kind: TokenKind, rule: PrefixParseFn<'a>) {
        self.prefix_parse_fns.insert(kind, rule);
    }

    fn register_infix(&mut self, kind: TokenKind, rule: InfixParseFn<'a>) {
        self.infix_parse_fns.insert(kind, rule);
    }
}

impl<'a> Parser<'a> {
    /// Parses every statement up to `Eof`.
    /// Statements that fail to parse are left out of the [`Program`]; their errors are reported to
    /// the [`Source`].
    #[tracing::instrument(skip_all, fields(source_len = self.source.content.len()))]
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while !self.current_is(TokenKind::Eof) {
            match self.parse_stmt() {
                Some(stmt) => {
                    program.statements.push(stmt);
                    self.next();
                }
                None => self.synchronize(false),
            }
        }

        tracing::debug!(
            statements = program.statements.len(),
            errors = self.source.errors.len(),
            "parsed program"
        );
        program
    }
}

/// Parse utilities
impl<'a> Parser<'a> {
    /// Shifts the peek token into the current token and pulls a new peek token from the lexer.
    fn next(&mut self) {
        let peek = mem::replace(&mut self.peek_token, self.lexer.next_token());
        self.current_token = peek;
    }

    fn current_is(&self, kind: TokenKind) -> bool {
        self.current_token.kind == kind
    }

    fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek_token.kind == kind
    }

    /// Predicate that tests whether the peek token is of `kind` and advances onto it if yes as a
    /// side effect.
    fn eat_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_is(kind) {
            self.next();
            true
        } else {
            false
        }
    }

    /// Advances onto the peek token if it is of `kind`. Otherwise reports an error and stays in
    /// place.
    fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.eat_peek(kind) {
            true
        } else {
            self.peek_error(kind);
            false
        }
    }

    fn peek_error(&mut self, expected: TokenKind) {
        self.error(SyntaxError::UnexpectedToken {
            expected: expected.to_string(),
            got: self.peek_token.kind.to_string(),
        });
    }

    fn error(&self, error: SyntaxError) {
        tracing::debug!(%error, "syntax error");
        self.source.errors.add_error(error);
    }

    /// Skips the remainder of a statement that failed to parse, leaving the current token on the
    /// first token of the next statement.
    ///
    /// Skipping stops after a `;` or in front of `let`/`return`, counting only tokens outside any
    /// braces. Inside a block, an unbalanced `}` is left in place so that the block can end; at the
    /// top level it is skipped.
    fn synchronize(&mut self, in_block: bool) {
        let mut depth = 0usize;
        // the current token may still be the `let`/`return` of the failed statement
        let mut skipped_any = false;
        loop {
            match self.current_token.kind {
                TokenKind::Eof => return,
                TokenKind::Let | TokenKind::Return if depth == 0 && skipped_any => return,
                TokenKind::Semicolon if depth == 0 => {
                    self.next();
                    return;
                }
                TokenKind::RBrace if depth == 0 && in_block => return,
                TokenKind::RBrace => depth = depth.saturating_sub(1),
                TokenKind::LBrace => depth += 1,
                _ => {}
            }
            self.next();
            skipped_any = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    fn parse(source: &str) -> (Program, Vec<String>) {
        let source = source.into();
        let program = Parser::new(&source).parse_program();
        (program, source.errors.messages())
    }

    #[test]
    fn test_precedence_order() {
        assert!(Precedence::Lowest < Precedence::Equals);
        assert!(Precedence::Equals < Precedence::LessGreater);
        assert!(Precedence::LessGreater < Precedence::Sum);
        assert!(Precedence::Sum < Precedence::Product);
        assert!(Precedence::Product < Precedence::Prefix);
        assert!(Precedence::Prefix < Precedence::Call);
        assert_eq!(TokenKind::Semicolon.precedence(), Precedence::Lowest);
    }

    #[test]
    fn test_program_with_errors_continues() {
        let (program, errors) = parse("let x 5; let y = 10; return y;");
        assert_eq!(errors, vec!["expected next token to be: ASSIGN, got: INT"]);
        assert_snapshot!(program.to_string(), @"let y = 10;return y;");
    }

    #[test]
    fn test_errors_accumulate() {
        let (program, errors) = parse("let = 1; let x 2; let 3;");
        assert_eq!(
            errors,
            vec![
                "expected next token to be: IDENT, got: ASSIGN",
                "expected next token to be: ASSIGN, got: INT",
                "expected next token to be: IDENT, got: INT",
            ]
        );
        assert!(program.statements.is_empty());
    }

    #[test]
    fn test_recovery_without_semicolons() {
        let (program, errors) = parse("let x 5\nlet y = 10\nfoo");
        assert_eq!(errors, vec!["expected next token to be: ASSIGN, got: INT"]);
        assert_snapshot!(program.to_string(), @"let y = 10;foo");

        let (program, errors) = parse("let x 5\nlet = 2\nlet z 3\nreturn bar");
        assert_eq!(
            errors,
            vec![
                "expected next token to be: ASSIGN, got: INT",
                "expected next token to be: IDENT, got: ASSIGN",
                "expected next token to be: ASSIGN, got: INT",
            ]
        );
        assert_snapshot!(program.to_string(), @"return bar;");

        let (program, errors) = parse("if (a) { b } else c\nlet ok = 1;");
        assert_eq!(errors, vec!["expected next token to be: LBRACE, got: IDENT"]);
        assert_snapshot!(program.to_string(), @"let ok = 1;");
    }

    #[test]
    fn test_recovery_keeps_nested_lets_in_braces() {
        let (program, errors) = parse("let f = fn(x 1) { let y = 2 }\nreturn f");
        assert_eq!(errors, vec!["expected next token to be: RPAREN, got: INT"]);
        assert_snapshot!(program.to_string(), @"return f;");
    }

    #[test]
    fn test_illegal_token_is_a_parse_error() {
        let (program, errors) = parse("@; 5;");
        assert_eq!(errors, vec!["no prefix parse function for token kind ILLEGAL"]);
        assert_snapshot!(program.to_string(), @"5");
    }

    #[test]
    fn test_empty_input() {
        let (program, errors) = parse("");
        assert!(program.statements.is_empty());
        assert!(errors.is_empty());
    }
}
