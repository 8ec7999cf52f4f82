//! Tokenizer and Pratt parser for the Monkey language.

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod visitor;

use ast::Program;
use lexer::Lexer;
use monkey_source::Source;
use parser::Parser;

/// Lazily tokenizes `source`. The sequence ends with exactly one [`lexer::TokenKind::Eof`] token.
/// Use [`Lexer::next_token`] directly to keep pulling `Eof` past the end.
pub fn tokenize(source: &str) -> Lexer<'_> {
    Lexer::new(source)
}

/// Parses `source` into a [`Program`] along with every syntax error message, in the order they
/// were found.
/// An empty error list means the program is complete.
pub fn parse(source: &str) -> (Program, Vec<String>) {
    let source = Source::new(source);
    let program = Parser::new(&source).parse_program();
    (program, source.errors.messages())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Expr, Stmt};
    use crate::lexer::{Token, TokenKind};

    #[test]
    fn test_tokenize() {
        let tokens: Vec<Token> = tokenize("let x = 5;").collect();
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenKind::Let, "let"),
                Token::new(TokenKind::Ident, "x"),
                Token::new(TokenKind::Assign, "="),
                Token::new(TokenKind::Int, "5"),
                Token::new(TokenKind::Semicolon, ";"),
                Token::eof(),
            ]
        );
    }

    #[test]
    fn test_parse() {
        let (program, errors) = parse("let x = 5;");
        assert!(errors.is_empty());
        assert_eq!(program.statements.len(), 1);
        match &program.statements[0] {
            Stmt::LetStmt { name, value, .. } => {
                assert_eq!(name.token.literal, "x");
                assert!(matches!(value, Expr::IntegerLit { value: 5, .. }));
            }
            other => panic!("expected let statement, got {:?}", other),
        }

        let (program, errors) = parse("return 5;");
        assert!(errors.is_empty());
        assert_eq!(program.statements[0].token_literal(), "return");
    }

    #[test]
    fn test_parse_reports_errors_and_continues() {
        let (program, errors) = parse("let x 5; let y = 1; let = 2; y");
        assert_eq!(
            errors,
            vec![
                "expected next token to be: ASSIGN, got: INT",
                "expected next token to be: IDENT, got: ASSIGN",
            ]
        );
        assert_eq!(program.to_string(), "let y = 1;y");

        let (program, errors) = parse("let x 5\nlet y = 1\nlet = 2\nreturn y");
        assert_eq!(
            errors,
            vec![
                "expected next token to be: ASSIGN, got: INT",
                "expected next token to be: IDENT, got: ASSIGN",
            ]
        );
        assert_eq!(program.to_string(), "let y = 1;return y;");
    }
}
