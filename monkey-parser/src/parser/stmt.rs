use super::*;
use crate::ast::{BlockStmt, Identifier};

impl<'a> Parser<'a> {
    /// Parses a statement.
    /// On return, the current token is the last token of the statement (its `;` if present).
    pub fn parse_stmt(&mut self) -> Option<Stmt> {
        match self.current_token.kind {
            TokenKind::Let => self.parse_let_stmt(),
            TokenKind::Return => self.parse_return_stmt(),
            _ => self.parse_expr_stmt(),
        }
    }

    /// Parses statements until the closing `}` (or `Eof`). The current token must be `{`.
    pub fn parse_block_stmt(&mut self) -> BlockStmt {
        let token = self.current_token.clone();
        let mut statements = Vec::new();
        self.next();

        while !self.current_is(TokenKind::RBrace) && !self.current_is(TokenKind::Eof) {
            match self.parse_stmt() {
                Some(stmt) => {
                    statements.push(stmt);
                    self.next();
                }
                None => self.synchronize(true),
            }
        }

        BlockStmt { token, statements }
    }

    fn parse_let_stmt(&mut self) -> Option<Stmt> {
        let token = self.current_token.clone();

        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }
        let name = Identifier::from_token(self.current_token.clone());

        if !self.expect_peek(TokenKind::Assign) {
            return None;
        }
        self.next();

        let value = self.parse_expr()?;
        self.eat_peek(TokenKind::Semicolon);
        Some(Stmt::LetStmt { token, name, value })
    }

    fn parse_return_stmt(&mut self) -> Option<Stmt> {
        let token = self.current_token.clone();
        self.next();

        let value = self.parse_expr()?;
        self.eat_peek(TokenKind::Semicolon);
        Some(Stmt::ReturnStmt { token, value })
    }

    fn parse_expr_stmt(&mut self) -> Option<Stmt> {
        let token = self.current_token.clone();
        let expr = self.parse_expr()?;
        // semicolons are optional so that `5 + 5` works in the REPL
        self.eat_peek(TokenKind::Semicolon);
        Some(Stmt::ExprStmt { token, expr })
    }
}
