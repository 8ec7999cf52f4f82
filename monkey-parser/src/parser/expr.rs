use super::*;
use crate::ast::Identifier;

impl<'a> Parser<'a> {
    /* Expressions */
    /// Parses any expression.
    /// This is equivalent to calling [`Self::parse_expr_precedence`] with [`Precedence::Lowest`].
    pub fn parse_expr(&mut self) -> Option<Expr> {
        self.parse_expr_precedence(Precedence::Lowest)
    }

    /// Parses an expression whose infix operators all bind tighter than `min_precedence`.
    /// To parse any expression use, [`Self::parse_expr`].
    ///
    /// Starts on the first token of the expression and stops on its last token.
    /// Gives up with [`SyntaxError::TooDeeplyNested`] past [`MAX_NESTING_DEPTH`] nested
    /// expressions.
    pub fn parse_expr_precedence(&mut self, min_precedence: Precedence) -> Option<Expr> {
        if self.depth >= MAX_NESTING_DEPTH {
            self.error(SyntaxError::TooDeeplyNested(MAX_NESTING_DEPTH));
            return None;
        }

        self.depth += 1;
        let expr = self.parse_expr_bp(min_precedence);
        self.depth -= 1;
        expr
    }

    fn parse_expr_bp(&mut self, min_precedence: Precedence) -> Option<Expr> {
        let prefix = match self.prefix_parse_fns.get(&self.current_token.kind) {
            Some(prefix) => *prefix,
            None => {
                self.error(SyntaxError::NoPrefixParseFn(self.current_token.kind.to_string()));
                return None;
            }
        };
        let mut lhs = prefix(self)?;

        loop {
            let infix = match self.infix_parse_fns.get(&self.peek_token.kind) {
                Some(infix) => *infix,
                None => break, // not a valid infix operator, stop parsing
            };
            if self.peek_token.kind.precedence() <= min_precedence {
                break; // does not bind tighter than the enclosing operator
            }

            self.next(); // current token is now the operator
            lhs = infix(self, lhs)?;
        }

        Some(lhs)
    }

    /* Expressions.Literals */
    pub(super) fn parse_integer_lit(&mut self) -> Option<Expr> {
        let token = self.current_token.clone();
        match token.literal.parse::<i64>() {
            Ok(value) => Some(Expr::IntegerLit { token, value }),
            Err(_) => {
                self.error(SyntaxError::InvalidInteger(token.literal));
                None
            }
        }
    }

    pub(super) fn parse_bool_lit(&mut self) -> Option<Expr> {
        let token = self.current_token.clone();
        let value = token.kind == TokenKind::True;
        Some(Expr::BoolLit { token, value })
    }

    /* Expressions.Identifier */
    pub(super) fn parse_identifier(&mut self) -> Option<Expr> {
        let token = self.current_token.clone();
        Some(Expr::Identifier(Identifier::from_token(token)))
    }

    /* Expressions.Operators */
    pub(super) fn parse_prefix_expr(&mut self) -> Option<Expr> {
        let token = self.current_token.clone();
        let op = token.literal.clone();
        self.next();

        let rhs = self.parse_expr_precedence(Precedence::Prefix)?;
        Some(Expr::Prefix {
            token,
            op,
            rhs: Box::new(rhs),
        })
    }

    /// Parses the right hand side of a binary operator.
    /// The operand is parsed at the operator's own precedence, which makes every binary operator
    /// left associative.
    pub(super) fn parse_infix_expr(&mut self, lhs: Expr) -> Option<Expr> {
        let token = self.current_token.clone();
        let op = token.literal.clone();
        let precedence = token.kind.precedence();
        self.next();

        let rhs = self.parse_expr_precedence(precedence)?;
        Some(Expr::Infix {
            token,
            lhs: Box::new(lhs),
            op,
            rhs: Box::new(rhs),
        })
    }

    pub(super) fn parse_grouped_expr(&mut self) -> Option<Expr> {
        self.next();
        let expr = self.parse_expr()?;
        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        Some(expr)
    }

    /* Expressions.Control */
    pub(super) fn parse_if_expr(&mut self) -> Option<Expr> {
        let token = self.current_token.clone();

        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        self.next();
        let condition = self.parse_expr()?;
        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }

        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let consequence = self.parse_block_stmt();

        let alternative = if self.eat_peek(TokenKind::Else) {
            if !self.expect_peek(TokenKind::LBrace) {
                return None;
            }
            Some(self.parse_block_stmt())
        } else {
            None
        };

        Some(Expr::If {
            token,
            condition: Box::new(condition),
            consequence,
            alternative,
        })
    }

    /* Expressions.Functions */
    pub(super) fn parse_fn_lit(&mut self) -> Option<Expr> {
        let token = self.current_token.clone();

        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        let params = self.parse_fn_params()?;

        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let body = self.parse_block_stmt();

        Some(Expr::FnLit {
            token,
            params,
            body,
        })
    }

    /// Parses `a, b, c)`. The current token must be `(`.
    fn parse_fn_params(&mut self) -> Option<Vec<Identifier>> {
        let mut params = Vec::new();
        if self.eat_peek(TokenKind::RParen) {
            return Some(params);
        }

        loop {
            if !self.expect_peek(TokenKind::Ident) {
                return None;
            }
            params.push(Identifier::from_token(self.current_token.clone()));

            if !self.eat_peek(TokenKind::Comma) {
                break;
            }
        }

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        Some(params)
    }

    pub(super) fn parse_fn_call_expr(&mut self, function: Expr) -> Option<Expr> {
        let token = self.current_token.clone();
        let args = self.parse_call_args()?;
        Some(Expr::FnCall {
            token,
            function: Box::new(function),
            args,
        })
    }

    /// Parses `a + 1, b)`. The current token must be `(`.
    fn parse_call_args(&mut self) -> Option<Vec<Expr>> {
        let mut args = Vec::new();
        if self.eat_peek(TokenKind::RParen) {
            return Some(args);
        }

        loop {
            self.next();
            args.push(self.parse_expr()?);

            if !self.eat_peek(TokenKind::Comma) {
                break;
            }
        }

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        Some(args)
    }
}
