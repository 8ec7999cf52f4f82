//! AST node definitions.
//!
//! Every node keeps the token that introduced it; [`Stmt::token_literal`] and
//! [`Expr::token_literal`] return its literal. The [`fmt::Display`] implementations produce the
//! canonical rendering, with every prefix and infix expression fully parenthesized.

use crate::lexer::Token;
use std::fmt;

/// The parse root.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Top-level statements in source order.
    pub statements: Vec<Stmt>,
}

impl Program {
    pub fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map(Stmt::token_literal)
            .unwrap_or("")
    }
}

/// An identifier (e.g. `foo`).
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub token: Token,
    pub value: String,
}

impl Identifier {
    /// Builds an identifier from an `IDENT` token, reusing its literal as the name.
    pub fn from_token(token: Token) -> Self {
        let value = token.literal.clone();
        Self { token, value }
    }
}

/// A `{ ... }` delimited list of statements.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStmt {
    pub token: Token,
    pub statements: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// `let <name> = <value>;`
    LetStmt {
        token: Token,
        name: Identifier,
        value: Expr,
    },
    /// `return <value>;`
    ReturnStmt { token: Token, value: Expr },
    /// A bare expression, optionally terminated by `;`.
    ExprStmt { token: Token, expr: Expr },
}

impl Stmt {
    pub fn token_literal(&self) -> &str {
        match self {
            Stmt::LetStmt { token, .. }
            | Stmt::ReturnStmt { token, .. }
            | Stmt::ExprStmt { token, .. } => &token.literal,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Identifier(Identifier),
    IntegerLit {
        token: Token,
        value: i64,
    },
    BoolLit {
        token: Token,
        value: bool,
    },
    /// A prefix expression (e.g. `-a` or `!ok`).
    Prefix {
        token: Token,
        op: String,
        rhs: Box<Expr>,
    },
    /// A binary expression (e.g. `1+1`).
    Infix {
        token: Token,
        lhs: Box<Expr>,
        op: String,
        rhs: Box<Expr>,
    },
    /// `if (<condition>) { ... } else { ... }`
    If {
        token: Token,
        condition: Box<Expr>,
        consequence: BlockStmt,
        alternative: Option<BlockStmt>,
    },
    /// `fn(<params>) { ... }`
    FnLit {
        token: Token,
        params: Vec<Identifier>,
        body: BlockStmt,
    },
    /// A call expression (e.g. `add(1, 2)`). The token is the opening parenthesis.
    FnCall {
        token: Token,
        function: Box<Expr>,
        args: Vec<Expr>,
    },
}

impl Expr {
    pub fn token_literal(&self) -> &str {
        let token = match self {
            Expr::Identifier(ident) => &ident.token,
            Expr::IntegerLit { token, .. }
            | Expr::BoolLit { token, .. }
            | Expr::Prefix { token, .. }
            | Expr::Infix { token, .. }
            | Expr::If { token, .. }
            | Expr::FnLit { token, .. }
            | Expr::FnCall { token, .. } => token,
        };
        &token.literal
    }
}

/// Writes `items` separated by `", "`.
fn comma_separated<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl fmt::Display for BlockStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::LetStmt { token, name, value } => {
                write!(f, "{} {} = {};", token.literal, name, value)
            }
            Stmt::ReturnStmt { token, value } => write!(f, "{} {};", token.literal, value),
            Stmt::ExprStmt { expr, .. } => write!(f, "{}", expr),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Identifier(ident) => write!(f, "{}", ident),
            Expr::IntegerLit { token, .. } | Expr::BoolLit { token, .. } => {
                f.write_str(&token.literal)
            }
            Expr::Prefix { op, rhs, .. } => write!(f, "({}{})", op, rhs),
            Expr::Infix { lhs, op, rhs, .. } => write!(f, "({} {} {})", lhs, op, rhs),
            Expr::If {
                condition,
                consequence,
                alternative,
                ..
            } => {
                write!(f, "if{} {}", condition, consequence)?;
                if let Some(alternative) = alternative {
                    write!(f, "else {}", alternative)?;
                }
                Ok(())
            }
            Expr::FnLit { token, params, body } => {
                write!(f, "{}(", token.literal)?;
                comma_separated(f, params)?;
                write!(f, ") {}", body)
            }
            Expr::FnCall { function, args, .. } => {
                write!(f, "{}(", function)?;
                comma_separated(f, args)?;
                f.write_str(")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::TokenKind;

    fn ident(name: &str) -> Identifier {
        Identifier::from_token(Token::new(TokenKind::Ident, name))
    }

    #[test]
    fn test_display_let() {
        let program = Program {
            statements: vec![Stmt::LetStmt {
                token: Token::new(TokenKind::Let, "let"),
                name: ident("myVar"),
                value: Expr::Identifier(ident("anotherVar")),
            }],
        };
        assert_eq!(program.to_string(), "let myVar = anotherVar;");
        assert_eq!(program.token_literal(), "let");
    }

    #[test]
    fn test_display_nested() {
        let expr = Expr::Infix {
            token: Token::new(TokenKind::Plus, "+"),
            lhs: Box::new(Expr::Prefix {
                token: Token::new(TokenKind::Minus, "-"),
                op: "-".to_string(),
                rhs: Box::new(Expr::Identifier(ident("a"))),
            }),
            op: "+".to_string(),
            rhs: Box::new(Expr::IntegerLit {
                token: Token::new(TokenKind::Int, "5"),
                value: 5,
            }),
        };
        assert_eq!(expr.to_string(), "((-a) + 5)");
        assert_eq!(expr.token_literal(), "+");
    }

    #[test]
    fn test_empty_program() {
        let program = Program::default();
        assert_eq!(program.token_literal(), "");
        assert_eq!(program.to_string(), "");
    }
}
