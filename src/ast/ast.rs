use std::fmt::Display;

use crate::lexer::tokens::TokenKind;

/// Binary operators of the expression language.
///
/// Note the precedence the parser applies: comparisons bind *tighter* than
/// modulo, so `a % b == c` folds as `a % (b == c)`. This matches the
/// grammar's declared precedence levels and is not the conventional
/// arithmetic ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Modulo,
    Equals,
    NotEquals,
    Greater,
    Less,
}

impl BinaryOp {
    pub fn from_token_kind(kind: TokenKind) -> Option<BinaryOp> {
        match kind {
            TokenKind::Percent => Some(BinaryOp::Modulo),
            TokenKind::Equals => Some(BinaryOp::Equals),
            TokenKind::NotEquals => Some(BinaryOp::NotEquals),
            TokenKind::Greater => Some(BinaryOp::Greater),
            TokenKind::Less => Some(BinaryOp::Less),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOp::Modulo => "%",
            BinaryOp::Equals => "==",
            BinaryOp::NotEquals => "!=",
            BinaryOp::Greater => ">",
            BinaryOp::Less => "<",
        }
    }
}

impl Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Expressions: nullary calls, identifiers, integer literals and binary
/// operations. Each node exclusively owns its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Call {
        name: String,
    },
    Identifier {
        name: String,
    },
    Number {
        value: u32,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

/// Statements: travel blocks, conditionals and expression statements.
///
/// An expression statement keeps its trailing `* NUMBER` repeat factors as
/// an ordered list. The factors are not collapsed into a product; a
/// downstream consumer may treat each one as a distinct nested repetition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    Travel {
        count: u32,
        body: Vec<Stmt>,
    },
    If {
        condition: Expr,
        then_body: Vec<Stmt>,
        else_body: Option<Vec<Stmt>>,
    },
    Expr {
        expr: Expr,
        repeat_factors: Vec<u32>,
    },
}

/// An ordered sequence of top-level statements. Owns the whole tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub body: Vec<Stmt>,
}
