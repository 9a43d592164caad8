use std::collections::HashMap;

use crate::{ast::ast::{Expr, Stmt}, errors::errors::Error, lexer::tokens::TokenKind};

use super::{expr::*, parser::Parser, stmt::*};

/// Binding powers, weakest first.
///
/// The grammar defines modulo at precedence level 1 and the comparisons at
/// level 2, the reverse of conventional arithmetic-vs-comparison ordering.
/// `Modulo` therefore sits below `Relational` here and `a % b == c` folds
/// as `a % (b == c)`.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Modulo,
    Relational,
    Call,
    Primary,
}

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, Error>;
pub type NUDHandler = fn(&mut Parser) -> Result<Expr, Error>;
pub type LEDHandler = fn(&mut Parser, Expr, BindingPower) -> Result<Expr, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Modulo binds weakest
    parser.led(TokenKind::Percent, BindingPower::Modulo, parse_binary_expr);

    // Relational
    parser.led(TokenKind::Equals, BindingPower::Relational, parse_binary_expr);
    parser.led(TokenKind::NotEquals, BindingPower::Relational, parse_binary_expr);
    parser.led(TokenKind::Greater, BindingPower::Relational, parse_binary_expr);
    parser.led(TokenKind::Less, BindingPower::Relational, parse_binary_expr);

    // `name ( )` - the only place parentheses occur; there is no grouping NUD
    parser.led(TokenKind::OpenParen, BindingPower::Call, parse_call_expr);

    // Literals and symbols
    parser.nud(TokenKind::Number, parse_primary_expr);
    parser.nud(TokenKind::Identifier, parse_primary_expr);

    // Statements
    parser.stmt(TokenKind::With, parse_travel_stmt);
    parser.stmt(TokenKind::If, parse_if_stmt);

    // Star is deliberately not registered as a LED: `* NUMBER` repeat
    // suffixes belong to the statement level, not the expression grammar.
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
