use crate::{ast::ast::Stmt, errors::errors::{Error, ErrorImpl}, lexer::tokens::{Token, TokenKind}, parser::{expr::parse_expr, lookups::BindingPower}};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let handler = parser.get_stmt_lookup().get(&parser.current_token_kind()).copied();
    if let Some(stmt_fn) = handler {
        return stmt_fn(parser);
    }

    let expr = parse_expr(parser, BindingPower::Default)?;

    // Trailing `* NUMBER` repeat factors, kept in source order.
    let mut repeat_factors = vec![];
    while parser.current_token_kind() == TokenKind::Star {
        parser.advance();
        let factor = parser.expect(TokenKind::Number)?;
        repeat_factors.push(parse_count(&factor)?);
    }

    Ok(Stmt::Expr {
        expr,
        repeat_factors,
    })
}

/// `with travel NUMBER :` followed by a block of statements.
pub fn parse_travel_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();

    let error = Error::new(ErrorImpl::UnexpectedTokenDetailed { token: parser.current_token().value.clone(), message: String::from("expected `travel` after `with`") }, parser.get_position());
    parser.expect_error(TokenKind::Travel, Some(error))?;

    let count_token = parser.expect(TokenKind::Number)?;
    let count = parse_count(&count_token)?;

    parser.expect(TokenKind::Colon)?;

    let body = parse_block(parser)?;

    Ok(Stmt::Travel { count, body })
}

/// `if EXPR : ... [else : ...]`.
///
/// A dangling `else` binds to the innermost open `if`: `parse_block` stops
/// at the `else` token because it cannot start a statement, so the most
/// recently opened `if` is the first to see it.
pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();

    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Colon)?;

    let then_body = parse_block(parser)?;

    let else_body;
    if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        parser.expect(TokenKind::Colon)?;
        else_body = Some(parse_block(parser)?);
    } else {
        else_body = None;
    }

    Ok(Stmt::If {
        condition,
        then_body,
        else_body,
    })
}

/// Parses statements into a block for as long as the next token can start
/// a statement.
///
/// The grammar has no block-closing token, so block extent is a policy:
/// anything that is neither a statement keyword nor a primary-expression
/// starter (notably `else`, which belongs to an enclosing `if`) ends the
/// block.
pub fn parse_block(parser: &mut Parser) -> Result<Vec<Stmt>, Error> {
    let mut body = vec![];

    while parser.has_tokens() && at_stmt_start(parser) {
        body.push(parse_stmt(parser)?);
    }

    Ok(body)
}

fn at_stmt_start(parser: &Parser) -> bool {
    let kind = parser.current_token_kind();
    parser.get_stmt_lookup().contains_key(&kind) || parser.get_nud_lookup().contains_key(&kind)
}

fn parse_count(token: &Token) -> Result<u32, Error> {
    token.value.parse().map_err(|_| {
        Error::new(
            ErrorImpl::NumberParseError {
                token: token.value.clone(),
            },
            token.span.start.clone(),
        )
    })
}
