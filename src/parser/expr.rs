use crate::{ast::ast::{BinaryOp, Expr}, errors::errors::{Error, ErrorImpl}, lexer::tokens::TokenKind};

use super::{lookups::BindingPower, parser::Parser};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    if !parser.get_nud_lookup().contains_key(&token_kind) {
        return Err(Error::new(ErrorImpl::UnexpectedToken { token: parser.current_token().value.clone() }, parser.get_position()));
    }

    let nud_fn = *parser.get_nud_lookup().get(&token_kind).unwrap();
    let mut left = nud_fn(parser)?;

    // While LED and current BP is less than BP of current token, continue folding
    // into lhs. Passing the operator's own binding power down with a strict
    // comparison makes every operator left-associative.
    while *parser.get_bp_lookup().get(&parser.current_token_kind()).unwrap_or(&BindingPower::Default) > bp {
        let token_kind = parser.current_token_kind();
        if !parser.get_led_lookup().contains_key(&token_kind) {
            return Err(Error::new(ErrorImpl::UnexpectedToken { token: parser.current_token().value.clone() }, parser.get_position()));
        }

        let led_fn = *parser.get_led_lookup().get(&token_kind).unwrap();
        let operator_bp = *parser.get_bp_lookup().get(&token_kind).unwrap();
        left = led_fn(parser, left, operator_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        TokenKind::Number => {
            let result = parser.current_token().value.parse();

            if result.is_err() {
                Err(Error::new(ErrorImpl::NumberParseError { token: parser.current_token().value.clone() }, parser.get_position()))
            } else {
                parser.advance();
                Ok(Expr::Number { value: result.unwrap() })
            }
        },
        TokenKind::Identifier => {
            Ok(Expr::Identifier { name: parser.advance().value.clone() })
        },
        _ => {
            Err(Error::new(ErrorImpl::UnexpectedToken { token: parser.current_token().value.clone() }, parser.get_position()))
        }
    }
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator_token = parser.advance().clone();

    let op = BinaryOp::from_token_kind(operator_token.kind).ok_or_else(|| Error::new(
        ErrorImpl::UnexpectedToken { token: operator_token.value.clone() },
        operator_token.span.start.clone(),
    ))?;

    let right = parse_expr(parser, bp)?;

    Ok(Expr::Binary {
        op,
        left: Box::new(left),
        right: Box::new(right),
    })
}

/// Completes `name ( )`. Calls are strictly nullary and parentheses occur
/// nowhere else in the expression grammar, so the callee must be a bare
/// identifier and the close paren must follow immediately.
pub fn parse_call_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    let open_paren = parser.advance().clone();

    let name = match left {
        Expr::Identifier { name } => name,
        _ => {
            return Err(Error::new(
                ErrorImpl::UnexpectedTokenDetailed {
                    token: open_paren.value.clone(),
                    message: String::from("only a bare name can be called"),
                },
                open_paren.span.start.clone(),
            ))
        }
    };

    let error = Error::new(
        ErrorImpl::UnexpectedTokenDetailed {
            token: parser.current_token().value.clone(),
            message: String::from("calls take no arguments"),
        },
        parser.get_position(),
    );
    parser.expect_error(TokenKind::CloseParen, Some(error))?;

    Ok(Expr::Call { name })
}
