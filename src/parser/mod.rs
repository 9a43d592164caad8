//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. It uses a Pratt parser for expressions
//! with the language's declared operator precedence and handles:
//!
//! - Statement parsing (travel blocks, conditionals, expression statements)
//! - Expression parsing (binary ops, nullary calls, literals)
//! - Block extent and dangling-else resolution
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with binding power for precedence handling.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
