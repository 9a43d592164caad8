//! Lexical analysis for gifdsl source text.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source code using regex patterns
//! - Keyword recognition with exact-match priority over identifiers
//! - Token position tracking for error reporting
//! - `#` line comments and whitespace handling

pub mod lexer;
pub mod tokens;
