//! Lexical tokens of the InfluxQL query language: the token vocabulary,
//! operator precedence and keyword resolution shared by the scanner and parser.

pub mod config;
pub mod inspect;
pub mod keyword;
pub mod token;

pub use keyword::lookup;
pub use token::{Pos, Token, TokenClass, UnknownTokenCode};
