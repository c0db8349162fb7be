//! The token vocabulary for InfluxQL.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A lexical token of the InfluxQL language.
///
/// Codes are stable: each variant's discriminant is the numeric code the scanner
/// and parser agree on. The gaps at 3, 12, 13, 26, 30 and 50 are the boundaries
/// between the literal, operator and keyword groups and are never tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Token {
    // Special
    Illegal = 0,
    Eof = 1,
    Ws = 2,

    // Literals
    Ident = 4,      // main
    Number = 5,     // 12345.67
    Duration = 6,   // 13h
    String = 7,     // "abc"
    BadString = 8,  // "abc
    BadEscape = 9,  // \q
    True = 10,      // true
    False = 11,     // false

    // Operators
    Add = 14, // +
    Sub = 15, // -
    Mul = 16, // *
    Div = 17, // /

    And = 18, // AND
    Or = 19,  // OR

    Eq = 20,  // ==
    Neq = 21, // !=
    Lt = 22,  // <
    Lte = 23, // <=
    Gt = 24,  // >
    Gte = 25, // >=

    // Punctuation
    LParen = 27, // (
    RParen = 28, // )
    Comma = 29,  // ,

    // Keywords
    As = 31,
    Asc = 32,
    By = 33,
    Continuous = 34,
    Delete = 35,
    Desc = 36,
    Drop = 37,
    Explain = 38,
    From = 39,
    Inner = 40,
    Join = 41,
    Limit = 42,
    List = 43,
    Merge = 44,
    Order = 45,
    Queries = 46,
    Select = 47,
    Series = 48,
    Where = 49,
}

/// The group a token belongs to. Every token is in exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenClass {
    Special,
    Literal,
    Operator,
    Punctuation,
    Keyword,
}

impl fmt::Display for TokenClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenClass::Special => "special",
            TokenClass::Literal => "literal",
            TokenClass::Operator => "operator",
            TokenClass::Punctuation => "punctuation",
            TokenClass::Keyword => "keyword",
        };
        f.write_str(name)
    }
}

/// Returned when a raw code does not name a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown token code {0}")]
pub struct UnknownTokenCode(pub u8);

impl Token {
    /// Every token, in code order.
    pub const ALL: [Token; 45] = [
        Token::Illegal,
        Token::Eof,
        Token::Ws,
        Token::Ident,
        Token::Number,
        Token::Duration,
        Token::String,
        Token::BadString,
        Token::BadEscape,
        Token::True,
        Token::False,
        Token::Add,
        Token::Sub,
        Token::Mul,
        Token::Div,
        Token::And,
        Token::Or,
        Token::Eq,
        Token::Neq,
        Token::Lt,
        Token::Lte,
        Token::Gt,
        Token::Gte,
        Token::LParen,
        Token::RParen,
        Token::Comma,
        Token::As,
        Token::Asc,
        Token::By,
        Token::Continuous,
        Token::Delete,
        Token::Desc,
        Token::Drop,
        Token::Explain,
        Token::From,
        Token::Inner,
        Token::Join,
        Token::Limit,
        Token::List,
        Token::Merge,
        Token::Order,
        Token::Queries,
        Token::Select,
        Token::Series,
        Token::Where,
    ];

    /// Iterates over every token in code order.
    pub fn iter() -> impl Iterator<Item = Token> {
        Self::ALL.into_iter()
    }

    /// The numeric code of this token.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Maps a raw code back to its token. Group boundaries and codes past the
    /// last keyword yield `None`.
    pub fn from_code(code: u8) -> Option<Token> {
        // ALL is sorted by code
        Self::ALL
            .binary_search_by_key(&code, |tok| tok.code())
            .ok()
            .map(|idx| Self::ALL[idx])
    }

    pub fn class(self) -> TokenClass {
        match self {
            Token::Illegal | Token::Eof | Token::Ws => TokenClass::Special,

            Token::Ident
            | Token::Number
            | Token::Duration
            | Token::String
            | Token::BadString
            | Token::BadEscape
            | Token::True
            | Token::False => TokenClass::Literal,

            Token::Add
            | Token::Sub
            | Token::Mul
            | Token::Div
            | Token::And
            | Token::Or
            | Token::Eq
            | Token::Neq
            | Token::Lt
            | Token::Lte
            | Token::Gt
            | Token::Gte => TokenClass::Operator,

            Token::LParen | Token::RParen | Token::Comma => TokenClass::Punctuation,

            Token::As
            | Token::Asc
            | Token::By
            | Token::Continuous
            | Token::Delete
            | Token::Desc
            | Token::Drop
            | Token::Explain
            | Token::From
            | Token::Inner
            | Token::Join
            | Token::Limit
            | Token::List
            | Token::Merge
            | Token::Order
            | Token::Queries
            | Token::Select
            | Token::Series
            | Token::Where => TokenClass::Keyword,
        }
    }

    /// Returns true for literal tokens.
    pub fn is_literal(self) -> bool {
        self.class() == TokenClass::Literal
    }

    /// Returns true for operator tokens.
    pub fn is_operator(self) -> bool {
        self.class() == TokenClass::Operator
    }

    /// Returns true for keyword tokens.
    pub fn is_keyword(self) -> bool {
        self.class() == TokenClass::Keyword
    }

    /// Binding strength of a binary operator, from 1 (OR) to 5 (`*`, `/`).
    ///
    /// Anything that is not a binary operator returns 0, so a precedence
    /// climbing parser can stop on it.
    pub fn precedence(self) -> u8 {
        match self {
            Token::Or => 1,
            Token::And => 2,
            Token::Eq | Token::Neq | Token::Lt | Token::Lte | Token::Gt | Token::Gte => 3,
            Token::Add | Token::Sub => 4,
            Token::Mul | Token::Div => 5,
            _ => 0,
        }
    }

    /// The canonical text of the token, for diagnostics only.
    ///
    /// `Duration`, `BadString` and `BadEscape` have no text and return `""`,
    /// so this must not be used to compare tokens.
    pub fn as_str(self) -> &'static str {
        match self {
            Token::Illegal => "ILLEGAL",
            Token::Eof => "EOF",
            Token::Ws => "WS",

            Token::Ident => "IDENT",
            Token::Number => "NUMBER",
            Token::String => "STRING",
            Token::True => "TRUE",
            Token::False => "FALSE",
            Token::Duration | Token::BadString | Token::BadEscape => "",

            Token::Add => "+",
            Token::Sub => "-",
            Token::Mul => "*",
            Token::Div => "/",

            Token::And => "AND",
            Token::Or => "OR",

            Token::Eq => "==",
            Token::Neq => "!=",
            Token::Lt => "<",
            Token::Lte => "<=",
            Token::Gt => ">",
            Token::Gte => ">=",

            Token::LParen => "(",
            Token::RParen => ")",
            Token::Comma => ",",

            Token::As => "AS",
            Token::Asc => "ASC",
            Token::By => "BY",
            Token::Continuous => "CONTINUOUS",
            Token::Delete => "DELETE",
            Token::Desc => "DESC",
            Token::Drop => "DROP",
            Token::Explain => "EXPLAIN",
            Token::From => "FROM",
            Token::Inner => "INNER",
            Token::Join => "JOIN",
            Token::Limit => "LIMIT",
            Token::List => "LIST",
            Token::Merge => "MERGE",
            Token::Order => "ORDER",
            Token::Queries => "QUERIES",
            Token::Select => "SELECT",
            Token::Series => "SERIES",
            Token::Where => "WHERE",
        }
    }
}

impl TryFrom<u8> for Token {
    type Error = UnknownTokenCode;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Token::from_code(code).ok_or(UnknownTokenCode(code))
    }
}

impl From<Token> for u8 {
    fn from(tok: Token) -> u8 {
        tok.code()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display text for a raw token code. Codes that are not tokens render as `""`.
pub fn token_str(code: u8) -> &'static str {
    Token::from_code(code).map_or("", Token::as_str)
}

/// The line and character position of a token's first character.
/// Both are zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Pos {
    pub line: usize,
    pub char: usize,
}

impl Pos {
    pub fn new(line: usize, char: usize) -> Self {
        Self { line, char }
    }
}

/// Renders one-based, as editors count.
impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.char + 1)
    }
}
