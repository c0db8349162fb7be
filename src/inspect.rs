//! Human and JSON renderings of how identifier text resolves.

use crate::config::OutputFormat;
use crate::keyword::{keywords, lookup};
use crate::token::{Token, TokenClass};
use serde::Serialize;

/// What a word resolves to, with everything a caller may want to see about the token.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolution {
    pub text: String,
    pub token: Token,
    pub code: u8,
    pub class: TokenClass,
    pub precedence: u8,
    pub display: &'static str,
}

impl Resolution {
    pub fn describe(text: impl Into<String>, token: Token) -> Self {
        Self {
            text: text.into(),
            token,
            code: token.code(),
            class: token.class(),
            precedence: token.precedence(),
            display: token.as_str(),
        }
    }

    pub fn render(&self, format: OutputFormat) -> Result<String, serde_json::Error> {
        match format {
            OutputFormat::Json => serde_json::to_string(self),
            OutputFormat::Text => Ok(format!(
                "{:<16} {:<12} code={:<3} class={:<11} prec={}",
                self.text,
                format!("{:?}", self.token),
                self.code,
                self.class.to_string(),
                self.precedence,
            )),
        }
    }
}

/// Resolves one word of identifier text.
pub fn resolve(text: &str) -> Resolution {
    Resolution::describe(text, lookup(text))
}

/// Resolves every whitespace-separated word of a line.
pub fn resolve_line(line: &str) -> Vec<Resolution> {
    line.split_whitespace().map(resolve).collect()
}

/// Resolves each word as given, without splitting it further.
pub fn resolve_words<S: AsRef<str>>(words: &[S]) -> Vec<Resolution> {
    words.iter().map(|w| resolve(w.as_ref())).collect()
}

/// One rendered line per token, in code order.
pub fn token_listing(format: OutputFormat) -> Result<Vec<String>, serde_json::Error> {
    Token::iter()
        .map(|tok| Resolution::describe(tok.as_str(), tok).render(format))
        .collect()
}

/// One rendered line per registered keyword spelling.
pub fn keyword_listing(format: OutputFormat) -> Result<Vec<String>, serde_json::Error> {
    keywords()
        .into_iter()
        .map(|(text, tok)| Resolution::describe(text, tok).render(format))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_line() {
        let kinds: Vec<_> = resolve_line("  SELECT Select\tFROM cpu WHERE value ")
            .into_iter()
            .map(|r| r.token)
            .collect();
        assert_eq!(
            kinds,
            vec![
                Token::Select,
                Token::Ident,
                Token::From,
                Token::Ident,
                Token::Where,
                Token::Ident,
            ]
        );
        assert!(resolve_line("   ").is_empty());
    }

    #[test]
    fn test_resolve_words_keeps_each_word_whole() {
        let words = ["select from".to_string(), "WHERE".to_string()];
        let resolved = resolve_words(&words);
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[0].text, "select from");
        assert_eq!(resolved[0].token, Token::Ident);
        assert_eq!(resolved[1].token, Token::Where);
    }

    #[test]
    fn test_resolution_fields() {
        let r = resolve("and");
        assert_eq!(r.text, "and");
        assert_eq!(r.token, Token::And);
        assert_eq!(r.code, 18);
        assert_eq!(r.class, TokenClass::Operator);
        assert_eq!(r.precedence, 2);
        assert_eq!(r.display, "AND");
    }

    #[test]
    fn test_render_json() {
        let json = resolve("where").render(OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["text"], "where");
        assert_eq!(value["token"], "Where");
        assert_eq!(value["code"], 49);
        assert_eq!(value["class"], "keyword");
        assert_eq!(value["precedence"], 0);
        assert_eq!(value["display"], "WHERE");
    }

    #[test]
    fn test_render_text() {
        let line = resolve("cpu").render(OutputFormat::Text).unwrap();
        assert!(line.starts_with("cpu "));
        assert!(line.contains("Ident"));
        assert!(line.contains("code=4"));
        assert!(line.contains("class=literal"));
        assert!(line.ends_with("prec=0"));
    }

    #[test]
    fn test_listings() {
        assert_eq!(token_listing(OutputFormat::Text).unwrap().len(), Token::ALL.len());
        assert_eq!(keyword_listing(OutputFormat::Json).unwrap().len(), keywords().len());
    }
}
