//! Keyword resolution for identifier text.

use crate::token::Token;
use std::collections::HashMap;
use std::sync::OnceLock;

static KEYWORDS: OnceLock<HashMap<String, Token>> = OnceLock::new();

/// Builds the table on first use and returns it.
///
/// Each keyword and the logical operators `AND`/`OR` are registered in their
/// all-uppercase and all-lowercase spellings only. Mixed-case text such as
/// `SeLeCt` is deliberately left to resolve as an identifier.
fn keyword_table() -> &'static HashMap<String, Token> {
    KEYWORDS.get_or_init(|| {
        let mut table = HashMap::new();

        let words = Token::iter()
            .filter(|tok| tok.is_keyword())
            .chain([Token::And, Token::Or]);
        for tok in words {
            table.insert(tok.as_str().to_ascii_uppercase(), tok);
            table.insert(tok.as_str().to_ascii_lowercase(), tok);
        }

        // booleans are lowercase only
        table.insert("true".to_string(), Token::True);
        table.insert("false".to_string(), Token::False);

        log::debug!("keyword table initialized with {} entries", table.len());
        table
    })
}

/// Returns the token for a run of identifier text.
///
/// Matches are byte-exact against the registered spellings; anything else is
/// [`Token::Ident`].
pub fn lookup(ident: &str) -> Token {
    keyword_table().get(ident).copied().unwrap_or(Token::Ident)
}

/// All registered spellings, sorted by text.
pub fn keywords() -> Vec<(&'static str, Token)> {
    let mut entries: Vec<_> = keyword_table()
        .iter()
        .map(|(text, tok)| (text.as_str(), *tok))
        .collect();
    entries.sort_unstable_by_key(|(text, _)| *text);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_in_both_casings() {
        for tok in Token::iter().filter(|tok| tok.is_keyword()) {
            let text = tok.as_str();
            assert_eq!(lookup(&text.to_uppercase()), tok, "{text}");
            assert_eq!(lookup(&text.to_lowercase()), tok, "{text}");
        }
    }

    #[test]
    fn test_logical_operators() {
        assert_eq!(lookup("AND"), Token::And);
        assert_eq!(lookup("and"), Token::And);
        assert_eq!(lookup("OR"), Token::Or);
        assert_eq!(lookup("or"), Token::Or);
    }

    #[test]
    fn test_booleans_are_lowercase_only() {
        assert_eq!(lookup("true"), Token::True);
        assert_eq!(lookup("false"), Token::False);
        assert_eq!(lookup("True"), Token::Ident);
        assert_eq!(lookup("TRUE"), Token::Ident);
        assert_eq!(lookup("FALSE"), Token::Ident);
    }

    #[test]
    fn test_mixed_case_is_an_identifier() {
        assert_eq!(lookup("SeLeCt"), Token::Ident);
        assert_eq!(lookup("Select"), Token::Ident);
        assert_eq!(lookup("And"), Token::Ident);
    }

    #[test]
    fn test_plain_identifiers() {
        assert_eq!(lookup("cpu_usage"), Token::Ident);
        assert_eq!(lookup(""), Token::Ident);
        assert_eq!(lookup("selects"), Token::Ident);
        assert_eq!(lookup(" select"), Token::Ident);
    }

    #[test]
    fn test_other_display_text_is_not_registered() {
        for text in ["IDENT", "NUMBER", "STRING", "EOF", "+", "==", "(", ","] {
            assert_eq!(lookup(text), Token::Ident, "{text}");
        }
    }

    #[test]
    fn test_query_words() {
        let words = ["SELECT", "Select", "FROM", "cpu", "WHERE", "value"];
        let tokens: Vec<_> = words.iter().map(|w| lookup(w)).collect();
        assert_eq!(
            tokens,
            vec![
                Token::Select,
                Token::Ident,
                Token::From,
                Token::Ident,
                Token::Where,
                Token::Ident,
            ]
        );
    }

    #[test]
    fn test_table_contents() {
        let entries = keywords();
        // 19 keywords and 2 logical operators, two spellings each, plus the booleans
        assert_eq!(entries.len(), (19 + 2) * 2 + 2);
        assert!(entries.windows(2).all(|pair| pair[0].0 < pair[1].0));
        assert!(entries.contains(&("continuous", Token::Continuous)));
        assert!(entries.contains(&("true", Token::True)));
        assert!(!entries.iter().any(|(text, _)| *text == "TRUE"));
    }

    #[test]
    fn test_concurrent_lookups() {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                std::thread::spawn(|| {
                    (0..100)
                        .map(|_| lookup("select"))
                        .all(|tok| tok == Token::Select)
                })
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }
}
