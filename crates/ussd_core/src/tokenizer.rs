//! Tokenizer - cumulative input text parsing
//!
//! The gateway always resends the full input history rather than a diff, so
//! every turn reparses the whole string. These functions are pure and total;
//! the state machine never touches raw delimited text directly.

/// The gateway's turn delimiter inside the cumulative `text` field.
pub const TURN_DELIMITER: char = '*';

/// All tokens the user has entered so far, in order.
///
/// A brand-new session delivers an empty string, which means no tokens yet.
pub fn tokenize(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split(TURN_DELIMITER).collect()
}

/// The single most recent token: the text after the last delimiter, the
/// whole string when no delimiter is present, or the empty string for a
/// brand-new session.
pub fn latest_token(text: &str) -> &str {
    text.rsplit(TURN_DELIMITER).next().unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_yields_empty_latest_token() {
        assert_eq!(latest_token(""), "");
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn multi_turn_text_yields_last_answer() {
        assert_eq!(latest_token("2*3"), "3");
        assert_eq!(tokenize("2*3"), vec!["2", "3"]);
    }

    #[test]
    fn single_turn_text_is_its_own_latest_token() {
        assert_eq!(latest_token("2"), "2");
        assert_eq!(tokenize("2"), vec!["2"]);
    }

    #[test]
    fn delimiter_only_text_yields_empty_latest_token() {
        assert_eq!(latest_token("*"), "");
        assert_eq!(latest_token("2*"), "");
    }

    #[test]
    fn reparsing_is_idempotent() {
        let text = "1*idris, Ade Obi";
        assert_eq!(latest_token(text), latest_token(text));
        assert_eq!(tokenize(text), vec!["1", "idris, Ade Obi"]);
    }
}
