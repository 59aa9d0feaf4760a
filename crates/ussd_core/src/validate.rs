//! Signup input validation
//!
//! The username rule (minimum length 3, ASCII alphanumeric only) is part of
//! the public contract: it is user-visible and tested end to end.

/// Whether a username is acceptable for signup.
pub fn validate_username(username: &str) -> bool {
    username.len() >= 3 && username.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Split a signup answer of the form `username, full name`.
///
/// Returns `None` when the answer has no comma separator. Both parts are
/// trimmed; extra commas are folded into the full name.
pub fn split_signup(input: &str) -> Option<(&str, &str)> {
    let (username, full_name) = input.split_once(',')?;
    Some((username.trim(), full_name.trim()))
}

/// Capitalize each whitespace-separated word, lowercasing the rest.
pub fn title_case(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
