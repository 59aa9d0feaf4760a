//! Menu texts
//!
//! Every user-visible message lives here, without the `CON `/`END ` wire
//! prefixes; those are rendered once by [`ussd_core::Reply`].

pub const WELCOME_MENU: &str =
    "Welcome to YouSSD. What would you like to do?\n1. Sign up\n2. Access wallet";

pub const WALLET_MENU: &str =
    "Wallet Access:\n1. View Balance\n2. Send Tokens\n3. Back to Main Menu";

pub const SIGNUP_PROMPT: &str =
    "Enter your desired username and full name\ne.g 'idris, Ade Obi':";

pub const SIGNUP_FORMAT_HINT: &str =
    "Expected format 'username, full name'\ne.g 'idris, Ade Obi'. Try again:";

pub const INVALID_USERNAME: &str =
    "Invalid username. Use at least 3 letters or digits, nothing else. Try again:";

pub const RECIPIENT_PROMPT: &str = "Enter recipient username, phone number, or address:";

pub const AMOUNT_PROMPT: &str = "Enter amount to send (in SOL):";

pub const INVALID_INPUT: &str = "Invalid input. Please try again.";

pub const INVALID_AMOUNT: &str = "Invalid amount. Please try again.";

pub const GENERIC_ERROR: &str = "An error occurred. Please try again.";

pub const SIGN_UP_FIRST: &str = "Please sign up first.";

pub const USER_EXISTS: &str = "User already exists";

pub const RECIPIENT_NOT_FOUND: &str =
    "Recipient not found. Please check the details and try again.";

pub const GOODBYE: &str = "Thank you for using YouSSD. Goodbye!";

pub const TRANSFER_CANCELLED: &str = "Transfer cancelled.";

pub const TRANSFER_FAILED: &str = "Failed to send tokens. Please try again later.";

pub fn welcome_back(username: &str, balance: f64) -> String {
    format!(
        "Welcome back {username}.\nCurrent balance: {balance} SOL.\n\nWhat would you like to do?\n1. Access wallet\n2. Quit"
    )
}

pub fn balance_message(balance: f64) -> String {
    format!("Your balance is: {balance} SOL")
}

pub fn confirm_prompt(amount: f64, recipient: &str) -> String {
    format!("Send {amount} SOL to {recipient}?\n1. Confirm\n2. Cancel")
}

pub fn transfer_success(signature: &str) -> String {
    format!("Tokens sent successfully. Transaction signature: {signature}")
}

/// Signup farewell with the public key split across two lines, the first
/// holding its leading 20 characters.
pub fn signup_success(username: &str, public_key: &str) -> String {
    let split = public_key.len().min(20);
    format!(
        "Thank you for signing up, {username}!\nYour account has been created.\nYour public key is: \n{}\n{}",
        &public_key[..split],
        &public_key[split..]
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signup_success_splits_key_at_twenty_characters() {
        let message = signup_success("idris", "abcdefghij0123456789TAIL");
        assert!(message.contains("abcdefghij0123456789\nTAIL"));
    }

    #[test]
    fn signup_success_tolerates_short_keys() {
        let message = signup_success("idris", "short");
        assert!(message.contains("short"));
    }

    #[test]
    fn confirm_prompt_names_intent() {
        assert_eq!(
            confirm_prompt(1.5, "bob"),
            "Send 1.5 SOL to bob?\n1. Confirm\n2. Cancel"
        );
    }
}
