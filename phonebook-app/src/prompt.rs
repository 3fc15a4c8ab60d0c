use async_trait::async_trait;
use std::io::Write;

/// A blocking yes/no question put to the user. The controller asks one
/// before overwriting a duplicate name and one before deleting.
#[async_trait]
pub trait ConfirmPrompt {
    async fn confirm(&self, message: &str) -> bool;
}

/// Reads the answer from the terminal. Anything other than an explicit
/// yes counts as no.
pub struct TerminalPrompt;

#[async_trait]
impl ConfirmPrompt for TerminalPrompt {
    async fn confirm(&self, message: &str) -> bool {
        print!("{message} [y/N] ");
        let _ = std::io::stdout().flush();

        let mut line = String::new();
        if std::io::stdin().read_line(&mut line).is_err() {
            return false;
        }

        matches!(line.trim(), "y" | "Y" | "yes")
    }
}
