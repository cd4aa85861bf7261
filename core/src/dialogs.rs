//! Blocking user prompts, injected into pages.
//!
//! Pages never open dialogs themselves. A renderer supplies an implementation
//! that asks the user; tests supply scripted answers.

use async_trait::async_trait;

#[async_trait]
pub trait Dialogs: Send + Sync {
    /// Ask a yes/no question. `true` means the user agreed.
    async fn confirm(&self, message: &str) -> bool;

    /// Show a message the user must acknowledge.
    async fn alert(&self, message: &str);
}

/// Answers every confirmation with a fixed value and drops alerts. Useful for
/// non-interactive drivers.
#[derive(Debug, Clone, Copy)]
pub struct AutoConfirm(pub bool);

#[async_trait]
impl Dialogs for AutoConfirm {
    async fn confirm(&self, _message: &str) -> bool {
        self.0
    }

    async fn alert(&self, message: &str) {
        tracing::warn!(%message, "alert dismissed automatically");
    }
}
