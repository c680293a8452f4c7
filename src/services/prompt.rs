//! Blocking dialogs the controllers need from the page.

/// Confirmation and notification dialogs, e.g. `window.confirm` and
/// `window.alert` in a browser or a terminal prompt.
pub trait UserPrompt {
    /// Asks a yes/no question; `false` aborts the pending action.
    fn confirm(&self, message: &str) -> bool;

    /// Shows a message the user has to acknowledge.
    fn alert(&self, message: &str);
}

#[cfg(any(test, feature = "test-mocks"))]
mockall::mock! {
    pub Prompt {}

    impl UserPrompt for Prompt {
        fn confirm(&self, message: &str) -> bool;
        fn alert(&self, message: &str);
    }
}
