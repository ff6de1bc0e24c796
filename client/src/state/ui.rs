#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for theme and the chat dock.
#[derive(Clone, Copy, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
    /// External toggle read by the chat panel gate. Owned here, never by
    /// the gate itself.
    pub chat_open: bool,
}
