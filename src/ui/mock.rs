//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use nbenv::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//!
//! // Use ui in code under test...
//! ui.message("Installing packages...");
//! ui.success("pandas is already installed");
//!
//! // Assert on captured interactions
//! assert!(ui.has_message("Installing packages"));
//! assert!(ui.has_success("already installed"));
//! ```

use super::{OutputMode, SpinnerHandle, UserInterface};

/// Mock UI implementation for testing.
///
/// `lines` keeps every status line in display order, prefixed with the
/// glyph a real UI would print, so tests can assert on ordering.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    spinners: Vec<String>,
    lines: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self {
            mode: OutputMode::Normal,
            ..Default::default()
        }
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all spinner messages that were started.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// Every line in display order, glyph-prefixed.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Clear all captured interactions.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.successes.clear();
        self.warnings.clear();
        self.errors.clear();
        self.headers.clear();
        self.spinners.clear();
        self.lines.clear();
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
        self.lines.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
        self.lines.push(format!("✓ {}", msg));
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
        self.lines.push(format!("⚠ {}", msg));
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
        self.lines.push(format!("✗ {}", msg));
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner::new())
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
        self.lines.push(title.to_string());
    }
}

/// Mock spinner that records whether it was cleared.
#[derive(Debug, Default)]
pub struct MockSpinner {
    cleared: bool,
}

impl MockSpinner {
    /// Create a new mock spinner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `finish_and_clear` has been called.
    pub fn is_cleared(&self) -> bool {
        self.cleared
    }
}

impl SpinnerHandle for MockSpinner {
    fn finish_and_clear(&mut self) {
        self.cleared = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_lines_in_order_with_glyphs() {
        let mut ui = MockUI::new();
        ui.message("Installing packages...");
        ui.success("os is already installed");
        ui.error("Failed to install xyz");

        assert_eq!(
            ui.lines(),
            &[
                "Installing packages...".to_string(),
                "✓ os is already installed".to_string(),
                "✗ Failed to install xyz".to_string(),
            ]
        );
    }

    #[test]
    fn captures_spinners_and_headers() {
        let mut ui = MockUI::new();
        ui.show_header("Testing Scientific Packages");
        let mut spinner = ui.start_spinner("Installing nltk...");
        spinner.finish_and_clear();

        assert_eq!(ui.headers(), &["Testing Scientific Packages".to_string()]);
        assert_eq!(ui.spinners(), &["Installing nltk...".to_string()]);
    }

    #[test]
    fn clear_resets_everything() {
        let mut ui = MockUI::new();
        ui.warning("careful");
        ui.clear();
        assert!(ui.warnings().is_empty());
        assert!(ui.lines().is_empty());
    }

    #[test]
    fn mock_spinner_records_clear() {
        let mut spinner = MockSpinner::new();
        assert!(!spinner.is_cleared());
        spinner.finish_and_clear();
        assert!(spinner.is_cleared());
    }

    #[test]
    fn with_mode_sets_output_mode() {
        let ui = MockUI::with_mode(OutputMode::Verbose);
        assert_eq!(ui.output_mode(), OutputMode::Verbose);
    }
}
