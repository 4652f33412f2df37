use crate::error::Result;

/// Operator I/O used by [`Session`](super::Session)
///
/// Implementations decide how lines are read and shown. Answers are returned
/// as typed; the session and the field editor trim and normalize them.
pub trait Prompter {
    /// Ask for a file name. `default` may be offered for completion; an
    /// empty answer is resolved to it by the caller.
    fn read_filename(&self, prompt: &str, default: Option<&str>) -> Result<String>;

    /// Ask a yes/no question
    fn confirm(&self, prompt: &str) -> Result<bool>;

    /// Ask for one line of free text
    fn read_line(&self, prompt: &str) -> Result<String>;

    fn display_message(&self, message: &str);

    fn display_warning(&self, message: &str);
}

/// Interpret a yes/no answer ("y", "yes", case-insensitive)
pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
