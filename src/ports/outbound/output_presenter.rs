use crate::shared::Result;

/// OutputPresenter port for presenting rendered reports
///
/// This port abstracts where a rendered build report or candidate list
/// ends up (stdout, a file, ...).
pub trait OutputPresenter {
    /// Presents the rendered content
    ///
    /// # Errors
    /// Returns an error if writing to the destination fails
    fn present(&self, content: &str) -> Result<()>;
}
