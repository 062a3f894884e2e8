/// ProgressReporter port for user-facing status output
///
/// Use cases report what they are doing through this port instead of
/// writing to a terminal themselves.
pub trait ProgressReporter {
    /// Reports an informational message
    fn report(&self, message: &str);

    /// Reports progress through a fixed number of steps
    ///
    /// # Arguments
    /// * `current` - Steps finished so far
    /// * `total` - Total number of steps
    /// * `message` - Optional description of the current step
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a condition the user should know about but that does not stop the operation
    fn report_warning(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
