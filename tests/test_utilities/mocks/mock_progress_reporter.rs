use pc_builder::prelude::*;
use std::sync::{Arc, Mutex};

/// Records every reporter call as a tagged line so tests can assert on them
#[derive(Default, Clone)]
pub struct MockProgressReporter {
    pub messages: Arc<Mutex<Vec<String>>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, line: String) {
        self.messages.lock().unwrap().push(line);
    }

    pub fn get_messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.get_messages()
            .into_iter()
            .filter(|line| line.starts_with("Warning: "))
            .collect()
    }

    pub fn message_count(&self) -> usize {
        self.messages.lock().unwrap().len()
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.record(message.to_owned());
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        let line = match message {
            Some(label) => format!("Progress: {current}/{total} - {label}"),
            None => format!("Progress: {current}/{total}"),
        };
        self.record(line);
    }

    fn report_warning(&self, message: &str) {
        self.record(format!("Warning: {message}"));
    }

    fn report_completion(&self, message: &str) {
        self.record(format!("Completed: {message}"));
    }
}
