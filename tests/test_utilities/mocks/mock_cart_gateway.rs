use pc_builder::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock CartGateway for testing that records every commit
#[derive(Default, Clone)]
pub struct MockCartGateway {
    pub commits: Arc<Mutex<Vec<Vec<CartLine>>>>,
    pub should_fail: bool,
}

impl MockCartGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_failure() -> Self {
        Self {
            commits: Arc::default(),
            should_fail: true,
        }
    }

    pub fn commit_count(&self) -> usize {
        self.commits.lock().unwrap().len()
    }

    pub fn last_commit(&self) -> Option<Vec<CartLine>> {
        self.commits.lock().unwrap().last().cloned()
    }
}

impl CartGateway for MockCartGateway {
    fn commit(&self, lines: &[CartLine]) -> Result<()> {
        if self.should_fail {
            anyhow::bail!("Mock cart gateway failure");
        }
        self.commits.lock().unwrap().push(lines.to_vec());
        Ok(())
    }
}
