use serde::Serialize;
use std::fmt;

/// Externally visible state of a build session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildState {
    /// At least one slot is empty
    Incomplete,
    /// Every slot is filled but at least one compatibility issue was found
    CompleteWithIssues,
    /// Every slot is filled and no compatibility issue was found
    CompleteCompatible,
}

impl BuildState {
    /// Derives the state from completeness and the latest issue count
    pub fn from_evaluation(is_complete: bool, issue_count: usize) -> Self {
        match (is_complete, issue_count) {
            (false, _) => BuildState::Incomplete,
            (true, 0) => BuildState::CompleteCompatible,
            (true, _) => BuildState::CompleteWithIssues,
        }
    }

    /// Whether the selection may be handed to the cart
    pub fn can_commit(self) -> bool {
        self == BuildState::CompleteCompatible
    }

    /// Explanation shown to the user when a commit is refused
    pub fn describe(self) -> &'static str {
        match self {
            BuildState::Incomplete => "the build is incomplete: every slot needs a component",
            BuildState::CompleteWithIssues => {
                "the build has compatibility issues that must be resolved first"
            }
            BuildState::CompleteCompatible => "the build is complete and compatible",
        }
    }
}

impl fmt::Display for BuildState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BuildState::Incomplete => "Incomplete",
            BuildState::CompleteWithIssues => "Complete with issues",
            BuildState::CompleteCompatible => "Complete and compatible",
        };
        write!(f, "{}", label)
    }
}
