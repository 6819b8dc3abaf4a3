/// A single navigation/interaction step the harness can execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Load a URL
    Navigate(String),
    /// Pause for the given number of seconds
    WaitSeconds(u64),
    /// Click the element matched by a CSS selector
    Click(String),
}

/// Harness-provided handle that accumulates navigation steps for a page.
///
/// Execution happens inside the harness's replay engine; this crate only
/// records the steps so page descriptors can customize them through their
/// navigation hooks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionRunner {
    steps: Vec<Action>,
}

impl ActionRunner {
    /// Create a runner with no steps queued
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a navigation to the given URL
    pub fn navigate(mut self, url: impl Into<String>) -> Self {
        self.steps.push(Action::Navigate(url.into()));
        self
    }

    /// Queue a pause
    pub fn wait_seconds(mut self, seconds: u64) -> Self {
        self.steps.push(Action::WaitSeconds(seconds));
        self
    }

    /// Queue a click on a CSS selector
    pub fn click(mut self, selector: impl Into<String>) -> Self {
        self.steps.push(Action::Click(selector.into()));
        self
    }

    /// The queued steps, in execution order
    pub fn steps(&self) -> &[Action] {
        &self.steps
    }
}
