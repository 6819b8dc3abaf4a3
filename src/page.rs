use serde::{Deserialize, Serialize};

use crate::runner::ActionRunner;

/// Hook that customizes the navigation steps for a single page.
///
/// The harness hands the page its action runner before driving the browser;
/// the hook may append steps or return the runner unchanged. Pages without a
/// hook need no custom navigation.
pub type NavigationHook = fn(ActionRunner) -> ActionRunner;

/// A single page descriptor: a URL target plus optional custom navigation
/// behavior. Built once during page-set construction and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// URL of the page
    pub url: String,

    /// Optional display name (defaults to the URL when listed)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Navigation hook; not representable in data files, so pages loaded
    /// from JSON never carry one
    #[serde(skip)]
    navigation_hook: Option<NavigationHook>,
}

impl Page {
    /// Create a page descriptor for the given URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            name: None,
            navigation_hook: None,
        }
    }

    /// Set a display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Attach a navigation hook
    pub fn with_navigation_hook(mut self, hook: NavigationHook) -> Self {
        self.navigation_hook = Some(hook);
        self
    }

    /// Whether this page customizes its navigation steps
    pub fn has_navigation_hook(&self) -> bool {
        self.navigation_hook.is_some()
    }

    /// Apply the page's navigation hook to the harness-provided runner.
    /// Pages without a hook pass the runner through untouched.
    pub fn run_navigation(&self, runner: ActionRunner) -> ActionRunner {
        match self.navigation_hook {
            Some(hook) => hook(runner),
            None => runner,
        }
    }

    /// Name to show in listings: the display name if set, the URL otherwise
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.url)
    }
}
