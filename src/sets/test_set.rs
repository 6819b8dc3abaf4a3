use crate::page::Page;
use crate::runner::ActionRunner;
use crate::set::{PageSet, UserAgentType};
use crate::sets::external::external_page;

/// The built-in fixture set the harness uses for its own tests: three pages
/// visited in a fixed order against a recorded archive.
pub struct TestPageSet;

/// Navigation hook for the Google page: the default steps are already
/// right, so the runner passes through untouched
fn google_navigation(runner: ActionRunner) -> ActionRunner {
    runner
}

/// Top google property; a google tab is often open
fn google_page() -> Page {
    Page::new("https://www.google.com")
        .with_name("google")
        .with_navigation_hook(google_navigation)
}

/// Page served from a file bundled with the harness
fn internal_page() -> Page {
    Page::new("file://bar.html").with_name("internal")
}

impl TestPageSet {
    /// Build the fixture set. Construction takes no inputs and cannot fail;
    /// two independent builds are structurally equal.
    pub fn build() -> PageSet {
        let mut set = PageSet::new(
            "A pageset for testing purpose",
            "data/test.json",
            "data/credential",
            UserAgentType::Desktop,
        );

        set.add_page(google_page());
        set.add_page(internal_page());
        set.add_page(external_page());

        set
    }
}
