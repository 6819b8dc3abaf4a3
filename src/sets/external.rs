use crate::page::Page;

/// Page contributed by an external fixture module: a local file target with
/// no custom navigation
pub fn external_page() -> Page {
    Page::new("file://foo.html").with_name("external")
}
