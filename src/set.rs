use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::page::Page;

/// Browser/device category the harness should emulate for a page set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserAgentType {
    /// Desktop browser
    #[default]
    Desktop,
    /// Mobile phone browser
    Mobile,
    /// Tablet browser
    Tablet,
}

/// An ordered collection of page descriptors plus the shared configuration
/// the harness needs to replay them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSet {
    /// Human-readable description of the set
    pub description: String,

    /// Recorded-network-traffic archive the harness replays responses from.
    /// Opaque here; resolved and parsed by the harness.
    pub archive_data_file: PathBuf,

    /// Credentials file for pages that need a login. Opaque here.
    pub credentials_path: PathBuf,

    /// Browser/device category to emulate
    #[serde(default)]
    pub user_agent_type: UserAgentType,

    /// Pages in the order the harness should visit them
    #[serde(default)]
    pages: Vec<Page>,
}

impl PageSet {
    /// Create an empty set with the given shared configuration
    pub fn new(
        description: impl Into<String>,
        archive_data_file: impl Into<PathBuf>,
        credentials_path: impl Into<PathBuf>,
        user_agent_type: UserAgentType,
    ) -> Self {
        Self {
            description: description.into(),
            archive_data_file: archive_data_file.into(),
            credentials_path: credentials_path.into(),
            user_agent_type,
            pages: Vec::new(),
        }
    }

    /// Append a page. Order is preserved; duplicates are allowed, the
    /// harness visits whatever the set declares.
    pub fn add_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    /// The pages in visit order
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Number of pages in the set
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Whether the set declares no pages
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Load a page set from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let set: Self = serde_json::from_str(&contents)?;
        Ok(set)
    }

    /// Load a page set from a JSON string
    pub fn from_json(json: &str) -> Result<Self, Box<dyn Error>> {
        let set: Self = serde_json::from_str(json)?;
        Ok(set)
    }
}

impl<'a> IntoIterator for &'a PageSet {
    type Item = &'a Page;
    type IntoIter = std::slice::Iter<'a, Page>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_page_preserves_order_and_duplicates() {
        let mut set = PageSet::new(
            "ordering",
            "data/order.json",
            "data/credential",
            UserAgentType::Desktop,
        );
        set.add_page(Page::new("https://a.example.com"));
        set.add_page(Page::new("https://b.example.com"));
        set.add_page(Page::new("https://a.example.com"));

        let urls: Vec<&str> = set.pages().iter().map(|p| p.url.as_str()).collect();
        assert_eq!(
            urls,
            vec![
                "https://a.example.com",
                "https://b.example.com",
                "https://a.example.com",
            ]
        );
        assert_eq!(set.len(), 3);
        assert!(!set.is_empty());
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "description": "A pageset loaded from data",
            "archive_data_file": "data/loaded.json",
            "credentials_path": "data/credential",
            "user_agent_type": "mobile",
            "pages": [
                {"url": "https://www.example.com", "name": "example"},
                {"url": "file://local.html"}
            ]
        }"#;

        let set = PageSet::from_json(json).unwrap();
        assert_eq!(set.description, "A pageset loaded from data");
        assert_eq!(set.archive_data_file, PathBuf::from("data/loaded.json"));
        assert_eq!(set.user_agent_type, UserAgentType::Mobile);
        assert_eq!(set.len(), 2);
        assert_eq!(set.pages()[0].display_name(), "example");
        assert_eq!(set.pages()[1].url, "file://local.html");
    }

    #[test]
    fn test_from_json_defaults() {
        // user_agent_type and pages may be omitted
        let json = r#"{
            "description": "minimal",
            "archive_data_file": "data/min.json",
            "credentials_path": "data/credential"
        }"#;

        let set = PageSet::from_json(json).unwrap();
        assert_eq!(set.user_agent_type, UserAgentType::Desktop);
        assert!(set.is_empty());
    }

    #[test]
    fn test_iteration_yields_visit_order() {
        let mut set = PageSet::new(
            "iter",
            "data/iter.json",
            "data/credential",
            UserAgentType::Tablet,
        );
        set.add_page(Page::new("https://first.example.com"));
        set.add_page(Page::new("https://second.example.com"));

        let mut urls = Vec::new();
        for page in &set {
            urls.push(page.url.as_str());
        }
        assert_eq!(
            urls,
            vec!["https://first.example.com", "https://second.example.com"]
        );
    }
}
