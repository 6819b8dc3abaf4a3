use clap::Parser;
use page_set::set::PageSet;
use page_set::sets::test_set::TestPageSet;
use page_set::utils::is_local_url;

mod args;
use args::{Args, convert_user_agent};

fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    // Load the requested set, or fall back to the built-in fixture
    let mut set = match &args.file {
        Some(path) => {
            ::log::info!("Loading page set from: {}", path);
            match PageSet::from_file(path) {
                Ok(set) => set,
                Err(e) => {
                    ::log::error!("Failed to load page set: {}", e);
                    return;
                }
            }
        }
        None => {
            ::log::info!("Using built-in test page set");
            TestPageSet::build()
        }
    };

    // Apply command-line overrides
    if let Some(user_agent) = args.user_agent {
        set.user_agent_type = convert_user_agent(user_agent);
    }

    if args.json {
        match serde_json::to_string_pretty(&set) {
            Ok(json) => println!("{}", json),
            Err(e) => ::log::error!("Failed to serialize page set: {}", e),
        }
        return;
    }

    println!("{}", set.description);
    println!("  archive:    {}", set.archive_data_file.display());
    println!("  credentials: {}", set.credentials_path.display());
    println!("  user agent: {:?}", set.user_agent_type);

    for (index, page) in set.pages().iter().enumerate() {
        let mut notes = Vec::new();
        if is_local_url(&page.url) {
            notes.push("local");
        }
        if page.has_navigation_hook() {
            notes.push("custom navigation");
        }

        if notes.is_empty() {
            println!("  {}. {} ({})", index + 1, page.display_name(), page.url);
        } else {
            println!(
                "  {}. {} ({}) [{}]",
                index + 1,
                page.display_name(),
                page.url,
                notes.join(", ")
            );
        }
    }

    ::log::info!("Listed {} pages", set.len());
}
