use clap::{Parser, ValueEnum};
use page_set::UserAgentType;

#[derive(Parser, Debug)]
#[command(name = "page-set")]
#[command(about = "Lists page-set fixtures for a browser testing harness")]
#[command(version)]
pub struct Args {
    /// Page-set JSON file to load (defaults to the built-in test set)
    pub file: Option<String>,

    /// Override the set's user-agent category
    #[arg(short, long, value_enum)]
    pub user_agent: Option<UserAgentArg>,

    /// Emit the set as JSON instead of a listing
    #[arg(long)]
    pub json: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum UserAgentArg {
    Desktop,
    Mobile,
    Tablet,
}

/// Convert from CLI argument user-agent category to internal type
pub fn convert_user_agent(arg: UserAgentArg) -> UserAgentType {
    match arg {
        UserAgentArg::Desktop => UserAgentType::Desktop,
        UserAgentArg::Mobile => UserAgentType::Mobile,
        UserAgentArg::Tablet => UserAgentType::Tablet,
    }
}
