use crate::prelude::*;
use colored::Colorize;
use snoo_core::output::SubredditItem;
use snoo_core::subreddit::SubscribeAction;

pub mod get;
pub mod list;
pub mod moderators;
pub mod random;
pub mod search;
pub mod sticky;
pub mod subscription;

#[derive(Debug, clap::Parser)]
#[command(name = "subreddit")]
#[command(about = "Subreddit operations")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Show a subreddit
    #[clap(name = "get")]
    Get(get::GetOptions),

    /// List subreddits (popular, new, gold, default, subscribed, approved, moderated)
    #[clap(name = "list")]
    List(list::ListOptions),

    /// Search subreddits whose names begin with a query
    #[clap(name = "search")]
    Search(search::SearchOptions),

    /// Search subreddit names beginning with a query
    #[clap(name = "names")]
    Names(search::NamesOptions),

    /// Subscribe to subreddits
    #[clap(name = "subscribe")]
    Subscribe(subscription::SubscriptionOptions),

    /// Unsubscribe from subreddits
    #[clap(name = "unsubscribe")]
    Unsubscribe(subscription::SubscriptionOptions),

    /// Read a sticky post of a subreddit and its comments
    #[clap(name = "sticky")]
    Sticky(sticky::StickyOptions),

    /// List the moderators of a subreddit
    #[clap(name = "mods")]
    Mods(moderators::ModeratorsOptions),

    /// Pick a random subreddit
    #[clap(name = "random")]
    Random(random::RandomOptions),
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    match app.command {
        Commands::Get(options) => get::run(options, global).await,
        Commands::List(options) => list::run(options, global).await,
        Commands::Search(options) => search::run_search(options, global).await,
        Commands::Names(options) => search::run_names(options, global).await,
        Commands::Subscribe(options) => {
            subscription::run(SubscribeAction::Subscribe, options, global).await
        }
        Commands::Unsubscribe(options) => {
            subscription::run(SubscribeAction::Unsubscribe, options, global).await
        }
        Commands::Sticky(options) => sticky::run(options, global).await,
        Commands::Mods(options) => moderators::run(options, global).await,
        Commands::Random(options) => random::run(options, global).await,
    }
}

/// Detail table of a single subreddit
pub fn format_subreddit_details(item: &SubredditItem) -> String {
    let mut result = String::new();

    let mut title = format!("r/{}", item.name).bright_cyan().bold().to_string();
    if item.nsfw {
        title = format!("{title} {}", "[nsfw]".bright_red());
    }
    result.push_str(&format!("\n{title}\n"));
    if !item.title.is_empty() {
        result.push_str(&format!("{}\n", item.title.white().bold()));
    }
    if !item.description.is_empty() {
        result.push_str(&format!("\n{}\n", item.description));
    }
    result.push('\n');

    let mut table = new_table();
    table.add_row(prettytable::row!["ID", item.full_id]);
    table.add_row(prettytable::row!["Subscribers", item.subscribers]);
    if let Some(active) = item.active_users {
        table.add_row(prettytable::row!["Active", active]);
    }
    if !item.url.is_empty() {
        table.add_row(prettytable::row!["URL", item.url]);
    }
    if let Some(created) = &item.created {
        table.add_row(prettytable::row!["Created", created]);
    }
    result.push_str(&table.to_string());

    result
}
