use crate::prelude::{eprintln, println, *};
use snoo_client::{Client, Context};
use snoo_core::output::{transform_subreddit, SubredditItem};

use super::format_subreddit_details;

#[derive(Debug, clap::Args, Clone)]
pub struct GetOptions {
    /// Subreddit name, without the r/ prefix
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: GetOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!("Fetching r/{}...", options.name);
    }

    let client = global.client()?;
    let ctx = crate::interruptible();
    let item = get_data(&client, &ctx, &options.name).await?;

    if options.json {
        println!("{}", to_json(&item)?);
    } else {
        print!("{}", format_subreddit_details(&item));
    }

    Ok(())
}

/// Fetches a subreddit and returns it as a SubredditItem
pub async fn get_data(client: &Client, ctx: &Context, name: &str) -> Result<SubredditItem> {
    let name = strip_prefix(name);
    let (subreddit, _) = client
        .subreddits()
        .get(ctx, name)
        .await
        .wrap_err_with(|| format!("Failed to fetch r/{name}"))?;

    let subreddit = subreddit.ok_or_eyre("The service returned no subreddit data")?;
    Ok(transform_subreddit(&subreddit))
}

/// Accept `r/golang`, `/r/golang/` and `golang` alike.
pub fn strip_prefix(name: &str) -> &str {
    let name = name.trim().trim_matches('/');
    name.strip_prefix("r/").unwrap_or(name)
}
