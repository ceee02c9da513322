use crate::prelude::{eprintln, println, *};
use snoo_client::{Client, Context};
use snoo_core::output::{transform_subreddit, SubredditItem};

use super::format_subreddit_details;

#[derive(Debug, clap::Args, Clone)]
pub struct RandomOptions {
    /// Pick among NSFW subreddits
    #[arg(long)]
    pub nsfw: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: RandomOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!("Picking a random subreddit...");
    }

    let client = global.client()?;
    let ctx = crate::interruptible();
    let item = random_data(&client, &ctx, options.nsfw).await?;

    match (item, options.json) {
        (Some(item), true) => println!("{}", to_json(&item)?),
        (Some(item), false) => print!("{}", format_subreddit_details(&item)),
        (None, true) => println!("null"),
        (None, false) => eprintln!("The service did not pick a subreddit."),
    }

    Ok(())
}

/// Picks a random subreddit. `None` when the service returned no pick.
pub async fn random_data(
    client: &Client,
    ctx: &Context,
    nsfw: bool,
) -> Result<Option<SubredditItem>> {
    let subreddits = client.subreddits();
    let (subreddit, _) = if nsfw {
        subreddits.random_nsfw(ctx).await
    } else {
        subreddits.random(ctx).await
    }
    .wrap_err("Failed to pick a random subreddit")?;

    Ok(subreddit.as_ref().map(transform_subreddit))
}
