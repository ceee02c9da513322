use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use snoo_client::models::SubredditInfo;
use snoo_client::{Client, Context};

#[derive(Debug, clap::Args, Clone)]
pub struct SearchOptions {
    /// Name prefix to search for
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, clap::Args, Clone)]
pub struct NamesOptions {
    /// Name prefix to search for
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run_search(options: SearchOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!("Searching subreddits starting with {:?}...", options.query);
    }

    let client = global.client()?;
    let ctx = crate::interruptible();
    let results = search_data(&client, &ctx, &options.query).await?;

    if options.json {
        println!("{}", to_json(&results)?);
    } else {
        print!("{}", format_search_text(&options.query, &results));
    }

    Ok(())
}

pub async fn run_names(options: NamesOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!("Searching subreddit names starting with {:?}...", options.query);
    }

    let client = global.client()?;
    let ctx = crate::interruptible();
    let names = names_data(&client, &ctx, &options.query).await?;

    if options.json {
        println!("{}", to_json(&names)?);
    } else {
        for name in &names {
            println!("{name}");
        }
    }

    Ok(())
}

/// Subreddits whose names begin with `query`, with their audience
pub async fn search_data(
    client: &Client,
    ctx: &Context,
    query: &str,
) -> Result<Vec<SubredditInfo>> {
    let (results, _) = client
        .subreddits()
        .search(ctx, query)
        .await
        .wrap_err_with(|| format!("Failed to search subreddits for {query:?}"))?;

    Ok(results)
}

/// Subreddit names beginning with `query`
pub async fn names_data(client: &Client, ctx: &Context, query: &str) -> Result<Vec<String>> {
    let (names, _) = client
        .subreddits()
        .search_names(ctx, query)
        .await
        .wrap_err_with(|| format!("Failed to search subreddit names for {query:?}"))?;

    Ok(names)
}

fn format_search_text(query: &str, results: &[SubredditInfo]) -> String {
    let mut result = String::new();

    result.push_str(&format!(
        "\n{}\n",
        format!("Subreddits matching {query:?}").bright_cyan().bold()
    ));

    if results.is_empty() {
        result.push_str(&format!("\n{}\n", "No subreddits found.".yellow()));
        return result;
    }

    let mut table = new_table();
    table.add_row(prettytable::row!["Subreddit", "Subscribers", "Active"]);
    for info in results {
        table.add_row(prettytable::row![
            format!("r/{}", info.name),
            info.subscribers,
            info.active_users
        ]);
    }
    result.push('\n');
    result.push_str(&table.to_string());

    result
}
