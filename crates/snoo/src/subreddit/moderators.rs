use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use snoo_client::{Client, Context};
use snoo_core::output::ModeratorListOutput;

use super::get::strip_prefix;

#[derive(Debug, clap::Args, Clone)]
pub struct ModeratorsOptions {
    /// Subreddit name, without the r/ prefix
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: ModeratorsOptions, global: crate::Global) -> Result<()> {
    let name = strip_prefix(&options.name);

    if global.verbose {
        eprintln!("Fetching moderators of r/{name}...");
    }

    let client = global.client()?;
    let ctx = crate::interruptible();
    let output = moderators_data(&client, &ctx, name).await?;

    if options.json {
        println!("{}", to_json(&output)?);
    } else {
        print!("{}", format_moderators_text(&output));
    }

    Ok(())
}

/// Fetches the moderators of a subreddit in the order the service lists them
pub async fn moderators_data(
    client: &Client,
    ctx: &Context,
    name: &str,
) -> Result<ModeratorListOutput> {
    let (moderators, _) = client
        .subreddits()
        .moderators(ctx, name)
        .await
        .wrap_err_with(|| format!("Failed to fetch moderators of r/{name}"))?;

    Ok(ModeratorListOutput {
        subreddit: name.to_string(),
        moderators,
    })
}

fn format_moderators_text(output: &ModeratorListOutput) -> String {
    let mut result = String::new();

    result.push_str(&format!(
        "\n{}\n",
        format!("Moderators of r/{}", output.subreddit)
            .bright_cyan()
            .bold()
    ));

    if output.moderators.is_empty() {
        result.push_str(&format!("\n{}\n", "No moderators listed.".yellow()));
        return result;
    }

    let mut table = new_table();
    table.add_row(prettytable::row!["#", "User", "ID", "Permissions"]);
    for (idx, moderator) in output.moderators.iter().enumerate() {
        table.add_row(prettytable::row![
            idx + 1,
            format!("u/{}", moderator.name),
            moderator.id,
            moderator.permissions.join(", ")
        ]);
    }
    result.push('\n');
    result.push_str(&table.to_string());

    result
}
