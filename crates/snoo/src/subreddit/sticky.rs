use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use snoo_client::{Client, Context, StickySlot};
use snoo_core::output::{transform_sticky, StickyOutput};

use super::get::strip_prefix;

#[derive(Debug, clap::Args, Clone)]
pub struct StickyOptions {
    /// Subreddit name, without the r/ prefix
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Sticky slot, 1 or 2
    #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(u8).range(1..=2))]
    pub slot: u8,

    /// Number of comments to show
    #[arg(short, long, default_value = "10")]
    pub comments: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: StickyOptions, global: crate::Global) -> Result<()> {
    let slot = StickySlot::try_from(options.slot).map_err(|e| eyre!(e))?;
    let name = strip_prefix(&options.name);

    if global.verbose {
        eprintln!("Fetching sticky {} of r/{name}...", slot.num());
    }

    let client = global.client()?;
    let ctx = crate::interruptible();
    let output = sticky_data(&client, &ctx, name, slot).await?;

    if options.json {
        println!("{}", to_json(&output)?);
    } else {
        print!("{}", format_sticky_text(&output, options.comments));
    }

    Ok(())
}

/// Fetches a sticky post with its top level comments
pub async fn sticky_data(
    client: &Client,
    ctx: &Context,
    name: &str,
    slot: StickySlot,
) -> Result<StickyOutput> {
    let (sticky, _) = client
        .subreddits()
        .get_sticky(ctx, name, slot)
        .await
        .wrap_err_with(|| format!("Failed to fetch sticky {} of r/{name}", slot.num()))?;

    Ok(transform_sticky(name, slot, sticky))
}

fn format_sticky_text(output: &StickyOutput, max_comments: usize) -> String {
    let mut result = String::new();

    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_cyan()));
    result.push_str(&format!(
        "{}\n",
        format!("r/{} STICKY {}", output.subreddit, output.slot)
            .bright_cyan()
            .bold()
    ));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_cyan()));

    let Some(post) = &output.post else {
        result.push_str(&format!("\n{}\n", "No sticky post in this slot.".yellow()));
        return result;
    };

    result.push_str(&format!("\n{}\n", post.title.white().bold()));
    result.push_str(&format!(
        "{}: {} | {}: {} | {}: {} | {}: {}\n",
        "By".green(),
        post.author.bright_white(),
        "Score".green(),
        post.score.to_string().bright_yellow(),
        "Comments".green(),
        post.comments.to_string().bright_magenta(),
        "Time".green(),
        post.time.as_deref().unwrap_or("unknown").bright_black()
    ));
    if !post.url.is_empty() {
        result.push_str(&format!("{}: {}\n", "URL".green(), post.url.cyan().underline()));
    }

    if let Some(body) = &output.body {
        result.push_str(&format!("\n{body}\n"));
    }

    result.push_str(&format!("\n{}\n", "-".repeat(80).bright_black()));
    result.push_str(&format!("{}\n", "COMMENTS".bright_yellow().bold()));

    if output.comments.is_empty() {
        result.push_str(&format!("\n{}\n", "No comments.".yellow()));
    }

    for comment in output.comments.iter().take(max_comments) {
        result.push_str(&format!(
            "\n{} {} {}\n",
            comment.author.bright_white().bold(),
            format!("({} points)", comment.score).bright_yellow(),
            comment.time.as_deref().unwrap_or("").bright_black()
        ));
        for line in comment.body.lines() {
            result.push_str(&format!("  {line}\n"));
        }
        if comment.replies_count > 0 {
            result.push_str(&format!(
                "  {}\n",
                format!("[{} replies]", comment.replies_count).bright_black()
            ));
        }
    }

    let hidden = output.comments.len().saturating_sub(max_comments) as u64 + output.more_comments;
    if hidden > 0 {
        result.push_str(&format!(
            "\n{}\n",
            format!("... {hidden} more comments").bright_black()
        ));
    }

    result.push('\n');
    result
}
