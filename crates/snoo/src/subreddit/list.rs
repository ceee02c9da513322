use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use snoo_client::{Client, Context, SubredditList};
use snoo_core::output::{transform_subreddits, SubredditListOutput};

#[derive(Debug, clap::Args, Clone)]
pub struct ListOptions {
    /// List: popular, new, gold, default, subscribed, approved, moderated
    #[arg(value_name = "LIST", default_value = "popular")]
    pub list: SubredditList,

    /// Fetch the page after this fullname
    #[arg(long)]
    pub after: Option<String>,

    /// Fetch the page before this fullname
    #[arg(long)]
    pub before: Option<String>,

    /// Number of subreddits per page
    #[arg(short, long, env = "SNOO_LIMIT")]
    pub limit: Option<i64>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl ListOptions {
    fn page_options(&self) -> snoo_client::ListOptions {
        let mut opts = snoo_client::ListOptions::new();
        if let Some(after) = &self.after {
            opts = opts.after(after.clone());
        }
        if let Some(before) = &self.before {
            opts = opts.before(before.clone());
        }
        if let Some(limit) = self.limit {
            opts = opts.limit(limit);
        }
        opts
    }
}

pub async fn run(options: ListOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!("Fetching {} subreddits...", options.list);
    }

    let client = global.client()?;
    let ctx = crate::interruptible();
    let output = list_data(&client, &ctx, options.list, &options.page_options()).await?;

    if options.json {
        println!("{}", to_json(&output)?);
    } else {
        print!("{}", format_list_text(&output));
    }

    Ok(())
}

/// Fetches one page of a subreddit list and returns it as a SubredditListOutput
pub async fn list_data(
    client: &Client,
    ctx: &Context,
    list: SubredditList,
    opts: &snoo_client::ListOptions,
) -> Result<SubredditListOutput> {
    let (page, _) = client
        .subreddits()
        .list(ctx, list, opts)
        .await
        .wrap_err_with(|| format!("Failed to fetch {list} subreddits"))?;

    Ok(transform_subreddits(page, list, opts.limit))
}

/// Convert subreddit list output to formatted text with colors
fn format_list_text(output: &SubredditListOutput) -> String {
    let mut result = String::new();

    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_cyan()));
    result.push_str(&format!(
        "{}\n",
        format!("{} SUBREDDITS", output.list.to_uppercase())
            .bright_cyan()
            .bold()
    ));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_cyan()));

    if output.subreddits.is_empty() {
        result.push_str(&format!("\n{}\n", "No subreddits on this page.".yellow()));
    } else {
        let mut table = new_table();
        table.add_row(prettytable::row!["#", "Subreddit", "Subscribers", "Title"]);
        for (idx, item) in output.subreddits.iter().enumerate() {
            let name = if item.nsfw {
                format!("r/{} (nsfw)", item.name)
            } else {
                format!("r/{}", item.name)
            };
            table.add_row(prettytable::row![idx + 1, name, item.subscribers, item.title]);
        }
        result.push('\n');
        result.push_str(&table.to_string());
    }

    if output.next_page_command.is_some() || output.prev_page_command.is_some() {
        result.push_str(&format!("\n{}:\n", "To navigate".bright_white().bold()));
        if let Some(next) = &output.next_page_command {
            result.push_str(&format!("  {}: {}\n", "Next page".green(), next.cyan()));
        }
        if let Some(prev) = &output.prev_page_command {
            result.push_str(&format!("  {}: {}\n", "Previous page".green(), prev.cyan()));
        }
    }

    result.push_str(&format!(
        "\n{}:\n",
        "To read a subreddit".bright_white().bold()
    ));
    result.push_str(&format!("  {}\n", "snoo posts <name>".cyan()));
    if let Some(first) = output.subreddits.first() {
        result.push_str(&format!(
            "  {}: {}\n",
            "Example".green(),
            format!("snoo posts {}", first.name).cyan()
        ));
    }

    result.push('\n');
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subreddit::tests::create_test_subreddit;

    fn create_test_output(names: &[&str]) -> SubredditListOutput {
        SubredditListOutput {
            list: "popular".to_string(),
            subreddits: names.iter().map(|n| create_test_subreddit(n)).collect(),
            after: None,
            before: None,
            next_page_command: None,
            prev_page_command: None,
        }
    }

    #[test]
    fn test_page_options() {
        let options = ListOptions {
            list: SubredditList::Popular,
            after: Some("t5_a".to_string()),
            before: None,
            limit: Some(0),
            json: false,
        };

        let opts = options.page_options();

        assert_eq!(opts.after.as_deref(), Some("t5_a"));
        assert_eq!(opts.before, None);
        assert_eq!(opts.limit, None);
    }

    #[test]
    fn test_format_list_text_basic() {
        let formatted = format_list_text(&create_test_output(&["golang", "rust"]));

        assert!(formatted.contains("POPULAR SUBREDDITS"));
        assert!(formatted.contains("r/golang"));
        assert!(formatted.contains("r/rust"));
        assert!(formatted.contains("snoo posts golang"));
        assert!(!formatted.contains("To navigate"));
    }

    #[test]
    fn test_format_list_text_empty() {
        let formatted = format_list_text(&create_test_output(&[]));

        assert!(formatted.contains("No subreddits on this page."));
        assert!(!formatted.contains("Example"));
    }

    #[test]
    fn test_format_list_text_navigation() {
        let mut output = create_test_output(&["golang"]);
        output.next_page_command = Some("snoo subreddit list popular --after t5_a".to_string());

        let formatted = format_list_text(&output);

        assert!(formatted.contains("Next page"));
        assert!(formatted.contains("--after t5_a"));
        assert!(!formatted.contains("Previous page"));
    }

    #[test]
    fn test_format_list_json() {
        let json = to_json(&create_test_output(&["golang"])).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["list"], "popular");
        assert_eq!(parsed["subreddits"][0]["name"], "golang");
        assert!(parsed["next_page_command"].is_null());
    }
}
