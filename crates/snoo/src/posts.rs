use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use snoo_client::posts::{PostQuery, Sort, Timespan};
use snoo_client::{Client, Context, PostFinder};
use snoo_core::output::{transform_posts, PostItem, PostListOutput};

#[derive(Debug, clap::Args, Clone)]
pub struct PostsOptions {
    /// Subreddits to read from. The front page when empty.
    #[arg(value_name = "SUBREDDIT")]
    pub subreddits: Vec<String>,

    /// Read from r/all
    #[arg(long, conflicts_with = "subreddits")]
    pub all: bool,

    /// Sort order: hot, new, top, rising, controversial, best
    #[arg(short, long, default_value = "hot")]
    pub sort: Sort,

    /// Time window for top and controversial: hour, day, week, month, year, all
    #[arg(short, long)]
    pub time: Option<Timespan>,

    /// Fetch the page after this fullname
    #[arg(long)]
    pub after: Option<String>,

    /// Fetch the page before this fullname
    #[arg(long)]
    pub before: Option<String>,

    /// Number of posts per page
    #[arg(short, long, env = "SNOO_LIMIT")]
    pub limit: Option<i64>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: PostsOptions, global: crate::Global) -> Result<()> {
    let query = build_query(&options);

    if global.verbose {
        eprintln!("Fetching {} posts from {}...", query.sort_order(), query.path());
    }

    let client = global.client()?;
    let ctx = crate::interruptible();
    let output = posts_data(&client, &ctx, query).await?;

    if options.json {
        println!("{}", to_json(&output)?);
    } else {
        print!("{}", format_posts_text(&output));
    }

    Ok(())
}

/// Translate the command line options into a post query
pub fn build_query(options: &PostsOptions) -> PostQuery {
    let mut query = PostQuery::new().sort(options.sort);

    query = if options.all {
        query.from_all()
    } else {
        query.restrict_to(options.subreddits.iter().cloned())
    };

    if let Some(time) = options.time {
        query = query.timespan(time);
    }
    if let Some(after) = &options.after {
        query = query.after(after.clone());
    }
    if let Some(before) = &options.before {
        query = query.before(before.clone());
    }
    if let Some(limit) = options.limit {
        query = query.limit(limit);
    }

    query
}

/// Fetches one page of posts and returns it as a structured PostListOutput
pub async fn posts_data(client: &Client, ctx: &Context, query: PostQuery) -> Result<PostListOutput> {
    let finder = PostFinder::from_query(client, query);
    let (page, _) = finder
        .execute(ctx)
        .await
        .wrap_err("Failed to fetch posts")?;

    Ok(transform_posts(page, finder.query()))
}

fn source_label(output: &PostListOutput) -> String {
    if output.subreddits.is_empty() {
        "FRONT PAGE".to_string()
    } else {
        output
            .subreddits
            .iter()
            .map(|s| format!("r/{s}"))
            .collect::<Vec<_>>()
            .join(" + ")
    }
}

fn format_post(idx: usize, post: &PostItem) -> String {
    let mut result = String::new();

    let mut title = post.title.white().bold().to_string();
    if post.stickied {
        title = format!("{} {title}", "[pinned]".bright_green());
    }
    if post.nsfw {
        title = format!("{} {title}", "[nsfw]".bright_red());
    }

    result.push_str(&format!(
        "\n{} {}\n",
        format!("[{}]", idx + 1).yellow().bold(),
        title
    ));

    if !post.url.is_empty() {
        result.push_str(&format!(
            "    {}: {}\n",
            "URL".green(),
            post.url.cyan().underline()
        ));
    }

    result.push_str(&format!(
        "    {}: {} | {}: {} | {}: {} | {}: {}\n",
        "By".green(),
        post.author.bright_white(),
        "In".green(),
        format!("r/{}", post.subreddit).bright_white(),
        "Score".green(),
        post.score.to_string().bright_yellow(),
        "Comments".green(),
        post.comments.to_string().bright_magenta(),
    ));

    result.push_str(&format!(
        "    {}: {} | {}: {}\n",
        "ID".green(),
        post.full_id.bright_white(),
        "Time".green(),
        post.time.as_deref().unwrap_or("unknown").bright_black()
    ));

    result
}

/// Convert post list output to formatted text with colors
fn format_posts_text(output: &PostListOutput) -> String {
    let mut result = String::new();

    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_cyan()));
    let mut header = format!(
        "{} {} POSTS",
        source_label(output),
        output.sort.to_uppercase()
    );
    if let Some(time) = &output.timespan {
        header.push_str(&format!(" ({time})"));
    }
    result.push_str(&format!("{}\n", header.bright_cyan().bold()));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_cyan()));

    if output.posts.is_empty() {
        result.push_str(&format!("\n{}\n", "No posts on this page.".yellow()));
    } else {
        for (idx, post) in output.posts.iter().enumerate() {
            result.push_str(&format_post(idx, post));
        }
    }

    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_yellow()));
    result.push_str(&format!("{}\n", "NAVIGATION".bright_yellow().bold()));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_yellow()));

    match (&output.next_page_command, &output.prev_page_command) {
        (None, None) => {
            result.push_str(&format!("\n{}\n", "No more pages.".bright_white()));
        }
        (next, prev) => {
            result.push_str(&format!("\n{}:\n", "To navigate".bright_white().bold()));
            if let Some(next) = next {
                result.push_str(&format!("  {}: {}\n", "Next page".green(), next.cyan()));
            }
            if let Some(prev) = prev {
                result.push_str(&format!("  {}: {}\n", "Previous page".green(), prev.cyan()));
            }
        }
    }

    result.push_str(&format!(
        "\n{}:\n",
        "To get JSON output".bright_white().bold()
    ));
    result.push_str(&format!("  {}\n", "snoo posts <subreddit>... --json".cyan()));

    result.push('\n');
    result
}
