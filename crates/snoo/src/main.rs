use std::time::Duration;

use crate::prelude::{eprintln, *};
use clap::Parser;
use snoo_client::{Client, Config, Context};

mod posts;
mod prelude;
mod subreddit;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Browse subreddits, their posts and your subscriptions"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Reddit API base URL
    #[clap(long, env = "REDDIT_BASE_URL", global = true)]
    base_url: Option<String>,

    /// OAuth bearer token
    #[clap(long, env = "REDDIT_ACCESS_TOKEN", global = true, hide_env_values = true)]
    access_token: Option<String>,

    /// Request timeout in seconds
    #[clap(long, env = "REDDIT_TIMEOUT_SECS", global = true)]
    timeout: Option<u64>,

    /// Whether to display additional information.
    #[clap(long, env = "SNOO_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

impl Global {
    /// Environment configuration with the command line flags applied on top.
    pub fn config(&self) -> Result<Config> {
        let config = Config::from_env().wrap_err("Invalid environment configuration")?;
        Ok(config.with_overrides(
            self.base_url.clone(),
            self.access_token.clone(),
            self.timeout.map(Duration::from_secs),
        ))
    }

    pub fn client(&self) -> Result<Client> {
        let config = self.config()?;
        if self.verbose {
            eprintln!("Reddit API Base: {}", config.normalized_base_url());
            eprintln!();
        }
        Client::new(&config).wrap_err("Failed to build the Reddit client")
    }
}

/// A request context cancelled on Ctrl-C.
pub fn interruptible() -> Context {
    let ctx = Context::background();
    let token = ctx.token().clone();

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            log::debug!("interrupted, cancelling in-flight request");
            token.cancel();
        }
    });

    ctx
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Subreddit operations
    Subreddit(crate::subreddit::App),

    /// List posts from the front page, r/all or a set of subreddits
    Posts(crate::posts::PostsOptions),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Subreddit(sub_app) => crate::subreddit::run(sub_app, app.global).await,
        SubCommands::Posts(options) => crate::posts::run(options, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
