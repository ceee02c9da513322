//! Async client for the subreddit endpoints of the Reddit API.
//!
//! Request paths, payloads and response decoding live in `snoo_core`; this
//! crate sends the requests and hands back typed results together with a
//! [`Response`] descriptor.
//!
//! # Example
//!
//! ```rust,ignore
//! use snoo_client::{Client, Config, Context};
//! use snoo_client::posts::{Sort, Timespan};
//!
//! let client = Client::new(&Config::from_env()?)?;
//! let ctx = Context::background();
//!
//! let (golang, _) = client.subreddits().get(&ctx, "golang").await?;
//!
//! let finder = client
//!     .posts()
//!     .restrict_to(["golang"])
//!     .sort(Sort::Top)
//!     .timespan(Timespan::Week)
//!     .limit(10);
//!
//! let (page, _) = finder.execute(&ctx).await?;
//! if let Some(after) = page.after {
//!     let (next, _) = finder.after(after).execute(&ctx).await?;
//! }
//! ```

pub mod client;
pub mod config;
pub mod context;
pub mod error;
pub mod finder;
pub mod subreddit;

pub use client::{Client, Response};
pub use config::Config;
pub use context::Context;
pub use error::{Error, Result};
pub use finder::PostFinder;
pub use subreddit::SubredditService;

pub use snoo_core::envelope::PostAndComments;
pub use snoo_core::models;
pub use snoo_core::posts;
pub use snoo_core::query::ListOptions;
pub use snoo_core::subreddit::{StickySlot, SubredditList};
pub use tokio_util::sync::CancellationToken;
