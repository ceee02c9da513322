//! Core library for snoo
//!
//! This crate implements the **Functional Core** of the snoo Reddit client,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The workspace is split so that nothing in this crate touches the network:
//!
//! - **`snoo_core`** (this crate): models, response decoding, path and query
//!   building, output transformations. Pure, zero I/O.
//! - **`snoo_client`**: the HTTP transport and the typed API services.
//! - **`snoo`**: the command line interface.
//!
//! # Module Organization
//!
//! - [`models`]: Subreddits, posts, comments, moderators and listing pages
//! - [`envelope`]: One decoder per response wrapper shape
//! - [`posts`]: Sort orders, time windows and the [`posts::PostQuery`] builder
//! - [`subreddit`]: Endpoint paths and request payloads of the subreddit API
//! - [`query`]: Query string encoding and pagination options
//! - [`output`]: Output models and transformations used by the CLI
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use snoo_core::envelope::Listing;
//! use snoo_core::models::Post;
//! use snoo_core::posts::{PostQuery, Sort, Timespan};
//!
//! let query = PostQuery::new()
//!     .restrict_to(["golang", "rust"])
//!     .sort(Sort::Top)
//!     .timespan(Timespan::Week)
//!     .limit(10);
//!
//! assert_eq!(query.path_and_query()?, "r/golang+rust/top?limit=10&t=week");
//!
//! // Decode a response body with no HTTP involved
//! let listing: Listing<Post> = serde_json::from_str(body)?;
//! let page = listing.into_page();
//! ```

pub mod envelope;
pub mod models;
pub mod output;
pub mod posts;
pub mod query;
pub mod subreddit;
