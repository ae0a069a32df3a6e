//! This crate contains the submission feed: it turns a user's Codeforces submission history into a deduplicated, paginated list and renders it to html. It does not touch the network or the DOM. The browser client and the cli feed it a response body and mount what it renders.

mod api;
mod config;
mod error;
mod feed;
mod links;
mod pagination;
mod process;
mod time;

pub use self::api::*;
pub use self::config::*;
pub use self::error::*;
pub use self::feed::*;
pub use self::links::*;
pub use self::pagination::*;
pub use self::process::*;
pub use self::time::*;
