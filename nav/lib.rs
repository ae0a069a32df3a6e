//! This crate contains the page's navigation state: which section is active, which sidebar link is highlighted, and when the scroll-to-top button shows.

mod config;
mod navigator;
mod scroll_to_top;

pub use self::config::*;
pub use self::navigator::*;
pub use self::scroll_to_top::*;
