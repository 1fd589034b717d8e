//! Route handlers for the relay API.

pub mod api;
pub mod health;

pub use api::{encyclopedia_search, instant_answer_search, web_search};
pub use health::health;
