//! Core business entities.

mod click;
mod link;

pub use click::Click;
pub use link::{Link, NewLink};
