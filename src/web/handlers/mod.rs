//! HTTP request handlers for the public endpoints.

mod fallback;
mod index;
mod redirect;
mod shorten;

pub use fallback::{method_not_allowed_handler, not_found_handler};
pub use index::index_handler;
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
