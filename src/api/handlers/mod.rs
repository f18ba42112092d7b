//! HTTP request handlers.

pub mod admin;
pub mod health;
pub mod redirect;
pub mod shorten;

pub use admin::{delete_url_handler, edit_url_handler, list_urls_handler};
pub use health::health_handler;
pub use redirect::{redirect_handler, root_handler};
pub use shorten::shorten_handler;
