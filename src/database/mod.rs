pub mod connector;
pub mod models;
pub mod repositories;
pub mod schema;

pub use connector::{DB, connect, connect_from_url, connect_with_settings};
