pub mod models;
pub mod store;

#[cfg(test)]
pub mod fixtures;

pub use store::{MatchStore, SqliteMatchStore};
