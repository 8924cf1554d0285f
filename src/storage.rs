use futures_util::future::LocalBoxFuture;

mod local;
pub use local::*;
mod memory;
pub use memory::*;
mod store;
pub use store::*;

/// Key the hero roster is saved under.
pub static HEROES_KEY: &str = "forgesteel-heroes";
/// Key the display options are saved under.
pub static OPTIONS_KEY: &str = "forgesteel-options";

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum StorageError {
	#[error("{0}")]
	Internal(String),
	#[error("{0}")]
	Serialization(String),
	#[error("Storage is unavailable: {0}")]
	Unavailable(String),
}

impl From<serde_json::Error> for StorageError {
	fn from(value: serde_json::Error) -> Self {
		Self::Serialization(value.to_string())
	}
}

/// A durable key-value store of json documents.
pub trait Storage {
	fn get_item<'a>(&'a self, key: &'a str) -> LocalBoxFuture<'a, Result<Option<serde_json::Value>, StorageError>>;
	fn set_item<'a>(&'a self, key: &'a str, value: serde_json::Value) -> LocalBoxFuture<'a, Result<(), StorageError>>;
}
