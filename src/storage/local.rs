use super::{Storage, StorageError};
use futures_util::future::LocalBoxFuture;
use gloo_storage::Storage as _;

/// The browser's local storage for the current origin.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
	pub fn is_available() -> bool {
		matches!(web_sys::window().map(|window| window.local_storage()), Some(Ok(Some(_))))
	}
}

impl From<gloo_storage::errors::StorageError> for StorageError {
	fn from(value: gloo_storage::errors::StorageError) -> Self {
		use gloo_storage::errors::StorageError as GlooError;
		match value {
			GlooError::SerdeError(err) => Self::Serialization(err.to_string()),
			GlooError::KeyNotFound(key) => Self::Internal(format!("missing key {key:?}")),
			GlooError::JsError(err) => Self::Internal(err.to_string()),
		}
	}
}

impl Storage for LocalStorage {
	fn get_item<'a>(&'a self, key: &'a str) -> LocalBoxFuture<'a, Result<Option<serde_json::Value>, StorageError>> {
		Box::pin(async move {
			match gloo_storage::LocalStorage::get::<serde_json::Value>(key) {
				Ok(value) => Ok(Some(value)),
				Err(gloo_storage::errors::StorageError::KeyNotFound(_)) => Ok(None),
				Err(err) => Err(err.into()),
			}
		})
	}

	fn set_item<'a>(&'a self, key: &'a str, value: serde_json::Value) -> LocalBoxFuture<'a, Result<(), StorageError>> {
		Box::pin(async move {
			gloo_storage::LocalStorage::set(key, value)?;
			Ok(())
		})
	}
}
