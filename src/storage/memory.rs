use super::{Storage, StorageError};
use futures_util::future::LocalBoxFuture;
use std::{
	cell::{Cell, RefCell},
	collections::BTreeMap,
	rc::Rc,
};

/// Storage which only lives as long as the process.
/// Clones share the same entries.
#[derive(Clone, Default)]
pub struct MemoryStorage {
	entries: Rc<RefCell<BTreeMap<String, serde_json::Value>>>,
	reject_writes: Rc<Cell<bool>>,
}

impl MemoryStorage {
	/// When set, every write fails as if the backend were full.
	pub fn set_reject_writes(&self, reject: bool) {
		self.reject_writes.set(reject);
	}

	pub fn get(&self, key: &str) -> Option<serde_json::Value> {
		self.entries.borrow().get(key).cloned()
	}

	pub fn insert(&self, key: impl Into<String>, value: serde_json::Value) {
		self.entries.borrow_mut().insert(key.into(), value);
	}
}

impl Storage for MemoryStorage {
	fn get_item<'a>(&'a self, key: &'a str) -> LocalBoxFuture<'a, Result<Option<serde_json::Value>, StorageError>> {
		Box::pin(async move { Ok(self.get(key)) })
	}

	fn set_item<'a>(&'a self, key: &'a str, value: serde_json::Value) -> LocalBoxFuture<'a, Result<(), StorageError>> {
		Box::pin(async move {
			if self.reject_writes.get() {
				return Err(StorageError::Internal(format!("quota exceeded writing {key:?}")));
			}
			self.insert(key, value);
			Ok(())
		})
	}
}
