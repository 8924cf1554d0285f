use std::collections::BTreeMap;

/// Sequence number of a requested storage write.
pub type WriteId = u64;

/// A value which is published only once storage has acknowledged it.
///
/// Writes are requested in order. Mutations build on the most recently requested value,
/// while readers see the published one. Completing a write publishes its value and abandons
/// every older write still in flight, so a late acknowledgement never rolls the value back.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Persisted<T> {
	published: T,
	pending: BTreeMap<WriteId, T>,
	next_write: WriteId,
}

impl<T> Persisted<T> {
	pub fn new(value: T) -> Self {
		Self {
			published: value,
			pending: BTreeMap::new(),
			next_write: 0,
		}
	}

	pub fn published(&self) -> &T {
		&self.published
	}

	/// The value of the latest requested write, or the published value if nothing is in flight.
	pub fn latest(&self) -> &T {
		match self.pending.values().next_back() {
			Some(value) => value,
			None => &self.published,
		}
	}

	pub fn is_pending(&self) -> bool {
		!self.pending.is_empty()
	}
}

impl<T: Clone> Persisted<T> {
	/// Records a write of `value`, returning the id its completion must report.
	pub fn request(&mut self, value: T) -> WriteId {
		let write = self.next_write;
		self.next_write += 1;
		self.pending.insert(write, value);
		write
	}

	/// Publishes the value of a successful write.
	/// Returns false if the write was unknown or already superseded.
	pub fn complete(&mut self, write: WriteId) -> bool {
		let Some(value) = self.pending.remove(&write) else {
			return false;
		};
		self.published = value;
		self.pending.retain(|id, _| *id > write);
		true
	}

	/// Drops a failed write. Returns false if the write was unknown.
	pub fn fail(&mut self, write: WriteId) -> bool {
		self.pending.remove(&write).is_some()
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn publishes_on_completion() {
		let mut value = Persisted::new(vec![1]);
		let write = value.request(vec![1, 2]);
		assert_eq!(value.published(), &vec![1]);
		assert_eq!(value.latest(), &vec![1, 2]);
		assert!(value.complete(write));
		assert_eq!(value.published(), &vec![1, 2]);
		assert!(!value.is_pending());
	}

	#[test]
	fn late_completion_does_not_regress() {
		let mut value = Persisted::new(0);
		let first = value.request(1);
		let second = value.request(2);
		assert!(value.complete(second));
		assert!(!value.complete(first));
		assert_eq!(*value.published(), 2);
		assert!(!value.is_pending());
	}

	#[test]
	fn in_order_completion() {
		let mut value = Persisted::new(0);
		let first = value.request(1);
		let second = value.request(2);
		assert!(value.complete(first));
		assert_eq!(*value.published(), 1);
		assert_eq!(*value.latest(), 2);
		assert!(value.complete(second));
		assert_eq!(*value.published(), 2);
	}

	#[test]
	fn failure_falls_back() {
		let mut value = Persisted::new(0);
		let write = value.request(1);
		assert!(value.fail(write));
		assert!(!value.fail(write));
		assert_eq!(*value.latest(), 0);
		assert_eq!(*value.published(), 0);
	}
}
