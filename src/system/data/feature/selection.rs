use super::{
	Feature, FeatureChoiceData, FeatureClassAbilityData, FeatureKitData, FeatureLanguageData,
	FeatureSkillData, FeatureSubclassData,
};
use crate::system::data::Kit;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
	#[error("All {count} selection(s) have already been made.")]
	Full { count: usize },
	#[error("Cannot select {requested} option(s), at most {count} are allowed.")]
	TooMany { requested: usize, count: usize },
}

/// The player-facing pick of a feature payload.
///
/// Every mutation keeps `selected().len() <= count()`; a request which would
/// break that is refused and leaves the selection as it was.
pub trait Selection {
	type Item: Clone;

	fn count(&self) -> usize;
	fn selected(&self) -> &Vec<Self::Item>;
	fn selected_mut(&mut self) -> &mut Vec<Self::Item>;
	fn key_of(item: &Self::Item) -> &str;

	fn is_selected(&self, key: &str) -> bool {
		self.selected().iter().any(|item| Self::key_of(item) == key)
	}

	fn remaining(&self) -> usize {
		self.count().saturating_sub(self.selected().len())
	}

	fn is_complete(&self) -> bool {
		self.selected().len() >= self.count()
	}

	/// Adds the item to the selection.
	/// Returns false if it was already selected.
	fn select(&mut self, item: Self::Item) -> Result<bool, SelectionError> {
		if self.is_selected(Self::key_of(&item)) {
			return Ok(false);
		}
		if self.remaining() == 0 {
			return Err(SelectionError::Full { count: self.count() });
		}
		self.selected_mut().push(item);
		Ok(true)
	}

	fn deselect(&mut self, key: &str) -> Option<Self::Item> {
		let idx = self.selected().iter().position(|item| Self::key_of(item) == key)?;
		Some(self.selected_mut().remove(idx))
	}

	/// Selects the item if it isn't selected, otherwise deselects it.
	fn toggle(&mut self, item: Self::Item) -> Result<(), SelectionError> {
		let key = Self::key_of(&item).to_owned();
		match self.deselect(&key) {
			Some(_) => Ok(()),
			None => self.select(item).map(|_| ()),
		}
	}

	fn set_selected(&mut self, items: Vec<Self::Item>) -> Result<(), SelectionError> {
		if items.len() > self.count() {
			return Err(SelectionError::TooMany {
				requested: items.len(),
				count: self.count(),
			});
		}
		*self.selected_mut() = items;
		Ok(())
	}

	fn truncate_to_count(&mut self) -> usize {
		let count = self.count();
		let selected = self.selected_mut();
		let removed = selected.len().saturating_sub(count);
		selected.truncate(count);
		removed
	}
}

macro_rules! impl_selection {
	($target:ty, $item:ty, $field:ident, |$arg:ident| $key:expr) => {
		impl Selection for $target {
			type Item = $item;

			fn count(&self) -> usize {
				self.count
			}

			fn selected(&self) -> &Vec<Self::Item> {
				&self.$field
			}

			fn selected_mut(&mut self) -> &mut Vec<Self::Item> {
				&mut self.$field
			}

			fn key_of($arg: &Self::Item) -> &str {
				$key
			}
		}
	};
}

impl_selection!(FeatureChoiceData, Feature, selected, |item| item.id.as_str());
impl_selection!(FeatureClassAbilityData, String, selected_ids, |item| item.as_str());
impl_selection!(FeatureKitData, Kit, selected, |item| item.id.as_str());
impl_selection!(FeatureLanguageData, String, selected, |item| item.as_str());
impl_selection!(FeatureSkillData, String, selected, |item| item.as_str());
impl_selection!(FeatureSubclassData, Feature, selected, |item| item.id.as_str());

#[cfg(test)]
mod test {
	use super::*;
	use crate::system::data::KitType;

	fn languages(count: usize) -> FeatureLanguageData {
		FeatureLanguageData {
			options: vec!["Caelian".into(), "Khelt".into(), "Vaslorian".into()],
			count,
			selected: vec![],
		}
	}

	#[test]
	fn select_until_full() {
		let mut data = languages(2);
		assert_eq!(data.select("Caelian".into()), Ok(true));
		assert_eq!(data.remaining(), 1);
		assert_eq!(data.select("Khelt".into()), Ok(true));
		assert!(data.is_complete());
		assert_eq!(data.select("Vaslorian".into()), Err(SelectionError::Full { count: 2 }));
		assert_eq!(data.selected.len(), 2);
	}

	#[test]
	fn select_twice_is_noop() {
		let mut data = languages(2);
		assert_eq!(data.select("Caelian".into()), Ok(true));
		assert_eq!(data.select("Caelian".into()), Ok(false));
		assert_eq!(data.selected, vec!["Caelian".to_owned()]);
	}

	#[test]
	fn toggle_swaps_when_full() {
		let mut data = languages(1);
		data.toggle("Caelian".into()).unwrap();
		assert!(data.toggle("Khelt".into()).is_err());
		data.toggle("Caelian".into()).unwrap();
		data.toggle("Khelt".into()).unwrap();
		assert_eq!(data.selected, vec!["Khelt".to_owned()]);
	}

	#[test]
	fn set_selected_rejects_overflow() {
		let mut data = FeatureClassAbilityData {
			cost: 3,
			count: 1,
			selected_ids: vec!["a".into()],
		};
		let result = data.set_selected(vec!["b".into(), "c".into()]);
		assert_eq!(result, Err(SelectionError::TooMany { requested: 2, count: 1 }));
		assert_eq!(data.selected_ids, vec!["a".to_owned()]);
		data.set_selected(vec!["b".into()]).unwrap();
		assert_eq!(data.selected_ids, vec!["b".to_owned()]);
	}

	#[test]
	fn kits_keyed_by_id() {
		let mut data = FeatureKitData {
			types: vec![],
			count: 1,
			selected: vec![],
		};
		let kit = Kit::new("Mountain", KitType::Standard);
		let id = kit.id.clone();
		data.select(kit).unwrap();
		assert!(data.is_selected(&id));
		assert_eq!(data.deselect(&id).map(|kit| kit.name), Some("Mountain".into()));
		assert!(data.selected.is_empty());
	}

	#[test]
	fn arity_holds_after_any_sequence() {
		// alternate selects and deselects across more candidates than the count allows
		let candidates = ["Caelian", "Khelt", "Vaslorian", "Zaliac", "Anjali"];
		for count in 0..4 {
			let mut data = languages(count);
			for (step, name) in candidates.iter().cycle().take(17).enumerate() {
				let _ = match step % 3 {
					0 | 1 => data.select((*name).to_owned()).map(|_| ()),
					_ => data.toggle((*name).to_owned()),
				};
				assert!(data.selected.len() <= data.count);
			}
		}
	}

	#[test]
	fn subclass_selection() {
		let mut data = FeatureSubclassData {
			category: "Order".into(),
			count: 1,
			selected: vec![],
		};
		let order = Feature::text("Order of the Sun", "");
		data.select(order.clone()).unwrap();
		assert!(data.is_selected(&order.id));
		assert_eq!(data.truncate_to_count(), 0);
	}
}
