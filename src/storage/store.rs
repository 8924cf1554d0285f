use super::{Storage, StorageError, HEROES_KEY, OPTIONS_KEY};
use crate::system::data::{Hero, Options};
use std::rc::Rc;

/// The saved roster and options, as read at startup.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Loaded {
	pub heroes: Vec<Hero>,
	pub options: Options,
}

/// Reads and writes the hero roster and display options.
#[derive(Clone)]
pub struct Store {
	storage: Rc<dyn Storage>,
}

impl PartialEq for Store {
	fn eq(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.storage, &other.storage)
	}
}

impl std::fmt::Debug for Store {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Store").finish_non_exhaustive()
	}
}

impl Store {
	pub fn new(storage: impl Storage + 'static) -> Self {
		Self {
			storage: Rc::new(storage),
		}
	}

	/// Reads whatever was saved last.
	/// Missing entries start empty. Heroes which can't be read are dropped with an error in the log
	/// rather than failing the whole roster.
	pub async fn load(&self) -> Loaded {
		let heroes = match self.storage.get_item(HEROES_KEY).await {
			Ok(Some(value)) => parse_heroes(value),
			Ok(None) => Vec::new(),
			Err(err) => {
				log::error!(target: "storage", "Failed to read heroes: {err}");
				Vec::new()
			}
		};
		let options = match self.storage.get_item(OPTIONS_KEY).await {
			Ok(Some(value)) => serde_json::from_value(value).unwrap_or_else(|err| {
				log::error!(target: "storage", "Saved options are malformed, using defaults: {err}");
				Options::default()
			}),
			Ok(None) => Options::default(),
			Err(err) => {
				log::error!(target: "storage", "Failed to read options: {err}");
				Options::default()
			}
		};
		log::info!(target: "storage", "Loaded {} hero(es)", heroes.len());
		Loaded { heroes, options }
	}

	pub async fn persist_heroes(&self, heroes: &[Hero]) -> Result<(), StorageError> {
		let value = serde_json::to_value(heroes)?;
		self.storage.set_item(HEROES_KEY, value).await?;
		log::debug!(target: "storage", "Saved {} hero(es)", heroes.len());
		Ok(())
	}

	pub async fn persist_options(&self, options: &Options) -> Result<(), StorageError> {
		let value = serde_json::to_value(options)?;
		self.storage.set_item(OPTIONS_KEY, value).await?;
		Ok(())
	}
}

fn parse_heroes(value: serde_json::Value) -> Vec<Hero> {
	let serde_json::Value::Array(entries) = value else {
		log::error!(target: "storage", "Saved heroes are not a list, starting with an empty roster");
		return Vec::new();
	};
	let mut heroes = Vec::with_capacity(entries.len());
	for (idx, entry) in entries.into_iter().enumerate() {
		match serde_json::from_value::<Hero>(entry) {
			Ok(mut hero) => {
				hero.normalize();
				heroes.push(hero);
			}
			Err(err) => log::error!(target: "storage", "Dropping saved hero #{idx}: {err}"),
		}
	}
	heroes
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::storage::MemoryStorage;
	use futures::executor::block_on;
	use trim_margin::MarginTrimmable;

	fn hero_named(name: &str) -> Hero {
		Hero {
			name: name.into(),
			..Hero::new("orden")
		}
	}

	#[test]
	fn load_empty() {
		let store = Store::new(MemoryStorage::default());
		let loaded = block_on(store.load());
		assert!(loaded.heroes.is_empty());
		assert_eq!(loaded.options, Options::default());
	}

	#[test]
	fn persist_then_load() -> anyhow::Result<()> {
		let memory = MemoryStorage::default();
		let store = Store::new(memory.clone());
		let heroes = vec![hero_named("Ariss"), hero_named("Bram")];
		block_on(store.persist_heroes(&heroes))?;
		let options = Options {
			show_skills_in_groups: true,
			..Default::default()
		};
		block_on(store.persist_options(&options))?;

		assert!(memory.get(HEROES_KEY).is_some());
		let loaded = block_on(Store::new(memory).load());
		assert_eq!(loaded.heroes, heroes);
		assert_eq!(loaded.options, options);
		Ok(())
	}

	#[test]
	fn rejected_write_keeps_previous() -> anyhow::Result<()> {
		let memory = MemoryStorage::default();
		let store = Store::new(memory.clone());
		block_on(store.persist_heroes(&[hero_named("Ariss")]))?;
		memory.set_reject_writes(true);
		let result = block_on(store.persist_heroes(&[]));
		assert!(matches!(result, Err(StorageError::Internal(_))));
		assert_eq!(block_on(store.load()).heroes.len(), 1);
		Ok(())
	}

	#[test]
	fn load_skips_unreadable_heroes() -> anyhow::Result<()> {
		let memory = MemoryStorage::default();
		let doc = r#"
			|[
			|	{ "id": "a", "name": "Ariss" },
			|	{ "id": "b", "name": 42 },
			|	{ "id": "c", "name": "Cora" }
			|]
		"#
		.trim_margin()
		.unwrap();
		memory.insert(HEROES_KEY, serde_json::from_str(&doc)?);
		memory.insert(OPTIONS_KEY, serde_json::json!("not options"));
		let loaded = block_on(Store::new(memory).load());
		let names = loaded.heroes.iter().map(|h| h.name.as_str()).collect::<Vec<_>>();
		assert_eq!(names, vec!["Ariss", "Cora"]);
		assert_eq!(loaded.heroes[0].setting_ids, vec!["orden".to_owned()]);
		assert_eq!(loaded.options, Options::default());
		Ok(())
	}
}
