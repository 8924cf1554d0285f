use super::data::Hero;

#[derive(thiserror::Error, Debug)]
pub enum ImportError {
	#[error("The document is empty.")]
	Empty,
	#[error("The document is not valid JSON: {0}")]
	InvalidJson(serde_json::Error),
	#[error("The document is not a hero (expected an object with a {0:?} field).")]
	NotAHero(&'static str),
	#[error("The hero document is malformed: {0}")]
	Malformed(serde_json::Error),
}

/// Parses a single hero document, as produced by the json export.
pub fn parse_hero(text: &str) -> Result<Hero, ImportError> {
	let value = parse_value(text)?;
	hero_from_value(value)
}

/// Parses either a single hero document or a list of them.
pub fn parse_heroes(text: &str) -> Result<Vec<Hero>, ImportError> {
	match parse_value(text)? {
		serde_json::Value::Array(values) => values.into_iter().map(hero_from_value).collect(),
		value => Ok(vec![hero_from_value(value)?]),
	}
}

/// Readies an accepted hero for the roster: it gets a fresh identity
/// (so importing the same file twice yields two heroes) and is normalized.
pub fn prepare(mut hero: Hero) -> Hero {
	hero.id = crate::utility::guid();
	hero.normalize();
	hero
}

fn parse_value(text: &str) -> Result<serde_json::Value, ImportError> {
	if text.trim().is_empty() {
		return Err(ImportError::Empty);
	}
	serde_json::from_str(text).map_err(ImportError::InvalidJson)
}

fn hero_from_value(value: serde_json::Value) -> Result<Hero, ImportError> {
	let Some(object) = value.as_object() else {
		return Err(ImportError::NotAHero("name"));
	};
	if !object.contains_key("name") {
		return Err(ImportError::NotAHero("name"));
	}
	serde_json::from_value(value).map_err(ImportError::Malformed)
}

#[cfg(test)]
mod test {
	use super::*;
	use trim_margin::MarginTrimmable;

	#[test]
	fn parse_exported_hero() -> anyhow::Result<()> {
		let json = r#"
			|{
			|	"id": "hero-1",
			|	"name": "Cora",
			|	"settingIDs": ["orden"],
			|	"ancestry": {
			|		"id": "human",
			|		"name": "Human",
			|		"description": "",
			|		"features": [
			|			{
			|				"id": "f1",
			|				"name": "Detect the Supernatural",
			|				"description": "",
			|				"type": "Text",
			|				"choice": false,
			|				"data": null
			|			}
			|		]
			|	},
			|	"state": { "staminaDamage": 4, "notes": "Owes the guild." }
			|}
		"#
		.trim_margin()
		.unwrap();
		let hero = parse_hero(&json)?;
		assert_eq!(hero.name, "Cora");
		assert_eq!(hero.features().len(), 1);
		assert_eq!(hero.state.stamina_damage, 4);
		assert_eq!(hero.state.notes, "Owes the guild.");
		Ok(())
	}

	#[test]
	fn rejects_non_heroes() {
		assert!(matches!(parse_hero("   "), Err(ImportError::Empty)));
		assert!(matches!(parse_hero("{name"), Err(ImportError::InvalidJson(_))));
		assert!(matches!(parse_hero("[1, 2]"), Err(ImportError::NotAHero(_))));
		assert!(matches!(parse_hero(r#"{"id":"x"}"#), Err(ImportError::NotAHero(_))));
		assert!(matches!(
			parse_hero(r#"{"name":"Bad","ancestry":{"features":[{"id":"a","name":"b","type":"Unknown"}]}}"#),
			Err(ImportError::Malformed(_))
		));
	}

	#[test]
	fn parse_roster() -> anyhow::Result<()> {
		let heroes = parse_heroes(r#"[{"id":"a","name":"Ariss"},{"id":"b","name":"Bram"}]"#)?;
		assert_eq!(heroes.len(), 2);
		let single = parse_heroes(r#"{"id":"a","name":"Ariss"}"#)?;
		assert_eq!(single.len(), 1);
		Ok(())
	}

	#[test]
	fn prepare_assigns_fresh_id() -> anyhow::Result<()> {
		let hero = parse_hero(r#"{"id":"a","name":"Ariss"}"#)?;
		let prepared = prepare(hero.clone());
		assert_ne!(prepared.id, hero.id);
		assert_eq!(prepared.setting_ids, vec!["orden".to_owned()]);
		Ok(())
	}
}
