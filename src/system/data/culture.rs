use super::Feature;
use serde::{Deserialize, Serialize};

/// The community a hero grew up in.
/// Each of the three aspects grants a feature (usually a skill choice).
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Culture {
	pub id: String,
	pub name: String,
	pub description: String,
	pub languages: Vec<String>,
	pub environment: Option<Feature>,
	pub organization: Option<Feature>,
	pub upbringing: Option<Feature>,
}

impl Culture {
	pub fn aspects(&self) -> impl Iterator<Item = &Feature> + '_ {
		[&self.environment, &self.organization, &self.upbringing]
			.into_iter()
			.filter_map(Option::as_ref)
	}

	pub fn aspects_mut(&mut self) -> impl Iterator<Item = &mut Feature> + '_ {
		[&mut self.environment, &mut self.organization, &mut self.upbringing]
			.into_iter()
			.filter_map(Option::as_mut)
	}
}
