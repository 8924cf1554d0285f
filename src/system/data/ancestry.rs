use super::Feature;
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Ancestry {
	pub id: String,
	pub name: String,
	pub description: String,
	pub features: Vec<Feature>,
}
