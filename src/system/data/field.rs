use enumset::EnumSetType;
use serde::{Deserialize, Serialize};

/// The hero statistics a bonus feature can modify.
#[derive(Debug, EnumSetType, Serialize, Deserialize)]
pub enum FeatureField {
	Disengage,
	#[serde(rename = "Project Points")]
	ProjectPoints,
	Recoveries,
	Renown,
	Speed,
	Stability,
	Stamina,
	Wealth,
}

impl FeatureField {
	pub fn display_name(&self) -> &'static str {
		match self {
			Self::Disengage => "Disengage",
			Self::ProjectPoints => "Project Points",
			Self::Recoveries => "Recoveries",
			Self::Renown => "Renown",
			Self::Speed => "Speed",
			Self::Stability => "Stability",
			Self::Stamina => "Stamina",
			Self::Wealth => "Wealth",
		}
	}
}
