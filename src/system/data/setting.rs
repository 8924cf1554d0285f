use serde::{Deserialize, Serialize};

/// A campaign setting heroes are built for.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct CampaignSetting {
	pub id: String,
	pub name: String,
	pub description: String,
}

impl CampaignSetting {
	/// The default setting new heroes are created in.
	pub fn orden() -> Self {
		Self {
			id: "orden".into(),
			name: "Orden".into(),
			description: "The default setting for Draw Steel heroes.".into(),
		}
	}
}
