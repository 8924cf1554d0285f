use super::Feature;
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Career {
	pub id: String,
	pub name: String,
	pub description: String,
	pub features: Vec<Feature>,
	pub inciting_incidents: IncitingIncidents,
}

#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IncitingIncidents {
	pub options: Vec<IncitingIncident>,
	#[serde(rename = "selectedID")]
	pub selected_id: Option<String>,
}

#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IncitingIncident {
	pub id: String,
	pub name: String,
	pub description: String,
}

impl IncitingIncidents {
	pub fn selected(&self) -> Option<&IncitingIncident> {
		let id = self.selected_id.as_ref()?;
		self.options.iter().find(|option| &option.id == id)
	}
}
