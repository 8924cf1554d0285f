use super::Characteristic;
use serde::{Deserialize, Serialize};

/// An action, maneuver or triggered action a hero can use.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Ability {
	pub id: String,
	pub name: String,
	pub description: String,
	#[serde(rename = "type")]
	pub kind: AbilityType,
	pub keywords: Vec<String>,
	pub distance: Vec<String>,
	pub target: String,
	/// Heroic resource cost, zero for signature abilities.
	pub cost: u32,
	pub power_roll: Option<PowerRoll>,
	pub effect: String,
}

#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AbilityType {
	pub usage: AbilityUsage,
	pub free: bool,
	pub trigger: String,
	pub time: String,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum AbilityUsage {
	#[default]
	Action,
	Maneuver,
	Trigger,
	#[serde(rename = "Move Action")]
	Move,
	#[serde(rename = "No Action")]
	NoAction,
	Other,
}

impl AbilityUsage {
	pub fn display_name(&self) -> &'static str {
		match self {
			Self::Action => "Action",
			Self::Maneuver => "Maneuver",
			Self::Trigger => "Triggered Action",
			Self::Move => "Move Action",
			Self::NoAction => "No Action",
			Self::Other => "Other",
		}
	}
}

#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PowerRoll {
	pub characteristic: Vec<Characteristic>,
	pub tier1: String,
	pub tier2: String,
	pub tier3: String,
}

impl Ability {
	pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
		Self {
			id: crate::utility::guid(),
			name: name.into(),
			description: description.into(),
			..Default::default()
		}
	}

	pub fn is_signature(&self) -> bool {
		self.cost == 0
	}

	/// The bonus to this ability's power roll for a hero with the given characteristic scores,
	/// which is the best of the characteristics the roll can use.
	pub fn roll_bonus(&self, score: impl Fn(Characteristic) -> i32) -> Option<i32> {
		let power_roll = self.power_roll.as_ref()?;
		power_roll.characteristic.iter().map(|c| score(*c)).max()
	}

	/// If the ability's heroic resource cost can be paid from `resource`.
	pub fn is_affordable(&self, resource: i32) -> bool {
		i32::try_from(self.cost).is_ok_and(|cost| cost <= resource)
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn roll_bonus_uses_best_characteristic() {
		let mut ability = Ability::new("Gouge", "Strike at a weak point.");
		assert_eq!(ability.roll_bonus(|_| 2), None);
		ability.power_roll = Some(PowerRoll {
			characteristic: vec![Characteristic::Might, Characteristic::Agility],
			..Default::default()
		});
		let bonus = ability.roll_bonus(|c| match c {
			Characteristic::Might => 1,
			Characteristic::Agility => 2,
			_ => 0,
		});
		assert_eq!(bonus, Some(2));
	}

	#[test]
	fn affordable() {
		let mut ability = Ability::new("Gouge", "");
		ability.cost = 3;
		assert!(ability.is_affordable(3));
		assert!(!ability.is_affordable(2));
		ability.cost = u32::MAX;
		assert!(!ability.is_affordable(i32::MAX));
	}
}
