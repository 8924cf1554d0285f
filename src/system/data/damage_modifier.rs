use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DamageModifier {
	pub damage_type: String,
	#[serde(rename = "type")]
	pub kind: DamageModifierType,
	pub value: i32,
	#[serde(default)]
	pub value_per_level: i32,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum DamageModifierType {
	Immunity,
	Weakness,
}

impl DamageModifier {
	pub fn value_at(&self, level: u32) -> i32 {
		let levels = i32::try_from(level.saturating_sub(1)).unwrap_or(i32::MAX);
		self.value.saturating_add(self.value_per_level.saturating_mul(levels))
	}

	pub fn description(&self, level: u32) -> String {
		let kind = match self.kind {
			DamageModifierType::Immunity => "immunity",
			DamageModifierType::Weakness => "weakness",
		};
		format!("{} {kind} {}", self.damage_type, self.value_at(level))
	}
}

#[cfg(test)]
mod test {
	use super::*;

	fn fire_immunity(value_per_level: i32) -> DamageModifier {
		DamageModifier {
			damage_type: "fire".into(),
			kind: DamageModifierType::Immunity,
			value: 5,
			value_per_level,
		}
	}

	#[test]
	fn describe_at_level() {
		assert_eq!(fire_immunity(1).description(3), "fire immunity 7");
	}

	#[test]
	fn value_saturates_at_huge_levels() {
		assert_eq!(fire_immunity(2).value_at(3_000_000_000), i32::MAX);
		assert_eq!(fire_immunity(-2).value_at(u32::MAX), i32::MIN + 5);
	}
}
