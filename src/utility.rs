mod error;
pub use error::*;
pub mod web_ext;
pub use web_ext::*;

/// Generates a new unique identifier.
pub fn guid() -> String {
	uuid::Uuid::new_v4().to_string()
}

pub fn list_as_english(mut items: Vec<String>, joiner: &str) -> Option<String> {
	match items.len() {
		0 => None,
		1 => items.pop(),
		2 => Some(items.join(format!(" {joiner} ").as_str())),
		_ => {
			if let Some(last) = items.last_mut() {
				*last = format!("{joiner} {last}");
			}
			Some(items.join(", "))
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn english_lists() {
		let items = |list: &[&str]| list.iter().map(|s| (*s).to_owned()).collect::<Vec<_>>();
		assert_eq!(list_as_english(items(&[]), "or"), None);
		assert_eq!(list_as_english(items(&["Khelt"]), "or"), Some("Khelt".into()));
		assert_eq!(list_as_english(items(&["Khelt", "Zaliac"]), "or"), Some("Khelt or Zaliac".into()));
		assert_eq!(
			list_as_english(items(&["Khelt", "Zaliac", "Caelian"]), "and"),
			Some("Khelt, Zaliac, and Caelian".into())
		);
	}
}
