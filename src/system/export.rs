use super::data::Hero;
use std::str::FromStr;

/// The kinds of file a hero can be exported as.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ExportFormat {
	Image,
	Pdf,
	Json,
}

impl ExportFormat {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Image => "image",
			Self::Pdf => "pdf",
			Self::Json => "json",
		}
	}

	pub fn extension(&self) -> &'static str {
		match self {
			Self::Image => "png",
			Self::Pdf => "pdf",
			Self::Json => "ds-hero",
		}
	}

	pub fn display_name(&self) -> &'static str {
		match self {
			Self::Image => "Export As Image",
			Self::Pdf => "Export As PDF",
			Self::Json => "Export As Data",
		}
	}
}

impl FromStr for ExportFormat {
	type Err = crate::utility::NotInList;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"image" => Ok(Self::Image),
			"pdf" => Ok(Self::Pdf),
			"json" => Ok(Self::Json),
			_ => Err(crate::utility::NotInList(s.into(), vec!["image", "pdf", "json"])),
		}
	}
}

pub fn file_name(hero: &Hero, format: ExportFormat) -> String {
	format!("{}.{}", hero.display_name(), format.extension())
}

pub fn to_json(hero: &Hero) -> Result<String, serde_json::Error> {
	serde_json::to_string_pretty(hero)
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ExportError {
	#[error("Exporting as {} is not supported in this build.", .0.as_str())]
	Unsupported(ExportFormat),
	#[error("Failed to write the hero: {0}")]
	Serialization(String),
	#[error("Failed to start the download: {0}")]
	Download(String),
}

/// A file ready to be handed to the user.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ExportFile {
	pub name: String,
	pub mime_type: &'static str,
	pub contents: String,
}

/// Produces the file for a hero in the given format.
/// Only data exports can be produced without a renderer.
pub fn export(hero: &Hero, format: ExportFormat) -> Result<ExportFile, ExportError> {
	match format {
		ExportFormat::Json => {
			let contents = to_json(hero).map_err(|err| ExportError::Serialization(err.to_string()))?;
			Ok(ExportFile {
				name: file_name(hero, format),
				mime_type: "application/json",
				contents,
			})
		}
		ExportFormat::Image | ExportFormat::Pdf => Err(ExportError::Unsupported(format)),
	}
}
