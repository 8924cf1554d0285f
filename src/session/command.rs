use super::{Page, WriteId};
use crate::{
	storage::StorageError,
	system::{
		data::{
			Ability, Ancestry, Career, Characteristic, Complication, Culture, Hero, HeroClass, Kit,
			Options,
		},
		export::{ExportError, ExportFormat},
	},
};

/// Everything the user (or a finished storage write) can ask of the [`Session`](super::Session).
#[derive(Clone, PartialEq, Debug)]
pub enum Command {
	GoHome,
	/// From the welcome page: lists the roster, or starts the first hero if there are none.
	ShowHeroes,
	AddHero,
	ImportHero,
	AcceptImport(Hero),
	ViewHero(String),
	CloseHero,
	EditHero,
	ExportHero(ExportFormat),
	DeleteHero,
	SaveHero(Hero),
	CancelEdit,
	UpdateHeroState(Hero),
	SetOptions(Options),
	ShowAbout,
	ShowAncestry(Ancestry),
	ShowCulture(Culture),
	ShowCareer(Career),
	ShowClass(HeroClass),
	ShowComplication(Complication),
	ShowKit(Kit),
	ShowCharacteristic(Characteristic, Hero),
	ShowAbility(Ability, Hero),
	ShowHeroState,
	CloseDrawer,
	DismissNotice,
	/// The host could not produce an export.
	ExportFailed(ExportError),
	HeroesWritten {
		write: WriteId,
		result: Result<(), StorageError>,
	},
	OptionsWritten {
		write: WriteId,
		result: Result<(), StorageError>,
	},
}

impl Command {
	pub fn name(&self) -> &'static str {
		match self {
			Self::GoHome => "GoHome",
			Self::ShowHeroes => "ShowHeroes",
			Self::AddHero => "AddHero",
			Self::ImportHero => "ImportHero",
			Self::AcceptImport(_) => "AcceptImport",
			Self::ViewHero(_) => "ViewHero",
			Self::CloseHero => "CloseHero",
			Self::EditHero => "EditHero",
			Self::ExportHero(_) => "ExportHero",
			Self::DeleteHero => "DeleteHero",
			Self::SaveHero(_) => "SaveHero",
			Self::CancelEdit => "CancelEdit",
			Self::UpdateHeroState(_) => "UpdateHeroState",
			Self::SetOptions(_) => "SetOptions",
			Self::ShowAbout => "ShowAbout",
			Self::ShowAncestry(_) => "ShowAncestry",
			Self::ShowCulture(_) => "ShowCulture",
			Self::ShowCareer(_) => "ShowCareer",
			Self::ShowClass(_) => "ShowClass",
			Self::ShowComplication(_) => "ShowComplication",
			Self::ShowKit(_) => "ShowKit",
			Self::ShowCharacteristic(_, _) => "ShowCharacteristic",
			Self::ShowAbility(_, _) => "ShowAbility",
			Self::ShowHeroState => "ShowHeroState",
			Self::CloseDrawer => "CloseDrawer",
			Self::DismissNotice => "DismissNotice",
			Self::ExportFailed(_) => "ExportFailed",
			Self::HeroesWritten { .. } => "HeroesWritten",
			Self::OptionsWritten { .. } => "OptionsWritten",
		}
	}
}

/// Work the session asks its host to perform. Completion of a persist effect must be
/// reported back with the matching `*Written` command.
#[derive(Clone, PartialEq, Debug)]
pub enum Effect {
	PersistHeroes { write: WriteId, heroes: Vec<Hero> },
	PersistOptions { write: WriteId, options: Options },
	Export { hero: Hero, format: ExportFormat },
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CommandError {
	#[error("{command} is not available on the {page} page.")]
	Unavailable { command: &'static str, page: Page },
	#[error("There is no hero with id {0:?}.")]
	UnknownHero(String),
	#[error("{0} no longer exists, so the changes were not saved.")]
	HeroMissing(String),
	#[error("Failed to save heroes: {0}")]
	PersistHeroes(StorageError),
	#[error("Failed to save options: {0}")]
	PersistOptions(StorageError),
	#[error("{0}")]
	Export(ExportError),
}

impl CommandError {
	/// The notice to show the user, if this error is something they should know about.
	pub fn notice(&self) -> Option<Notice> {
		match self {
			Self::Unavailable { .. } | Self::UnknownHero(_) => None,
			Self::HeroMissing(_) => Some(Notice::warning(self.to_string())),
			Self::PersistHeroes(_) | Self::PersistOptions(_) | Self::Export(_) => {
				Some(Notice::error(self.to_string()))
			}
		}
	}
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NoticeLevel {
	Warning,
	Error,
}

/// A message shown to the user until dismissed.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Notice {
	pub level: NoticeLevel,
	pub message: String,
}

impl Notice {
	pub fn warning(message: impl Into<String>) -> Self {
		Self {
			level: NoticeLevel::Warning,
			message: message.into(),
		}
	}

	pub fn error(message: impl Into<String>) -> Self {
		Self {
			level: NoticeLevel::Error,
			message: message.into(),
		}
	}
}
