use crate::system::{
	data::Hero,
	export::{export, ExportError, ExportFormat},
};
use wasm_bindgen::JsCast;

/// Saves the hero to the user's machine by clicking a temporary download link.
pub fn download(hero: &Hero, format: ExportFormat) -> Result<(), ExportError> {
	let file = export(hero, format)?;
	let href = format!(
		"data:{};charset=utf-8,{}",
		file.mime_type,
		urlencoding::encode(&file.contents)
	);
	let document = gloo_utils::document();
	let anchor = document
		.create_element("a")
		.map_err(|err| ExportError::Download(format!("{err:?}")))?
		.dyn_into::<web_sys::HtmlAnchorElement>()
		.map_err(|_| ExportError::Download("created element is not an anchor".into()))?;
	anchor.set_href(&href);
	anchor.set_download(&file.name);
	anchor.click();
	log::info!(target: "export", "Exported {:?} as {}", hero.display_name(), file.name);
	Ok(())
}
