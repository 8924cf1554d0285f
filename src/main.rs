use forge_steel::logging;

#[cfg(target_family = "wasm")]
fn main() {
	use forge_steel::{
		page::{app::AppProps, App},
		storage::{LocalStorage, MemoryStorage, Store},
	};

	logging::wasm::init(logging::wasm::Config::default().prefer_target());

	let store = match LocalStorage::is_available() {
		true => Store::new(LocalStorage),
		false => {
			log::warn!(target: "storage", "Local storage is unavailable, heroes will not outlive this tab");
			Store::new(MemoryStorage::default())
		}
	};
	wasm_bindgen_futures::spawn_local(async move {
		let loaded = store.load().await;
		yew::Renderer::<App>::with_props(AppProps { store, loaded }).render();
	});
}

/// Checks hero documents outside the browser: `forge-steel <hero-or-roster.json> [normalized.json]`.
/// Every hero is normalized the way an import would, and the result is written out if a second path is given.
#[cfg(not(target_family = "wasm"))]
fn main() -> anyhow::Result<()> {
	use anyhow::Context;
	use forge_steel::system::{data::sort_by_name, import};

	let _ = logging::console::init("forge-steel", log::LevelFilter::Info, &[]);

	let mut args = std::env::args().skip(1);
	let Some(path) = args.next() else {
		anyhow::bail!("usage: forge-steel <hero-or-roster.json> [normalized.json]");
	};
	let text = std::fs::read_to_string(&path).with_context(|| format!("Failed to read {path}"))?;
	let mut heroes = import::parse_heroes(&text).with_context(|| format!("Failed to import {path}"))?;

	for hero in &mut heroes {
		let report = hero.normalize();
		log::info!(
			target: "hero",
			"{} ({}): level {}, {} unresolved choice(s), {} feature id(s) reassigned, {} selection(s) dropped",
			hero.display_name(),
			hero.id,
			hero.level(),
			hero.unresolved_choices().len(),
			report.reassigned_ids,
			report.truncated_selections,
		);
	}
	sort_by_name(&mut heroes);
	log::info!("Checked {} hero(es) from {path}", heroes.len());

	if let Some(out) = args.next() {
		let json = serde_json::to_string_pretty(&heroes)?;
		std::fs::write(&out, json).with_context(|| format!("Failed to write {out}"))?;
		log::info!("Wrote normalized heroes to {out}");
	}
	Ok(())
}
