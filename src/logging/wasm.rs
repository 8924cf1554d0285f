use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;

#[derive(Clone, Debug)]
pub struct Config {
	max_level: LevelFilter,
	prefer_target: bool,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			max_level: match cfg!(debug_assertions) {
				true => LevelFilter::Debug,
				false => LevelFilter::Info,
			},
			prefer_target: false,
		}
	}
}

impl Config {
	pub fn max_level(mut self, level: LevelFilter) -> Self {
		self.max_level = level;
		self
	}

	/// Prefix lines with the record's target instead of its module path.
	pub fn prefer_target(mut self) -> Self {
		self.prefer_target = true;
		self
	}
}

struct ConsoleLogger(Config);

impl Log for ConsoleLogger {
	fn enabled(&self, metadata: &Metadata) -> bool {
		metadata.level() <= self.0.max_level
	}

	fn log(&self, record: &Record) {
		if !self.enabled(record.metadata()) {
			return;
		}
		let origin = match (self.0.prefer_target, record.module_path()) {
			(false, Some(module)) => module,
			_ => record.target(),
		};
		let line = JsValue::from_str(&format!("[{origin}] {}", record.args()));
		match record.level() {
			Level::Error => web_sys::console::error_1(&line),
			Level::Warn => web_sys::console::warn_1(&line),
			Level::Info => web_sys::console::info_1(&line),
			Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
		}
	}

	fn flush(&self) {}
}

/// Routes the `log` macros to the browser console. Only the first call has any effect.
pub fn init(config: Config) {
	let max_level = config.max_level;
	if log::set_boxed_logger(Box::new(ConsoleLogger(config))).is_ok() {
		log::set_max_level(max_level);
	}
}
