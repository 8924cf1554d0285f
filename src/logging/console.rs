use anyhow::Result;
use simplelog::*;

/// Logs to the terminal and to `<name>.log` in the working directory.
/// Records whose target contains any of the `ignore` strings are dropped.
pub fn init(name: &str, max_level: LevelFilter, ignore: &[&'static str]) -> Result<()> {
	let log_path = std::env::current_dir()?.join(format!("{name}.log"));
	let file = std::fs::OpenOptions::new()
		.create(true)
		.write(true)
		.truncate(true)
		.open(&log_path)?;
	let cfg = {
		let mut builder = ConfigBuilder::new();
		builder
			.set_max_level(LevelFilter::Error)
			.set_time_format_custom(format_description!("[hour]:[minute]:[second].[subsecond digits:3]"))
			// [ERROR] and [ WARN] line up
			.set_level_padding(LevelPadding::Left)
			.set_thread_level(LevelFilter::Off)
			// targets name the part of the app (session, storage, hero) a line came from
			.set_target_level(LevelFilter::Error)
			.set_location_level(LevelFilter::Off);
		for str in ignore.iter() {
			builder.add_filter_ignore_str(str);
		}
		builder.build()
	};
	CombinedLogger::init(vec![
		TermLogger::new(max_level, cfg.clone(), TerminalMode::Mixed, ColorChoice::Auto),
		WriteLogger::new(LevelFilter::Trace, cfg, file),
	])?;
	log::debug!("Writing log to {}", log_path.display());
	Ok(())
}
