use std::path::PathBuf;

use mediacanvas::{init_logging, scenario, Config, SettingsPersistence, BUILD_DATE, VERSION};

/// Environment variable naming an explicit config file.
const CONFIG_ENV: &str = "MEDIACANVAS_CONFIG";

fn config_path() -> anyhow::Result<PathBuf> {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) => Ok(PathBuf::from(path)),
        None => Ok(Config::default_path()?),
    }
}

fn main() -> anyhow::Result<()> {
    let settings = SettingsPersistence::load_or_default(&config_path()?);

    // Initialize logging
    init_logging(&settings.config().logging)?;
    tracing::info!(version = VERSION, build_date = BUILD_DATE, "mediacanvas starting");

    let summary = scenario::run(&settings.config().canvas)?;
    println!("{summary}");

    Ok(())
}
