use std::path::PathBuf;

pub const CONFIG_FILE: &str = ".log-overlay.toml";

/// Where a config file may live, most specific first: the working
/// directory, the home directory, then the per-user config directory.
fn candidates() -> Vec<PathBuf> {
    let home = std::env::var_os("HOME").map(|home| PathBuf::from(home).join(CONFIG_FILE));
    std::iter::once(Some(PathBuf::from(CONFIG_FILE)))
        .chain([home, crate::paths::app_config_path().ok()])
        .flatten()
        .collect()
}

fn read_first(paths: &[PathBuf]) -> Option<String> {
    paths.iter().find_map(|path| {
        let content = std::fs::read_to_string(path).ok()?;
        log::debug!("Loaded config from {}", path.display());
        Some(content)
    })
}

/// Content of the first config file found, if any
pub fn load_config_file() -> Option<String> {
    read_first(&candidates())
}
