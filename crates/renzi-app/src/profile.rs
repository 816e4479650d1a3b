use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use renzi_config::Config;

/// Load config from an explicit path, the repo config.json, or env defaults
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    if let Some(path) = path {
        tracing::info!("Loading config from {}", path.display());
        return read_config(path);
    }

    let repo_default = Path::new("config.json");
    if repo_default.exists() {
        tracing::info!("Loading repo default config...");
        return read_config(repo_default);
    }

    tracing::info!("No config file found, using defaults");
    Ok(Config::new())
}

fn read_config(path: &Path) -> anyhow::Result<Config> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)?;
    Ok(config)
}
