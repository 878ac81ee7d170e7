use crate::error::{RankError, Result};
use crate::types::config::RankConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "reporank.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".reporank/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/reporank/config.toml";

/// Loads the layered config for `root`. `explicit` replaces the project
/// layer and must exist. Returns `None` when no layer is present.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<Option<RankConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, explicit, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    explicit: Option<&Path>,
    global_path: Option<&Path>,
) -> Result<Option<RankConfig>> {
    let project_path = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(RankError::ConfigNotFound(path.display().to_string()));
            }
            path.to_path_buf()
        }
        None => root.join(DEFAULT_CONFIG_FILE),
    };
    let local_path = root.join(DEFAULT_LOCAL_FILE);

    let layers = [global_path.map(Path::to_path_buf), Some(project_path), Some(local_path)];
    let existing = layers
        .into_iter()
        .flatten()
        .filter(|path| path.exists())
        .collect::<Vec<_>>();
    if existing.is_empty() {
        return Ok(None);
    }

    let mut merged = Value::Table(Map::new());
    for path in &existing {
        tracing::debug!(path = %path.display(), "merging config layer");
        let value = read_toml_value(path)?;
        merge_toml(&mut merged, value);
    }

    let cfg: RankConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| RankError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(Some(cfg))
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| RankError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}
