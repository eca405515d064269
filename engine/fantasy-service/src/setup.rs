//! Template data directory

use crate::config::CONFIG_FILE;
use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use tracing::info;

const ROUND_TEMPLATE: &str = include_str!("../templates/round.json");
const CONFIG_TEMPLATE: &str = include_str!("../templates/config.toml");

/// Write a sample round input and configuration under `data_dir`.
///
/// Existing files are left alone unless `force` is set.
pub fn write_template(data_dir: &Path, force: bool) -> Result<Vec<PathBuf>> {
    let files = [
        (data_dir.join(CONFIG_FILE), CONFIG_TEMPLATE),
        (data_dir.join("input").join("round.json"), ROUND_TEMPLATE),
    ];

    if !force {
        if let Some((existing, _)) = files.iter().find(|(path, _)| path.exists()) {
            bail!("{:?} already exists, pass --force to overwrite it", existing);
        }
    }

    let mut written = Vec::with_capacity(files.len());
    for (path, contents) in files {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {:?}", parent))?;
        }
        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write template: {:?}", path))?;
        info!("Wrote {:?}", path);
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{load_from_file, ServiceConfig};
    use crate::input::RoundInput;
    use fantasy_registry::FantasyRegistry;

    #[test]
    fn test_templates_parse() {
        let dir = tempfile::tempdir().unwrap();
        let written = write_template(dir.path(), false).unwrap();
        assert_eq!(written.len(), 2);

        let config = load_from_file(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, ServiceConfig::default());

        let input = RoundInput::from_file(&dir.path().join("input/round.json")).unwrap();
        assert_eq!(input.driver_prices.len(), 20);
        assert_eq!(input.constructor_prices.len(), 10);
        input.apply(&mut FantasyRegistry::new()).unwrap();
    }

    #[test]
    fn test_existing_files_need_force() {
        let dir = tempfile::tempdir().unwrap();
        write_template(dir.path(), false).unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "[logging]\nlevel = \"debug\"\n").unwrap();

        assert!(write_template(dir.path(), false).is_err());
        let config = load_from_file(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config.logging.level, "debug");

        write_template(dir.path(), true).unwrap();
        let config = load_from_file(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config.logging.level, "info");
    }
}
