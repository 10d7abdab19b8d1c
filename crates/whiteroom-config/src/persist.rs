//! RON files under the settings directory.

use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::ConfigError;

/// Parse `dir/file_name`.
pub(crate) fn read_ron<T: DeserializeOwned>(dir: &Path, file_name: &str) -> Result<T, ConfigError> {
    let path = dir.join(file_name);
    let text = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;
    ron::from_str(&text).map_err(|source| ConfigError::Parse { path, source })
}

/// Pretty-print `value` into `dir/file_name`, creating `dir` first.
pub(crate) fn write_ron<T: Serialize>(
    value: &T,
    dir: &Path,
    file_name: &str,
) -> Result<(), ConfigError> {
    let layout = ron::ser::PrettyConfig::new()
        .depth_limit(4)
        .separate_tuple_members(true)
        .enumerate_arrays(false);
    let text = ron::ser::to_string_pretty(value, layout)?;
    let path = dir.join(file_name);
    std::fs::create_dir_all(dir)
        .and_then(|()| std::fs::write(&path, text))
        .map_err(|source| ConfigError::Write { path, source })
}

/// Read `dir/file_name`, or store and return `T::default()` when absent.
/// A present but unreadable file is an error, never silently replaced.
pub(crate) fn read_or_seed<T>(dir: &Path, file_name: &str) -> Result<T, ConfigError>
where
    T: Default + Serialize + DeserializeOwned,
{
    if dir.join(file_name).exists() {
        let value = read_ron(dir, file_name)?;
        log::info!("read {}", dir.join(file_name).display());
        Ok(value)
    } else {
        let value = T::default();
        write_ron(&value, dir, file_name)?;
        log::info!("seeded {} with defaults", dir.join(file_name).display());
        Ok(value)
    }
}
