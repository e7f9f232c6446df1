//! Level Library
//!
//! Ordered collection of playable levels. On native builds, levels are
//! discovered from `*.ron` files in the levels directory (sorted by file
//! name). Invalid files are skipped; if nothing usable is found the built-in
//! levels are used. WASM builds can't enumerate directories and always use
//! the built-ins.

use super::level::{builtin_levels, LevelDef};
#[cfg(not(target_arch = "wasm32"))]
use super::level::{level_to_ron, parse_level, LevelError};
#[cfg(not(target_arch = "wasm32"))]
use std::path::Path;

/// A non-empty, ordered list of levels
#[derive(Debug, Clone)]
pub struct LevelLibrary {
    levels: Vec<LevelDef>,
}

impl LevelLibrary {
    pub fn builtin() -> Self {
        Self { levels: builtin_levels() }
    }

    /// Wrap a list of levels, falling back to the built-ins when empty
    pub fn from_levels(levels: Vec<LevelDef>) -> Self {
        if levels.is_empty() {
            Self::builtin()
        } else {
            Self { levels }
        }
    }

    /// Load every valid `*.ron` level in `dir`
    #[cfg(not(target_arch = "wasm32"))]
    pub fn discover(dir: &Path) -> Self {
        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                log::info!("No level directory at {} ({}), using built-in levels", dir.display(), e);
                return Self::builtin();
            }
        };

        let mut paths: Vec<_> = entries
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| {
                p.is_file()
                    && p.extension()
                        .map(|ext| ext.eq_ignore_ascii_case("ron"))
                        .unwrap_or(false)
            })
            .collect();
        paths.sort();

        let mut levels = Vec::with_capacity(paths.len());
        for path in paths {
            let result = std::fs::read_to_string(&path)
                .map_err(LevelError::from)
                .and_then(|text| parse_level(&text));
            match result {
                Ok(level) => {
                    log::info!("Loaded level '{}' from {}", level.name, path.display());
                    levels.push(level);
                }
                Err(e) => log::warn!("Skipping level {}: {}", path.display(), e),
            }
        }

        if levels.is_empty() {
            log::info!("No valid levels in {}, using built-in levels", dir.display());
        }
        Self::from_levels(levels)
    }

    /// Write the built-in levels into `dir` as editable RON files.
    /// Returns the number of files written.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn export_builtins(dir: &Path) -> Result<usize, LevelError> {
        std::fs::create_dir_all(dir)?;
        let levels = builtin_levels();
        for (i, level) in levels.iter().enumerate() {
            let file_name = format!("{:02}_{}.ron", i + 1, level.name.to_lowercase());
            std::fs::write(dir.join(file_name), level_to_ron(level)?)?;
        }
        Ok(levels.len())
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Level at `index`, wrapping past the end
    pub fn get(&self, index: usize) -> &LevelDef {
        &self.levels[index % self.levels.len()]
    }

    /// Index of the level after `index`, wrapping to the first
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.levels.len()
    }
}

impl Default for LevelLibrary {
    fn default() -> Self {
        Self::builtin()
    }
}
