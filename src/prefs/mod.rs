//! Visitor preference persistence.
//!
//! Two flags survive across visits: the active theme and the interface
//! language. They live in a TOML file located at:
//!   %APPDATA%/PortfolioBase/config/prefs.toml on Windows
//!   $XDG_DATA_HOME/PortfolioBase/config/prefs.toml on Linux
//!   ~/Library/Application Support/PortfolioBase/config/prefs.toml on macOS
//! with `PORTFOLIOBASE_HOME` overriding the root for tests and portable runs.
//!
//! Missing files, missing keys, and unrecognized stored values all resolve to
//! the defaults instead of failing; a stale preference file must never keep
//! the page from loading.

use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub mod language;
pub mod theme;

pub use language::LanguageId;
pub use theme::ThemeId;

/// The persisted preference pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub theme: ThemeId,
    #[serde(default)]
    pub language: LanguageId,
}

/// On-disk form. Values are kept as free strings so an unknown identifier
/// written by a newer build degrades to the default instead of a parse error.
#[derive(Debug, Default, Deserialize)]
struct StoredPreferences {
    #[serde(default)]
    theme: Option<String>,
    #[serde(default)]
    language: Option<String>,
}

impl StoredPreferences {
    fn resolve(&self) -> Preferences {
        Preferences {
            theme: self
                .theme
                .as_deref()
                .and_then(ThemeId::from_slug)
                .unwrap_or_default(),
            language: self
                .language
                .as_deref()
                .and_then(LanguageId::from_slug)
                .unwrap_or_default(),
        }
    }
}

/// Standard file name for the preference file.
pub const PREFS_FILE_NAME: &str = "prefs.toml";

/// Returns the root directory where PortfolioBase stores data.
///
/// Order of precedence:
/// 1. `PORTFOLIOBASE_HOME` environment variable.
/// 2. OS-specific data directory via `directories::BaseDirs`.
pub fn workspace_root() -> Result<PathBuf> {
    if let Ok(path) = env::var("PORTFOLIOBASE_HOME") {
        return Ok(PathBuf::from(path));
    }
    let base_dirs = BaseDirs::new().context("Unable to determine OS data directory")?;
    Ok(base_dirs.data_dir().join("PortfolioBase"))
}

fn prefs_file_under(root: &Path) -> PathBuf {
    root.join("config").join(PREFS_FILE_NAME)
}

/// Path to the preference file under the default workspace root.
pub fn prefs_file_path() -> Result<PathBuf> {
    Ok(prefs_file_under(&workspace_root()?))
}

/// Handle over the preference file: reads once on open, writes through on
/// every change so a reload sees the latest pair.
#[derive(Debug)]
pub struct PreferenceStore {
    path: PathBuf,
    current: Preferences,
}

impl PreferenceStore {
    /// Opens the store under the default workspace root.
    pub fn open_default() -> Result<Self> {
        Self::open_at(workspace_root()?)
    }

    /// Opens the store under an explicit root directory.
    pub fn open_at(root: impl AsRef<Path>) -> Result<Self> {
        let path = prefs_file_under(root.as_ref());
        let current = load_from(&path)?;
        Ok(Self { path, current })
    }

    pub fn preferences(&self) -> Preferences {
        self.current
    }

    pub fn theme(&self) -> ThemeId {
        self.current.theme
    }

    pub fn language(&self) -> LanguageId {
        self.current.language
    }

    pub fn set_theme(&mut self, theme: ThemeId) -> Result<()> {
        self.current.theme = theme;
        self.persist()
    }

    /// Advances the theme in display order and persists the result.
    pub fn cycle_theme(&mut self) -> Result<ThemeId> {
        let next = self.current.theme.next();
        self.set_theme(next)?;
        Ok(next)
    }

    pub fn set_language(&mut self, language: LanguageId) -> Result<()> {
        self.current.language = language;
        self.persist()
    }

    /// Flips between English and Hindi and persists the result.
    pub fn toggle_language(&mut self) -> Result<LanguageId> {
        let next = self.current.language.toggle();
        self.set_language(next)?;
        Ok(next)
    }

    fn persist(&self) -> Result<()> {
        let dir = self
            .path
            .parent()
            .context("Preference file path has no parent directory")?;
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create preference directory {:?}", dir))?;
        let data = toml::to_string_pretty(&self.current)?;
        fs::write(&self.path, data)
            .with_context(|| format!("Failed to write preference file {:?}", self.path))?;
        Ok(())
    }
}

fn load_from(path: &Path) -> Result<Preferences> {
    if !path.exists() {
        return Ok(Preferences::default());
    }
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read preference file {:?}", path))?;
    let stored: StoredPreferences = toml::from_str(&data).unwrap_or_default();
    Ok(stored.resolve())
}

/// Loads the preference pair from the default location, or defaults.
pub fn load_or_default() -> Result<Preferences> {
    load_from(&prefs_file_path()?)
}
