//! Symbol themes and the theme table.

use crate::types::Role;
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// A pair of symbols (one per role) plus a display accent.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct Theme {
    /// Optional display name.
    #[serde(default)]
    #[new(default)]
    name: Option<String>,

    /// Symbol placed by the X role.
    symbol_x: String,

    /// Symbol placed by the O role.
    symbol_o: String,

    /// Accent color for presentation (any CSS color string).
    accent: String,
}

impl Theme {
    /// Returns the symbol a role places under this theme.
    pub fn symbol_for(&self, role: Role) -> &str {
        match role {
            Role::X => &self.symbol_x,
            Role::O => &self.symbol_o,
        }
    }

    /// Label shown in theme pickers: the name, or `"<x> VS <o>"`.
    pub fn label(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("{} VS {}", self.symbol_x, self.symbol_o),
        }
    }
}

/// Fixed, ordered list of themes.
///
/// Never empty; every theme has two distinct, non-empty symbols.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeTable {
    themes: Vec<Theme>,
}

#[derive(Deserialize)]
struct ThemeFile {
    themes: Vec<Theme>,
}

impl ThemeTable {
    /// Builds a table, validating every entry.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeConfigError`] if the list is empty or a theme has an
    /// empty symbol or the same symbol for both roles.
    #[instrument(skip(themes), fields(count = themes.len()))]
    pub fn new(themes: Vec<Theme>) -> Result<Self, ThemeConfigError> {
        if themes.is_empty() {
            return Err(ThemeConfigError::new("Theme table must not be empty"));
        }

        for (i, theme) in themes.iter().enumerate() {
            if theme.symbol_x.is_empty() || theme.symbol_o.is_empty() {
                return Err(ThemeConfigError::new(format!(
                    "Theme {} has an empty symbol",
                    i
                )));
            }
            if theme.symbol_x == theme.symbol_o {
                return Err(ThemeConfigError::new(format!(
                    "Theme {} uses {:?} for both players",
                    i, theme.symbol_x
                )));
            }
        }

        Ok(Self { themes })
    }

    /// Parses a table from TOML (`[[themes]]` array of tables).
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ThemeConfigError> {
        let file: ThemeFile = toml::from_str(content)
            .map_err(|e| ThemeConfigError::new(format!("Failed to parse themes: {}", e)))?;
        Self::new(file.themes)
    }

    /// Loads a table from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ThemeConfigError> {
        debug!("Loading themes from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ThemeConfigError::new(format!("Failed to read theme file: {}", e))
        })?;

        let table = Self::from_toml_str(&content)?;
        info!(count = table.len(), "Themes loaded successfully");
        Ok(table)
    }

    /// Gets a theme by index.
    pub fn get(&self, index: usize) -> Option<&Theme> {
        self.themes.get(index)
    }

    /// The first theme, active by default.
    pub fn first(&self) -> &Theme {
        // Construction rejects empty tables.
        &self.themes[0]
    }

    /// Number of themes.
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// Iterates themes in table order.
    pub fn iter(&self) -> std::slice::Iter<'_, Theme> {
        self.themes.iter()
    }
}

impl Default for ThemeTable {
    /// The built-in themes.
    fn default() -> Self {
        Self {
            themes: vec![
                Theme::new("🐔".into(), "🥚".into(), "#ffd9d2".into()),
                Theme::new("🧠".into(), "💪".into(), "#f0f8ff8c".into()),
                Theme::new("🤠".into(), "👽".into(), "wheat".into()),
            ],
        }
    }
}

impl<'a> IntoIterator for &'a ThemeTable {
    type Item = &'a Theme;
    type IntoIter = std::slice::Iter<'a, Theme>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Theme configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Theme config error: {} at {}:{}", message, file, line)]
pub struct ThemeConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ThemeConfigError {
    /// Creates a new theme configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table() {
        let table = ThemeTable::default();
        assert_eq!(table.len(), 3);
        let first = table.get(0).unwrap();
        assert_eq!(first.symbol_for(Role::X), "🐔");
        assert_eq!(first.symbol_for(Role::O), "🥚");
        assert_eq!(first.label(), "🐔 VS 🥚");
        assert_eq!(table.get(2).unwrap().accent(), "wheat");
    }

    #[test]
    fn test_parse_toml() {
        let table = ThemeTable::from_toml_str(
            r##"
[[themes]]
name = "Classic"
symbol_x = "X"
symbol_o = "O"
accent = "#ffffff"

[[themes]]
symbol_x = "🐱"
symbol_o = "🐶"
accent = "pink"
"##,
        )
        .expect("valid table");

        assert_eq!(table.len(), 2);
        assert_eq!(table.get(0).unwrap().label(), "Classic");
        assert_eq!(table.get(1).unwrap().label(), "🐱 VS 🐶");
    }

    #[test]
    fn test_rejects_empty_table() {
        let err = ThemeTable::from_toml_str("themes = []").unwrap_err();
        assert!(err.message.contains("must not be empty"));
    }

    #[test]
    fn test_rejects_duplicate_symbols() {
        let err = ThemeTable::new(vec![Theme::new("X".into(), "X".into(), "red".into())])
            .unwrap_err();
        assert!(err.message.contains("both players"));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = ThemeTable::from_toml_str("[[themes]]\nsymbol_x = 1").unwrap_err();
        assert!(err.message.contains("Failed to parse"));
    }
}
