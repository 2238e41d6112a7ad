use serde::{Deserialize, Serialize};

/// Visual theme identifier persisted across visits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeId {
    #[default]
    White,
    Black,
    Neo,
}

impl ThemeId {
    /// Cycle order used by the theme toggle.
    pub const ALL: [ThemeId; 3] = [ThemeId::White, ThemeId::Black, ThemeId::Neo];

    pub fn slug(self) -> &'static str {
        match self {
            ThemeId::White => "white",
            ThemeId::Black => "black",
            ThemeId::Neo => "neo",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ThemeId::White => "Professional White",
            ThemeId::Black => "Developer Black",
            ThemeId::Neo => "Neo Gradient",
        }
    }

    /// Resolves a stored identifier; unknown values are treated as unset.
    pub fn from_slug(slug: &str) -> Option<ThemeId> {
        Self::ALL.into_iter().find(|theme| theme.slug() == slug)
    }

    /// Advances to the next theme in [`ThemeId::ALL`], wrapping around.
    pub fn next(self) -> ThemeId {
        let index = Self::ALL.iter().position(|theme| *theme == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}
