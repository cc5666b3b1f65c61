//! View modes and formation names.
//!
//! A [`ViewMode`] is what the user (or a gesture) asks for. A
//! [`FormationName`] is which generated position set the particles fly to.
//! FOCUS has no particle formation of its own: the tree particles stay
//! scattered while the photo gallery arranges itself.

use serde::{Deserialize, Serialize};

/// Requested view of the scene.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViewMode {
    /// Particles assembled into the cone.
    #[default]
    Tree = 0,
    /// Particles dispersed through a sphere.
    Scatter = 1,
    /// Particles dispersed, photos brought forward.
    Focus = 2,
}

impl ViewMode {
    /// All modes, in discriminant order.
    pub const ALL: [Self; 3] = [Self::Tree, Self::Scatter, Self::Focus];

    /// The particle formation this mode morphs toward.
    #[must_use]
    pub const fn formation(self) -> FormationName {
        match self {
            Self::Tree => FormationName::Tree,
            Self::Scatter | Self::Focus => FormationName::Scatter,
        }
    }

    /// Upper-case label, as shown in UI and logs.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Tree => "TREE",
            Self::Scatter => "SCATTER",
            Self::Focus => "FOCUS",
        }
    }
}

impl From<u8> for ViewMode {
    fn from(v: u8) -> Self {
        match v {
            1 => Self::Scatter,
            2 => Self::Focus,
            _ => Self::Tree,
        }
    }
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A generated particle formation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormationName {
    /// Cone layout.
    Tree,
    /// Solid-sphere layout.
    Scatter,
}
