//! The fixed set of page views.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the named sections of the interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewId {
    #[default]
    Home,
    Nutrition,
    Fitness,
    Mental,
    Contact,
}

impl ViewId {
    /// All views in tab order.
    pub const ALL: [ViewId; 5] = [
        ViewId::Home,
        ViewId::Nutrition,
        ViewId::Fitness,
        ViewId::Mental,
        ViewId::Contact,
    ];

    /// Lowercase identifier, also used as the location fragment.
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewId::Home => "home",
            ViewId::Nutrition => "nutrition",
            ViewId::Fitness => "fitness",
            ViewId::Mental => "mental",
            ViewId::Contact => "contact",
        }
    }

    /// Label shown in the navigation bar.
    pub fn title(&self) -> &'static str {
        match self {
            ViewId::Home => "Home",
            ViewId::Nutrition => "Nutrition",
            ViewId::Fitness => "Fitness",
            ViewId::Mental => "Mental Health",
            ViewId::Contact => "Contact",
        }
    }

    /// Short label for narrow terminals.
    pub fn short_title(&self) -> &'static str {
        match self {
            ViewId::Home => "Home",
            ViewId::Nutrition => "Food",
            ViewId::Fitness => "Fit",
            ViewId::Mental => "Mind",
            ViewId::Contact => "Mail",
        }
    }

    /// Position in [`ViewId::ALL`].
    pub fn index(&self) -> usize {
        ViewId::ALL
            .iter()
            .position(|v| v == self)
            .unwrap_or_default()
    }

    /// Resolve a location fragment such as `#fitness` or `fitness`.
    ///
    /// Returns `None` for empty or unknown fragments; callers fall back to
    /// [`ViewId::Home`].
    pub fn from_fragment(fragment: &str) -> Option<ViewId> {
        let name = fragment.trim().trim_start_matches('#');
        if name.is_empty() {
            return None;
        }
        name.parse().ok()
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a view.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown view '{0}'")]
pub struct UnknownView(pub String);

impl FromStr for ViewId {
    type Err = UnknownView;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ViewId::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UnknownView(s.to_string()))
    }
}
