//! Layer vocabulary and the layer dependency table.
//!
//! Feature-Sliced Design fixes six layers, ordered from lowest to highest:
//! `shared`, `entities`, `features`, `widgets`, `pages`, `app`. A layer may
//! import only from the layers listed for it in [`Layer::allowed_imports`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the six architectural tiers.
///
/// Variant order follows the dependency hierarchy, so `Ord` compares layers
/// from lowest (`Shared`) to highest (`App`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    /// Reusable infrastructure with no business logic.
    Shared,
    /// Business entities.
    Entities,
    /// User-facing interactions.
    Features,
    /// Composite blocks of features and entities.
    Widgets,
    /// Full pages.
    Pages,
    /// Application bootstrap: providers, routing, global styles.
    App,
}

impl Layer {
    /// All layers, lowest first.
    pub const ALL: [Layer; 6] = [
        Self::Shared,
        Self::Entities,
        Self::Features,
        Self::Widgets,
        Self::Pages,
        Self::App,
    ];

    /// Returns the directory name of this layer.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Shared => "shared",
            Self::Entities => "entities",
            Self::Features => "features",
            Self::Widgets => "widgets",
            Self::Pages => "pages",
            Self::App => "app",
        }
    }

    /// Parses a directory name into a layer, `None` for anything else.
    #[must_use]
    pub fn from_segment(segment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.as_str() == segment)
    }

    /// Layers this layer is permitted to import from.
    ///
    /// Same-layer imports are allowed only for `shared` and `entities`.
    #[must_use]
    pub const fn allowed_imports(self) -> &'static [Layer] {
        match self {
            Self::App => &[
                Self::Pages,
                Self::Widgets,
                Self::Features,
                Self::Shared,
                Self::Entities,
            ],
            Self::Pages => &[Self::Widgets, Self::Features, Self::Shared, Self::Entities],
            Self::Widgets => &[Self::Features, Self::Shared, Self::Entities],
            Self::Features => &[Self::Shared, Self::Entities],
            Self::Entities => &[Self::Shared, Self::Entities],
            Self::Shared => &[Self::Shared],
        }
    }

    /// Whether a file in this layer may import from `target`.
    #[must_use]
    pub fn may_import(self, target: Layer) -> bool {
        self.allowed_imports().contains(&target)
    }

    /// Whether deep imports into this layer's slices are policed by the
    /// public API rule. `shared` and `app` are addressed by segment directly.
    #[must_use]
    pub const fn has_public_api(self) -> bool {
        matches!(
            self,
            Self::Entities | Self::Features | Self::Pages | Self::Widgets
        )
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a layer name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown layer '{0}'")]
pub struct UnknownLayer(pub String);

impl FromStr for Layer {
    type Err = UnknownLayer;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_segment(s).ok_or_else(|| UnknownLayer(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_layer_name() {
        for layer in Layer::ALL {
            assert_eq!(layer.as_str().parse::<Layer>(), Ok(layer));
        }
    }

    #[test]
    fn rejects_unknown_names() {
        assert_eq!(Layer::from_segment("react"), None);
        assert_eq!(Layer::from_segment("Entities"), None);
        assert_eq!(Layer::from_segment(""), None);
        assert!("processes".parse::<Layer>().is_err());
    }

    #[test]
    fn ordering_is_lowest_first() {
        assert!(Layer::Shared < Layer::Entities);
        assert!(Layer::Pages < Layer::App);
        let mut sorted = Layer::ALL;
        sorted.sort();
        assert_eq!(sorted, Layer::ALL);
    }

    #[test]
    fn table_is_total() {
        for layer in Layer::ALL {
            assert!(!layer.allowed_imports().is_empty(), "{layer} has no entry");
        }
    }

    #[test]
    fn self_imports_only_for_shared_and_entities() {
        let self_importers: Vec<Layer> = Layer::ALL
            .into_iter()
            .filter(|l| l.may_import(*l))
            .collect();
        assert_eq!(self_importers, vec![Layer::Shared, Layer::Entities]);
    }

    #[test]
    fn never_imports_upwards() {
        for from in Layer::ALL {
            for to in Layer::ALL {
                if to > from {
                    assert!(!from.may_import(to), "{from} -> {to} must be forbidden");
                }
            }
        }
    }

    #[test]
    fn public_api_layers() {
        let checked: Vec<Layer> = Layer::ALL
            .into_iter()
            .filter(|l| l.has_public_api())
            .collect();
        assert_eq!(
            checked,
            vec![Layer::Entities, Layer::Features, Layer::Widgets, Layer::Pages]
        );
    }

    #[test]
    fn serde_uses_directory_names() {
        let json = serde_json::to_string(&Layer::Widgets).unwrap();
        assert_eq!(json, "\"widgets\"");
    }
}
