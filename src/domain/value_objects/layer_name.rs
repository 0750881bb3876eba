//! Layer catalog
//!
//! The fixed, closed set of top-level layer directories that make up a
//! component tree. Packages contribute to any subset of these.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A recognised top-level layer directory name
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerName {
    Platform,
    Interaction,
    Integration,
    Cognition,
    Conversation,
    Stabilization,
    Foundation,
}

impl LayerName {
    /// Every layer, in catalog order
    pub const ALL: [LayerName; 7] = [
        LayerName::Platform,
        LayerName::Interaction,
        LayerName::Integration,
        LayerName::Cognition,
        LayerName::Conversation,
        LayerName::Stabilization,
        LayerName::Foundation,
    ];

    /// Directory name of this layer
    pub fn as_str(&self) -> &'static str {
        match self {
            LayerName::Platform => "platform",
            LayerName::Interaction => "interaction",
            LayerName::Integration => "integration",
            LayerName::Cognition => "cognition",
            LayerName::Conversation => "conversation",
            LayerName::Stabilization => "stabilization",
            LayerName::Foundation => "foundation",
        }
    }

    /// Look up a layer by its exact directory name
    pub fn from_dir_name(name: &str) -> Option<LayerName> {
        Self::ALL.into_iter().find(|layer| layer.as_str() == name)
    }

    /// Returns true if `name` is a recognised layer directory name
    pub fn is_layer(name: &str) -> bool {
        Self::from_dir_name(name).is_some()
    }
}

impl fmt::Display for LayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown layer '{0}' (expected one of: platform, interaction, integration, cognition, conversation, stabilization, foundation)")]
pub struct UnknownLayer(pub String);

impl FromStr for LayerName {
    type Err = UnknownLayer;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_dir_name(s).ok_or_else(|| UnknownLayer(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_seven_layers() {
        assert_eq!(LayerName::ALL.len(), 7);
    }

    #[test]
    fn is_layer_accepts_every_catalog_entry() {
        for layer in LayerName::ALL {
            assert!(LayerName::is_layer(layer.as_str()), "{layer} not recognised");
        }
    }

    #[test]
    fn is_layer_rejects_unknown_names() {
        assert!(!LayerName::is_layer("docs"));
        assert!(!LayerName::is_layer("src"));
        assert!(!LayerName::is_layer(""));
    }

    #[test]
    fn is_layer_is_case_sensitive() {
        assert!(!LayerName::is_layer("Platform"));
        assert!(!LayerName::is_layer("PLATFORM"));
    }

    #[test]
    fn from_str_round_trips_display() {
        for layer in LayerName::ALL {
            assert_eq!(layer.to_string().parse::<LayerName>().unwrap(), layer);
        }
    }

    #[test]
    fn from_str_error_names_the_input() {
        let err = "plugins".parse::<LayerName>().unwrap_err();
        assert!(err.to_string().contains("plugins"));
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&LayerName::Stabilization).unwrap();
        assert_eq!(json, "\"stabilization\"");
    }
}
