//! Construction parameters for visibility tries.

use serde::{Deserialize, Serialize};

use super::error::Error;
use super::types::Result;

/// Largest sparse radius accepted by [`VisibilityConfig::validate`].
///
/// A sparse trie holds about `6r²` nodes and `3r³` dependent keys, roughly
/// `12·r³` bytes: about 1.6 GB at this radius.
pub const MAX_RADIUS: i32 = 512;

/// Largest dense radius accepted by [`VisibilityConfig::validate`].
///
/// A dense trie holds about `0.43·r³` nodes and `2r³` dependent keys, roughly
/// `56·r³` bytes: about 1 GB at this radius.
pub const MAX_DENSE_RADIUS: i32 = 256;

/// Which rays are cast when the trie is built.
///
/// Only affects construction; FOV and LOS run the same code for both.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Density {
    /// Cast rays only to the border of the bounding square and let their
    /// prefixes cover the interior. Much smaller trie for large radii. A cell
    /// may be reached by several rays and counts as visible when any of them
    /// is clear.
    ///
    /// Line of sight is not symmetric in this mode: on cluttered maps a few
    /// percent of pairs disagree (about 8% at radius 8 with a quarter of the
    /// cells blocking). Use [`Density::Dense`] when `los(a, b) == los(b, a)`
    /// must hold.
    #[default]
    Sparse,
    /// Cast one ray to every cell inside the radius. Each cell has exactly one
    /// ray, which makes every line of sight strictly symmetric.
    Dense,
}

impl Density {
    /// Largest radius a trie of this density may be built with.
    pub fn max_radius(self) -> i32 {
        match self {
            Density::Sparse => MAX_RADIUS,
            Density::Dense => MAX_DENSE_RADIUS,
        }
    }
}

/// Parameters for building a [`VisibilityTrie`](crate::trie::VisibilityTrie).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisibilityConfig {
    /// Maximum sight distance in cells (Euclidean, inclusive).
    pub radius: i32,
    /// Ray density used during construction.
    pub density: Density,
}

impl Default for VisibilityConfig {
    fn default() -> Self {
        Self {
            radius: 8,
            density: Density::Sparse,
        }
    }
}

impl VisibilityConfig {
    pub fn new(radius: i32, density: Density) -> Self {
        Self { radius, density }
    }

    /// Check that the radius is positive and within the density's limit.
    pub fn validate(&self) -> Result<()> {
        if self.radius <= 0 {
            return Err(Error::InvalidRadius(self.radius));
        }
        let max = self.density.max_radius();
        if self.radius > max {
            return Err(Error::RadiusTooLarge {
                radius: self.radius,
                max,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_sparse() {
        let config = VisibilityConfig::default();
        assert_eq!(config.density, Density::Sparse);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_positive_radius() {
        assert_eq!(
            VisibilityConfig::new(0, Density::Dense).validate(),
            Err(Error::InvalidRadius(0))
        );
        assert_eq!(
            VisibilityConfig::new(-3, Density::Sparse).validate(),
            Err(Error::InvalidRadius(-3))
        );
    }

    #[test]
    fn test_validate_rejects_huge_radius() {
        let err = VisibilityConfig::new(MAX_RADIUS + 1, Density::Sparse)
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            Error::RadiusTooLarge {
                radius: MAX_RADIUS + 1,
                max: MAX_RADIUS
            }
        );
        assert!(err.to_string().contains("exceeds"));
    }

    #[test]
    fn test_dense_limit_is_lower() {
        assert!(VisibilityConfig::new(MAX_DENSE_RADIUS, Density::Dense).validate().is_ok());
        assert!(VisibilityConfig::new(MAX_DENSE_RADIUS + 1, Density::Sparse).validate().is_ok());
        assert_eq!(
            VisibilityConfig::new(MAX_DENSE_RADIUS + 1, Density::Dense).validate(),
            Err(Error::RadiusTooLarge {
                radius: MAX_DENSE_RADIUS + 1,
                max: MAX_DENSE_RADIUS
            })
        );
        assert!(VisibilityConfig::new(4096, Density::Dense).validate().is_err());
    }

    #[test]
    fn test_json_roundtrip() {
        let config = VisibilityConfig::new(12, Density::Dense);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"dense\""));
        let parsed: VisibilityConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_json_missing_fields_use_defaults() {
        let parsed: VisibilityConfig = serde_json::from_str(r#"{"radius": 5}"#).unwrap();
        assert_eq!(parsed, VisibilityConfig::new(5, Density::Sparse));

        let parsed: VisibilityConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, VisibilityConfig::default());
    }
}
