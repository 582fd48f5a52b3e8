use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};

/// Default placement of a stub vertex along the segment from a rerouted
/// neighbor toward the junction it was detached from.
pub const DEFAULT_STUB_FRACTION: f32 = 0.99;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JunctionOptions {
    /// Stub position is `lerp(neighbor, junction, stub_fraction)`.
    pub stub_fraction: f32,
    /// Drop a rerouted neighbor instead of giving it a stub when detaching
    /// it from the junction leaves it with no edges.
    pub prune_isolated: bool,
}

impl Default for JunctionOptions {
    fn default() -> Self {
        JunctionOptions {
            stub_fraction: DEFAULT_STUB_FRACTION,
            prune_isolated: false,
        }
    }
}

impl JunctionOptions {
    pub fn validate(&self) -> Result<()> {
        check_unit("stub_fraction", self.stub_fraction)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothOptions {
    /// Fraction of the Laplacian offset applied per round.
    pub alpha: f32,
    pub rounds: u32,
}

impl Default for SmoothOptions {
    fn default() -> Self {
        SmoothOptions {
            alpha: 0.5,
            rounds: 1,
        }
    }
}

impl SmoothOptions {
    pub fn validate(&self) -> Result<()> {
        check_unit("alpha", self.alpha)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecomposeOptions {
    /// Run junction resolution before extracting curves.
    pub resolve_junctions: bool,
    pub junctions: JunctionOptions,
}

impl Default for DecomposeOptions {
    fn default() -> Self {
        DecomposeOptions {
            resolve_junctions: true,
            junctions: JunctionOptions::default(),
        }
    }
}

impl DecomposeOptions {
    pub fn validate(&self) -> Result<()> {
        self.junctions.validate()
    }
}

fn check_unit(param: &'static str, got: f32) -> Result<()> {
    if got.is_finite() && (0.0..=1.0).contains(&got) {
        Ok(())
    } else {
        Err(GraphError::OutOfRange {
            param,
            min: 0.0,
            max: 1.0,
            got,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(JunctionOptions::default().validate().is_ok());
        assert!(SmoothOptions::default().validate().is_ok());
        assert!(DecomposeOptions::default().validate().is_ok());
    }

    #[test]
    fn stub_fraction_out_of_range_is_rejected() {
        let opts = JunctionOptions {
            stub_fraction: 1.5,
            ..JunctionOptions::default()
        };
        assert!(matches!(
            opts.validate(),
            Err(GraphError::OutOfRange { param: "stub_fraction", .. })
        ));
        let nan = SmoothOptions { alpha: f32::NAN, rounds: 1 };
        assert!(nan.validate().is_err());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let opts: DecomposeOptions =
            serde_json::from_value(serde_json::json!({ "resolve_junctions": false })).unwrap();
        assert!(!opts.resolve_junctions);
        assert_eq!(opts.junctions.stub_fraction, DEFAULT_STUB_FRACTION);
    }
}
