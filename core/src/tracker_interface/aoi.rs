use serde::{Deserialize, Serialize};

use crate::prelude::{AnalysisError, CoreResult};

/// Axis-aligned rectangle in normalized stimulus coordinates, anchored at
/// its top-left corner.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AoiBounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// User-drawn area of interest. `color` carries no analytical meaning but
/// must survive serialization round-trips for the drawing UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Aoi {
    pub id: u64,
    pub name: String,
    pub color: String,
    pub bounds: AoiBounds,
}

impl Aoi {
    pub fn new(id: u64, name: impl Into<String>, color: impl Into<String>, bounds: AoiBounds) -> Self {
        Self {
            id,
            name: name.into(),
            color: color.into(),
            bounds,
        }
    }

    /// Boundary check applied before any containment math runs. Zero-sized
    /// rectangles are legal (they just never match); negative extents are
    /// not.
    pub fn validate(&self) -> CoreResult<()> {
        let b = &self.bounds;
        if !(b.x.is_finite() && b.y.is_finite() && b.width.is_finite() && b.height.is_finite()) {
            return Err(AnalysisError::InvalidAoi(format!(
                "AOI '{}' has non-finite bounds",
                self.name
            )));
        }
        if b.width < 0.0 || b.height < 0.0 {
            return Err(AnalysisError::InvalidAoi(format!(
                "AOI '{}' has negative extent {}x{}",
                self.name, b.width, b.height
            )));
        }
        Ok(())
    }
}
