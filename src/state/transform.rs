// View transform applied to the lightbox image

pub const MIN_SCALE: f64 = 1.0;
pub const MAX_SCALE: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub scale: f64,
    pub pan_x: f64,
    pub pan_y: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ViewTransform {
    pub const IDENTITY: Self = Self {
        scale: MIN_SCALE,
        pan_x: 0.0,
        pan_y: 0.0,
    };

    pub fn is_zoomed(&self) -> bool {
        self.scale > MIN_SCALE
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    pub fn reset(&mut self) {
        *self = Self::IDENTITY;
    }

    /// CSS `transform` value: translate first, then uniform scale.
    /// `None` for identity so callers can drop the property entirely.
    pub fn to_css(&self) -> Option<String> {
        if self.is_identity() {
            return None;
        }
        Some(format!(
            "translate({}px, {}px) scale({})",
            self.pan_x, self.pan_y, self.scale
        ))
    }
}
