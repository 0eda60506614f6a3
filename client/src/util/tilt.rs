//! Pointer-driven 3D tilt for card surfaces.
//!
//! DESIGN
//! ======
//! The engine is a pure mapping from one pointer sample plus the surface's
//! layout rectangle to a `TiltState`. Components forward `pointermove` and
//! `pointerleave` and write the result into a signal they own, so every
//! surface tilts independently and nothing is shared between instances.
//!
//! Rotation about X follows the vertical offset (top edge tilts toward the
//! viewer), rotation about Y follows the horizontal offset. Both are bounded
//! by the profile's half range.

#[cfg(test)]
#[path = "tilt_test.rs"]
mod tilt_test;

use super::css::css_number;

/// Perspective distance applied ahead of every rotation.
pub const PERSPECTIVE_PX: f64 = 1000.0;
/// Transition while the pointer is over the surface.
pub const ENGAGED_TRANSITION_SECS: f64 = 0.1;
/// Transition back to rest after the pointer leaves.
pub const SETTLE_TRANSITION_SECS: f64 = 0.6;

/// Bounding rectangle of a surface in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl SurfaceRect {
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// False until the surface has a positive, finite size.
    #[must_use]
    pub fn is_laid_out(&self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }

    /// Pointer position as fractions of the surface size, clamped to `[0, 1]`.
    #[must_use]
    pub fn normalize(&self, pointer_x: f64, pointer_y: f64) -> Option<(f64, f64)> {
        if !self.is_laid_out() || !pointer_x.is_finite() || !pointer_y.is_finite() {
            return None;
        }
        let nx = ((pointer_x - self.left) / self.width).clamp(0.0, 1.0);
        let ny = ((pointer_y - self.top) / self.height).clamp(0.0, 1.0);
        Some((nx, ny))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    /// Quick follow while engaged.
    EaseOut,
    /// Pronounced ease-out used when returning to rest.
    Settle,
}

impl Easing {
    #[must_use]
    pub const fn css(self) -> &'static str {
        match self {
            Self::EaseOut => "ease-out",
            Self::Settle => "cubic-bezier(0.23, 1, 0.32, 1)",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub duration_secs: f64,
    pub easing: Easing,
}

impl Transition {
    pub const ENGAGED: Self = Self { duration_secs: ENGAGED_TRANSITION_SECS, easing: Easing::EaseOut };
    pub const SETTLE: Self = Self { duration_secs: SETTLE_TRANSITION_SECS, easing: Easing::Settle };

    /// CSS `transition` value for the `transform` property.
    #[must_use]
    pub fn css(&self) -> String {
        format!("transform {}s {}", css_number(self.duration_secs), self.easing.css())
    }
}

/// Visual transform of one tilt surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltState {
    pub rotate_x_deg: f64,
    pub rotate_y_deg: f64,
    pub scale: f64,
    pub transition: Transition,
}

impl TiltState {
    /// Rest pose: no rotation, unit scale, settling transition.
    #[must_use]
    pub const fn neutral() -> Self {
        Self { rotate_x_deg: 0.0, rotate_y_deg: 0.0, scale: 1.0, transition: Transition::SETTLE }
    }

    #[must_use]
    pub fn is_neutral(&self) -> bool {
        self.rotate_x_deg == 0.0 && self.rotate_y_deg == 0.0 && self.scale == 1.0
    }

    #[must_use]
    pub fn transform_css(&self) -> String {
        let scale = css_number(self.scale);
        format!(
            "perspective({}px) rotateX({}deg) rotateY({}deg) scale3d({scale}, {scale}, {scale})",
            css_number(PERSPECTIVE_PX),
            css_number(self.rotate_x_deg),
            css_number(self.rotate_y_deg),
        )
    }

    /// Inline `style` attribute for the surface element.
    #[must_use]
    pub fn style_css(&self) -> String {
        format!("transform: {}; transition: {};", self.transform_css(), self.transition.css())
    }
}

impl Default for TiltState {
    fn default() -> Self {
        Self::neutral()
    }
}

/// Per-card-type tilt tuning.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltProfile {
    /// Maximum rotation in either direction, in degrees.
    pub half_range_deg: f64,
    /// Uniform scale applied while engaged.
    pub engaged_scale: f64,
}

impl TiltProfile {
    /// Experience cards.
    pub const PRIMARY: Self = Self { half_range_deg: 10.0, engaged_scale: 1.05 };
    /// Hobby cards tilt and lift a little less.
    pub const HOBBY: Self = Self { half_range_deg: 7.5, engaged_scale: 1.03 };

    /// Transform for a pointer sample over `rect`.
    ///
    /// Returns `TiltState::neutral()` when the surface has no usable size yet.
    #[must_use]
    pub fn on_pointer_move(&self, pointer_x: f64, pointer_y: f64, rect: SurfaceRect) -> TiltState {
        let Some((nx, ny)) = rect.normalize(pointer_x, pointer_y) else {
            return TiltState::neutral();
        };
        TiltState {
            rotate_x_deg: (ny - 0.5) * -2.0 * self.half_range_deg,
            rotate_y_deg: (nx - 0.5) * 2.0 * self.half_range_deg,
            scale: self.engaged_scale,
            transition: Transition::ENGAGED,
        }
    }

    /// Transform after the pointer leaves the surface.
    #[must_use]
    pub fn on_pointer_leave(&self) -> TiltState {
        TiltState::neutral()
    }
}

impl Default for TiltProfile {
    fn default() -> Self {
        Self::PRIMARY
    }
}
