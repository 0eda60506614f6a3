//! Scroll-linked scale and offset for the hero image.
//!
//! Both outputs are driven by the same clamped scroll input, so they reach
//! their maxima together at `MAX_SCROLL_PX`.

#[cfg(test)]
#[path = "parallax_test.rs"]
mod parallax_test;

use super::css::css_number;

pub const MAX_SCROLL_PX: f64 = 400.0;
pub const MAX_SCALE_UPLIFT: f64 = 0.15;
pub const OFFSET_DIVISOR: f64 = 10.0;
pub const MAX_OFFSET_PX: f64 = 40.0;
/// Scroll distance after which the navigation bar gains its solid background.
pub const NAV_SCROLLED_THRESHOLD_PX: f64 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxState {
    pub scale: f64,
    pub offset_px: f64,
}

impl ParallaxState {
    #[must_use]
    pub const fn rest() -> Self {
        Self { scale: 1.0, offset_px: 0.0 }
    }

    #[must_use]
    pub fn transform_css(&self) -> String {
        format!("translateY({}px) scale({})", css_number(self.offset_px), css_number(self.scale))
    }
}

impl Default for ParallaxState {
    fn default() -> Self {
        Self::rest()
    }
}

/// Scroll position limited to `[0, MAX_SCROLL_PX]`. Overscroll above the
/// page and NaN count as the top; `+inf` saturates like any deep scroll.
#[must_use]
pub fn clamp_scroll(scroll_y: f64) -> f64 {
    if scroll_y.is_nan() {
        0.0
    } else {
        scroll_y.clamp(0.0, MAX_SCROLL_PX)
    }
}

#[must_use]
pub fn on_scroll(scroll_y: f64) -> ParallaxState {
    let clamped = clamp_scroll(scroll_y);
    ParallaxState {
        scale: 1.0 + (clamped / MAX_SCROLL_PX) * MAX_SCALE_UPLIFT,
        offset_px: (clamped / OFFSET_DIVISOR).min(MAX_OFFSET_PX),
    }
}

#[must_use]
pub fn nav_is_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAV_SCROLLED_THRESHOLD_PX
}
