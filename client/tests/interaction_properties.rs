//! Property tests for the tilt and parallax engines.

use proptest::prelude::*;

use folio_client::util::parallax::{MAX_OFFSET_PX, MAX_SCALE_UPLIFT, on_scroll};
use folio_client::util::tilt::{SurfaceRect, TiltProfile, TiltState};

fn profiles() -> impl Strategy<Value = TiltProfile> {
    prop_oneof![Just(TiltProfile::PRIMARY), Just(TiltProfile::HOBBY)]
}

/// Scroll samples, including the infinities a browser can hand back.
fn scroll_samples() -> impl Strategy<Value = f64> {
    prop_oneof![
        8 => -1000.0f64..5000.0,
        1 => Just(f64::INFINITY),
        1 => Just(f64::NEG_INFINITY),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: rotation stays within ±R for any pointer over any laid-out surface.
    #[test]
    fn property_rotation_is_bounded(
        profile in profiles(),
        left in -2000.0f64..2000.0,
        top in -2000.0f64..2000.0,
        width in 1.0f64..1500.0,
        height in 1.0f64..1500.0,
        nx in 0.0f64..=1.0,
        ny in 0.0f64..=1.0,
    ) {
        let rect = SurfaceRect::new(left, top, width, height);
        let state = profile.on_pointer_move(left + nx * width, top + ny * height, rect);
        let r = profile.half_range_deg + 1e-9;
        prop_assert!(state.rotate_x_deg.abs() <= r, "rotate_x {} exceeds {}", state.rotate_x_deg, r);
        prop_assert!(state.rotate_y_deg.abs() <= r, "rotate_y {} exceeds {}", state.rotate_y_deg, r);
        prop_assert_eq!(state.scale, profile.engaged_scale);
    }

    /// PROPERTY: pointers far outside the surface still respect the bound.
    #[test]
    fn property_out_of_bounds_pointer_is_clamped(
        profile in profiles(),
        pointer_x in -1.0e6f64..1.0e6,
        pointer_y in -1.0e6f64..1.0e6,
    ) {
        let rect = SurfaceRect::new(10.0, 20.0, 300.0, 180.0);
        let state = profile.on_pointer_move(pointer_x, pointer_y, rect);
        prop_assert!(state.rotate_x_deg.abs() <= profile.half_range_deg);
        prop_assert!(state.rotate_y_deg.abs() <= profile.half_range_deg);
    }

    /// PROPERTY: a surface without size never produces NaN or infinite output.
    #[test]
    fn property_unlaid_surface_is_neutral(
        profile in profiles(),
        pointer_x in any::<f64>(),
        pointer_y in any::<f64>(),
        width in prop_oneof![Just(0.0f64), Just(-1.0), Just(f64::NAN)],
        height in 0.0f64..500.0,
    ) {
        let state = profile.on_pointer_move(pointer_x, pointer_y, SurfaceRect::new(0.0, 0.0, width, height));
        prop_assert_eq!(state, TiltState::neutral());
    }

    /// PROPERTY: leaving resets to rest regardless of the last sample.
    #[test]
    fn property_leave_is_neutral(
        profile in profiles(),
        nx in 0.0f64..=1.0,
        ny in 0.0f64..=1.0,
    ) {
        let rect = SurfaceRect::new(0.0, 0.0, 400.0, 300.0);
        let engaged = profile.on_pointer_move(nx * 400.0, ny * 300.0, rect);
        prop_assert_eq!(engaged.scale, profile.engaged_scale);
        let rest = profile.on_pointer_leave();
        prop_assert!(rest.is_neutral());
        prop_assert_eq!(rest, profile.on_pointer_leave());
    }

    /// PROPERTY: parallax outputs are non-decreasing in scroll and bounded.
    #[test]
    fn property_parallax_is_monotonic_and_bounded(
        a in scroll_samples(),
        b in scroll_samples(),
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let low = on_scroll(lo);
        let high = on_scroll(hi);
        prop_assert!(low.scale <= high.scale);
        prop_assert!(low.offset_px <= high.offset_px);
        for state in [low, high] {
            prop_assert!((1.0..=1.0 + MAX_SCALE_UPLIFT).contains(&state.scale));
            prop_assert!((0.0..=MAX_OFFSET_PX).contains(&state.offset_px));
        }
    }
}

#[test]
fn only_the_exact_center_is_rotation_free() {
    let rect = SurfaceRect::new(0.0, 0.0, 100.0, 100.0);
    let center = TiltProfile::PRIMARY.on_pointer_move(50.0, 50.0, rect);
    assert_eq!((center.rotate_x_deg, center.rotate_y_deg), (0.0, 0.0));

    let off_center = TiltProfile::PRIMARY.on_pointer_move(50.0, 51.0, rect);
    assert!(off_center.rotate_x_deg != 0.0);
    assert_eq!(off_center.rotate_y_deg, 0.0);
}
