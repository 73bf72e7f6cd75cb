// Copyright 2025 the Infoviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value-range properties of the public `render` entry point.

use infoviz_charts::{ChartKind, MarkerStyle, RadialGaugeSpec, ThemeColor, TrendLineSpec, render};
use infoviz_core::MarkPayload;
use proptest::prelude::*;

fn any_kind() -> impl Strategy<Value = ChartKind> {
    prop::sample::select(ChartKind::ALL.to_vec())
}

fn any_marker() -> impl Strategy<Value = MarkerStyle> {
    prop::sample::select(MarkerStyle::ALL.to_vec())
}

fn any_theme_color() -> impl Strategy<Value = ThemeColor> {
    prop::sample::select(ThemeColor::ALL.to_vec())
}

// Property: an isotype grid draws exactly `min(value, 100)` markers in bands of ten
proptest! {
    #[test]
    fn prop_isotype_marker_count(value in 0_i32..400, style in any_marker()) {
        let v = render(ChartKind::Isotype, value, 0, ThemeColor::Red.color(), style);
        let expected = usize::try_from(value.min(100)).unwrap();
        prop_assert_eq!(v.marks().count(), expected);

        let sizes: Vec<usize> = v.groups().map(|g| g.marks().count()).collect();
        prop_assert_eq!(sizes.len(), expected.div_ceil(10));
        prop_assert!(sizes.iter().all(|&s| (1..=10).contains(&s)));
        if let Some((_, full)) = sizes.split_last() {
            prop_assert!(full.iter().all(|&s| s == 10));
        }
    }
}

// Property: the gauge dash offset is `C - (v / 100) * C` for in-range values
proptest! {
    #[test]
    fn prop_gauge_offset(value in 0_i32..=100) {
        let spec = RadialGaugeSpec::new(0, value, ThemeColor::Navy.color());
        let c = spec.circumference();
        let expected = c - f64::from(value) / 100.0 * c;
        prop_assert!((spec.dash_offset() - expected).abs() < 1e-9);
        prop_assert!(spec.dash_offset() >= 0.0 && spec.dash_offset() <= c);
    }
}

// Property: the trend always starts at 20, 45 and ends at the (clamped) value
proptest! {
    #[test]
    fn prop_trend_endpoints(value in any::<i32>()) {
        let samples = TrendLineSpec::new(0, value, ThemeColor::Gold.color()).samples();
        prop_assert_eq!(samples[0], 20);
        prop_assert_eq!(samples[1], 45);
        prop_assert_eq!(samples[4], value.clamp(0, 100));
    }
}

// Property: any input renders without panicking and stays finite
proptest! {
    #[test]
    fn prop_render_total(
        kind in any_kind(),
        value in any::<i32>(),
        secondary in any::<i32>(),
        color in any_theme_color(),
        style in any_marker(),
    ) {
        let v = render(kind, value, secondary, color.color(), style);
        prop_assert!(v.view.width().is_finite() && v.view.height().is_finite());
        for m in v.marks() {
            if let MarkPayload::Rect(r) = &m.payload {
                prop_assert!(r.rect.x1 >= r.rect.x0);
                prop_assert!(r.rect.x1 <= v.view.x1 + 1e-9);
            }
        }
    }
}

// Property: rendering the same parameters twice is identical once timing is dropped
proptest! {
    #[test]
    fn prop_render_deterministic(
        kind in any_kind(),
        value in -20_i32..140,
        secondary in -20_i32..140,
        style in any_marker(),
    ) {
        let color = ThemeColor::Emerald.color();
        let a = render(kind, value, secondary, color, style).without_timing();
        let b = render(kind, value, secondary, color, style).without_timing();
        prop_assert_eq!(a, b);
    }
}
