//! src/render/metric.rs
//!
//! Compact metric-prefix labels for axis ticks (1_500_000 -> "2M").
//!
//! Bands are picked on the absolute value; the sign is emitted separately so
//! "-2500" lands in the K band as "-3K". Values are rounded to the nearest
//! integer (half away from zero) before the suffix is attached. A value that
//! rounds up to 1000 moves to the next band ("1M", not "1000K").

/// Suffix ladder from smallest to largest, with each band's power of ten.
const BANDS: [(i32, &str); 7] = [
    (-9, "n"),
    (-6, "u"),
    (-3, "m"),
    (0, ""),
    (3, "K"),
    (6, "M"),
    (9, "G"),
];

/// Index into `BANDS` of the band `abs` starts in, before rounding.
fn initial_band(abs: f64) -> usize {
    match abs {
        a if a >= 1e9 => 6,
        a if a >= 1e6 => 5,
        a if a >= 1e3 => 4,
        a if a <= 1e-6 => 0,
        a if a <= 1e-3 => 1,
        a if a <= 0.1 => 2,
        _ => 3,
    }
}

/// `abs` expressed in units of `10^exp`.
fn scaled(abs: f64, exp: i32) -> f64 {
    if exp >= 0 {
        abs / 10f64.powi(exp)
    } else {
        abs * 10f64.powi(-exp)
    }
}

/// Format `n` as a short metric label, at most 5 characters for magnitudes under 1e11.
pub fn metricify(n: f64) -> String {
    if !n.is_finite() {
        return n.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    let sign = if n < 0.0 { "-" } else { "" };
    let abs = n.abs();

    let mut band = initial_band(abs);
    let mut value = scaled(abs, BANDS[band].0).round();
    while value >= 1000.0 && band + 1 < BANDS.len() {
        band += 1;
        value = scaled(abs, BANDS[band].0).round();
    }
    format!("{}{:.0}{}", sign, value, BANDS[band].1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn large_bands() {
        assert_eq!(metricify(1_500_000.0), "2M");
        assert_eq!(metricify(1_000.0), "1K");
        assert_eq!(metricify(999_499.0), "999K");
        assert_eq!(metricify(2_400_000_000.0), "2G");
        assert_eq!(metricify(12_345.0), "12K");
    }

    #[test]
    fn small_bands() {
        assert_eq!(metricify(0.0004), "400u");
        assert_eq!(metricify(0.001), "1m");
        assert_eq!(metricify(0.05), "50m");
        assert_eq!(metricify(0.1), "100m");
        assert_eq!(metricify(0.000_000_5), "500n");
    }

    #[test]
    fn plain_band_rounds() {
        assert_eq!(metricify(0.5), "1");
        assert_eq!(metricify(0.4), "0");
        assert_eq!(metricify(42.4), "42");
        assert_eq!(metricify(999.0), "999");
    }

    #[test]
    fn rounding_up_to_a_thousand_moves_to_the_next_band() {
        assert_eq!(metricify(-999_600.0), "-1M");
        assert_eq!(metricify(999_500.0), "1M");
        assert_eq!(metricify(999.6), "1K");
        assert_eq!(metricify(999_999_999.0), "1G");
        assert_eq!(metricify(0.000_999_9), "1m");
        assert_eq!(metricify(1e-6), "1u");
        assert_eq!(metricify(-0.000_999_7), "-1m");
    }

    #[test]
    fn labels_fit_a_five_cell_slot() {
        let mut v = 1e-12;
        while v < 1e11 {
            for n in [v, -v, v * 0.9996, -v * 0.9996, v * 0.9995] {
                let label = metricify(n);
                assert!(label.chars().count() <= 5, "{} -> {:?}", n, label);
            }
            v *= 1.37;
        }
    }

    #[test]
    fn zero_is_plain() {
        assert_eq!(metricify(0.0), "0");
        assert_eq!(metricify(-0.0), "0");
    }

    #[test]
    fn negatives_keep_sign_and_band() {
        assert_eq!(metricify(-2500.0), "-3K");
        assert_eq!(metricify(-10.0), "-10");
        assert_eq!(metricify(-0.02), "-20m");
        assert_eq!(metricify(-3_000_000.0), "-3M");
    }

    #[test]
    fn non_finite_passthrough() {
        assert_eq!(metricify(f64::INFINITY), "inf");
        assert_eq!(metricify(f64::NEG_INFINITY), "-inf");
        assert_eq!(metricify(f64::NAN), "NaN");
    }
}
