//! Fixed-decimal float formatting for canvas readouts.
//!
//! Rust's core float-to-decimal formatting has had wasm-facing panics in some
//! toolchain/browser combinations, so readout text avoids `format!` on floats:
//! finite values are scaled + rounded into an `i64`, then formatted as
//! integers. `NaN`/`±Inf` are handled explicitly.

pub fn fmt_fixed(v: f64, decimals: usize) -> String {
    if !v.is_finite() {
        return if v.is_nan() {
            "NaN".to_string()
        } else if v.is_sign_positive() {
            "Inf".to_string()
        } else {
            "-Inf".to_string()
        };
    }

    let decimals = decimals.min(9);
    let scale = 10_i64.pow(decimals as u32);
    let scaled = (v * scale as f64).round();

    if !scaled.is_finite() || scaled.abs() > i64::MAX as f64 {
        return if v.is_sign_negative() {
            "-Inf".to_string()
        } else {
            "Inf".to_string()
        };
    }

    let scaled = scaled as i64;
    // `-0.04` rounds to a zero that must still print with its sign.
    let negative = scaled < 0 || (scaled == 0 && v.is_sign_negative());
    let abs = scaled.abs();
    let int_part = abs / scale;
    let frac_part = abs % scale;

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&int_part.to_string());

    if decimals > 0 {
        out.push('.');
        let frac = frac_part.to_string();
        for _ in 0..decimals - frac.len() {
            out.push('0');
        }
        out.push_str(&frac);
    }

    out
}

/// Shortest-form rendering for user-entered parameters: integers print
/// without a decimal point (`2.0` → `"2"`), everything else keeps up to six
/// decimals with trailing zeros trimmed.
pub fn fmt_compact(v: f64) -> String {
    if !v.is_finite() {
        return fmt_fixed(v, 0);
    }
    if v.fract() == 0.0 && v.abs() < 1e15 {
        return fmt_fixed(v, 0);
    }

    let mut s = fmt_fixed(v, 6);
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_drops_integer_decimals() {
        assert_eq!(fmt_compact(2.0), "2");
        assert_eq!(fmt_compact(150.0), "150");
        assert_eq!(fmt_compact(2.5), "2.5");
        assert_eq!(fmt_compact(-8.0), "-8");
        assert_eq!(fmt_compact(0.3), "0.3");
    }

    #[test]
    fn matches_to_fixed_semantics() {
        assert_eq!(fmt_fixed(1.0, 1), "1.0");
        assert_eq!(fmt_fixed(9.85, 1), "9.9");
        assert_eq!(fmt_fixed(-3.25, 2), "-3.25");
        assert_eq!(fmt_fixed(0.04, 1), "0.0");
        assert_eq!(fmt_fixed(150.0, 0), "150");
        assert_eq!(fmt_fixed(-0.04, 1), "-0.0");
    }

    #[test]
    fn non_finite_values_do_not_panic() {
        assert_eq!(fmt_fixed(f64::NAN, 1), "NaN");
        assert_eq!(fmt_fixed(f64::INFINITY, 1), "Inf");
        assert_eq!(fmt_fixed(f64::NEG_INFINITY, 1), "-Inf");
    }
}
