/// Default tolerance, in units of the last place, for grid and equality checks.
pub const DEFAULT_ULP_MULTIPLIER: f64 = 10.0;

/// Unit in the last place of `x`: the gap between `|x|` and the next larger
/// representable double.
///
/// `ulp(0.0)` is the smallest subnormal, `ulp(f64::MAX)` is the gap just below
/// it, and non-finite inputs propagate (`NaN` for `NaN`, `+inf` for `±inf`).
pub fn ulp(x: f64) -> f64 {
    let magnitude = x.abs();
    if magnitude.is_nan() {
        return f64::NAN;
    }
    if magnitude.is_infinite() {
        return f64::INFINITY;
    }
    if magnitude == f64::MAX {
        let below = f64::from_bits(magnitude.to_bits() - 1);
        return magnitude - below;
    }
    let above = f64::from_bits(magnitude.to_bits() + 1);
    above - magnitude
}

/// `|x1 - x2| < 10 ulp` of the larger magnitude.
pub fn approx_equals(x1: f64, x2: f64) -> bool {
    approx_equals_ulps(x1, x2, DEFAULT_ULP_MULTIPLIER)
}

/// `|x1 - x2| < ulp_mult * ulp(max(|x1|, |x2|))`.
///
/// Identical values always compare equal, even at zero.
pub fn approx_equals_ulps(x1: f64, x2: f64, ulp_mult: f64) -> bool {
    if x1 == x2 {
        return true;
    }
    let diff = (x1 - x2).abs();
    let tolerance = ulp(x1.abs().max(x2.abs())) * ulp_mult;
    diff < tolerance
}

/// Distance between `expected` and `actual` expressed in ulps of `expected`.
pub fn ulps_from(expected: f64, actual: f64) -> f64 {
    (actual - expected).abs() / ulp(expected)
}
