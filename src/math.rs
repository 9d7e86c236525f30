//! Degree-based math helpers for the almanac algorithm.

#[cfg(not(feature = "std"))]
use libm;

/// Normalizes a value to the range [0, `period`).
pub fn normalize(value: f64, period: f64) -> f64 {
    let normalized = value % period;
    if normalized < 0.0 {
        normalized + period
    } else {
        normalized
    }
}

/// Normalizes an angle in degrees to the range [0, 360).
pub fn normalize_degrees_0_to_360(degrees: f64) -> f64 {
    normalize(degrees, 360.0)
}

/// Normalizes hours to the range [0, 24).
pub fn normalize_hours_0_to_24(hours: f64) -> f64 {
    normalize(hours, 24.0)
}

/// Clamps an inverse-trig argument into [-1, 1]. NaN is passed through.
#[inline]
pub fn clamp_unit(x: f64) -> f64 {
    x.clamp(-1.0, 1.0)
}

/// Sine of an angle in degrees.
#[inline]
pub fn sin_deg(degrees: f64) -> f64 {
    sin(degrees.to_radians())
}

/// Cosine of an angle in degrees.
#[inline]
pub fn cos_deg(degrees: f64) -> f64 {
    cos(degrees.to_radians())
}

/// Tangent of an angle in degrees.
#[inline]
pub fn tan_deg(degrees: f64) -> f64 {
    tan(degrees.to_radians())
}

/// Arcsine in degrees.
#[inline]
pub fn asin_deg(x: f64) -> f64 {
    asin(x).to_degrees()
}

/// Arccosine in degrees.
#[inline]
pub fn acos_deg(x: f64) -> f64 {
    acos(x).to_degrees()
}

/// Arctangent in degrees.
#[inline]
pub fn atan_deg(x: f64) -> f64 {
    atan(x).to_degrees()
}

#[inline]
fn sin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.sin();

    #[cfg(not(feature = "std"))]
    return libm::sin(x);
}

#[inline]
fn cos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.cos();

    #[cfg(not(feature = "std"))]
    return libm::cos(x);
}

#[inline]
fn tan(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.tan();

    #[cfg(not(feature = "std"))]
    return libm::tan(x);
}

#[inline]
fn asin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.asin();

    #[cfg(not(feature = "std"))]
    return libm::asin(x);
}

#[inline]
fn acos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.acos();

    #[cfg(not(feature = "std"))]
    return libm::acos(x);
}

#[inline]
fn atan(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.atan();

    #[cfg(not(feature = "std"))]
    return libm::atan(x);
}

/// Computes floor(x) using the appropriate function for the compilation target.
#[inline]
pub fn floor(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.floor();

    #[cfg(not(feature = "std"))]
    return libm::floor(x);
}
