//! DMS to decimal-degree conversion for GPS tags.

/// Convert a degrees/minutes/seconds triplet plus hemisphere reference into
/// signed decimal degrees.
///
/// `dd = degrees + minutes/60 + seconds/3600`; a reference of `'S'` or `'W'`
/// negates the magnitude, `'N'` and `'E'` leave it positive.
pub fn dms_to_decimal(degrees: f64, minutes: f64, seconds: f64, reference: char) -> f64 {
    let dd = degrees + minutes / 60.0 + seconds / 3600.0;
    if reference == 'S' || reference == 'W' {
        -dd
    } else {
        dd
    }
}

/// Convert a raw EXIF DMS rational triplet.
///
/// A missing or wrong-length triplet yields 0.0; callers treat an exact
/// (0, 0) coordinate pair as "no GPS", never as a real equatorial fix.
pub(crate) fn from_dms(dms: &[(u32, u32)], reference: char) -> f64 {
    if dms.len() != 3 {
        return 0.0;
    }
    dms_to_decimal(
        rational_to_f64(dms[0]),
        rational_to_f64(dms[1]),
        rational_to_f64(dms[2]),
        reference,
    )
}

fn rational_to_f64((numerator, denominator): (u32, u32)) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        f64::from(numerator) / f64::from(denominator)
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
