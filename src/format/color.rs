/// Color used when no course key is available.
pub const FALLBACK_COLOR: &str = "hsl(220, 65%, 55%)";

/// Deterministic display color for a course key, as an `hsl()` string.
///
/// djb2-style hash: seed 5381, multiply by 33, xor each UTF-16 unit, 32-bit
/// wrapping; the hue is the hash folded into 0..360 with fixed saturation
/// and lightness. Same key, same color, across sessions.
pub fn color_for_course(key: &str) -> String {
    if key.is_empty() {
        return FALLBACK_COLOR.to_string();
    }
    let mut hash: i32 = 5381;
    for unit in key.encode_utf16() {
        hash = hash.wrapping_mul(33) ^ i32::from(unit);
    }
    let hue = hash.unsigned_abs() % 360;
    format!("hsl({hue}, 62%, 52%)")
}
