/// Supported size units, in ascending order of magnitude.
const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Renders a byte count as a human-readable value with a unit suffix.
///
/// Divides by 1024 until the value drops below one unit step or the largest
/// defined unit is reached; values past the TB range stay in TB rather than
/// moving to an undefined unit. Always prints two decimal digits.
///
/// ```
/// use mibib_rs::human_size;
///
/// assert_eq!(human_size(0), "0.00 B");
/// assert_eq!(human_size(128 * 1024 * 1024), "128.00 MB");
/// ```
pub fn human_size(bytes: u64) -> String {
    let mut unit = 0;
    let mut value = bytes as f64;
    let mut whole = bytes;
    while whole >= 1024 && unit < UNITS.len() - 1 {
        value = whole as f64 / 1024.0;
        whole /= 1024;
        unit += 1;
    }
    format!("{:.2} {}", value, UNITS[unit])
}
