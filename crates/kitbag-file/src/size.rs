use kitbag_num::round_to;

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Human-readable size in binary units, rounded to `precision` decimals
/// with trailing zeros dropped.
///
/// ```
/// use kitbag_file::format_size;
///
/// assert_eq!(format_size(512, 2), "512 B");
/// assert_eq!(format_size(1536, 2), "1.5 KB");
/// assert_eq!(format_size(5 * 1024 * 1024, 2), "5 MB");
/// ```
pub fn format_size(bytes: u64, precision: u32) -> String {
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{} {}", round_to(value, precision), UNITS[unit])
}
