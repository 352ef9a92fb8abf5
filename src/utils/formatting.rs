//! Tick label formatters.
//!
//! Any `Fn(f64) -> String` can label the ruler; these are the stock ones.

/// Formats a millisecond value as `MM:SS`, adding `.mmm` when there is a
/// sub-second remainder and an `H:` prefix past the first hour.
///
/// # Examples
/// ```
/// use timeruler::utils::format_timestamp;
/// assert_eq!(format_timestamp(0.0), "00:00");
/// assert_eq!(format_timestamp(61_500.0), "01:01.500");
/// assert_eq!(format_timestamp(3_723_000.0), "1:02:03");
/// ```
pub fn format_timestamp(value_ms: f64) -> String {
    let total_ms = if value_ms.is_finite() && value_ms > 0.0 {
        value_ms.round() as u64
    } else {
        0
    };
    let hours = total_ms / 3_600_000;
    let minutes = (total_ms / 60_000) % 60;
    let seconds = (total_ms / 1000) % 60;
    let millis = total_ms % 1000;

    let mut result = if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    };
    if millis > 0 {
        result.push_str(&format!(".{:03}", millis));
    }
    result
}

/// Formats a frame count with thousands separators for readability.
///
/// # Examples
/// ```
/// use timeruler::utils::format_frame_count;
/// assert_eq!(format_frame_count(1000.0), "1,000");
/// assert_eq!(format_frame_count(1234567.0), "1,234,567");
/// ```
pub fn format_frame_count(value: f64) -> String {
    let frames = if value.is_finite() { value.round() as i64 } else { 0 };
    let s = frames.unsigned_abs().to_string();
    let mut result = String::new();
    if frames < 0 {
        result.push('-');
    }
    let chars: Vec<char> = s.chars().collect();
    for (i, ch) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*ch);
    }
    result
}
