//! Formatting helpers for countdown and tray status text.

/// Formats whole seconds as `MM:SS`.
pub fn format_mm_ss(total_secs: u64) -> String {
    let mins = total_secs / 60;
    let secs = total_secs % 60;
    format!("{:02}:{:02}", mins, secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_mm_ss() {
        assert_eq!(format_mm_ss(0), "00:00");
        assert_eq!(format_mm_ss(59), "00:59");
        assert_eq!(format_mm_ss(60), "01:00");
        assert_eq!(format_mm_ss(25 * 60), "25:00");
        assert_eq!(format_mm_ss(119 * 60 + 9), "119:09");
    }
}
