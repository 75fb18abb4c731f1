/// Format seconds as `HH:MM:SS.mmm`, rounding half up to the millisecond.
pub fn format_hms(seconds: f64) -> String {
    let millis = (seconds * 1000.0 + 0.5) as u64;
    format!(
        "{:02}:{:02}:{:02}.{:03}",
        millis / 3_600_000,
        (millis / 60_000) % 60,
        (millis / 1000) % 60,
        millis % 1000
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest(
        seconds, expect,
        case(0.0, "00:00:00.000"),
        case(0.0004, "00:00:00.000"),
        case(0.0005, "00:00:00.001"),
        case(1.0, "00:00:01.000"),
        case(59.999, "00:00:59.999"),
        case(60.0, "00:01:00.000"),
        case(61.5, "00:01:01.500"),
        case(3600.0, "01:00:00.000"),
        case(3661.25, "01:01:01.250"),
        case(360_000.0, "100:00:00.000"),
    )]
    fn formats_and_rounds(seconds: f64, expect: &str) {
        assert_eq!(format_hms(seconds), expect);
    }
}
