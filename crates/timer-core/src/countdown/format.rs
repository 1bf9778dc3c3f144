/// Renders whole seconds as `MM:SS`. An unset value renders as `00:00`.
///
/// Minutes are padded but never truncated, so durations of 100 minutes or
/// more widen the field.
pub fn format_time(seconds: Option<i64>) -> String {
    match seconds {
        None => "00:00".to_string(),
        Some(seconds) => format!("{:02}:{:02}", seconds / 60, seconds % 60),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(None), "00:00");
        assert_eq!(format_time(Some(0)), "00:00");
        assert_eq!(format_time(Some(9)), "00:09");
        assert_eq!(format_time(Some(61)), "01:01");
        assert_eq!(format_time(Some(599)), "09:59");
        assert_eq!(format_time(Some(6000)), "100:00");
    }
}
