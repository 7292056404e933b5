//! Readout formatting

/// Format seconds as `MM:SS`, or `H:MM:SS` from one hour up
pub fn format_elapsed(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let seconds = seconds % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_an_hour() {
        assert_eq!(format_elapsed(0), "00:00");
        assert_eq!(format_elapsed(20), "00:20");
        assert_eq!(format_elapsed(599), "09:59");
    }

    #[test]
    fn from_an_hour_up() {
        assert_eq!(format_elapsed(3600), "1:00:00");
        assert_eq!(format_elapsed(3725), "1:02:05");
    }
}
