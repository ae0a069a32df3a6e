use chrono::{FixedOffset, Offset, TimeZone, Utc};

pub const INVALID_DATE: &str = "Invalid Date";

/// Format a submission's creation time the way `Date.prototype.toLocaleString` does for `en-US`, for example `11/14/2023, 10:13:20 PM`.
pub fn format_timestamp(seconds: Option<i64>, offset: FixedOffset) -> String {
	seconds
		.and_then(|seconds| seconds.checked_mul(1000))
		.and_then(|millis| Utc.timestamp_millis_opt(millis).single())
		.map(|date| {
			date.with_timezone(&offset)
				.format("%-m/%-d/%Y, %-I:%M:%S %p")
				.to_string()
		})
		.unwrap_or_else(|| INVALID_DATE.to_owned())
}

/// Browsers report the timezone as minutes *behind* UTC, so UTC+6 is `-360`.
pub fn offset_from_minutes_west(minutes_west: i32) -> FixedOffset {
	minutes_west
		.checked_mul(60)
		.and_then(FixedOffset::west_opt)
		.unwrap_or_else(|| Utc.fix())
}

#[test]
fn test_format_timestamp() {
	let utc = Utc.fix();
	assert_eq!(format_timestamp(Some(1700000000), utc), "11/14/2023, 10:13:20 PM");
	assert_eq!(format_timestamp(Some(0), utc), "1/1/1970, 12:00:00 AM");
	let dhaka = offset_from_minutes_west(-360);
	assert_eq!(format_timestamp(Some(1700000000), dhaka), "11/15/2023, 4:13:20 AM");
	assert_eq!(format_timestamp(None, utc), "Invalid Date");
	assert_eq!(format_timestamp(Some(i64::MAX), utc), "Invalid Date");
}
