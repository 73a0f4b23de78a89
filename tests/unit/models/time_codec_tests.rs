// Table tests for the display time codec

use muscheduler::{ScheduleError, TimeCodec, TimeOfDay};
use test_case::test_case;

#[test_case("12:00 am", 0; "midnight")]
#[test_case("12:59 am", 59; "last minute of midnight hour")]
#[test_case("1:00 am", 60; "one am")]
#[test_case("9:05 am", 545; "morning")]
#[test_case("10:00 am", 600; "calendar start")]
#[test_case("12:00 pm", 720; "noon")]
#[test_case("1:00 pm", 780; "one pm")]
#[test_case("4:00 pm", 960; "four pm")]
#[test_case("11:59 pm", 1439; "last minute of day")]
#[test_case("3:30PM", 930; "no space uppercase")]
#[test_case("07:15 am", 435; "leading zero hour")]
fn test_parse_valid(display: &str, minutes: u16) {
    assert_eq!(TimeCodec::parse(display).unwrap().minutes(), minutes);
}

#[test_case("25:00 am"; "hour too large")]
#[test_case("13:00 pm"; "24 hour clock with suffix")]
#[test_case("0:30 am"; "zero hour")]
#[test_case("1:60 pm"; "minute too large")]
#[test_case("noon"; "word")]
#[test_case("1:00"; "missing suffix")]
#[test_case("1:00 xm"; "bad suffix")]
#[test_case("100:00 am"; "three hour digits")]
#[test_case("1:000 am"; "three minute digits")]
#[test_case(":30 am"; "missing hour")]
#[test_case("1: am"; "missing minute")]
#[test_case("1:00\t\tam"; "two whitespace characters")]
#[test_case(" 1:00 am"; "leading whitespace")]
#[test_case(""; "empty")]
fn test_parse_invalid(display: &str) {
    assert_eq!(
        TimeCodec::parse(display),
        Err(ScheduleError::InvalidFormat(display.to_string()))
    );
}

#[test_case(0, "12:00 am")]
#[test_case(5, "12:05 am")]
#[test_case(720, "12:00 pm")]
#[test_case(781, "1:01 pm")]
#[test_case(1439, "11:59 pm")]
fn test_format(minutes: u16, expected: &str) {
    assert_eq!(TimeCodec::format(TimeOfDay::new(minutes).unwrap()), expected);
}

#[test]
fn test_display_matches_format() {
    let time = TimeOfDay::new(990).unwrap();
    assert_eq!(time.to_string(), "4:30 pm");
    assert_eq!(format!("[{:>8}]", time), "[ 4:30 pm]");
    assert_eq!("4:30 pm".parse::<TimeOfDay>().unwrap(), time);
}
