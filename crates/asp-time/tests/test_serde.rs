//! Serialization of time values (requires the `serde` feature).
#![cfg(feature = "serde")]

use asp_time::{SampleRate, Seconds, TimeSpan};

#[test]
fn seconds_and_rates_are_exact_pairs() {
    let t = Seconds::from_millis(1500);
    assert_eq!(serde_json::to_string(&t).unwrap(), "[3,2]");
    assert_eq!(serde_json::from_str::<Seconds>("[3,2]").unwrap(), t);

    let rate = SampleRate::from_ratio(30_000, 1001).unwrap();
    let json = serde_json::to_string(&rate).unwrap();
    assert_eq!(json, "[30000,1001]");
    assert_eq!(serde_json::from_str::<SampleRate>(&json).unwrap(), rate);
}

#[test]
fn invalid_rates_are_rejected() {
    assert!(serde_json::from_str::<SampleRate>("[0,1]").is_err());
    assert!(serde_json::from_str::<SampleRate>("[-5,1]").is_err());
}

#[test]
fn time_spans_round_trip_and_validate() {
    let span = TimeSpan::from_millis(250, 1750).unwrap();
    let json = serde_json::to_string(&span).unwrap();
    assert_eq!(json, r#"{"start":250000000,"stop":1750000000}"#);
    assert_eq!(serde_json::from_str::<TimeSpan>(&json).unwrap(), span);

    let inverted = r#"{"start":2000,"stop":1000}"#;
    assert!(serde_json::from_str::<TimeSpan>(inverted).is_err());
}
