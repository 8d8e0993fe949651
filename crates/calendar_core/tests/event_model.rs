use calendar_core::{CalendarEvent, EventDraft, EventValidationError};
use uuid::Uuid;

#[test]
fn new_event_gets_non_nil_id() {
    let event = CalendarEvent::new("Standup", "#4a90e2", 100, 200).unwrap();

    assert!(!event.id.is_nil());
    assert_eq!(event.title, "Standup");
    assert_eq!(event.duration_ms(), 100);
}

#[test]
fn duration_spans_full_timestamp_range() {
    let event = CalendarEvent::new("Forever", "#4a90e2", i64::MIN, i64::MAX).unwrap();
    assert_eq!(event.duration_ms(), u64::MAX);

    let instant = CalendarEvent::new("Instant", "#4a90e2", -5, -5).unwrap();
    assert_eq!(instant.duration_ms(), 0);
}

#[test]
fn rejects_reversed_window() {
    let err = CalendarEvent::new("Review", "#4a90e2", 200, 100).unwrap_err();
    assert_eq!(err, EventValidationError::InvalidRange { start: 200, end: 100 });
    assert_eq!(err.to_string(), "event end (100) must be >= event start (200)");
}

#[test]
fn zero_length_event_is_valid() {
    assert!(CalendarEvent::new("Ping", "#4a90e2", 100, 100).is_ok());
}

#[test]
fn rejects_long_title_and_bad_color() {
    let long = "x".repeat(31);
    let err = CalendarEvent::new(long, "#4a90e2", 0, 1).unwrap_err();
    assert_eq!(err, EventValidationError::TitleTooLong { max: 30, actual: 31 });

    let err = CalendarEvent::new("ok", "red", 0, 1).unwrap_err();
    assert_eq!(err, EventValidationError::InvalidColor("red".to_string()));
}

#[test]
fn with_id_rejects_nil_uuid() {
    let err = CalendarEvent::with_id(Uuid::nil(), "x", "#4a90e2", 0, 1).unwrap_err();
    assert_eq!(err, EventValidationError::NilId);
}

#[test]
fn serialization_uses_expected_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let event = CalendarEvent::with_id(
        id,
        "Standup",
        "#4a90e2",
        1_704_877_200_000,
        1_704_880_800_000,
    )
    .unwrap();

    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["title"], "Standup");
    assert_eq!(json["color"], "#4a90e2");
    assert_eq!(json["start"], 1_704_877_200_000_i64);
    assert_eq!(json["end"], 1_704_880_800_000_i64);

    let decoded: CalendarEvent = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, event);
}

#[test]
fn overlap_uses_half_open_window() {
    let event = CalendarEvent::new("Block", "#4a90e2", 100, 200).unwrap();
    assert!(event.overlaps(150, 300));
    assert!(event.overlaps(0, 101));
    assert!(!event.overlaps(200, 300));
    assert!(!event.overlaps(0, 100));

    let instant = CalendarEvent::new("Instant", "#4a90e2", 100, 100).unwrap();
    assert!(instant.overlaps(100, 101));
    assert!(!instant.overlaps(0, 100));
}

#[test]
fn draft_from_event_is_detached_copy() {
    let event = CalendarEvent::new("Standup", "#4a90e2", 0, 10).unwrap();
    let mut draft = EventDraft::from_event(&event);
    draft.set_color("#ff0000");

    assert_eq!(event.color, "#4a90e2");
    assert_eq!(draft.color, "#ff0000");
    assert_eq!((draft.start, draft.end), (event.start, event.end));
}
