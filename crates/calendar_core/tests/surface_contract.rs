use calendar_core::{
    CalendarService, CalendarView, EditorState, EventValidationError, InMemoryEventRepository,
    SessionConfig, SlotRange,
};

const HOUR_MS: i64 = 60 * 60 * 1000;

fn session_with_event(start: i64, end: i64) -> CalendarService<InMemoryEventRepository> {
    let mut service = CalendarService::in_memory();
    service.on_select_slot(SlotRange::new(start, end));
    service.set_title("Review").unwrap();
    service.save().unwrap();
    service
}

#[test]
fn surface_props_expose_all_views_and_default() {
    let service = session_with_event(0, HOUR_MS);
    let props = service.surface_props();

    assert_eq!(
        props.views,
        vec![CalendarView::Month, CalendarView::Week, CalendarView::Day]
    );
    assert_eq!(props.default_view, CalendarView::Month);
    assert!(props.selectable);
    assert_eq!(props.events, service.events());
}

#[test]
fn default_view_follows_config() {
    let config = SessionConfig::from_json(r#"{"default_view":"day"}"#).unwrap();
    let service = CalendarService::new(InMemoryEventRepository::new(), config);
    assert_eq!(service.surface_props().default_view, CalendarView::Day);
}

#[test]
fn event_style_tracks_committed_color() {
    let mut service = session_with_event(0, HOUR_MS);
    let id = service.events()[0].id;
    service.on_select_event(id);
    service.set_color("#00ff00").unwrap();
    service.save().unwrap();

    let style = service.event_style(&service.events()[0]);
    assert_eq!(style.background_color, "#00ff00");
    assert_eq!(style.padding, "5px");
    assert_eq!(style.cursor, "pointer");
}

#[test]
fn drag_move_commits_new_range() {
    let mut service = session_with_event(0, HOUR_MS);
    let before = service.events()[0].clone();

    let moved = service
        .on_event_moved(before.id, SlotRange::new(2 * HOUR_MS, 3 * HOUR_MS))
        .unwrap();

    assert!(moved);
    let after = &service.events()[0];
    assert_eq!(after.id, before.id);
    assert_eq!(after.title, before.title);
    assert_eq!((after.start, after.end), (2 * HOUR_MS, 3 * HOUR_MS));
}

#[test]
fn drag_move_rejects_reversed_range() {
    let mut service = session_with_event(0, HOUR_MS);
    let before = service.repo().clone();
    let id = service.events()[0].id;

    let err = service
        .on_event_moved(id, SlotRange::new(3 * HOUR_MS, 2 * HOUR_MS))
        .unwrap_err();

    assert_eq!(
        err,
        EventValidationError::InvalidRange {
            start: 3 * HOUR_MS,
            end: 2 * HOUR_MS
        }
    );
    assert_eq!(service.repo(), &before);
}

#[test]
fn drag_move_of_unknown_event_is_noop() {
    let mut service = session_with_event(0, HOUR_MS);
    let before = service.repo().clone();

    let moved = service
        .on_event_moved(uuid::Uuid::new_v4(), SlotRange::new(0, 1))
        .unwrap();

    assert!(!moved);
    assert_eq!(service.repo(), &before);
}

#[test]
fn drag_move_syncs_open_draft() {
    let mut service = session_with_event(0, HOUR_MS);
    let id = service.events()[0].id;
    service.on_select_event(id);

    service
        .on_event_moved(id, SlotRange::new(HOUR_MS, 2 * HOUR_MS))
        .unwrap();

    assert_eq!(service.editor().state(), EditorState::EditingExisting(id));
    let draft = service.editor().draft().unwrap();
    assert_eq!((draft.start, draft.end), (HOUR_MS, 2 * HOUR_MS));

    service.save().unwrap();
    assert_eq!(service.events()[0].start, HOUR_MS);
}

#[test]
fn events_in_range_limit_to_visible_window() {
    let mut service = session_with_event(0, HOUR_MS);
    service.on_select_slot(SlotRange::new(10 * HOUR_MS, 11 * HOUR_MS));
    service.save().unwrap();

    let visible = service.events_in_range(9 * HOUR_MS, 24 * HOUR_MS);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].start, 10 * HOUR_MS);
}
