use calendar_core::{CalendarEvent, EventRepository, InMemoryEventRepository};
use uuid::Uuid;

fn event(title: &str, start: i64, end: i64) -> CalendarEvent {
    CalendarEvent::new(title, "#4a90e2", start, end).unwrap()
}

#[test]
fn insert_appends_exactly_once() {
    let mut repo = InMemoryEventRepository::new();
    let first = event("first", 0, 10);
    let second = event("second", 5, 15);
    repo.insert(first.clone());
    repo.insert(second.clone());

    let listed = repo.list();
    assert_eq!(listed, vec![first, second.clone()]);
    assert_eq!(listed.iter().filter(|e| e.id == second.id).count(), 1);
}

#[test]
fn replace_keeps_position_and_length() {
    let mut repo = InMemoryEventRepository::new();
    let a = event("a", 0, 1);
    let b = event("b", 1, 2);
    let c = event("c", 2, 3);
    for e in [&a, &b, &c] {
        repo.insert(e.clone());
    }

    let mut updated = b.clone();
    updated.title = "b2".to_string();
    assert!(repo.replace(b.id, updated.clone()));

    let listed = repo.list();
    assert_eq!(listed.len(), 3);
    assert_eq!(listed[1], updated);
    assert!(!listed.contains(&b));
}

#[test]
fn replace_unknown_id_is_silent_noop() {
    let mut repo = InMemoryEventRepository::new();
    repo.insert(event("a", 0, 1));
    let before = repo.clone();

    assert!(!repo.replace(Uuid::new_v4(), event("ghost", 0, 1)));
    assert_eq!(repo, before);
}

#[test]
fn remove_drops_one_and_ignores_unknown() {
    let mut repo = InMemoryEventRepository::new();
    let a = event("a", 0, 1);
    let b = event("b", 1, 2);
    repo.insert(a.clone());
    repo.insert(b.clone());

    assert!(repo.remove(a.id));
    assert_eq!(repo.list(), vec![b.clone()]);

    assert!(!repo.remove(a.id));
    assert_eq!(repo.len(), 1);

    assert!(repo.remove(b.id));
    assert!(repo.is_empty());
}

#[test]
fn list_in_range_filters_by_overlap() {
    let mut repo = InMemoryEventRepository::new();
    let morning = event("morning", 100, 200);
    let evening = event("evening", 500, 600);
    repo.insert(morning.clone());
    repo.insert(evening);

    assert_eq!(repo.list_in_range(150, 400), vec![morning]);
    assert!(repo.list_in_range(200, 500).is_empty());
}
