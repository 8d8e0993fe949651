//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `calendar_core` linkage and drive one scripted editor session.
//! - Keep output deterministic for quick local sanity checks.

use calendar_core::{CalendarService, FixedAnswer, SlotRange};

// 2024-01-10T09:00:00Z
const DEMO_START_MS: i64 = 1_704_877_200_000;
const DEMO_END_MS: i64 = DEMO_START_MS + 60 * 60 * 1000;

fn main() {
    println!("calendar_core ping={}", calendar_core::ping());
    println!("calendar_core version={}", calendar_core::core_version());

    let mut session = CalendarService::in_memory();
    session.on_select_slot(SlotRange::new(DEMO_START_MS, DEMO_END_MS));
    let outcome = session
        .set_title("Standup")
        .and_then(|()| session.save());
    match outcome {
        Ok(outcome) => println!("save={outcome:?}"),
        Err(err) => {
            eprintln!("save failed: {err}");
            std::process::exit(1);
        }
    }

    for event in session.events() {
        println!(
            "event title={} color={} start={} end={}",
            event.title, event.color, event.start, event.end
        );
    }

    if let Some(id) = session.events().first().map(|event| event.id) {
        session.on_select_event(id);
        match session.delete(&mut FixedAnswer(false)) {
            Ok(outcome) => println!("delete={outcome:?} remaining={}", session.events().len()),
            Err(err) => eprintln!("delete failed: {err}"),
        }
    }
}
