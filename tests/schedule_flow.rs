//! End-to-end flows over the public API, backed by the in-memory store.

use chrono::NaiveDate;
use classtab::{
    Confirmation, EntryDraft, FormatTemplate, ListKind, MemoryStore, MismatchDecision,
    OptionsStore, ScheduleController, Weekday,
};

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// 2026-03-01 is a Sunday.
fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
}

fn draft(code: &str, start: &str, end: &str) -> EntryDraft {
    EntryDraft {
        course: format!("Course {code}"),
        course_code: code.to_string(),
        instructor: "Dr. Smith".into(),
        room: "101".into(),
        building: "Science Hall".into(),
        start_time: start.into(),
        end_time: end.into(),
        date: String::new(),
        temp_only: false,
    }
}

#[test]
fn weekly_schedule_lifecycle() {
    init_logs();
    let kv = MemoryStore::new();
    let mut controller = ScheduleController::new(kv.clone());

    // A recurring Sunday class, then a deliberately overlapping one the user
    // confirms.
    let plan = controller
        .propose_save_on(&draft("CS101", "09:00", "10:30"), today())
        .unwrap();
    assert!(!plan.needs_confirmation());
    controller
        .commit_save_on(plan, MismatchDecision::KeepDate, today())
        .unwrap();

    let plan = controller
        .propose_save_on(&draft("MATH201", "10:00", "11:00"), today())
        .unwrap();
    assert_eq!(plan.confirmations, vec![Confirmation::Overlap]);
    controller
        .commit_save_on(plan, MismatchDecision::KeepDate, today())
        .unwrap();

    // A temporary one-off for the same morning is not blocked by the weekly
    // pattern it overrides.
    let mut temp = draft("PHYS110", "09:00", "10:00");
    temp.temp_only = true;
    let plan = controller.propose_save_on(&temp, today()).unwrap();
    assert!(!plan.needs_confirmation());
    let temp_entry = controller
        .commit_save_on(plan, MismatchDecision::KeepDate, today())
        .unwrap();
    assert_eq!(temp_entry.date, Some(today()));

    // Export is time-sorted and template-driven.
    controller
        .save_template(FormatTemplate {
            day_header: "{day}".into(),
            class_line: "{courseCode}".into(),
        })
        .unwrap();
    assert_eq!(
        controller.export_text_on(today()).as_deref(),
        Some("Sunday\nCS101\nPHYS110\nMATH201")
    );

    // Everything above came back from persistence, not from the instance.
    let reloaded = ScheduleController::new(kv.clone());
    assert_eq!(reloaded.schedules().merged(Weekday::Sunday).len(), 3);
    assert_eq!(
        reloaded.export_text_on(today()).as_deref(),
        Some("Sunday\nCS101\nPHYS110\nMATH201")
    );

    // Resetting temporaries leaves the recurring pair in place.
    let mut reloaded = reloaded;
    reloaded.reset_temporary().unwrap();
    assert_eq!(reloaded.schedules().merged(Weekday::Sunday).len(), 2);
    assert!(reloaded.schedules().temps(Weekday::Sunday).is_empty());
}

#[test]
fn options_and_schedule_share_the_backend() {
    init_logs();
    let kv = MemoryStore::new();
    let mut controller = ScheduleController::new(kv.clone());
    let mut options = OptionsStore::load(kv.clone());

    options.add_course("Linear Algebra", "MATH220").unwrap();
    options.add_item(ListKind::Rooms, "B12").unwrap();

    let mut d = draft("MATH220", "13:00", "14:00");
    d.room = "B12".into();
    let plan = controller.propose_save_on(&d, today()).unwrap();
    controller
        .commit_save_on(plan, MismatchDecision::KeepDate, today())
        .unwrap();

    let options = OptionsStore::load(kv);
    assert!(options.course_choices().iter().any(|c| c.code == "MATH220"));
    assert!(options
        .item_choices(ListKind::Rooms)
        .contains(&"B12".to_string()));
}
