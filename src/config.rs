//! Built-in option lists seeding the class-form dropdowns.

use crate::models::ListKind;

/// Built-in courses as (name, code) pairs.
pub const DEFAULT_COURSES: [(&str, &str); 2] = [
    (
        "Ordinary Differential Equations with Modeling",
        "AMAT2101",
    ),
    ("Tensor Analysis", "AMAT2104"),
];

pub const DEFAULT_INSTRUCTORS: [&str; 2] = ["Prof. Md Abdul Haque sir", "Prof. Abu Bakr PK sir"];

pub const DEFAULT_ROOMS: [&str; 2] = ["417", "103"];

pub const DEFAULT_BUILDINGS: [&str; 2] = ["1st Science", "4th Science"];

pub fn default_items(kind: ListKind) -> &'static [&'static str] {
    match kind {
        ListKind::Instructors => &DEFAULT_INSTRUCTORS,
        ListKind::Rooms => &DEFAULT_ROOMS,
        ListKind::Buildings => &DEFAULT_BUILDINGS,
    }
}
