mod controller;
mod store;

pub use controller::{Confirmation, MismatchDecision, SavePlan, ScheduleController};
pub use store::ScheduleStore;
