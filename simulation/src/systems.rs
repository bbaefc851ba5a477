//! Pet systems - each one applies a single rule to a pet
//!
//! The hourly tick runs metabolism, random events, the hunger penalty and
//! the vitals check in that order.

pub mod care;
pub mod metabolism;
pub mod random_events;
pub mod vitals;

pub use care::{care_system, ActionOutcome, CareAction};
pub use metabolism::{hunger_penalty_system, metabolism_system};
pub use random_events::{random_event_system, RandomEvent, RANDOM_EVENTS};
pub use vitals::vitals_system;
