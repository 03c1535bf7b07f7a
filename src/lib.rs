//! Synthetic sleep health and medical appointments datasets.
//!
//! Two tables are generated in sequence: a sleep health table keyed
//! by person, and a medical appointments table referencing it, with
//! plausible correlations between them (people with a sleep disorder
//! or high stress have more appointments, and their diagnoses follow
//! their disorder). All randomness flows through explicitly seeded
//! generators so that a fixed global seed reproduces the files
//! byte for byte.

pub use appointments::{make_appointments, AppointmentRecord};
pub use seeded_rng::make_rng;
pub use sleep_health::{make_sleep_health, SleepDisorder, SleepHealthRecord};
pub use table_output::write_table;

pub mod appointments;
pub mod report;
pub mod sampling;
pub mod seeded_rng;
pub mod sleep_health;
pub mod table_output;
