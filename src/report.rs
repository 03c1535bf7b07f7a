//! Summary statistics printed by the driver after both tables are
//! written. Kept as pure functions over the in-memory tables so the
//! numbers can be tested without capturing stdout.

use chrono::NaiveDate;
use std::collections::{BTreeMap, HashSet};

use crate::appointments::AppointmentRecord;
use crate::sleep_health::SleepHealthRecord;

#[derive(Debug, PartialEq)]
pub struct SleepHealthSummary {
    pub total_people: usize,
    /// Count per disorder label, ordered by label for stable output
    pub disorder_counts: BTreeMap<&'static str, usize>,
    pub mean_quality_of_sleep: f64,
    pub mean_stress_level: f64,
}

#[derive(Debug, PartialEq)]
pub struct AppointmentSummary {
    pub total_appointments: usize,
    pub unique_patients: usize,
    pub mean_appointments_per_patient: f64,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
    pub mean_cost: f64,
}

/// How well the two tables are linked: how many people have at
/// least one appointment.
#[derive(Debug, PartialEq)]
pub struct LinkageSummary {
    pub people_with_appointments: usize,
    pub people_without_appointments: usize,
    pub coverage_percent: f64,
}

pub fn summarize_sleep_health(people: &[SleepHealthRecord]) -> SleepHealthSummary {
    let mut disorder_counts = BTreeMap::new();
    let mut quality_total = 0u64;
    let mut stress_total = 0u64;
    for person in people {
        *disorder_counts.entry(person.sleep_disorder.as_str()).or_insert(0) += 1;
        quality_total += u64::from(person.quality_of_sleep);
        stress_total += u64::from(person.stress_level);
    }
    let count = people.len().max(1) as f64;
    SleepHealthSummary {
        total_people: people.len(),
        disorder_counts,
        mean_quality_of_sleep: quality_total as f64 / count,
        mean_stress_level: stress_total as f64 / count,
    }
}

pub fn summarize_appointments(appointments: &[AppointmentRecord]) -> AppointmentSummary {
    let unique_patients: HashSet<&str> = appointments
        .iter()
        .map(|appointment| appointment.person_id.as_str())
        .collect();
    let cost_total: i64 = appointments
        .iter()
        .map(|appointment| appointment.appointment_cost)
        .sum();
    AppointmentSummary {
        total_appointments: appointments.len(),
        unique_patients: unique_patients.len(),
        mean_appointments_per_patient: appointments.len() as f64
            / unique_patients.len().max(1) as f64,
        first_date: appointments.first().map(|a| a.appointment_date),
        last_date: appointments.last().map(|a| a.appointment_date),
        mean_cost: cost_total as f64 / appointments.len().max(1) as f64,
    }
}

pub fn summarize_linkage(
    people: &[SleepHealthRecord],
    appointments: &[AppointmentRecord],
) -> LinkageSummary {
    let people_seen: HashSet<&str> = appointments
        .iter()
        .map(|appointment| appointment.person_id.as_str())
        .collect();
    let with = people_seen.len();
    LinkageSummary {
        people_with_appointments: with,
        people_without_appointments: people.len().saturating_sub(with),
        coverage_percent: 100.0 * with as f64 / people.len().max(1) as f64,
    }
}
