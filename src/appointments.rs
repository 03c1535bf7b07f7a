//! Generation of the medical appointments table. Each appointment
//! references one person from the sleep health table; persons with a
//! sleep disorder or high stress are sampled more often, and the
//! diagnosis and treatment fields are conditioned on the referenced
//! person's sleep disorder.

use chrono::{Duration, NaiveDate};
use rand::distributions::{Distribution, WeightedIndex};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::sampling::weighted_choice;
use crate::sleep_health::{SleepDisorder, SleepHealthRecord};

/// Appointment dates are uniform over this many days ending today.
pub const APPOINTMENT_WINDOW_DAYS: i64 = 730;

/// One row of the medical appointments table. Field order matches
/// the column order of the output file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppointmentRecord {
    #[serde(rename = "Appointment_ID")]
    pub appointment_id: String,
    #[serde(rename = "Person_ID")]
    pub person_id: String,
    #[serde(rename = "Appointment_Date")]
    pub appointment_date: NaiveDate,
    #[serde(rename = "Doctor_Type")]
    pub doctor_type: String,
    #[serde(rename = "Diagnosis")]
    pub diagnosis: String,
    #[serde(rename = "Treatment_Prescribed")]
    pub treatment_prescribed: String,
    #[serde(rename = "Follow_Up_Required")]
    pub follow_up_required: String,
    #[serde(rename = "Appointment_Cost")]
    pub appointment_cost: i64,
    #[serde(rename = "Insurance_Coverage")]
    pub insurance_coverage: String,
}

const DOCTOR_TYPE_WEIGHTS: [(&str, f64); 5] = [
    ("Sleep Specialist", 0.25),
    ("General Practitioner", 0.35),
    ("Cardiologist", 0.15),
    ("Nutritionist", 0.15),
    ("Psychologist", 0.10),
];

const INSURANCE_WEIGHTS: [(&str, f64); 3] =
    [("Full", 0.45), ("Partial", 0.35), ("None", 0.20)];

/// Relative likelihood of a person having any given appointment.
/// A diagnosed disorder outweighs high stress alone.
fn appointment_weight(person: &SleepHealthRecord) -> f64 {
    match person.sleep_disorder {
        SleepDisorder::Insomnia | SleepDisorder::SleepApnea => 3.0,
        SleepDisorder::None if person.stress_level >= 7 => 2.0,
        SleepDisorder::None => 1.0,
    }
}

fn base_cost(doctor_type: &str) -> i64 {
    match doctor_type {
        "Sleep Specialist" => 250,
        "General Practitioner" => 120,
        "Cardiologist" => 300,
        "Nutritionist" => 150,
        "Psychologist" => 180,
        other => unreachable!("unknown doctor type {other}"),
    }
}

/// Pick a diagnosis and treatment pair conditioned on the referenced
/// person's sleep disorder. Sleep apnea always receives the fixed
/// "Sleep Apnea" diagnosis; the other branches draw both fields.
fn make_diagnosis_and_treatment(
    rng: &mut ChaCha8Rng,
    sleep_disorder: SleepDisorder,
) -> (String, String) {
    match sleep_disorder {
        SleepDisorder::Insomnia => {
            let diagnosis = weighted_choice(
                rng,
                &[
                    ("Chronic Insomnia", 0.5),
                    ("Stress-Related Insomnia", 0.3),
                    ("Lifestyle Issues", 0.2),
                ],
            );
            let treatment = weighted_choice(
                rng,
                &[
                    ("Medication", 0.3),
                    ("Cognitive Behavioral Therapy", 0.3),
                    ("Lifestyle Changes", 0.2),
                    ("Sleep Hygiene Education", 0.2),
                ],
            );
            (diagnosis.to_string(), treatment.to_string())
        }
        SleepDisorder::SleepApnea => {
            let treatment = weighted_choice(
                rng,
                &[
                    ("CPAP Machine", 0.6),
                    ("Lifestyle Changes", 0.3),
                    ("Surgery Consultation", 0.1),
                ],
            );
            ("Sleep Apnea".to_string(), treatment.to_string())
        }
        SleepDisorder::None => {
            let diagnosis = weighted_choice(
                rng,
                &[
                    ("Preventive Care", 0.3),
                    ("Stress Management", 0.3),
                    ("Lifestyle Counseling", 0.25),
                    ("No Issues Found", 0.15),
                ],
            );
            let treatment = weighted_choice(
                rng,
                &[
                    ("Lifestyle Changes", 0.35),
                    ("Exercise Program", 0.25),
                    ("Stress Reduction Techniques", 0.25),
                    ("None", 0.15),
                ],
            );
            (diagnosis.to_string(), treatment.to_string())
        }
    }
}

/// Serious diagnoses always need a follow up; the rest only sometimes.
fn make_follow_up(rng: &mut ChaCha8Rng, diagnosis: &str) -> String {
    match diagnosis {
        "Chronic Insomnia" | "Sleep Apnea" | "Stress-Related Insomnia" => String::from("Yes"),
        _ => weighted_choice(rng, &[("Yes", 0.3), ("No", 0.7)]).to_string(),
    }
}

/// Generate the appointments table with `num_appointments` rows,
/// each referencing a person drawn (with replacement) from the
/// weighted distribution over `people`. Rows are returned sorted by
/// appointment date ascending; ids are assigned before the sort, so
/// they are not in date order.
///
/// `today` is the end of the trailing date window; the driver passes
/// the current date, tests pass a fixed one.
pub fn make_appointments(
    rng: &mut ChaCha8Rng,
    people: &[SleepHealthRecord],
    num_appointments: usize,
    today: NaiveDate,
) -> Vec<AppointmentRecord> {
    if num_appointments == 0 {
        return Vec::new();
    }
    let weights: Vec<f64> = people.iter().map(appointment_weight).collect();
    let person_index = WeightedIndex::new(&weights)
        .expect("person table must be non-empty to generate appointments");
    let window_start = today - Duration::days(APPOINTMENT_WINDOW_DAYS);

    let mut records = Vec::with_capacity(num_appointments);
    for appointment_number in 1..=num_appointments {
        let person = &people[person_index.sample(rng)];
        let appointment_date =
            window_start + Duration::days(rng.gen_range(0..APPOINTMENT_WINDOW_DAYS));
        let doctor_type = weighted_choice(rng, &DOCTOR_TYPE_WEIGHTS).to_string();
        let (diagnosis, treatment_prescribed) =
            make_diagnosis_and_treatment(rng, person.sleep_disorder);
        let follow_up_required = make_follow_up(rng, &diagnosis);
        let appointment_cost = base_cost(&doctor_type) + rng.gen_range(-30..50);
        records.push(AppointmentRecord {
            appointment_id: format!("APT{appointment_number:05}"),
            person_id: person.person_id.clone(),
            appointment_date,
            doctor_type,
            diagnosis,
            treatment_prescribed,
            follow_up_required,
            appointment_cost,
            insurance_coverage: weighted_choice(rng, &INSURANCE_WEIGHTS).to_string(),
        });
    }

    // Vec::sort_by_key is stable, so equal dates keep id order
    records.sort_by_key(|record| record.appointment_date);
    records
}
