//! Generation of the sleep health table. One row per person, with
//! independently sampled demographic and lifestyle fields, and a
//! sleep disorder that is conditioned on sleep quality and stress.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::sampling::weighted_choice;

/// Sleep disorder assigned to a person. Kept as an enum rather than
/// a plain string because the appointment generator branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SleepDisorder {
    None,
    Insomnia,
    #[serde(rename = "Sleep Apnea")]
    SleepApnea,
}

impl SleepDisorder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SleepDisorder::None => "None",
            SleepDisorder::Insomnia => "Insomnia",
            SleepDisorder::SleepApnea => "Sleep Apnea",
        }
    }
}

/// One row of the sleep health table. Field order matches the
/// column order of the output file; the serde renames carry the
/// header names.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SleepHealthRecord {
    #[serde(rename = "Person_ID")]
    pub person_id: String,
    #[serde(rename = "Gender")]
    pub gender: String,
    #[serde(rename = "Age")]
    pub age: u32,
    #[serde(rename = "Occupation")]
    pub occupation: String,
    #[serde(rename = "Sleep_Duration")]
    pub sleep_duration: f64,
    #[serde(rename = "Quality_of_Sleep")]
    pub quality_of_sleep: u32,
    #[serde(rename = "Physical_Activity_Level")]
    pub physical_activity_level: u32,
    #[serde(rename = "Stress_Level")]
    pub stress_level: u32,
    #[serde(rename = "Daily_Steps")]
    pub daily_steps: u32,
    #[serde(rename = "BMI_Category")]
    pub bmi_category: String,
    #[serde(rename = "Blood_Pressure")]
    pub blood_pressure: String,
    #[serde(rename = "Heart_Rate")]
    pub heart_rate: u32,
    #[serde(rename = "Sleep_Disorder")]
    pub sleep_disorder: SleepDisorder,
}

const GENDER_WEIGHTS: [(&str, f64); 2] = [("Male", 0.52), ("Female", 0.48)];

const OCCUPATION_WEIGHTS: [(&str, f64); 11] = [
    ("Nurse", 0.12),
    ("Doctor", 0.08),
    ("Engineer", 0.15),
    ("Lawyer", 0.09),
    ("Teacher", 0.11),
    ("Accountant", 0.08),
    ("Salesperson", 0.10),
    ("Software Engineer", 0.13),
    ("Scientist", 0.07),
    ("Sales Representative", 0.04),
    ("Manager", 0.03),
];

const BMI_CATEGORY_WEIGHTS: [(&str, f64); 4] = [
    ("Normal", 0.35),
    ("Overweight", 0.30),
    ("Obese", 0.25),
    ("Normal Weight", 0.10),
];

/// Generate a person id (format "Pnnnn", numbered from 1)
fn make_person_id(person_number: usize) -> String {
    format!("P{person_number:04}")
}

/// Sleep duration in hours, uniform over [5.8, 8.5] to 1 decimal place
fn make_sleep_duration(rng: &mut ChaCha8Rng) -> f64 {
    let hours: f64 = rng.gen_range(5.8..=8.5);
    (hours * 10.0).round() / 10.0
}

/// Blood pressure as a "systolic/diastolic" string
fn make_blood_pressure(rng: &mut ChaCha8Rng) -> String {
    let systolic = rng.gen_range(115..142);
    let diastolic = rng.gen_range(75..95);
    format!("{systolic}/{diastolic}")
}

/// Pick a sleep disorder conditioned on sleep quality and stress.
/// Poor sleep combined with high stress always yields a disorder;
/// good sleep only occasionally yields sleep apnea.
fn make_sleep_disorder(
    rng: &mut ChaCha8Rng,
    quality_of_sleep: u32,
    stress_level: u32,
) -> SleepDisorder {
    if quality_of_sleep <= 5 && stress_level >= 7 {
        weighted_choice(
            rng,
            &[
                (SleepDisorder::Insomnia, 0.6),
                (SleepDisorder::SleepApnea, 0.4),
            ],
        )
    } else if quality_of_sleep <= 6 {
        weighted_choice(
            rng,
            &[(SleepDisorder::None, 0.6), (SleepDisorder::Insomnia, 0.4)],
        )
    } else {
        weighted_choice(
            rng,
            &[
                (SleepDisorder::None, 0.85),
                (SleepDisorder::SleepApnea, 0.15),
            ],
        )
    }
}

/// Generate the sleep health table with `num_people` rows and
/// densely sequential person ids starting at "P0001".
pub fn make_sleep_health(rng: &mut ChaCha8Rng, num_people: usize) -> Vec<SleepHealthRecord> {
    let mut records = Vec::with_capacity(num_people);
    for person_number in 1..=num_people {
        let quality_of_sleep = rng.gen_range(4..10);
        let stress_level = rng.gen_range(3..9);
        let sleep_disorder = make_sleep_disorder(rng, quality_of_sleep, stress_level);
        records.push(SleepHealthRecord {
            person_id: make_person_id(person_number),
            gender: weighted_choice(rng, &GENDER_WEIGHTS).to_string(),
            age: rng.gen_range(27..60),
            occupation: weighted_choice(rng, &OCCUPATION_WEIGHTS).to_string(),
            sleep_duration: make_sleep_duration(rng),
            quality_of_sleep,
            physical_activity_level: rng.gen_range(30..90),
            stress_level,
            daily_steps: rng.gen_range(3000..10000),
            bmi_category: weighted_choice(rng, &BMI_CATEGORY_WEIGHTS).to_string(),
            blood_pressure: make_blood_pressure(rng),
            heart_rate: rng.gen_range(65..86),
            sleep_disorder,
        });
    }
    records
}
