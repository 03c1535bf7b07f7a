use chrono::Local;
use std::fs;

use synth_health::report::{summarize_appointments, summarize_linkage, summarize_sleep_health};
use synth_health::{make_appointments, make_rng, make_sleep_health, write_table};

const NUM_PEOPLE: usize = 374;
const NUM_APPOINTMENTS: usize = 850;
const GLOBAL_SEED: u64 = 42;

fn main() -> Result<(), anyhow::Error> {
    println!("Generating sleep health and medical appointments datasets");

    let mut rng = make_rng(GLOBAL_SEED, "sleep_health");
    let people = make_sleep_health(&mut rng, NUM_PEOPLE);
    println!("Generated {} sleep health records", people.len());

    let mut rng = make_rng(GLOBAL_SEED, "medical_appointments");
    let today = Local::now().date_naive();
    let appointments = make_appointments(&mut rng, &people, NUM_APPOINTMENTS, today);
    println!("Generated {} appointments", appointments.len());

    fs::create_dir_all("data")?;
    write_table("data/sleep_health.csv", &people)?;
    println!("Saved data/sleep_health.csv");
    write_table("data/medical_appointments.csv", &appointments)?;
    println!("Saved data/medical_appointments.csv");

    let sleep = summarize_sleep_health(&people);
    println!();
    println!("Sleep health dataset");
    println!("  Total people: {}", sleep.total_people);
    for (disorder, count) in &sleep.disorder_counts {
        println!("  Sleep disorder {disorder}: {count}");
    }
    println!("  Average sleep quality: {:.2}", sleep.mean_quality_of_sleep);
    println!("  Average stress level: {:.2}", sleep.mean_stress_level);

    let appointment_summary = summarize_appointments(&appointments);
    println!();
    println!("Medical appointments dataset");
    println!(
        "  Total appointments: {}",
        appointment_summary.total_appointments
    );
    println!(
        "  Unique patients: {}",
        appointment_summary.unique_patients
    );
    println!(
        "  Average appointments per patient: {:.2}",
        appointment_summary.mean_appointments_per_patient
    );
    if let (Some(first), Some(last)) =
        (appointment_summary.first_date, appointment_summary.last_date)
    {
        println!("  Date range: {first} to {last}");
    }
    println!("  Average cost: {:.2}", appointment_summary.mean_cost);

    let linkage = summarize_linkage(&people, &appointments);
    println!();
    println!(
        "People with appointments: {} ({:.1}%)",
        linkage.people_with_appointments, linkage.coverage_percent
    );
    println!(
        "People without appointments: {}",
        linkage.people_without_appointments
    );

    Ok(())
}
