//! Writing generated tables to delimited text files.

use anyhow::Context;
use serde::Serialize;
use std::path::Path;

/// Write one table to `path` as comma-delimited text with a header
/// row. The header names and column order come from the serde
/// attributes on the record struct.
pub fn write_table<S: Serialize>(path: impl AsRef<Path>, rows: &[S]) -> Result<(), anyhow::Error> {
    let path = path.as_ref();
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer
        .flush()
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::appointments::make_appointments;
    use crate::seeded_rng::make_rng;
    use crate::sleep_health::make_sleep_health;
    use chrono::NaiveDate;
    use std::fs;

    #[test]
    fn header_and_rows_are_written_in_column_order() {
        let people = make_sleep_health(&mut make_rng(42, "sleep_health"), 3);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sleep_health.csv");
        write_table(&path, &people).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Person_ID,Gender,Age,Occupation,Sleep_Duration,Quality_of_Sleep,\
             Physical_Activity_Level,Stress_Level,Daily_Steps,BMI_Category,\
             Blood_Pressure,Heart_Rate,Sleep_Disorder"
        );
        assert_eq!(lines.count(), 3);
        assert!(contents.lines().nth(1).unwrap().starts_with("P0001,"));
    }

    #[test]
    fn appointment_dates_are_written_as_iso_dates() {
        let people = make_sleep_health(&mut make_rng(42, "sleep_health"), 10);
        let today = NaiveDate::from_ymd_opt(2026, 8, 23).unwrap();
        let appointments = make_appointments(
            &mut make_rng(42, "medical_appointments"),
            &people,
            5,
            today,
        );
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("medical_appointments.csv");
        write_table(&path, &appointments).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        for line in contents.lines().skip(1) {
            let date_field = line.split(',').nth(2).unwrap();
            assert!(NaiveDate::parse_from_str(date_field, "%Y-%m-%d").is_ok());
        }
    }

    #[test]
    fn fixed_seed_produces_byte_identical_files() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 23).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let mut outputs = Vec::new();
        for run in 0..2 {
            let people = make_sleep_health(&mut make_rng(42, "sleep_health"), 374);
            let appointments = make_appointments(
                &mut make_rng(42, "medical_appointments"),
                &people,
                850,
                today,
            );
            let sleep_path = dir.path().join(format!("sleep_{run}.csv"));
            let appointments_path = dir.path().join(format!("appointments_{run}.csv"));
            write_table(&sleep_path, &people).unwrap();
            write_table(&appointments_path, &appointments).unwrap();
            outputs.push((
                fs::read(&sleep_path).unwrap(),
                fs::read(&appointments_path).unwrap(),
            ));
        }
        assert_eq!(outputs[0].0, outputs[1].0);
        assert_eq!(outputs[0].1, outputs[1].1);
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let people = make_sleep_health(&mut make_rng(42, "sleep_health"), 1);
        let result = write_table("/nonexistent_dir/sleep_health.csv", &people);
        assert!(result.is_err());
    }
}
