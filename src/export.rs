use std::io::Write;

use chrono::NaiveDate;
use csv::Writer;

use crate::models::StudentRecord;
use crate::schema::{EXPORT_COLUMNS, TEMPLATE_COLUMNS};

/// Writes the 18-column report CSV for the given (already filtered) records.
/// Absent salaries become empty cells; booleans and numbers use their default
/// textual form.
pub fn write_report_csv<W: Write>(out: W, records: &[&StudentRecord]) -> anyhow::Result<()> {
    let mut writer = Writer::from_writer(out);
    writer.write_record(EXPORT_COLUMNS)?;

    for record in records {
        writer.write_record([
            record.id.to_string(),
            record.institution.clone(),
            record.tier.to_string(),
            record.department.clone(),
            record.year.to_string(),
            record.offers_received.to_string(),
            record.offers_accepted.to_string(),
            record.offers_rejected.to_string(),
            optional(record.highest_salary),
            optional(record.lowest_salary),
            optional(record.accepted_salary),
            record.status.to_string(),
            record.hackathon.to_string(),
            record.project_participation.to_string(),
            record.passive_income.to_string(),
            record.mental_health.to_string(),
            record.extra_curricular.to_string(),
            record.work_preference.to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

fn optional(value: Option<u64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Default export file name, stamped with the given date.
pub fn report_file_name(date: NaiveDate) -> String {
    format!("placement_report_{}.csv", date.format("%Y-%m-%d"))
}

/// The downloadable 3-row example file under the camel-case template header.
pub fn sample_template() -> String {
    let mut template = TEMPLATE_COLUMNS.join(",");
    template.push('\n');
    template.push_str(
        "IIT Bombay,Tier-1,CS,2024,3,1,2,2000000,1500000,1800000,Placed,true,true,false,Healthy,5,Hybrid\n\
IIT Delhi,Tier-1,ECE,2024,2,1,1,1800000,1500000,1700000,Placed,false,true,false,Anxiety,3,Onsite\n\
Anna University,Tier-2,ME,2023,1,1,0,1200000,1200000,1200000,Placed,true,false,false,Healthy,4,Remote\n",
    );
    template
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StudentDraft;

    #[test]
    fn absent_salaries_export_as_empty_cells() {
        let record = StudentDraft::default().into_record();
        let mut out = Vec::new();
        write_report_csv(&mut out, &[&record]).unwrap();
        let text = String::from_utf8(out).unwrap();

        let mut lines = text.lines();
        assert_eq!(lines.next().unwrap(), EXPORT_COLUMNS.join(","));
        let row = lines.next().unwrap();
        let cells: Vec<&str> = row.split(',').collect();
        assert_eq!(cells.len(), 18);
        assert_eq!(cells[0], record.id.to_string());
        // Highest, lowest, and accepted salary cells.
        assert_eq!(&cells[8..11], &["", "", ""]);
        assert_eq!(cells[11], "Non-participation");
        assert_eq!(cells[12], "false");
    }

    #[test]
    fn report_file_name_carries_the_date() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        assert_eq!(report_file_name(date), "placement_report_2026-08-06.csv");
    }

    #[test]
    fn sample_template_uses_the_camel_case_header() {
        let template = sample_template();
        let header = template.lines().next().unwrap();
        assert_eq!(header, TEMPLATE_COLUMNS.join(","));
        assert_eq!(template.lines().count(), 4);
    }
}
