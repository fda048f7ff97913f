use std::fmt::Write;

use crate::models::StudentRecord;
use crate::stats::{self, RecordFilter};

pub fn build_report(filter: &RecordFilter, records: &[&StudentRecord]) -> String {
    let kpis = stats::kpis(records);
    let trend = stats::yearly_trend(records);
    let outcomes = stats::outcome_distribution(records);
    let bands = stats::tier_salary_bands(records);
    let hackathon = stats::hackathon_impact(records);
    let preferences = stats::work_preference_distribution(records);
    let mental = stats::mental_health_by_tier(records);
    let phases = stats::covid_phase_rates(records);

    let mut output = String::new();

    let _ = writeln!(output, "# Placement Statistics Report");
    let _ = writeln!(
        output,
        "Scope: {} ({} records)",
        filter.describe(),
        kpis.total
    );
    let _ = writeln!(output);
    let _ = writeln!(output, "## Key Indicators");
    let _ = writeln!(output, "- Placement rate: {:.1}%", kpis.placement_rate);
    let _ = writeln!(output, "- Average salary: {:.1}L", kpis.avg_salary_lakh);
    let _ = writeln!(output, "- Highest salary: {:.2}L", kpis.highest_salary_lakh);

    let _ = writeln!(output);
    let _ = writeln!(output, "## Placement Trend");
    for point in trend.iter() {
        let _ = writeln!(
            output,
            "- {}: {:.1}% placed, avg salary {:.1}L",
            point.year, point.placement_rate, point.avg_salary_lakh
        );
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Outcome Mix");
    if outcomes.is_empty() {
        let _ = writeln!(output, "No records match this selection.");
    } else {
        for entry in outcomes.iter() {
            let _ = writeln!(output, "- {}: {} records", entry.status, entry.count);
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Tier Salary Bands");
    for band in bands.iter() {
        let _ = writeln!(
            output,
            "- {}: high {:.1}L, avg {:.1}L, low {:.1}L",
            band.tier, band.high_lakh, band.avg_lakh, band.low_lakh
        );
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Hackathon Impact");
    let _ = writeln!(
        output,
        "- With hackathon: {:.1}% placed",
        hackathon.with_rate
    );
    let _ = writeln!(
        output,
        "- Without hackathon: {:.1}% placed",
        hackathon.without_rate
    );

    let _ = writeln!(output);
    let _ = writeln!(output, "## Work Preferences");
    if preferences.is_empty() {
        let _ = writeln!(output, "No records match this selection.");
    } else {
        for entry in preferences.iter() {
            let _ = writeln!(output, "- {}: {} records", entry.preference, entry.count);
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Mental Health by Tier");
    for row in mental.iter() {
        let _ = writeln!(
            output,
            "- {}: {} healthy, {} anxiety, {} depression",
            row.tier, row.healthy, row.anxiety, row.depression
        );
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## COVID Phases");
    for phase in phases.iter() {
        let _ = writeln!(
            output,
            "- {}: {:.1}% placed",
            phase.phase, phase.placement_rate
        );
    }

    output
}
