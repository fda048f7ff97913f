use rand::Rng;
use uuid::Uuid;

use crate::dataset::Dataset;
use crate::models::{
    MentalHealth, PlacementStatus, StudentRecord, Tier, WorkPreference, DEPARTMENTS, YEARS,
};

pub const INSTITUTIONS: [&str; 13] = [
    "IIT Bombay",
    "IIT Delhi",
    "IIT Madras",
    "IIT Kanpur",
    "IIT Kharagpur",
    "IIT Roorkee",
    "NIT Trichy",
    "NIT Warangal",
    "IISC Bangalore",
    "Anna University",
    "VIT Vellore",
    "SRM University",
    "Other",
];

/// Outcomes drawn for records without an accepted offer.
const OUTCOME_POOL: [PlacementStatus; 5] = [
    PlacementStatus::Placed,
    PlacementStatus::HigherStudies,
    PlacementStatus::Entrepreneurship,
    PlacementStatus::FamilyBusiness,
    PlacementStatus::GovtExamPrep,
];

/// Builds the startup dataset: one cohort per institution, year, and
/// department.
pub fn sample_dataset<R: Rng>(rng: &mut R) -> Dataset {
    Dataset::from_records(sample_records(rng))
}

pub fn sample_records<R: Rng>(rng: &mut R) -> Vec<StudentRecord> {
    let mut records = Vec::new();
    for institution in INSTITUTIONS {
        let tier = Tier::of_institution(institution);
        for year in YEARS {
            for department in DEPARTMENTS {
                let cohort = rng.gen_range(30..80);
                for _ in 0..cohort {
                    records.push(sample_record(rng, institution, tier, department, year));
                }
            }
        }
    }
    records
}

fn sample_record<R: Rng>(
    rng: &mut R,
    institution: &str,
    tier: Tier,
    department: &str,
    year: i32,
) -> StudentRecord {
    let offers_received: u32 = rng.gen_range(0..5);
    let offers_accepted = if offers_received > 0 {
        rng.gen_range(1..=2).min(offers_received)
    } else {
        0
    };
    let offers_rejected = offers_received - offers_accepted;

    let status = if offers_accepted > 0 {
        PlacementStatus::Placed
    } else {
        OUTCOME_POOL[rng.gen_range(0..OUTCOME_POOL.len())]
    };

    let base_salary: u64 = match tier {
        Tier::Tier1 => 1_800_000,
        Tier::Tier2 => 1_200_000,
        Tier::Tier3 => 800_000,
    };
    // Recent years ran a softer market.
    let variation = match year {
        2024 => 0.8,
        2023 => 0.9,
        _ => 1.0,
    };

    let highest_salary = if offers_received > 0 {
        Some(scale(base_salary + rng.gen_range(0..500_000), variation))
    } else {
        None
    };
    let lowest_salary = if offers_received > 0 {
        Some(scale(
            base_salary * 6 / 10 + rng.gen_range(0..200_000),
            variation,
        ))
    } else {
        None
    };
    let accepted_salary = if status == PlacementStatus::Placed {
        Some(scale(
            base_salary * 8 / 10 + rng.gen_range(0..300_000),
            variation,
        ))
    } else {
        None
    };

    StudentRecord {
        id: Uuid::new_v4(),
        institution: institution.to_string(),
        tier,
        department: department.to_string(),
        year,
        offers_received,
        offers_accepted,
        offers_rejected,
        highest_salary,
        lowest_salary,
        accepted_salary,
        status,
        hackathon: rng.gen_bool(0.6),
        project_participation: rng.gen_bool(0.7),
        passive_income: rng.gen_bool(0.15),
        mental_health: MentalHealth::ALL[rng.gen_range(0..MentalHealth::ALL.len())],
        extra_curricular: rng.gen_range(0..10),
        work_preference: WorkPreference::ALL[rng.gen_range(0..WorkPreference::ALL.len())],
    }
}

fn scale(amount: u64, variation: f64) -> u64 {
    (amount as f64 * variation) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn offer_counts_stay_consistent() {
        let mut rng = StdRng::seed_from_u64(7);
        for record in sample_records(&mut rng) {
            assert!(record.offers_accepted <= record.offers_received);
            assert_eq!(
                record.offers_accepted + record.offers_rejected,
                record.offers_received
            );
        }
    }

    #[test]
    fn accepted_salary_tracks_placed_status() {
        let mut rng = StdRng::seed_from_u64(11);
        for record in sample_records(&mut rng) {
            assert_eq!(
                record.accepted_salary.is_some(),
                record.status == PlacementStatus::Placed
            );
            if record.offers_received == 0 {
                assert_eq!(record.highest_salary, None);
                assert_eq!(record.lowest_salary, None);
            }
        }
    }

    #[test]
    fn tiers_match_institution_names() {
        let mut rng = StdRng::seed_from_u64(3);
        for record in sample_records(&mut rng) {
            assert_eq!(record.tier, Tier::of_institution(&record.institution));
        }
    }

    #[test]
    fn every_cohort_cell_is_populated() {
        let mut rng = StdRng::seed_from_u64(5);
        let records = sample_records(&mut rng);
        // 13 institutions x 6 years x 5 departments, at least 30 records each.
        assert!(records.len() >= 13 * 6 * 5 * 30);
        for institution in INSTITUTIONS {
            assert!(records
                .iter()
                .any(|record| record.institution == institution));
        }
    }
}
