use serde::Serialize;

use crate::models::{MentalHealth, PlacementStatus, StudentRecord, Tier, WorkPreference, YEARS};

/// Salaries are reported in lakhs.
pub const LAKH: f64 = 100_000.0;

/// Share of placed records attributed to on-campus drives. The dataset does
/// not carry a campus field, so the split is a fixed estimate.
const ON_CAMPUS_SHARE: f64 = 0.7;

pub const COVID_PHASES: [(&str, [i32; 2]); 3] = [
    ("Pre-COVID (2019-2020)", [2019, 2020]),
    ("COVID (2021-2022)", [2021, 2022]),
    ("Post-COVID (2023-2024)", [2023, 2024]),
];

pub const DEPARTMENT_SKILLS: [(&str, [&str; 4]); 5] = [
    ("CS", ["DS & Algo", "System Design", "Cloud", "ML"]),
    ("ECE", ["Embedded Systems", "VLSI", "IoT", "Signal Processing"]),
    ("ME", ["CAD", "Thermal", "Manufacturing", "Robotics"]),
    ("EE", ["Power Systems", "Control", "Electronics", "Renewable Energy"]),
    ("CE", ["Structures", "Geotechnical", "Transportation", "Water Resources"]),
];

/// A filter over the record collection; `None` on a dimension means "All".
#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    pub institution: Option<String>,
    pub tier: Option<Tier>,
    pub department: Option<String>,
    pub year: Option<i32>,
    pub status: Option<PlacementStatus>,
}

impl RecordFilter {
    pub fn matches(&self, record: &StudentRecord) -> bool {
        self.institution
            .as_ref()
            .map_or(true, |institution| &record.institution == institution)
            && self.tier.map_or(true, |tier| record.tier == tier)
            && self
                .department
                .as_ref()
                .map_or(true, |department| &record.department == department)
            && self.year.map_or(true, |year| record.year == year)
            && self.status.map_or(true, |status| record.status == status)
    }

    pub fn apply<'a>(&self, records: &'a [StudentRecord]) -> Vec<&'a StudentRecord> {
        records.iter().filter(|record| self.matches(record)).collect()
    }

    /// Selecting an institution implies its tier unless one was chosen
    /// explicitly.
    pub fn with_tier_from_institution(mut self) -> Self {
        if self.tier.is_none() {
            if let Some(name) = &self.institution {
                self.tier = Some(Tier::of_institution(name));
            }
        }
        self
    }

    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        if let Some(institution) = &self.institution {
            parts.push(format!("institution={institution}"));
        }
        if let Some(tier) = self.tier {
            parts.push(format!("tier={tier}"));
        }
        if let Some(department) = &self.department {
            parts.push(format!("department={department}"));
        }
        if let Some(year) = self.year {
            parts.push(format!("year={year}"));
        }
        if let Some(status) = self.status {
            parts.push(format!("status={status}"));
        }
        if parts.is_empty() {
            "all records".to_string()
        } else {
            parts.join(", ")
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Kpis {
    pub total: usize,
    pub placement_rate: f64,
    pub avg_salary_lakh: f64,
    pub highest_salary_lakh: f64,
}

pub fn kpis(records: &[&StudentRecord]) -> Kpis {
    let placed = records
        .iter()
        .filter(|record| record.status == PlacementStatus::Placed)
        .count();
    let placement_rate = if records.is_empty() {
        0.0
    } else {
        placed as f64 / records.len() as f64 * 100.0
    };

    let salaries: Vec<u64> = records
        .iter()
        .filter_map(|record| record.accepted_salary)
        .collect();
    let avg_salary_lakh = if salaries.is_empty() {
        0.0
    } else {
        salaries.iter().sum::<u64>() as f64 / salaries.len() as f64 / LAKH
    };
    let highest_salary_lakh = salaries
        .iter()
        .max()
        .map(|&salary| salary as f64 / LAKH)
        .unwrap_or(0.0);

    Kpis {
        total: records.len(),
        placement_rate,
        avg_salary_lakh,
        highest_salary_lakh,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct YearPoint {
    pub year: i32,
    pub placement_rate: f64,
    pub avg_salary_lakh: f64,
}

pub fn yearly_trend(records: &[&StudentRecord]) -> Vec<YearPoint> {
    YEARS
        .into_iter()
        .map(|year| {
            let subset: Vec<&StudentRecord> = records
                .iter()
                .copied()
                .filter(|record| record.year == year)
                .collect();
            let year_kpis = kpis(&subset);
            YearPoint {
                year,
                placement_rate: year_kpis.placement_rate,
                avg_salary_lakh: year_kpis.avg_salary_lakh,
            }
        })
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusCount {
    pub status: PlacementStatus,
    pub count: usize,
}

pub fn outcome_distribution(records: &[&StudentRecord]) -> Vec<StatusCount> {
    PlacementStatus::ALL
        .into_iter()
        .map(|status| StatusCount {
            status,
            count: records.iter().filter(|record| record.status == status).count(),
        })
        .filter(|entry| entry.count > 0)
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct PreferenceCount {
    pub preference: WorkPreference,
    pub count: usize,
}

pub fn work_preference_distribution(records: &[&StudentRecord]) -> Vec<PreferenceCount> {
    WorkPreference::ALL
        .into_iter()
        .map(|preference| PreferenceCount {
            preference,
            count: records
                .iter()
                .filter(|record| record.work_preference == preference)
                .count(),
        })
        .filter(|entry| entry.count > 0)
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct TierSalaryBand {
    pub tier: Tier,
    pub high_lakh: f64,
    pub avg_lakh: f64,
    pub low_lakh: f64,
}

pub fn tier_salary_bands(records: &[&StudentRecord]) -> Vec<TierSalaryBand> {
    Tier::ALL
        .into_iter()
        .map(|tier| {
            let salaries: Vec<u64> = records
                .iter()
                .filter(|record| record.tier == tier)
                .filter_map(|record| record.accepted_salary)
                .collect();
            if salaries.is_empty() {
                return TierSalaryBand {
                    tier,
                    high_lakh: 0.0,
                    avg_lakh: 0.0,
                    low_lakh: 0.0,
                };
            }
            TierSalaryBand {
                tier,
                high_lakh: salaries.iter().max().copied().unwrap_or(0) as f64 / LAKH,
                avg_lakh: salaries.iter().sum::<u64>() as f64 / salaries.len() as f64 / LAKH,
                low_lakh: salaries.iter().min().copied().unwrap_or(0) as f64 / LAKH,
            }
        })
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct HackathonImpact {
    pub with_rate: f64,
    pub without_rate: f64,
}

pub fn hackathon_impact(records: &[&StudentRecord]) -> HackathonImpact {
    let rate = |participated: bool| {
        let group: Vec<&StudentRecord> = records
            .iter()
            .copied()
            .filter(|record| record.hackathon == participated)
            .collect();
        if group.is_empty() {
            return 0.0;
        }
        let placed = group
            .iter()
            .filter(|record| record.status == PlacementStatus::Placed)
            .count();
        placed as f64 / group.len() as f64 * 100.0
    };
    HackathonImpact {
        with_rate: rate(true),
        without_rate: rate(false),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TierMentalHealth {
    pub tier: Tier,
    pub healthy: usize,
    pub anxiety: usize,
    pub depression: usize,
}

pub fn mental_health_by_tier(records: &[&StudentRecord]) -> Vec<TierMentalHealth> {
    Tier::ALL
        .into_iter()
        .map(|tier| {
            let count = |category: MentalHealth| {
                records
                    .iter()
                    .filter(|record| record.tier == tier && record.mental_health == category)
                    .count()
            };
            TierMentalHealth {
                tier,
                healthy: count(MentalHealth::Healthy),
                anxiety: count(MentalHealth::Anxiety),
                depression: count(MentalHealth::Depression),
            }
        })
        .collect()
}

/// Healthy share of each group on a 0-10 scale.
#[derive(Debug, Clone, Serialize)]
pub struct MentalHealthPlacement {
    pub placed_score: f64,
    pub not_placed_score: f64,
}

pub fn mental_health_vs_placement(records: &[&StudentRecord]) -> MentalHealthPlacement {
    let score = |placed: bool| {
        let group: Vec<&StudentRecord> = records
            .iter()
            .copied()
            .filter(|record| (record.status == PlacementStatus::Placed) == placed)
            .collect();
        if group.is_empty() {
            return 0.0;
        }
        let healthy = group
            .iter()
            .filter(|record| record.mental_health == MentalHealth::Healthy)
            .count();
        healthy as f64 / group.len() as f64 * 10.0
    };
    MentalHealthPlacement {
        placed_score: score(true),
        not_placed_score: score(false),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PhaseRate {
    pub phase: &'static str,
    pub placement_rate: f64,
}

pub fn covid_phase_rates(records: &[&StudentRecord]) -> Vec<PhaseRate> {
    COVID_PHASES
        .into_iter()
        .map(|(phase, years)| {
            let subset: Vec<&StudentRecord> = records
                .iter()
                .copied()
                .filter(|record| years.contains(&record.year))
                .collect();
            PhaseRate {
                phase,
                placement_rate: kpis(&subset).placement_rate,
            }
        })
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct CampusSplit {
    pub on_campus: usize,
    pub off_campus: usize,
}

pub fn campus_split(records: &[&StudentRecord]) -> CampusSplit {
    let placed = records
        .iter()
        .filter(|record| record.status == PlacementStatus::Placed)
        .count();
    let on_campus = (placed as f64 * ON_CAMPUS_SHARE) as usize;
    CampusSplit {
        on_campus,
        off_campus: placed - on_campus,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillGap {
    pub skill: &'static str,
    pub has_pct: u32,
    pub gap_pct: u32,
}

/// Skill coverage per department: fixed skill lists with a deterministic
/// possession gradient, so repeated runs agree.
pub fn skill_gap(department: &str) -> Vec<SkillGap> {
    let skills = DEPARTMENT_SKILLS
        .iter()
        .find(|(name, _)| *name == department)
        .map(|(_, skills)| *skills)
        .unwrap_or(DEPARTMENT_SKILLS[0].1);

    skills
        .iter()
        .enumerate()
        .map(|(index, &skill)| {
            let has_pct = 40 + index as u32 * 10;
            SkillGap {
                skill,
                has_pct,
                gap_pct: 100 - has_pct,
            }
        })
        .collect()
}

/// Everything the overview output carries, in one serializable bundle.
#[derive(Debug, Serialize)]
pub struct Overview {
    pub scope: String,
    pub kpis: Kpis,
    pub yearly_trend: Vec<YearPoint>,
    pub outcomes: Vec<StatusCount>,
    pub tier_salaries: Vec<TierSalaryBand>,
    pub hackathon: HackathonImpact,
    pub work_preferences: Vec<PreferenceCount>,
    pub mental_health_by_tier: Vec<TierMentalHealth>,
    pub mental_health_vs_placement: MentalHealthPlacement,
    pub covid_phases: Vec<PhaseRate>,
    pub campus_split: CampusSplit,
    pub skill_gap: Vec<SkillGap>,
}

pub fn overview(filter: &RecordFilter, records: &[&StudentRecord]) -> Overview {
    Overview {
        scope: filter.describe(),
        kpis: kpis(records),
        yearly_trend: yearly_trend(records),
        outcomes: outcome_distribution(records),
        tier_salaries: tier_salary_bands(records),
        hackathon: hackathon_impact(records),
        work_preferences: work_preference_distribution(records),
        mental_health_by_tier: mental_health_by_tier(records),
        mental_health_vs_placement: mental_health_vs_placement(records),
        covid_phases: covid_phase_rates(records),
        campus_split: campus_split(records),
        skill_gap: skill_gap(filter.department.as_deref().unwrap_or("CS")),
    }
}
