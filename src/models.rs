use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

pub const YEARS: [i32; 6] = [2019, 2020, 2021, 2022, 2023, 2024];
pub const DEPARTMENTS: [&str; 5] = ["CS", "ECE", "ME", "EE", "CE"];
pub const DEFAULT_YEAR: i32 = 2024;

#[derive(Debug, Error)]
#[error("unrecognized {field} value: {value:?}")]
pub struct UnknownValue {
    pub field: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Tier {
    #[serde(rename = "Tier-1")]
    Tier1,
    #[serde(rename = "Tier-2")]
    Tier2,
    #[serde(rename = "Tier-3")]
    Tier3,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Tier1, Tier::Tier2, Tier::Tier3];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Tier1 => "Tier-1",
            Tier::Tier2 => "Tier-2",
            Tier::Tier3 => "Tier-3",
        }
    }

    /// Coarse ranking bucket for an institution name.
    pub fn of_institution(name: &str) -> Tier {
        if name.contains("IIT") || name.contains("NIT") || name.contains("IISC") {
            Tier::Tier1
        } else if name.contains("Anna") || name.contains("VIT") || name.contains("SRM") {
            Tier::Tier2
        } else {
            Tier::Tier3
        }
    }
}

impl Default for Tier {
    fn default() -> Self {
        Tier::Tier1
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tier::ALL
            .into_iter()
            .find(|tier| s.eq_ignore_ascii_case(tier.as_str()))
            .ok_or_else(|| UnknownValue {
                field: "tier",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PlacementStatus {
    Placed,
    #[serde(rename = "Higher studies")]
    HigherStudies,
    Entrepreneurship,
    #[serde(rename = "Family Business")]
    FamilyBusiness,
    #[serde(rename = "Govt Exam Prep")]
    GovtExamPrep,
    #[serde(rename = "Non-participation")]
    NonParticipation,
}

impl PlacementStatus {
    pub const ALL: [PlacementStatus; 6] = [
        PlacementStatus::Placed,
        PlacementStatus::HigherStudies,
        PlacementStatus::Entrepreneurship,
        PlacementStatus::FamilyBusiness,
        PlacementStatus::GovtExamPrep,
        PlacementStatus::NonParticipation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlacementStatus::Placed => "Placed",
            PlacementStatus::HigherStudies => "Higher studies",
            PlacementStatus::Entrepreneurship => "Entrepreneurship",
            PlacementStatus::FamilyBusiness => "Family Business",
            PlacementStatus::GovtExamPrep => "Govt Exam Prep",
            PlacementStatus::NonParticipation => "Non-participation",
        }
    }
}

impl Default for PlacementStatus {
    fn default() -> Self {
        PlacementStatus::NonParticipation
    }
}

impl fmt::Display for PlacementStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlacementStatus {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlacementStatus::ALL
            .into_iter()
            .find(|status| s.eq_ignore_ascii_case(status.as_str()))
            .ok_or_else(|| UnknownValue {
                field: "status",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MentalHealth {
    Healthy,
    Anxiety,
    Depression,
}

impl MentalHealth {
    pub const ALL: [MentalHealth; 3] = [
        MentalHealth::Healthy,
        MentalHealth::Anxiety,
        MentalHealth::Depression,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MentalHealth::Healthy => "Healthy",
            MentalHealth::Anxiety => "Anxiety",
            MentalHealth::Depression => "Depression",
        }
    }
}

impl Default for MentalHealth {
    fn default() -> Self {
        MentalHealth::Healthy
    }
}

impl fmt::Display for MentalHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MentalHealth {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MentalHealth::ALL
            .into_iter()
            .find(|category| s.eq_ignore_ascii_case(category.as_str()))
            .ok_or_else(|| UnknownValue {
                field: "mentalhealth",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WorkPreference {
    Hybrid,
    Onsite,
    Remote,
}

impl WorkPreference {
    pub const ALL: [WorkPreference; 3] = [
        WorkPreference::Hybrid,
        WorkPreference::Onsite,
        WorkPreference::Remote,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkPreference::Hybrid => "Hybrid",
            WorkPreference::Onsite => "Onsite",
            WorkPreference::Remote => "Remote",
        }
    }
}

impl Default for WorkPreference {
    fn default() -> Self {
        WorkPreference::Hybrid
    }
}

impl fmt::Display for WorkPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkPreference {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WorkPreference::ALL
            .into_iter()
            .find(|preference| s.eq_ignore_ascii_case(preference.as_str()))
            .ok_or_else(|| UnknownValue {
                field: "workpreference",
                value: s.to_string(),
            })
    }
}

/// One placement observation. Salary fields distinguish "absent" from zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentRecord {
    pub id: Uuid,
    pub institution: String,
    pub tier: Tier,
    pub department: String,
    pub year: i32,
    pub offers_received: u32,
    pub offers_accepted: u32,
    pub offers_rejected: u32,
    pub highest_salary: Option<u64>,
    pub lowest_salary: Option<u64>,
    pub accepted_salary: Option<u64>,
    pub status: PlacementStatus,
    pub hackathon: bool,
    pub project_participation: bool,
    pub passive_income: bool,
    pub mental_health: MentalHealth,
    pub extra_curricular: u32,
    pub work_preference: WorkPreference,
}

/// A record awaiting an identifier. Ids are assigned by the system on insert,
/// never supplied by the caller.
#[derive(Debug, Clone)]
pub struct StudentDraft {
    pub institution: String,
    pub tier: Tier,
    pub department: String,
    pub year: i32,
    pub offers_received: u32,
    pub offers_accepted: u32,
    pub offers_rejected: u32,
    pub highest_salary: Option<u64>,
    pub lowest_salary: Option<u64>,
    pub accepted_salary: Option<u64>,
    pub status: PlacementStatus,
    pub hackathon: bool,
    pub project_participation: bool,
    pub passive_income: bool,
    pub mental_health: MentalHealth,
    pub extra_curricular: u32,
    pub work_preference: WorkPreference,
}

impl Default for StudentDraft {
    fn default() -> Self {
        Self {
            institution: "IIT Bombay".to_string(),
            tier: Tier::Tier1,
            department: "CS".to_string(),
            year: DEFAULT_YEAR,
            offers_received: 0,
            offers_accepted: 0,
            offers_rejected: 0,
            highest_salary: None,
            lowest_salary: None,
            accepted_salary: None,
            status: PlacementStatus::NonParticipation,
            hackathon: false,
            project_participation: false,
            passive_income: false,
            mental_health: MentalHealth::Healthy,
            extra_curricular: 0,
            work_preference: WorkPreference::Hybrid,
        }
    }
}

impl StudentDraft {
    pub fn into_record(self) -> StudentRecord {
        StudentRecord {
            id: Uuid::new_v4(),
            institution: self.institution,
            tier: self.tier,
            department: self.department,
            year: self.year,
            offers_received: self.offers_received,
            offers_accepted: self.offers_accepted,
            offers_rejected: self.offers_rejected,
            highest_salary: self.highest_salary,
            lowest_salary: self.lowest_salary,
            accepted_salary: self.accepted_salary,
            status: self.status,
            hackathon: self.hackathon,
            project_participation: self.project_participation,
            passive_income: self.passive_income,
            mental_health: self.mental_health,
            extra_curricular: self.extra_curricular,
            work_preference: self.work_preference,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_follows_institution_name() {
        assert_eq!(Tier::of_institution("IIT Bombay"), Tier::Tier1);
        assert_eq!(Tier::of_institution("NIT Trichy"), Tier::Tier1);
        assert_eq!(Tier::of_institution("IISC Bangalore"), Tier::Tier1);
        assert_eq!(Tier::of_institution("Anna University"), Tier::Tier2);
        assert_eq!(Tier::of_institution("SRM University"), Tier::Tier2);
        assert_eq!(Tier::of_institution("Other"), Tier::Tier3);
    }

    #[test]
    fn enum_parsing_is_case_insensitive() {
        assert_eq!("tier-2".parse::<Tier>().unwrap(), Tier::Tier2);
        assert_eq!(
            "higher studies".parse::<PlacementStatus>().unwrap(),
            PlacementStatus::HigherStudies
        );
        assert_eq!(
            "ANXIETY".parse::<MentalHealth>().unwrap(),
            MentalHealth::Anxiety
        );
        assert_eq!(
            "remote".parse::<WorkPreference>().unwrap(),
            WorkPreference::Remote
        );
    }

    #[test]
    fn enum_parsing_rejects_values_outside_the_set() {
        assert!("Tier-9".parse::<Tier>().is_err());
        assert!("Retired".parse::<PlacementStatus>().is_err());
        assert!("Stressed".parse::<MentalHealth>().is_err());
        assert!("Office".parse::<WorkPreference>().is_err());
    }

    #[test]
    fn draft_gets_a_fresh_id() {
        let a = StudentDraft::default().into_record();
        let b = StudentDraft::default().into_record();
        assert_ne!(a.id, b.id);
    }
}
