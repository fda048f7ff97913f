use serde::Serialize;

use crate::stats::Kpis;

pub const SKILL_TRAINING_WEIGHT: f64 = 0.15;
pub const MENTORSHIP_WEIGHT: f64 = 0.12;
pub const LAB_FUNDING_WEIGHT: f64 = 0.08;

/// What-if policy levers, each an investment level from 0 to 100.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolicyLevers {
    pub skill_training: u32,
    pub mentorship: u32,
    pub lab_funding: u32,
}

impl PolicyLevers {
    /// Combined uplift in percentage points. Positions beyond 100 are clamped.
    pub fn total_boost(&self) -> f64 {
        self.skill_training.min(100) as f64 * SKILL_TRAINING_WEIGHT
            + self.mentorship.min(100) as f64 * MENTORSHIP_WEIGHT
            + self.lab_funding.min(100) as f64 * LAB_FUNDING_WEIGHT
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Projection {
    pub placement_rate: f64,
    pub avg_salary_lakh: f64,
}

/// Applies the lever uplift to current KPIs: additive on the placement rate
/// (capped at 100%), proportional on the average salary.
pub fn project(current: &Kpis, levers: &PolicyLevers) -> Projection {
    let boost = levers.total_boost();
    Projection {
        placement_rate: (current.placement_rate + boost).min(100.0),
        avg_salary_lakh: current.avg_salary_lakh * (1.0 + boost / 100.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn baseline(rate: f64, salary: f64) -> Kpis {
        Kpis {
            total: 100,
            placement_rate: rate,
            avg_salary_lakh: salary,
            highest_salary_lakh: salary * 2.0,
        }
    }

    #[test]
    fn zero_levers_change_nothing() {
        let current = baseline(62.5, 14.0);
        let projection = project(&current, &PolicyLevers::default());
        assert_eq!(projection.placement_rate, 62.5);
        assert_eq!(projection.avg_salary_lakh, 14.0);
    }

    #[test]
    fn full_levers_add_their_combined_weight() {
        let levers = PolicyLevers {
            skill_training: 100,
            mentorship: 100,
            lab_funding: 100,
        };
        assert!((levers.total_boost() - 35.0).abs() < 1e-9);

        let projection = project(&baseline(50.0, 10.0), &levers);
        assert!((projection.placement_rate - 85.0).abs() < 1e-9);
        assert!((projection.avg_salary_lakh - 13.5).abs() < 1e-9);
    }

    #[test]
    fn placement_rate_caps_at_one_hundred() {
        let levers = PolicyLevers {
            skill_training: 100,
            mentorship: 100,
            lab_funding: 100,
        };
        let projection = project(&baseline(90.0, 10.0), &levers);
        assert_eq!(projection.placement_rate, 100.0);
    }

    #[test]
    fn lever_positions_clamp_to_their_range() {
        let levers = PolicyLevers {
            skill_training: 250,
            mentorship: 0,
            lab_funding: 0,
        };
        assert!((levers.total_boost() - 15.0).abs() < 1e-9);
    }
}
