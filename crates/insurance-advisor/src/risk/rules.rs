use super::domain::{ReimbursementTier, RiskFactorKind, Smoker};
use super::ScoreComponent;

pub(crate) const SMOKER_POINTS: u32 = 40;
pub(crate) const DEPENDENTS_THRESHOLD: i32 = 3;

pub(crate) const HIGH_RISK_FLOOR: u32 = 60;
pub(crate) const MODERATE_RISK_FLOOR: u32 = 30;

/// Apply the additive rubric. Each rule reads the raw inputs only, never the running total.
pub(crate) fn score_profile(
    age: i32,
    bmi: f64,
    children: i32,
    smoker: Smoker,
) -> (Vec<ScoreComponent>, u32) {
    let mut components = Vec::new();
    let mut total_score: u32 = 0;

    if smoker == Smoker::Yes {
        components.push(ScoreComponent {
            factor: RiskFactorKind::Smoking,
            points: SMOKER_POINTS,
            notes: "declared smoker".to_string(),
        });
        total_score += SMOKER_POINTS;
    }

    // NaN compares false everywhere and lands in the zero-point bracket.
    let bmi_bracket = if bmi > 35.0 {
        Some((30, "severe obesity (bmi > 35)"))
    } else if bmi > 30.0 {
        Some((20, "obesity (bmi > 30)"))
    } else if bmi > 25.0 {
        Some((10, "overweight (bmi > 25)"))
    } else {
        None
    };
    if let Some((points, label)) = bmi_bracket {
        components.push(ScoreComponent {
            factor: RiskFactorKind::BodyMassIndex,
            points,
            notes: format!("{label}, declared {bmi:.1}"),
        });
        total_score += points;
    }

    let age_bracket = if age > 60 {
        Some((25, "senior (age > 60)"))
    } else if age > 45 {
        Some((15, "middle age (age > 45)"))
    } else if age > 30 {
        Some((5, "young adult (age > 30)"))
    } else {
        None
    };
    if let Some((points, label)) = age_bracket {
        components.push(ScoreComponent {
            factor: RiskFactorKind::Age,
            points,
            notes: format!("{label}, declared {age}"),
        });
        total_score += points;
    }

    if children > DEPENDENTS_THRESHOLD {
        components.push(ScoreComponent {
            factor: RiskFactorKind::Dependents,
            points: 5,
            notes: format!("large family ({children} children)"),
        });
        total_score += 5;
    }

    (components, total_score)
}

/// First matching floor wins.
pub(crate) fn tier_for_score(score: u32) -> ReimbursementTier {
    if score >= HIGH_RISK_FLOOR {
        ReimbursementTier::R1
    } else if score >= MODERATE_RISK_FLOOR {
        ReimbursementTier::R2
    } else {
        ReimbursementTier::R3
    }
}
