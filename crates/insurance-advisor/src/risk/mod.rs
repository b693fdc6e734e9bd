//! Deterministic risk scoring, reimbursement tiering and pack naming.
//!
//! Everything here is a pure function of the client attributes: no state, no I/O.
//! Bounds checking happens in [`intake`] before a profile is built; the scorer
//! accepts any numeric input and lets out-of-range values fall through to the
//! lowest-weight bracket of each rule.

pub mod domain;
pub mod gauge;
pub mod intake;
mod labels;
mod rules;

#[cfg(test)]
mod tests;

pub use domain::{
    ClientProfile, Region, ReimbursementTier, RiskFactorKind, Sex, Smoker, TierMetadata,
};
pub use gauge::{RateBand, RateGauge};
pub use intake::{read_client_records, ClientSubmission, IntakeError, PackRequest};

use serde::{Deserialize, Serialize};

/// Points awarded by a single rule, kept for audit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: RiskFactorKind,
    pub points: u32,
    pub notes: String,
}

/// Complete classification result handed to the web layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub tier: ReimbursementTier,
    pub score: u32,
    pub rate: u8,
    pub label: String,
    pub color: String,
    pub description: String,
    pub features: Vec<String>,
    pub pack_name: String,
    pub client_type: String,
    pub profile_label: String,
    pub reimbursement_text: String,
    pub components: Vec<ScoreComponent>,
}

impl RiskAssessment {
    pub fn gauge(&self) -> RateGauge {
        RateGauge::new(self.rate, self.tier.metadata().color)
    }
}

/// Score a client and derive the tier, tier terms, pack name and profile label.
///
/// Total over every input, including negative or NaN values.
pub fn classify(age: i32, bmi: f64, children: i32, smoker: Smoker) -> RiskAssessment {
    let (components, score) = rules::score_profile(age, bmi, children, smoker);
    let tier = rules::tier_for_score(score);
    let metadata = tier.metadata();

    RiskAssessment {
        tier,
        score,
        rate: metadata.rate,
        label: metadata.label.to_string(),
        color: metadata.color.to_string(),
        description: metadata.description.to_string(),
        features: metadata
            .features
            .iter()
            .map(|feature| feature.to_string())
            .collect(),
        pack_name: labels::pack_name(age, bmi),
        client_type: labels::client_type(smoker).to_string(),
        profile_label: labels::profile_label(age, bmi),
        reimbursement_text: format!("Remboursement {}%", metadata.rate),
        components,
    }
}

impl ClientProfile {
    pub fn assess(&self) -> RiskAssessment {
        classify(self.age, self.bmi, self.children, self.smoker)
    }
}
