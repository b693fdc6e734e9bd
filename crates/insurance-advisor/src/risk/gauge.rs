use serde::Serialize;

/// Presentation bucket for the reimbursement-rate gauge.
///
/// Buckets are keyed on the tier's rate, not on the risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RateBand {
    Fort,
    Moyen,
    Faible,
}

impl RateBand {
    pub const fn for_rate(rate: u8) -> Self {
        if rate >= 75 {
            RateBand::Fort
        } else if rate >= 50 {
            RateBand::Moyen
        } else {
            RateBand::Faible
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            RateBand::Fort => "FORT",
            RateBand::Moyen => "MOYEN",
            RateBand::Faible => "FAIBLE",
        }
    }

    pub const fn level(self) -> &'static str {
        match self {
            RateBand::Fort => "Élevé",
            RateBand::Moyen => "Modéré",
            RateBand::Faible => "Bas",
        }
    }
}

/// Data needed by a front end to draw the reimbursement gauge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RateGauge {
    pub value: u8,
    pub color: &'static str,
    pub rate_band: RateBand,
    pub level: &'static str,
}

impl RateGauge {
    pub fn new(rate: u8, color: &'static str) -> Self {
        let rate_band = RateBand::for_rate(rate);
        Self {
            value: rate,
            color,
            rate_band,
            level: rate_band.level(),
        }
    }
}
