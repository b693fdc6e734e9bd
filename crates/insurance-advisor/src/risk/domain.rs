use serde::{Deserialize, Serialize};

/// Declared smoking status, the only categorical input that moves the risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Smoker {
    Yes,
    No,
}

impl Smoker {
    pub const fn label(self) -> &'static str {
        match self {
            Smoker::Yes => "yes",
            Smoker::No => "no",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "yes" => Some(Smoker::Yes),
            "no" => Some(Smoker::No),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Female,
    Male,
}

impl Sex {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "female" => Some(Sex::Female),
            "male" => Some(Sex::Male),
            _ => None,
        }
    }
}

/// Residential region as recorded in the underwriting dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Northeast,
    Northwest,
    Southeast,
    Southwest,
}

impl Region {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "northeast" => Some(Region::Northeast),
            "northwest" => Some(Region::Northwest),
            "southeast" => Some(Region::Southeast),
            "southwest" => Some(Region::Southwest),
            _ => None,
        }
    }
}

/// Client attributes after intake validation.
///
/// `sex` and `region` feed the cost model only; the risk rules never read them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClientProfile {
    pub age: i32,
    pub bmi: f64,
    pub children: i32,
    pub smoker: Smoker,
    pub sex: Sex,
    pub region: Region,
}

/// Reimbursement tier, ordered from highest risk (R1) to lowest risk (R3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ReimbursementTier {
    R1,
    R2,
    R3,
}

impl ReimbursementTier {
    pub const fn code(self) -> &'static str {
        match self {
            ReimbursementTier::R1 => "R1",
            ReimbursementTier::R2 => "R2",
            ReimbursementTier::R3 => "R3",
        }
    }

    pub fn metadata(self) -> &'static TierMetadata {
        match self {
            ReimbursementTier::R3 => &LOW_RISK,
            ReimbursementTier::R2 => &MODERATE_RISK,
            ReimbursementTier::R1 => &HIGH_RISK,
        }
    }
}

/// Fixed commercial terms attached to each tier.
#[derive(Debug, PartialEq, Eq)]
pub struct TierMetadata {
    pub rate: u8,
    pub label: &'static str,
    pub color: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

static LOW_RISK: TierMetadata = TierMetadata {
    rate: 85,
    label: "Faible Risque",
    color: "#1DB954",
    description: "Profil optimal - Couverture complète",
    features: &[
        "fort remboursement",
        "Médecine courante et spécialisée",
        "Hospitalisation complète",
        "Pharmacie à 90%",
        "Dentaire et optique inclus",
    ],
};

static MODERATE_RISK: TierMetadata = TierMetadata {
    rate: 65,
    label: "Risque Modéré",
    color: "#FFA726",
    description: "Profil standard - Bonne couverture",
    features: &[
        "remboursement moyen",
        "Médecine courante étendue",
        "Hospitalisation partielle",
        "Pharmacie à 70%",
        "Dentaire de base",
    ],
};

static HIGH_RISK: TierMetadata = TierMetadata {
    rate: 45,
    label: "Risque Élevé",
    color: "#FF5252",
    description: "Profil nécessitant une vigilance particulière",
    features: &[
        "faible remboursement",
        "Médecine courante limitée",
        "Hospitalisation d'urgence",
        "Pharmacie à 50%",
        "Soins essentiels",
    ],
};

/// Inputs that can contribute points to the risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactorKind {
    Smoking,
    BodyMassIndex,
    Age,
    Dependents,
}
