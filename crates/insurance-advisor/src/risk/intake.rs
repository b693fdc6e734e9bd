use std::io::Read;

use serde::{Deserialize, Serialize};

use super::domain::{ClientProfile, Region, Sex, Smoker};
use super::{classify, RiskAssessment};

pub const MIN_AGE: i64 = 18;
pub const MAX_AGE: i64 = 100;
pub const MAX_CHILDREN: i64 = 20;

/// Raw client attributes as submitted by the web form or a CSV export.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClientSubmission {
    pub age: i64,
    pub bmi: f64,
    pub children: i64,
    pub sex: Sex,
    pub smoker: Smoker,
    pub region: Region,
}

/// Subset of a submission needed to resolve a pack. Sex and region never
/// reach the scorer, so they are not requested.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PackRequest {
    pub age: i64,
    pub bmi: f64,
    pub children: i64,
    pub smoker: Smoker,
}

/// Rejections raised before a submission reaches the scorer.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("L'âge doit être entre 18 et 100 ans")]
    AgeOutOfRange { age: i64 },
    #[error("Nombre d'enfants invalide")]
    InvalidChildren { children: i64 },
    #[error("IMC invalide: {bmi}")]
    InvalidBmi { bmi: f64 },
    #[error("unable to read client records: {0}")]
    Csv(#[from] csv::Error),
}

impl ClientSubmission {
    /// Enforce the intake bounds and produce a profile the scorer can trust.
    pub fn validate(self) -> Result<ClientProfile, IntakeError> {
        check_bounds(self.age, self.bmi, self.children)?;

        Ok(ClientProfile {
            age: self.age as i32,
            bmi: self.bmi,
            children: self.children as i32,
            smoker: self.smoker,
            sex: self.sex,
            region: self.region,
        })
    }
}

impl PackRequest {
    /// Apply the same bounds as a full submission, then classify.
    pub fn assess(self) -> Result<RiskAssessment, IntakeError> {
        check_bounds(self.age, self.bmi, self.children)?;
        Ok(classify(
            self.age as i32,
            self.bmi,
            self.children as i32,
            self.smoker,
        ))
    }
}

fn check_bounds(age: i64, bmi: f64, children: i64) -> Result<(), IntakeError> {
    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        return Err(IntakeError::AgeOutOfRange { age });
    }
    if !(0..=MAX_CHILDREN).contains(&children) {
        return Err(IntakeError::InvalidChildren { children });
    }
    if !bmi.is_finite() || bmi <= 0.0 {
        return Err(IntakeError::InvalidBmi { bmi });
    }
    Ok(())
}

/// Read client rows from a headered CSV (age, sex, bmi, children, smoker, region).
///
/// Additional columns such as `charges` are ignored.
pub fn read_client_records<R: Read>(reader: R) -> Result<Vec<ClientSubmission>, IntakeError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for row in csv_reader.deserialize::<ClientSubmission>() {
        records.push(row?);
    }

    Ok(records)
}
