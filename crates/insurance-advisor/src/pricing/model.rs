use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::features::{FeatureVector, FEATURE_COLUMNS};

/// Regression artifact mapping a client row to predicted yearly charges.
pub trait CostModel: Send + Sync {
    fn predict(&self, features: &FeatureVector) -> Result<f64, ModelError>;

    fn name(&self) -> &'static str;
}

/// Failures while loading or evaluating a cost model.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("unable to open model artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("model artifact is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("model artifact has no coefficient for column '{0}'")]
    MissingCoefficient(String),
    #[error("model artifact references unknown column '{0}'")]
    UnknownColumn(String),
    #[error("model produced a non-finite prediction")]
    NonFinitePrediction,
}

/// Serialized form of [`LinearCostModel`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModelArtifact {
    pub intercept: f64,
    pub coefficients: BTreeMap<String, f64>,
}

/// Linear regression over the one-hot feature layout, loaded from a JSON artifact.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearCostModel {
    intercept: f64,
    weights: [f64; FEATURE_COLUMNS.len()],
}

impl LinearCostModel {
    pub fn from_artifact(artifact: LinearModelArtifact) -> Result<Self, ModelError> {
        if let Some(unknown) = artifact
            .coefficients
            .keys()
            .find(|name| !FEATURE_COLUMNS.contains(&name.as_str()))
        {
            return Err(ModelError::UnknownColumn(unknown.clone()));
        }

        let mut weights = [0.0; FEATURE_COLUMNS.len()];
        for (slot, column) in weights.iter_mut().zip(FEATURE_COLUMNS) {
            *slot = *artifact
                .coefficients
                .get(column)
                .ok_or_else(|| ModelError::MissingCoefficient(column.to_string()))?;
        }

        Ok(Self {
            intercept: artifact.intercept,
            weights,
        })
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ModelError> {
        let artifact: LinearModelArtifact = serde_json::from_reader(reader)?;
        Self::from_artifact(artifact)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file))
    }
}

impl CostModel for LinearCostModel {
    fn predict(&self, features: &FeatureVector) -> Result<f64, ModelError> {
        let prediction = self.intercept
            + features
                .values()
                .iter()
                .zip(self.weights.iter())
                .map(|(value, weight)| value * weight)
                .sum::<f64>();

        if prediction.is_finite() {
            Ok(prediction)
        } else {
            Err(ModelError::NonFinitePrediction)
        }
    }

    fn name(&self) -> &'static str {
        "linear"
    }
}

/// Simulated pricing used for demonstrations when no trained artifact is deployed.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoCostModel;

impl DemoCostModel {
    const BASE_PRICE: f64 = 10_000.0;
    const PER_YEAR_OF_AGE: f64 = 100.0;
    const PER_BMI_POINT: f64 = 200.0;
    const SMOKER_SURCHARGE: f64 = 5_000.0;
    const PER_CHILD: f64 = 500.0;
}

impl CostModel for DemoCostModel {
    fn predict(&self, features: &FeatureVector) -> Result<f64, ModelError> {
        let column = |name: &str| features.get(name).unwrap_or_default();

        let prediction = Self::BASE_PRICE
            + column("age") * Self::PER_YEAR_OF_AGE
            + column("bmi") * Self::PER_BMI_POINT
            + column("smoker_yes") * Self::SMOKER_SURCHARGE
            + column("children") * Self::PER_CHILD;

        if prediction.is_finite() {
            Ok(prediction)
        } else {
            Err(ModelError::NonFinitePrediction)
        }
    }

    fn name(&self) -> &'static str {
        "demo"
    }
}
