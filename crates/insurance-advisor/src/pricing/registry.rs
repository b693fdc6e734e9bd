use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{error, info, warn};

use super::features::FeatureVector;
use super::model::{CostModel, DemoCostModel, LinearCostModel, ModelError};
use crate::risk::ClientProfile;

pub const COST_MODEL_FILE: &str = "cost_model.json";

/// Artifacts that must be present in the models directory.
pub const REQUIRED_ARTIFACTS: [&str; 1] = [COST_MODEL_FILE];

/// Where the active cost model came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelSource {
    Artifact,
    Demo,
    Injected,
    Unavailable,
}

/// Error surfaced when charges cannot be estimated.
#[derive(Debug, thiserror::Error)]
pub enum PricingError {
    #[error("cost model unavailable: {0}")]
    Unavailable(String),
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Loaded-once holder for the cost model.
///
/// A failed load leaves the registry in the unavailable state instead of aborting startup;
/// nothing mutates it afterwards.
#[derive(Clone)]
pub struct ModelRegistry {
    cost_model: Option<Arc<dyn CostModel>>,
    source: ModelSource,
    unavailable_reason: Option<String>,
    loaded_at: DateTime<Utc>,
}

impl fmt::Debug for ModelRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelRegistry")
            .field("model", &self.cost_model.as_ref().map(|model| model.name()))
            .field("source", &self.source)
            .field("unavailable_reason", &self.unavailable_reason)
            .field("loaded_at", &self.loaded_at)
            .finish()
    }
}

/// Snapshot reported by health endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistryStatus {
    pub models_loaded: bool,
    pub source: ModelSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub loaded_at: DateTime<Utc>,
}

impl ModelRegistry {
    /// Load the cost model from `dir`, optionally falling back to simulated pricing.
    pub fn load(dir: impl AsRef<Path>, demo_fallback: bool) -> Self {
        let dir = dir.as_ref();
        info!(dir = %dir.display(), "loading pricing models");

        match load_cost_model(dir) {
            Ok(model) => {
                info!(model = model.name(), "pricing models loaded");
                Self::from_parts(Some(Arc::new(model)), ModelSource::Artifact, None)
            }
            Err(reason) if demo_fallback => {
                warn!(%reason, "pricing models unavailable, serving simulated charges");
                Self::from_parts(
                    Some(Arc::new(DemoCostModel)),
                    ModelSource::Demo,
                    Some(reason),
                )
            }
            Err(reason) => {
                error!(%reason, "pricing models unavailable");
                Self::unavailable(reason)
            }
        }
    }

    pub fn with_model(model: Arc<dyn CostModel>) -> Self {
        Self::from_parts(Some(model), ModelSource::Injected, None)
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::from_parts(None, ModelSource::Unavailable, Some(reason.into()))
    }

    fn from_parts(
        cost_model: Option<Arc<dyn CostModel>>,
        source: ModelSource,
        unavailable_reason: Option<String>,
    ) -> Self {
        Self {
            cost_model,
            source,
            unavailable_reason,
            loaded_at: Utc::now(),
        }
    }

    /// True only when a trained or injected model is serving predictions.
    pub fn models_loaded(&self) -> bool {
        matches!(self.source, ModelSource::Artifact | ModelSource::Injected)
    }

    pub fn can_price(&self) -> bool {
        self.cost_model.is_some()
    }

    pub fn source(&self) -> ModelSource {
        self.source
    }

    pub fn status(&self) -> RegistryStatus {
        RegistryStatus {
            models_loaded: self.models_loaded(),
            source: self.source,
            model: self.cost_model.as_ref().map(|model| model.name()),
            reason: self.unavailable_reason.clone(),
            loaded_at: self.loaded_at,
        }
    }

    pub fn estimate_charges(&self, profile: &ClientProfile) -> Result<f64, PricingError> {
        let model = self.cost_model.as_ref().ok_or_else(|| {
            PricingError::Unavailable(
                self.unavailable_reason
                    .clone()
                    .unwrap_or_else(|| "no cost model configured".to_string()),
            )
        })?;

        let features = FeatureVector::from_profile(profile);
        Ok(model.predict(&features)?)
    }
}

fn load_cost_model(dir: &Path) -> Result<LinearCostModel, String> {
    if !dir.is_dir() {
        return Err(format!("models directory '{}' not found", dir.display()));
    }

    for artifact in REQUIRED_ARTIFACTS {
        let path = dir.join(artifact);
        if !path.is_file() {
            return Err(format!("missing artifact {}", path.display()));
        }
    }

    LinearCostModel::from_path(dir.join(COST_MODEL_FILE)).map_err(|err| err.to_string())
}

/// Per-artifact diagnostic produced by [`check_models`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactCheck {
    pub file: &'static str,
    pub path: PathBuf,
    pub present: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ArtifactCheck {
    pub fn is_ready(&self) -> bool {
        self.present && self.error.is_none()
    }
}

/// Inspect every required artifact without building a registry.
pub fn check_models(dir: impl AsRef<Path>) -> Vec<ArtifactCheck> {
    let dir = dir.as_ref();

    REQUIRED_ARTIFACTS
        .into_iter()
        .map(|file| {
            let path = dir.join(file);
            if !path.is_file() {
                return ArtifactCheck {
                    file,
                    path,
                    present: false,
                    model: None,
                    error: None,
                };
            }

            let (model, error) = match LinearCostModel::from_path(&path) {
                Ok(model) => (Some(model.name()), None),
                Err(err) => (None, Some(err.to_string())),
            };

            ArtifactCheck {
                file,
                path,
                present: true,
                model,
                error,
            }
        })
        .collect()
}
