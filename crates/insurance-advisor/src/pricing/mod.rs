//! Cost estimation through a pluggable regression model.

mod features;
mod format;
mod model;
mod registry;

pub use features::{FeatureVector, FEATURE_COLUMNS};
pub use format::format_charges;
pub use model::{CostModel, DemoCostModel, LinearCostModel, LinearModelArtifact, ModelError};
pub use registry::{
    check_models, ArtifactCheck, ModelRegistry, ModelSource, PricingError, RegistryStatus,
    COST_MODEL_FILE, REQUIRED_ARTIFACTS,
};
