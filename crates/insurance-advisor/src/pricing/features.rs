use serde::Serialize;

use crate::risk::{ClientProfile, Region, Sex, Smoker};

/// Column order the cost model was trained on.
pub const FEATURE_COLUMNS: [&str; 11] = [
    "age",
    "bmi",
    "children",
    "sex_female",
    "sex_male",
    "smoker_no",
    "smoker_yes",
    "region_northeast",
    "region_northwest",
    "region_southeast",
    "region_southwest",
];

/// One-hot encoded client row fed to the cost model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureVector {
    values: [f64; FEATURE_COLUMNS.len()],
}

impl FeatureVector {
    pub fn from_profile(profile: &ClientProfile) -> Self {
        let flag = |on: bool| if on { 1.0 } else { 0.0 };

        Self {
            values: [
                f64::from(profile.age),
                profile.bmi,
                f64::from(profile.children),
                flag(profile.sex == Sex::Female),
                flag(profile.sex == Sex::Male),
                flag(profile.smoker == Smoker::No),
                flag(profile.smoker == Smoker::Yes),
                flag(profile.region == Region::Northeast),
                flag(profile.region == Region::Northwest),
                flag(profile.region == Region::Southeast),
                flag(profile.region == Region::Southwest),
            ],
        }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn get(&self, column: &str) -> Option<f64> {
        FEATURE_COLUMNS
            .iter()
            .position(|name| *name == column)
            .map(|index| self.values[index])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        FEATURE_COLUMNS.iter().copied().zip(self.values.iter().copied())
    }
}
