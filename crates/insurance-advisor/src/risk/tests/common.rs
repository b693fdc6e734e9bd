use crate::risk::domain::{ClientProfile, Region, Sex, Smoker};
use crate::risk::intake::ClientSubmission;

pub(super) fn submission() -> ClientSubmission {
    ClientSubmission {
        age: 25,
        bmi: 22.0,
        children: 0,
        sex: Sex::Female,
        smoker: Smoker::No,
        region: Region::Northeast,
    }
}

pub(super) fn profile(age: i32, bmi: f64, children: i32, smoker: Smoker) -> ClientProfile {
    ClientProfile {
        age,
        bmi,
        children,
        smoker,
        sex: Sex::Male,
        region: Region::Southwest,
    }
}
