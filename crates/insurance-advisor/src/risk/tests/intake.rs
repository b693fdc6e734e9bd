use super::common::*;
use crate::risk::domain::{Region, Sex, Smoker};
use crate::risk::intake::{read_client_records, IntakeError, PackRequest};
use crate::risk::ReimbursementTier;

#[test]
fn valid_submission_becomes_profile() {
    let profile = submission().validate().expect("submission is valid");

    assert_eq!(profile.age, 25);
    assert_eq!(profile.children, 0);
    assert_eq!(profile.smoker, Smoker::No);
    assert_eq!(profile.region, Region::Northeast);
}

#[test]
fn age_bounds_are_inclusive() {
    for age in [18, 100] {
        let mut candidate = submission();
        candidate.age = age;
        assert!(candidate.validate().is_ok(), "age {age} accepted");
    }

    for age in [17, 101, -1] {
        let mut candidate = submission();
        candidate.age = age;
        match candidate.validate() {
            Err(IntakeError::AgeOutOfRange { age: rejected }) => assert_eq!(rejected, age),
            other => panic!("expected age rejection, got {other:?}"),
        }
    }
}

#[test]
fn children_outside_range_are_rejected() {
    let mut candidate = submission();
    candidate.children = 21;
    let err = candidate.validate().expect_err("too many children");
    assert_eq!(err.to_string(), "Nombre d'enfants invalide");

    candidate.children = -1;
    assert!(matches!(
        candidate.validate(),
        Err(IntakeError::InvalidChildren { children: -1 })
    ));

    candidate.children = 20;
    assert!(candidate.validate().is_ok());
}

#[test]
fn non_positive_or_non_finite_bmi_is_rejected() {
    for bmi in [0.0, -3.0, f64::NAN, f64::INFINITY] {
        let mut candidate = submission();
        candidate.bmi = bmi;
        assert!(matches!(
            candidate.validate(),
            Err(IntakeError::InvalidBmi { .. })
        ));
    }
}

#[test]
fn age_error_message_is_user_facing() {
    let mut candidate = submission();
    candidate.age = 12;
    let err = candidate.validate().expect_err("minor rejected");
    assert_eq!(err.to_string(), "L'âge doit être entre 18 et 100 ans");
}

#[test]
fn submission_deserializes_lowercase_categories() {
    let payload = r#"{"age":40,"bmi":27.5,"children":4,"sex":"male","smoker":"yes","region":"southeast"}"#;
    let parsed: crate::risk::ClientSubmission =
        serde_json::from_str(payload).expect("payload parses");

    assert_eq!(parsed.sex, Sex::Male);
    assert_eq!(parsed.smoker, Smoker::Yes);
    assert_eq!(parsed.region, Region::Southeast);

    let rejected = serde_json::from_str::<crate::risk::ClientSubmission>(
        r#"{"age":40,"bmi":27.5,"children":4,"sex":"male","smoker":"sometimes","region":"southeast"}"#,
    );
    assert!(rejected.is_err());
}

#[test]
fn pack_request_needs_only_scoring_fields() {
    let payload = r#"{"age":30,"bmi":22,"children":0,"smoker":"no"}"#;
    let request: PackRequest = serde_json::from_str(payload).expect("payload parses");

    let assessment = request.assess().expect("request is valid");

    assert_eq!(assessment.tier, ReimbursementTier::R3);
    assert_eq!(assessment.pack_name, "Standard Jeune");
}

#[test]
fn pack_request_shares_submission_bounds() {
    let request = PackRequest {
        age: 30,
        bmi: 22.0,
        children: 21,
        smoker: Smoker::No,
    };
    assert!(matches!(
        request.assess(),
        Err(IntakeError::InvalidChildren { children: 21 })
    ));

    let minor = PackRequest { age: 17, ..request };
    assert!(matches!(
        minor.assess(),
        Err(IntakeError::AgeOutOfRange { age: 17 })
    ));
}

#[test]
fn csv_records_ignore_extra_columns() {
    let data = "age,sex,bmi,children,smoker,region,charges\n\
                19,female,27.9,0,yes,southwest,16884.924\n\
                18, male ,33.77,1,no,southeast,1725.5523\n";

    let records = read_client_records(data.as_bytes()).expect("csv parses");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].smoker, Smoker::Yes);
    assert_eq!(records[1].sex, Sex::Male);
    assert_eq!(records[1].children, 1);
}

#[test]
fn csv_with_unknown_category_fails() {
    let data = "age,sex,bmi,children,smoker,region\n30,female,22.0,0,maybe,northeast\n";

    assert!(matches!(
        read_client_records(data.as_bytes()),
        Err(IntakeError::Csv(_))
    ));
}
