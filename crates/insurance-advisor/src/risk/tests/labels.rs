use crate::risk::classify;
use crate::risk::domain::Smoker;

#[test]
fn pack_names_combine_bmi_level_and_age_suffix() {
    let cases = [
        (25, 22.0, "Standard Jeune"),
        (41, 25.5, "Premium Adulte"),
        (55, 30.5, "Premium Plus Adulte"),
        (56, 35.5, "VIP Senior"),
        (40, 35.0, "Premium Plus Jeune"),
    ];

    for (age, bmi, expected) in cases {
        assert_eq!(classify(age, bmi, 0, Smoker::No).pack_name, expected);
    }
}

#[test]
fn profile_labels_use_descriptive_vocabulary() {
    let cases = [
        (25, 25.0, "Poids Normal + Jeune"),
        (45, 26.0, "Surpoids + Adulte"),
        (60, 31.0, "Obésité + Senior"),
        (30, 40.0, "Obésité Sévère + Jeune"),
    ];

    for (age, bmi, expected) in cases {
        assert_eq!(classify(age, bmi, 0, Smoker::No).profile_label, expected);
    }
}

#[test]
fn pack_and_profile_ignore_smoking_and_children() {
    let baseline = classify(50, 32.0, 0, Smoker::No);

    for smoker in [Smoker::Yes, Smoker::No] {
        for children in [0, 2, 4, 20] {
            let assessment = classify(50, 32.0, children, smoker);
            assert_eq!(assessment.pack_name, baseline.pack_name);
            assert_eq!(assessment.profile_label, baseline.profile_label);
        }
    }

    // Tier changes while the pack does not.
    assert_ne!(classify(50, 32.0, 4, Smoker::Yes).tier, baseline.tier);
}

#[test]
fn client_type_echoes_smoker_flag() {
    assert_eq!(classify(65, 36.0, 5, Smoker::Yes).client_type, "FUMEURS");
    assert_eq!(classify(65, 36.0, 5, Smoker::No).client_type, "NON-FUMEURS");
}
