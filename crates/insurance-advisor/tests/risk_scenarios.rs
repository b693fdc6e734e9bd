use insurance_advisor::risk::{
    classify, ClientSubmission, RateBand, ReimbursementTier, Region, Sex, Smoker,
};

fn submission(age: i64, bmi: f64, children: i64, smoker: Smoker) -> ClientSubmission {
    ClientSubmission {
        age,
        bmi,
        children,
        sex: Sex::Female,
        smoker,
        region: Region::Northwest,
    }
}

#[test]
fn validated_profiles_flow_through_the_classifier() {
    let scenarios = [
        (25, 22.0, 0, Smoker::No, ReimbursementTier::R3, 85, "Standard Jeune"),
        (50, 32.0, 1, Smoker::No, ReimbursementTier::R2, 65, "Premium Plus Adulte"),
        (65, 36.0, 2, Smoker::Yes, ReimbursementTier::R1, 45, "VIP Senior"),
        (40, 27.0, 4, Smoker::No, ReimbursementTier::R3, 85, "Premium Jeune"),
    ];

    for (age, bmi, children, smoker, tier, rate, pack) in scenarios {
        let profile = submission(age, bmi, children, smoker)
            .validate()
            .expect("scenario is within intake bounds");
        let assessment = profile.assess();

        assert_eq!(assessment.tier, tier, "age {age} bmi {bmi}");
        assert_eq!(assessment.rate, rate);
        assert_eq!(assessment.pack_name, pack);
    }
}

#[test]
fn assessment_serializes_primitive_fields() {
    let assessment = classify(65, 36.0, 2, Smoker::Yes);
    let value = serde_json::to_value(&assessment).expect("assessment serializes");

    assert_eq!(value["tier"], "R1");
    assert_eq!(value["rate"], 45);
    assert_eq!(value["label"], "Risque Élevé");
    assert_eq!(value["color"], "#FF5252");
    assert_eq!(value["client_type"], "FUMEURS");
    assert_eq!(value["profile_label"], "Obésité Sévère + Senior");
    assert_eq!(value["score"], 95);
    assert_eq!(value["features"].as_array().map(Vec::len), Some(5));
    assert_eq!(value["components"][0]["factor"], "smoking");
}

#[test]
fn rate_gauge_uses_tier_rate_not_score() {
    let cases = [
        (classify(25, 22.0, 0, Smoker::No), RateBand::Fort, "Élevé"),
        (classify(50, 32.0, 1, Smoker::No), RateBand::Moyen, "Modéré"),
        (classify(65, 36.0, 2, Smoker::Yes), RateBand::Faible, "Bas"),
    ];

    for (assessment, band, level) in cases {
        let gauge = assessment.gauge();
        assert_eq!(gauge.rate_band, band);
        assert_eq!(gauge.level, level);
        assert_eq!(gauge.value, assessment.rate);
        assert_eq!(gauge.color, assessment.color);
    }
}

#[test]
fn classification_is_safe_across_threads() {
    let handles: Vec<_> = (0..8)
        .map(|offset| std::thread::spawn(move || classify(30 + offset * 5, 28.0, 1, Smoker::No)))
        .collect();

    for (offset, handle) in handles.into_iter().enumerate() {
        let assessment = handle.join().expect("thread completes");
        let expected = classify(30 + offset as i32 * 5, 28.0, 1, Smoker::No);
        assert_eq!(assessment, expected);
    }
}
