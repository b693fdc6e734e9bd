use super::domain::Smoker;

pub(crate) fn pack_name(age: i32, bmi: f64) -> String {
    let level = if bmi > 35.0 {
        "VIP"
    } else if bmi > 30.0 {
        "Premium Plus"
    } else if bmi > 25.0 {
        "Premium"
    } else {
        "Standard"
    };

    format!("{level} {}", age_word(age))
}

pub(crate) fn profile_label(age: i32, bmi: f64) -> String {
    let bmi_label = if bmi > 35.0 {
        "Obésité Sévère"
    } else if bmi > 30.0 {
        "Obésité"
    } else if bmi > 25.0 {
        "Surpoids"
    } else {
        "Poids Normal"
    };

    format!("{bmi_label} + {}", age_word(age))
}

pub(crate) const fn client_type(smoker: Smoker) -> &'static str {
    match smoker {
        Smoker::Yes => "FUMEURS",
        Smoker::No => "NON-FUMEURS",
    }
}

// Age thresholds here (55/40) differ from the scoring brackets (60/45/30).
fn age_word(age: i32) -> &'static str {
    if age > 55 {
        "Senior"
    } else if age > 40 {
        "Adulte"
    } else {
        "Jeune"
    }
}
