use crate::infra::{parse_region, parse_sex, parse_smoker};
use clap::Args;
use insurance_advisor::config::AppConfig;
use insurance_advisor::error::AppError;
use insurance_advisor::pricing::{
    check_models, format_charges, ArtifactCheck, ModelRegistry, PricingError,
};
use insurance_advisor::risk::{
    read_client_records, ClientSubmission, Region, ReimbursementTier, RiskAssessment, Sex, Smoker,
};
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ClassifyArgs {
    /// Client age in years (18-100)
    #[arg(long)]
    pub(crate) age: i64,
    /// Body-mass index
    #[arg(long)]
    pub(crate) bmi: f64,
    /// Number of dependent children (0-20)
    #[arg(long, default_value_t = 0)]
    pub(crate) children: i64,
    /// Smoking status: yes or no
    #[arg(long, value_parser = parse_smoker)]
    pub(crate) smoker: Smoker,
    /// Sex, only used by the cost model
    #[arg(long, value_parser = parse_sex, default_value = "female")]
    pub(crate) sex: Sex,
    /// Region, only used by the cost model
    #[arg(long, value_parser = parse_region, default_value = "northeast")]
    pub(crate) region: Region,
    /// Estimate charges with the artifacts found in this directory
    #[arg(long)]
    pub(crate) model_dir: Option<PathBuf>,
    /// Print the assessment as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV file with age, sex, bmi, children, smoker and region columns
    #[arg(long)]
    pub(crate) csv: PathBuf,
}

#[derive(Args, Debug, Default)]
pub(crate) struct CheckModelsArgs {
    /// Models directory (defaults to APP_MODEL_DIR)
    #[arg(long)]
    pub(crate) dir: Option<PathBuf>,
}

pub(crate) fn run_classify(args: ClassifyArgs) -> Result<(), AppError> {
    let ClassifyArgs {
        age,
        bmi,
        children,
        smoker,
        sex,
        region,
        model_dir,
        json,
    } = args;

    let profile = ClientSubmission {
        age,
        bmi,
        children,
        sex,
        smoker,
        region,
    }
    .validate()?;
    let assessment = profile.assess();

    let charges = match model_dir {
        Some(dir) => {
            let registry = ModelRegistry::load(dir, false);
            Some(registry.estimate_charges(&profile)?)
        }
        None => None,
    };

    if json {
        let payload = serde_json::json!({
            "predicted_charges": charges.map(format_charges),
            "risk_data": &assessment,
            "gauge": assessment.gauge(),
        });
        println!("{payload:#}");
    } else {
        print!("{}", render_assessment(&assessment, charges));
    }

    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let file = File::open(&args.csv)?;
    let records = read_client_records(BufReader::new(file))?;

    println!("Batch classification: {}", args.csv.display());
    print!("{}", render_batch(&records));
    Ok(())
}

pub(crate) fn run_check_models(
    args: CheckModelsArgs,
    config: &AppConfig,
) -> Result<(), AppError> {
    let dir = args
        .dir
        .unwrap_or_else(|| config.models.directory.clone());

    let checks = check_models(&dir);
    println!("Model check: {}", dir.display());
    print!("{}", render_checks(&checks));

    let failing = checks.iter().filter(|check| !check.is_ready()).count();
    if failing > 0 {
        return Err(PricingError::Unavailable(format!(
            "{failing} artifact(s) missing or unreadable in {}",
            dir.display()
        ))
        .into());
    }

    println!("\nAll pricing artifacts are ready.");
    Ok(())
}

fn render_assessment(assessment: &RiskAssessment, charges: Option<f64>) -> String {
    let mut out = String::new();

    if let Some(amount) = charges {
        let _ = writeln!(out, "Predicted charges: {}", format_charges(amount));
    }
    let _ = writeln!(
        out,
        "Risk score: {} -> {} ({})",
        assessment.score,
        assessment.tier.code(),
        assessment.label
    );
    let gauge = assessment.gauge();
    let _ = writeln!(
        out,
        "Reimbursement: {}% ({} / {})",
        assessment.rate,
        gauge.rate_band.label(),
        gauge.level
    );
    let _ = writeln!(out, "Pack: {}", assessment.pack_name);
    let _ = writeln!(out, "Profile: {}", assessment.profile_label);
    let _ = writeln!(out, "Client type: {}", assessment.client_type);
    let _ = writeln!(out, "Description: {}", assessment.description);

    let _ = writeln!(out, "\nCoverage");
    for feature in &assessment.features {
        let _ = writeln!(out, "- {feature}");
    }

    if assessment.components.is_empty() {
        let _ = writeln!(out, "\nScore breakdown: no risk factors");
    } else {
        let _ = writeln!(out, "\nScore breakdown");
        for component in &assessment.components {
            let _ = writeln!(
                out,
                "- {:?}: +{} ({})",
                component.factor, component.points, component.notes
            );
        }
    }

    out
}

fn render_batch(records: &[ClientSubmission]) -> String {
    let mut out = String::new();
    let mut tiers: BTreeMap<ReimbursementTier, usize> = BTreeMap::new();
    let mut rejected = 0usize;

    for (index, record) in records.iter().enumerate() {
        let row = index + 1;
        match record.validate() {
            Ok(profile) => {
                let assessment = profile.assess();
                *tiers.entry(assessment.tier).or_default() += 1;
                let _ = writeln!(
                    out,
                    "- row {row} | age {} | bmi {:.1} | children {} | smoker {} | {} {}% | {} | {}",
                    profile.age,
                    profile.bmi,
                    profile.children,
                    profile.smoker.label(),
                    assessment.tier.code(),
                    assessment.rate,
                    assessment.pack_name,
                    assessment.profile_label
                );
            }
            Err(err) => {
                rejected += 1;
                let _ = writeln!(out, "- row {row} | rejected: {err}");
            }
        }
    }

    let _ = writeln!(out, "\nTier distribution");
    for (tier, count) in &tiers {
        let _ = writeln!(out, "- {}: {count}", tier.code());
    }
    let _ = writeln!(out, "Rejected rows: {rejected}");

    out
}

fn render_checks(checks: &[ArtifactCheck]) -> String {
    let mut out = String::new();

    for check in checks {
        let line = match (check.present, &check.error) {
            (false, _) => format!("- {}: missing", check.file),
            (true, Some(err)) => format!("- {}: present but unreadable ({err})", check.file),
            (true, None) => format!(
                "- {}: ready ({} model)",
                check.file,
                check.model.unwrap_or("unknown")
            ),
        };
        let _ = writeln!(out, "{line}");
    }

    out
}
