use insurance_advisor::pricing::ModelRegistry;
use insurance_advisor::risk::{Region, Sex, Smoker};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) models: Arc<ModelRegistry>,
}

pub(crate) fn parse_smoker(raw: &str) -> Result<Smoker, String> {
    Smoker::parse(raw).ok_or_else(|| format!("expected 'yes' or 'no', found '{raw}'"))
}

pub(crate) fn parse_sex(raw: &str) -> Result<Sex, String> {
    Sex::parse(raw).ok_or_else(|| format!("expected 'female' or 'male', found '{raw}'"))
}

pub(crate) fn parse_region(raw: &str) -> Result<Region, String> {
    Region::parse(raw).ok_or_else(|| {
        format!("expected one of northeast, northwest, southeast, southwest, found '{raw}'")
    })
}

#[cfg(test)]
pub(crate) mod testing {
    use super::AppState;
    use insurance_advisor::pricing::ModelRegistry;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;

    pub(crate) fn state_with(models: ModelRegistry, ready: bool) -> AppState {
        AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
            models: Arc::new(models),
        }
    }
}
