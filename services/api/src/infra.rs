use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use purchase_advisor::decision::Dimension;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

/// Parses a `CODE=VALUE` pair such as `A1=3`. The value is range-checked
/// later, together with ratings from every other source.
pub(crate) fn parse_rating_arg(raw: &str) -> Result<(Dimension, u8), String> {
    let (code, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected CODE=VALUE (e.g. A1=3), got '{raw}'"))?;
    let dimension = code
        .trim()
        .parse::<Dimension>()
        .map_err(|err| err.to_string())?;
    let value = value
        .trim()
        .parse::<u8>()
        .map_err(|err| format!("rating for {} must be a number 0-5 ({err})", dimension.code()))?;
    Ok((dimension, value))
}
