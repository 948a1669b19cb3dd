//! Client-side telemetry init (dev-friendly pretty logs by default).

use data_runtime::configs::telemetry::TelemetryCfg;

/// Install the global subscriber. Safe to call more than once; later calls are ignored.
pub fn init_client_telemetry(cfg: &TelemetryCfg) {
    use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};
    let filter = cfg.log_level.clone().unwrap_or_else(|| "info".to_string());
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = if cfg.pretty.unwrap_or(true) {
        fmt::layer().pretty().boxed()
    } else {
        fmt::layer().compact().boxed()
    };
    let registry = tracing_subscriber::registry().with(filter).with(fmt_layer);
    let _ = registry.try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn init_twice_is_harmless() {
        let cfg = TelemetryCfg {
            log_level: Some("not a valid ((filter".into()),
            pretty: Some(false),
        };
        init_client_telemetry(&cfg);
        init_client_telemetry(&TelemetryCfg::default());
    }
}
