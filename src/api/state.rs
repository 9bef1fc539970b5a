//! Application state for Axum handlers.

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;

use crate::config::AppConfig;
use crate::service::GeneratorService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// ID generator form service.
    pub generator: Arc<GeneratorService>,
    /// Prometheus handle, when a recorder is installed.
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create a new application state without a metrics recorder.
    pub fn new(config: Arc<AppConfig>) -> Self {
        let generator = Arc::new(GeneratorService::new(&config.form));

        Self {
            config,
            generator,
            metrics: None,
        }
    }

    /// Attach an installed Prometheus recorder.
    #[must_use]
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}
