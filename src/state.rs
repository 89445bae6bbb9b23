use std::sync::Arc;

use crate::{config::Config, gateway::PayWeb3Gateway};

#[derive(Debug, Clone, axum::extract::FromRef)]
pub struct AppState {
    pub config: Arc<Config>,
    pub gate: PayWeb3Gateway,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            gate: PayWeb3Gateway::new(),
        }
    }
}
