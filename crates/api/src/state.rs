//! Application state

use common::Config;
use engine::Engine;
use store::Ledger;

/// Shared application state
pub struct AppState {
    pub config: Config,
    pub ledger: Ledger,
    pub engine: Engine,
}

impl AppState {
    pub fn new(config: Config, ledger: Ledger) -> Self {
        let engine = Engine::new(ledger.clone());
        Self {
            config,
            ledger,
            engine,
        }
    }
}
