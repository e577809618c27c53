use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Installs the stderr subscriber. Per-target levels come from `OUTBREAK_LOG`
/// (e.g. `OUTBREAK_LOG=outbreak_sim=debug`), falling back to `outbreak=info`.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("OUTBREAK_LOG")
            .unwrap_or_else(|_| EnvFilter::new("outbreak=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(filter)
            .init();
    });
}
