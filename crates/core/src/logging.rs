use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Default filter when `RUST_LOG` is not set.
const DEFAULT_DIRECTIVE: &str = "expense_ledger_core=info";

/// Installs a global fmt subscriber filtered by `RUST_LOG`.
///
/// Safe to call more than once; only the first call has an effect, and a
/// subscriber installed by the host application is left in place.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        let _ = fmt().with_env_filter(filter).try_init();
    });
}
