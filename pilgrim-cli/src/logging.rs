//! Log subscriber installation.
//!
//! Library crates log through the `log` facade; the subscriber installed
//! here also captures those records.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::CliError;

const DEFAULT_FILTER: &str =
    "pilgrim_cli=info,pilgrim_core=info,pilgrim_data=info,pilgrim_server=info,actix_web=info";
const VERBOSE_FILTER: &str =
    "pilgrim_cli=debug,pilgrim_core=debug,pilgrim_data=debug,pilgrim_server=debug,info";

/// Install the global subscriber, honouring `RUST_LOG` when set.
pub(crate) fn init(verbose: bool) -> Result<(), CliError> {
    let fallback = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()?;
    Ok(())
}
