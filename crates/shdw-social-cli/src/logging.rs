//! Tracing initialization.
//!
//! Logs go to stderr so stdout stays machine-readable. `--json` switches the
//! formatter to JSON lines.

use tracing_subscriber::EnvFilter;

pub fn init(filter: &str, json: bool) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(filter)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    let res = if json {
        builder.json().try_init()
    } else {
        builder.compact().try_init()
    };
    res.map_err(|e| anyhow::anyhow!("failed to init logging: {e}"))
}
