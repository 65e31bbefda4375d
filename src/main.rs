use anyhow::{bail, Context, Result};
use tracing_subscriber::{fmt, EnvFilter};

use protocol_engine::catalog::SetupCatalog;
use protocol_engine::config::Config;
use protocol_engine::trading::{JournalSnapshot, ProtocolReport};

fn main() -> Result<()> {
    let cfg = Config::from_env();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .init();

    cfg.validate()?;

    let mut args = std::env::args().skip(1);
    let (json, path) = match (args.next(), args.next()) {
        (Some(flag), Some(path)) if flag == "--json" => (true, path),
        (Some(path), None) if path != "--json" => (false, path),
        _ => bail!("usage: protocol-engine [--json] <snapshot.json>"),
    };

    let snapshot = JournalSnapshot::from_path(&path)
        .with_context(|| format!("loading snapshot {}", path))?;
    let report = ProtocolReport::build(&snapshot, &SetupCatalog::bundled(), &cfg)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for line in report.summary() {
            println!("{}", line);
        }
    }

    Ok(())
}
