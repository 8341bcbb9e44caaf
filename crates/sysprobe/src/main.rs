//! sysprobe - prints time, identity and buffer layout diagnostics
//!
//! Every step reports its own failures; the process always exits 0.

mod logging;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use std::io::{self, Write};
use sysprobe_common::clock::{Clock, LocalClock};
use sysprobe_common::{Probe, SystemIdentity};
use tracing::{error, info, warn};

// Version is embedded at build time
const VERSION: &str = env!("SYSPROBE_VERSION");

#[derive(Parser, Default)]
#[command(name = "sysprobe")]
#[command(about = "Print time, user/host identity and buffer layout diagnostics", long_about = None)]
#[command(version = VERSION)]
struct Cli {
    /// Log each step to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    // Bad arguments never stop the report; they are reported once logging is up
    let (cli, rejected) = match Cli::try_parse() {
        Ok(cli) => (cli, None),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return;
        }
        Err(e) => (Cli::default(), Some(e)),
    };

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("sysprobe: {:#}", e);
    }

    if let Some(e) = rejected {
        let rendered = e.render().to_string();
        warn!("ignoring command line: {}", rendered.trim_end());
    }

    info!("sysprobe v{} starting", VERSION);

    if let Err(e) = run() {
        error!("{:#}", e);
    }
}

fn run() -> Result<()> {
    let probe = Probe::new(SystemIdentity);

    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();

    let outcome = probe
        .run(&LocalClock.now(), &mut out, &mut err)
        .context("failed to write diagnostic report")?;
    out.flush().context("failed to flush stdout")?;

    info!(
        username = %outcome.username,
        hostname = %outcome.hostname,
        identity_ok = outcome.identity_ok,
        tagline_aligned = outcome.tagline_aligned,
        "report complete"
    );
    Ok(())
}
