use std::io::{self, BufWriter, Write};

use anyhow::{bail, Context, Result};
use devconsts::{lookup, write_report, NamedConstant, OutputFormat, EXTENDED, REPORTED};
use log::{debug, warn};

use crate::cli::Cli;

pub fn run(cli: &Cli) -> Result<()> {
    let constants = select(cli)?;
    let format = OutputFormat::from(cli.format);
    if cli.decode && format == OutputFormat::Json {
        warn!("--decode has no effect on JSON output, ioctl fields are always included");
    }
    debug!("reporting {} constants as {:?}", constants.len(), format);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_report(&mut out, constants, format, cli.decode)
        .context("Failed to write report to stdout")?;
    out.flush().context("Failed to flush stdout")?;
    Ok(())
}

fn select(cli: &Cli) -> Result<Vec<&'static NamedConstant>> {
    if !cli.only.is_empty() {
        let mut picked = Vec::with_capacity(cli.only.len());
        for label in &cli.only {
            let Some(constant) = lookup(label) else {
                bail!("Unknown constant {label}\nRun without --only to list the known labels.");
            };
            picked.push(constant);
        }
        return Ok(picked);
    }

    let mut all: Vec<_> = REPORTED.iter().collect();
    if cli.extended {
        all.extend(EXTENDED.iter());
    }
    Ok(all)
}
