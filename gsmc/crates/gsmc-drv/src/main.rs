//! The `gsm` binary: compile one source string given on the command line.
//!
//! Usage: `gsm "<source text>"`. The module goes to standard output,
//! diagnostics to standard error. A diagnosed program still exits 0;
//! non-zero exits are reserved for usage errors and internal failures.

use anyhow::{bail, Result};

fn main() {
    if let Err(e) = try_main() {
        eprintln!("error: {e}");
        std::process::exit(2);
    }
}

fn try_main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let source = match args.next() {
        Some(source) => source,
        None => bail!("usage: gsm \"<source text>\""),
    };
    if args.next().is_some() {
        bail!("usage: gsm \"<source text>\"");
    }

    gsmc_drv::run(&source)?;
    Ok(())
}
