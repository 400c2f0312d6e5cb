#![forbid(unsafe_code)]

//! # Scurry
//!
//! ```bash
//! scurry --x 640 --y 480 --nature granny --seed 1
//! ```

use clap::Parser;
use scurry_cli::{Cli, init_logging, run};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&cli, &mut out)
}
