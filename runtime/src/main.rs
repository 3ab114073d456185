mod cli_opts;
mod greet;
mod init;
mod version;

#[cfg(test)]
mod test;

use std::io;

use anyhow::*;
use clap::Parser;
use log::*;

use pyhello_banner::PrettyBanner;

use crate::cli_opts::CliOpts;

fn main() -> Result<()> {
	let opts = CliOpts::parse();
	init::init(opts.verbose);
	debug!("parsed: {:?}", &opts);

	let greeting = version::default_greeting();
	let stdout = io::stdout();
	let mut out = stdout.lock();
	greet::greet(&greeting, &PrettyBanner, &mut out)
}
