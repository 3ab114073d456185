use clap::*;

#[derive(Parser, Debug)]
#[command(version)]
pub struct CliOpts {
	#[arg(long, short, help="Set log level to DEBUG")]
	pub verbose: bool,
}
