use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "wavkit")]
#[command(about = env!("CARGO_PKG_DESCRIPTION"), long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
	#[arg(short, long, value_name = "FILE", help = "Input file or glob pattern")]
	pub input: String,

	#[arg(short, long, value_name = "FILE", help = "Output file or directory")]
	pub output: Option<String>,

	#[arg(long, help = "Show header information instead of transcoding")]
	pub show: bool,

	#[arg(
		long,
		value_name = "N",
		default_value_t = 0,
		help = "With --show, list the first N samples of each channel"
	)]
	pub samples: usize,

	#[arg(
		long = "apply",
		value_name = "TRANSFORM",
		help = "Apply transform (e.g., resample=22050, encode=u8, bits=16)"
	)]
	pub transforms: Vec<String>,

	#[arg(short, long, action = clap::ArgAction::Count, help = "Increase log verbosity")]
	pub verbose: u8,
}

impl Args {
	pub fn parse() -> Self {
		<Self as clap::Parser>::parse()
	}

	pub fn log_level(&self) -> &'static str {
		match self.verbose {
			0 => "warn",
			1 => "info",
			_ => "debug",
		}
	}
}
