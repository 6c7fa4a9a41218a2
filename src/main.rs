use wavkit::cli::{Args, BatchPipeline, Pipeline, is_batch_pattern, is_directory};
use wavkit::show::{Show, ShowOptions};

fn main() {
	let args = Args::parse();

	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_level()))
		.format_timestamp(None)
		.init();

	let result = if args.show {
		let opts = ShowOptions { sample_limit: args.samples };
		Show::new(args.input.clone(), opts).run()
	} else if is_batch_pattern(&args.input) {
		let output_dir = args.output.clone().unwrap_or_else(|| "out".to_string());
		BatchPipeline::new(args.input.clone(), output_dir, args.transforms.clone()).run()
	} else if let Some(output_dir) = args.output.clone().filter(|o| is_directory(o)) {
		BatchPipeline::new(args.input.clone(), output_dir, args.transforms.clone()).run()
	} else {
		Pipeline::new(args.input.clone(), args.output.clone(), args.transforms.clone()).run()
	};

	match result {
		Ok(()) => {
			if !args.show {
				if let Some(output) = &args.output {
					println!("ok: {} -> {}", args.input, output);
				}
			}
		}
		Err(e) => {
			eprintln!("Error: {}", e);
			std::process::exit(1);
		}
	}
}
