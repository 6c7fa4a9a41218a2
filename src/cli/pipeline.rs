use crate::container::WavFile;
use crate::core::AnyWavData;
use crate::io::{IoError, IoErrorKind, IoResult};
use crate::transform::{TransformChain, parse_transform};
use log::{info, warn};
use std::path::Path;

pub struct Pipeline {
	input_path: String,
	output_path: Option<String>,
	transforms: Vec<String>,
}

impl Pipeline {
	pub fn new(input_path: String, output_path: Option<String>, transforms: Vec<String>) -> Self {
		Self { input_path, output_path, transforms }
	}

	pub fn run(&self) -> IoResult<()> {
		let output_path = self
			.output_path
			.as_ref()
			.ok_or_else(|| IoError::invalid_input("output path required for transcoding"))?;

		let mut chain = build_chain(&self.transforms)?;

		info!("reading {}", self.input_path);
		let input = WavFile::open(&self.input_path)?;
		let output = process(&input, &mut chain)?;

		output.save(output_path)?;
		info!(
			"wrote {} ({} Hz, {} bits, {} samples per channel)",
			output_path, output.sample_rate, output.bits_per_sample, output.num_samples
		);
		Ok(())
	}
}

pub fn build_chain(specs: &[String]) -> IoResult<TransformChain> {
	let mut chain = TransformChain::new();
	for spec in specs {
		chain.add(parse_transform(spec)?);
	}
	Ok(chain)
}

/// An empty chain passes the payload through byte for byte.
pub fn process(input: &WavFile, chain: &mut TransformChain) -> IoResult<WavFile> {
	if chain.is_empty() {
		return Ok(input.clone());
	}

	let data = AnyWavData::decode(input)?;
	let processed = chain.apply(data)?;
	Ok(processed.to_wav_file())
}

pub struct BatchPipeline {
	input_pattern: String,
	output_dir: String,
	transforms: Vec<String>,
}

impl BatchPipeline {
	pub fn new(input_pattern: String, output_dir: String, transforms: Vec<String>) -> Self {
		Self { input_pattern, output_dir, transforms }
	}

	pub fn run(&self) -> IoResult<()> {
		let files = self.expand_glob()?;

		if files.is_empty() {
			return Err(IoError::new(
				IoErrorKind::Io(std::io::ErrorKind::NotFound),
				format!("no files matching pattern: {}", self.input_pattern),
			));
		}

		std::fs::create_dir_all(&self.output_dir)?;

		for input_path in files {
			let file_name =
				Path::new(&input_path).file_name().and_then(|n| n.to_str()).unwrap_or("output.wav");
			let output_path =
				Path::new(&self.output_dir).join(file_name).to_string_lossy().to_string();

			let pipeline = Pipeline::new(
				input_path.clone(),
				Some(output_path.clone()),
				self.transforms.clone(),
			);

			println!("Processing: {}", input_path);
			pipeline.run()?;
			println!("  -> {}", output_path);
		}

		Ok(())
	}

	fn expand_glob(&self) -> IoResult<Vec<String>> {
		let mut files = Vec::new();

		if !is_batch_pattern(&self.input_pattern) {
			files.push(self.input_pattern.clone());
			return Ok(files);
		}

		let entries = glob::glob(&self.input_pattern)
			.map_err(|e| IoError::invalid_input(format!("invalid glob pattern: {}", e)))?;

		for entry in entries {
			match entry {
				Ok(path) if path.is_file() => files.push(path.to_string_lossy().to_string()),
				Ok(_) => {}
				Err(e) => warn!("failed to read entry: {}", e),
			}
		}

		Ok(files)
	}
}

pub fn is_batch_pattern(input: &str) -> bool {
	input.contains('*')
}

pub fn is_directory(path: &str) -> bool {
	Path::new(path).is_dir()
}
