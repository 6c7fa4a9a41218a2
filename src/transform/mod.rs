mod reencode;
mod resample;

pub use reencode::{Reencode, reencode, reencode_to};
pub use resample::{Resample, resample, resampled_len};

use crate::core::{AnyWavData, SampleKind, Transform};
use crate::io::{IoError, IoResult};

#[derive(Default)]
pub struct TransformChain {
	transforms: Vec<Box<dyn Transform>>,
}

impl TransformChain {
	pub fn new() -> Self {
		Self { transforms: Vec::new() }
	}

	pub fn add(&mut self, transform: Box<dyn Transform>) {
		self.transforms.push(transform);
	}

	pub fn is_empty(&self) -> bool {
		self.transforms.is_empty()
	}

	pub fn len(&self) -> usize {
		self.transforms.len()
	}

	pub fn names(&self) -> Vec<&'static str> {
		self.transforms.iter().map(|t| t.name()).collect()
	}

	pub fn apply(&mut self, mut data: AnyWavData) -> IoResult<AnyWavData> {
		for transform in &mut self.transforms {
			data = transform.apply(data)?;
		}
		Ok(data)
	}
}

/// `resample=<hz>`, `encode=<i8|u8|i16|u16|i32|u32>` or `bits=<8|16|32>`.
pub fn parse_transform(spec: &str) -> IoResult<Box<dyn Transform>> {
	let (name, value) = spec
		.split_once('=')
		.map(|(n, v)| (n.trim(), v.trim()))
		.ok_or_else(|| {
			IoError::invalid_input(format!("transform '{}' needs a value (name=value)", spec))
		})?;

	match name {
		"resample" => {
			let rate: u32 = value
				.parse()
				.map_err(|_| IoError::invalid_input(format!("invalid sample rate: {}", value)))?;
			if rate == 0 {
				return Err(IoError::invalid_input("sample rate must be positive"));
			}
			Ok(Box::new(Resample::new(rate)))
		}
		"encode" => Ok(Box::new(Reencode::new(value.parse()?))),
		"bits" => {
			let kind = value
				.parse::<u16>()
				.ok()
				.and_then(SampleKind::canonical)
				.ok_or_else(|| {
					IoError::invalid_input(format!("unsupported bit depth: {}", value))
				})?;
			Ok(Box::new(Reencode::new(kind)))
		}
		_ => Err(IoError::invalid_input(format!("unknown transform: {}", name))),
	}
}
