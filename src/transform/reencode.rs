use crate::codecs::convert_sample;
use crate::core::{AnyWavData, Sample, SampleKind, Transform, WavData};
use crate::io::IoResult;
use log::debug;

/// Re-quantizes every sample to another integer type.
pub struct Reencode {
	target: SampleKind,
}

impl Reencode {
	pub fn new(target: SampleKind) -> Self {
		Self { target }
	}
}

impl Transform for Reencode {
	fn apply(&mut self, data: AnyWavData) -> IoResult<AnyWavData> {
		if data.kind() == self.target {
			return Ok(data);
		}
		debug!("reencode {} -> {}", data.kind(), self.target);
		Ok(data.reencode(self.target))
	}

	fn name(&self) -> &'static str {
		"encode"
	}
}

pub fn reencode<F: Sample, T: Sample>(input: &WavData<F>) -> WavData<T> {
	WavData {
		sample_rate: input.sample_rate,
		num_channels: input.num_channels,
		bits_per_sample: T::KIND.bits(),
		num_samples: input.num_samples,
		channel_a: input.channel_a.iter().map(|&s| convert_sample(s)).collect(),
		channel_b: input.channel_b.iter().map(|&s| convert_sample(s)).collect(),
	}
}

/// [`reencode`] with the destination type picked at run time.
pub fn reencode_to<F: Sample>(input: &WavData<F>, target: SampleKind) -> AnyWavData {
	match target {
		SampleKind::I8 => AnyWavData::I8(reencode(input)),
		SampleKind::U8 => AnyWavData::U8(reencode(input)),
		SampleKind::I16 => AnyWavData::I16(reencode(input)),
		SampleKind::U16 => AnyWavData::U16(reencode(input)),
		SampleKind::I32 => AnyWavData::I32(reencode(input)),
		SampleKind::U32 => AnyWavData::U32(reencode(input)),
	}
}
