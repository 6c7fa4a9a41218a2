use crate::core::{AnyWavData, Sample, Transform, WavData};
use crate::io::IoResult;
use log::debug;

/// Linear interpolation between neighbouring samples, no anti-aliasing filter.
pub struct Resample {
	target_rate: u32,
}

impl Resample {
	pub fn new(target_rate: u32) -> Self {
		Self { target_rate }
	}
}

impl Transform for Resample {
	fn apply(&mut self, data: AnyWavData) -> IoResult<AnyWavData> {
		debug!("resample {} Hz -> {} Hz", data.sample_rate(), self.target_rate);
		Ok(data.resample(self.target_rate))
	}

	fn name(&self) -> &'static str {
		"resample"
	}
}

/// `floor(num_samples * target_rate / source_rate)`, computed exactly.
pub fn resampled_len(num_samples: u32, source_rate: u32, target_rate: u32) -> u32 {
	if source_rate == 0 {
		return 0;
	}
	let len = num_samples as u64 * target_rate as u64 / source_rate as u64;
	len.min(u32::MAX as u64) as u32
}

pub fn resample<T: Sample>(input: &WavData<T>, target_rate: u32) -> WavData<T> {
	let len = resampled_len(input.num_samples, input.sample_rate, target_rate) as usize;
	let ratio = target_rate as f64 / input.sample_rate as f64;

	let channel_a = linear_interpolate(&input.channel_a, ratio, len);
	let channel_b = if input.is_stereo() {
		linear_interpolate(&input.channel_b, ratio, len)
	} else {
		Vec::new()
	};

	WavData {
		sample_rate: target_rate,
		num_channels: input.num_channels,
		bits_per_sample: input.bits_per_sample,
		num_samples: channel_a.len() as u32,
		channel_a,
		channel_b,
	}
}

fn linear_interpolate<T: Sample>(samples: &[T], ratio: f64, output_len: usize) -> Vec<T> {
	let Some(last) = samples.len().checked_sub(1) else {
		return Vec::new();
	};

	let mut output = Vec::with_capacity(output_len);
	for i in 0..output_len {
		let src_index = i as f64 / ratio;
		let index0 = (src_index.floor() as usize).min(last);
		let index1 = (index0 + 1).min(last);
		let frac = src_index - index0 as f64;

		let s0 = samples[index0].to_f64();
		let s1 = samples[index1].to_f64();
		output.push(T::from_f64(((1.0 - frac) * s0 + frac * s1).round()));
	}

	output
}
