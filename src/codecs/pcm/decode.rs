use crate::container::WavFile;
use crate::core::{Sample, WavData};
use crate::io::{IoError, IoResult};

pub fn deinterleave<T: Sample>(file: &WavFile) -> IoResult<WavData<T>> {
	let width = T::KIND.bits();
	if file.bits_per_sample != width {
		return Err(IoError::bit_depth_mismatch(file.bits_per_sample, width));
	}

	let stereo = match file.num_channels {
		1 => false,
		2 => true,
		n => return Err(IoError::unsupported_channels(n)),
	};

	let bytes = T::KIND.bytes();
	let block_align = file.block_align as usize;
	if block_align < bytes * file.num_channels as usize {
		return Err(IoError::invalid_data(format!(
			"block align {} is too small for {} channel(s) of {} bits",
			block_align, file.num_channels, width
		)));
	}

	let num_samples = file.num_samples as usize;
	let needed = num_samples * block_align;
	if file.data.len() < needed {
		return Err(IoError::invalid_data(format!(
			"payload holds {} bytes but {} samples need {}",
			file.data.len(),
			num_samples,
			needed
		)));
	}

	let mut channel_a = Vec::with_capacity(num_samples);
	let mut channel_b = Vec::with_capacity(if stereo { num_samples } else { 0 });

	for block in file.data[..needed].chunks_exact(block_align) {
		channel_a.push(T::read_le(block));
		if stereo {
			channel_b.push(T::read_le(&block[bytes..]));
		}
	}

	Ok(WavData {
		sample_rate: file.sample_rate,
		num_channels: file.num_channels,
		bits_per_sample: file.bits_per_sample,
		num_samples: file.num_samples,
		channel_a,
		channel_b,
	})
}
