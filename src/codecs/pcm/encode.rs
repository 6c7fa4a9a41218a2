use crate::container::WavFile;
use crate::container::wav::HEADER_OVERHEAD;
use crate::core::{Sample, WavData};

pub fn interleave<T: Sample>(data: &WavData<T>) -> WavFile {
	let bytes = T::KIND.bytes();
	let stereo = data.num_channels == 2;
	debug_assert_eq!(data.channel_a.len(), data.num_samples as usize, "channel_a length");
	if stereo {
		debug_assert_eq!(data.channel_b.len(), data.num_samples as usize, "channel_b length");
	}
	let block_align = data.num_channels.wrapping_mul(bytes as u16);
	let data_size = data.num_samples.wrapping_mul(block_align as u32);

	let mut payload = vec![0u8; data_size as usize];
	if block_align > 0 {
		for (i, block) in payload.chunks_exact_mut(block_align as usize).enumerate() {
			if let Some(sample) = data.channel_a.get(i) {
				sample.write_le(block);
			}
			if stereo {
				if let Some(sample) = data.channel_b.get(i) {
					sample.write_le(&mut block[bytes..]);
				}
			}
		}
	}

	WavFile {
		chunk_size: HEADER_OVERHEAD.wrapping_add(data_size),
		num_channels: data.num_channels,
		sample_rate: data.sample_rate,
		block_align,
		bits_per_sample: T::KIND.bits(),
		data_size,
		num_samples: data.num_samples,
		data: payload,
	}
}
