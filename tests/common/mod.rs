#![allow(dead_code)]

pub fn generate_sine_wave(samples: usize, frequency: f32, sample_rate: u32) -> Vec<i16> {
	let mut data = Vec::with_capacity(samples);
	for i in 0..samples {
		let t = i as f32 / sample_rate as f32;
		let sample = (2.0 * std::f32::consts::PI * frequency * t).sin() * 16000.0;
		data.push(sample as i16);
	}
	data
}

pub fn chunk(id: &[u8; 4], body: &[u8]) -> Vec<u8> {
	let mut out = id.to_vec();
	out.extend_from_slice(&(body.len() as u32).to_le_bytes());
	out.extend_from_slice(body);
	out
}

pub fn fmt_chunk(channels: u16, sample_rate: u32, bits_per_sample: u16) -> Vec<u8> {
	let block_align = channels * bits_per_sample / 8;
	let byte_rate = sample_rate * block_align as u32;

	let mut body = Vec::new();
	body.extend_from_slice(&1u16.to_le_bytes());
	body.extend_from_slice(&channels.to_le_bytes());
	body.extend_from_slice(&sample_rate.to_le_bytes());
	body.extend_from_slice(&byte_rate.to_le_bytes());
	body.extend_from_slice(&block_align.to_le_bytes());
	body.extend_from_slice(&bits_per_sample.to_le_bytes());
	chunk(b"fmt ", &body)
}

/// Wraps subchunks in a RIFF/WAVE header with a consistent chunk size.
pub fn riff(chunks: &[Vec<u8>]) -> Vec<u8> {
	let body = chunks.concat();
	let mut wav = Vec::with_capacity(12 + body.len());
	wav.extend_from_slice(b"RIFF");
	wav.extend_from_slice(&(4 + body.len() as u32).to_le_bytes());
	wav.extend_from_slice(b"WAVE");
	wav.extend_from_slice(&body);
	wav
}

pub fn create_wav(
	channels: u16,
	sample_rate: u32,
	bits_per_sample: u16,
	payload: &[u8],
) -> Vec<u8> {
	riff(&[fmt_chunk(channels, sample_rate, bits_per_sample), chunk(b"data", payload)])
}

pub fn create_mono_wav(sample_count: usize) -> Vec<u8> {
	let samples = generate_sine_wave(sample_count, 440.0, 44100);
	let payload: Vec<u8> = samples.iter().flat_map(|s| s.to_le_bytes()).collect();
	create_wav(1, 44100, 16, &payload)
}

pub fn create_stereo_wav(sample_count: usize) -> Vec<u8> {
	let left = generate_sine_wave(sample_count, 440.0, 44100);
	let right = generate_sine_wave(sample_count, 880.0, 44100);

	let mut payload = Vec::with_capacity(sample_count * 4);
	for (l, r) in left.iter().zip(right.iter()) {
		payload.extend_from_slice(&l.to_le_bytes());
		payload.extend_from_slice(&r.to_le_bytes());
	}

	create_wav(2, 44100, 16, &payload)
}
