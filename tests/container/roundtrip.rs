use crate::common;
use wavkit::codecs::{deinterleave, interleave};
use wavkit::container::{WavFile, WavReader, WavWriter};
use wavkit::core::{AnyWavData, SampleKind, WavData};
use wavkit::io::{IoErrorKind, StdReadAdapter};
use wavkit::transform::{reencode, resample};

#[test]
fn test_decode_mono_16_bit_scenario() {
	let bytes = common::create_wav(1, 8000, 16, &[0, 0, 100, 0, 200, 0, 255, 255]);
	let file = WavFile::from_bytes(&bytes).unwrap();
	assert_eq!(file.num_samples, 4);

	let data: WavData<i16> = WavData::from_wav_file(&file).unwrap();
	assert_eq!(data.channel_a, vec![0, 100, 200, -1]);
	assert!(data.channel_b.is_empty());
}

#[test]
fn test_reencode_16_bit_to_unsigned_8_bit() {
	let data = WavData::<i16>::mono(8000, vec![0, 16384, 32767, -32768]);
	let out: WavData<u8> = reencode(&data);
	assert_eq!(out.channel_a, vec![128, 191, 255, 0]);
	assert_eq!(out.bits_per_sample, 8);
}

#[test]
fn test_resample_doubles_rate_with_midpoints() {
	let data = WavData::<i16>::mono(8000, vec![0, 10, 20, 30]);
	let out = resample(&data, 16000);
	assert_eq!(out.num_samples, 8);
	assert_eq!(out.channel_a, vec![0, 5, 10, 15, 20, 25, 30, 30]);
}

#[test]
fn test_missing_data_chunk_is_an_error() {
	let bytes = common::riff(&[common::fmt_chunk(1, 8000, 16), common::chunk(b"LIST", b"INFO")]);
	let err = WavFile::from_bytes(&bytes).unwrap_err();
	assert_eq!(err.kind(), IoErrorKind::MissingChunk);
}

#[test]
fn test_extract_rejects_bit_depth_mismatch() {
	let bytes = common::create_wav(1, 8000, 32, &[0; 16]);
	let file = WavFile::from_bytes(&bytes).unwrap();
	let err = deinterleave::<i16>(&file).unwrap_err();
	assert_eq!(err.kind(), IoErrorKind::BitDepthMismatch);
}

#[test]
fn test_wav_roundtrip_mono_bytes() {
	let original = common::create_mono_wav(512);
	let file = WavFile::from_bytes(&original).unwrap();

	assert_eq!(file.num_channels, 1);
	assert_eq!(file.num_samples, 512);
	assert_eq!(file.to_bytes().unwrap(), original);
}

#[test]
fn test_wav_roundtrip_stereo_typed() {
	let original = common::create_stereo_wav(256);
	let file = WavFile::from_bytes(&original).unwrap();

	let data: WavData<i16> = deinterleave(&file).unwrap();
	assert_eq!(data.channel_a.len(), 256);
	assert_eq!(data.channel_b.len(), 256);
	assert_eq!(data.channel_a, common::generate_sine_wave(256, 440.0, 44100));
	assert_eq!(data.channel_b, common::generate_sine_wave(256, 880.0, 44100));

	let rebuilt = interleave(&data);
	assert_eq!(rebuilt, file);
	assert_eq!(rebuilt.to_bytes().unwrap(), original);
}

#[test]
fn test_extra_chunks_are_dropped_on_save() {
	let payload: Vec<u8> = (0..32).collect();
	let bytes = common::riff(&[
		common::chunk(b"LIST", b"INFOISFT\x04\x00\x00\x00test"),
		common::fmt_chunk(2, 48000, 8),
		common::chunk(b"fact", &[16, 0, 0, 0]),
		common::chunk(b"data", &payload),
	]);

	let file = WavFile::from_bytes(&bytes).unwrap();
	assert_eq!(file.num_samples, 16);

	let saved = file.to_bytes().unwrap();
	assert_eq!(saved.len(), 44 + 32);
	assert_eq!(&saved[44..], payload.as_slice());

	let reread = WavFile::from_bytes(&saved).unwrap();
	assert_eq!(reread.num_channels, 2);
	assert_eq!(reread.sample_rate, 48000);
	assert_eq!(reread.data, payload);
}

#[test]
fn test_every_bit_depth_roundtrips_through_typed_form() {
	for bits in [8u16, 16, 32] {
		let payload: Vec<u8> = (0..48u8).map(|b| b.wrapping_mul(37)).collect();
		let file = WavFile::from_bytes(&common::create_wav(2, 22050, bits, &payload)).unwrap();

		let data = AnyWavData::decode(&file).unwrap();
		assert_eq!(data.kind(), SampleKind::canonical(bits).unwrap());
		assert_eq!(data.to_wav_file(), file, "{} bits", bits);
	}
}

#[test]
fn test_reader_and_writer_over_std_io() {
	let original = common::create_mono_wav(100);
	let source = StdReadAdapter::new(std::io::Cursor::new(original.clone()));
	let reader = WavReader::new(source).unwrap();
	let file = reader.into_file();

	let mut writer = WavWriter::new(Vec::new());
	writer.write(&file).unwrap();
	writer.finalize().unwrap();
	assert_eq!(writer.into_inner(), original);
}

#[test]
fn test_resample_then_reencode_stereo() {
	let file = WavFile::from_bytes(&common::create_stereo_wav(441)).unwrap();
	let data = AnyWavData::decode(&file).unwrap();

	let out = data.resample(22050).reencode(SampleKind::U8).to_wav_file();
	assert_eq!(out.sample_rate, 22050);
	assert_eq!(out.num_channels, 2);
	assert_eq!(out.bits_per_sample, 8);
	assert_eq!(out.num_samples, 220);
	assert_eq!(out.block_align, 2);
	assert_eq!(out.data_size, 440);
	assert_eq!(out.chunk_size, 36 + 440);
}
