use super::sample::{Sample, SampleKind};
use crate::codecs::pcm;
use crate::container::WavFile;
use crate::io::{IoError, IoResult};
use crate::transform::{reencode_to, resample};

/// `channel_b` is empty unless the audio is stereo.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WavData<T: Sample> {
	pub sample_rate: u32,
	pub num_channels: u16,
	pub bits_per_sample: u16,
	/// Per channel.
	pub num_samples: u32,
	pub channel_a: Vec<T>,
	pub channel_b: Vec<T>,
}

impl<T: Sample> WavData<T> {
	pub fn mono(sample_rate: u32, samples: Vec<T>) -> Self {
		Self {
			sample_rate,
			num_channels: 1,
			bits_per_sample: T::KIND.bits(),
			num_samples: samples.len() as u32,
			channel_a: samples,
			channel_b: Vec::new(),
		}
	}

	pub fn stereo(sample_rate: u32, left: Vec<T>, right: Vec<T>) -> IoResult<Self> {
		if left.len() != right.len() {
			return Err(IoError::invalid_input(format!(
				"stereo channels differ in length ({} vs {})",
				left.len(),
				right.len()
			)));
		}

		Ok(Self {
			sample_rate,
			num_channels: 2,
			bits_per_sample: T::KIND.bits(),
			num_samples: left.len() as u32,
			channel_a: left,
			channel_b: right,
		})
	}

	pub fn from_wav_file(file: &WavFile) -> IoResult<Self> {
		pcm::deinterleave(file)
	}

	pub fn to_wav_file(&self) -> WavFile {
		pcm::interleave(self)
	}

	pub fn is_stereo(&self) -> bool {
		self.num_channels == 2
	}

	pub fn kind(&self) -> SampleKind {
		T::KIND
	}
}

impl<T: Sample> TryFrom<&WavFile> for WavData<T> {
	type Error = IoError;

	fn try_from(file: &WavFile) -> IoResult<Self> {
		Self::from_wav_file(file)
	}
}

impl<T: Sample> From<&WavData<T>> for WavFile {
	fn from(data: &WavData<T>) -> Self {
		data.to_wav_file()
	}
}

/// A [`WavData`] whose sample type is chosen at run time.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyWavData {
	I8(WavData<i8>),
	U8(WavData<u8>),
	I16(WavData<i16>),
	U16(WavData<u16>),
	I32(WavData<i32>),
	U32(WavData<u32>),
}

macro_rules! with_data {
	($value:expr, $data:ident => $body:expr) => {
		match $value {
			$crate::core::AnyWavData::I8($data) => $body,
			$crate::core::AnyWavData::U8($data) => $body,
			$crate::core::AnyWavData::I16($data) => $body,
			$crate::core::AnyWavData::U16($data) => $body,
			$crate::core::AnyWavData::I32($data) => $body,
			$crate::core::AnyWavData::U32($data) => $body,
		}
	};
}

// Like with_data, but rewraps the result in the same variant.
macro_rules! map_data {
	($value:expr, $data:ident => $body:expr) => {
		match $value {
			$crate::core::AnyWavData::I8($data) => $crate::core::AnyWavData::I8($body),
			$crate::core::AnyWavData::U8($data) => $crate::core::AnyWavData::U8($body),
			$crate::core::AnyWavData::I16($data) => $crate::core::AnyWavData::I16($body),
			$crate::core::AnyWavData::U16($data) => $crate::core::AnyWavData::U16($body),
			$crate::core::AnyWavData::I32($data) => $crate::core::AnyWavData::I32($body),
			$crate::core::AnyWavData::U32($data) => $crate::core::AnyWavData::U32($body),
		}
	};
}

impl AnyWavData {
	pub fn decode(file: &WavFile) -> IoResult<Self> {
		let kind = SampleKind::canonical(file.bits_per_sample)
			.ok_or_else(|| IoError::unsupported_bit_depth(file.bits_per_sample))?;
		Self::decode_as(file, kind)
	}

	pub fn decode_as(file: &WavFile, kind: SampleKind) -> IoResult<Self> {
		Ok(match kind {
			SampleKind::I8 => AnyWavData::I8(WavData::from_wav_file(file)?),
			SampleKind::U8 => AnyWavData::U8(WavData::from_wav_file(file)?),
			SampleKind::I16 => AnyWavData::I16(WavData::from_wav_file(file)?),
			SampleKind::U16 => AnyWavData::U16(WavData::from_wav_file(file)?),
			SampleKind::I32 => AnyWavData::I32(WavData::from_wav_file(file)?),
			SampleKind::U32 => AnyWavData::U32(WavData::from_wav_file(file)?),
		})
	}

	pub fn kind(&self) -> SampleKind {
		with_data!(self, data => data.kind())
	}

	pub fn sample_rate(&self) -> u32 {
		with_data!(self, data => data.sample_rate)
	}

	pub fn num_channels(&self) -> u16 {
		with_data!(self, data => data.num_channels)
	}

	pub fn num_samples(&self) -> u32 {
		with_data!(self, data => data.num_samples)
	}

	pub fn to_wav_file(&self) -> WavFile {
		with_data!(self, data => data.to_wav_file())
	}

	pub fn head(&self, channel: usize, limit: usize) -> Vec<f64> {
		with_data!(self, data => {
			let samples = if channel == 0 { &data.channel_a } else { &data.channel_b };
			samples.iter().take(limit).map(|s| s.to_f64()).collect()
		})
	}

	pub fn resample(&self, target_rate: u32) -> Self {
		map_data!(self, data => resample(data, target_rate))
	}

	pub fn reencode(&self, target: SampleKind) -> Self {
		with_data!(self, data => reencode_to(data, target))
	}
}

macro_rules! impl_from_data {
	($ty:ty, $variant:ident) => {
		impl From<WavData<$ty>> for AnyWavData {
			fn from(data: WavData<$ty>) -> Self {
				AnyWavData::$variant(data)
			}
		}
	};
}

impl_from_data!(i8, I8);
impl_from_data!(u8, U8);
impl_from_data!(i16, I16);
impl_from_data!(u16, U16);
impl_from_data!(i32, I32);
impl_from_data!(u32, U32);

#[cfg(test)]
mod tests {
	use super::*;
	use crate::io::IoErrorKind;

	fn file_with(bits: u16, channels: u16, data: Vec<u8>) -> WavFile {
		let block_align = channels * bits / 8;
		WavFile {
			chunk_size: 36 + data.len() as u32,
			num_channels: channels,
			sample_rate: 8000,
			block_align,
			bits_per_sample: bits,
			data_size: data.len() as u32,
			num_samples: data.len() as u32 / block_align as u32,
			data,
		}
	}

	#[test]
	fn stereo_requires_equal_lengths() {
		let err = WavData::<i16>::stereo(8000, vec![1, 2], vec![1]).unwrap_err();
		assert_eq!(err.kind(), IoErrorKind::InvalidInput);

		let data = WavData::<i16>::stereo(8000, vec![1, 2], vec![3, 4]).unwrap();
		assert!(data.is_stereo());
		assert_eq!(data.num_samples, 2);
		assert_eq!(data.bits_per_sample, 16);
	}

	#[test]
	fn decode_picks_canonical_kind() {
		let any = AnyWavData::decode(&file_with(8, 1, vec![0, 128, 255])).unwrap();
		assert_eq!(any.kind(), SampleKind::U8);
		assert_eq!(any.num_samples(), 3);

		let any = AnyWavData::decode(&file_with(16, 2, vec![0; 8])).unwrap();
		assert_eq!(any.kind(), SampleKind::I16);
		assert_eq!(any.num_channels(), 2);
	}

	#[test]
	fn decode_rejects_24_bit() {
		let err = AnyWavData::decode(&file_with(24, 1, vec![0; 6])).unwrap_err();
		assert_eq!(err.kind(), IoErrorKind::UnsupportedBitDepth);
	}

	#[test]
	fn decode_as_honours_requested_signedness() {
		let any = AnyWavData::decode_as(&file_with(8, 1, vec![0xFF]), SampleKind::I8).unwrap();
		assert_eq!(any, AnyWavData::I8(WavData::mono(8000, vec![-1])));
	}

	#[test]
	fn reencode_switches_variant() {
		let any: AnyWavData = WavData::<i16>::mono(8000, vec![i16::MIN, i16::MAX]).into();
		let out = any.reencode(SampleKind::U8);
		assert_eq!(out, AnyWavData::U8(WavData::mono(8000, vec![0, 255])));
		assert_eq!(out.to_wav_file().bits_per_sample, 8);
	}

	#[test]
	fn head_reads_each_channel() {
		let any: AnyWavData =
			WavData::<i16>::stereo(8000, vec![1, 2, 3], vec![-1, -2, -3]).unwrap().into();
		assert_eq!(any.head(0, 2), vec![1.0, 2.0]);
		assert_eq!(any.head(1, 10), vec![-1.0, -2.0, -3.0]);
	}

	#[test]
	fn resample_keeps_variant() {
		let any: AnyWavData = WavData::<u8>::mono(8000, vec![0, 10, 20, 30]).into();
		let out = any.resample(4000);
		assert_eq!(out.kind(), SampleKind::U8);
		assert_eq!(out.sample_rate(), 4000);
		assert_eq!(out.num_samples(), 2);
	}
}
