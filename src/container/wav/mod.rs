pub mod read;
pub mod write;

pub use read::WavReader;
pub use write::WavWriter;

use crate::io::{IoError, IoErrorKind, IoResult, StdWriteAdapter};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

pub const RIFF: &[u8; 4] = b"RIFF";
pub const WAVE: &[u8; 4] = b"WAVE";
pub const FMT: &[u8; 4] = b"fmt ";
pub const DATA: &[u8; 4] = b"data";

pub const PCM_FORMAT: u16 = 1;
pub const PCM_FMT_SIZE: u32 = 16;
/// Bytes of the canonical header that `chunk_size` counts besides the payload.
pub const HEADER_OVERHEAD: u32 = 36;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
	pub audio_format: u16,
	pub num_channels: u16,
	pub sample_rate: u32,
	pub byte_rate: u32,
	pub block_align: u16,
	pub bits_per_sample: u16,
}

impl WavFormat {
	pub fn bytes_per_sample(&self) -> usize {
		(self.bits_per_sample / 8) as usize
	}

	pub fn bytes_per_frame(&self) -> usize {
		self.bytes_per_sample() * self.num_channels as usize
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WavFile {
	pub chunk_size: u32,
	pub num_channels: u16,
	pub sample_rate: u32,
	pub block_align: u16,
	pub bits_per_sample: u16,
	pub data_size: u32,
	/// Per channel.
	pub num_samples: u32,
	pub data: Vec<u8>,
}

impl WavFile {
	pub fn from_bytes(bytes: &[u8]) -> IoResult<Self> {
		Ok(WavReader::new(bytes)?.into_file())
	}

	pub fn to_bytes(&self) -> IoResult<Vec<u8>> {
		let mut writer = WavWriter::new(Vec::with_capacity(44 + self.data.len()));
		writer.write(self)?;
		Ok(writer.into_inner())
	}

	pub fn open<P: AsRef<Path>>(path: P) -> IoResult<Self> {
		let path = path.as_ref();
		let bytes = std::fs::read(path).map_err(|e| {
			let message = format!("couldn't open file {}: {}", path.display(), e);
			IoError::new(IoErrorKind::Io(e.kind()), message)
		})?;
		Self::from_bytes(&bytes)
	}

	pub fn save<P: AsRef<Path>>(&self, path: P) -> IoResult<()> {
		let path = path.as_ref();
		let file = File::create(path).map_err(|e| {
			IoError::new(
				IoErrorKind::Io(e.kind()),
				format!("error opening output file {}: {}", path.display(), e),
			)
		})?;
		let mut writer = WavWriter::new(StdWriteAdapter::new(BufWriter::new(file)));
		writer.write(self)?;
		writer.finalize()
	}

	pub fn format(&self) -> WavFormat {
		WavFormat {
			audio_format: PCM_FORMAT,
			num_channels: self.num_channels,
			sample_rate: self.sample_rate,
			byte_rate: self.byte_rate(),
			block_align: self.canonical_block_align(),
			bits_per_sample: self.bits_per_sample,
		}
	}

	pub fn canonical_block_align(&self) -> u16 {
		self.num_channels.wrapping_mul(self.bits_per_sample / 8)
	}

	pub fn byte_rate(&self) -> u32 {
		self.sample_rate.wrapping_mul(self.canonical_block_align() as u32)
	}

	pub fn duration_secs(&self) -> f64 {
		if self.sample_rate == 0 {
			return 0.0;
		}
		self.num_samples as f64 / self.sample_rate as f64
	}
}
