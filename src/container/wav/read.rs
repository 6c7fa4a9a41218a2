use super::{DATA, FMT, PCM_FMT_SIZE, PCM_FORMAT, RIFF, WAVE, WavFile, WavFormat};
use crate::io::{IoError, IoResult, MediaRead, ReadPrimitives};
use log::{debug, warn};

const PAYLOAD_STEP: usize = 64 * 1024;

pub struct WavReader<R: MediaRead> {
	reader: R,
	file: WavFile,
}

impl<R: MediaRead> WavReader<R> {
	pub fn new(mut reader: R) -> IoResult<Self> {
		let chunk_size = Self::read_riff_header(&mut reader)?;
		let (format, data) = Self::read_chunks(&mut reader)?;

		if format.block_align == 0 {
			return Err(IoError::invalid_data("block align is zero"));
		}

		let data_size = data.len() as u32;
		if data_size % format.block_align as u32 != 0 {
			warn!(
				"data size {} is not a multiple of block align {}; trailing bytes are not samples",
				data_size, format.block_align
			);
		}

		let file = WavFile {
			chunk_size,
			num_channels: format.num_channels,
			sample_rate: format.sample_rate,
			block_align: format.block_align,
			bits_per_sample: format.bits_per_sample,
			data_size,
			num_samples: data_size / format.block_align as u32,
			data,
		};

		Ok(Self { reader, file })
	}

	pub fn file(&self) -> &WavFile {
		&self.file
	}

	pub fn into_file(self) -> WavFile {
		self.file
	}

	pub fn into_inner(self) -> R {
		self.reader
	}

	fn read_riff_header(reader: &mut R) -> IoResult<u32> {
		let mut buf = [0u8; 12];
		let read = reader.read_full(&mut buf)?;

		if read < 4 || &buf[0..4] != RIFF {
			return Err(IoError::invalid_data("ChunkID must be 'RIFF'"));
		}

		if read < 12 || &buf[8..12] != WAVE {
			return Err(IoError::invalid_data("Format must be 'WAVE'"));
		}

		Ok(u32::from_le_bytes([buf[4], buf[5], buf[6], buf[7]]))
	}

	fn read_chunks(reader: &mut R) -> IoResult<(WavFormat, Vec<u8>)> {
		let mut format = None;
		let mut data = None;

		while format.is_none() || data.is_none() {
			let mut header = [0u8; 8];
			if reader.read_full(&mut header)? < header.len() {
				break;
			}

			let chunk_id = [header[0], header[1], header[2], header[3]];
			let chunk_size = u32::from_le_bytes([header[4], header[5], header[6], header[7]]);

			if &chunk_id == FMT {
				format = Some(Self::read_fmt(reader, chunk_size)?);
			} else if &chunk_id == DATA {
				data = Some(Self::read_payload(reader, chunk_size)?);
			} else {
				let id = String::from_utf8_lossy(&chunk_id);
				debug!("skipping '{}' subchunk ({} bytes)", id, chunk_size);
				reader.skip(chunk_size as u64)?;
			}
		}

		let format = format.ok_or_else(|| IoError::missing_chunk(FMT))?;
		let data = data.ok_or_else(|| IoError::missing_chunk(DATA))?;
		Ok((format, data))
	}

	fn read_fmt(reader: &mut R, chunk_size: u32) -> IoResult<WavFormat> {
		if chunk_size < PCM_FMT_SIZE {
			return Err(IoError::invalid_data("fmt chunk too small"));
		}

		let audio_format = reader.read_u16_le()?;
		let num_channels = reader.read_u16_le()?;
		let sample_rate = reader.read_u32_le()?;
		let byte_rate = reader.read_u32_le()?;
		let block_align = reader.read_u16_le()?;
		let bits_per_sample = reader.read_u16_le()?;

		if chunk_size > PCM_FMT_SIZE {
			reader.skip((chunk_size - PCM_FMT_SIZE) as u64)?;
		}

		if audio_format != PCM_FORMAT {
			warn!("audio format {} is not PCM; payload is read as linear PCM", audio_format);
		}

		debug!(
			"fmt: {} channel(s), {} Hz, {} bits, block align {}",
			num_channels, sample_rate, bits_per_sample, block_align
		);

		Ok(WavFormat {
			audio_format,
			num_channels,
			sample_rate,
			byte_rate,
			block_align,
			bits_per_sample,
		})
	}

	fn read_payload(reader: &mut R, chunk_size: u32) -> IoResult<Vec<u8>> {
		let total = chunk_size as usize;
		let mut payload = Vec::with_capacity(total.min(PAYLOAD_STEP));

		while payload.len() < total {
			let start = payload.len();
			let end = total.min(start + PAYLOAD_STEP);
			payload.resize(end, 0);
			reader.read_exact(&mut payload[start..end])?;
		}

		debug!("data: {} bytes", total);
		Ok(payload)
	}
}
