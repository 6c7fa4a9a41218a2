use super::{DATA, FMT, PCM_FMT_SIZE, PCM_FORMAT, RIFF, WAVE, WavFile};
use crate::io::{IoError, IoResult, MediaWrite, WritePrimitives};

pub struct WavWriter<W: MediaWrite> {
	writer: W,
}

impl<W: MediaWrite> WavWriter<W> {
	pub fn new(writer: W) -> Self {
		Self { writer }
	}

	pub fn write(&mut self, file: &WavFile) -> IoResult<()> {
		if file.data.len() != file.data_size as usize {
			return Err(IoError::invalid_input(format!(
				"payload holds {} bytes but data size is {}",
				file.data.len(),
				file.data_size
			)));
		}

		self.write_header(file)?;
		self.writer.write_all(&file.data)
	}

	pub fn finalize(&mut self) -> IoResult<()> {
		self.writer.flush()
	}

	pub fn into_inner(self) -> W {
		self.writer
	}

	fn write_header(&mut self, file: &WavFile) -> IoResult<()> {
		let format = file.format();
		let w = &mut self.writer;

		w.write_all(RIFF)?;
		w.write_u32_le(file.chunk_size)?;
		w.write_all(WAVE)?;

		w.write_all(FMT)?;
		w.write_u32_le(PCM_FMT_SIZE)?;
		w.write_u16_le(PCM_FORMAT)?;
		w.write_u16_le(format.num_channels)?;
		w.write_u32_le(format.sample_rate)?;
		w.write_u32_le(format.byte_rate)?;
		w.write_u16_le(format.block_align)?;
		w.write_u16_le(format.bits_per_sample)?;

		w.write_all(DATA)?;
		w.write_u32_le(file.data_size)?;

		Ok(())
	}
}
