use crate::io::{IoError, IoErrorKind, IoResult};

pub trait MediaWrite {
	fn write(&mut self, buf: &[u8]) -> IoResult<usize>;

	fn flush(&mut self) -> IoResult<()>;
}

pub trait WritePrimitives: MediaWrite {
	fn write_all(&mut self, mut buf: &[u8]) -> IoResult<()> {
		while !buf.is_empty() {
			match self.write(buf) {
				Ok(0) => {
					return Err(IoError::new(
						IoErrorKind::Io(std::io::ErrorKind::WriteZero),
						"failed to write whole buffer",
					));
				}
				Ok(n) => buf = &buf[n..],
				Err(e) if matches!(e.kind(), IoErrorKind::Interrupted) => continue,
				Err(e) => return Err(e),
			}
		}
		Ok(())
	}

	#[inline]
	fn write_u16_le(&mut self, value: u16) -> IoResult<()> {
		self.write_all(&value.to_le_bytes())
	}

	#[inline]
	fn write_u32_le(&mut self, value: u32) -> IoResult<()> {
		self.write_all(&value.to_le_bytes())
	}
}

impl<T: MediaWrite> WritePrimitives for T {}

pub struct StdWriteAdapter<W> {
	inner: W,
}

impl<W> StdWriteAdapter<W> {
	#[inline]
	pub const fn new(inner: W) -> Self {
		Self { inner }
	}

	#[inline]
	pub fn into_inner(self) -> W {
		self.inner
	}
}

impl<W: std::io::Write> MediaWrite for StdWriteAdapter<W> {
	#[inline]
	fn write(&mut self, buf: &[u8]) -> IoResult<usize> {
		self.inner.write(buf).map_err(IoError::from)
	}

	#[inline]
	fn flush(&mut self) -> IoResult<()> {
		self.inner.flush().map_err(IoError::from)
	}
}

impl MediaWrite for Vec<u8> {
	#[inline]
	fn write(&mut self, buf: &[u8]) -> IoResult<usize> {
		self.extend_from_slice(buf);
		Ok(buf.len())
	}

	#[inline]
	fn flush(&mut self) -> IoResult<()> {
		Ok(())
	}
}
