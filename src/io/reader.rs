use crate::io::{IoError, IoErrorKind, IoResult};

const SKIP_CHUNK: usize = 4096;

pub trait MediaRead {
	fn read(&mut self, buf: &mut [u8]) -> IoResult<usize>;
}

pub trait ReadPrimitives: MediaRead {
	/// Fills as much of `buf` as the source allows; returns the byte count.
	fn read_full(&mut self, buf: &mut [u8]) -> IoResult<usize> {
		let mut filled = 0;
		while filled < buf.len() {
			match self.read(&mut buf[filled..]) {
				Ok(0) => break,
				Ok(n) => filled += n,
				Err(e) if matches!(e.kind(), IoErrorKind::Interrupted) => continue,
				Err(e) => return Err(e),
			}
		}
		Ok(filled)
	}

	fn read_exact(&mut self, buf: &mut [u8]) -> IoResult<()> {
		if self.read_full(buf)? < buf.len() {
			return Err(IoError::unexpected_eof());
		}
		Ok(())
	}

	/// Discards up to `count` bytes and returns how many were actually skipped.
	fn skip(&mut self, count: u64) -> IoResult<u64> {
		let mut scratch = [0u8; SKIP_CHUNK];
		let mut remaining = count;
		while remaining > 0 {
			let want = remaining.min(SKIP_CHUNK as u64) as usize;
			let got = self.read_full(&mut scratch[..want])?;
			remaining -= got as u64;
			if got < want {
				break;
			}
		}
		Ok(count - remaining)
	}

	#[inline]
	fn read_tag(&mut self) -> IoResult<[u8; 4]> {
		let mut buf = [0u8; 4];
		self.read_exact(&mut buf)?;
		Ok(buf)
	}

	#[inline]
	fn read_u16_le(&mut self) -> IoResult<u16> {
		let mut buf = [0u8; 2];
		self.read_exact(&mut buf)?;
		Ok(u16::from_le_bytes(buf))
	}

	#[inline]
	fn read_u32_le(&mut self) -> IoResult<u32> {
		let mut buf = [0u8; 4];
		self.read_exact(&mut buf)?;
		Ok(u32::from_le_bytes(buf))
	}
}

impl<T: MediaRead> ReadPrimitives for T {}

pub struct StdReadAdapter<R> {
	inner: R,
}

impl<R> StdReadAdapter<R> {
	#[inline]
	pub const fn new(inner: R) -> Self {
		Self { inner }
	}

	#[inline]
	pub fn into_inner(self) -> R {
		self.inner
	}
}

impl<R: std::io::Read> MediaRead for StdReadAdapter<R> {
	#[inline]
	fn read(&mut self, buf: &mut [u8]) -> IoResult<usize> {
		self.inner.read(buf).map_err(IoError::from)
	}
}

impl MediaRead for &[u8] {
	fn read(&mut self, buf: &mut [u8]) -> IoResult<usize> {
		let amt = std::cmp::min(self.len(), buf.len());
		let (a, b) = self.split_at(amt);
		buf[..amt].copy_from_slice(a);
		*self = b;
		Ok(amt)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn reads_little_endian_fields() {
		let mut src: &[u8] = &[b'f', b'm', b't', b' ', 0x10, 0, 0, 0, 0x01, 0x00];
		assert_eq!(&src.read_tag().unwrap(), b"fmt ");
		assert_eq!(src.read_u32_le().unwrap(), 16);
		assert_eq!(src.read_u16_le().unwrap(), 1);
		assert!(src.is_empty());
	}

	#[test]
	fn read_exact_reports_eof() {
		let mut src: &[u8] = &[1, 2, 3];
		let err = src.read_u32_le().unwrap_err();
		assert_eq!(err.kind(), IoErrorKind::UnexpectedEof);
	}

	#[test]
	fn skip_stops_at_end_of_source() {
		let data = vec![7u8; 10_000];
		let mut src: &[u8] = &data;
		assert_eq!(src.skip(9_000).unwrap(), 9_000);
		assert_eq!(src.skip(5_000).unwrap(), 1_000);
		assert_eq!(src.skip(1).unwrap(), 0);
	}

	#[test]
	fn std_adapter_forwards_reads() {
		let mut reader = StdReadAdapter::new(std::io::Cursor::new(vec![0xAAu8, 0xBB]));
		assert_eq!(reader.read_u16_le().unwrap(), 0xBBAA);
	}
}
