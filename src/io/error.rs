use std::fmt;

pub type IoResult<T> = Result<T, IoError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoErrorKind {
	Io(std::io::ErrorKind),
	Format,
	MissingChunk,
	BitDepthMismatch,
	UnsupportedChannelCount,
	UnsupportedBitDepth,
	UnexpectedEof,
	InvalidInput,
	Interrupted,
}

#[derive(Debug, Clone)]
pub struct IoError {
	kind: IoErrorKind,
	message: String,
}

impl IoError {
	pub fn new(kind: IoErrorKind, message: impl Into<String>) -> Self {
		Self { kind, message: message.into() }
	}

	pub fn invalid_data(message: impl Into<String>) -> Self {
		Self::new(IoErrorKind::Format, message)
	}

	pub fn invalid_input(message: impl Into<String>) -> Self {
		Self::new(IoErrorKind::InvalidInput, message)
	}

	pub fn unexpected_eof() -> Self {
		Self::new(IoErrorKind::UnexpectedEof, "unexpected end of input")
	}

	pub fn missing_chunk(tag: &[u8; 4]) -> Self {
		let name = String::from_utf8_lossy(tag);
		Self::new(IoErrorKind::MissingChunk, format!("couldn't find '{}' subchunk", name))
	}

	pub fn bit_depth_mismatch(file_bits: u16, sample_bits: u16) -> Self {
		Self::new(
			IoErrorKind::BitDepthMismatch,
			format!(
				"bit depth mismatch: file has {} bits, sample type is {} bits",
				file_bits, sample_bits
			),
		)
	}

	pub fn unsupported_channels(channels: u16) -> Self {
		Self::new(
			IoErrorKind::UnsupportedChannelCount,
			format!("unsupported channel count {} (expected 1 or 2)", channels),
		)
	}

	pub fn unsupported_bit_depth(bits: u16) -> Self {
		Self::new(IoErrorKind::UnsupportedBitDepth, format!("unsupported bit depth {}", bits))
	}

	#[inline]
	pub fn kind(&self) -> IoErrorKind {
		self.kind
	}

	#[inline]
	pub fn message(&self) -> &str {
		&self.message
	}
}

impl fmt::Display for IoError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.message)
	}
}

impl std::error::Error for IoError {}

impl From<std::io::Error> for IoError {
	fn from(err: std::io::Error) -> Self {
		let kind = match err.kind() {
			std::io::ErrorKind::UnexpectedEof => IoErrorKind::UnexpectedEof,
			std::io::ErrorKind::Interrupted => IoErrorKind::Interrupted,
			other => IoErrorKind::Io(other),
		};
		Self::new(kind, err.to_string())
	}
}

impl From<IoError> for std::io::Error {
	fn from(err: IoError) -> Self {
		let kind = match err.kind {
			IoErrorKind::Io(kind) => kind,
			IoErrorKind::UnexpectedEof => std::io::ErrorKind::UnexpectedEof,
			IoErrorKind::Interrupted => std::io::ErrorKind::Interrupted,
			IoErrorKind::InvalidInput => std::io::ErrorKind::InvalidInput,
			_ => std::io::ErrorKind::InvalidData,
		};
		std::io::Error::new(kind, err.message)
	}
}
