use crate::io::{IoError, IoResult};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleKind {
	I8,
	U8,
	I16,
	U16,
	I32,
	U32,
}

impl SampleKind {
	pub const ALL: [SampleKind; 6] = [
		SampleKind::I8,
		SampleKind::U8,
		SampleKind::I16,
		SampleKind::U16,
		SampleKind::I32,
		SampleKind::U32,
	];

	/// 8-bit PCM is unsigned, wider PCM is signed.
	pub fn canonical(bits: u16) -> Option<Self> {
		match bits {
			8 => Some(SampleKind::U8),
			16 => Some(SampleKind::I16),
			32 => Some(SampleKind::I32),
			_ => None,
		}
	}

	pub const fn bits(self) -> u16 {
		match self {
			SampleKind::I8 | SampleKind::U8 => 8,
			SampleKind::I16 | SampleKind::U16 => 16,
			SampleKind::I32 | SampleKind::U32 => 32,
		}
	}

	pub const fn bytes(self) -> usize {
		(self.bits() / 8) as usize
	}

	pub const fn is_signed(self) -> bool {
		matches!(self, SampleKind::I8 | SampleKind::I16 | SampleKind::I32)
	}

	pub fn min(self) -> f64 {
		match self {
			SampleKind::I8 => i8::MIN as f64,
			SampleKind::I16 => i16::MIN as f64,
			SampleKind::I32 => i32::MIN as f64,
			SampleKind::U8 | SampleKind::U16 | SampleKind::U32 => 0.0,
		}
	}

	pub fn max(self) -> f64 {
		match self {
			SampleKind::I8 => i8::MAX as f64,
			SampleKind::U8 => u8::MAX as f64,
			SampleKind::I16 => i16::MAX as f64,
			SampleKind::U16 => u16::MAX as f64,
			SampleKind::I32 => i32::MAX as f64,
			SampleKind::U32 => u32::MAX as f64,
		}
	}

	/// Position of `value` within this kind's range, as a fraction in `[0, 1]`.
	pub fn normalize(self, value: f64) -> f64 {
		(value - self.min()) / (self.max() - self.min())
	}

	/// Maps a `[0, 1]` fraction onto this kind's range, rounded and clamped.
	pub fn denormalize(self, fraction: f64) -> f64 {
		let value = fraction * (self.max() - self.min()) + self.min();
		value.round().clamp(self.min(), self.max())
	}

	pub const fn name(self) -> &'static str {
		match self {
			SampleKind::I8 => "i8",
			SampleKind::U8 => "u8",
			SampleKind::I16 => "i16",
			SampleKind::U16 => "u16",
			SampleKind::I32 => "i32",
			SampleKind::U32 => "u32",
		}
	}
}

impl fmt::Display for SampleKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for SampleKind {
	type Err = IoError;

	fn from_str(s: &str) -> IoResult<Self> {
		SampleKind::ALL
			.into_iter()
			.find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
			.ok_or_else(|| IoError::invalid_input(format!("unknown sample type: {}", s)))
	}
}

/// A fixed-width integer sample stored little-endian on disk.
pub trait Sample: Copy + Default + PartialEq + fmt::Debug + Send + Sync + 'static {
	const KIND: SampleKind;

	/// Reads one sample from the first `KIND.bytes()` bytes of `bytes`.
	fn read_le(bytes: &[u8]) -> Self;

	/// Writes this sample into the first `KIND.bytes()` bytes of `out`.
	fn write_le(self, out: &mut [u8]);

	fn to_f64(self) -> f64;

	/// Saturating conversion; the fractional part is truncated.
	fn from_f64(value: f64) -> Self;
}

macro_rules! impl_sample {
	($ty:ty, $kind:expr) => {
		impl Sample for $ty {
			const KIND: SampleKind = $kind;

			#[inline]
			fn read_le(bytes: &[u8]) -> Self {
				let mut raw = [0u8; std::mem::size_of::<$ty>()];
				raw.copy_from_slice(&bytes[..std::mem::size_of::<$ty>()]);
				<$ty>::from_le_bytes(raw)
			}

			#[inline]
			fn write_le(self, out: &mut [u8]) {
				out[..std::mem::size_of::<$ty>()].copy_from_slice(&self.to_le_bytes());
			}

			#[inline]
			fn to_f64(self) -> f64 {
				self as f64
			}

			#[inline]
			fn from_f64(value: f64) -> Self {
				value as $ty
			}
		}
	};
}

impl_sample!(i8, SampleKind::I8);
impl_sample!(u8, SampleKind::U8);
impl_sample!(i16, SampleKind::I16);
impl_sample!(u16, SampleKind::U16);
impl_sample!(i32, SampleKind::I32);
impl_sample!(u32, SampleKind::U32);
