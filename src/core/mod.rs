mod data;
mod sample;

pub use data::{AnyWavData, WavData};
pub use sample::{Sample, SampleKind};

use crate::io::IoResult;

/// A step applied to decoded audio between load and save.
pub trait Transform {
	fn apply(&mut self, data: AnyWavData) -> IoResult<AnyWavData>;

	fn name(&self) -> &'static str;
}
