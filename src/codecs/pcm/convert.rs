use crate::core::{Sample, SampleKind};

pub fn convert_value(value: f64, from: SampleKind, to: SampleKind) -> f64 {
	to.denormalize(from.normalize(value))
}

#[inline]
pub fn convert_sample<F: Sample, T: Sample>(sample: F) -> T {
	T::from_f64(convert_value(sample.to_f64(), F::KIND, T::KIND))
}
