mod convert;
mod decode;
mod encode;

pub use convert::{convert_sample, convert_value};
pub use decode::deinterleave;
pub use encode::interleave;
