pub mod pcm;

pub use pcm::{convert_sample, deinterleave, interleave};
