pub mod wav;

pub use wav::{WavFile, WavFormat, WavReader, WavWriter};
