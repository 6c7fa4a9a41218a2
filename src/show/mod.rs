use crate::container::WavFile;
use crate::core::AnyWavData;
use crate::io::IoResult;
use prettytable::{Table, format, row};

#[derive(Debug, Clone, Copy, Default)]
pub struct ShowOptions {
	/// Leading samples to list per channel; 0 disables the listing.
	pub sample_limit: usize,
}

pub struct Show {
	input_path: String,
	opts: ShowOptions,
}

impl Show {
	pub fn new(input_path: String, opts: ShowOptions) -> Self {
		Self { input_path, opts }
	}

	pub fn run(&self) -> IoResult<()> {
		let file = WavFile::open(&self.input_path)?;

		info_table(&self.input_path, &file).printstd();

		if self.opts.sample_limit > 0 {
			match AnyWavData::decode(&file) {
				Ok(data) => samples_table(&data, self.opts.sample_limit).printstd(),
				Err(e) => log::warn!("no sample listing for {}: {}", self.input_path, e),
			}
		}

		Ok(())
	}
}

pub fn info_table(path: &str, file: &WavFile) -> Table {
	let mut table = Table::new();
	table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
	table.set_titles(row!["field", "value"]);

	table.add_row(row!["path", path]);
	table.add_row(row!["sample rate", format!("{} Hz", file.sample_rate)]);
	table.add_row(row!["channels", file.num_channels]);
	table.add_row(row!["bits per sample", file.bits_per_sample]);
	table.add_row(row!["block align", file.block_align]);
	table.add_row(row!["byte rate", file.byte_rate()]);
	table.add_row(row!["data size", format!("{} bytes", file.data_size)]);
	table.add_row(row!["samples per channel", file.num_samples]);
	table.add_row(row!["duration", format!("{:.3} s", file.duration_secs())]);

	table
}

pub fn samples_table(data: &AnyWavData, limit: usize) -> Table {
	let stereo = data.num_channels() == 2;
	let left = data.head(0, limit);
	let right = if stereo { data.head(1, limit) } else { Vec::new() };

	let mut table = Table::new();
	table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
	if stereo {
		let kind = data.kind();
		table.set_titles(row!["#", format!("left ({})", kind), format!("right ({})", kind)]);
	} else {
		table.set_titles(row!["#", format!("mono ({})", data.kind())]);
	}

	for (i, sample) in left.iter().enumerate() {
		match right.get(i) {
			Some(r) => table.add_row(row![i, sample, r]),
			None => table.add_row(row![i, sample]),
		};
	}

	table
}
