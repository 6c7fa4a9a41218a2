mod error;
mod reader;
mod writer;

pub use error::{IoError, IoErrorKind, IoResult};
pub use reader::{MediaRead, ReadPrimitives, StdReadAdapter};
pub use writer::{MediaWrite, StdWriteAdapter, WritePrimitives};
