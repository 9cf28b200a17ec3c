//! Input readers: workbook and delimited-text sources.

mod parser;
mod sheet;
mod source;
mod workbook;

pub use parser::{Parser, ParserConfig};
pub use sheet::{MergeRange, RawSheet};
pub use source::SourceMetadata;
pub use workbook::{WorkbookConfig, WorkbookReader};
