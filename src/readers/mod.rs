pub mod record_parser;
pub mod text_source;

pub use record_parser::{parse_current_line, parse_extreme_line, ParseReport, RecordParser, RecordShape};
pub use text_source::{read_optional_text, read_text};
