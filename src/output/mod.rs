//! Report rendering

pub mod formatter;

pub use formatter::{
    save_report_to_file, ConsoleFormatter, JsonFormatter, MarkdownFormatter, OutputFormatter,
    ReportGenerator,
};
