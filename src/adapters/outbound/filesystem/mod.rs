/// Filesystem adapters for file I/O operations
mod cart_writer;
mod catalog_reader;
mod report_writer;

pub use cart_writer::{CartDocument, CartDocumentLine, JsonCartWriter};
pub use catalog_reader::JsonFileCatalog;
pub use report_writer::{ReportFileWriter, StdoutPresenter};
