/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces the configurator core uses to reach
/// the catalog, the cart and the user's terminal.
pub mod cart_gateway;
pub mod catalog_repository;
pub mod output_presenter;
pub mod progress_reporter;
pub mod report_formatter;

pub use cart_gateway::{CartGateway, CartLine};
pub use catalog_repository::{CatalogRepository, CategoryLabels};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use report_formatter::BuildReportFormatter;
