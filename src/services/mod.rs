pub mod report_writer;
pub mod smiles_service;

pub use report_writer::ReportWriter;
pub use smiles_service::SmilesService;
