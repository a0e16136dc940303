/// Application layer - Use cases, DTOs and read models
///
/// This layer joins board records with issue tracker records and hands
/// finished report models to the outbound ports for rendering.
pub mod api_clients;
pub mod dto;
pub mod read_models;
pub mod report_writer;
pub mod use_cases;

pub use api_clients::ApiClients;
pub use report_writer::ReportWriter;
