/// Ports module defining interfaces for hexagonal architecture
///
/// The application core only talks to remote services, the terminal and the
/// table renderer through the outbound ports defined here.
pub mod outbound;
