/// Reporting domain - board, epic and repository models plus the pure
/// services that aggregate and filter them.
pub mod domain;
pub mod services;
