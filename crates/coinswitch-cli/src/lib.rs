/*
[INPUT]:  Public API exports for coinswitch-cli crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod commands;
pub mod config;

pub use commands::Command;
pub use config::CliConfig;
