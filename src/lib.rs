// Library crate: the binary and the integration tests reach everything through here.
pub mod bridge;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;
pub mod shell;
