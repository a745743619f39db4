//! Small programs used as launch targets when testing how a parent process
//! forwards arguments, environment variables, output and exit statuses.
//!
//! Each binary is a thin wrapper over one entry point here:
//!
//! - `pytron-example`: [`greeter::cli_main`] with [`greeter::Variant::Raising`]
//! - `pytron-example-quiet`: [`greeter::cli_main`] with [`greeter::Variant::Quiet`]
//! - `exit-code-custom`: [`exit_code::cli_main`]
//! - `exit-code-0`, `exit-code-1`: [`exit_code::fixed_cli_main`]

pub mod env;
pub mod exit_code;
pub mod greeter;
pub mod render;
