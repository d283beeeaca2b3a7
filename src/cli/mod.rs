//! Command implementations behind the `snet` binary.

pub mod commands;
