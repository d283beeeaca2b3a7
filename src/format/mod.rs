//! Plain-text input for building networks from files.

pub mod reader;

pub use reader::EdgeListReader;
