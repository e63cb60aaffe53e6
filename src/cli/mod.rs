//! Command-line interface module
//!
//! Wires validated settings and the status client into the polling loop.

pub mod track;
