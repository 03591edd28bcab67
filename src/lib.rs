#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

use std::io;

use thiserror::Error;

pub mod proto;
pub mod client;
pub mod commands;

pub use client::PDSession;
pub use commands::Command;

/// General error that can occur during communication with a display
///
/// Every failure aborts the current command sequence; no retry is attempted.
#[derive(Debug, Error)]
pub enum Error {
    /// Display address could not be resolved
    #[error("cannot resolve display address: {0}")]
    AddressResolution(io::Error),
    /// Socket could not be created or configured
    #[error("cannot set up socket: {0}")]
    SocketCreate(io::Error),
    /// TCP connect to the display failed or timed out
    #[error("cannot connect to display: {0}")]
    Connect(io::Error),
    /// Write on the display connection failed
    #[error("cannot write to display: {0}")]
    Write(io::Error),
    /// Read on the display connection failed or timed out
    #[error("cannot read from display: {0}")]
    Read(io::Error),
}
