//! Catalog of supported display commands

use crate::proto::MessageType;

/// Opcode of the power control command
pub const POWER_OPCODE: &[u8] = b"C203D6";

/// Opcode of the backlight parameter
pub const BACKLIGHT_OPCODE: &[u8] = b"0010";

/// Parameter value switching the display on
pub const POWER_ON: u16 = 1;

/// Parameter value switching the display off
pub const POWER_OFF: u16 = 4;

/// A display operation known to this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Switch the panel power state
    Power,
    /// Set the backlight level
    Backlight,
}

/// Wire-level description of a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    /// Message type byte placed in the frame header
    pub msg_type: MessageType,
    /// Fixed opcode bytes opening the message body
    pub opcode: &'static [u8],
}

impl Command {
    /// Wire description for this command
    pub fn spec(&self) -> CommandSpec {
        match self {
            Command::Power => CommandSpec {
                msg_type: MessageType::Command,
                opcode: POWER_OPCODE,
            },
            Command::Backlight => CommandSpec {
                msg_type: MessageType::SetParameter,
                opcode: BACKLIGHT_OPCODE,
            },
        }
    }
}
