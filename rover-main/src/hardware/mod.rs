use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, channel::Channel};
use rover_core::Command;

pub mod motor;
pub mod pwm;
pub mod servo;
pub mod sonar;
pub mod uart;

/// Parsed commands waiting for the control task. Commands that arrive during
/// an avoidance run queue up here.
pub static COMMAND_CHANNEL: Channel<CriticalSectionRawMutex, Command, 8> = Channel::new();
