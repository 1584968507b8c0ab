#![cfg_attr(not(test), no_std)]

pub mod avoidance;
pub mod command;
pub mod constants;
pub mod drive;
pub mod rover;
pub mod servo;
pub mod sonar;

pub use avoidance::{Avoidance, Maneuver};
pub use command::{Command, LineReader};
pub use drive::{Channel, Chassis, Drive, HBridge, Motion, Speed};
pub use rover::Rover;
pub use servo::{Angle, ScanServo, Scanner};
pub use sonar::{Clock, Distance, Hcsr04, Ranger};
