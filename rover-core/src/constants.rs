pub const BAUD_RATE: u32 = 9600;
pub const LINE_CAPACITY: usize = 32;

pub const DEFAULT_SPEED: u8 = 150;
pub const SPEED_STEP: u8 = 25;

// cm
pub const OBSTACLE_THRESHOLD: u16 = 20;

pub const TRIGGER_SETTLE_US: u32 = 2;
pub const TRIGGER_PULSE_US: u32 = 10;
pub const ECHO_TIMEOUT_US: u32 = 30_000; // ~5 m round trip

pub const SERVO_PERIOD_US: u16 = 20_000;
pub const SERVO_MIN_PULSE_US: u16 = 544;
pub const SERVO_MAX_PULSE_US: u16 = 2400;

pub const LOOK_CENTER: u8 = 90;
pub const LOOK_LEFT: u8 = 45;
pub const LOOK_RIGHT: u8 = 135;

// ms
pub const SCAN_SETTLE: u32 = 500;
pub const RECENTER_SETTLE: u32 = 300;
pub const TURN_DURATION: u32 = 400;
pub const REVERSE_DURATION: u32 = 300;
