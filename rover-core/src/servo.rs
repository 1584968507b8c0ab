use crate::constants::{
    LOOK_CENTER, SERVO_MAX_PULSE_US, SERVO_MIN_PULSE_US, SERVO_PERIOD_US,
};
use embedded_hal::pwm::SetDutyCycle;

/// Servo angle in degrees, 0 to 180.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Angle(u8);

impl Angle {
    pub const MAX: u8 = 180;
    pub const CENTER: Angle = Angle(LOOK_CENTER);

    pub const fn new(degrees: u8) -> Self {
        if degrees > Self::MAX {
            Self(Self::MAX)
        } else {
            Self(degrees)
        }
    }

    pub const fn degrees(self) -> u8 {
        self.0
    }

    pub const fn pulse_micros(self) -> u16 {
        let span = (SERVO_MAX_PULSE_US - SERVO_MIN_PULSE_US) as u32;
        SERVO_MIN_PULSE_US + (span * self.0 as u32 / Self::MAX as u32) as u16
    }
}

impl Default for Angle {
    fn default() -> Self {
        Self::CENTER
    }
}

pub trait Scanner {
    fn look(&mut self, angle: Angle);
}

/// Hobby servo on a 50 Hz PWM output. There is no position feedback.
pub struct ScanServo<P> {
    pwm: P,
}

impl<P: SetDutyCycle> ScanServo<P> {
    pub fn new(pwm: P) -> Self {
        Self { pwm }
    }
}

impl<P: SetDutyCycle> Scanner for ScanServo<P> {
    fn look(&mut self, angle: Angle) {
        self.pwm
            .set_duty_cycle_fraction(angle.pulse_micros(), SERVO_PERIOD_US)
            .ok();
    }
}
