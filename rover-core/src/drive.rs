use crate::constants::{DEFAULT_SPEED, SPEED_STEP};
use embedded_hal::{digital::OutputPin, pwm::SetDutyCycle};

/// Common PWM magnitude applied to both drive channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Speed(u8);

impl Speed {
    pub const MIN: Speed = Speed(u8::MIN);
    pub const MAX: Speed = Speed(u8::MAX);

    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    pub const fn half(self) -> u8 {
        self.0 / 2
    }

    pub fn raise(&mut self) {
        self.0 = self.0.saturating_add(SPEED_STEP);
    }

    pub fn lower(&mut self) {
        self.0 = self.0.saturating_sub(SPEED_STEP);
    }
}

impl Default for Speed {
    fn default() -> Self {
        Self(DEFAULT_SPEED)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Forward,
    Reverse,
    /// Both direction pins low.
    Released,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelState {
    pub direction: Direction,
    pub duty: u8,
}

impl ChannelState {
    pub const RELEASED: ChannelState = ChannelState {
        direction: Direction::Released,
        duty: 0,
    };

    const fn forward(duty: u8) -> Self {
        Self {
            direction: Direction::Forward,
            duty,
        }
    }

    const fn reverse(duty: u8) -> Self {
        Self {
            direction: Direction::Reverse,
            duty,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Motion {
    Forward,
    Backward,
    Left,
    Right,
    Stop,
}

impl Motion {
    /// Left and right channel states for this motion. Turns pivot by running
    /// the inner wheel backwards at half speed.
    pub const fn channels(self, speed: Speed) -> (ChannelState, ChannelState) {
        match self {
            Motion::Forward => (
                ChannelState::forward(speed.get()),
                ChannelState::forward(speed.get()),
            ),
            Motion::Backward => (
                ChannelState::reverse(speed.get()),
                ChannelState::reverse(speed.get()),
            ),
            Motion::Left => (
                ChannelState::reverse(speed.half()),
                ChannelState::forward(speed.get()),
            ),
            Motion::Right => (
                ChannelState::forward(speed.get()),
                ChannelState::reverse(speed.half()),
            ),
            Motion::Stop => (ChannelState::RELEASED, ChannelState::RELEASED),
        }
    }
}

pub trait Channel {
    fn set(&mut self, state: ChannelState);
}

pub trait Chassis {
    fn apply(&mut self, motion: Motion, speed: Speed);
}

/// One motor behind an H-bridge: two direction inputs and a PWM enable.
pub struct HBridge<A, B, P> {
    in_a: A,
    in_b: B,
    enable: P,
}

impl<A: OutputPin, B: OutputPin, P: SetDutyCycle> HBridge<A, B, P> {
    pub fn new(in_a: A, in_b: B, enable: P) -> Self {
        let mut bridge = Self { in_a, in_b, enable };
        bridge.set(ChannelState::RELEASED);
        bridge
    }
}

impl<A: OutputPin, B: OutputPin, P: SetDutyCycle> Channel for HBridge<A, B, P> {
    fn set(&mut self, state: ChannelState) {
        let (a, b) = match state.direction {
            Direction::Forward => (true, false),
            Direction::Reverse => (false, true),
            Direction::Released => (false, false),
        };

        // direction first, the duty only takes effect on a settled bridge
        self.in_a.set_state(a.into()).ok();
        self.in_b.set_state(b.into()).ok();
        self.enable
            .set_duty_cycle_fraction(state.duty as u16, u8::MAX as u16)
            .ok();
    }
}

pub struct Drive<L, R> {
    left: L,
    right: R,
}

impl<L: Channel, R: Channel> Drive<L, R> {
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }
}

impl<L: Channel, R: Channel> Chassis for Drive<L, R> {
    fn apply(&mut self, motion: Motion, speed: Speed) {
        let (left, right) = motion.channels(speed);
        self.left.set(left);
        self.right.set(right);
    }
}
