use crate::constants::{ECHO_TIMEOUT_US, TRIGGER_PULSE_US, TRIGGER_SETTLE_US};
use embassy_futures::select::{select, Either};
use embedded_hal::digital::OutputPin;
use embedded_hal_async::{delay::DelayNs, digital::Wait};

/// Distance in centimetres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Distance(u16);

impl Distance {
    /// Reported when no echo came back in time. Compares greater than any
    /// measured distance, so callers treat it as a clear path.
    pub const NO_ECHO: Distance = Distance(u16::MAX);

    pub const fn cm(cm: u16) -> Self {
        Self(cm)
    }

    /// Round trip time to distance: `micros * 0.034 / 2`, truncated.
    pub const fn from_echo_micros(micros: u32) -> Self {
        let cm = micros as u64 * 17 / 1000;
        if cm >= u16::MAX as u64 {
            Self(u16::MAX - 1)
        } else {
            Self(cm as u16)
        }
    }

    pub const fn as_cm(self) -> u16 {
        self.0
    }

    pub const fn is_echo(self) -> bool {
        self.0 != Self::NO_ECHO.0
    }
}

/// Free running microsecond counter used to time the echo pulse.
pub trait Clock {
    fn now_micros(&self) -> u64;
}

#[allow(async_fn_in_trait)]
pub trait Ranger {
    async fn measure(&mut self) -> Distance;
}

/// HC-SR04 style ultrasonic sensor.
pub struct Hcsr04<T, E, C, D> {
    trigger: T,
    echo: E,
    clock: C,
    delay: D,
}

impl<T, E, C, D> Hcsr04<T, E, C, D>
where
    T: OutputPin,
    E: Wait,
    C: Clock,
    D: DelayNs,
{
    pub fn new(mut trigger: T, echo: E, clock: C, delay: D) -> Self {
        trigger.set_low().ok();
        Self {
            trigger,
            echo,
            clock,
            delay,
        }
    }

    async fn ping(&mut self) {
        self.trigger.set_low().ok();
        self.delay.delay_us(TRIGGER_SETTLE_US).await;
        self.trigger.set_high().ok();
        self.delay.delay_us(TRIGGER_PULSE_US).await;
        self.trigger.set_low().ok();
    }

    /// Times the next echo pulse. A line still high from an earlier ping is
    /// left to fall before the timer starts.
    async fn echo_micros(&mut self) -> Option<u32> {
        let edge = self.echo.wait_for_rising_edge();
        match select(edge, self.delay.delay_us(ECHO_TIMEOUT_US)).await {
            Either::First(Ok(())) => {}
            _ => return None,
        }
        let start = self.clock.now_micros();

        let edge = self.echo.wait_for_falling_edge();
        match select(edge, self.delay.delay_us(ECHO_TIMEOUT_US)).await {
            Either::First(Ok(())) => {}
            _ => return None,
        }
        let end = self.clock.now_micros();

        Some(end.saturating_sub(start).min(u32::MAX as u64) as u32)
    }
}

impl<T, E, C, D> Ranger for Hcsr04<T, E, C, D>
where
    T: OutputPin,
    E: Wait,
    C: Clock,
    D: DelayNs,
{
    async fn measure(&mut self) -> Distance {
        self.ping().await;

        match self.echo_micros().await {
            Some(micros) => Distance::from_echo_micros(micros),
            None => Distance::NO_ECHO,
        }
    }
}
