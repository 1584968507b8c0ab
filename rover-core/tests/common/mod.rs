#![allow(dead_code)]

use embedded_hal::{digital, pwm};
use embedded_hal_async::{delay::DelayNs, digital::Wait};
use rover_core::{Angle, Chassis, Clock, Distance, Motion, Ranger, Rover, Scanner, Speed};
use std::{
    cell::{Cell, RefCell},
    collections::VecDeque,
    convert::Infallible,
    future::pending,
    rc::Rc,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Drive(Motion),
    Look(u8),
    Hold(u32),
    Micros(u32),
    Measure,
    Trigger(bool),
}

#[derive(Clone, Default)]
pub struct Log(Rc<RefCell<Vec<Event>>>);

impl Log {
    pub fn push(&self, event: Event) {
        self.0.borrow_mut().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

pub struct FakeChassis {
    log: Log,
    last: Rc<Cell<Option<(Motion, Speed)>>>,
}

impl Chassis for FakeChassis {
    fn apply(&mut self, motion: Motion, speed: Speed) {
        self.log.push(Event::Drive(motion));
        self.last.set(Some((motion, speed)));
    }
}

pub struct FakeRanger {
    log: Log,
    readings: VecDeque<Distance>,
}

impl Ranger for FakeRanger {
    async fn measure(&mut self) -> Distance {
        self.log.push(Event::Measure);
        self.readings.pop_front().unwrap_or(Distance::NO_ECHO)
    }
}

pub struct FakeScanner {
    log: Log,
}

impl Scanner for FakeScanner {
    fn look(&mut self, angle: Angle) {
        self.log.push(Event::Look(angle.degrees()));
    }
}

/// Completes immediately, recording what was asked for.
pub struct FakeDelay {
    log: Log,
}

impl FakeDelay {
    pub fn new(log: &Log) -> Self {
        Self { log: log.clone() }
    }
}

impl DelayNs for FakeDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.log.push(Event::Micros(ns / 1000));
    }

    async fn delay_us(&mut self, us: u32) {
        self.log.push(Event::Micros(us));
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.log.push(Event::Hold(ms));
    }
}

pub type FakeRover = Rover<FakeChassis, FakeRanger, FakeScanner, FakeDelay>;

pub struct Harness {
    pub rover: FakeRover,
    pub log: Log,
    pub last: Rc<Cell<Option<(Motion, Speed)>>>,
}

/// A rover whose sonar returns `readings` in order, then nothing.
pub fn harness(readings: &[u16]) -> Harness {
    let log = Log::default();
    let last = Rc::new(Cell::new(None));

    let rover = Rover::new(
        FakeChassis {
            log: log.clone(),
            last: last.clone(),
        },
        FakeRanger {
            log: log.clone(),
            readings: readings.iter().copied().map(Distance::cm).collect(),
        },
        FakeScanner { log: log.clone() },
        FakeDelay::new(&log),
    );

    Harness { rover, log, last }
}

#[derive(Clone, Default)]
pub struct FakePin {
    pub high: Rc<Cell<bool>>,
    log: Option<Log>,
}

impl FakePin {
    pub fn logged(log: &Log) -> Self {
        Self {
            high: Rc::default(),
            log: Some(log.clone()),
        }
    }

    pub fn is_high(&self) -> bool {
        self.high.get()
    }
}

impl digital::ErrorType for FakePin {
    type Error = Infallible;
}

impl digital::OutputPin for FakePin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.high.set(false);
        if let Some(log) = &self.log {
            log.push(Event::Trigger(false));
        }
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.high.set(true);
        if let Some(log) = &self.log {
            log.push(Event::Trigger(true));
        }
        Ok(())
    }
}

/// PWM output with a 0..=255 range, starting at an arbitrary nonzero duty so
/// tests notice when nothing was written.
#[derive(Clone)]
pub struct FakePwm {
    pub duty: Rc<Cell<u16>>,
    max: u16,
}

impl FakePwm {
    pub fn new(max: u16) -> Self {
        Self {
            duty: Rc::new(Cell::new(max / 3)),
            max,
        }
    }

    pub fn duty(&self) -> u16 {
        self.duty.get()
    }
}

impl pwm::ErrorType for FakePwm {
    type Error = Infallible;
}

impl pwm::SetDutyCycle for FakePwm {
    fn max_duty_cycle(&self) -> u16 {
        self.max
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        self.duty.set(duty);
        Ok(())
    }
}

#[derive(Clone, Copy, Debug)]
pub enum Echo {
    Pulse(u32),
    /// Never rises.
    Silent,
    /// Rises and never falls.
    Stuck,
}

#[derive(Clone, Default)]
pub struct FakeClock(pub Rc<Cell<u64>>);

impl Clock for FakeClock {
    fn now_micros(&self) -> u64 {
        self.0.get()
    }
}

/// Echo line that plays back one scripted response per rising edge, advancing
/// the shared clock as it goes. Level and edge waits differ: a line that is
/// already high satisfies `wait_for_high` at once, while `wait_for_rising_edge`
/// first sits out the rest of that pulse.
pub struct FakeEcho {
    script: VecDeque<Echo>,
    high: bool,
    /// Micros until a high line falls, `None` if it never does.
    falls_in: Option<u64>,
    clock: FakeClock,
}

impl FakeEcho {
    pub fn new(script: &[Echo], clock: &FakeClock) -> Self {
        Self {
            script: script.iter().copied().collect(),
            high: false,
            falls_in: None,
            clock: clock.clone(),
        }
    }

    /// Starts mid pulse, with the line falling after `remaining` micros.
    pub fn already_high(remaining: u32, script: &[Echo], clock: &FakeClock) -> Self {
        Self {
            high: true,
            falls_in: Some(remaining as u64),
            ..Self::new(script, clock)
        }
    }

    fn advance(&self, micros: u64) {
        self.clock.0.set(self.clock.0.get() + micros);
    }

    async fn rise(&mut self) -> Result<(), Infallible> {
        match self.script.pop_front() {
            Some(Echo::Pulse(micros)) => {
                self.advance(150);
                self.high = true;
                self.falls_in = Some(micros as u64);
                Ok(())
            }
            Some(Echo::Stuck) => {
                self.advance(150);
                self.high = true;
                self.falls_in = None;
                Ok(())
            }
            Some(Echo::Silent) | None => pending().await,
        }
    }

    async fn fall(&mut self) -> Result<(), Infallible> {
        match self.falls_in {
            Some(micros) => {
                self.advance(micros);
                self.high = false;
                self.falls_in = None;
                Ok(())
            }
            None => pending().await,
        }
    }
}

impl digital::ErrorType for FakeEcho {
    type Error = Infallible;
}

impl Wait for FakeEcho {
    async fn wait_for_high(&mut self) -> Result<(), Self::Error> {
        if self.high {
            return Ok(());
        }
        self.rise().await
    }

    async fn wait_for_low(&mut self) -> Result<(), Self::Error> {
        if !self.high {
            return Ok(());
        }
        self.fall().await
    }

    async fn wait_for_rising_edge(&mut self) -> Result<(), Self::Error> {
        if self.high {
            self.fall().await?;
        }
        self.rise().await
    }

    async fn wait_for_falling_edge(&mut self) -> Result<(), Self::Error> {
        if !self.high {
            self.rise().await?;
        }
        self.fall().await
    }

    async fn wait_for_any_edge(&mut self) -> Result<(), Self::Error> {
        if self.high {
            self.fall().await
        } else {
            self.rise().await
        }
    }
}
