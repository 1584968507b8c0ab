use crate::{
    avoidance::{decide, is_clear, Avoidance, Maneuver, Side, Step, SCAN_SEQUENCE},
    command::Command,
    drive::{Chassis, Motion, Speed},
    servo::{Angle, Scanner},
    sonar::{Distance, Ranger},
};
use embedded_hal_async::delay::DelayNs;

/// Owns the drive base, the scanning sonar and the shared speed, and runs
/// commands one at a time to completion.
pub struct Rover<C, R, S, D> {
    chassis: C,
    ranger: R,
    scanner: S,
    delay: D,
    speed: Speed,
}

impl<C, R, S, D> Rover<C, R, S, D>
where
    C: Chassis,
    R: Ranger,
    S: Scanner,
    D: DelayNs,
{
    pub fn new(chassis: C, ranger: R, scanner: S, delay: D) -> Self {
        Self {
            chassis,
            ranger,
            scanner,
            delay,
            speed: Speed::default(),
        }
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    /// Stops both motors and centres the scanner.
    pub fn park(&mut self) {
        self.chassis.apply(Motion::Stop, self.speed);
        self.scanner.look(Angle::CENTER);
    }

    /// Runs a command. Returns the scan report when the command was AVOID.
    pub async fn execute(&mut self, command: Command) -> Option<Avoidance> {
        match command {
            Command::Forward => self.chassis.apply(Motion::Forward, self.speed),
            Command::Backward => self.chassis.apply(Motion::Backward, self.speed),
            Command::Left => self.chassis.apply(Motion::Left, self.speed),
            Command::Right => self.chassis.apply(Motion::Right, self.speed),
            Command::Stop => self.chassis.apply(Motion::Stop, self.speed),
            Command::SpeedUp => self.speed.raise(),
            Command::SpeedDown => self.speed.lower(),
            Command::Avoid => return Some(self.avoid().await),
        }
        None
    }

    pub async fn avoid(&mut self) -> Avoidance {
        let center = self.ranger.measure().await;

        if is_clear(center) {
            self.run(Maneuver::Cruise.steps()).await;
            return Avoidance {
                center,
                left: None,
                right: None,
                maneuver: Maneuver::Cruise,
            };
        }

        let (left, right) = self.run(SCAN_SEQUENCE).await;
        let left = left.unwrap_or(Distance::NO_ECHO);
        let right = right.unwrap_or(Distance::NO_ECHO);

        let maneuver = decide(left, right);
        self.run(maneuver.steps()).await;

        Avoidance {
            center,
            left: Some(left),
            right: Some(right),
            maneuver,
        }
    }

    async fn run(&mut self, steps: &[Step]) -> (Option<Distance>, Option<Distance>) {
        let mut left = None;
        let mut right = None;

        for step in steps {
            match *step {
                Step::Drive(motion) => self.chassis.apply(motion, self.speed),
                Step::Look(angle) => self.scanner.look(angle),
                Step::Hold(ms) => self.delay.delay_ms(ms).await,
                Step::Measure(Side::Left) => left = Some(self.ranger.measure().await),
                Step::Measure(Side::Right) => right = Some(self.ranger.measure().await),
            }
        }

        (left, right)
    }
}
