use crate::{
    constants::{
        LOOK_CENTER, LOOK_LEFT, LOOK_RIGHT, OBSTACLE_THRESHOLD, RECENTER_SETTLE,
        REVERSE_DURATION, SCAN_SETTLE, TURN_DURATION,
    },
    drive::Motion,
    servo::Angle,
    sonar::Distance,
};

pub const THRESHOLD: Distance = Distance::cm(OBSTACLE_THRESHOLD);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Side {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Step {
    Drive(Motion),
    Look(Angle),
    /// Milliseconds.
    Hold(u32),
    Measure(Side),
}

pub const SCAN_SEQUENCE: &[Step] = &[
    Step::Drive(Motion::Stop),
    Step::Look(Angle::new(LOOK_LEFT)),
    Step::Hold(SCAN_SETTLE),
    Step::Measure(Side::Left),
    Step::Look(Angle::new(LOOK_RIGHT)),
    Step::Hold(SCAN_SETTLE),
    Step::Measure(Side::Right),
    Step::Look(Angle::new(LOOK_CENTER)),
    Step::Hold(RECENTER_SETTLE),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Maneuver {
    /// Path ahead is clear.
    Cruise,
    VeerLeft,
    VeerRight,
    /// Boxed in on all three sides.
    Retreat,
}

impl Maneuver {
    pub const fn steps(self) -> &'static [Step] {
        match self {
            Maneuver::Cruise => &[Step::Drive(Motion::Forward)],
            Maneuver::VeerLeft => &[
                Step::Drive(Motion::Left),
                Step::Hold(TURN_DURATION),
                Step::Drive(Motion::Forward),
            ],
            Maneuver::VeerRight => &[
                Step::Drive(Motion::Right),
                Step::Hold(TURN_DURATION),
                Step::Drive(Motion::Forward),
            ],
            Maneuver::Retreat => &[
                Step::Drive(Motion::Backward),
                Step::Hold(REVERSE_DURATION),
                Step::Drive(Motion::Stop),
            ],
        }
    }
}

pub fn is_clear(distance: Distance) -> bool {
    distance >= THRESHOLD
}

/// Picks a way out once the path ahead is blocked. The left side wins only
/// when it is strictly more open than the right.
pub fn decide(left: Distance, right: Distance) -> Maneuver {
    if left > right && is_clear(left) {
        Maneuver::VeerLeft
    } else if is_clear(right) {
        Maneuver::VeerRight
    } else {
        Maneuver::Retreat
    }
}

/// Result of one AVOID run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Avoidance {
    pub center: Distance,
    pub left: Option<Distance>,
    pub right: Option<Distance>,
    pub maneuver: Maneuver,
}
