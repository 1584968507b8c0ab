use crate::{hardware::pwm::PwmOutput, peripherals::PeripheralsMotor};
use defmt::info;
use embassy_rp::{
    gpio::{Level, Output},
    peripherals::{PIN_2, PIN_3, PIN_6, PIN_7, PWM_CH2, PWM_CH4},
    pwm::Config,
};
use rover_core::{Drive, HBridge};

type LeftMotor = HBridge<Output<'static, PIN_2>, Output<'static, PIN_3>, PwmOutput<PWM_CH2>>;
type RightMotor = HBridge<Output<'static, PIN_6>, Output<'static, PIN_7>, PwmOutput<PWM_CH4>>;

pub type Motors = Drive<LeftMotor, RightMotor>;

pub fn init(p: PeripheralsMotor) -> Motors {
    info!("Starting motors");

    let mut config = Config::default();

    // duty 0..=255 maps straight onto the compare value
    config.top = 254;
    config.divider = 255.into();

    let left = HBridge::new(
        Output::new(p.PIN_2, Level::Low),
        Output::new(p.PIN_3, Level::Low),
        PwmOutput::new(p.PWM_CH2, p.PIN_4, config.clone()),
    );
    let right = HBridge::new(
        Output::new(p.PIN_6, Level::Low),
        Output::new(p.PIN_7, Level::Low),
        PwmOutput::new(p.PWM_CH4, p.PIN_8, config),
    );

    Drive::new(left, right)
}
