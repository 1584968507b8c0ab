use crate::{hardware::pwm::PwmOutput, peripherals::PeripheralsServo};
use defmt::info;
use embassy_rp::{peripherals::PWM_CH6, pwm::Config};
use rover_core::{constants::SERVO_PERIOD_US, ScanServo};

pub type Servo = ScanServo<PwmOutput<PWM_CH6>>;

pub fn init(p: PeripheralsServo) -> Servo {
    info!("Starting servo");

    let mut config = Config::default();

    // 125 MHz / 125 = 1 tick per microsecond, 20 ms period
    config.top = SERVO_PERIOD_US - 1;
    config.divider = 125.into();

    ScanServo::new(PwmOutput::new(p.PWM_CH6, p.PIN_12, config))
}
