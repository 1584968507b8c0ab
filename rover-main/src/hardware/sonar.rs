use crate::peripherals::PeripheralsSonar;
use defmt::info;
use embassy_rp::{
    gpio::{Input, Level, Output, Pull},
    peripherals::{PIN_10, PIN_11},
};
use embassy_time::{Delay, Instant};
use rover_core::{Clock, Hcsr04};

pub struct Uptime;

impl Clock for Uptime {
    fn now_micros(&self) -> u64 {
        Instant::now().as_micros()
    }
}

pub type Sonar = Hcsr04<Output<'static, PIN_10>, Input<'static, PIN_11>, Uptime, Delay>;

pub fn init(p: PeripheralsSonar) -> Sonar {
    info!("Starting sonar");

    let trigger = Output::new(p.PIN_10, Level::Low);
    let echo = Input::new(p.PIN_11, Pull::None);

    Hcsr04::new(trigger, echo, Uptime, Delay)
}
