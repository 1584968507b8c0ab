use core::convert::Infallible;
use embassy_rp::{
    pwm::{Channel, Config, Pwm, PwmPinA},
    Peripheral,
};
use embedded_hal::pwm::{ErrorType, SetDutyCycle};

/// Channel A of a PWM slice. Duty is the compare value, so `top + 1` is
/// always on.
pub struct PwmOutput<T: Channel> {
    pwm: Pwm<'static, T>,
    config: Config,
}

impl<T: Channel> PwmOutput<T> {
    pub fn new(
        inner: impl Peripheral<P = T> + 'static,
        a: impl Peripheral<P = impl PwmPinA<T>> + 'static,
        config: Config,
    ) -> Self {
        Self {
            pwm: Pwm::new_output_a(inner, a, config.clone()),
            config,
        }
    }
}

impl<T: Channel> ErrorType for PwmOutput<T> {
    type Error = Infallible;
}

impl<T: Channel> SetDutyCycle for PwmOutput<T> {
    fn max_duty_cycle(&self) -> u16 {
        self.config.top.saturating_add(1)
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        self.config.compare_a = duty;
        self.pwm.set_config(&self.config);
        Ok(())
    }
}
