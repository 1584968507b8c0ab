use embassy_rp::Peripherals;

macro_rules! make_peripherals {
    ($name:ident, ($($pin:ident), *)) => {
        paste::paste! {
            #[allow(non_snake_case)]
            pub struct $name {
                $(pub $pin: embassy_rp::peripherals::$pin,)*
            }

            macro_rules! [<$name:snake>] {
                ($p:ident) => {{
                    use crate::peripherals::*;
                    $name {
                        $($pin: $p.$pin,)*
                    }
                }}
            }
        }
    };
}

// rx = 1
make_peripherals! {
    PeripheralsUart,
    (UART0, PIN_1, DMA_CH0)
}

// left in1, in2, ena = 2, 3, 4
// right in3, in4, enb = 6, 7, 8
make_peripherals! {
    PeripheralsMotor,
    (PIN_2, PIN_3, PIN_4, PIN_6, PIN_7, PIN_8, PWM_CH2, PWM_CH4)
}

// trigger = 10, echo = 11
make_peripherals! {
    PeripheralsSonar,
    (PIN_10, PIN_11)
}

make_peripherals! {
    PeripheralsServo,
    (PIN_12, PWM_CH6)
}

pub struct Peripherals0 {
    pub motor: PeripheralsMotor,
    pub servo: PeripheralsServo,
    pub sonar: PeripheralsSonar,
    pub uart: PeripheralsUart,
}

pub fn get_peripherals(p: Peripherals) -> Peripherals0 {
    Peripherals0 {
        motor: peripherals_motor!(p),
        servo: peripherals_servo!(p),
        sonar: peripherals_sonar!(p),
        uart: peripherals_uart!(p),
    }
}
