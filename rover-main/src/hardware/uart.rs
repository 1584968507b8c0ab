use crate::{hardware::COMMAND_CHANNEL, peripherals::PeripheralsUart};
use defmt::{info, warn};
use embassy_executor::Spawner;
use embassy_rp::{
    bind_interrupts,
    peripherals::UART0,
    uart::{Async, Config, Error, InterruptHandler, UartRx},
};
use embedded_hal_nb::serial::Read;
use rover_core::{
    constants::{BAUD_RATE, LINE_CAPACITY},
    Command, LineReader,
};

bind_interrupts!(struct Irqs {
    UART0_IRQ => InterruptHandler<UART0>;
});

#[embassy_executor::task]
async fn uart_rx_task(mut rx: UartRx<'static, UART0, Async>) {
    let mut reader = LineReader::<LINE_CAPACITY>::new();
    let mut buf = [0; 1];

    loop {
        match rx.read(&mut buf).await {
            Ok(()) => {
                let Some(line) = reader.push(buf[0]) else {
                    continue;
                };

                match Command::parse(&line) {
                    Some(command) => COMMAND_CHANNEL.send(command).await,
                    None if line.iter().all(u8::is_ascii_whitespace) => {}
                    None => warn!("Ignoring unknown command: {=[u8]:a}", line.as_slice()),
                }
            }
            Err(Error::Overrun) => {
                warn!("Error receiving uart data: overrun");
                while Read::read(&mut rx) != Err(nb::Error::WouldBlock) {}
                reader.clear();
            }
            Err(err) => {
                warn!("Error receiving uart data: {}", err);
            }
        }
    }
}

pub async fn init(spawner: &Spawner, p: PeripheralsUart) {
    info!("Starting uart");

    let mut config = Config::default();
    config.baudrate = BAUD_RATE;

    let rx = UartRx::new(p.UART0, p.PIN_1, Irqs, p.DMA_CH0, config);

    spawner.must_spawn(uart_rx_task(rx));
}
