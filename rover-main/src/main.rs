#![no_std]
#![no_main]
#![feature(impl_trait_in_assoc_type, type_alias_impl_trait)]

use crate::peripherals::{get_peripherals, Peripherals0};
use core::panic::PanicInfo;
use cortex_m_rt::ExceptionFrame;
use defmt::info;
use defmt_rtt as _;
use embassy_executor::{Executor, Spawner};
use embassy_rp::config::Config;
use static_cell::StaticCell;

mod hardware;
mod modules;
mod peripherals;

mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

static EXECUTOR0: StaticCell<Executor> = StaticCell::new();

#[embassy_executor::task]
async fn core0_task(spawner: Spawner, p: Peripherals0) {
    info!(
        "Starting up {} {} (built {})",
        built_info::PKG_NAME,
        built_info::PKG_VERSION,
        built_info::BUILT_TIME_UTC
    );
    if let Some(commit) = built_info::GIT_COMMIT_HASH_SHORT {
        info!("Commit {}", commit);
    }

    hardware::uart::init(&spawner, p.uart).await;
    modules::control::init(&spawner, p.motor, p.sonar, p.servo).await;
}

#[cortex_m_rt::entry]
fn main() -> ! {
    info!("Starting up");

    let p = embassy_rp::init(Config::default());
    let p0 = get_peripherals(p);

    let executor0 = EXECUTOR0.init(Executor::new());
    executor0.run(|spawner| spawner.spawn(core0_task(spawner, p0)).unwrap())
}

#[cortex_m_rt::exception]
unsafe fn HardFault(_: &ExceptionFrame) -> ! {
    cortex_m::peripheral::SCB::sys_reset();
}

#[panic_handler]
fn panic(_: &PanicInfo) -> ! {
    cortex_m::asm::udf();
}
