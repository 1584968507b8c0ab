use crate::{
    hardware::{self, motor::Motors, servo::Servo, sonar::Sonar, COMMAND_CHANNEL},
    peripherals::{PeripheralsMotor, PeripheralsServo, PeripheralsSonar},
};
use defmt::info;
use embassy_executor::Spawner;
use embassy_time::Delay;
use rover_core::{Command, Rover};

type Controller = Rover<Motors, Sonar, Servo, Delay>;

#[embassy_executor::task]
async fn control_task(mut rover: Controller) {
    rover.park();
    info!("Parked, waiting for commands");

    loop {
        let command = COMMAND_CHANNEL.receive().await;
        info!("Running {}", command);

        if let Some(report) = rover.execute(command).await {
            info!(
                "Avoid: center {} left {} right {}, {}",
                report.center, report.left, report.right, report.maneuver
            );
        }

        if matches!(command, Command::SpeedUp | Command::SpeedDown) {
            info!("Speed now {}", rover.speed());
        }
    }
}

pub async fn init(
    spawner: &Spawner,
    motor: PeripheralsMotor,
    sonar: PeripheralsSonar,
    servo: PeripheralsServo,
) {
    info!("Starting control");

    let rover = Rover::new(
        hardware::motor::init(motor),
        hardware::sonar::init(sonar),
        hardware::servo::init(servo),
        Delay,
    );

    spawner.must_spawn(control_task(rover));
}
