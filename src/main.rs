#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, signal::Signal};
use embassy_time::{Duration, Timer};

use esp_backtrace as _;
use esp_hal::{self as hal};
use esp_println::logger::init_logger;

use hal::{
    rng::Rng,
    timer::timg::TimerGroup,
    uart::{Uart, UartTx},
    Async,
};

use lifeline_sensor_node::{
    constants::{SERIAL_BAUD_RATE, VERSION},
    schedule, Console, Measurement, RandomSource, SimulatedRainGauge, CONFIG,
};

esp_bootloader_esp_idf::esp_app_desc!();

// Never raised on the device, the node runs until reset
static STOP: Signal<CriticalSectionRawMutex, ()> = Signal::new();

struct HardwareRng(Rng);

impl RandomSource for HardwareRng {
    fn next_u32(&mut self) -> u32 {
        self.0.random()
    }
}

#[esp_hal_embassy::main]
async fn main(spawner: Spawner) {
    init_logger(log::LevelFilter::Info);

    let peripherals = esp_hal::init(esp_hal::Config::default());

    let rng = Rng::new(peripherals.RNG);

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_hal_embassy::init(timg0.timer0);

    let uart_config = hal::uart::Config::default()
        .with_baudrate(SERIAL_BAUD_RATE)
        .with_stop_bits(hal::uart::StopBits::_1)
        .with_data_bits(hal::uart::DataBits::_8)
        .with_parity(hal::uart::Parity::None);

    // Console on the USB-UART bridge
    let uart = Uart::new(peripherals.UART0, uart_config)
        .expect("console UART")
        .with_tx(peripherals.GPIO1)
        .with_rx(peripherals.GPIO3)
        .into_async();
    let (_rx, tx) = uart.split();

    log::info!(
        "Lifeline sensor node v{} ({}), MQTT topic {:?} on {}:{} (not used)",
        VERSION,
        CONFIG.device_id,
        CONFIG.mqtt_topic,
        CONFIG.mqtt_hostname,
        CONFIG.mqtt_port
    );

    let mut console = Console::new(tx);
    console.announce().await.expect("console banner");

    let measurement = Measurement::new(SimulatedRainGauge::new(HardwareRng(rng)), console);

    spawner
        .spawn(main_task(measurement))
        .expect("spawn measurement task");
}

#[embassy_executor::task]
async fn main_task(
    mut measurement: Measurement<SimulatedRainGauge<HardwareRng>, UartTx<'static, Async>>,
) {
    let summary = schedule::run(&mut measurement, CONFIG.measurement_interval(), &STOP).await;

    // Only reachable if something raises STOP
    log::warn!("Measurement loop exited: {:?}", summary);
    loop {
        Timer::after(Duration::from_secs(60)).await;
    }
}
