use core::ops::Range;

/// Current firmware version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Baud rate of the serial console (UART0, 8N1)
pub const SERIAL_BAUD_RATE: u32 = 115_200;

/// Line written once when the node starts
pub const STARTUP_BANNER: &str = "Simulating IoT data...";
/// Prefix of every reading line
pub const PAYLOAD_PREFIX: &str = "Payload: ";
/// Terminator appended to each console line
pub const LINE_TERMINATOR: &str = "\r\n";

/// Simulated rainfall in millimeters
pub const RAINFALL_RANGE_MM: Range<f32> = 0.0..50.0;
/// Simulated water level in centimeters
pub const WATER_LEVEL_RANGE_CM: Range<f32> = 50.0..150.0;

/// Resolution of simulated values (100 = hundredths)
pub const SAMPLES_PER_UNIT: f32 = 100.0;

/// Size of the buffer holding one formatted payload
pub const PAYLOAD_BUFFER_SIZE: usize = 64;
/// Size of the buffer holding one console line (prefix + payload + terminator)
pub const LINE_BUFFER_SIZE: usize = 96;
