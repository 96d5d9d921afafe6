use embassy_time::Duration;

pub struct Config {
    // Device ID (logged at startup, intended as MQTT client id / DHCP hostname)
    pub device_id: &'static str,

    // Wi-Fi SSID to connect to
    pub wifi_ssid: &'static str,

    // Wi-Fi pre-shared key (password)
    pub wifi_password: &'static str,

    // MQTT broker hostname or IP address
    pub mqtt_hostname: &'static str,

    // MQTT port (usually 1883 or 8883 for TLS)
    pub mqtt_port: u16,

    // MQTT topic to publish sensor data to
    pub mqtt_topic: &'static str,

    // HTTP endpoint used when the broker is unreachable
    pub http_url: &'static str,

    // API key sent with HTTP fallback requests
    pub http_api_key: &'static str,

    // Delay between two measurement cycles, in milliseconds
    pub measurement_interval_ms: u64,
}

impl Config {
    pub const fn measurement_interval(&self) -> Duration {
        Duration::from_millis(self.measurement_interval_ms)
    }
}

// config values are generated at compile time
include!(concat!(env!("OUT_DIR"), "/config.rs"));
