use std::{env, error::Error, fs, path::Path};

use serde::Deserialize;

const CONFIG_FILE: &str = "cfg.toml";
const EXAMPLE_CONFIG_FILE: &str = "cfg.toml.example";

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    device_id: String,
    wifi_ssid: String,
    wifi_password: String,
    mqtt_hostname: String,
    mqtt_port: u16,
    mqtt_topic: String,
    http_url: String,
    http_api_key: String,
    measurement_interval_ms: u64,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Tell Cargo to rerun if either toml changes
    println!("cargo:rerun-if-changed={CONFIG_FILE}");
    println!("cargo:rerun-if-changed={EXAMPLE_CONFIG_FILE}");

    // Fall back to the checked-in placeholders when no local config exists
    let source = if Path::new(CONFIG_FILE).exists() {
        CONFIG_FILE
    } else {
        println!("cargo:warning={CONFIG_FILE} not found, using {EXAMPLE_CONFIG_FILE}");
        EXAMPLE_CONFIG_FILE
    };

    // Read and parse
    let toml_str = fs::read_to_string(source)?;
    let raw: RawConfig = toml::from_str(&toml_str)?;

    if raw.measurement_interval_ms == 0 {
        return Err(format!("{source}: measurement_interval_ms must be greater than zero").into());
    }

    // Generate Rust code
    let code = format!(
        r#"
        pub const CONFIG: Config = Config {{
            device_id: {id:?},
            wifi_ssid: {ssid:?},
            wifi_password: {pass:?},
            mqtt_hostname: {mh:?},
            mqtt_port: {mp},
            mqtt_topic: {mt:?},
            http_url: {url:?},
            http_api_key: {key:?},
            measurement_interval_ms: {intv},
        }};
    "#,
        id = raw.device_id,
        ssid = raw.wifi_ssid,
        pass = raw.wifi_password,
        mh = raw.mqtt_hostname,
        mp = raw.mqtt_port,
        mt = raw.mqtt_topic,
        url = raw.http_url,
        key = raw.http_api_key,
        intv = raw.measurement_interval_ms
    );

    let out_dir = env::var("OUT_DIR")?;
    let dest_path = Path::new(&out_dir).join("config.rs");
    fs::write(dest_path, code)?;
    Ok(())
}
