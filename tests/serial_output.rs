use core::convert::Infallible;

use embassy_sync::{blocking_mutex::raw::NoopRawMutex, signal::Signal};
use embassy_time::{Duration, Instant, Timer};
use embedded_io_async::{ErrorType, Write};
use lifeline_sensor_node::{schedule, Console, Measurement, RandomSource, SimulatedRainGauge};

/// Sink recording every line together with the time it was completed.
#[derive(Default)]
struct SerialCapture {
    bytes: Vec<u8>,
    line_times: Vec<Instant>,
}

impl ErrorType for SerialCapture {
    type Error = Infallible;
}

impl Write for SerialCapture {
    async fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.bytes.extend_from_slice(buf);
        if buf.ends_with(b"\n") {
            self.line_times.push(Instant::now());
        }
        Ok(buf.len())
    }
}

struct SeededRng(fastrand::Rng);

impl RandomSource for SeededRng {
    fn next_u32(&mut self) -> u32 {
        self.0.u32(..)
    }
}

async fn run_node(interval: Duration, run_for: Duration) -> anyhow::Result<SerialCapture> {
    let mut console = Console::new(SerialCapture::default());
    console
        .announce()
        .await
        .map_err(|e| anyhow::anyhow!("{e:?}"))?;

    let gauge = SimulatedRainGauge::new(SeededRng(fastrand::Rng::with_seed(2024)));
    let mut measurement = Measurement::new(gauge, console);
    let stop = Signal::<NoopRawMutex, ()>::new();

    let (summary, _) = tokio::join!(
        schedule::run(&mut measurement, interval, &stop),
        async {
            Timer::after(run_for).await;
            stop.signal(());
        }
    );
    anyhow::ensure!(summary.failed == 0, "failed cycles: {summary:?}");

    let (_, console) = measurement.into_parts();
    Ok(console.into_inner())
}

#[tokio::test]
async fn banner_precedes_payload_lines() -> anyhow::Result<()> {
    // Arrange & Act
    let capture = run_node(Duration::from_millis(20), Duration::from_millis(110)).await?;
    let text = String::from_utf8(capture.bytes)?;

    // Assert
    let lines: Vec<&str> = text.split_terminator("\r\n").collect();
    assert_eq!(lines[0], "Simulating IoT data...");
    assert_eq!(
        lines.iter().filter(|l| **l == "Simulating IoT data...").count(),
        1
    );
    assert!(lines.len() >= 4, "{lines:?}");
    assert!(lines[1..].iter().all(|l| l.starts_with("Payload: ")));
    Ok(())
}

#[tokio::test]
async fn payload_lines_are_well_formed() -> anyhow::Result<()> {
    // Arrange & Act
    let capture = run_node(Duration::from_millis(10), Duration::from_millis(100)).await?;
    let text = String::from_utf8(capture.bytes)?;

    // Assert
    assert!(text.ends_with("\r\n"));
    assert_eq!(text.matches("\r\n").count(), text.matches('\n').count());

    for line in text.split_terminator("\r\n").skip(1) {
        let record = line
            .strip_prefix("Payload: ")
            .ok_or_else(|| anyhow::anyhow!("missing prefix: {line}"))?;

        assert!(record.starts_with("{\"rain\":"), "{record}");
        assert!(record.contains(",\"level\":"), "{record}");
        assert!(!record.contains(char::is_whitespace), "{record}");

        let value: serde_json::Value = serde_json::from_str(record)?;
        let rain = value["rain"]
            .as_f64()
            .ok_or_else(|| anyhow::anyhow!("rain is not a number: {record}"))?;
        let level = value["level"]
            .as_f64()
            .ok_or_else(|| anyhow::anyhow!("level is not a number: {record}"))?;

        assert!((0.0..50.0).contains(&rain), "{record}");
        assert!((50.0..150.0).contains(&level), "{record}");
    }
    Ok(())
}

#[tokio::test]
async fn payload_lines_are_spaced_by_the_interval() -> anyhow::Result<()> {
    // Arrange & Act
    let capture = run_node(Duration::from_millis(100), Duration::from_millis(350)).await?;

    // Assert: banner plus cycles at 0, 100, 200, 300 ms
    let payload_times = &capture.line_times[1..];
    assert_eq!(payload_times.len(), 4);

    for pair in payload_times.windows(2) {
        let gap = pair[1] - pair[0];
        assert!(gap >= Duration::from_millis(100), "gap = {gap:?}");
        assert!(gap < Duration::from_millis(150), "gap = {gap:?}");
    }
    Ok(())
}
