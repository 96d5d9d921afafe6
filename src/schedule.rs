use embassy_sync::{blocking_mutex::raw::RawMutex, signal::Signal};
use embassy_time::{with_timeout, Duration};
use embedded_io_async::Write;
use log::{error, info};

use crate::measurement::Measurement;
use crate::sensors::Sensor;

/// Counters reported when the loop is stopped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub completed: u32,
    pub failed: u32,
}

/// Take a measurement every `interval` until `stop` is signaled.
///
/// The delay follows each cycle, so the first reading goes out immediately.
/// A failed cycle is logged and counted, it does not end the loop. Raising
/// `stop` while the loop is sleeping ends it right away; raising it before
/// the first call means no cycle runs at all.
pub async fn run<M, S, W>(
    measurement: &mut Measurement<S, W>,
    interval: Duration,
    stop: &Signal<M, ()>,
) -> RunSummary
where
    M: RawMutex,
    S: Sensor,
    W: Write,
{
    let mut summary = RunSummary::default();

    info!("Measuring every {} ms", interval.as_millis());

    loop {
        if stop.try_take().is_some() {
            break;
        }

        match measurement.take().await {
            Ok(_) => summary.completed += 1,
            Err(e) => {
                summary.failed += 1;
                error!("Measurement error: {:?}", e);
            }
        }

        if with_timeout(interval, stop.wait()).await.is_ok() {
            break;
        }
    }

    info!(
        "Measurement loop stopped after {} cycles ({} failed, {} console lines)",
        summary.completed + summary.failed,
        summary.failed,
        measurement.console().lines_written()
    );
    summary
}
