use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tracing::{debug, info, trace};

use super::{ReadySignal, Wallpaper};
use crate::intake::InboxReceiver;

impl Wallpaper {
    /// Runs the wallpaper for the rest of the process.
    ///
    /// Waits for the host's ready signal, initializes, then multiplexes the
    /// clock tick, the indicator tick and the property inbox on this one
    /// task. Each unit of work runs to completion before the next is
    /// picked, so a property render can never interleave with a tick. A
    /// closed inbox only stops property intake; ticking carries on.
    pub async fn run(mut self, mut inbox: InboxReceiver, mut ready: ReadySignal) {
        if !ready.is_ready() {
            debug!("Waiting for host ready signal");
            ready.wait().await;
        }
        self.initialize();

        let schedule = self.config.schedule;
        let start = Instant::now();
        let mut clock_ticks = interval_at(
            start + schedule.clock_interval(),
            schedule.clock_interval(),
        );
        let mut indicator_ticks = interval_at(
            start + schedule.indicator_interval(),
            schedule.indicator_interval(),
        );
        clock_ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);
        indicator_ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!(
            clock_ms = schedule.clock_interval_ms,
            indicator_ms = schedule.indicator_interval_ms,
            "Scheduler started"
        );

        let mut inbox_open = true;
        loop {
            tokio::select! {
                _ = clock_ticks.tick() => {
                    let now = self.tick_clock();
                    trace!(time = %now.format_time(), "Clock tick");
                }
                _ = indicator_ticks.tick() => {
                    let label = self.refresh_indicator();
                    trace!(%label, "Indicator tick");
                }
                event = inbox.recv(), if inbox_open => match event {
                    Some(event) => self.on_properties_updated(&event),
                    None => {
                        debug!("Property inbox closed");
                        inbox_open = false;
                    }
                },
            }
        }
    }
}
