//! Background activity module
//!
//! A decorative periodic task that keeps baseline activity nonzero so
//! the resource figures have something to show. Nothing consumes its
//! output; it logs a debug line every thousand ticks.

use std::time::Duration;

use crate::logger;

const TICK_INTERVAL: Duration = Duration::from_millis(100);
const TICKS_PER_LOG: u64 = 1000;

/// Run the background tick loop forever
pub async fn run() {
    logger::log_worker_started();

    let mut interval = tokio::time::interval(TICK_INTERVAL);
    let mut counter: u64 = 0;
    loop {
        interval.tick().await;
        counter = counter.wrapping_add(1);
        if should_log(counter) {
            logger::log_worker_tick(counter);
        }
    }
}

const fn should_log(counter: u64) -> bool {
    counter % TICKS_PER_LOG == 0
}
