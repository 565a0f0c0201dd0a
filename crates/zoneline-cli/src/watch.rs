//! The periodic watch loop.
//!
//! Re-renders the menu-bar label and world clock every ten seconds, with the
//! first tick aligned to the next wall-clock multiple of ten seconds so the
//! displayed minutes roll over cleanly (no preset shows seconds, so nothing
//! flickers in between). Ctrl-C tears the loop down; no tick fires after
//! cancellation.

use std::time::Duration;

use anyhow::Result;
use jiff::Timestamp;
use log::debug;
use tokio::{
    signal,
    time::{self, Instant},
};

use crate::cli::Cli;

const TICK_MILLIS: u64 = 10_000;

/// Milliseconds until the next wall-clock multiple of the tick interval.
fn millis_until_next_tick(now_millis: i64) -> u64 {
    let elapsed = now_millis.rem_euclid(TICK_MILLIS as i64) as u64;
    TICK_MILLIS - elapsed
}

/// Runs the watch loop until Ctrl-C.
pub async fn run(cli: &Cli) -> Result<()> {
    cli.render_tick()?;

    let first_tick = Instant::now()
        + Duration::from_millis(millis_until_next_tick(
            Timestamp::now().as_millisecond(),
        ));
    let mut ticks = time::interval_at(first_tick, Duration::from_millis(TICK_MILLIS));

    loop {
        tokio::select! {
            _ = signal::ctrl_c() => {
                debug!("Watch loop interrupted");
                return Ok(());
            }
            _ = ticks.tick() => cli.render_tick()?,
        }
    }
}
