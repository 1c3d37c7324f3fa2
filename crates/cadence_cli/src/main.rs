//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `cadence_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use cadence_core::{compute_bounds, period_title, Granularity};
use chrono::Local;

fn main() {
    println!("cadence_core ping={}", cadence_core::ping());
    println!("cadence_core version={}", cadence_core::core_version());

    let today = Local::now().date_naive();
    for granularity in Granularity::ALL {
        let bounds = compute_bounds(granularity, today);
        println!(
            "{:10} {} .. {}  {}",
            granularity.as_str(),
            bounds.start,
            bounds.end,
            period_title(&bounds, granularity, today)
        );
    }
}
