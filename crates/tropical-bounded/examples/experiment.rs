//! Search random instances for the largest bound a bounded instance attains.
//!
//! Samples pairs of 3x3 matrices over {0, 1, ∞}, semi-decides each with a
//! short timeout and tracks two running figures:
//! - `max_bounded`: the largest maximum among instances proven bounded
//! - `min_unbounded`: the smallest maximum seen among instances that timed
//!   out (presumed unbounded)
//!
//! If `min_unbounded` drops close to `max_bounded`, the timeout is too short
//! to tell the two apart. The conjectured bound `2(n-1)` is known to fail for
//! more than one generator; a warning is printed when the search suggests so.
//!
//! Usage: `cargo run --example experiment -- [seconds]` (default 30).

use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::warn;
use tracing_subscriber::EnvFilter;
use tropical_bounded::{
    find_min_path_for_max_value, random_generators, semi_decide_max_value, SamplingConfig,
    SearchConfig, TropicalMatrix,
};

const DIMENSION: usize = 3;
const GENERATORS: usize = 2;
const TIMEOUT: Duration = Duration::from_millis(100);
const REPORT_INTERVAL: Duration = Duration::from_secs(2);

fn format_elapsed(d: Duration) -> String {
    let secs = d.as_secs();
    let (hours, minutes, seconds) = (secs / 3600, (secs / 60) % 60, secs % 60);
    let centis = d.subsec_millis() / 10;
    let mut out = String::new();
    if hours > 0 {
        out.push_str(&format!("{hours}h "));
    }
    if hours > 0 || minutes > 0 {
        out.push_str(&format!("{minutes}m "));
    }
    out.push_str(&format!("{seconds}.{centis:02}s"));
    out
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let total = match std::env::args().nth(1) {
        Some(arg) => SearchConfig::from_secs_f64(arg.parse()?)?.get_timeout(),
        None => Duration::from_secs(30),
    };
    let config = SamplingConfig::new(DIMENSION);
    let mut rng = ChaCha8Rng::from_entropy();

    println!("Searching for the maximum bound of random instances with:");
    println!("dimension: {DIMENSION}");
    println!("number of matrices: {GENERATORS}");
    println!("largest finite entry: {}\n", config.get_cap());

    let expected = 2 * (DIMENSION as u32 - 1) * config.get_cap();
    println!("Conjectured bound 2(n-1)·max: {expected} (known to fail for more than one matrix)");
    println!("Search stops after about {}\n", format_elapsed(total));

    let mut max_bounded = 0u32;
    let mut min_unbounded = u32::MAX;
    let mut max_instance: Option<Vec<TropicalMatrix>> = None;

    let start = Instant::now();
    let mut last_report = start;
    let mut checked = 0u64;
    while start.elapsed() < total {
        let generators = random_generators(GENERATORS, &config, &mut rng)?;
        let decision = semi_decide_max_value(&generators, TIMEOUT)?;
        if decision.converged && decision.max_value > max_bounded {
            max_bounded = decision.max_value;
            max_instance = Some(generators);
        } else if !decision.converged && decision.max_value < min_unbounded {
            min_unbounded = decision.max_value;
        }
        checked += 1;

        if last_report.elapsed() > REPORT_INTERVAL {
            last_report = Instant::now();
            println!(
                "min_unbounded == {min_unbounded}; max_bounded == {max_bounded}; checked {checked} instances in {}",
                format_elapsed(start.elapsed())
            );
        }
    }

    if min_unbounded <= expected {
        warn!(min_unbounded, expected, "an unbounded candidate stays within the conjectured bound");
        println!("\nWarning!! min_unbounded == {min_unbounded} <= conjectured bound == {expected}");
    }
    println!("\nConjectured bound: {expected}");
    println!("Observed bound: {max_bounded}");

    match max_instance {
        Some(generators) => {
            println!("\nExample for the observed bound:\n");
            let report = find_min_path_for_max_value(&generators)?;
            println!("{report}");
        }
        None => println!("\nNo bounded instance with a positive maximum was found."),
    }
    Ok(())
}
