//! Shortest word realising the maximum of a bounded instance.
//!
//! Parses a fixed two-generator 4x4 instance, proves it bounded and prints
//! the witness path for its largest value.
//!
//! Run with `RUST_LOG=debug` to follow the closure layer by layer.

use tracing_subscriber::EnvFilter;
use tropical_bounded::{find_min_path_for_max_value, format_generators, parse_generators};

const INSTANCE: &str = "\
0  1  -  -
-  -  -  1
1  -  0  -
1  -  -  -

1  1  -  -
1  -  -  1
-  1  0  -
-  -  1  -
";

fn main() -> tropical_bounded::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let generators = parse_generators(INSTANCE)?;
    println!("Generators:\n{}\n", format_generators(&generators));

    let report = find_min_path_for_max_value(&generators)?;
    println!("{report}");
    Ok(())
}
