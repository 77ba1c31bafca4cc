use std::io::{self, BufWriter};

use env_logger::Env;
use itertools::Itertools;
use log::info;

use differential::{report, stats, target, DifferenceAnalyzer};

// Feeds 0..1000 and each input with its lowest bit flipped through x + 1.
// The XOR differences go to stdout and the raw outputs to stderr; the
// differences repeat in a way a decent S-box would never allow.
fn main() -> Result<(), differential::Error> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let analyzer = DifferenceAnalyzer::<i32>::default();
    let trace = analyzer.run(target::increment(1i32))?;

    let dist = stats::distribution(trace.diffs());
    info!(
        "n = {}, delta = {}, distribution: {}",
        analyzer.n,
        analyzer.delta,
        dist.iter().map(|(value, count)| format!("{}x{}", value, count) ).join(", ")
    );
    if let Some((value, count)) = stats::most_common(&dist) {
        info!("most common difference {} in {}/{} pairs", value, count, trace.len());
    }

    let mut out = BufWriter::new(io::stdout().lock());
    let mut err = BufWriter::new(io::stderr().lock());
    report::emit(&trace, &mut out, &mut err)
}
