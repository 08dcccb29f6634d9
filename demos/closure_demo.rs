//! Demonstration of normalization and sigma-algebra generation.
//!
//! Run with `RUST_LOG=debug` to follow the closure passes.

use borel::interval::Interval;
use borel::sets::BorelSet;
use borel::sigma::{ClosureConfig, SigmaAlgebraGenerator};
use borel::Family;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // A single complement and its canonical form
    let b = !BorelSet::interval(Interval::closed(0.0, 0.5));
    println!("{}", b);
    println!("  = {}", b.to_intervals()?);
    b.print_tree();
    println!();

    // An intersection of three intervals
    let i = BorelSet::intersection(vec![
        Interval::closed(0.0, 0.25).into(),
        Interval::open(0.25, 0.5).into(),
        Interval::closed(0.1, 0.6).into(),
    ]);
    println!("{}", i);
    println!("  = {}", i.to_intervals()?);
    println!();

    // Omega, Nul and four pieces partitioning [0, 1]
    let family: Family = vec![
        BorelSet::universe(),
        BorelSet::empty(),
        Interval::closed_open(0.0, 0.25).into(),
        Interval::closed_open(0.25, 0.5).into(),
        Interval::closed_open(0.5, 0.75).into(),
        Interval::closed(0.75, 1.0).into(),
    ]
    .into();

    println!("Generators:");
    print!("{}", family);
    println!();

    let generator = SigmaAlgebraGenerator::new(ClosureConfig::with_max_passes(16));
    let closure = generator.generate(&family)?;
    println!("Generated sigma-algebra ({} sets, {}):", closure.len(), closure.stats());
    print!("{}", closure.into_family());

    Ok(())
}
