use anyhow::Result;
use colored::Colorize;
use std::time::Instant;

use crate::cargo::{step, OnFailure, EMBEDDED_TARGET};

/// Feature combinations of `rating-layout` that must build on their own.
const LAYOUT_FEATURES: &[&str] = &["std", "serde", "tracing", "defmt", "std,serde,tracing"];

pub fn run() -> Result<()> {
    println!();
    println!("{}", "🔍 Checking workspace builds...".cyan().bold());
    println!();

    let total_start = Instant::now();

    step("Host build", &["check", "--workspace", "--all-targets"], OnFailure::Abort)?;

    for krate in ["rating-layout", "rating-view"] {
        step(
            &format!("{krate} (no_std, {EMBEDDED_TARGET})"),
            &["check", "-p", krate, "--target", EMBEDDED_TARGET, "--no-default-features"],
            OnFailure::Abort,
        )?;
    }

    for features in LAYOUT_FEATURES {
        step(
            &format!("rating-layout --features {features}"),
            &["check", "-p", "rating-layout", "--no-default-features", "--features", features],
            OnFailure::Abort,
        )?;
    }
    println!();

    step(
        "Clippy",
        &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"],
        OnFailure::Warn,
    )?;

    let fmt = step("Formatting", &["fmt", "--all", "--check"], OnFailure::Warn)?;
    if !fmt.status.success() {
        eprintln!("     Run 'cargo fmt --all' to fix");
    }
    println!();

    println!(
        "{}",
        format!(
            "✓ All checks completed in {:.2}s",
            total_start.elapsed().as_secs_f64()
        )
        .green()
        .bold()
    );
    println!();

    Ok(())
}
