use anyhow::Result;
use colored::Colorize;

use crate::cargo::{step, OnFailure};

pub fn run(open: bool) -> Result<()> {
    println!();
    println!("{}", "📚 Building documentation...".cyan().bold());
    println!();

    // Document the optional serde derives as well.
    let mut args = vec![
        "doc",
        "--workspace",
        "--no-deps",
        "--document-private-items",
        "--features",
        "rating-layout/serde",
    ];
    if open {
        args.push("--open");
    }

    step("rustdoc", &args, OnFailure::Abort)?;

    if !open {
        println!();
        println!(
            "   {}",
            "Open target/doc/rating_layout/index.html in your browser".dimmed()
        );
        println!(
            "   {}",
            "Or run 'cargo run -p xtask -- doc --open'".dimmed()
        );
    }

    println!();

    Ok(())
}
