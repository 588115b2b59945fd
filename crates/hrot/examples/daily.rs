//! Today's (or a given day's) random rule.
//!
//! ```text
//! cargo run -p hrot --example daily            # today, UTC
//! cargo run -p hrot --example daily 20251122   # a specific seed
//! ```

use hrot::prelude::*;

fn main() {
    tracing_subscriber::fmt().with_target(false).init();

    let seed = match std::env::args().nth(1) {
        Some(arg) => match arg.parse::<u64>() {
            Ok(v) => DailySeed::new(v),
            Err(e) => {
                eprintln!("invalid seed {arg:?}: {e}");
                std::process::exit(2);
            }
        },
        None => DailySeed::today(),
    };

    let run = match DailyRuleGenerator::new(seed).generate() {
        Ok(run) => run,
        Err(e) => {
            eprintln!("rule generation failed: {e}");
            std::process::exit(1);
        }
    };
    println!("Rule: {}", run.rule_text());
    println!(
        "Range: {}, States: {}, Neighborhood: {}",
        run.rule().range(),
        run.rule().states(),
        run.rule().neighborhood().name()
    );

    match run.run() {
        Ok(summary) => println!("Activity: {:.2}%", summary.activity_score()),
        Err(e) => {
            tracing::error!(error = %e, "daily run failed");
            std::process::exit(1);
        }
    }
}
