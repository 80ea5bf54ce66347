use fairshare_domain::Amount;
use fairshare_format::format_amount;
use rust_decimal::Decimal;
use std::{
    env,
    io::{self, IsTerminal, Write},
    time::Duration,
};

const DURATION_MS: u64 = 300;
const TICK_MS: u64 = 10;

/// Prints a labelled amount counting up from zero to its final value.
/// The animation is skipped (final value printed immediately) when stdout
/// is not a terminal or `FAIRSHARE_REDUCED_MOTION` is set.
pub async fn count_up(label: &str, target: Amount) {
    if reduced_motion() {
        println!("{label}: {}", format_amount(target.value()));
        return;
    }

    let steps = DURATION_MS / TICK_MS;
    for step in 1..=steps {
        let current = interpolate(target.value(), step, steps);
        print!("\r{label}: {}", format_amount(current));
        let _ = io::stdout().flush();
        tokio::time::sleep(Duration::from_millis(TICK_MS)).await;
    }
    println!();
}

fn reduced_motion() -> bool {
    env::var_os("FAIRSHARE_REDUCED_MOTION").is_some() || !io::stdout().is_terminal()
}

fn interpolate(target: Decimal, step: u64, steps: u64) -> Decimal {
    target * Decimal::from(step) / Decimal::from(steps)
}
