//! Shows the main ways to use a `Timer`: one-shot, slice accumulation and pause/resume.
//!
//! Run with: `cargo run --example dual_timer_basic`.

use std::hint::black_box;
use std::thread;
use std::time::Duration;

use dual_timer::{Error, ReportStyle, Timer};

fn busy_work(rounds: u64) -> u64 {
    let mut sum = 0_u64;
    for i in 0..rounds {
        sum = sum.wrapping_mul(1_103_515_245).wrapping_add(i);
    }
    sum
}

fn main() -> Result<(), Error> {
    println!("- one interval");
    let mut timer = Timer::new();
    black_box(busy_work(5_000_000));
    timer.print(ReportStyle::Milliseconds)?;

    println!("- ten slices, sleeping between them");
    let mut slices = Timer::unstarted();
    for _ in 0..10 {
        slices.start_slice();
        black_box(busy_work(500_000));
        slices.stop();

        thread::sleep(Duration::from_millis(5));
    }
    slices.print(ReportStyle::Microseconds)?;

    println!("- pause and resume (the pause is measured as well)");
    let mut phase = Timer::new();
    black_box(busy_work(1_000_000));
    phase.stop();
    thread::sleep(Duration::from_millis(20));
    phase.resume()?;
    black_box(busy_work(1_000_000));
    phase.print(ReportStyle::Milliseconds)?;

    Ok(())
}
