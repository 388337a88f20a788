use anyhow::{Context, Result};
use camp_cleanup::{num_overlapping_in, INPUT_PATH};

fn main() -> Result<()> {
    env_logger::init();

    let total = num_overlapping_in(INPUT_PATH)
        .with_context(|| format!("counting overlapping assignments in {INPUT_PATH}"))?;

    println!("{total}");

    Ok(())
}
