use anyhow::{Context, Result};
use camp_cleanup::{num_fully_contained_in, INPUT_PATH};

fn main() -> Result<()> {
    env_logger::init();

    let total = num_fully_contained_in(INPUT_PATH)
        .with_context(|| format!("counting fully contained assignments in {INPUT_PATH}"))?;

    println!("{total}");

    Ok(())
}
