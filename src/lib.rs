use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

pub mod assignment;
pub mod error;
pub mod parse;

pub use assignment::{Assignment, SectionRange};
pub use error::CleanupError;

/// The puzzle input is always read from this file in the working directory.
pub const INPUT_PATH: &str = "input";

fn num_matching_condition<F>(
    input: impl Iterator<Item = Result<String, CleanupError>>,
    condition_true: F,
) -> Result<usize, CleanupError>
where
    F: Fn(&Assignment) -> bool,
{
    let mut total = 0;

    for (i, line) in input.enumerate() {
        let line = line?;
        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }

        let assignment = parse::parse_line(line)
            .map_err(|report| CleanupError::BadLine { line: i + 1, report })?;

        if condition_true(&assignment) {
            log::debug!("line {}: {line} qualifies", i + 1);
            total += 1;
        }
    }

    Ok(total)
}

fn read_lines(
    path: &Path,
) -> Result<impl Iterator<Item = Result<String, CleanupError>>, CleanupError> {
    let io_error = |source: std::io::Error| CleanupError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_error)?;
    let path = path.to_path_buf();

    Ok(BufReader::new(file).lines().map(move |line| {
        line.map_err(|source| CleanupError::Io {
            path: path.clone(),
            source,
        })
    }))
}

fn in_memory(
    input: impl Iterator<Item = impl Into<String>>,
) -> impl Iterator<Item = Result<String, CleanupError>> {
    input.map(|line| Ok(line.into()))
}

pub fn num_fully_contained(
    input: impl Iterator<Item = impl Into<String>>,
) -> Result<usize, CleanupError> {
    num_matching_condition(in_memory(input), Assignment::one_contains_other)
}

pub fn num_overlapping(
    input: impl Iterator<Item = impl Into<String>>,
) -> Result<usize, CleanupError> {
    num_matching_condition(in_memory(input), Assignment::overlapping)
}

pub fn num_fully_contained_in(path: impl AsRef<Path>) -> Result<usize, CleanupError> {
    let lines = read_lines(path.as_ref())?;
    let total = num_matching_condition(lines, Assignment::one_contains_other)?;
    log::info!(
        "{total} assignments in {} fully contain their pair",
        path.as_ref().display()
    );
    Ok(total)
}

pub fn num_overlapping_in(path: impl AsRef<Path>) -> Result<usize, CleanupError> {
    let lines = read_lines(path.as_ref())?;
    let total = num_matching_condition(lines, Assignment::overlapping)?;
    log::info!(
        "{total} assignments in {} overlap their pair",
        path.as_ref().display()
    );
    Ok(total)
}
