use std::str::FromStr;

use miette::{GraphicalReportHandler, GraphicalTheme};
use nom::{
    character::complete::{char, digit1},
    combinator::{map, map_res},
    error::{FromExternalError, ParseError},
    sequence::separated_pair,
    IResult,
};
use nom_locate::LocatedSpan;
use nom_supreme::{
    error::{BaseErrorKind, ErrorTree, GenericErrorTree},
    final_parser::final_parser,
};

use crate::assignment::{Assignment, SectionRange};

pub type Span<'a> = LocatedSpan<&'a str>;

type ErrorKind = BaseErrorKind<&'static str, Box<dyn std::error::Error + Send + Sync>>;

#[derive(thiserror::Error, Debug, miette::Diagnostic)]
#[error("bad input")]
struct BadInput<'a> {
    #[source_code]
    src: &'a str,

    #[label("{kind}")]
    bad_bit: miette::SourceSpan,

    kind: ErrorKind,
}

// Unsigned only: `-` always separates the two ends of a range.
fn parse_number<'a, E>(i: Span<'a>) -> IResult<Span<'a>, i64, E>
where
    E: ParseError<Span<'a>> + FromExternalError<Span<'a>, std::num::ParseIntError>,
{
    map_res(digit1, |i: Span<'a>| i64::from_str(i.fragment()))(i)
}

fn parse_range<'a, E>(i: Span<'a>) -> IResult<Span<'a>, SectionRange, E>
where
    E: ParseError<Span<'a>> + FromExternalError<Span<'a>, std::num::ParseIntError>,
{
    map(
        separated_pair(parse_number, char('-'), parse_number),
        |(lo, hi)| SectionRange { lo, hi },
    )(i)
}

fn parse_assignment<'a, E>(i: Span<'a>) -> IResult<Span<'a>, Assignment, E>
where
    E: ParseError<Span<'a>> + FromExternalError<Span<'a>, std::num::ParseIntError>,
{
    map(
        separated_pair(parse_range, char(','), parse_range),
        |(first, second)| Assignment { first, second },
    )(i)
}

// Innermost failure of the tree. For alternatives, the one that got furthest.
fn base_error(tree: ErrorTree<Span<'_>>) -> Option<(Span<'_>, ErrorKind)> {
    match tree {
        GenericErrorTree::Base { location, kind } => Some((location, kind)),
        GenericErrorTree::Stack { base, .. } => base_error(*base),
        GenericErrorTree::Alt(alts) => alts
            .into_iter()
            .filter_map(base_error)
            .max_by_key(|(location, _)| location.location_offset()),
    }
}

fn render_error(src: &str, tree: ErrorTree<Span<'_>>) -> String {
    let Some((location, kind)) = base_error(tree) else {
        return format!("unable to parse {src:?}");
    };

    let offset = location.location_offset();
    let err = BadInput {
        src,
        bad_bit: miette::SourceSpan::new(offset.into(), 0.into()),
        kind,
    };

    let mut s = String::new();
    // Plain theme: the report is stored in `CleanupError::BadLine`.
    let handler = GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor());
    match handler.render_report(&mut s, &err) {
        Ok(()) => s,
        Err(_) => format!("{} at column {}", err.kind, offset + 1),
    }
}

/// Parses one `A-B,C-D` line. The whole line must be consumed.
///
/// On failure the error is a rendered report pointing at the offending column.
pub fn parse_line(line: &str) -> Result<Assignment, String> {
    let parsed: Result<_, ErrorTree<Span>> =
        final_parser(parse_assignment::<ErrorTree<Span>>)(Span::new(line));

    parsed.map_err(|tree| render_error(line, tree))
}
