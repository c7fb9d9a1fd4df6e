//! Line-based ROS1 `.msg` parsing.
//!
//! Parsing is best-effort to match how message trees exist in the wild:
//! comment and constant lines are skipped, and a non-empty line that does not
//! match the `<type> <name>` shape is skipped with a warning rather than
//! failing the file.

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{alpha1, alphanumeric1, space1},
    combinator::recognize,
    multi::many0,
    sequence::{pair, separated_pair},
    IResult,
};

use bagflat_core::{FieldDef, RecordSchema};

/// Parse `.msg` text into a [`RecordSchema`] registered under `full_name`
/// (e.g. `"geometry_msgs/Vector3"`).
pub fn parse_msg(full_name: &str, text: &str) -> RecordSchema {
    let mut fields = Vec::new();
    for raw in text.lines() {
        let line = strip_comment(raw).trim();
        if line.is_empty() || is_constant(line) {
            continue;
        }
        match field_line(line) {
            Ok(("", field)) => fields.push(field),
            _ => {
                tracing::warn!(schema = full_name, line, "skipping unparsable field line");
            }
        }
    }
    RecordSchema::new(full_name, fields)
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(i) => &line[..i],
        None => line,
    }
}

/// Constant declarations (`uint8 STATUS_OK=0`) carry an `=`; they define no
/// field and are dropped.
fn is_constant(line: &str) -> bool {
    line.contains('=')
}

/// `<type-token> <name>` — the token keeps its raw array notation; the
/// resolver interprets it later.
fn field_line(input: &str) -> IResult<&str, FieldDef> {
    let (rest, (ty, name)) = separated_pair(type_token, space1, identifier)(input)?;
    Ok((rest.trim_end(), FieldDef::new(ty, name)))
}

fn type_token(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_alphanumeric() || matches!(c, '_' | '/' | '[' | ']'))(input)
}

fn identifier(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        alt((alpha1, tag("_"))),
        many0(alt((alphanumeric1, tag("_")))),
    ))(input)
}
