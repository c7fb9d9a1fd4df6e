//! Raw type token parsing.
//!
//! A token as written in a message definition combines a base type name with
//! optional array notation: `float64`, `float64[9]`, `uint8[]`,
//! `geometry_msgs/Vector3[4]`. Parsing is best-effort: a malformed array
//! suffix never fails, the whole token simply degrades to a scalar base.

use nom::{
    bytes::complete::{take_while, take_while1},
    character::complete::char,
    combinator::{map_opt, opt},
    sequence::{delimited, pair},
    IResult,
};

use bagflat_core::{Arity, SchemaSource, TypeRef, NAMESPACE_SEP};

/// Bare alias that the record system accepts in place of the fully-qualified
/// default header type.
pub const HEADER_ALIAS: &str = "Header";

/// Qualified path the [`HEADER_ALIAS`] rewrites to.
pub const DEFAULT_HEADER_TYPE: &str = "std_msgs/Header";

/// Parse `token` into a structured [`TypeRef`], qualifying bare record names
/// against `current_dir` through the catalog.
///
/// Steps, in order:
/// 1. split off a trailing `[]` / `[N]` suffix (absent → [`Arity::Scalar`],
///    malformed → the whole token is kept as a scalar base);
/// 2. rewrite the bare `Header` alias to [`DEFAULT_HEADER_TYPE`];
/// 3. for a separator-free base, ask `source.locate(base, current_dir)`; a
///    miss means the token already denotes a primitive and is kept unchanged.
pub fn parse_type_token(token: &str, current_dir: &str, source: &dyn SchemaSource) -> TypeRef {
    let (base, arity) = split_array_suffix(token);

    let mut base = base.to_string();
    if base == HEADER_ALIAS {
        base = DEFAULT_HEADER_TYPE.to_string();
    }

    if !base.contains(NAMESPACE_SEP) {
        if let Some(qualified) = source.locate(&base, current_dir) {
            base = qualified;
        }
    }

    TypeRef::new(base, arity)
}

/// Split `token` into `(base, arity)`, treating anything that is not a
/// well-formed suffix as a scalar whose base is the full token.
fn split_array_suffix(token: &str) -> (&str, Arity) {
    match type_token(token) {
        Ok(("", (base, arity))) => (base, arity),
        _ => {
            tracing::warn!(token, "malformed array suffix, treating token as scalar");
            (token, Arity::Scalar)
        }
    }
}

fn type_token(input: &str) -> IResult<&str, (&str, Arity)> {
    let (rest, (base, suffix)) =
        pair(take_while1(|c: char| c != '['), opt(array_suffix))(input)?;
    Ok((rest, (base, suffix.unwrap_or(Arity::Scalar))))
}

/// `[]` → [`Arity::Unbounded`]; `[N]` → [`Arity::Fixed`]. Fails on anything
/// else between the brackets, including counts that overflow `usize`.
fn array_suffix(input: &str) -> IResult<&str, Arity> {
    map_opt(
        delimited(
            char('['),
            take_while(|c: char| c.is_ascii_digit()),
            char(']'),
        ),
        |digits: &str| {
            if digits.is_empty() {
                Some(Arity::Unbounded)
            } else {
                digits.parse().ok().map(Arity::Fixed)
            }
        },
    )(input)
}
