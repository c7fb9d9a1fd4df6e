//! Final struct definition building.

use bagflat_core::{FinalEntry, FinalStructDict, LeafField};

/// Composite alias representing a value plus a validity flag.
pub const FLAGGED_ALIAS: &str = "FlaggedDouble";

/// Convert a resolved leaf sequence into the final path-keyed definitions.
///
/// A leaf of type [`FLAGGED_ALIAS`] at path `p` emits
/// `{type: "flagged", value: "p.value", valid: "p.valid"}` — this rewrite is
/// a fixed convention, independent of any override policy. Every other leaf
/// emits `{type, value: path}`.
///
/// A later leaf with the same path overwrites an earlier one, matching the
/// shallow-merge semantics the persistence layer applies to previously
/// written definitions.
pub fn build_struct_dict<'a>(leaves: impl IntoIterator<Item = &'a LeafField>) -> FinalStructDict {
    let mut dict = FinalStructDict::new();
    for leaf in leaves {
        let entry = if leaf.ty == FLAGGED_ALIAS {
            FinalEntry::flagged(
                format!("{}.value", leaf.path),
                format!("{}.valid", leaf.path),
            )
        } else {
            FinalEntry::plain(&leaf.ty, &leaf.path)
        };
        dict.insert(&leaf.path, entry);
    }
    dict
}
