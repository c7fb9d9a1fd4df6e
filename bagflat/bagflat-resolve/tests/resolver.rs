use bagflat_core::{FieldDef, MemorySchemaSource, RecordSchema, ResolveError, StructDescriptor};
use bagflat_resolve::Resolver;

fn vector3() -> RecordSchema {
    RecordSchema::new(
        "geometry_msgs/Vector3",
        vec![
            FieldDef::new("float64", "x"),
            FieldDef::new("float64", "y"),
            FieldDef::new("float64", "z"),
        ],
    )
}

fn header() -> RecordSchema {
    RecordSchema::new(
        "std_msgs/Header",
        vec![
            FieldDef::new("uint32", "seq"),
            FieldDef::new("time", "stamp"),
            FieldDef::new("string", "frame_id"),
        ],
    )
}

fn source_with(records: Vec<RecordSchema>) -> MemorySchemaSource {
    let mut source = MemorySchemaSource::new();
    for r in records {
        source.insert(r);
    }
    source
}

fn leaf_paths(tree: &bagflat_core::ResolvedTree) -> Vec<String> {
    tree.leaves().iter().map(|l| l.path.clone()).collect()
}

#[test]
fn primitive_field_resolves_to_single_leaf() {
    let source = source_with(vec![]);
    let resolver = Resolver::new(&source);

    let tree = resolver
        .resolve_field(&FieldDef::new("float64", "depth"), "", "")
        .unwrap();
    let leaves = tree.leaves();
    assert_eq!(leaves.len(), 1);
    assert_eq!(leaves[0].path, "depth");
    assert_eq!(leaves[0].ty, "float64");
}

/// Fixed array of records: `Vector3[2] position` expands group-major into
/// six float64 leaves with the ordinal suffix on the `position` segment.
#[test]
fn fixed_array_of_records_expands_group_major() {
    let source = source_with(vec![vector3()]);
    let resolver = Resolver::new(&source);

    let tree = resolver
        .resolve_field(
            &FieldDef::new("geometry_msgs/Vector3[2]", "position"),
            "geometry_msgs",
            "",
        )
        .unwrap();

    assert_eq!(
        leaf_paths(&tree),
        vec![
            "position_1.x",
            "position_1.y",
            "position_1.z",
            "position_2.x",
            "position_2.y",
            "position_2.z",
        ]
    );
    assert!(tree.leaves().iter().all(|l| l.ty == "float64"));
}

/// A bare record name is qualified against the current directory.
#[test]
fn bare_record_name_is_qualified_via_locate() {
    let source = source_with(vec![vector3()]);
    let resolver = Resolver::new(&source);

    let tree = resolver
        .resolve_field(&FieldDef::new("Vector3", "linear"), "geometry_msgs", "")
        .unwrap();
    assert_eq!(leaf_paths(&tree), vec!["linear.x", "linear.y", "linear.z"]);
}

/// `time stamp` nested to path `header.stamp` collapses to a `rostime` leaf
/// instead of expanding a time record.
#[test]
fn header_stamp_collapses_to_rostime() {
    let source = source_with(vec![header()]);
    let resolver = Resolver::new(&source);

    let tree = resolver
        .resolve_field(&FieldDef::new("std_msgs/Header", "header"), "std_msgs", "")
        .unwrap();

    let leaves = tree.leaves();
    assert_eq!(
        leaf_paths(&tree),
        vec!["header.seq", "header.stamp", "header.frame_id"]
    );
    assert_eq!(leaves[1].ty, "rostime");
}

/// The bare `Header` alias rewrites to the default header type.
#[test]
fn header_alias_resolves_to_default_header_type() {
    let source = source_with(vec![header()]);
    let resolver = Resolver::new(&source);

    let tree = resolver
        .resolve_field(&FieldDef::new("Header", "header"), "ds_sensor_msgs", "")
        .unwrap();
    assert_eq!(tree.leaves().len(), 3);
}

/// Unbounded arrays of primitives are terminal: one leaf, type keeps `[]`.
#[test]
fn unbounded_primitive_array_is_terminal() {
    let source = source_with(vec![]);
    let resolver = Resolver::new(&source);

    let tree = resolver
        .resolve_field(&FieldDef::new("uint8[]", "payload"), "", "")
        .unwrap();
    let leaves = tree.leaves();
    assert_eq!(leaves.len(), 1);
    assert_eq!(leaves[0].ty, "uint8[]");
    assert!(tree.unresolved_paths().is_empty());
}

/// Unbounded arrays of records are flagged, never silently flattened.
#[test]
fn unbounded_record_array_is_flagged_unresolved() {
    let source = source_with(vec![vector3()]);
    let resolver = Resolver::new(&source);

    let tree = resolver
        .resolve_field(
            &FieldDef::new("geometry_msgs/Vector3[]", "trail"),
            "geometry_msgs",
            "",
        )
        .unwrap();
    assert_eq!(tree.unresolved_paths(), vec!["trail"]);
    // The representative element is still resolved underneath the marker.
    assert_eq!(leaf_paths(&tree), vec!["trail.x", "trail.y", "trail.z"]);
}

#[test]
fn missing_record_fails_with_schema_not_found() {
    let source = source_with(vec![]);
    let resolver = Resolver::new(&source);

    let err = resolver
        .resolve_field(&FieldDef::new("ds_msgs/Missing", "x"), "ds_msgs", "")
        .unwrap_err();
    assert_eq!(
        err,
        ResolveError::SchemaNotFound {
            record_path: "ds_msgs/Missing".to_string()
        }
    );
}

/// A record that reaches itself on the active resolution path fails fast
/// instead of recursing unboundedly.
#[test]
fn cyclic_reference_fails_with_cyclic_schema() {
    let source = source_with(vec![
        RecordSchema::new("ex/A", vec![FieldDef::new("ex/B", "b")]),
        RecordSchema::new("ex/B", vec![FieldDef::new("ex/A", "a")]),
    ]);
    let resolver = Resolver::new(&source);

    let err = resolver
        .resolve_field(&FieldDef::new("ex/A", "root"), "ex", "")
        .unwrap_err();
    assert!(
        matches!(&err, ResolveError::CyclicSchema { record_path, .. } if record_path == "ex/A"),
        "unexpected error: {err}"
    );
}

/// A diamond-shaped (acyclic) graph is not a cycle: the same record may be
/// referenced twice as long as it never recurs on one path.
#[test]
fn repeated_sibling_references_are_not_cyclic() {
    let source = source_with(vec![
        vector3(),
        RecordSchema::new(
            "ex/Twist",
            vec![
                FieldDef::new("geometry_msgs/Vector3", "linear"),
                FieldDef::new("geometry_msgs/Vector3", "angular"),
            ],
        ),
    ]);
    let resolver = Resolver::new(&source);

    let tree = resolver
        .resolve_field(&FieldDef::new("ex/Twist", "twist"), "ex", "")
        .unwrap();
    assert_eq!(tree.leaves().len(), 6);
}

#[test]
fn resolution_is_deterministic() {
    let source = source_with(vec![vector3(), header()]);
    let resolver = Resolver::new(&source);
    let field = FieldDef::new("geometry_msgs/Vector3[3]", "samples");

    let first = resolver.resolve_field(&field, "geometry_msgs", "").unwrap();
    let second = resolver.resolve_field(&field, "geometry_msgs", "").unwrap();
    assert_eq!(first, second);
}

/// Scalar/fixed-only resolutions produce pairwise distinct leaf paths.
#[test]
fn leaf_paths_are_unique_without_unbounded_arities() {
    let source = source_with(vec![
        vector3(),
        header(),
        RecordSchema::new(
            "ds_sensor_msgs/Gyro",
            vec![
                FieldDef::new("Header", "header"),
                FieldDef::new("geometry_msgs/Vector3[4]", "raw"),
                FieldDef::new("float64", "temperature"),
            ],
        ),
    ]);
    let resolver = Resolver::new(&source);

    let tree = resolver
        .resolve_root(&StructDescriptor::new("Gyro", "ds_sensor_msgs/Gyro"))
        .unwrap();
    let paths = leaf_paths(&tree);
    let mut deduped = paths.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(paths.len(), deduped.len(), "duplicate paths in {paths:?}");
}

#[test]
fn resolve_root_has_no_struct_name_prefix() {
    let source = source_with(vec![header(), vector3()]);
    let mut with_gyro = source.clone();
    with_gyro.insert(RecordSchema::new(
        "ds_sensor_msgs/Gyro",
        vec![
            FieldDef::new("Header", "header"),
            FieldDef::new("geometry_msgs/Vector3", "rate"),
        ],
    ));
    let resolver = Resolver::new(&with_gyro);

    let tree = resolver
        .resolve_root(&StructDescriptor::new("Gyro", "ds_sensor_msgs/Gyro"))
        .unwrap();
    assert_eq!(
        leaf_paths(&tree),
        vec![
            "header.seq",
            "header.stamp",
            "header.frame_id",
            "rate.x",
            "rate.y",
            "rate.z",
        ]
    );
}

/// A root token that parses to a primitive cannot be flattened.
#[test]
fn primitive_root_type_is_rejected() {
    let source = source_with(vec![]);
    let resolver = Resolver::new(&source);

    let err = resolver
        .resolve_root(&StructDescriptor::new("Bad", "float64"))
        .unwrap_err();
    assert!(matches!(err, ResolveError::SchemaNotFound { .. }));
}

/// Malformed array suffixes degrade to opaque scalar primitives instead of
/// failing the struct.
#[test]
fn malformed_token_is_treated_as_opaque_primitive() {
    let source = source_with(vec![]);
    let resolver = Resolver::new(&source);

    let tree = resolver
        .resolve_field(&FieldDef::new("float64[bad]", "odd"), "", "")
        .unwrap();
    let leaves = tree.leaves();
    assert_eq!(leaves.len(), 1);
    assert_eq!(leaves[0].ty, "float64[bad]");
}
