#![cfg(feature = "rosmsg")]

use std::path::PathBuf;

use bagflat::{
    flatten_struct, FinalEntry, FsSchemaSource, NoOverrides, StructDescriptor, UnboundedPolicy,
};

fn msg_tree() -> FsSchemaSource {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../bagflat-rosmsg/tests/data");
    FsSchemaSource::single_root(root)
}

/// Full pipeline over an on-disk message tree: .msg parsing, header aliasing,
/// nested record resolution, and the rostime stamp rule.
#[test]
fn gyro_flattens_from_msg_files() {
    let out = flatten_struct(
        &StructDescriptor::new("Gyro", "ds_sensor_msgs/Gyro"),
        &msg_tree(),
        &NoOverrides,
        UnboundedPolicy::Reject,
    )
    .unwrap();

    let paths: Vec<&str> = out.leaves.iter().map(|l| l.path.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            "header.seq",
            "header.stamp",
            "header.frame_id",
            "rate.x",
            "rate.y",
            "rate.z",
            "temperature",
            "status",
        ]
    );
    assert_eq!(
        out.entries.get("header.stamp"),
        Some(&FinalEntry::plain("rostime", "header.stamp"))
    );
}
