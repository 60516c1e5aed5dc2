// ABOUTME: Built-in status tables for well-known cloud image APIs.
// ABOUTME: Transitional native states always map to PENDING.

use super::table::{StatusTable, StatusTableBuilder};
use crate::compute::Status;

pub const AWS_EC2: &str = "aws-ec2";
pub const OPENSTACK_GLANCE: &str = "openstack-glance";
pub const OPENSTACK_NOVA: &str = "openstack-nova";
pub const GCE: &str = "gce";
pub const AZURE: &str = "azure";
pub const TRITON: &str = "triton";
pub const VCLOUD: &str = "vcloud";

/// Every built-in table, keyed by provider name.
pub fn all() -> Vec<(&'static str, StatusTable)> {
    vec![
        (AWS_EC2, aws_ec2()),
        (OPENSTACK_GLANCE, openstack_glance()),
        (OPENSTACK_NOVA, openstack_nova()),
        (GCE, gce()),
        (AZURE, azure()),
        (TRITON, triton()),
        (VCLOUD, vcloud()),
    ]
}

fn finish(builder: StatusTableBuilder) -> StatusTable {
    builder
        .build()
        .expect("built-in status tables only target mapped statuses")
}

/// EC2 AMI `State` values.
pub fn aws_ec2() -> StatusTable {
    finish(
        StatusTable::builder()
            .text("pending", Status::Pending)
            .text("transient", Status::Pending)
            .text("available", Status::Available)
            .text("deregistered", Status::Deleted)
            .text("invalid", Status::Error)
            .text("failed", Status::Error)
            .text("error", Status::Error),
    )
}

/// Glance v2 image `status` values.
pub fn openstack_glance() -> StatusTable {
    finish(
        StatusTable::builder()
            .text("queued", Status::Pending)
            .text("saving", Status::Pending)
            .text("uploading", Status::Pending)
            .text("importing", Status::Pending)
            .text("active", Status::Available)
            .text("killed", Status::Error)
            .text("deleted", Status::Deleted)
            .text("pending_delete", Status::Deleted),
    )
}

/// Nova compute `images` API status values.
pub fn openstack_nova() -> StatusTable {
    finish(
        StatusTable::builder()
            .text("SAVING", Status::Pending)
            .text("ACTIVE", Status::Available)
            .text("DELETED", Status::Deleted)
            .text("ERROR", Status::Error),
    )
}

/// Compute Engine image `status` values.
pub fn gce() -> StatusTable {
    finish(
        StatusTable::builder()
            .case_sensitive(true)
            .text("PENDING", Status::Pending)
            .text("READY", Status::Available)
            .text("DELETING", Status::Deleted)
            .text("FAILED", Status::Error),
    )
}

/// Azure managed image `provisioningState` values.
pub fn azure() -> StatusTable {
    finish(
        StatusTable::builder()
            .text("Creating", Status::Pending)
            .text("Updating", Status::Pending)
            .text("Migrating", Status::Pending)
            .text("Succeeded", Status::Available)
            .text("Deleting", Status::Deleted)
            .text("Failed", Status::Error),
    )
}

/// Triton (SmartDataCenter) image `state` values.
pub fn triton() -> StatusTable {
    finish(
        StatusTable::builder()
            .text("creating", Status::Pending)
            .text("unactivated", Status::Pending)
            .text("active", Status::Available)
            .text("failed", Status::Error),
    )
}

/// vCloud Director vApp template numeric status codes.
pub fn vcloud() -> StatusTable {
    finish(
        StatusTable::builder()
            .code(-1, Status::Error)
            .code(0, Status::Pending)
            .code(1, Status::Available)
            .code(8, Status::Available),
    )
}
