mod cloud_snapshot;

#[doc(inline)]
pub use cloud_snapshot::CloudSnapshot;
