mod snapshot_repository;

pub use snapshot_repository::{PostgresSnapshotRepository, SnapshotRepository};
