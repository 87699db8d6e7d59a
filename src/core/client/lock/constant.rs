/// Collection holding at most one lock document per lock key
pub const LOCKS_COLLECTION: &str = "migration_locks";

/// Key guarding a whole runner invocation
pub const MIGRATION_RUN_LOCK_KEY: &str = "migration_run";
