/// Collection holding one `AppliedMigration` document per migration attempt
pub const APPLIED_MIGRATIONS_COLLECTION: &str = "applied_migrations";
