/// DatabaseArgs - Arguments used to connect to the target database
#[derive(Debug, Clone)]
pub struct DatabaseArgs {
    /// MongoDB connection string, e.g. `mongodb://localhost:27017`
    pub connection_uri: String,
    /// Name of the database the migrations run against
    pub database_name: String,
}

impl DatabaseArgs {
    pub fn new(connection_uri: impl Into<String>, database_name: impl Into<String>) -> Self {
        Self { connection_uri: connection_uri.into(), database_name: database_name.into() }
    }
}
