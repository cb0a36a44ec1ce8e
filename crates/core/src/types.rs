/// Primary keys of `venues`, `artists` and `shows` are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are stored as `TIMESTAMPTZ` and handled in UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
