use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("HTTP ureq error while reaching the ephemeris feed: {0}")]
    UpstreamHttp(#[from] ureq::Error),

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Ephemeris feed does not match the OEM schema: {0}")]
    FeedSchema(String),

    #[error("Malformed epoch timestamp: {0}")]
    MalformedTimestamp(String),

    #[error("State vector {epoch} has no {field} component")]
    MissingComponent { epoch: String, field: &'static str },

    #[error("State vector {epoch} has a non numeric {field} component: {value:?}")]
    InvalidComponent {
        epoch: String,
        field: &'static str,
        value: String,
    },

    #[error("Unable to read the system clock: {0}")]
    ClockUnavailable(String),

    #[error("Epoch store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Invalid cached record: {0}")]
    CacheRecord(#[from] serde_json::Error),

    #[cfg(feature = "redis-store")]
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),
}

impl From<quick_xml::DeError> for TrackerError {
    fn from(err: quick_xml::DeError) -> Self {
        TrackerError::FeedSchema(err.to_string())
    }
}

impl TrackerError {
    /// True when the failure comes from reaching the upstream feed rather than from its content.
    pub fn is_upstream(&self) -> bool {
        matches!(self, TrackerError::UpstreamHttp(_) | TrackerError::IoError(_))
    }
}

impl PartialEq for TrackerError {
    fn eq(&self, other: &Self) -> bool {
        use TrackerError::*;
        match (self, other) {
            (FeedSchema(a), FeedSchema(b)) => a == b,
            (MalformedTimestamp(a), MalformedTimestamp(b)) => a == b,
            (
                MissingComponent {
                    epoch: e1,
                    field: f1,
                },
                MissingComponent {
                    epoch: e2,
                    field: f2,
                },
            ) => e1 == e2 && f1 == f2,
            (
                InvalidComponent {
                    epoch: e1,
                    field: f1,
                    value: v1,
                },
                InvalidComponent {
                    epoch: e2,
                    field: f2,
                    value: v2,
                },
            ) => e1 == e2 && f1 == f2 && v1 == v2,
            (ClockUnavailable(a), ClockUnavailable(b)) => a == b,
            (StoreUnavailable(a), StoreUnavailable(b)) => a == b,

            // not comparable: same variant is enough
            (UpstreamHttp(_), UpstreamHttp(_)) => true,
            (IoError(_), IoError(_)) => true,
            (CacheRecord(_), CacheRecord(_)) => true,
            #[cfg(feature = "redis-store")]
            (Redis(_), Redis(_)) => true,

            _ => false,
        }
    }
}
