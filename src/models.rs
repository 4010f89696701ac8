use serde::{Deserialize, Serialize};

pub const HEALTHY: &str = "healthy";

#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct HealthResponse {
    pub status: String
}

impl HealthResponse {
    pub fn healthy() -> Self {
        HealthResponse { status: HEALTHY.to_string() }
    }
}

#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct BucketList {
    pub buckets: Vec<String>
}

#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String
}
