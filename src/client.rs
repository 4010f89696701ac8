use async_trait::async_trait;
use std::error::Error as StdError;
use aws_config::{BehaviorVersion, Region};
use aws_config::meta::region::RegionProviderChain;
use aws_sdk_s3::Client;
use crate::error::{Error, Result};

/// S3 answers ListBuckets from the global endpoint, so a missing region
/// falls back to it instead of failing every request.
pub const FALLBACK_REGION: &str = "us-east-1";

/// Source of bucket names for the `/s3/buckets` route.
#[async_trait]
pub trait BucketProvider: Send + Sync {

    /// Names of every bucket visible to the caller, in provider order.
    async fn list_bucket_names(&self) -> Result<Vec<String>>;

}

pub struct S3BucketProvider {
    client: Client
}

impl S3BucketProvider {

    pub fn new(client: Client) -> Self {

        S3BucketProvider { client }

    }

    /// Builds the S3 client from the SDK's default credential and region chain,
    /// with `us-east-1` when no region is configured.
    /// Nothing is validated here; missing credentials only show up on the first call.
    pub async fn from_env() -> Self {

        let region = RegionProviderChain::default_provider()
            .or_else(Region::new(FALLBACK_REGION));

        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(region)
            .load()
            .await;

        Self::new(Client::new(&sdk_config))

    }

}

#[async_trait]
impl BucketProvider for S3BucketProvider {

    async fn list_bucket_names(&self) -> Result<Vec<String>> {

        let response = self.client
            .list_buckets()
            .send()
            .await
            .map_err(|e| Error::Provider(error_chain(&e)))?;

        // no bucket collection at all means an empty listing
        response.buckets()
            .iter()
            .map(|bucket| {
                bucket.name()
                    .map(str::to_string)
                    .ok_or_else(|| Error::Provider("bucket record is missing a name".to_string()))
            })
            .collect()

    }

}

/// `outer: cause: root cause`, without the SDK's Debug dump.
fn error_chain(err: &dyn StdError) -> String {

    let mut message = err.to_string();
    let mut source = err.source();

    while let Some(cause) = source {
        let text = cause.to_string();
        // some layers already repeat their cause in their own message
        if !message.ends_with(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }

    message

}
