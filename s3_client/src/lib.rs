//! Thin facade over the AWS S3 SDK, scoped to the single bucket that holds
//! uploaded request documents.

mod delete;
mod put;

/// An S3 client bound to one bucket
#[derive(Clone, Debug)]
pub struct S3 {
    inner: aws_sdk_s3::Client,
    bucket: String,
}

impl S3 {
    pub fn new(inner: aws_sdk_s3::Client, bucket: String) -> Self {
        Self { inner, bucket }
    }

    /// Puts the provided content into the bucket at the provided key.
    #[tracing::instrument(skip(self, content), fields(size = content.len()))]
    pub async fn put(
        &self,
        key: &str,
        content: Vec<u8>,
        content_type: Option<&str>,
    ) -> anyhow::Result<()> {
        put::put(&self.inner, &self.bucket, key, content, content_type).await
    }

    /// Deletes the provided key from the bucket.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, key: &str) -> anyhow::Result<()> {
        delete::delete(&self.inner, &self.bucket, key).await
    }
}
