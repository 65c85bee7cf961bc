//! Implementation of the DocumentStorage over the document bucket.

use s3_client::S3;

use crate::domain::port::DocumentStorage;

/// The S3DocumentStorage holds document blobs in the configured bucket
#[derive(Debug, Clone)]
pub struct S3DocumentStorage {
    /// The underlying bucket-scoped S3 client
    s3: S3,
}

impl S3DocumentStorage {
    /// Create a new instance of S3DocumentStorage
    pub fn new(s3: S3) -> S3DocumentStorage {
        S3DocumentStorage { s3 }
    }
}

impl DocumentStorage for S3DocumentStorage {
    async fn store_blob(
        &self,
        path: &str,
        bytes: &[u8],
        content_type: Option<&str>,
    ) -> anyhow::Result<()> {
        self.s3.put(path, bytes.to_vec(), content_type).await
    }

    async fn remove_blob(&self, path: &str) -> anyhow::Result<()> {
        self.s3.delete(path).await
    }
}
