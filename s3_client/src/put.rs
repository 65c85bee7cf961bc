use anyhow::Context;
use aws_sdk_s3 as s3;

/// Writes the given bytes to the bucket, tagging the object with the
/// declared content type when one is known
pub(crate) async fn put(
    client: &s3::Client,
    bucket: &str,
    key: &str,
    content: Vec<u8>,
    content_type: Option<&str>,
) -> anyhow::Result<()> {
    let body = s3::primitives::ByteStream::from(content);

    let mut request = client.put_object().bucket(bucket).key(key).body(body);
    if let Some(content_type) = content_type {
        request = request.content_type(content_type);
    }

    request
        .send()
        .await
        .context(format!("could not put item {key} into bucket {bucket}"))?;

    Ok(())
}
