use axum::http::HeaderValue;

/// Browser origins allowed to call the service through the gateway
pub const ORIGINS: [HeaderValue; 5] = [
    HeaderValue::from_static("http://localhost:3000"),
    HeaderValue::from_static("http://host.local:3000"),
    HeaderValue::from_static("https://portals-dev.assetdesk.io"),
    HeaderValue::from_static("https://portals-staging.assetdesk.io"),
    HeaderValue::from_static("https://portals.assetdesk.io"),
];
