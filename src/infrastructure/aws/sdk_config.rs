use aws_config::{BehaviorVersion, Region, SdkConfig};

/// Loads shared AWS configuration once for every service client.
///
/// Without an explicit region the default provider chain decides.
pub async fn load_sdk_config(region: Option<&str>) -> SdkConfig {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());
    if let Some(region) = region {
        loader = loader.region(Region::new(region.to_string()));
    }
    let config = loader.load().await;

    tracing::debug!(
        region = config.region().map(|r| r.as_ref()).unwrap_or("unresolved"),
        "AWS configuration loaded"
    );
    config
}
