use super::*;
use crate::server::controller::health::health;

/// Tests the liveness probe payload.
///
/// Expected: 200 with status "OK" inside the envelope
#[tokio::test]
async fn reports_ok() {
    let (status, body) = read(health().await).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "OK");
    assert!(body["data"]["timestamp"].is_string());
}
