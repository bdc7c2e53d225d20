use crate::helpers::spawn_app;
use planting_guide::domain::PlantingInfo;

#[tokio::test]
async fn test_api_returns_default_ranking_for_default_crop() {
    let app = spawn_app().await;

    let response = app
        .post_planting_info(&serde_json::json!({"postalCode": "90210", "crop": "wheat"}))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["optimalTime"], "Mid-April to Early-May");
    assert_eq!(body["topCrops"], serde_json::json!(["Corn", "Soybeans", "Wheat"]));
}

#[tokio::test]
async fn test_api_prepends_other_crop() {
    let app = spawn_app().await;

    let info: PlantingInfo = app
        .post_planting_info(&serde_json::json!({"postalCode": "04109", "crop": "Potatoes"}))
        .await
        .json()
        .await
        .unwrap();

    assert_eq!(info.top_crops, vec!["Potatoes", "Corn", "Soybeans", "Wheat"]);
}

#[tokio::test]
async fn test_api_rejects_empty_crop() {
    let app = spawn_app().await;

    let response = app
        .post_planting_info(&serde_json::json!({"postalCode": "90210", "crop": ""}))
        .await;

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn test_api_rejects_missing_fields() {
    let app = spawn_app().await;

    let response = app
        .post_planting_info(&serde_json::json!({"crop": "Corn"}))
        .await;

    assert_eq!(response.status().as_u16(), 400);
}
