//! Campaign endpoint integration tests
//!
//! - GET /api/v1/campaigns - List campaigns, optionally scoped by `user_id`
//! - GET /api/v1/campaigns/{id} - Campaign detail

use axum::http::StatusCode;
use serde_json::json;

use crate::common::TestApp;

mod test_list_campaigns {
    use super::*;

    #[tokio::test]
    async fn test_browse_returns_every_campaign_in_store_order() {
        let app = TestApp::new().unwrap();

        let (status, body) = app.get("/api/v1/campaigns").await.unwrap();

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "success");
        assert_eq!(body["message"], "List of campaigns");
        let ids: Vec<i64> = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["id"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_owner_scopes_the_listing() {
        let app = TestApp::new().unwrap();

        let (status, body) = app.get("/api/v1/campaigns?user_id=7").await.unwrap();

        assert_eq!(status, StatusCode::OK);
        let data = body["data"].as_array().unwrap();
        assert_eq!(data.len(), 2);
        assert!(data.iter().all(|c| c["user_id"] == 7));
    }

    #[tokio::test]
    async fn test_non_positive_owner_browses_everything() {
        let app = TestApp::new().unwrap();

        let (_, all) = app.get("/api/v1/campaigns").await.unwrap();
        let (_, zero) = app.get("/api/v1/campaigns?user_id=0").await.unwrap();
        let (_, negative) = app.get("/api/v1/campaigns?user_id=-4").await.unwrap();

        assert_eq!(zero["data"], all["data"]);
        assert_eq!(negative["data"], all["data"]);
    }

    #[tokio::test]
    async fn test_empty_owner_value_browses_everything() {
        let app = TestApp::new().unwrap();

        let (_, all) = app.get("/api/v1/campaigns").await.unwrap();
        let (status, empty) = app.get("/api/v1/campaigns?user_id=").await.unwrap();

        assert_eq!(status, StatusCode::OK);
        assert_eq!(empty["status"], "success");
        assert_eq!(empty["data"].as_array().unwrap().len(), 3);
        assert_eq!(empty["data"], all["data"]);
    }

    #[tokio::test]
    async fn test_owner_without_campaigns_is_empty_success() {
        let app = TestApp::new().unwrap();

        let (status, body) = app.get("/api/v1/campaigns?user_id=42").await.unwrap();

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "success");
        assert_eq!(body["data"], json!([]));
    }

    #[tokio::test]
    async fn test_summary_shape() {
        let app = TestApp::new().unwrap();

        let (_, body) = app.get("/api/v1/campaigns?user_id=7").await.unwrap();

        assert_eq!(
            body["data"][0],
            json!({
                "id": 1,
                "name": "Community Garden",
                "short_description": "Raised beds for the block",
                "image_url": "a.png",
                "goal_amount": 10_000_000,
                "current_amount": 2_500_000,
                "slug": "community-garden",
                "user_id": 7
            })
        );
    }

    #[tokio::test]
    async fn test_campaign_without_images_has_empty_image_url() {
        let app = TestApp::new().unwrap();

        let (_, body) = app.get("/api/v1/campaigns?user_id=3").await.unwrap();

        assert_eq!(body["data"][0]["image_url"], "");
    }

    #[tokio::test]
    async fn test_empty_store() {
        let app = TestApp::empty();

        let (status, body) = app.get("/api/v1/campaigns").await.unwrap();

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"], json!([]));
    }

    #[tokio::test]
    async fn test_malformed_owner_is_rejected() {
        let app = TestApp::new().unwrap();

        let (status, body) = app.get("/api/v1/campaigns?user_id=seven").await.unwrap();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], "error");
        assert_eq!(body["data"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_store_outage() {
        let app = TestApp::new().unwrap();
        app.store.set_unavailable(true);

        let (status, body) = app.get("/api/v1/campaigns").await.unwrap();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["status"], "error");
        assert_eq!(body["data"]["code"], "DATABASE_ERROR");
    }
}

mod test_get_campaign {
    use super::*;

    #[tokio::test]
    async fn test_detail_shape() {
        let app = TestApp::new().unwrap();

        let (status, body) = app.get("/api/v1/campaigns/1").await.unwrap();

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "success");
        assert_eq!(body["message"], "Campaign detail");
        assert_eq!(
            body["data"],
            json!({
                "id": 1,
                "name": "Community Garden",
                "short_description": "Raised beds for the block",
                "description": "Soil, seeds and a shed for the whole neighbourhood",
                "image_url": "a.png",
                "goal_amount": 10_000_000,
                "current_amount": 2_500_000,
                "user_id": 7,
                "slug": "community-garden",
                "perks": ["Sticker", "T-Shirt", "Mug"],
                "user": {
                    "name": "Ayu Lestari",
                    "image_url": "images/avatar-img-7.png"
                },
                "images": [
                    { "image_url": "a.png", "is_primary": false },
                    { "image_url": "b.png", "is_primary": true }
                ]
            })
        );
    }

    #[tokio::test]
    async fn test_cover_is_first_image_not_primary() {
        let app = TestApp::new().unwrap();

        let (_, body) = app.get("/api/v1/campaigns/1").await.unwrap();

        assert_eq!(body["data"]["image_url"], "a.png");
        assert_eq!(body["data"]["images"][1]["is_primary"], true);
    }

    #[tokio::test]
    async fn test_trailing_comma_keeps_empty_perk() {
        let app = TestApp::new().unwrap();

        let (_, body) = app.get("/api/v1/campaigns/2").await.unwrap();

        assert_eq!(body["data"]["perks"], json!(["Bookmark", "Tote", ""]));
        assert_eq!(body["data"]["images"], json!([]));
        assert_eq!(body["data"]["image_url"], "");
    }

    #[tokio::test]
    async fn test_missing_owner_profile_gives_empty_user() {
        let app = TestApp::new().unwrap();

        let (status, body) = app.get("/api/v1/campaigns/3").await.unwrap();

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["user"], json!({ "name": "", "image_url": "" }));
    }

    #[tokio::test]
    async fn test_unknown_campaign_is_not_found() {
        let app = TestApp::new().unwrap();

        let (status, body) = app.get("/api/v1/campaigns/999").await.unwrap();

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["status"], "error");
        assert_eq!(body["data"]["code"], "NOT_FOUND");
        assert_eq!(body["message"], "Not found: Campaign 999 not found");
    }

    #[tokio::test]
    async fn test_outage_is_distinct_from_not_found() {
        let app = TestApp::new().unwrap();
        app.store.set_unavailable(true);

        let (status, body) = app.get("/api/v1/campaigns/1").await.unwrap();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["data"]["code"], "DATABASE_ERROR");
        assert_eq!(body["message"], "Internal server error");
    }

    #[tokio::test]
    async fn test_invalid_id_is_rejected() {
        let app = TestApp::new().unwrap();

        for uri in ["/api/v1/campaigns/0", "/api/v1/campaigns/abc"] {
            let (status, body) = app.get(uri).await.unwrap();
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert_eq!(body["data"]["code"], "VALIDATION_ERROR");
        }
    }

    #[tokio::test]
    async fn test_repeated_reads_are_identical() {
        let app = TestApp::new().unwrap();

        let (_, first) = app.get("/api/v1/campaigns/1").await.unwrap();
        let (_, second) = app.get("/api/v1/campaigns/1").await.unwrap();

        assert_eq!(first, second);
    }
}
