//! Contact endpoints end to end against the in-memory store

mod common;

use actix_web::{http::StatusCode, test};
use serde_json::{json, Value};

use common::{contact_body, TestContext};
use contact_api::create_app;
use contact_api::dto::ContactResponse;

#[actix_web::test]
async fn test_create_contact_returns_created() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/api/contacts")
        .set_json(contact_body("張三", "0912345678", Some("台北市信義區")))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let contact: ContactResponse = test::read_body_json(resp).await;
    assert_eq!(contact.id, 1);
    assert_eq!(contact.name, "張三");
    assert_eq!(contact.phone, "0912345678");
    assert_eq!(contact.address.as_deref(), Some("台北市信義區"));
    assert_eq!(contact.created_at, contact.updated_at);
}

#[actix_web::test]
async fn test_create_trims_input_and_allows_missing_address() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/api/contacts")
        .set_json(json!({ "name": "  李四 ", "phone": " 0922333444" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["name"], "李四");
    assert_eq!(body["phone"], "0922333444");
    assert!(body["address"].is_null());
    assert!(body["createdAt"].is_string());
    assert!(body["updatedAt"].is_string());
}

#[actix_web::test]
async fn test_get_all_contacts() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    for (name, phone) in [("張三", "0912345678"), ("李四", "0922333444")] {
        let req = test::TestRequest::post()
            .uri("/api/contacts")
            .set_json(contact_body(name, phone, None))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);
    }

    let req = test::TestRequest::get().uri("/api/contacts").to_request();
    let contacts: Vec<ContactResponse> = test::call_and_read_body_json(&app, req).await;

    assert_eq!(contacts.len(), 2);
    assert_eq!(contacts[0].name, "張三");
    assert_eq!(contacts[1].name, "李四");
}

#[actix_web::test]
async fn test_get_contact_by_id() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/api/contacts")
        .set_json(contact_body("張三", "0912345678", None))
        .to_request();
    let created: ContactResponse = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/contacts/{}", created.id))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: ContactResponse = test::read_body_json(resp).await;
    assert_eq!(fetched, created);
}

#[actix_web::test]
async fn test_get_missing_contact_is_not_found() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::get().uri("/api/contacts/999").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], 404);
    assert_eq!(body["error"], "Not Found");
    assert_eq!(body["message"], "聯絡人不存在: 999");
    assert_eq!(body["path"], "/api/contacts/999");
    assert!(body.get("validationErrors").is_none());
}

#[actix_web::test]
async fn test_non_positive_id_is_bad_request() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    for uri in ["/api/contacts/0", "/api/contacts/-5"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{}", uri);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Bad Request");
        assert_eq!(body["message"], "聯絡人 ID 必須為正數");
        assert_eq!(body["validationErrors"][0]["field"], "id");
    }
}

#[actix_web::test]
async fn test_non_numeric_id_is_bad_request() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::get().uri("/api/contacts/abc").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "無效的路徑參數");
    assert_eq!(body["path"], "/api/contacts/abc");
}

#[actix_web::test]
async fn test_create_with_blank_fields_reports_every_field() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/api/contacts")
        .set_json(contact_body("   ", "", None))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Bad Request");
    assert_eq!(body["message"], "姓名為必填欄位");

    let errors = body["validationErrors"].as_array().unwrap();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0], json!({ "field": "name", "message": "姓名為必填欄位" }));
    assert_eq!(errors[1], json!({ "field": "phone", "message": "電話為必填欄位" }));

    assert!(ctx.contacts.is_empty().await);
}

#[actix_web::test]
async fn test_create_with_too_long_fields() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/api/contacts")
        .set_json(contact_body("張三", &"0".repeat(21), Some(&"路".repeat(201))))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "電話長度不可超過 20 字元");

    let errors = body["validationErrors"].as_array().unwrap();
    assert_eq!(errors[0]["field"], "phone");
    assert_eq!(errors[1]["field"], "address");
    assert_eq!(errors[1]["message"], "地址長度不可超過 200 字元");
}

#[actix_web::test]
async fn test_length_limits_count_characters() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/api/contacts")
        .set_json(contact_body(&"名".repeat(50), &"1".repeat(20), Some(&"路".repeat(200))))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
}

#[actix_web::test]
async fn test_malformed_json_is_bad_request() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/api/contacts")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"name\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], 400);
    assert_eq!(body["message"], "請求內容格式錯誤");
}

#[actix_web::test]
async fn test_update_contact() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/api/contacts")
        .set_json(contact_body("張三", "0912345678", Some("台北市")))
        .to_request();
    let created: ContactResponse = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::put()
        .uri(&format!("/api/contacts/{}", created.id))
        .set_json(contact_body("張三豐", "0987654321", None))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let updated: ContactResponse = test::read_body_json(resp).await;
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "張三豐");
    assert_eq!(updated.phone, "0987654321");
    assert_eq!(updated.address, None);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);
}

#[actix_web::test]
async fn test_update_missing_contact_is_not_found() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::put()
        .uri("/api/contacts/42")
        .set_json(contact_body("張三", "0912345678", None))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "聯絡人不存在: 42");
}

#[actix_web::test]
async fn test_update_length_rules_come_from_the_domain() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/api/contacts")
        .set_json(contact_body("張三", "0912345678", None))
        .to_request();
    let created: ContactResponse = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::put()
        .uri(&format!("/api/contacts/{}", created.id))
        .set_json(contact_body(&"名".repeat(51), "0912345678", None))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "姓名長度不可超過 50 字元");
    let errors = body["validationErrors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["field"], "name");

    let req = test::TestRequest::get()
        .uri(&format!("/api/contacts/{}", created.id))
        .to_request();
    let unchanged: ContactResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(unchanged.name, "張三");
}

#[actix_web::test]
async fn test_update_with_blank_phone() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::put()
        .uri("/api/contacts/1")
        .set_json(json!({ "name": "張三" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "電話為必填欄位");
    assert_eq!(body["validationErrors"][0]["field"], "phone");
}

#[actix_web::test]
async fn test_delete_contact() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/api/contacts")
        .set_json(contact_body("張三", "0912345678", None))
        .to_request();
    let created: ContactResponse = test::call_and_read_body_json(&app, req).await;

    let uri = format!("/api/contacts/{}", created.id);
    let req = test::TestRequest::delete().uri(&uri).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::get().uri(&uri).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::delete().uri(&uri).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_ids_are_not_reused_after_delete() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/api/contacts")
        .set_json(contact_body("張三", "0912345678", None))
        .to_request();
    let first: ContactResponse = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/contacts/{}", first.id))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/contacts")
        .set_json(contact_body("李四", "0922333444", None))
        .to_request();
    let second: ContactResponse = test::call_and_read_body_json(&app, req).await;

    assert!(second.id > first.id);
}
