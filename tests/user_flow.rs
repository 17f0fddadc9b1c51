mod common;

use actix_web::{http::StatusCode, test};
use common::{client::TestClient, test_data, TestContext};
use uuid::Uuid;

#[tokio::test]
async fn test_user_creation_flow_success() {
    println!("\n\n[+] Running test: test_user_creation_flow_success");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    println!("[+] Test client and context created.");
    let app = test::init_service(client.create_app()).await;
    println!("[+] Actix web app initialized.");

    let user_data = test_data::sample_user("jane@shop.com");
    println!("[>] Sending request to create user: {:?}", user_data.name);

    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(&user_data)
        .to_request();

    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    println!("[<] Response body: {}", body);
    assert_eq!(body["role"], "Staff");
    assert_eq!(body["active"], true);

    println!("[>] Verifying user creation in database.");
    let id: Uuid = body["id"].as_str().unwrap().parse().unwrap();
    let user = ctx.db.get_user_by_id(id).await.expect("user should exist");
    assert_eq!(user.email, "jane@shop.com");
    assert_eq!(user.name, "Jane Doe");
    assert_eq!(user.avatar, "/placeholder.svg");
    println!("[/] Test passed: User creation flow successful.");
}

#[tokio::test]
async fn test_user_creation_missing_fields() {
    println!("\n\n[+] Running test: test_user_creation_missing_fields");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(serde_json::json!({ "name": "No Email" }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["requiredFields"], serde_json::json!(["name", "email", "avatar"]));
    println!("[/] Test passed: Missing fields reported.");
}

#[tokio::test]
async fn test_user_creation_rule_violations() {
    println!("\n\n[+] Running test: test_user_creation_rule_violations");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let cases = [
        (serde_json::json!({ "email": "not-an-email" }), "Please provide a valid email address"),
        (serde_json::json!({ "role": "Owner" }), "Owner is not a valid role"),
        (serde_json::json!({ "phone": "12345" }), "12345 is not a valid phone number!"),
    ];

    for (overrides, expected) in cases {
        let mut payload = serde_json::to_value(test_data::sample_user("rules@shop.com")).unwrap();
        for (k, v) in overrides.as_object().unwrap() {
            payload[k] = v.clone();
        }
        println!("[>] Sending user with {}", overrides);

        let req = test::TestRequest::post()
            .uri("/api/users")
            .set_json(&payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        println!("[<] Received response with status: {}", resp.status());
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], expected);
    }
    println!("[/] Test passed: Rule violations rejected.");
}

#[tokio::test]
async fn test_user_creation_duplicate_email() {
    println!("\n\n[+] Running test: test_user_creation_duplicate_email");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    println!("[>] Seeding user with email dup@shop.com.");
    client.create_test_user("dup@shop.com").await.expect("seed user");

    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(test_data::sample_user("dup@shop.com"))
        .to_request();

    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Email already exists");
    println!("[/] Test passed: Duplicate email returned CONFLICT.");
}

#[tokio::test]
async fn test_user_update_and_toggle_flow() {
    println!("\n\n[+] Running test: test_user_update_and_toggle_flow");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let user = client.create_test_user("staff@shop.com").await.expect("seed user");
    client.create_test_user("taken@shop.com").await.expect("seed user");

    println!("[>] Promoting user to Manager.");
    let req = test::TestRequest::put()
        .uri(&format!("/api/users/{}", user.id))
        .set_json(serde_json::json!({ "role": "Manager", "phone": "5551234567" }))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["role"], "Manager");
    assert_eq!(body["phone"], "5551234567");
    assert_eq!(body["email"], "staff@shop.com");

    println!("[>] Changing email to one already taken.");
    let req = test::TestRequest::put()
        .uri(&format!("/api/users/{}", user.id))
        .set_json(serde_json::json!({ "email": "taken@shop.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    println!("[>] Toggling status.");
    let req = test::TestRequest::post()
        .uri(&format!("/api/users/{}/toggle-status", user.id))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["active"], false);

    let (active, total) = ctx.db.count_users().await.expect("count users");
    assert_eq!((active, total), (1, 2));

    println!("[>] Updating a user that does not exist.");
    let req = test::TestRequest::put()
        .uri(&format!("/api/users/{}", Uuid::new_v4()))
        .set_json(serde_json::json!({ "name": "Ghost" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "User not found");
    println!("[/] Test passed: User update flow successful.");
}

#[tokio::test]
async fn test_user_list_and_delete_flow() {
    println!("\n\n[+] Running test: test_user_list_and_delete_flow");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let user = client.create_test_user("bye@shop.com").await.expect("seed user");
    client.create_test_user("stay@shop.com").await.expect("seed user");

    let req = test::TestRequest::get().uri("/api/users?q=BYE").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    println!("[>] Deleting user {}.", user.id);
    let req = test::TestRequest::delete()
        .uri(&format!("/api/users/{}", user.id))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["message"], "User deleted");
    assert_eq!(body["id"], user.id.to_string());

    let req = test::TestRequest::get().uri("/api/users").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/users/{}", user.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    println!("[/] Test passed: User list and delete flow successful.");
}

#[tokio::test]
async fn test_user_update_rule_violations() {
    println!("\n\n[+] Running test: test_user_update_rule_violations");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let user = client.create_test_user("rules-update@shop.com").await.expect("seed user");

    let cases = [
        (serde_json::json!({ "email": "bad" }), "Please provide a valid email address"),
        (serde_json::json!({ "email": "jané@shop.com" }), "Please provide a valid email address"),
        (serde_json::json!({ "role": "Owner" }), "Owner is not a valid role"),
        (serde_json::json!({ "phone": "123" }), "123 is not a valid phone number!"),
    ];

    for (patch, expected) in cases {
        println!("[>] Updating user with {}", patch);
        let req = test::TestRequest::put()
            .uri(&format!("/api/users/{}", user.id))
            .set_json(&patch)
            .to_request();
        let resp = test::call_service(&app, req).await;
        println!("[<] Received response with status: {}", resp.status());
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "VALIDATION_ERROR");
        assert_eq!(body["message"], expected);
    }

    println!("[>] Verifying the stored user is unchanged.");
    let stored = ctx.db.get_user_by_id(user.id).await.expect("user should exist");
    assert_eq!(stored.email, "rules-update@shop.com");
    assert_eq!(stored.role, "Staff");
    assert_eq!(stored.phone, None);
    println!("[/] Test passed: Update rule violations rejected.");
}

#[tokio::test]
async fn test_user_toggle_status_twice_and_missing() {
    println!("\n\n[+] Running test: test_user_toggle_status_twice_and_missing");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let user = client.create_test_user("toggle@shop.com").await.expect("seed user");

    println!("[>] Toggling status twice.");
    let first = ctx.db.toggle_user_active(user.id).await.expect("first toggle");
    assert!(!first.active);
    let second = ctx.db.toggle_user_active(user.id).await.expect("second toggle");
    assert!(second.active);
    assert!(second.updated_at >= first.updated_at);

    println!("[>] Toggling a user that does not exist.");
    let req = test::TestRequest::post()
        .uri(&format!("/api/users/{}/toggle-status", Uuid::new_v4()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "User not found");
    println!("[/] Test passed: Toggle flips in place and reports missing users.");
}
