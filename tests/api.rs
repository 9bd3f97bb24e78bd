use std::sync::Arc;

use actix_web::{App, http::StatusCode, test, web};
use serde_json::{Value, json};

use classdesk::routes;
use classdesk::storage::memory::seed::Fixtures;
use classdesk::storage::{MemoryStorage, Storage};
use classdesk::utils::{json_error_handler, query_error_handler};

fn seeded_storage() -> Arc<dyn Storage> {
    let storage = MemoryStorage::instant();
    storage
        .seed(Fixtures::load_embedded().expect("fixtures parse"))
        .expect("seed");
    Arc::new(storage)
}

macro_rules! app {
    ($storage:expr) => {
        test::init_service(
            App::new()
                .app_data(web::QueryConfig::default().error_handler(query_error_handler))
                .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                .app_data(web::Data::new($storage.clone()))
                .configure(routes::configure_api_routes),
        )
        .await
    };
}

fn ids(items: &Value) -> Vec<String> {
    items
        .as_array()
        .expect("array")
        .iter()
        .map(|item| item["id"].as_str().expect("id").to_string())
        .collect()
}

#[actix_web::test]
async fn class_crud_round_trip() {
    let storage = seeded_storage();
    let app = app!(storage);

    let req = test::TestRequest::post()
        .uri("/api/v1/classes")
        .set_json(json!({ "name": "Chemistry Lab", "subject": "Chemistry", "id": "ignored" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 0);
    let id = body["data"]["id"].as_str().unwrap().to_string();
    assert_ne!(id, "ignored");

    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/classes/{id}"))
        .set_json(json!({ "subject": "Organic Chemistry" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["name"], "Chemistry Lab");
    assert_eq!(body["data"]["subject"], "Organic Chemistry");

    let req = test::TestRequest::get().uri("/api/v1/classes").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 5);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/classes/{id}"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/classes/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 2000);
}

#[actix_web::test]
async fn unknown_ids_are_not_found() {
    let storage = seeded_storage();
    let app = app!(storage);

    for uri in [
        "/api/v1/classes/missing",
        "/api/v1/students/missing",
        "/api/v1/assignments/missing",
        "/api/v1/notifications/missing",
        "/api/v1/composers/missing",
    ] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{uri}");
    }

    let req = test::TestRequest::put()
        .uri("/api/v1/students/missing")
        .set_json(json!({ "name": "Nobody" }))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );
}

#[actix_web::test]
async fn student_enrolment_updates_both_sides() {
    let storage = seeded_storage();
    let app = app!(storage);

    let req = test::TestRequest::post()
        .uri("/api/v1/students")
        .set_json(json!({ "name": "Mia Clark", "email": "mia.clark@school.edu", "class_ids": ["4"] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    let student_id = body["data"]["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::get().uri("/api/v1/classes/4").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let members: Vec<&str> = body["data"]["student_ids"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(Value::as_str)
        .collect();
    assert!(members.contains(&student_id.as_str()));

    let req = test::TestRequest::get()
        .uri("/api/v1/students?search=CLARK")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(ids(&body["data"]), vec![student_id]);
}

#[actix_web::test]
async fn student_validation_and_bulk_delete() {
    let storage = seeded_storage();
    let app = app!(storage);

    let req = test::TestRequest::post()
        .uri("/api/v1/students")
        .set_json(json!({ "name": "Bad Email", "email": "not-an-email" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 3004);

    // 含未知 id 时整体失败，不删除任何记录
    let req = test::TestRequest::post()
        .uri("/api/v1/students/bulk-delete")
        .set_json(json!({ "ids": ["4", "missing"] }))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );
    assert!(storage.students().get_by_id("4").await.is_ok());

    let req = test::TestRequest::post()
        .uri("/api/v1/students/bulk-delete")
        .set_json(json!({ "ids": ["4", "5"] }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["deleted"], 2);
    assert_eq!(storage.students().get_all().await.unwrap().len(), 6);
}

#[actix_web::test]
async fn assignment_filters_report_counts() {
    let storage = seeded_storage();
    let app = app!(storage);

    let req = test::TestRequest::get()
        .uri("/api/v1/assignments?filter=upcoming")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let counts = &body["data"]["counts"];
    assert_eq!(counts["all"], 4);
    assert_eq!(
        body["data"]["items"].as_array().unwrap().len() as u64,
        counts["upcoming"].as_u64().unwrap()
    );

    let req = test::TestRequest::get()
        .uri("/api/v1/assignments?filter=someday")
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::BAD_REQUEST
    );
}

#[actix_web::test]
async fn notification_patch_cannot_change_recipients() {
    let storage = seeded_storage();
    let app = app!(storage);

    let req = test::TestRequest::post()
        .uri("/api/v1/notifications")
        .set_json(json!({
            "type": "reminder",
            "subject": "Lab report",
            "message": "Due Friday",
            "recipient_ids": ["1", "3"]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    let id = body["data"]["id"].as_str().unwrap().to_string();
    assert_eq!(body["data"]["status"], "sent");

    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/notifications/{id}"))
        .set_json(json!({ "recipient_ids": ["8"] }))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::BAD_REQUEST
    );

    let req = test::TestRequest::get().uri("/api/v1/notifications").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let history = body["data"].as_array().unwrap();
    assert_eq!(history[0]["id"], id.as_str());
    assert_eq!(history[0]["recipient_ids"], json!(["1", "3"]));
}

#[actix_web::test]
async fn quick_notify_resolves_selected_classes() {
    let storage = seeded_storage();
    let app = app!(storage);

    let req = test::TestRequest::post()
        .uri("/api/v1/notifications/quick")
        .set_json(json!({ "type": "announcement", "class_ids": [], "use_template": true }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Please select at least one class");

    let req = test::TestRequest::post()
        .uri("/api/v1/notifications/quick")
        .set_json(json!({ "type": "announcement", "class_ids": ["1", "3"], "use_template": true }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["subject"], "Class Update");
    assert_eq!(body["data"]["recipient_ids"], json!(["1", "2", "3", "6", "7"]));
}

#[actix_web::test]
async fn composer_session_flow() {
    let storage = seeded_storage();
    let app = app!(storage);
    let before = storage.notifications().get_all().await.unwrap().len();

    let req = test::TestRequest::post().uri("/api/v1/composers").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    let composer = body["data"]["id"].as_str().unwrap().to_string();
    assert_eq!(body["data"]["state"], "editing");

    // 没有收件人时提交被拒绝，存储不受影响
    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/composers/{composer}/template"))
        .set_json(json!({ "type": "reminder" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["subject"], "Assignment Reminder");

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/composers/{composer}/submit"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Please select at least one recipient");
    assert_eq!(storage.notifications().get_all().await.unwrap().len(), before);

    for class_id in ["1", "2", "1"] {
        let req = test::TestRequest::post()
            .uri(&format!("/api/v1/composers/{composer}/classes/{class_id}"))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    }

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/composers/{composer}/classes/missing"))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );

    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/composers/{composer}/fields"))
        .set_json(json!({ "subject": "Quiz on Monday", "assignment_id": "1" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["selected_class_ids"], json!(["2"]));
    assert_eq!(body["data"]["recipient_ids"], json!(["3", "4", "5"]));

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/composers/{composer}/submit"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["notification"]["subject"], "Quiz on Monday");
    assert_eq!(body["data"]["notification"]["assignment_id"], "1");
    assert_eq!(body["data"]["composer"]["state"], "idle");
    assert_eq!(body["data"]["composer"]["recipient_ids"], json!([]));
    assert_eq!(
        storage.notifications().get_all().await.unwrap().len(),
        before + 1
    );

    // 提交成功后会话被释放
    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/composers/{composer}"))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );
    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/composers/{composer}"))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );
}

#[actix_web::test]
async fn sent_recipients_survive_membership_changes() {
    let storage = seeded_storage();
    let app = app!(storage);

    let req = test::TestRequest::post()
        .uri("/api/v1/classes")
        .set_json(json!({ "name": "Chemistry 1", "subject": "Chemistry", "student_ids": ["1", "3"] }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let class_id = body["data"]["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::post().uri("/api/v1/composers").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let composer = body["data"]["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/composers/{composer}/template"))
        .set_json(json!({ "type": "announcement" }))
        .to_request();
    test::call_service(&app, req).await;
    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/composers/{composer}/classes/{class_id}"))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/composers/{composer}/submit"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    let notification = body["data"]["notification"]["id"]
        .as_str()
        .unwrap()
        .to_string();
    assert_eq!(body["data"]["notification"]["recipient_ids"], json!(["1", "3"]));

    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/classes/{class_id}"))
        .set_json(json!({ "student_ids": ["2", "4", "5"] }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/notifications/{notification}"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["recipient_ids"], json!(["1", "3"]));
}

#[actix_web::test]
async fn dashboard_reflects_store_contents() {
    let storage = seeded_storage();
    let app = app!(storage);

    let req = test::TestRequest::get().uri("/api/v1/dashboard").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let stats = &body["data"]["stats"];
    assert_eq!(stats["total_classes"], 4);
    assert_eq!(stats["total_students"], 8);

    let activity = body["data"]["recent_activity"].as_array().unwrap();
    assert_eq!(activity.len(), 5);
    let times: Vec<&str> = activity
        .iter()
        .map(|item| item["time"].as_str().unwrap())
        .collect();
    let mut sorted = times.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(times, sorted);
}

#[actix_web::test]
async fn malformed_json_gets_envelope() {
    let storage = seeded_storage();
    let app = app!(storage);

    let req = test::TestRequest::post()
        .uri("/api/v1/classes")
        .insert_header(("content-type", "application/json"))
        .set_payload("{ not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 1000);
}
