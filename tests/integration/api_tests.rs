//! API integration tests against a running, freshly seeded server

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

/// Helper to get a session token for a seeded barber
async fn get_auth_token(client: &Client) -> String {
    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "username": "calvin",
            "password": "shearmagic123"
        }))
        .send()
        .await
        .expect("Failed to send login request");

    let body: Value = response.json().await.expect("Failed to parse login response");
    body["token"].as_str().expect("No token in response").to_string()
}

async fn first_barber_id(client: &Client) -> i64 {
    let barbers: Value = client
        .get(format!("{}/barbers", BASE_URL))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    barbers[0]["id"].as_i64().expect("No barber id")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_login() {
    let client = Client::new();

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "username": "calvin",
            "password": "shearmagic123"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], true);
    assert!(body["token"].is_string());
    assert_eq!(body["token_type"], "Bearer");
}

#[tokio::test]
#[ignore]
async fn test_login_invalid_credentials() {
    let client = Client::new();

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "username": "calvin",
            "password": "wrong"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Invalid credentials");
}

#[tokio::test]
#[ignore]
async fn test_sunday_is_closed() {
    let client = Client::new();
    let barber_id = first_barber_id(&client).await;

    // 2031-03-16 is a Sunday
    let slots: Value = client
        .get(format!("{}/barbers/{}/availability?date=2031-03-16", BASE_URL, barber_id))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    assert_eq!(slots, json!([]));
}

#[tokio::test]
#[ignore]
async fn test_booking_flow() {
    let client = Client::new();
    let token = get_auth_token(&client).await;
    let barber_id = first_barber_id(&client).await;

    // 2031-03-14 is a Friday, 10:00-17:00 in the seeded schedule
    let slots: Value = client
        .get(format!("{}/barbers/{}/availability?date=2031-03-14", BASE_URL, barber_id))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(slots[0]["time"], "10:00");
    assert_eq!(slots.as_array().map(Vec::len), Some(14));

    let services: Value = client
        .get(format!("{}/services", BASE_URL))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    let service_id = services[0]["id"].as_i64().expect("No service id");

    let response = client
        .post(format!("{}/appointments", BASE_URL))
        .json(&json!({
            "barber_id": barber_id,
            "service_id": service_id,
            "date": "2031-03-14",
            "time": "11:00",
            "customer_name": "Marcus",
            "customer_phone": "555-0101",
            "is_priority": false
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let appointment: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(appointment["status"], "PENDING");
    let appointment_id = appointment["id"].as_i64().expect("No appointment id");

    let slots: Value = client
        .get(format!("{}/barbers/{}/availability?date=2031-03-14", BASE_URL, barber_id))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    let eleven = slots
        .as_array()
        .and_then(|s| s.iter().find(|slot| slot["time"] == "11:00"))
        .expect("11:00 slot");
    assert_eq!(eleven["available"], false);
    assert_eq!(eleven["is_priority_eligible"], true);

    let response = client
        .put(format!("{}/appointments/{}/status", BASE_URL, appointment_id))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "status": "CANCELLED" }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "CANCELLED");
}

#[tokio::test]
#[ignore]
async fn test_block_and_unblock_date() {
    let client = Client::new();
    let token = get_auth_token(&client).await;
    let barber_id = first_barber_id(&client).await;

    let response = client
        .post(format!("{}/barbers/{}/blocked-dates", BASE_URL, barber_id))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({ "date": "2031-03-13" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["reason"], "Unavailable");

    let slots: Value = client
        .get(format!("{}/barbers/{}/availability?date=2031-03-13", BASE_URL, barber_id))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(slots, json!([]));

    let response = client
        .delete(format!("{}/barbers/{}/blocked-dates/2031-03-13", BASE_URL, barber_id))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["removed"], 1);
}
