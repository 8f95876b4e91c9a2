use crate::gateway_harness::GatewayTestServer;
use reqwest::StatusCode;
use serde_json::{Value, json};

async fn create_session(client: &reqwest::Client, server: &GatewayTestServer) -> String {
    let response = client
        .post(server.url("/api/sessions"))
        .send()
        .await
        .expect("session creation should complete");
    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = response.json().await.unwrap();
    body["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn assistant_fills_and_submits_profile() {
    let server = GatewayTestServer::start("http://127.0.0.1:9").await;
    let client = reqwest::Client::new();
    let id = create_session(&client, &server).await;

    let fill: Value = client
        .post(server.url(&format!("/api/sessions/{id}/actions")))
        .json(&json!({
            "id": "call-1",
            "name": "autoFillProfile",
            "arguments": {
                "fullName": "Rosa Diaz",
                "email": "rosa@example.com",
                "trade": "electrical",
                "yearsExperience": "6 years",
                "skills": "Panel upgrades"
            }
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(
        fill["result"],
        "Profile updated with 5 fields. User can click \"Apply to Form\" or \"Apply & Review\" in the preview card."
    );
    assert_eq!(fill["replayed"], false);

    let missing: Value = client
        .post(server.url(&format!("/api/sessions/{id}/actions")))
        .json(&json!({"name": "checkMissingFields", "arguments": {}}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(missing["result"], "Missing 1 required fields: Career Goals");

    let refused = client
        .post(server.url(&format!("/api/sessions/{id}/wizard/submit")))
        .send()
        .await
        .unwrap();
    assert_eq!(refused.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let patched = client
        .patch(server.url(&format!("/api/sessions/{id}/wizard/fields")))
        .json(&json!({"careerGoals": "Become a master electrician"}))
        .send()
        .await
        .unwrap();
    assert_eq!(patched.status(), StatusCode::OK);
    let patched: Value = patched.json().await.unwrap();
    assert_eq!(patched["updated"], 1);
    assert_eq!(patched["state"]["formData"]["fullName"], "Rosa Diaz");

    let readable: Value = client
        .get(server.url(&format!("/api/sessions/{id}/readable?surface=wizard")))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(readable["readables"][0]["value"]["missingFields"], json!([]));

    let receipt = client
        .post(server.url(&format!("/api/sessions/{id}/wizard/submit")))
        .send()
        .await
        .unwrap();
    assert_eq!(receipt.status(), StatusCode::OK);
    let receipt: Value = receipt.json().await.unwrap();
    assert_eq!(receipt["filledFields"], 6);
    assert_eq!(receipt["profile"]["careerGoals"], "Become a master electrician");

    let wizard: Value = client
        .get(server.url(&format!("/api/sessions/{id}/wizard")))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(wizard["state"]["formData"]["fullName"], "");
    assert_eq!(wizard["state"]["currentStep"], 1);
}

#[tokio::test]
async fn replayed_invocation_is_not_reapplied() {
    let server = GatewayTestServer::start("http://127.0.0.1:9").await;
    let client = reqwest::Client::new();
    let id = create_session(&client, &server).await;
    let url = server.url(&format!("/api/sessions/{id}/actions"));
    let body = json!({"id": "inc-1", "name": "incrementCounter", "arguments": {"amount": "4"}});

    let first: Value = client.post(&url).json(&body).send().await.unwrap().json().await.unwrap();
    let second: Value = client.post(&url).json(&body).send().await.unwrap().json().await.unwrap();

    assert_eq!(first["result"], "Counter incremented by 4. New value: 4");
    assert_eq!(second["result"], first["result"]);
    assert_eq!(second["replayed"], true);

    let readable: Value = client
        .get(server.url(&format!("/api/sessions/{id}/readable?surface=playground")))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(readable["readables"][0]["value"]["counter"], 4.0);
}

#[tokio::test]
async fn step_route_clamps_and_reports_title() {
    let server = GatewayTestServer::start("http://127.0.0.1:9").await;
    let client = reqwest::Client::new();
    let id = create_session(&client, &server).await;
    let url = server.url(&format!("/api/sessions/{id}/wizard/step"));

    let jumped: Value = client
        .post(&url)
        .json(&json!({"step": -5}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(jumped["step"]["number"], 1);

    let back: Value = client
        .post(&url)
        .json(&json!({"direction": "prev"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(back["moved"], false);

    let next: Value = client
        .post(&url)
        .json(&json!({"direction": "next"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(next["step"]["title"], "Skills & Experience");
}

#[tokio::test]
async fn onboarding_actions_validate_ids_over_http() {
    let server = GatewayTestServer::start("http://127.0.0.1:9").await;
    let client = reqwest::Client::new();
    let id = create_session(&client, &server).await;
    let url = server.url(&format!("/api/sessions/{id}/actions"));

    let invalid: Value = client
        .post(&url)
        .json(&json!({"name": "setTrade", "arguments": {"tradeId": "juggling"}}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(invalid["result"], "Invalid trade ID");

    let rendered: Value = client
        .post(server.url(&format!("/api/sessions/{id}/actions/render")))
        .json(&json!({"name": "setTrade", "arguments": {"tradeId": "welding"}, "status": "complete"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(rendered, json!({"kind": "card", "title": "Trade: Welding", "lines": []}));
}

#[tokio::test]
async fn unknown_session_is_not_found() {
    let server = GatewayTestServer::start("http://127.0.0.1:9").await;
    let response = reqwest::Client::new()
        .get(server.url("/api/sessions/00000000-0000-0000-0000-000000000000/wizard"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("session not found"));
}

#[tokio::test]
async fn actions_endpoint_lists_declarations() {
    let server = GatewayTestServer::start("http://127.0.0.1:9").await;
    let body: Value = reqwest::Client::new()
        .get(server.url("/api/actions?surface=wizard"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let names: Vec<&str> = body["actions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|action| action["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        ["autoFillProfile", "enhanceField", "goToStep", "checkMissingFields"]
    );
}
