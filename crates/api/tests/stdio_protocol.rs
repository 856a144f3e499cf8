#![forbid(unsafe_code)]

mod support;

use serde_json::{Value, json};
use support::*;

#[test]
fn stdio_crud_round_trip() {
    let mut server = Server::start_in_memory();

    let franchise = server.create("/api/franchises", json!({ "name": "Acme" }));
    let branch = server.create(
        &format!("/api/franchises/{franchise}/branches"),
        json!({ "name": "Downtown" }),
    );
    let product = server.create(
        &format!("/api/branches/{branch}/products"),
        json!({ "name": "Widget", "stock": 10 }),
    );

    let (status, body) = server.call("GET", &format!("/api/franchises/{franchise}"), Value::Null);
    assert_eq!(status, 200);
    assert_eq!(
        body,
        json!({
            "id": franchise,
            "name": "Acme",
            "branches": [{
                "id": branch,
                "name": "Downtown",
                "products": [{ "id": product, "name": "Widget", "stock": 10 }],
            }],
        })
    );

    let (status, body) = server.call(
        "PUT",
        &format!("/api/branches/{branch}"),
        json!({ "name": "Uptown" }),
    );
    assert_eq!(status, 200);
    assert_eq!(body, json!({ "id": branch, "name": "Uptown" }));

    let (status, body) = server.call(
        "GET",
        &format!("/api/franchises/{franchise}/branches"),
        Value::Null,
    );
    assert_eq!(status, 200);
    assert_eq!(body, json!([{ "id": branch, "name": "Uptown" }]));
}

#[test]
fn stdio_soft_delete_scenario() {
    let mut server = Server::start_in_memory();

    let franchise = server.create("/api/franchises", json!({ "name": "F" }));
    let branches = format!("/api/franchises/{franchise}/branches");
    let b1 = server.create(&branches, json!({ "name": "B1" }));
    let b2 = server.create(&branches, json!({ "name": "B2" }));
    let p1 = server.create(
        &format!("/api/branches/{b1}/products"),
        json!({ "name": "P1", "stock": 4 }),
    );
    let p2 = server.create(
        &format!("/api/branches/{b2}/products"),
        json!({ "name": "P2", "stock": 8 }),
    );

    let (status, _) = server.call("DELETE", &format!("/api/branches/{b1}"), Value::Null);
    assert_eq!(status, 204);
    let (status, _) = server.call("GET", &format!("/api/products/{p1}"), Value::Null);
    assert_eq!(status, 404);

    let (status, body) = server.call(
        "GET",
        &format!("/api/franchises/{franchise}/top-stock-products"),
        Value::Null,
    );
    assert_eq!(status, 200);
    assert_eq!(body.as_array().map(Vec::len), Some(1));
    assert_eq!(body[0]["productId"], json!(p2));

    let (status, _) = server.call("DELETE", &format!("/api/franchises/{franchise}"), Value::Null);
    assert_eq!(status, 204);
    let (status, _) = server.call("GET", &format!("/api/products/{p2}"), Value::Null);
    assert_eq!(status, 404);
    let (status, body) = server.call("GET", "/api/franchises", Value::Null);
    assert_eq!(status, 200);
    assert_eq!(body, json!([]));
}

#[test]
fn stdio_bad_lines_keep_the_session_alive() {
    let mut server = Server::start_in_memory();

    server.send_raw("{oops");
    let resp = server.recv();
    assert_eq!(resp["status"], 400);
    assert_eq!(resp["id"], Value::Null);

    server.send_raw("");
    server.send_raw(r#"{"id":"abc","method":"GET","path":"/api/franchises"}"#);
    let resp = server.recv();
    assert_eq!(resp["id"], "abc");
    assert_eq!(resp["status"], 200);
    assert_eq!(resp["body"], json!([]));

    let (status, body) = server.call("POST", "/api/franchises", json!({ "name": "  " }));
    assert_eq!(status, 400);
    assert_eq!(body["errors"]["name"], "must not be blank");

    server.send_bytes(
        b"{\"id\":9,\"method\":\"POST\",\"path\":\"/api/franchises\",\"body\":{\"name\":\"\xff\"}}",
    );
    let resp = server.recv();
    assert_eq!(resp["status"], 400);
    assert_eq!(resp["id"], Value::Null);
    assert!(resp["body"]["errors"]["request"].is_string());

    let (status, body) = server.call("GET", "/api/franchises", Value::Null);
    assert_eq!(status, 200);
    assert_eq!(body, json!([]));
}

#[test]
fn stdio_storage_survives_restart() {
    let mut server = Server::start("restart");
    let franchise = server.create("/api/franchises", json!({ "name": "Durable" }));
    let branch = server.create(
        &format!("/api/franchises/{franchise}/branches"),
        json!({ "name": "Main" }),
    );
    let (status, _) = server.call("DELETE", &format!("/api/branches/{branch}"), Value::Null);
    assert_eq!(status, 204);
    let dir = server.shutdown();
    assert!(dir.join("franchise_catalog.db").exists());

    let mut server = Server::start_with_storage_dir(dir, true);
    let (status, body) = server.call("GET", &format!("/api/franchises/{franchise}"), Value::Null);
    assert_eq!(status, 200);
    assert_eq!(body["name"], "Durable");
    assert_eq!(body["branches"], json!([]));
    let (status, _) = server.call("GET", &format!("/api/branches/{branch}"), Value::Null);
    assert_eq!(status, 404);
}
