#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use chrono::NaiveDate;
use serde_json::{json, Value};

use rollcall::config::Config;
use rollcall::models::{AttendanceEntry, AttendanceSheet};
use rollcall::queue::QUEUE_KEY;
use rollcall::session::Session;
use rollcall::state::Client;
use rollcall::storage::{KvStore, MemoryStore};

pub const TEST_PIN: &str = "4321";
pub const TEST_TOKEN: &str = "tok-test-1";

/// Scripted behavior and call accounting for the stub backend.
#[derive(Default)]
pub struct StubState {
    /// Every action that reached the backend, in arrival order.
    pub calls: Vec<String>,
    /// Attendance for these group codes is answered with `ok: false`.
    pub reject_groups: Vec<String>,
    /// Delay before answering an attendance write, for overlap tests.
    pub attendance_delay_ms: u64,
    /// Attendance request bodies the stub accepted.
    pub accepted_sheets: Vec<Value>,
    enrollments: Vec<(String, String)>,
}

pub type SharedStub = Arc<Mutex<StubState>>;

/// A running stub backend plus a client wired to it over an in-memory store.
pub struct TestApp {
    pub addr: SocketAddr,
    pub stub: SharedStub,
    pub client: Client,
    pub store: Arc<MemoryStore>,
}

impl TestApp {
    pub async fn login(&self) -> Session {
        self.client.api.login(TEST_PIN).await.expect("login failed")
    }

    /// How many times `action` reached the stub backend.
    pub fn calls(&self, action: &str) -> usize {
        self.stub
            .lock()
            .unwrap()
            .calls
            .iter()
            .filter(|a| a.as_str() == action)
            .count()
    }

    pub fn reject_group(&self, code: &str) {
        self.stub.lock().unwrap().reject_groups.push(code.to_string());
    }

    pub fn set_attendance_delay(&self, ms: u64) {
        self.stub.lock().unwrap().attendance_delay_ms = ms;
    }

    pub fn accepted_sheets(&self) -> Vec<Value> {
        self.stub.lock().unwrap().accepted_sheets.clone()
    }

    /// Raw persisted queue value, exactly as stored.
    pub fn raw_queue(&self) -> Option<String> {
        self.store.get(QUEUE_KEY).expect("queue read failed")
    }
}

/// Spawn the stub backend on an ephemeral port and build a client against it.
pub async fn spawn_app() -> TestApp {
    let stub: SharedStub = Arc::new(Mutex::new(StubState::default()));

    let app = Router::new()
        .route("/", get(handle_get).post(handle_post))
        .with_state(stub.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub backend");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Stub backend failed");
    });

    let store = Arc::new(MemoryStore::new());
    let client = rollcall::build_client_with_store(test_config(format!("http://{addr}/")), store.clone())
        .expect("Failed to build client");

    TestApp {
        addr,
        stub,
        client,
        store,
    }
}

/// Client wired to a port nothing listens on: every request dies in transport.
pub fn unreachable_client(store: Arc<MemoryStore>) -> Client {
    rollcall::build_client_with_store(test_config("http://127.0.0.1:9/".to_string()), store)
        .expect("Failed to build client")
}

pub fn test_config(base_url: String) -> Config {
    Config {
        base_url,
        data_dir: std::env::temp_dir(),
        pin: None,
        http_timeout_secs: 5,
        sync_interval_secs: 60,
        log_level: "warn".to_string(),
    }
}

/// A session the stub backend accepts, without going through login.
pub fn test_session() -> Session {
    Session {
        token: TEST_TOKEN.to_string(),
        role: "ADMIN".to_string(),
        name: "Test Admin".to_string(),
    }
}

/// Sheet with `count` enrollments, alternating presence, one note.
pub fn sheet(group_code: &str, count: usize) -> AttendanceSheet {
    AttendanceSheet {
        group_code: group_code.to_string(),
        class_date: NaiveDate::from_ymd_opt(2026, 3, 9).unwrap(),
        entries: (0..count)
            .map(|i| AttendanceEntry {
                enrollment_id: 1001 + i as i64,
                present: i % 2 == 0,
                note: if i == 0 {
                    Some("left early".to_string())
                } else {
                    None
                },
            })
            .collect(),
    }
}

// ── Stub backend ────────────────────────────────────────────────

async fn handle_get(
    State(stub): State<SharedStub>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    let action = params.get("action").cloned().unwrap_or_default();
    stub.lock().unwrap().calls.push(action.clone());

    if action != "login" && params.get("token").map(String::as_str) != Some(TEST_TOKEN) {
        return Json(json!({ "ok": false, "error": "Invalid token" }));
    }

    Json(match action.as_str() {
        "login" => match params.get("pin").map(String::as_str) {
            Some(TEST_PIN) => json!({
                "ok": true, "token": TEST_TOKEN, "role": "ADMIN", "name": "Test Admin"
            }),
            _ => json!({ "ok": false, "error": "Unknown PIN" }),
        },
        "listGroups" => json!({ "ok": true, "groups": [
            {
                "code": "MATH-101-A", "course_code": "MATH-101", "term": "2026S1",
                "start_date": "2026-02-02", "end_date": "2026-06-26",
                "capacity": 25, "site": "North", "status": "OPEN"
            },
            {
                "code": "SCI-202-B", "course_code": "SCI-202", "term": "2026S1",
                "start_date": "2026-02-02", "end_date": "2026-06-26",
                "capacity": 20, "site": "North", "status": "OPEN"
            }
        ]}),
        "getRoster" => json!({ "ok": true, "roster": [
            { "enrollment_id": 1001, "student_code": "S-001", "last_name": "Rivera",
              "first_name": "Ana", "status": "ACTIVE" },
            { "enrollment_id": 1002, "student_code": "S-002", "last_name": "Okafor",
              "first_name": "Chidi", "status": "ACTIVE" },
            { "enrollment_id": 1003, "student_code": "S-003", "last_name": "Szabo",
              "first_name": "Mara", "status": "INACTIVE" }
        ]}),
        "getSummary" => json!({
            "ok": true, "name": "Test Admin", "role": "ADMIN",
            "counts": { "students": 12, "groups": 2, "enrollments": 14, "payments": 9 }
        }),
        "debtReport" => json!({ "ok": true, "debts": [
            { "student": "Rivera, Ana", "group_code": "MATH-101-A", "course": "MATH-101",
              "list_price": 1200.0, "paid": 800.0, "balance": 400.0 }
        ]}),
        "paymentReport" => payment_report(&params),
        _ => json!({ "ok": false, "error": format!("Unknown action: {action}") }),
    })
}

fn payment_report(params: &HashMap<String, String>) -> Value {
    let from = params.get("from").and_then(|s| s.parse::<NaiveDate>().ok());
    let to = params.get("to").and_then(|s| s.parse::<NaiveDate>().ok());

    let rows = [
        json!({ "paid_on": "2026-03-02", "amount": 400.0, "method": "CASH", "status": "PAID",
                "student_code": "S-001", "student": "Rivera, Ana", "group_code": "MATH-101-A" }),
        json!({ "paid_on": "2026-04-15", "amount": 400.0, "method": "TRANSFER", "status": "PAID",
                "student_code": "S-002", "student": "Okafor, Chidi", "group_code": "MATH-101-A" }),
    ];

    let rows: Vec<Value> = rows
        .into_iter()
        .filter(|r| {
            let d: NaiveDate = r["paid_on"].as_str().unwrap().parse().unwrap();
            from.map_or(true, |f| d >= f) && to.map_or(true, |t| d <= t)
        })
        .collect();

    json!({ "ok": true, "payments": rows })
}

async fn handle_post(State(stub): State<SharedStub>, Json(body): Json<Value>) -> Json<Value> {
    let action = body["action"].as_str().unwrap_or_default().to_string();
    stub.lock().unwrap().calls.push(action.clone());

    if body["token"].as_str() != Some(TEST_TOKEN) {
        return Json(json!({ "ok": false, "error": "Invalid token" }));
    }

    match action.as_str() {
        "recordAttendance" => {
            let (delay_ms, rejected) = {
                let s = stub.lock().unwrap();
                let group = body["group_code"].as_str().unwrap_or_default();
                (
                    s.attendance_delay_ms,
                    s.reject_groups.iter().any(|g| g == group),
                )
            };
            if delay_ms > 0 {
                tokio::time::sleep(std::time::Duration::from_millis(delay_ms)).await;
            }
            if rejected {
                return Json(json!({ "ok": false, "error": "Group is closed for edits" }));
            }
            let inserted = body["entries"].as_array().map(|e| e.len()).unwrap_or(0);
            stub.lock().unwrap().accepted_sheets.push(body.clone());
            Json(json!({ "ok": true, "inserted": inserted }))
        }
        "createStudent" => Json(json!({ "ok": true, "student_id": 501 })),
        "createGroup" => Json(json!({ "ok": true, "group_id": 31 })),
        "enroll" => {
            let pair = (
                body["group_code"].as_str().unwrap_or_default().to_string(),
                body["student_code"].as_str().unwrap_or_default().to_string(),
            );
            let mut s = stub.lock().unwrap();
            if let Some(pos) = s.enrollments.iter().position(|p| *p == pair) {
                Json(json!({ "ok": true, "enrollment_id": 1000 + pos, "already_enrolled": true }))
            } else {
                s.enrollments.push(pair);
                let id = 999 + s.enrollments.len();
                Json(json!({ "ok": true, "enrollment_id": id }))
            }
        }
        "recordPayment" => Json(json!({ "ok": true, "payment_id": 9001 })),
        "createUser" => Json(json!({ "ok": true, "user_id": 7 })),
        _ => Json(json!({ "ok": false, "error": format!("Unknown action: {action}") })),
    }
}
