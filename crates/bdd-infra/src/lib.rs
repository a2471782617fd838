//! Shared BDD test infrastructure
//!
//! [`FakeRecordStore`] serves the two HTTP surfaces the rover front-ends
//! consume: a mockapi-style record collection (`GET`/`POST`) and an
//! ipify-style `{"ip": ...}` echo. Tests seed records and inject failures
//! through its setters.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::task::JoinHandle;

const RECORDS_PATH: &str = "/api/v1/dispositivos_IoT";
const IP_PATH: &str = "/ip";

#[derive(Debug)]
struct FakeState {
    records: Vec<Value>,
    read_failure: Option<u16>,
    write_failure: Option<u16>,
    read_delay: Duration,
    ip: Option<String>,
    reads: usize,
    writes: Vec<Value>,
}

impl Default for FakeState {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            read_failure: None,
            write_failure: None,
            read_delay: Duration::ZERO,
            ip: Some("203.0.113.7".to_string()),
            reads: 0,
            writes: Vec::new(),
        }
    }
}

type Shared = Arc<Mutex<FakeState>>;

fn lock(state: &Shared) -> std::sync::MutexGuard<'_, FakeState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// In-process record store listening on an ephemeral localhost port
#[derive(Debug)]
pub struct FakeRecordStore {
    addr: SocketAddr,
    state: Shared,
    server: JoinHandle<()>,
}

impl FakeRecordStore {
    /// Bind to `127.0.0.1:0` and start serving
    pub async fn start() -> std::io::Result<Self> {
        let state: Shared = Arc::default();
        let router = Router::new()
            .route(RECORDS_PATH, get(list_records).post(create_record))
            .route(IP_PATH, get(public_ip))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tracing::debug!("Fake record store listening on http://{}", addr);

        let server = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, router).await {
                tracing::error!("Fake record store stopped: {}", e);
            }
        });

        Ok(Self {
            addr,
            state,
            server,
        })
    }

    pub fn records_url(&self) -> String {
        format!("http://{}{}", self.addr, RECORDS_PATH)
    }

    pub fn ip_url(&self) -> String {
        format!("http://{}{}", self.addr, IP_PATH)
    }

    /// Add a record with an explicit id, keeping insertion order
    pub fn seed(&self, id: &str, status: &str) {
        lock(&self.state).records.push(json!({
            "id": id,
            "name": "Seeded Rover",
            "status": status,
            "ip": "192.0.2.1",
            "date": format!("seed {id}"),
        }));
    }

    /// Answer reads with this status instead of the records
    pub fn fail_reads(&self, status: Option<u16>) {
        lock(&self.state).read_failure = status;
    }

    /// Answer writes with this status instead of creating a record
    pub fn fail_writes(&self, status: Option<u16>) {
        lock(&self.state).write_failure = status;
    }

    pub fn delay_reads(&self, delay: Duration) {
        lock(&self.state).read_delay = delay;
    }

    /// `None` makes the IP endpoint answer 503
    pub fn set_ip(&self, ip: Option<&str>) {
        lock(&self.state).ip = ip.map(str::to_string);
    }

    pub fn read_count(&self) -> usize {
        lock(&self.state).reads
    }

    /// Bodies of every accepted write, oldest first
    pub fn writes(&self) -> Vec<Value> {
        lock(&self.state).writes.clone()
    }
}

impl Drop for FakeRecordStore {
    fn drop(&mut self) {
        self.server.abort();
    }
}

async fn list_records(State(state): State<Shared>) -> Response {
    let (delay, failure, records) = {
        let mut s = lock(&state);
        s.reads += 1;
        (s.read_delay, s.read_failure, s.records.clone())
    };
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
    match failure {
        Some(status) => failure_response(status),
        None => Json(records).into_response(),
    }
}

async fn create_record(State(state): State<Shared>, Json(mut body): Json<Value>) -> Response {
    let mut s = lock(&state);
    if let Some(status) = s.write_failure {
        return failure_response(status);
    }

    let next_id = s
        .records
        .iter()
        .filter_map(|r| r["id"].as_str().and_then(|id| id.parse::<u64>().ok()))
        .max()
        .unwrap_or(0)
        + 1;
    s.writes.push(body.clone());
    if let Some(object) = body.as_object_mut() {
        object.insert("id".to_string(), Value::String(next_id.to_string()));
    }
    s.records.push(body.clone());
    (StatusCode::CREATED, Json(body)).into_response()
}

async fn public_ip(State(state): State<Shared>) -> Response {
    match lock(&state).ip.clone() {
        Some(ip) => Json(json!({ "ip": ip })).into_response(),
        None => failure_response(503),
    }
}

fn failure_response(status: u16) -> Response {
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, "fake failure").into_response()
}
