#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use hrdesk::api::{AttendanceApi, TenantApi};
use hrdesk::device::location::{Coordinates, LocationProvider, Permission};
use hrdesk::device::shell::ShellReloader;
use hrdesk::errors::{AppError, AppResult};
use hrdesk::models::attendance::{AttendanceRecord, PunchRequest, TimeLog};
use hrdesk::models::tenant::{Tenant, TenantBranding};
use hrdesk::models::user::{SelectTenantResponse, User};
use hrdesk::session::SessionContext;
use hrdesk::session::store::MemoryStore;
use std::env;
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tiny_http::{Header, Response, Server, StatusCode};

pub fn hrd() -> Command {
    cargo_bin_cmd!("hrdesk")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_hrdesk.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Temporary directory for downloads, emptied first
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_hrdesk_out", name));
    fs::remove_dir_all(&path).ok();
    path
}

pub fn test_user(tenant: Option<i64>) -> User {
    User {
        id: 42,
        name: "Ada Lovelace".into(),
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        email: "ada@example.com".into(),
        role: "Employee".into(),
        current_tenant_id: tenant,
        ..User::default()
    }
}

/// In-memory session already signed in as `test_user`.
pub fn signed_in_session(tenant: Option<i64>) -> SessionContext {
    let session = SessionContext::new(Arc::new(MemoryStore::new()));
    session
        .store_login("tok-initial", &test_user(tenant))
        .expect("store login");
    session
}

pub fn record(date: &str, logs: &[(&str, Option<&str>)]) -> AttendanceRecord {
    AttendanceRecord {
        date: date.to_string(),
        time_logs: logs
            .iter()
            .map(|(start, end)| TimeLog {
                start_time: start.to_string(),
                end_time: end.map(str::to_string),
                ..TimeLog::default()
            })
            .collect(),
        ..AttendanceRecord::default()
    }
}

// ---------------------------
// Attendance API fake
// ---------------------------

pub struct FakeAttendance {
    pub today: Mutex<AttendanceRecord>,
    /// Record served after a successful punch.
    pub after_punch: Option<AttendanceRecord>,
    pub punch_error: Option<fn() -> AppError>,
    pub message: String,
    pub calls: Mutex<Vec<String>>,
    pub requests: Mutex<Vec<PunchRequest>>,
}

impl FakeAttendance {
    pub fn with_record(rec: AttendanceRecord) -> Self {
        Self {
            today: Mutex::new(rec),
            after_punch: None,
            punch_error: None,
            message: "Timer updated".into(),
            calls: Mutex::new(Vec::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn punches(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|c| c.starts_with("check"))
            .collect()
    }

    fn punch(&self, name: &str, req: &PunchRequest) -> AppResult<String> {
        self.calls.lock().unwrap().push(name.to_string());
        self.requests.lock().unwrap().push(req.clone());
        if let Some(err) = self.punch_error {
            return Err(err());
        }
        if let Some(next) = &self.after_punch {
            *self.today.lock().unwrap() = next.clone();
        }
        Ok(self.message.clone())
    }
}

impl AttendanceApi for FakeAttendance {
    fn day_attendance(
        &self,
        _employee_id: i64,
        _date: chrono::NaiveDate,
    ) -> AppResult<AttendanceRecord> {
        self.calls.lock().unwrap().push("day".into());
        Ok(self.today.lock().unwrap().clone())
    }

    fn check_in(&self, req: &PunchRequest) -> AppResult<String> {
        self.punch("check_in", req)
    }

    fn check_out(&self, req: &PunchRequest) -> AppResult<String> {
        self.punch("check_out", req)
    }
}

// ---------------------------
// Location fake
// ---------------------------

pub struct FakeLocation {
    pub available: bool,
    pub permission: Permission,
    pub coords: Option<Coordinates>,
    pub delay: Duration,
    pub timeout: Duration,
    pub asked: AtomicUsize,
}

impl FakeLocation {
    pub fn desktop() -> Self {
        Self {
            available: false,
            permission: Permission::Granted,
            coords: None,
            delay: Duration::ZERO,
            timeout: Duration::from_secs(1),
            asked: AtomicUsize::new(0),
        }
    }

    pub fn mobile(lat: f64, lon: f64) -> Self {
        Self {
            available: true,
            coords: Some(Coordinates {
                latitude: lat,
                longitude: lon,
            }),
            ..Self::desktop()
        }
    }
}

impl LocationProvider for FakeLocation {
    fn is_available(&self) -> bool {
        self.available
    }

    fn request_permission(&self) -> AppResult<Permission> {
        self.asked.fetch_add(1, Ordering::SeqCst);
        Ok(self.permission)
    }

    fn current_position(&self) -> AppResult<Coordinates> {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        self.coords
            .ok_or_else(|| AppError::LocationUnavailable("no fix".into()))
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }
}

// ---------------------------
// Tenant API fake
// ---------------------------

pub struct FakeTenants {
    pub tenants: Vec<Tenant>,
    pub select: Mutex<Option<SelectTenantResponse>>,
    pub branding: Option<TenantBranding>,
    /// Called inside `select_tenant`, before it returns.
    pub during_select: Option<Box<dyn Fn() + Send + Sync>>,
    pub calls: Mutex<Vec<String>>,
}

impl FakeTenants {
    pub fn new(tenants: Vec<Tenant>) -> Self {
        Self {
            tenants,
            select: Mutex::new(None),
            branding: None,
            during_select: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl TenantApi for FakeTenants {
    fn list_tenants(&self) -> AppResult<Vec<Tenant>> {
        self.calls.lock().unwrap().push("list".into());
        Ok(self.tenants.clone())
    }

    fn select_tenant(&self, tenant_id: i64) -> AppResult<SelectTenantResponse> {
        self.calls.lock().unwrap().push(format!("select:{tenant_id}"));
        if let Some(f) = &self.during_select {
            f();
        }
        self.select
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| AppError::Network("no response".into()))
    }

    fn tenant_details(&self) -> AppResult<TenantBranding> {
        self.calls.lock().unwrap().push("details".into());
        self.branding
            .clone()
            .ok_or_else(|| AppError::Network("branding unavailable".into()))
    }
}

pub fn tenant(id: i64, name: &str, active: bool) -> Tenant {
    Tenant {
        id,
        name: name.to_string(),
        is_active: active,
    }
}

#[derive(Default)]
pub struct CountingShell {
    pub reloads: AtomicUsize,
}

impl ShellReloader for CountingShell {
    fn reload(&self, session: &SessionContext) -> AppResult<()> {
        session.bump_generation();
        self.reloads.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

// ---------------------------
// Scripted HTTP server
// ---------------------------

/// A request as seen by the test server.
#[derive(Debug, Clone)]
pub struct Captured {
    pub method: String,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl Captured {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("json body")
    }
}

/// Answer requests with `responses` in order, then stop.
/// Returns the base URL and a handle yielding the captured requests.
pub fn serve(responses: Vec<(u16, Vec<u8>)>) -> (String, JoinHandle<Vec<Captured>>) {
    let server = Server::http("127.0.0.1:0").expect("http server");
    let base = format!("http://{}/api", server.server_addr());

    let handle = thread::spawn(move || {
        let mut seen = Vec::new();
        for (status, body) in responses {
            let mut req = match server.recv_timeout(Duration::from_secs(5)) {
                Ok(Some(req)) => req,
                Ok(None) | Err(_) => break,
            };

            let mut req_body = String::new();
            req.as_reader().read_to_string(&mut req_body).ok();
            seen.push(Captured {
                method: req.method().to_string(),
                url: req.url().to_string(),
                headers: req
                    .headers()
                    .iter()
                    .map(|h| (h.field.to_string(), h.value.to_string()))
                    .collect(),
                body: req_body,
            });

            let response = Response::from_data(body)
                .with_status_code(StatusCode(status))
                .with_header(
                    Header::from_bytes("Content-Type", "application/json").expect("header"),
                );
            let _ = req.respond(response);
        }
        seen
    });

    (base, handle)
}

/// Single JSON response.
pub fn serve_once(status: u16, body: &str) -> (String, JoinHandle<Vec<Captured>>) {
    serve(vec![(status, body.as_bytes().to_vec())])
}

/// The only request a `serve_once` server received.
pub fn only_request(handle: JoinHandle<Vec<Captured>>) -> Captured {
    let mut seen = handle.join().expect("server thread");
    assert_eq!(seen.len(), 1, "expected exactly one request, got {seen:?}");
    seen.remove(0)
}
