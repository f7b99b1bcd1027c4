//! Common test helpers for integration tests
//!
//! Provides fixture documents in their wire shapes and a small HTTP stub
//! server that serves them, so the fetch layer and the approval transport
//! can be exercised against real sockets.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use lnd_dashboard::{CertificationRecord, DashboardConfig, DashboardState};
use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

/// Canned response for one method + path
#[derive(Debug, Clone)]
pub struct Route {
    pub method: &'static str,
    pub path: String,
    pub status: u16,
    pub body: String,
    pub delay: Option<Duration>,
}

impl Route {
    pub fn get(path: &str, body: Value) -> Self {
        Self {
            method: "GET",
            path: path.to_string(),
            status: 200,
            body: body.to_string(),
            delay: None,
        }
    }

    pub fn post(path: &str, status: u16) -> Self {
        Self {
            method: "POST",
            path: path.to_string(),
            status,
            body: String::new(),
            delay: None,
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    pub fn with_raw_body(mut self, body: &str) -> Self {
        self.body = body.to_string();
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

/// HTTP/1.1 stub on an ephemeral localhost port
///
/// Unknown routes answer 404. Every request line ("METHOD /path") is
/// recorded in arrival order.
pub struct StubServer {
    base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
    handle: JoinHandle<()>,
}

impl StubServer {
    pub async fn start(routes: Vec<Route>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let routes = Arc::new(routes);
        let requests = Arc::new(Mutex::new(Vec::new()));

        let handle = {
            let requests = Arc::clone(&requests);
            tokio::spawn(async move {
                while let Ok((socket, _)) = listener.accept().await {
                    let routes = Arc::clone(&routes);
                    let requests = Arc::clone(&requests);
                    tokio::spawn(async move {
                        let _ = serve(socket, &routes, &requests).await;
                    });
                }
            })
        };

        Self {
            base_url: format!("http://{}/", addr),
            requests,
            handle,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn config(&self) -> DashboardConfig {
        DashboardConfig::new(&self.base_url).unwrap()
    }

    /// Recorded request lines, e.g. `POST /api/certifications/id-1/approve`
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn count(&self, method: &str, path: &str) -> usize {
        let line = format!("{} {}", method, path);
        self.requests().iter().filter(|r| **r == line).count()
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn serve(
    mut socket: TcpStream,
    routes: &[Route],
    requests: &Mutex<Vec<String>>,
) -> std::io::Result<()> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = socket.read(&mut chunk).await?;
        if n == 0 {
            return Ok(());
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    let head = String::from_utf8_lossy(&buf);
    let mut parts = head.lines().next().unwrap_or_default().split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let path = parts.next().unwrap_or_default().to_string();
    requests.lock().unwrap().push(format!("{} {}", method, path));

    let route = routes.iter().find(|r| r.method == method && r.path == path);
    let (status, body) = match route {
        Some(route) => {
            if let Some(delay) = route.delay {
                tokio::time::sleep(delay).await;
            }
            (route.status, route.body.clone())
        }
        None => (404, String::new()),
    };

    let response = format!(
        "HTTP/1.1 {} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    socket.write_all(response.as_bytes()).await?;
    socket.shutdown().await
}

/// Routes serving every fixture document at its default path
pub fn document_routes() -> Vec<Route> {
    vec![
        Route::get("/nominationcount.json", nomination_count_document()),
        Route::get("/certificatecost.json", cost_rows_document()),
        Route::get("/codtdata.json", cost_chart_document()),
        Route::get("/newbarchartdata.json", cost_trend_document()),
        Route::get("/ldcarddata.json", cards_document()),
        Route::get("/ldpendingaction.json", pending_actions_document()),
        Route::get("/LDNominationData.json", nominations_document()),
    ]
}

/// Dashboard state over a running stub with every document available
pub async fn loaded_state(extra: Vec<Route>) -> (StubServer, DashboardState) {
    let mut routes = document_routes();
    routes.extend(extra);
    let server = StubServer::start(routes).await;
    let state = DashboardState::new(&server.config());
    state.refresh_all().await;
    (server, state)
}

pub fn nomination_count_document() -> Value {
    json!({
        "certifications": [
            {
                "financial_year": "2023-24",
                "department": "Engineering",
                "provider_name": "AWS",
                "monthly_data": {"April": 4, "May": 2, "January": 1}
            },
            {
                "financial_year": "2023-24",
                "department": "Engineering",
                "provider_name": "Azure",
                "monthly_data": {"April": 3, "June": 5}
            },
            {
                "financial_year": "2023-24",
                "department": "Sales",
                "provider_name": "AWS",
                "monthly_data": {"May": 6}
            },
            {
                "financial_year": "2024-25",
                "department": "Engineering",
                "provider_name": "GCP",
                "monthly_data": {"July": 7, "March": 1}
            }
        ]
    })
}

fn cost(count: u64, estimated: f64, actual: f64) -> Value {
    json!({"Count": count, "EstimatedCost": estimated, "ActualCost": actual})
}

pub fn cost_rows_document() -> Value {
    json!([
        {
            "id": 1,
            "provider": "AWS",
            "FinancialYear": "2023-24",
            "January": cost(2, 400.0, 380.0),
            "April": cost(1, 200.0, 210.0)
        },
        {
            "id": 2,
            "provider": "Azure",
            "FinancialYear": "2023-24",
            "January": cost(1, 150.0, 150.0)
        },
        {
            "id": 3,
            "provider": "GCP",
            "FinancialYear": "2024-25",
            "March": cost(3, 900.0, 870.0)
        }
    ])
}

pub fn cost_chart_document() -> Value {
    json!({
        "months": ["April", "May", "June"],
        "providers": ["AWS", "Azure", "GCP"],
        "yearData": {
            "2023": {"AWS": [100.0, 50.0, 25.0], "Azure": [10.0, 20.0, 30.0]},
            "2024": {"AWS": [5.0, 5.0, 5.0], "GCP": [40.0]}
        }
    })
}

pub fn cost_trend_document() -> Value {
    json!({
        "costData": {
            "2023-24": {
                "labels": ["Apr", "May", "Jun"],
                "departments": {
                    "Engineering": {"AWS": [1.0, 2.0, 3.0], "Azure": [1.0, 1.0, 1.0]},
                    "Sales": {"AWS": [0.0, 4.0, 0.0]}
                }
            },
            "2024-25": {
                "labels": ["Apr", "May", "Jun"],
                "departments": {
                    "Engineering": {"GCP": [2.0, 2.0, 2.0]}
                }
            }
        }
    })
}

pub fn cards_document() -> Value {
    json!([
        {"title": "Total Nominations", "value": "128", "message": "This year", "icon": "users"},
        {"title": "Certified", "value": "74", "message": "Passed exams", "icon": "award"}
    ])
}

pub fn pending_actions_document() -> Value {
    json!([
        {
            "id": "pa-1",
            "username": "Priya Nair",
            "certification_name": "AWS Solutions Architect",
            "level": "Associate",
            "du": "DU1",
            "nomination_date": "2024-04-02",
            "approved_by_manager": true
        },
        {
            "id": "pa-2",
            "username": "Rahul Mehta",
            "certification_name": "Azure Administrator",
            "level": "Associate",
            "du": "DU2",
            "nomination_date": "2024-04-05"
        },
        {
            "id": "pa-3",
            "username": "Sana Iqbal",
            "certification_name": "GCP Data Engineer",
            "level": "Professional",
            "du": "DU1",
            "nomination_date": "2024-04-09"
        }
    ])
}

pub fn nominations_document() -> Value {
    json!([
        {
            "nominationId": 11,
            "employeeId": 501,
            "employeeName": "Priya Nair",
            "email": "priya@example.com",
            "department": "Engineering",
            "provider": "AWS",
            "certificationName": "AWS Solutions Architect",
            "criticality": "High",
            "financialYear": "2023-24",
            "examDate": "2024-05-10",
            "costOfCertification": 300.0
        },
        {
            "nominationId": 12,
            "employeeId": 502,
            "employeeName": "Rahul Mehta",
            "email": "rahul@example.com",
            "department": "Sales",
            "provider": "Azure",
            "certificationName": "Azure Administrator",
            "criticality": "Low",
            "financialYear": "2024-25",
            "examDate": "",
            "costOfCertification": 150.0
        }
    ])
}

/// Flattened records used by the aggregation property tests
pub fn sample_records() -> Vec<CertificationRecord> {
    vec![
        CertificationRecord::new("2023-24", "Engineering", "AWS", "April", 4),
        CertificationRecord::new("2023-24", "Engineering", "AWS", "May", 2),
        CertificationRecord::new("2023-24", "Engineering", "Azure", "April", 3),
        CertificationRecord::new("2023-24", "Sales", "AWS", "May", 6),
        CertificationRecord::new("2024-25", "Engineering", "GCP", "July", 7),
        CertificationRecord::new("2024-25", "Sales", "Azure", "Jan", 1),
    ]
}
