#![allow(dead_code)]

use async_trait::async_trait;
use gradebook::api::{ApiError, Method, SchoolApi, Transport};
use gradebook::controller::{AppController, Section};
use serde_json::{json, Value};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

type Response = Result<Option<Value>, ApiError>;

/// One request seen by [`FakeTransport`]
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub method: Method,
    pub endpoint: String,
    pub body: Option<Value>,
}

/// Scripted transport: responses are queued per (method, endpoint) and the
/// last one keeps answering once the queue runs dry. Unscripted requests
/// fail with a 404.
#[derive(Default)]
pub struct FakeTransport {
    responses: Mutex<HashMap<(Method, String), VecDeque<Response>>>,
    requests: Mutex<Vec<Request>>,
}

impl FakeTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, method: Method, endpoint: &str, response: Response) {
        self.responses
            .lock()
            .unwrap()
            .entry((method, endpoint.to_string()))
            .or_default()
            .push_back(response);
    }

    pub fn ok(&self, method: Method, endpoint: &str, body: Value) {
        self.respond(method, endpoint, Ok(Some(body)));
    }

    pub fn no_content(&self, method: Method, endpoint: &str) {
        self.respond(method, endpoint, Ok(None));
    }

    pub fn status(&self, method: Method, endpoint: &str, status: u16) {
        self.respond(method, endpoint, Err(ApiError::Status(status)));
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }

    /// Drain the recorded requests
    pub fn take_requests(&self) -> Vec<Request> {
        std::mem::take(&mut *self.requests.lock().unwrap())
    }

    /// Recorded requests as "METHOD endpoint" strings
    pub fn calls(&self) -> Vec<String> {
        self.requests()
            .iter()
            .map(|request| format!("{} {}", request.method, request.endpoint))
            .collect()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn send(&self, method: Method, endpoint: &str, body: Option<Value>) -> Response {
        self.requests.lock().unwrap().push(Request {
            method,
            endpoint: endpoint.to_string(),
            body,
        });

        let mut responses = self.responses.lock().unwrap();
        match responses.get_mut(&(method, endpoint.to_string())) {
            Some(queue) if queue.len() > 1 => queue.pop_front().unwrap(),
            Some(queue) => queue.front().cloned().unwrap(),
            None => Err(ApiError::Status(404)),
        }
    }
}

pub fn controller(transport: &Arc<FakeTransport>, section: Section) -> AppController {
    AppController::new(SchoolApi::new(transport.clone()), section, "%Y-%m-%d")
}

pub fn student_json(id: i64, student_id: &str, first_name: &str, last_name: &str) -> Value {
    json!({
        "id": id,
        "student_id": student_id,
        "first_name": first_name,
        "last_name": last_name,
        "full_name": format!("{} {}", first_name, last_name),
        "email": format!("{}@school.edu", first_name.to_lowercase()),
        "phone": "",
        "date_of_birth": "2004-05-17",
        "address": "",
        "enrollment_date": "2024-09-01",
        "is_active": true
    })
}

pub fn student_detail_json(id: i64, enrollments: Vec<Value>) -> Value {
    let mut student = student_json(id, "S001", "Ana", "Lopez");
    student["enrollments"] = Value::Array(enrollments);
    student
}

pub fn subject_json(id: i64, code: &str, name: &str, is_active: bool) -> Value {
    json!({
        "id": id,
        "code": code,
        "name": name,
        "credits": 3,
        "description": "",
        "is_active": is_active
    })
}

pub fn enrollment_json(id: i64, student: i64, subject: i64, code: &str) -> Value {
    json!({
        "id": id,
        "student": student,
        "subject": subject,
        "student_name": "Ana Lopez",
        "subject_code": code,
        "subject_name": format!("{} course", code),
        "enrollment_date": "2024-09-02",
        "is_active": true,
        "grades": []
    })
}

pub fn grade_json(id: i64, enrollment: i64, grade_type: &str, percentage: f64) -> Value {
    json!({
        "id": id,
        "enrollment": enrollment,
        "grade_type": grade_type,
        "title": format!("{} {}", grade_type, id),
        "score": format!("{:.2}", percentage),
        "max_score": "100.00",
        "percentage": percentage,
        "letter_grade": "B",
        "date_recorded": "2024-10-01T12:00:00Z",
        "notes": ""
    })
}
