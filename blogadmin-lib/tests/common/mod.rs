//! Shared test helpers: a local HTTP backend and in-process service fakes.

#![allow(dead_code)]

use std::collections::HashMap;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use blogadmin_lib::Envelope;
use blogadmin_lib::api::DataService;
use blogadmin_lib::controller::ConfirmDialog;
use blogadmin_lib::controller::Confirmer;
use blogadmin_lib::controller::MemoryNavigator;
use blogadmin_lib::controller::Notifier;
use blogadmin_lib::controller::PageServices;
use blogadmin_lib::model::Record;
use blogadmin_lib::model::Resource;
use http_body_util::BodyExt;
use http_body_util::Full;
use hyper::Request;
use hyper::Response;
use hyper::body::Bytes;
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use serde_json::Value as JsonValue;
use tokio::net::TcpListener;

// =============================================================================
// Mock backend
// =============================================================================

/// A request the mock backend received.
#[derive(Debug, Clone)]
pub struct SeenRequest {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

#[derive(Clone)]
struct Reply {
    status: u16,
    body: String,
}

/// A local HTTP server answering canned responses per `METHOD /path`.
///
/// Unknown routes answer `404` with an empty body.
pub struct MockBackend {
    routes: HashMap<String, Reply>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
        }
    }

    /// Answers `method path` with a `200` and the given JSON.
    pub fn json(self, method: &str, path: &str, body: JsonValue) -> Self {
        self.reply(method, path, 200, body.to_string())
    }

    /// Answers `method path` with any status and raw body.
    pub fn reply(mut self, method: &str, path: &str, status: u16, body: impl Into<String>) -> Self {
        self.routes.insert(
            format!("{} {}", method, path),
            Reply {
                status,
                body: body.into(),
            },
        );
        self
    }

    /// Starts serving on an ephemeral port.
    pub async fn start(self) -> RunningBackend {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let routes = Arc::new(self.routes);

        let log = seen.clone();
        tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    break;
                };
                let routes = routes.clone();
                let log = log.clone();
                tokio::spawn(async move {
                    let service = service_fn(move |req: Request<Incoming>| {
                        let routes = routes.clone();
                        let log = log.clone();
                        async move {
                            let method = req.method().to_string();
                            let path = req.uri().path().to_string();
                            let header = |name: &str| {
                                req.headers()
                                    .get(name)
                                    .and_then(|v| v.to_str().ok())
                                    .map(str::to_string)
                            };
                            let authorization = header("authorization");
                            let content_type = header("content-type");
                            let bytes = req.into_body().collect().await.unwrap().to_bytes();

                            log.lock().unwrap().push(SeenRequest {
                                method: method.clone(),
                                path: path.clone(),
                                authorization,
                                content_type,
                                body: String::from_utf8_lossy(&bytes).into_owned(),
                            });

                            let reply = routes.get(&format!("{} {}", method, path)).cloned().unwrap_or(Reply {
                                status: 404,
                                body: String::new(),
                            });

                            Ok::<_, Infallible>(
                                Response::builder()
                                    .status(reply.status)
                                    .header("Content-Type", "application/json")
                                    .body(Full::new(Bytes::from(reply.body)))
                                    .unwrap(),
                            )
                        }
                    });
                    let _ = http1::Builder::new()
                        .serve_connection(TokioIo::new(stream), service)
                        .await;
                });
            }
        });

        RunningBackend { addr, seen }
    }
}

pub struct RunningBackend {
    addr: SocketAddr,
    seen: Arc<Mutex<Vec<SeenRequest>>>,
}

impl RunningBackend {
    /// Base URL of the API, ending in `/api`.
    pub fn url(&self) -> String {
        format!("http://{}/api", self.addr)
    }

    pub fn requests(&self) -> Vec<SeenRequest> {
        self.seen.lock().unwrap().clone()
    }
}

/// A base URL nothing listens on.
pub async fn dead_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/api", addr)
}

// =============================================================================
// Service fakes
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Note {
    Success(String),
    Error(String),
}

/// Records every notification.
#[derive(Default)]
pub struct RecordingNotifier {
    notes: Mutex<Vec<Note>>,
}

impl RecordingNotifier {
    pub fn notes(&self) -> Vec<Note> {
        self.notes.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.notes.lock().unwrap().push(Note::Success(message.to_string()));
    }

    fn error(&self, message: &str) {
        self.notes.lock().unwrap().push(Note::Error(message.to_string()));
    }
}

/// Answers every confirmation with a fixed choice.
pub struct FixedConfirmer {
    answer: bool,
    asked: Mutex<Vec<ConfirmDialog>>,
}

impl FixedConfirmer {
    pub fn new(answer: bool) -> Self {
        Self {
            answer,
            asked: Mutex::new(Vec::new()),
        }
    }

    pub fn asked(&self) -> Vec<ConfirmDialog> {
        self.asked.lock().unwrap().clone()
    }
}

#[async_trait]
impl Confirmer for FixedConfirmer {
    async fn confirm(&self, dialog: &ConfirmDialog) -> bool {
        self.asked.lock().unwrap().push(dialog.clone());
        self.answer
    }
}

/// A data service answering canned envelopes.
pub struct FakeDataService {
    pub list_reply: Envelope<Vec<Record>>,
    pub delete_reply: Envelope<JsonValue>,
    deleted: Mutex<Vec<(Resource, String)>>,
}

impl FakeDataService {
    pub fn new(list_reply: Envelope<Vec<Record>>) -> Self {
        Self {
            list_reply,
            delete_reply: Envelope::success("", JsonValue::Null),
            deleted: Mutex::new(Vec::new()),
        }
    }

    pub fn delete_reply(mut self, reply: Envelope<JsonValue>) -> Self {
        self.delete_reply = reply;
        self
    }

    pub fn deleted(&self) -> Vec<(Resource, String)> {
        self.deleted.lock().unwrap().clone()
    }
}

#[async_trait]
impl DataService for FakeDataService {
    async fn list(&self, _resource: Resource) -> Envelope<Vec<Record>> {
        self.list_reply.clone()
    }

    async fn create(&self, _resource: Resource, _record: &Record) -> Envelope<JsonValue> {
        Envelope::failure("not supported")
    }

    async fn update(&self, _resource: Resource, _record: &Record) -> Envelope<JsonValue> {
        Envelope::failure("not supported")
    }

    async fn delete(&self, resource: Resource, id: &str) -> Envelope<JsonValue> {
        self.deleted.lock().unwrap().push((resource, id.to_string()));
        self.delete_reply.clone()
    }
}

/// Fakes wired together, with handles kept for assertions.
pub struct Harness {
    pub data: Arc<FakeDataService>,
    pub notifier: Arc<RecordingNotifier>,
    pub confirmer: Arc<FixedConfirmer>,
    pub navigator: Arc<MemoryNavigator>,
}

impl Harness {
    pub fn new(data: FakeDataService, confirm: bool) -> Self {
        Self {
            data: Arc::new(data),
            notifier: Arc::new(RecordingNotifier::default()),
            confirmer: Arc::new(FixedConfirmer::new(confirm)),
            navigator: Arc::new(MemoryNavigator::new("/admin")),
        }
    }

    pub fn services(&self) -> PageServices {
        PageServices {
            data: self.data.clone(),
            notifier: self.notifier.clone(),
            confirmer: self.confirmer.clone(),
            navigator: self.navigator.clone(),
        }
    }
}

pub fn article(id: &str, title: &str) -> Record {
    Record::new()
        .set("id", id)
        .set("title", title)
        .set("slug", title.to_lowercase().replace(' ', "-"))
        .set("viewsCount", 0)
}
