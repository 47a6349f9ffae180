// label-print/tests/common/mod.rs
// In-memory host and transport fakes

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use label_client::{ClientError, ClientResult, PrintTransport};
use label_print::{LineAccessor, Notifier, PrintRequestOrchestrator, QuantityPrompt, Severity};
use shared::{LotSerial, MovementLine, PrintPayload, PrintResponse, Product};

/// Line accessor returning whatever line is currently selected
#[derive(Default)]
pub struct FakeLines {
    current: Mutex<Option<MovementLine>>,
}

impl FakeLines {
    pub fn select(&self, line: MovementLine) {
        *self.current.lock().unwrap() = Some(line);
    }

    pub fn clear(&self) {
        *self.current.lock().unwrap() = None;
    }
}

impl LineAccessor for FakeLines {
    fn current_line(&self) -> Option<MovementLine> {
        self.current.lock().unwrap().clone()
    }
}

/// Prompt answering from a scripted queue; `None` entries mean "cancelled"
#[derive(Default)]
pub struct FakePrompt {
    answers: Mutex<VecDeque<Option<String>>>,
    pub asked: Mutex<Vec<(String, String)>>,
}

impl FakePrompt {
    pub fn answer(&self, answer: Option<&str>) {
        self.answers
            .lock()
            .unwrap()
            .push_back(answer.map(str::to_string));
    }
}

impl QuantityPrompt for FakePrompt {
    fn ask(&self, title: &str, default: &str) -> Option<String> {
        self.asked
            .lock()
            .unwrap()
            .push((title.to_string(), default.to_string()));
        self.answers.lock().unwrap().pop_front().flatten()
    }
}

/// Notifier recording every notification and rerender request
#[derive(Default)]
pub struct FakeNotifier {
    pub notifications: Mutex<Vec<(String, Severity)>>,
    pub rerenders: Mutex<usize>,
}

impl FakeNotifier {
    pub fn all(&self) -> Vec<(String, Severity)> {
        self.notifications.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<(String, Severity)> {
        self.notifications.lock().unwrap().last().cloned()
    }

    pub fn rerender_count(&self) -> usize {
        *self.rerenders.lock().unwrap()
    }
}

impl Notifier for FakeNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        self.notifications
            .lock()
            .unwrap()
            .push((message.to_string(), severity));
    }

    fn request_rerender(&self) {
        *self.rerenders.lock().unwrap() += 1;
    }
}

/// Scripted backend reply
pub enum Reply {
    Response(PrintResponse),
    Timeout(&'static str),
}

/// Transport recording sent payloads and answering with a fixed reply
pub struct FakeTransport {
    reply: Reply,
    pub sent: Mutex<Vec<PrintPayload>>,
}

impl FakeTransport {
    pub fn new(reply: Reply) -> Self {
        Self {
            reply,
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn accepting() -> Self {
        Self::new(Reply::Response(PrintResponse::accepted()))
    }

    pub fn sent(&self) -> Vec<PrintPayload> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl PrintTransport for FakeTransport {
    async fn print(&self, payload: &PrintPayload) -> ClientResult<PrintResponse> {
        self.sent.lock().unwrap().push(payload.clone());
        match &self.reply {
            Reply::Response(response) => Ok(response.clone()),
            Reply::Timeout(message) => Err(ClientError::Timeout(message.to_string())),
        }
    }
}

pub struct Harness {
    pub lines: Arc<FakeLines>,
    pub prompt: Arc<FakePrompt>,
    pub notifier: Arc<FakeNotifier>,
    pub transport: Arc<FakeTransport>,
    pub orchestrator: PrintRequestOrchestrator,
}

impl Harness {
    pub fn new(transport: FakeTransport) -> Self {
        let lines = Arc::new(FakeLines::default());
        let prompt = Arc::new(FakePrompt::default());
        let notifier = Arc::new(FakeNotifier::default());
        let transport = Arc::new(transport);
        let orchestrator = PrintRequestOrchestrator::new(
            lines.clone(),
            prompt.clone(),
            notifier.clone(),
            transport.clone(),
        );
        Self {
            lines,
            prompt,
            notifier,
            transport,
            orchestrator,
        }
    }
}

pub fn product(tracking: &str) -> Product {
    Product {
        id: Some(7),
        display_name: Some("[YOG-01] Greek Yogurt".into()),
        name: Some("Greek Yogurt".into()),
        barcode: Some("7790001000011".into()),
        default_code: Some("YOG-01".into()),
        lst_price: Some(2.75),
        list_price: None,
        tracking: Some(tracking.into()),
    }
}

pub fn lot(name: &str) -> LotSerial {
    LotSerial {
        name: Some(name.into()),
        ..Default::default()
    }
}
