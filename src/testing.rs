//! Test doubles shared by the unit tests.

use async_trait::async_trait;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::io;
use std::rc::Rc;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::oneshot;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::MakeWriter;

use crate::api::{HttpReply, Transport};
use crate::error::TransportError;
use crate::state::{
    ActivityCard, ActivityDetails, ActivitySnapshot, Alerter, FeedbackMessage, ListContent,
    MessageRegion, RosterRegion, SelectorOption,
};
use crate::timer::{ScheduledTask, Scheduler};

fn detail(status: u16, detail: &str) -> HttpReply {
    HttpReply::new(status, serde_json::json!({ "detail": detail }).to_string())
}

fn message(message: String) -> HttpReply {
    HttpReply::new(200, serde_json::json!({ "message": message }).to_string())
}

/// In-memory activities service answering the HTTP contract
pub struct FakeService {
    activities: RefCell<ActivitySnapshot>,
    fetches: Cell<usize>,
}

impl FakeService {
    pub fn new(activities: ActivitySnapshot) -> Self {
        Self {
            activities: RefCell::new(activities),
            fetches: Cell::new(0),
        }
    }

    /// A small slice of the school's activity catalogue
    pub fn mergington() -> Self {
        let activity = |description: &str, schedule: &str, max: u32, participants: &[&str]| {
            ActivityDetails {
                description: description.to_string(),
                schedule: schedule.to_string(),
                max_participants: max,
                participants: participants.iter().map(|p| p.to_string()).collect(),
            }
        };

        Self::new(
            [
                (
                    "Chess Club".to_string(),
                    activity(
                        "Learn strategies and compete in chess tournaments",
                        "Fridays, 3:30 PM - 5:00 PM",
                        12,
                        &["michael@mergington.edu", "daniel@mergington.edu"],
                    ),
                ),
                (
                    "Programming Class".to_string(),
                    activity(
                        "Learn programming fundamentals and build software projects",
                        "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                        20,
                        &["emma@mergington.edu", "sophia@mergington.edu"],
                    ),
                ),
                (
                    "Gym Class".to_string(),
                    activity(
                        "Physical education and sports activities",
                        "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                        30,
                        &[],
                    ),
                ),
            ]
            .into_iter()
            .collect(),
        )
    }

    /// Number of `GET /activities` requests served
    pub fn fetches(&self) -> usize {
        self.fetches.get()
    }

    pub fn participants(&self, activity: &str) -> Vec<String> {
        self.activities
            .borrow()
            .get(activity)
            .map(|details| details.participants.clone())
            .unwrap_or_default()
    }

    fn mutate(&self, activity: &str, action: &str, email: &str) -> HttpReply {
        let mut activities = self.activities.borrow_mut();
        let Some(details) = activities.get_mut(activity) else {
            return detail(404, "Activity not found");
        };

        match action {
            "signup" => {
                if details.participants.iter().any(|p| p == email) {
                    return detail(400, "Student is already signed up");
                }
                details.participants.push(email.to_string());
                message(format!("Signed up {email} for {activity}"))
            }
            "unregister" => {
                let Some(index) = details.participants.iter().position(|p| p == email) else {
                    return detail(400, "Student is not registered for this activity");
                };
                details.participants.remove(index);
                message(format!("Unregistered {email} from {activity}"))
            }
            _ => detail(404, "Not Found"),
        }
    }
}

#[async_trait(?Send)]
impl Transport for FakeService {
    async fn get(&self, url: &str) -> Result<HttpReply, TransportError> {
        if url != "/activities" {
            return Ok(detail(404, "Not Found"));
        }
        self.fetches.set(self.fetches.get() + 1);
        let body = serde_json::to_string(&*self.activities.borrow())
            .map_err(|e| TransportError::Body(e.to_string()))?;
        Ok(HttpReply::new(200, body))
    }

    async fn post(&self, url: &str) -> Result<HttpReply, TransportError> {
        let parsed = url
            .strip_prefix("/activities/")
            .and_then(|rest| rest.split_once("?email="))
            .and_then(|(path, email)| {
                let (activity, action) = path.rsplit_once('/')?;
                let activity = urlencoding::decode(activity).ok()?;
                let email = urlencoding::decode(email).ok()?;
                Some((activity.into_owned(), action.to_string(), email.into_owned()))
            });

        Ok(match parsed {
            Some((activity, action, email)) => self.mutate(&activity, &action, &email),
            None => detail(404, "Not Found"),
        })
    }
}

/// A scripted reply; `Deferred` resolves when the test sends on the channel
pub enum Scripted {
    Ready(Result<HttpReply, TransportError>),
    Deferred(oneshot::Receiver<HttpReply>),
}

/// Transport that replays queued replies and records every request
#[derive(Default)]
pub struct ScriptedTransport {
    gets: RefCell<VecDeque<Scripted>>,
    posts: RefCell<VecDeque<Scripted>>,
    requests: RefCell<Vec<String>>,
}

impl ScriptedTransport {
    pub fn push_get(&self, reply: Result<HttpReply, TransportError>) {
        self.gets.borrow_mut().push_back(Scripted::Ready(reply));
    }

    pub fn push_post(&self, reply: Result<HttpReply, TransportError>) {
        self.posts.borrow_mut().push_back(Scripted::Ready(reply));
    }

    /// Queue a GET whose reply arrives when the returned sender fires
    pub fn defer_get(&self) -> oneshot::Sender<HttpReply> {
        let (tx, rx) = oneshot::channel();
        self.gets.borrow_mut().push_back(Scripted::Deferred(rx));
        tx
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    pub fn gets(&self) -> usize {
        self.requests
            .borrow()
            .iter()
            .filter(|r| r.starts_with("GET "))
            .count()
    }

    async fn replay(next: Option<Scripted>) -> Result<HttpReply, TransportError> {
        match next {
            Some(Scripted::Ready(reply)) => reply,
            Some(Scripted::Deferred(rx)) => rx
                .await
                .map_err(|_| TransportError::Network("deferred reply dropped".to_string())),
            None => Err(TransportError::Network("no scripted reply".to_string())),
        }
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn get(&self, url: &str) -> Result<HttpReply, TransportError> {
        self.requests.borrow_mut().push(format!("GET {url}"));
        let next = self.gets.borrow_mut().pop_front();
        Self::replay(next).await
    }

    async fn post(&self, url: &str) -> Result<HttpReply, TransportError> {
        self.requests.borrow_mut().push(format!("POST {url}"));
        let next = self.posts.borrow_mut().pop_front();
        Self::replay(next).await
    }
}

/// List and selector regions that remember what was written
#[derive(Default)]
pub struct RecordingRoster {
    list: RefCell<Option<ListContent>>,
    options: RefCell<Vec<SelectorOption>>,
    renders: Cell<usize>,
}

impl RecordingRoster {
    pub fn list(&self) -> ListContent {
        self.list.borrow().clone().unwrap_or(ListContent::Loading)
    }

    pub fn cards(&self) -> Vec<ActivityCard> {
        match self.list() {
            ListContent::Cards(cards) => cards,
            _ => Vec::new(),
        }
    }

    pub fn options(&self) -> Vec<SelectorOption> {
        self.options.borrow().clone()
    }

    /// Completed full renders (list and selector)
    pub fn renders(&self) -> usize {
        self.renders.get()
    }
}

impl RosterRegion for RecordingRoster {
    fn replace_list(&self, content: ListContent) {
        *self.list.borrow_mut() = Some(content);
    }

    fn replace_options(&self, options: Vec<SelectorOption>) {
        *self.options.borrow_mut() = options;
        self.renders.set(self.renders.get() + 1);
    }
}

/// Message region that keeps every displayed state
#[derive(Default)]
pub struct RecordingMessages {
    history: RefCell<Vec<FeedbackMessage>>,
}

impl RecordingMessages {
    pub fn current(&self) -> Option<FeedbackMessage> {
        self.history.borrow().last().cloned()
    }
}

impl MessageRegion for RecordingMessages {
    fn display(&self, message: FeedbackMessage) {
        self.history.borrow_mut().push(message);
    }
}

#[derive(Default)]
pub struct RecordingAlerter {
    alerts: RefCell<Vec<String>>,
}

impl RecordingAlerter {
    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }
}

impl Alerter for RecordingAlerter {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}

struct PendingTask {
    id: u64,
    due: Duration,
    task: Box<dyn FnOnce()>,
}

/// Scheduler driven by an explicit clock
#[derive(Default)]
pub struct ManualScheduler {
    now: Cell<Duration>,
    next_id: Cell<u64>,
    queue: Rc<RefCell<Vec<PendingTask>>>,
}

impl ManualScheduler {
    /// Move the clock forward, running every task that falls due
    pub fn advance(&self, by: Duration) {
        let target = self.now.get() + by;
        loop {
            let next = {
                let mut queue = self.queue.borrow_mut();
                let earliest = queue
                    .iter()
                    .enumerate()
                    .filter(|(_, pending)| pending.due <= target)
                    .min_by_key(|(_, pending)| (pending.due, pending.id))
                    .map(|(index, _)| index);
                earliest.map(|index| queue.remove(index))
            };
            match next {
                Some(pending) => {
                    self.now.set(pending.due);
                    (pending.task)();
                }
                None => break,
            }
        }
        self.now.set(target);
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> ScheduledTask {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.queue.borrow_mut().push(PendingTask {
            id,
            due: self.now.get() + delay,
            task,
        });

        let queue = Rc::clone(&self.queue);
        ScheduledTask::new(move || queue.borrow_mut().retain(|pending| pending.id != id))
    }
}

/// Collects formatted `tracing` output
#[derive(Clone, Default)]
pub struct LogCapture {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl LogCapture {
    /// Route this thread's events into the capture until the guard drops
    pub fn install(&self) -> DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .without_time()
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn lines(&self) -> Vec<String> {
        let buffer = self.buffer.lock().unwrap();
        String::from_utf8_lossy(&buffer)
            .lines()
            .map(str::to_string)
            .collect()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = LogCapture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
