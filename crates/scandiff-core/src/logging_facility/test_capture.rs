//! In-memory event capture for logging assertions
//!
//! Installs a `tracing` layer that records every event's fields as strings,
//! so tests can check what a comparison emitted: op boundaries, per-field
//! events and cache hits versus misses for a given key digest.

use scandiff_core_types::schema::{FIELD_CACHE_KEY, FIELD_EVENT, FIELD_OP};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};
use tracing::field::{Field, Visit};
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

/// One recorded event; every field value is stored as text
#[derive(Clone, Debug)]
pub struct CapturedEvent {
    pub level: Level,
    pub fields: HashMap<String, String>,
}

impl CapturedEvent {
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn op(&self) -> Option<&str> {
        self.field(FIELD_OP)
    }

    pub fn event(&self) -> Option<&str> {
        self.field(FIELD_EVENT)
    }

    /// True for the `event` of operation `op`
    pub fn is(&self, op: &str, event: &str) -> bool {
        self.op() == Some(op) && self.event() == Some(event)
    }
}

struct TextFields<'a>(&'a mut HashMap<String, String>);

impl TextFields<'_> {
    fn put(&mut self, field: &Field, text: String) {
        self.0.insert(field.name().to_string(), text);
    }
}

impl Visit for TextFields<'_> {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.put(field, format!("{:?}", value));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.put(field, value.to_string());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.put(field, value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.put(field, value.to_string());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.put(field, value.to_string());
    }
}

type EventBuffer = Arc<Mutex<Vec<CapturedEvent>>>;

struct CaptureLayer {
    events: EventBuffer,
}

impl<S> Layer<S> for CaptureLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = HashMap::new();
        event.record(&mut TextFields(&mut fields));
        let captured = CapturedEvent {
            level: *event.metadata().level(),
            fields,
        };
        if let Ok(mut events) = self.events.lock() {
            events.push(captured);
        }
    }
}

/// Shared view of the captured events
#[derive(Clone)]
pub struct TestCapture {
    events: EventBuffer,
}

impl TestCapture {
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    pub fn count_events<F>(&self, predicate: F) -> usize
    where
        F: Fn(&CapturedEvent) -> bool,
    {
        self.events
            .lock()
            .map(|events| events.iter().filter(|e| predicate(e)).count())
            .unwrap_or(0)
    }

    /// Number of `event`s (e.g. `cache_hit`) logged for the key with `digest`
    pub fn count_cache_events(&self, event: &str, digest: &str) -> usize {
        self.count_events(|e| e.event() == Some(event) && e.field(FIELD_CACHE_KEY) == Some(digest))
    }

    /// # Panics
    ///
    /// Panics if no `event` was captured for `op`
    pub fn assert_event_exists(&self, op: &str, event: &str) {
        let total = self.events().len();
        assert!(
            self.count_events(|e| e.is(op, event)) > 0,
            "Expected event op={} event={} not found in {} captured events",
            op,
            event,
            total
        );
    }
}

static GLOBAL_CAPTURE: OnceLock<TestCapture> = OnceLock::new();

/// Install the capture layer as the global subscriber (first call only) and
/// return a handle to the shared buffer.
///
/// Tests in one binary share the buffer, so filter on something unique to
/// the test (an op name, a field name, a key digest).
///
/// ```
/// use scandiff_core::logging_facility::test_capture::init_test_capture;
/// use scandiff_core::log_op_start;
///
/// let capture = init_test_capture();
/// log_op_start!("my_operation");
/// capture.assert_event_exists("my_operation", "start");
/// ```
pub fn init_test_capture() -> TestCapture {
    GLOBAL_CAPTURE
        .get_or_init(|| {
            let events = EventBuffer::default();
            let layer = CaptureLayer {
                events: Arc::clone(&events),
            };
            tracing_subscriber::registry().with(layer).init();
            TestCapture { events }
        })
        .clone()
}
