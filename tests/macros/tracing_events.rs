//! Diagnostic events emitted with the `tracing` feature.

use result_rail::{appl, flatten_any, flatten_seq, RailError};
use std::any::Any;
use std::sync::{Arc, Mutex};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

type Record = (Level, &'static str, Vec<&'static str>);

#[derive(Clone, Default)]
struct Recorder(Arc<Mutex<Vec<Record>>>);

impl<S: Subscriber> Layer<S> for Recorder {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        let fields = meta.fields().iter().map(|field| field.name()).collect();
        self.0.lock().unwrap().push((*meta.level(), meta.target(), fields));
    }
}

fn record(run: impl FnOnce()) -> Vec<Record> {
    let recorder = Recorder::default();
    let subscriber = tracing_subscriber::registry().with(recorder.clone());
    tracing::subscriber::with_default(subscriber, run);
    let events = recorder.0.lock().unwrap().clone();
    events
}

fn ours(events: Vec<Record>) -> Vec<Record> {
    events.into_iter().filter(|(_, target, _)| target.starts_with("result_rail")).collect()
}

#[test]
fn zero_arity_application_emits_debug_event() {
    let events = ours(record(|| {
        let r: Result<_, RailError> = appl(Ok(|| 1), Ok(2));
        assert!(r.is_err());
    }));

    assert_eq!(events.len(), 1);
    let (level, _, fields) = &events[0];
    assert_eq!(*level, Level::DEBUG);
    assert!(fields.contains(&"error"));
}

#[test]
fn sequence_short_circuit_emits_trace_event_with_index() {
    let events = ours(record(|| {
        let r = flatten_seq(vec![Ok(1), Ok(2), Err("third"), Ok(4)]);
        assert_eq!(r, Err("third"));
    }));

    assert_eq!(events.len(), 1);
    let (level, _, fields) = &events[0];
    assert_eq!(*level, Level::TRACE);
    assert!(fields.contains(&"index"));
}

#[test]
fn unknown_shape_emits_debug_event() {
    let events = ours(record(|| {
        let input: Box<dyn Any> = Box::new("not a collection");
        let r = flatten_any::<String, i32, RailError>(input);
        assert_eq!(r, Err(RailError::UnknownShape));
    }));

    assert_eq!(events.len(), 1);
    let (level, _, fields) = &events[0];
    assert_eq!(*level, Level::DEBUG);
    assert!(fields.contains(&"error"));
    assert!(fields.contains(&"type_id"));
}

#[test]
fn success_paths_stay_silent() {
    let events = ours(record(|| {
        let add = |a: i32, b: i32| a + b;
        let r: Result<i32, RailError> = appl!(Ok(add), Ok(1), Ok(2));
        assert_eq!(r, Ok(3));
        assert_eq!(flatten_seq(vec![Ok::<_, &str>(1), Ok(2)]), Ok(vec![1, 2]));
    }));

    assert!(events.is_empty());
}
