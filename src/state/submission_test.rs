use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use futures::channel::oneshot;
use futures::executor::{LocalPool, block_on};
use futures::task::LocalSpawnExt;

use super::*;
use crate::error::{CalcError, INVALID_NUMBERS_MESSAGE, NETWORK_ERROR_MESSAGE, UNKNOWN_ERROR_MESSAGE};
use crate::net::types::HttpReply;
use crate::state::display::{DisplayState, SurfaceKind, Transition};

type Scripted = Result<HttpReply, CalcError>;

/// Transport whose replies are fed through oneshot channels, one per call.
#[derive(Default)]
struct ScriptedTransport {
    pending: RefCell<VecDeque<oneshot::Receiver<Scripted>>>,
    bodies: RefCell<Vec<String>>,
    calls: Cell<usize>,
}

impl ScriptedTransport {
    fn with_replies(replies: Vec<Scripted>) -> Self {
        let transport = Self::default();
        for reply in replies {
            let (tx, rx) = oneshot::channel();
            tx.send(reply).unwrap();
            transport.pending.borrow_mut().push_back(rx);
        }
        transport
    }

    fn deferred(count: usize) -> (Self, Vec<oneshot::Sender<Scripted>>) {
        let transport = Self::default();
        let mut senders = Vec::new();
        for _ in 0..count {
            let (tx, rx) = oneshot::channel();
            senders.push(tx);
            transport.pending.borrow_mut().push_back(rx);
        }
        (transport, senders)
    }
}

impl Transport for ScriptedTransport {
    async fn post_json(&self, _url: &str, body: String) -> Result<HttpReply, CalcError> {
        self.calls.set(self.calls.get() + 1);
        self.bodies.borrow_mut().push(body);
        let rx = self
            .pending
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| CalcError::Transport("no scripted reply".to_owned()))?;
        rx.await.unwrap_or_else(|_| Err(CalcError::Transport("reply dropped".to_owned())))
    }
}

/// Surface keeping (visible, text) per region.
#[derive(Default)]
struct MirrorSurface {
    result: RefCell<(bool, String)>,
    error: RefCell<(bool, String)>,
}

impl MirrorSurface {
    fn region(&self, kind: SurfaceKind) -> &RefCell<(bool, String)> {
        match kind {
            SurfaceKind::Result => &self.result,
            SurfaceKind::Error => &self.error,
        }
    }
}

impl DisplaySurface for MirrorSurface {
    fn set_visible(&self, kind: SurfaceKind, visible: bool) {
        self.region(kind).borrow_mut().0 = visible;
    }

    fn set_text(&self, kind: SurfaceKind, text: &str) {
        text.clone_into(&mut self.region(kind).borrow_mut().1);
    }

    fn apply_transition(&self, _kind: SurfaceKind, _transition: Transition) {}
}

fn calculator(transport: ScriptedTransport) -> Calculator<ScriptedTransport, MirrorSurface> {
    Calculator::new(transport, DisplayController::new(MirrorSurface::default()), "/calculate")
}

fn visible(calc: &Calculator<ScriptedTransport, MirrorSurface>) -> (bool, bool) {
    let surface = calc.display().surface();
    (surface.result.borrow().0, surface.error.borrow().0)
}

fn result_text(calc: &Calculator<ScriptedTransport, MirrorSurface>) -> String {
    calc.display().surface().result.borrow().1.clone()
}

fn error_text(calc: &Calculator<ScriptedTransport, MirrorSurface>) -> String {
    calc.display().surface().error.borrow().1.clone()
}

// =============================================================
// SubmissionSeq
// =============================================================

#[test]
fn seq_issues_increasing_ids_and_tracks_latest() {
    let seq = SubmissionSeq::default();
    let first = seq.next();
    assert!(seq.is_latest(first));
    let second = seq.next();
    assert!(second > first);
    assert!(!seq.is_latest(first));
    assert!(seq.is_latest(second));
    assert_eq!(seq.latest(), second);
}

// =============================================================
// Local validation
// =============================================================

#[test]
fn non_numeric_input_never_reaches_transport() {
    for (a, b) in [("abc", "4"), ("3", ""), ("", ""), ("-", ".")] {
        let calc = calculator(ScriptedTransport::default());
        let outcome = block_on(calc.submit(FormFields::new(a, b, "+")));

        assert_eq!(outcome, SubmissionOutcome::Rejected);
        assert_eq!(calc.transport.calls.get(), 0, "fields {a:?} {b:?}");
        assert_eq!(error_text(&calc), INVALID_NUMBERS_MESSAGE);
        assert_eq!(visible(&calc), (false, true));
    }
}

// =============================================================
// Remote outcomes
// =============================================================

#[test]
fn success_reply_shows_result_only() {
    let calc = calculator(ScriptedTransport::with_replies(vec![Ok(HttpReply::new(200, r#"{"result": 7}"#))]));
    let outcome = block_on(calc.submit(FormFields::new("3", "4", "+")));

    assert_eq!(outcome, SubmissionOutcome::Rendered);
    assert_eq!(result_text(&calc), "7");
    assert_eq!(visible(&calc), (true, false));
    assert_eq!(calc.display().state(), DisplayState::ShowingResult(7.0));

    let body: serde_json::Value = serde_json::from_str(&calc.transport.bodies.borrow()[0]).unwrap();
    assert_eq!(body, serde_json::json!({ "num1": 3.0, "num2": 4.0, "operator": "+" }));
}

#[test]
fn backend_error_shows_message_only() {
    let calc = calculator(ScriptedTransport::with_replies(vec![Ok(HttpReply::new(
        400,
        r#"{"error": "division by zero"}"#,
    ))]));
    block_on(calc.submit(FormFields::new("5", "0", "/")));

    assert_eq!(error_text(&calc), "division by zero");
    assert_eq!(visible(&calc), (false, true));
}

#[test]
fn transport_failure_shows_network_message() {
    let calc = calculator(ScriptedTransport::with_replies(vec![Err(CalcError::Transport(
        "connection reset".to_owned(),
    ))]));
    block_on(calc.submit(FormFields::new("1", "2", "*")));

    assert_eq!(error_text(&calc), NETWORK_ERROR_MESSAGE);
    assert_eq!(visible(&calc), (false, true));
}

#[test]
fn error_status_without_message_shows_fallback() {
    let calc = calculator(ScriptedTransport::with_replies(vec![Ok(HttpReply::new(500, "{}"))]));
    block_on(calc.submit(FormFields::new("1", "2", "-")));

    assert_eq!(error_text(&calc), UNKNOWN_ERROR_MESSAGE);
    assert_eq!(visible(&calc), (false, true));
}

#[test]
fn every_settled_submission_shows_exactly_one_surface() {
    let replies = vec![
        Ok(HttpReply::new(200, r#"{"result": 1}"#)),
        Ok(HttpReply::new(400, r#"{"error": "nope"}"#)),
        Ok(HttpReply::new(503, "")),
        Err(CalcError::Transport("down".to_owned())),
        Ok(HttpReply::new(200, r#"{"result": 0.5}"#)),
    ];
    let count = replies.len();
    let calc = calculator(ScriptedTransport::with_replies(replies));
    for _ in 0..count {
        block_on(calc.submit(FormFields::new("1", "2", "+")));
        let (result, error) = visible(&calc);
        assert!(result ^ error, "result={result} error={error}");
    }
}

// =============================================================
// Sequencing
// =============================================================

#[test]
fn in_flight_submission_hides_previous_outcome() {
    let (transport, mut senders) = ScriptedTransport::deferred(1);
    let calc = Rc::new(calculator(transport));
    calc.display().show_result(42.0);

    let mut pool = LocalPool::new();
    let task = Rc::clone(&calc);
    pool.spawner()
        .spawn_local(async move {
            task.submit(FormFields::new("3", "4", "+")).await;
        })
        .unwrap();
    pool.run_until_stalled();

    assert_eq!(calc.display().state(), DisplayState::Neutral);
    assert_eq!(visible(&calc), (false, false));

    senders.remove(0).send(Ok(HttpReply::new(200, r#"{"result": 7}"#))).unwrap();
    pool.run_until_stalled();
    assert_eq!(result_text(&calc), "7");
}

#[test]
fn out_of_order_replies_render_latest_submission() {
    let (transport, mut senders) = ScriptedTransport::deferred(2);
    let calc = Rc::new(calculator(transport));
    let outcomes = Rc::new(RefCell::new(Vec::new()));

    let mut pool = LocalPool::new();
    let spawner = pool.spawner();
    for (tag, fields) in [(1, FormFields::new("1", "0", "+")), (2, FormFields::new("2", "0", "+"))] {
        let task = Rc::clone(&calc);
        let outcomes = Rc::clone(&outcomes);
        spawner
            .spawn_local(async move {
                let outcome = task.submit(fields).await;
                outcomes.borrow_mut().push((tag, outcome));
            })
            .unwrap();
        pool.run_until_stalled();
    }
    assert_eq!(calc.transport.calls.get(), 2);

    let second = senders.pop().unwrap();
    let first = senders.pop().unwrap();

    second.send(Ok(HttpReply::new(200, r#"{"result": 2}"#))).unwrap();
    pool.run_until_stalled();
    assert_eq!(result_text(&calc), "2");

    first.send(Ok(HttpReply::new(200, r#"{"result": 1}"#))).unwrap();
    pool.run_until_stalled();
    assert_eq!(result_text(&calc), "2");
    assert_eq!(visible(&calc), (true, false));

    assert_eq!(
        *outcomes.borrow(),
        vec![(2, SubmissionOutcome::Rendered), (1, SubmissionOutcome::Superseded)]
    );
}

#[test]
fn late_reply_does_not_overwrite_newer_validation_error() {
    let (transport, mut senders) = ScriptedTransport::deferred(1);
    let calc = Rc::new(calculator(transport));

    let mut pool = LocalPool::new();
    let task = Rc::clone(&calc);
    pool.spawner()
        .spawn_local(async move {
            task.submit(FormFields::new("3", "4", "+")).await;
        })
        .unwrap();
    pool.run_until_stalled();

    let outcome = block_on(calc.submit(FormFields::new("oops", "4", "+")));
    assert_eq!(outcome, SubmissionOutcome::Rejected);

    senders.remove(0).send(Ok(HttpReply::new(200, r#"{"result": 7}"#))).unwrap();
    pool.run_until_stalled();

    assert_eq!(error_text(&calc), INVALID_NUMBERS_MESSAGE);
    assert_eq!(visible(&calc), (false, true));
}
