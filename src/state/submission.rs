//! One submission, end to end: validate, request, render.
//!
//! DESIGN
//! ======
//! Every submission takes a fresh id from [`SubmissionSeq`] before doing
//! anything else. A reply is rendered only while its id is still the newest,
//! so overlapping requests that settle out of order can never overwrite a
//! newer outcome (including a newer validation message).
//!
//! Everything runs on the single UI thread; the await on the transport is the
//! only suspension point.

#[cfg(test)]
#[path = "submission_test.rs"]
mod submission_test;

use std::cell::Cell;

use super::display::{DisplayController, DisplaySurface};
use super::form::{FormFields, collect_request};
use crate::net::api::{Transport, calculate};

/// Monotonic submission counter.
#[derive(Debug, Default)]
pub struct SubmissionSeq {
    latest: Cell<u64>,
}

impl SubmissionSeq {
    /// Issue the next id; it becomes the newest.
    pub fn next(&self) -> u64 {
        let id = self.latest.get().wrapping_add(1);
        self.latest.set(id);
        id
    }

    #[must_use]
    pub fn is_latest(&self, id: u64) -> bool {
        self.latest.get() == id
    }

    #[must_use]
    pub fn latest(&self) -> u64 {
        self.latest.get()
    }
}

/// How a submission ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Local validation failed; no request was sent.
    Rejected,
    /// The reply (or failure) was rendered.
    Rendered,
    /// A newer submission started while this one was in flight.
    Superseded,
}

pub struct Calculator<T, S> {
    transport: T,
    display: DisplayController<S>,
    endpoint: String,
    seq: SubmissionSeq,
}

impl<T: Transport, S: DisplaySurface> Calculator<T, S> {
    pub fn new(transport: T, display: DisplayController<S>, endpoint: impl Into<String>) -> Self {
        Self { transport, display, endpoint: endpoint.into(), seq: SubmissionSeq::default() }
    }

    pub async fn submit(&self, fields: FormFields) -> SubmissionOutcome {
        let id = self.seq.next();

        let request = match collect_request(&fields) {
            Ok(request) => request,
            Err(e) => {
                log::debug!("submission {id} rejected: {}", e.detail());
                self.display.show_error(&e.to_string());
                return SubmissionOutcome::Rejected;
            }
        };

        self.display.hide_all();
        let outcome = calculate(&self.transport, &self.endpoint, &request).await;

        if !self.seq.is_latest(id) {
            log::debug!("submission {id} superseded by {}; dropping reply", self.seq.latest());
            return SubmissionOutcome::Superseded;
        }

        match outcome {
            Ok(value) => self.display.show_result(value),
            Err(e) => {
                log::warn!(
                    "calculation {} {} {} failed: {}",
                    request.num1(),
                    request.operator(),
                    request.num2(),
                    e.detail()
                );
                self.display.show_error(&e.to_string());
            }
        }
        SubmissionOutcome::Rendered
    }

    pub fn display(&self) -> &DisplayController<S> {
        &self.display
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}
