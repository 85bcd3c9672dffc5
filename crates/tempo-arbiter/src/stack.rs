//! Stack-based time-scale arbitration
//!
//! Multiple subsystems (pause menus, cutscenes, hit-stop, slow-motion
//! abilities, boss-phase transitions) concurrently demand control of one
//! shared simulation rate. The arbiter keeps every active request and writes
//! exactly one winning rate to the clock sink after each mutation.
//!
//! Two orderings coexist over the same collection, deliberately:
//! - application order: highest priority wins, equal priorities go to the
//!   most recently pushed request ("last writer with equal priority wins")
//! - removal order: [`ScaleArbiter::pop`] is plain LIFO, independent of
//!   priority, so a subsystem can undo its own latest request without
//!   tracking ids

use tempo_core::{Priority, RequestId, ScaleRequest, TempoError, TempoResult, TimeScale};

use crate::{ClockSink, DiagnosticsSink, NoopDiagnostics};

const CATEGORY: &str = "arbiter";

/// Ordered collection of active time-scale requests
///
/// Constructed once per session and passed by reference to every subsystem
/// that issues requests. All operations are synchronous and run to
/// completion; hosts with multiple mutator threads must wrap the whole
/// arbiter in a single mutex.
pub struct ScaleArbiter {
    /// Active requests in insertion order
    requests: Vec<ScaleRequest>,
    /// Scale restored whenever no request is active, captured at construction
    default_scale: TimeScale,
    /// Insertion sequence counter, monotonically increasing
    next_seq: u64,
    clock: Box<dyn ClockSink>,
    diag: Box<dyn DiagnosticsSink>,
}

impl ScaleArbiter {
    /// Create an arbiter over a clock sink, with diagnostics disabled
    ///
    /// The sink's current rate becomes the default scale restored whenever
    /// the stack is empty.
    pub fn new(clock: impl ClockSink + 'static) -> Self {
        Self::with_diagnostics(clock, NoopDiagnostics)
    }

    /// Create an arbiter that reports transitions to a diagnostics sink
    pub fn with_diagnostics(
        clock: impl ClockSink + 'static,
        diag: impl DiagnosticsSink + 'static,
    ) -> Self {
        let default_scale = TimeScale::new(clock.rate());
        ScaleArbiter {
            requests: Vec::new(),
            default_scale,
            next_seq: 0,
            clock: Box::new(clock),
            diag: Box::new(diag),
        }
    }

    /// Push a new request onto the stack and re-evaluate
    ///
    /// Rejected with no state change when `id` is empty or already active.
    pub fn push(
        &mut self,
        id: impl Into<RequestId>,
        scale: impl Into<TimeScale>,
        priority: impl Into<Priority>,
    ) -> TempoResult<()> {
        let id = id.into();
        if id.is_empty() {
            self.diag.warning(CATEGORY, "rejected push: empty id");
            return Err(TempoError::EmptyId);
        }
        if self.contains(id.as_str()) {
            self.diag
                .warning(CATEGORY, &format!("rejected push: id already active: {id}"));
            return Err(TempoError::DuplicateId(id));
        }

        let request = ScaleRequest::new(id, scale, priority, self.next_seq);
        self.next_seq += 1;

        self.diag.info(
            CATEGORY,
            &format!(
                "push {} (scale {}, priority {:?})",
                request.id, request.scale, request.priority
            ),
        );
        self.requests.push(request);
        self.apply();
        Ok(())
    }

    /// Remove the most recently pushed request (LIFO) and re-evaluate
    ///
    /// Returns the removed request's id, or `None` on an empty stack.
    pub fn pop(&mut self) -> Option<RequestId> {
        let request = match self.requests.pop() {
            Some(request) => request,
            None => {
                self.diag.warning(CATEGORY, "pop on empty stack");
                return None;
            }
        };

        self.apply();
        self.diag
            .info(CATEGORY, &format!("pop {}", request.id));
        Some(request.id)
    }

    /// Remove the request with the given id, regardless of position
    pub fn remove(&mut self, id: &str) -> TempoResult<()> {
        let position = match self.requests.iter().position(|r| r.id == *id) {
            Some(position) => position,
            None => {
                self.diag
                    .warning(CATEGORY, &format!("no active request with id: {id}"));
                return Err(TempoError::UnknownId(RequestId::from(id)));
            }
        };

        let request = self.requests.remove(position);
        self.apply();
        self.diag
            .info(CATEGORY, &format!("remove {}", request.id));
        Ok(())
    }

    /// Drop all requests and restore the default scale. Never fails.
    pub fn clear(&mut self) {
        self.requests.clear();
        self.clock.set_rate(self.default_scale.value());
        self.diag.info(CATEGORY, "clear: all requests dropped");
    }

    /// Whether a request with the given id is active
    pub fn contains(&self, id: &str) -> bool {
        self.requests.iter().any(|r| r.id == *id)
    }

    /// The request currently governing the clock, if any
    ///
    /// Maximizes priority; equal priorities are broken by `created_at`
    /// (most recently inserted wins).
    pub fn winner(&self) -> Option<&ScaleRequest> {
        self.requests
            .iter()
            .max_by_key(|r| (r.priority, r.created_at))
    }

    /// The effective scale: the winner's, or the default when empty
    pub fn current_scale(&self) -> TimeScale {
        self.winner()
            .map(|r| r.scale)
            .unwrap_or(self.default_scale)
    }

    /// Scale captured from the sink at construction
    pub fn default_scale(&self) -> TimeScale {
        self.default_scale
    }

    /// Number of active requests
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Active requests in insertion order, read-only
    pub fn requests(&self) -> &[ScaleRequest] {
        &self.requests
    }

    /// Write the winning scale (or the default) to the clock sink
    ///
    /// Runs after every mutation; exactly one sink write. The diagnostics
    /// call cannot fail the operation.
    fn apply(&self) {
        if let Some(request) = self.winner() {
            self.clock.set_rate(request.scale.value());
            self.diag.info(
                CATEGORY,
                &format!(
                    "applied {} (scale {}, priority {:?})",
                    request.id, request.scale, request.priority
                ),
            );
        } else {
            self.clock.set_rate(self.default_scale.value());
        }
    }
}

impl Drop for ScaleArbiter {
    /// Restore the default rate so a torn-down arbiter cannot leak a frozen clock
    fn drop(&mut self) {
        self.clock.set_rate(self.default_scale.value());
    }
}
