//! Time-scale request values

use std::fmt;

use crate::{RequestId, TimeScale};

/// Arbitration priority - higher values win
///
/// Equal priorities are broken by insertion recency (the later request wins),
/// which is a property of the arbiter, not of this type.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Priority(pub i32);

impl Priority {
    #[inline]
    pub fn new(value: i32) -> Self {
        Priority(value)
    }

    #[inline]
    pub fn value(self) -> i32 {
        self.0
    }
}

impl From<i32> for Priority {
    fn from(value: i32) -> Self {
        Priority(value)
    }
}

impl fmt::Debug for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

/// One subsystem's demand for a time-scale override
///
/// Immutable once created: changing a demand means removing the request and
/// pushing a new one. `created_at` is the insertion sequence number assigned
/// by the arbiter, used only to break equal-priority ties (larger wins).
#[derive(Clone, Debug)]
pub struct ScaleRequest {
    pub id: RequestId,
    pub scale: TimeScale,
    pub priority: Priority,
    pub created_at: u64,
}

impl ScaleRequest {
    pub fn new(
        id: impl Into<RequestId>,
        scale: impl Into<TimeScale>,
        priority: impl Into<Priority>,
        created_at: u64,
    ) -> Self {
        ScaleRequest {
            id: id.into(),
            scale: scale.into(),
            priority: priority.into(),
            created_at,
        }
    }
}
