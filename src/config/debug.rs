//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Log every outbound request and its settlement.
    pub log_requests: bool,

    /// Log projector runs (chart/table/summary).
    pub log_projections: bool,

    /// Log alert creation, dismissal and expiry.
    pub log_notifications: bool,

    /// Activate trace_time macro (for scope-level timing)
    pub log_performance: bool,

    /// Log commands rejected or deferred at the control lock.
    pub log_dispatch: bool,
}

pub const DF: LogFlags = LogFlags {
    log_requests: true,
    log_dispatch: true,

    log_projections: false,
    log_notifications: false,
    log_performance: true,
};
