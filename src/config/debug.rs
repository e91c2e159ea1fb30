//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Log every request the fetch handles issue, and how they settle.
    pub log_fetch: bool,

    /// Cache hits, misses and invalidations in the query client.
    pub log_query_cache: bool,

    /// Wallet add/remove outcomes, including rejected input.
    pub log_wallet: bool,

    /// Phase changes of the app shell (loading / ready / failed).
    pub log_phases: bool,
}

pub const DF: LogFlags = LogFlags {
    log_fetch: true,
    log_phases: true,

    log_query_cache: false,
    log_wallet: false,
};
