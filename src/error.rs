//! Errors raised while loading and aggregating failure-to-deliver reports.

/// Error produced while loading or aggregating failure-to-deliver reports.
#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    /// Report identifier does not match the `cnsfailsYYYYMM[ab]` pattern.
    ///
    /// Identifiers are fixed at build time, so this is an invariant
    /// violation rather than a recoverable runtime condition.
    #[error("Invalid report identifier '{id}'")]
    ReportId {
        /// The offending identifier.
        id: String,
    },
    /// The requested report identifier is not present in the store.
    #[error("Unknown report '{id}'")]
    UnknownReport {
        /// The identifier that was looked up.
        id: String,
    },
}
