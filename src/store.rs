//! Registry of bundled failure-to-deliver report snapshots.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::error::ReportError;

static REPORT_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^cnsfails(\d{4})(\d{2})(a|b)$").expect("valid report id regex")
});

/// Raw snapshot texts embedded at build time, in chronological order.
const BUNDLED_REPORTS: [(&str, &str); 7] = [
    ("cnsfails202012a", include_str!("../data/cnsfails202012a.txt")),
    ("cnsfails202012b", include_str!("../data/cnsfails202012b.txt")),
    ("cnsfails202101a", include_str!("../data/cnsfails202101a.txt")),
    ("cnsfails202101b", include_str!("../data/cnsfails202101b.txt")),
    ("cnsfails202102a", include_str!("../data/cnsfails202102a.txt")),
    ("cnsfails202102b", include_str!("../data/cnsfails202102b.txt")),
    ("cnsfails202103a", include_str!("../data/cnsfails202103a.txt")),
];

/// Derives the human-readable label for a report identifier.
///
/// The identifier encodes year, month and half of month: `a` covers the
/// first half (labelled "1/2"), `b` the second ("2/2").
///
/// # Errors
///
/// Returns [`ReportError::ReportId`] when the identifier does not match
/// the `cnsfailsYYYYMM[ab]` pattern or encodes an impossible month.
///
/// # Examples
///
/// ```
/// use cns_fails_report::derive_label;
///
/// assert_eq!(derive_label("cnsfails202103a").unwrap(), "March 2021 - 1/2");
/// assert_eq!(derive_label("cnsfails202012b").unwrap(), "December 2020 - 2/2");
/// ```
pub fn derive_label(id: &str) -> Result<String, ReportError> {
    let invalid = || ReportError::ReportId { id: id.to_string() };

    let caps = REPORT_ID_RE.captures(id).ok_or_else(invalid)?;
    let year: i32 = caps[1].parse().map_err(|_| invalid())?;
    let month: u32 = caps[2].parse().map_err(|_| invalid())?;
    let (day, half) = if &caps[3] == "a" { (1, "1/2") } else { (15, "2/2") };

    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)?;
    Ok(format!("{} - {half}", date.format("%B %Y")))
}

/// One snapshot held by the store.
#[derive(Debug, Clone)]
pub struct StoredReport {
    /// Report identifier, e.g. `cnsfails202103a`.
    pub id: String,
    /// Label derived from the identifier, e.g. `"March 2021 - 1/2"`.
    pub label: String,
    /// Raw pipe-delimited report text.
    pub text: String,
}

/// Immutable registry mapping report identifiers to their raw text.
///
/// Built once at startup and passed by reference to the parsing pipeline.
/// Iteration order is declaration order, which is chronological for the
/// bundled set.
#[derive(Debug, Clone, Default)]
pub struct ReportStore {
    reports: Vec<StoredReport>,
}

impl ReportStore {
    /// Builds a store from `(identifier, text)` pairs, deriving labels.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::ReportId`] on the first malformed identifier.
    pub fn new<I, S, T>(entries: I) -> Result<Self, ReportError>
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
        T: Into<String>,
    {
        let mut reports = Vec::new();
        for (id, text) in entries {
            let id = id.into();
            let label = derive_label(&id)?;
            reports.push(StoredReport {
                id,
                label,
                text: text.into(),
            });
        }
        Ok(Self { reports })
    }

    /// Store of the snapshots bundled with the crate.
    ///
    /// # Panics
    ///
    /// Panics if a bundled identifier is malformed; that is a build-time
    /// invariant, not a runtime condition.
    #[must_use]
    pub fn bundled() -> Self {
        Self::new(BUNDLED_REPORTS).expect("bundled report identifiers are well-formed")
    }

    /// Returns the raw text of the report with the given identifier.
    #[must_use]
    pub fn raw_text(&self, id: &str) -> Option<&str> {
        self.reports
            .iter()
            .find(|report| report.id == id)
            .map(|report| report.text.as_str())
    }

    /// Iterates over stored reports in declaration order.
    pub fn reports(&self) -> impl Iterator<Item = &StoredReport> {
        self.reports.iter()
    }

    /// The most recent report, i.e. the last one declared.
    #[must_use]
    pub fn latest(&self) -> Option<&StoredReport> {
        self.reports.last()
    }
}
