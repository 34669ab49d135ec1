use std::fmt::Display;

use time::format_description::well_known::Rfc3339;

use super::entities::LookupReport;
use super::price_book::PriceBook;

/// Name→id listing loaded once at startup for the lookup page.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ItemIndex {
    #[default]
    Loading,
    Ready(PriceBook),
    Failed(String),
}

impl ItemIndex {
    pub fn book(&self) -> Option<&PriceBook> {
        match self {
            ItemIndex::Ready(book) => Some(book),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ItemIndex::Loading)
    }

    pub fn summary(&self) -> String {
        match self {
            ItemIndex::Loading => "Loading the market item list...".to_string(),
            ItemIndex::Ready(book) => {
                let stamp = book.fetched_at().format(&Rfc3339).unwrap_or_default();
                format!("{} items loaded ({stamp})", book.len())
            }
            ItemIndex::Failed(message) => format!(
                "Failed to load the item list: {message}. Items cannot be looked up by name."
            ),
        }
    }
}

/// Inputs and output of the raw/processed lookup calculator.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LookupForm {
    pub raw_name: String,
    pub processed_name: String,
    pub report: Option<LookupReport>,
    pub error: Option<String>,
    pub loading: bool,
    /// Bumped by `begin` and `clear`; only the latest request may finish.
    request: u64,
}

impl LookupForm {
    /// Clears the previous result and shows the loading indicator.
    ///
    /// Returns the ticket the matching `finish` call must present.
    pub fn begin(&mut self) -> u64 {
        self.request += 1;
        self.report = None;
        self.error = None;
        self.loading = true;
        self.request
    }

    /// Records the outcome of request `ticket`. Outcomes of requests that
    /// were superseded or cleared are dropped.
    pub fn finish<E: Display>(&mut self, ticket: u64, outcome: Result<LookupReport, E>) {
        if ticket != self.request {
            return;
        }
        self.loading = false;
        match outcome {
            Ok(report) => {
                self.report = Some(report);
                self.error = None;
            }
            Err(err) => {
                self.report = None;
                self.error = Some(err.to_string());
            }
        }
    }

    /// Resets the inputs, the result and the error region.
    pub fn clear(&mut self) {
        *self = Self {
            request: self.request + 1,
            ..Self::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::LookupSide;

    fn report() -> LookupReport {
        LookupReport {
            raw: LookupSide {
                name: "Raw piranha".into(),
                item_id: 5,
                price: 12.0,
            },
            processed: LookupSide {
                name: "Cooked piranha".into(),
                item_id: 6,
                price: 30.0,
            },
            profit: 18.0,
        }
    }

    #[test]
    fn begin_hides_previous_output() {
        let mut form = LookupForm {
            raw_name: "a".into(),
            processed_name: "b".into(),
            report: Some(report()),
            error: Some("old".into()),
            ..LookupForm::default()
        };
        form.begin();
        assert!(form.loading);
        assert!(form.report.is_none());
        assert!(form.error.is_none());
        assert_eq!(form.raw_name, "a");
    }

    #[test]
    fn finish_records_error_message() {
        let mut form = LookupForm::default();
        let ticket = form.begin();
        form.finish::<&str>(ticket, Err("Item \"X\" was not found"));
        assert!(!form.loading);
        assert_eq!(form.error.as_deref(), Some("Item \"X\" was not found"));
    }

    #[test]
    fn clear_resets_everything() {
        let mut form = LookupForm {
            raw_name: "a".into(),
            processed_name: "b".into(),
            ..LookupForm::default()
        };
        let ticket = form.begin();
        form.finish::<&str>(ticket, Ok(report()));
        form.clear();
        assert!(form.raw_name.is_empty());
        assert!(form.processed_name.is_empty());
        assert!(form.report.is_none());
        assert!(form.error.is_none());
        assert!(!form.loading);
    }

    #[test]
    fn result_arriving_after_clear_is_dropped() {
        let mut form = LookupForm::default();
        let ticket = form.begin();
        form.clear();
        form.finish::<&str>(ticket, Ok(report()));
        assert!(form.report.is_none());
        assert!(!form.loading);

        let ticket = form.begin();
        form.clear();
        form.finish::<&str>(ticket, Err("timeout"));
        assert!(form.error.is_none());
    }

    #[test]
    fn only_the_latest_request_finishes() {
        let mut form = LookupForm::default();
        let first = form.begin();
        let second = form.begin();
        form.finish::<&str>(first, Err("stale"));
        assert!(form.loading);
        assert!(form.error.is_none());

        form.finish::<&str>(second, Ok(report()));
        assert!(!form.loading);
        assert_eq!(form.report, Some(report()));
    }

    #[test]
    fn index_exposes_book_only_when_ready() {
        assert!(ItemIndex::Loading.book().is_none());
        assert!(ItemIndex::Failed("offline".into()).book().is_none());
        let book = PriceBook::from_items(Vec::new(), time::OffsetDateTime::UNIX_EPOCH);
        assert!(ItemIndex::Ready(book).book().is_some());
        assert!(ItemIndex::Failed("offline".into())
            .summary()
            .contains("offline"));
    }
}
