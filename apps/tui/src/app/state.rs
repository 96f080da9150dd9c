use baby_names_core::view::NO_NAMES;
use baby_names_core::{NamesView, Selection};
use throbber_widgets_tui::ThrobberState;
use tracing::debug;

use crate::app::actions::{AppActions, Outcome, Request};
use crate::source::RecordSource;

/// Fuzzy filter typed into the selector with `/`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub active: bool,
    pub query: String,
}

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub view: NamesView,
    pub actions: AppActions,
    /// Row under the cursor in the visible selector list; row 0 is the placeholder.
    pub highlighted_index: usize,
    /// Name whose chart is on screen.
    pub active_name: Option<String>,
    pub filter: FilterState,
    pub pending: Option<Request>,
    pub show_help: bool,
    pub status_message: String,
    pub throbber_state: ThrobberState,
}

impl App {
    /// New app with the catalog request already queued.
    pub fn new(source: Box<dyn RecordSource>) -> Self {
        Self {
            running: true,
            view: NamesView::new(),
            actions: AppActions::new(source),
            highlighted_index: 0,
            active_name: None,
            filter: FilterState::default(),
            pending: Some(Request::Catalog),
            show_help: false,
            status_message: String::new(),
            throbber_state: ThrobberState::default(),
        }
    }

    pub fn update(&mut self) {
        self.throbber_state.calc_next();
    }

    /// Catalog names currently listed under the placeholder.
    pub fn visible_names(&self) -> Vec<&str> {
        self.view.catalog().filter(&self.filter.query)
    }

    /// Rows in the selector, placeholder included.
    pub fn visible_len(&self) -> usize {
        self.visible_names().len() + 1
    }

    pub fn highlighted(&self) -> Option<Selection> {
        if self.highlighted_index == 0 {
            return Some(Selection::Placeholder);
        }
        self.visible_names()
            .get(self.highlighted_index - 1)
            .map(|name| Selection::Name((*name).to_string()))
    }

    /// Acts on a selector change: the placeholder clears the display, a name
    /// queues its detail request.
    pub fn apply_selection(&mut self, selection: Selection) {
        match selection {
            Selection::Placeholder => {
                debug!("placeholder selected, clearing display");
                self.view.clear();
                self.active_name = None;
                self.status_message.clear();
            }
            Selection::Name(name) => {
                self.pending = Some(Request::Details(name));
            }
        }
    }

    pub fn apply_highlighted(&mut self) {
        if let Some(selection) = self.highlighted() {
            self.apply_selection(selection);
        }
    }

    /// Runs the queued request, if any, and folds its outcome into the view.
    pub async fn run_pending(&mut self) {
        let Some(request) = self.pending.clone() else {
            return;
        };

        let outcome = self.actions.perform(&request).await;
        self.apply_outcome(outcome);
    }

    /// Clears the pending request and updates the view from its result.
    pub fn apply_outcome(&mut self, outcome: Outcome) {
        self.pending = None;

        match outcome {
            Outcome::Catalog(Ok(catalog)) => {
                self.status_message = if catalog.is_empty() {
                    NO_NAMES.to_string()
                } else {
                    format!("{} names loaded", catalog.len())
                };
                self.view.populate(catalog);
                self.highlighted_index = 0;
            }
            Outcome::Details(name, Ok(records)) => {
                self.view.show_details(&records);
                self.status_message = format!("{} rows for {name}", records.len());
                self.active_name = Some(name);
            }
            Outcome::Catalog(Err(error)) | Outcome::Details(_, Err(error)) => {
                self.view.show_error(&error);
            }
        }
    }

    pub fn start_filter(&mut self) {
        self.filter.active = true;
    }

    pub fn push_filter_char(&mut self, ch: char) {
        self.filter.query.push(ch);
        self.reset_highlight_for_filter();
    }

    pub fn pop_filter_char(&mut self) {
        self.filter.query.pop();
        self.reset_highlight_for_filter();
    }

    pub fn clear_filter(&mut self) {
        self.filter = FilterState::default();
        self.highlighted_index = 0;
    }

    fn reset_highlight_for_filter(&mut self) {
        self.highlighted_index = usize::from(self.visible_len() > 1);
    }
}
