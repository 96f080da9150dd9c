use baby_names_core::{FetchError, NameCatalog, NameRecord, NamesView, Selection};

pub const LOADING_NAMES: &str = "Loading names...";

/// Dashboard state shared between the key handler, the fetch tasks and the
/// draw callback.
#[derive(Debug, Default)]
pub struct WebState {
    pub view: NamesView,
    /// Selector row under the cursor; row 0 is the placeholder.
    pub highlighted: usize,
    pub active_name: Option<String>,
    /// Label of the request in flight, if any.
    pub loading: Option<String>,
}

impl WebState {
    pub fn new() -> Self {
        Self {
            loading: Some(LOADING_NAMES.to_string()),
            ..Self::default()
        }
    }

    pub fn move_up(&mut self) {
        if !self.view.selector_enabled() {
            return;
        }
        let total = self.view.option_count();
        self.highlighted = if self.highlighted == 0 {
            total - 1
        } else {
            self.highlighted - 1
        };
    }

    pub fn move_down(&mut self) {
        if !self.view.selector_enabled() {
            return;
        }
        self.highlighted = (self.highlighted + 1) % self.view.option_count();
    }

    /// Applies the highlighted entry and returns the name to fetch, if any.
    pub fn select_highlighted(&mut self) -> Option<String> {
        if !self.view.selector_enabled() {
            return None;
        }

        match self.view.option_at(self.highlighted)? {
            Selection::Placeholder => {
                self.view.clear();
                self.active_name = None;
                None
            }
            Selection::Name(name) => {
                self.loading = Some(format!("Loading rankings for {name}..."));
                Some(name)
            }
        }
    }

    pub fn finish_catalog(&mut self, result: Result<Vec<NameRecord>, FetchError>) {
        self.loading = None;
        match result {
            Ok(records) => {
                self.view.populate(NameCatalog::from_records(&records));
                self.highlighted = 0;
            }
            Err(error) => self.view.show_error(&error),
        }
    }

    /// Completions are applied in arrival order, so a slow response for an
    /// older selection can replace a newer chart.
    pub fn finish_details(&mut self, name: String, result: Result<Vec<NameRecord>, FetchError>) {
        self.loading = None;
        match result {
            Ok(records) => {
                self.view.show_details(&records);
                self.active_name = Some(name);
            }
            Err(error) => self.view.show_error(&error),
        }
    }
}
