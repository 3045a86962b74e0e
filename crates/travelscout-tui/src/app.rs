// TUI application state and event handling
use chrono::{DateTime, Utc};
use ratatui::widgets::ListState;
use travelscout_core::{
    search, CatalogStore, ContactForm, Error, Renderer, TimeSlots, ViewRecord,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    About,
    Contact,
}

impl View {
    pub const ALL: [View; 3] = [View::Home, View::About, View::Contact];

    pub fn title(&self) -> &'static str {
        match self {
            View::Home => "Home",
            View::About => "About Us",
            View::Contact => "Contact Us",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,         // Navigating views and results
    Searching,      // Typing in the search box
    EditingContact, // Typing in the contact form
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub fn next(self) -> Self {
        match self {
            ContactField::Name => ContactField::Email,
            ContactField::Email => ContactField::Message,
            ContactField::Message => ContactField::Name,
        }
    }
}

pub struct App {
    pub should_quit: bool,
    pub view: View,
    pub input_mode: InputMode,
    pub search_input: String,
    pub records: Vec<ViewRecord>,
    pub time_slots: TimeSlots,
    /// Shared error area; replaces result cards while set
    pub error_message: Option<String>,
    pub results_visible: bool,
    pub list_state: ListState,
    pub contact: ContactForm,
    pub contact_field: ContactField,
    pub contact_notice: Option<String>,
    renderer: Renderer,
}

impl App {
    pub fn new(renderer: Renderer) -> Self {
        Self {
            should_quit: false,
            view: View::Home,
            input_mode: InputMode::Searching,
            search_input: String::new(),
            records: Vec::new(),
            time_slots: TimeSlots::default(),
            error_message: None,
            results_visible: false,
            list_state: ListState::default(),
            contact: ContactForm::default(),
            contact_field: ContactField::Name,
            contact_notice: None,
            renderer,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Switch views. Leaving home drops any search state.
    pub fn show_view(&mut self, view: View) {
        self.view = view;
        self.input_mode = InputMode::Normal;
        if view != View::Home {
            self.clear_results();
        }
    }

    /// The search box only exists on the home view
    pub fn search_visible(&self) -> bool {
        self.view == View::Home
    }

    pub fn enter_search_mode(&mut self) {
        if self.search_visible() {
            self.input_mode = InputMode::Searching;
        }
    }

    pub fn enter_normal_mode(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn enter_contact_mode(&mut self) {
        if self.view == View::Contact {
            self.input_mode = InputMode::EditingContact;
        }
    }

    /// Run the current input through the search pipeline.
    ///
    /// Previous output is cleared first so the newest search always wins.
    pub fn run_search(&mut self, store: &CatalogStore) {
        self.records.clear();
        self.time_slots = TimeSlots::default();
        self.error_message = None;
        self.list_state.select(None);

        match search(&self.search_input, store) {
            Ok(results) => {
                self.records = self.renderer.render(&results);
                self.time_slots = TimeSlots::for_records(&self.records);
                self.list_state.select(Some(0));
            }
            Err(e) => {
                tracing::debug!("Search for {:?} failed: {}", self.search_input, e);
                self.error_message = Some(e.user_message());
            }
        }

        self.results_visible = true;
    }

    /// Reset input, results and errors
    pub fn clear_results(&mut self) {
        self.search_input.clear();
        self.records.clear();
        self.time_slots = TimeSlots::default();
        self.error_message = None;
        self.results_visible = false;
        self.list_state.select(None);
    }

    /// Surface a permanent load failure in the error area
    pub fn set_load_failed(&mut self, detail: String) {
        self.records.clear();
        self.time_slots = TimeSlots::default();
        self.error_message = Some(Error::LoadError(detail).user_message());
        self.results_visible = true;
    }

    pub fn has_pending_times(&self) -> bool {
        !self.time_slots.pending_ids().is_empty()
    }

    pub fn fill_time_slots(&mut self, now: DateTime<Utc>) {
        self.time_slots.fill_all(now);
    }

    pub fn selected_record(&self) -> Option<&ViewRecord> {
        self.list_state.selected().and_then(|i| self.records.get(i))
    }

    pub fn next_result(&mut self) {
        if self.records.is_empty() {
            return;
        }
        let next = match self.list_state.selected() {
            Some(i) if i + 1 < self.records.len() => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.list_state.select(Some(next));
    }

    pub fn previous_result(&mut self) {
        if self.records.is_empty() {
            return;
        }
        let prev = self.list_state.selected().map_or(0, |i| i.saturating_sub(1));
        self.list_state.select(Some(prev));
    }

    fn contact_field_mut(&mut self) -> &mut String {
        match self.contact_field {
            ContactField::Name => &mut self.contact.name,
            ContactField::Email => &mut self.contact.email,
            ContactField::Message => &mut self.contact.message,
        }
    }

    pub fn contact_push(&mut self, c: char) {
        self.contact_field_mut().push(c);
    }

    pub fn contact_pop(&mut self) {
        self.contact_field_mut().pop();
    }

    pub fn next_contact_field(&mut self) {
        self.contact_field = self.contact_field.next();
    }

    pub fn submit_contact(&mut self) {
        self.contact_notice = Some(match self.contact.submit() {
            Ok(thanks) => {
                self.contact_field = ContactField::Name;
                thanks.to_string()
            }
            Err(e) => e.to_string(),
        });
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Renderer::default())
    }
}
