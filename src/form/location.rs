//! Location Autocomplete State
//!
//! Per-row search-as-you-type state: the typed label, the chosen location id
//! and the dropdown. Timers and requests live in the row component; this
//! module only decides what they should do.

use crate::models::Location;

/// Delay between the last keystroke and the search request
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Placeholder shown when a search returns nothing
pub const NO_RESULTS_LABEL: &str = "Keine Ergebnisse";

/// Identifies one scheduled or running search of one row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket(u32);

/// What the row component should do after a keystroke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Cancel any pending timer, no request
    Hide,
    /// (Re)start the debounce timer for this ticket
    Debounce(SearchTicket),
}

/// Externally visible search phase
#[derive(Debug, Clone, PartialEq)]
pub enum SearchPhase {
    Idle,
    Debouncing,
    Searching,
    Showing(Vec<Location>),
    ShowingEmpty,
}

/// A line in the dropdown
#[derive(Debug, Clone, PartialEq)]
pub enum DropdownEntry {
    Placeholder,
    Choice { index: usize, location: Location },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Pending {
    #[default]
    None,
    Debouncing(SearchTicket),
    Searching(SearchTicket),
}

#[derive(Debug, Clone, PartialEq, Default)]
enum Dropdown {
    #[default]
    Hidden,
    Empty,
    Results(Vec<Location>),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LocationSearch {
    /// Visible label in the text input
    pub text: String,
    /// Value of the paired hidden field
    pub selected_id: Option<u32>,
    pending: Pending,
    dropdown: Dropdown,
    last_ticket: u32,
}

impl LocationSearch {
    fn next_ticket(&mut self) -> SearchTicket {
        self.last_ticket = self.last_ticket.wrapping_add(1);
        SearchTicket(self.last_ticket)
    }

    fn query(&self) -> &str {
        self.text.trim()
    }

    /// Keystroke in the text input
    pub fn input(&mut self, text: String) -> InputAction {
        self.text = text;

        if self.query().is_empty() {
            self.pending = Pending::None;
            self.dropdown = Dropdown::Hidden;
            return InputAction::Hide;
        }

        let ticket = self.next_ticket();
        self.pending = Pending::Debouncing(ticket);
        InputAction::Debounce(ticket)
    }

    /// Debounce timer fired. Returns the query to search for if the timer
    /// still belongs to the latest keystroke.
    pub fn debounce_elapsed(&mut self, ticket: SearchTicket) -> Option<String> {
        if self.pending != Pending::Debouncing(ticket) {
            return None;
        }
        self.pending = Pending::Searching(ticket);
        Some(self.query().to_string())
    }

    /// Input gained focus. Non-empty text is searched right away.
    pub fn focus(&mut self) -> Option<(SearchTicket, String)> {
        if self.query().is_empty() {
            return None;
        }
        let ticket = self.next_ticket();
        self.pending = Pending::Searching(ticket);
        Some((ticket, self.query().to_string()))
    }

    /// Search completed. Responses for superseded tickets are dropped.
    pub fn results(&mut self, ticket: SearchTicket, results: Vec<Location>) -> bool {
        if self.pending != Pending::Searching(ticket) {
            return false;
        }
        self.pending = Pending::None;
        self.dropdown = if results.is_empty() {
            Dropdown::Empty
        } else {
            Dropdown::Results(results)
        };
        true
    }

    /// Search request failed; the dropdown stays as it was.
    pub fn search_failed(&mut self, ticket: SearchTicket) {
        if self.pending == Pending::Searching(ticket) {
            self.pending = Pending::None;
        }
    }

    /// Click on the `index`-th result
    pub fn select(&mut self, index: usize) -> Option<Location> {
        let Dropdown::Results(results) = &self.dropdown else {
            return None;
        };
        let location = results.get(index)?.clone();

        self.text = location.text.clone();
        self.selected_id = Some(location.id);
        self.pending = Pending::None;
        self.dropdown = Dropdown::Hidden;
        Some(location)
    }

    /// Click outside the input and dropdown
    pub fn dismiss(&mut self) {
        self.dropdown = Dropdown::Hidden;
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.dropdown, Dropdown::Hidden)
    }

    pub fn phase(&self) -> SearchPhase {
        match (&self.pending, &self.dropdown) {
            (Pending::Debouncing(_), _) => SearchPhase::Debouncing,
            (Pending::Searching(_), _) => SearchPhase::Searching,
            (Pending::None, Dropdown::Hidden) => SearchPhase::Idle,
            (Pending::None, Dropdown::Empty) => SearchPhase::ShowingEmpty,
            (Pending::None, Dropdown::Results(r)) => SearchPhase::Showing(r.clone()),
        }
    }

    pub fn dropdown_entries(&self) -> Vec<DropdownEntry> {
        match &self.dropdown {
            Dropdown::Hidden => Vec::new(),
            Dropdown::Empty => vec![DropdownEntry::Placeholder],
            Dropdown::Results(results) => results
                .iter()
                .cloned()
                .enumerate()
                .map(|(index, location)| DropdownEntry::Choice { index, location })
                .collect(),
        }
    }
}
