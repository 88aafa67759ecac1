//! Search term tracking
//!
//! Keeps the term being edited apart from the term that was last submitted,
//! so re-submitting an unchanged term can be recognised and skipped.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    term: String,
    submitted: String,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Term as currently typed
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Term that produced the current results
    pub fn submitted(&self) -> &str {
        &self.submitted
    }

    pub fn insert_char(&mut self, c: char) {
        self.term.push(c);
    }

    pub fn delete_char(&mut self) {
        self.term.pop();
    }

    pub fn set_term(&mut self, term: impl Into<String>) {
        self.term = term.into();
    }

    /// Empty the edited term. The submitted term is untouched.
    pub fn clear(&mut self) {
        self.term.clear();
    }

    /// Typed term differs from the one behind the current results
    pub fn is_dirty(&self) -> bool {
        self.term.trim() != self.submitted
    }

    /// Commit the typed term (trimmed). Returns the new term, or `None` when
    /// it matches what was already submitted.
    pub fn submit(&mut self) -> Option<&str> {
        let candidate = self.term.trim();
        if candidate == self.submitted {
            return None;
        }
        self.submitted = candidate.to_string();
        Some(&self.submitted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_trims_and_dedupes() {
        let mut search = SearchState::new();
        search.set_term("  Bolt ");
        assert_eq!(search.submit(), Some("Bolt"));
        assert_eq!(search.submitted(), "Bolt");

        search.set_term("Bolt");
        assert_eq!(search.submit(), None);
    }

    #[test]
    fn empty_submit_is_noop_initially() {
        let mut search = SearchState::new();
        search.set_term("   ");
        assert_eq!(search.submit(), None);
        assert!(!search.is_dirty());
    }

    #[test]
    fn editing_tracks_dirty_state() {
        let mut search = SearchState::new();
        for c in "Elf".chars() {
            search.insert_char(c);
        }
        assert!(search.is_dirty());
        search.submit();
        assert!(!search.is_dirty());

        search.delete_char();
        assert_eq!(search.term(), "El");
        assert!(search.is_dirty());

        search.clear();
        assert_eq!(search.term(), "");
        assert_eq!(search.submitted(), "Elf");
    }
}
