use crate::models::Location;

/// The navigation history collaborator the redirect helper drives.
///
/// `replace` must swap the active entry in place (a history-stack
/// replacement, not a push) without triggering a reload; that contract
/// belongs to the implementing history, not to this crate.
pub trait History {
    /// The current location.
    fn location(&self) -> &Location;

    /// Replaces the active route with `path`.
    fn replace(&mut self, path: &str);
}

/// A minimal in-memory history.
///
/// The non-DOM runtime navigates without URLs and keeps its route state in
/// memory; this is the shape of history it hands the redirect helper. Also
/// the natural test double.
#[derive(Debug, Clone, Default)]
pub struct MemoryHistory {
    location: Location,
}

impl MemoryHistory {
    pub fn new(location: Location) -> Self {
        MemoryHistory { location }
    }
}

impl History for MemoryHistory {
    fn location(&self) -> &Location {
        &self.location
    }

    fn replace(&mut self, path: &str) {
        // Split the incoming path back into pathname and search.
        match path.split_once('?') {
            Some((pathname, search)) => {
                self.location.pathname = pathname.to_string();
                self.location.search = format!("?{}", search);
            }
            None => {
                self.location.pathname = path.to_string();
                self.location.search = String::new();
            }
        }
    }
}
