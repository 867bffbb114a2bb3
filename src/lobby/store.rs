use crate::GameError;
use crate::Session;

/// Opaque room persistence keyed by room name.
pub trait Store {
    /// Stores a new room. Fails if the name is already taken.
    fn create(&mut self, session: Session) -> Result<(), GameError>;
    fn fetch(&self, name: &str) -> Option<&Session>;
    fn fetch_mut(&mut self, name: &str) -> Option<&mut Session>;
    fn delete(&mut self, name: &str) -> Option<Session>;
}
