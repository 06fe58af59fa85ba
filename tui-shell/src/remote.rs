//! Fetch-state machine for screens backed by a remote call
//!
//! Every screen that fetches is in exactly one of these states, which keeps
//! illegal combinations (loading with an error set, data with a stale error)
//! unrepresentable. "Not found" is deliberately distinct from a transport
//! failure: the API answered, there just is no such entity.

/// State of a remote fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Remote<T> {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// Request in flight.
    Loading,
    /// Response received and decoded.
    Ready(T),
    /// The API answered but the entity does not exist.
    NotFound,
    /// The request could not complete or the response could not be parsed.
    Failed(String),
}

impl<T> Remote<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Remote::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Remote::Ready(_))
    }

    /// The value, if ready.
    pub fn ready(&self) -> Option<&T> {
        match self {
            Remote::Ready(value) => Some(value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_idle() {
        let r: Remote<u32> = Remote::default();
        assert_eq!(r, Remote::Idle);
        assert!(!r.is_loading());
    }

    #[test]
    fn ready_exposes_value() {
        let r = Remote::Ready(7);
        assert!(r.is_ready());
        assert_eq!(r.ready(), Some(&7));

        let r: Remote<u32> = Remote::NotFound;
        assert_eq!(r.ready(), None);
    }

    #[test]
    fn not_found_is_not_failure() {
        let nf: Remote<u32> = Remote::NotFound;
        let failed: Remote<u32> = Remote::Failed("connection reset".into());
        assert_ne!(nf, failed);
    }
}
