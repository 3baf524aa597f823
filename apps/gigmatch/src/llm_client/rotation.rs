use std::sync::atomic::{AtomicUsize, Ordering};

/// Round-robin over a fixed set of API keys.
///
/// Shared across concurrent requests; the counter is the only mutable state.
#[derive(Debug, Default)]
pub struct CredentialRotator {
    keys: Vec<String>,
    cursor: AtomicUsize,
}

impl CredentialRotator {
    pub fn new(keys: Vec<String>) -> Self {
        Self {
            keys,
            cursor: AtomicUsize::new(0),
        }
    }

    /// Returns the next key in rotation, or `None` when no keys are configured.
    pub fn next(&self) -> Option<&str> {
        if self.keys.is_empty() {
            return None;
        }
        let i = self.cursor.fetch_add(1, Ordering::Relaxed) % self.keys.len();
        Some(self.keys[i].as_str())
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotates_in_order_and_wraps() {
        let rotator = CredentialRotator::new(vec!["a".into(), "b".into(), "c".into()]);
        let seen: Vec<&str> = (0..5).filter_map(|_| rotator.next()).collect();
        assert_eq!(seen, vec!["a", "b", "c", "a", "b"]);
    }

    #[test]
    fn test_empty_rotator_yields_none() {
        let rotator = CredentialRotator::new(vec![]);
        assert!(rotator.next().is_none());
        assert!(rotator.is_empty());
    }

    #[test]
    fn test_single_key_always_returned() {
        let rotator = CredentialRotator::new(vec!["only".into()]);
        assert_eq!(rotator.next(), Some("only"));
        assert_eq!(rotator.next(), Some("only"));
        assert_eq!(rotator.len(), 1);
    }
}
