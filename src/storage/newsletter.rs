//! Newsletter signups.

use super::collections::NEWSLETTER;
use super::traits::{HasId, Storage};
use crate::domain::Subscription;
use crate::error::{CatalogError, Result};

impl HasId for Subscription {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Shape check for an email address: exactly one `@`, a non-empty local
/// part, and a domain with an inner dot. Deliverability is not checked.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || email.chars().any(char::is_whitespace) {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

pub struct NewsletterStore<'a, S: Storage> {
    storage: &'a S,
}

impl<'a, S: Storage> NewsletterStore<'a, S> {
    pub fn new(storage: &'a S) -> Self {
        Self { storage }
    }

    /// Record a signup. The address is trimmed before validation; repeated
    /// signups are written as-is.
    pub fn subscribe(&self, email: &str) -> Result<Subscription> {
        let email = email.trim();
        if !is_valid_email(email) {
            return Err(CatalogError::InvalidEmail(email.to_string()));
        }
        let subscription = Subscription::new(email);
        self.storage.create(NEWSLETTER, &subscription)?;
        log::info!("Subscribed {}", subscription.email);
        Ok(subscription)
    }

    pub fn list(&self) -> Result<Vec<Subscription>> {
        self.storage.list(NEWSLETTER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::JsonlStorage;
    use tempfile::TempDir;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("reader@example.com"));
        assert!(is_valid_email("a.b+c@mail.example.org"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("reader"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("reader@example"));
        assert!(!is_valid_email("reader@.com"));
        assert!(!is_valid_email("reader@example."));
        assert!(!is_valid_email("a@b@c.com"));
        assert!(!is_valid_email("re ader@example.com"));
    }

    #[test]
    fn test_subscribe_persists() {
        let temp_dir = TempDir::new().unwrap();
        let storage = JsonlStorage::new(temp_dir.path()).unwrap();
        let store = NewsletterStore::new(&storage);

        let sub = store.subscribe("  reader@example.com ").unwrap();
        assert_eq!(sub.email, "reader@example.com");

        let all = store.list().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, sub.id);
    }

    #[test]
    fn test_subscribe_rejects_invalid() {
        let temp_dir = TempDir::new().unwrap();
        let storage = JsonlStorage::new(temp_dir.path()).unwrap();
        let store = NewsletterStore::new(&storage);

        let result = store.subscribe("not-an-email");
        assert!(matches!(result, Err(CatalogError::InvalidEmail(_))));
        assert!(store.list().unwrap().is_empty());
    }
}
