//! Persistent session store.
//!
//! The session (token, role, username) lives in browser local storage so it
//! survives page reloads. The store is an explicit object injected into the
//! API client and the view layer; nothing reads the storage keys directly.
//!
//! No expiry is tracked client-side. A stale token is only discovered when
//! the API rejects it, at which point the auth guard clears the store.

use enrollview_shared::{
    Role, Session, STORAGE_ROLE_KEY, STORAGE_TOKEN_KEY, STORAGE_USERNAME_KEY,
};

use crate::web::LocalStorage;


/// Key/value backend behind the session store. Production uses browser
/// localStorage; tests use an in-memory map.
pub trait SessionBackend {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

#[derive(Debug, Clone, Default)]
pub struct BrowserStorage;

impl SessionBackend for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        LocalStorage::get(key)
    }

    fn write(&self, key: &str, value: &str) {
        LocalStorage::set(key, value);
    }

    fn remove(&self, key: &str) {
        LocalStorage::delete(key);
    }
}

#[derive(Debug, Clone)]
pub struct SessionStore<B: SessionBackend> {
    backend: B,
}

impl<B: SessionBackend> SessionStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// The current session, or `None` unless all three parts are present
    /// and the stored role is recognized. A partial write (which would
    /// violate the set-together invariant) therefore reads as "no
    /// session".
    pub fn get(&self) -> Option<Session> {
        Session::from_parts(
            self.backend.read(STORAGE_TOKEN_KEY),
            self.backend.read(STORAGE_ROLE_KEY),
            self.backend.read(STORAGE_USERNAME_KEY),
        )
    }

    /// The bearer token of the current session, if any.
    pub fn token(&self) -> Option<String> {
        self.get().map(|s| s.token)
    }

    /// Persists a full session. All three keys are written together.
    pub fn set(&self, token: &str, role: Role, username: &str) {
        self.backend.write(STORAGE_TOKEN_KEY, token);
        self.backend.write(STORAGE_ROLE_KEY, role.as_str());
        self.backend.write(STORAGE_USERNAME_KEY, username);
    }

    /// Removes all three keys.
    pub fn clear(&self) {
        self.backend.remove(STORAGE_TOKEN_KEY);
        self.backend.remove(STORAGE_ROLE_KEY);
        self.backend.remove(STORAGE_USERNAME_KEY);
    }
}

#[cfg(test)]
pub use memory::MemoryStorage;

#[cfg(test)]
mod memory {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    use super::SessionBackend;

    /// In-memory backend for host tests. Clones share the same map, like
    /// two handles onto the same localStorage.
    #[derive(Clone, Default)]
    pub struct MemoryStorage {
        map: Rc<RefCell<HashMap<String, String>>>,
    }

    impl MemoryStorage {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn len(&self) -> usize {
            self.map.borrow().len()
        }
    }

    impl SessionBackend for MemoryStorage {
        fn read(&self, key: &str) -> Option<String> {
            self.map.borrow().get(key).cloned()
        }

        fn write(&self, key: &str, value: &str) {
            self.map
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
        }

        fn remove(&self, key: &str) {
            self.map.borrow_mut().remove(key);
        }
    }
}
