//! Durable bearer-credential slot.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store is the only writer; the HTTP adapter reads the slot per
//! request to build the `Authorization` header. The in-memory signal mirrors
//! one durable localStorage key so the credential survives process restarts.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use leptos::prelude::*;

/// The fixed localStorage key holding the credential.
const TOKEN_KEY: &str = "token";

/// Handle to the credential slot. Cheap to copy; all copies share one slot.
#[derive(Clone, Copy)]
pub struct Credentials {
    token: RwSignal<Option<String>>,
}

impl Credentials {
    /// Create an empty slot. The durable value, if any, is only read when
    /// `restore_persisted` runs at boot.
    pub fn new() -> Self {
        Self { token: RwSignal::new(None) }
    }

    /// The credential currently in memory, if any.
    pub fn current(&self) -> Option<String> {
        self.token.get_untracked()
    }

    /// Load the durable credential into memory and return it. In a native
    /// build there is no durable layer, so the in-memory value stands in.
    pub fn restore_persisted(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let stored = web_sys::window()
                .and_then(|w| w.local_storage().ok().flatten())
                .and_then(|storage| storage.get_item(TOKEN_KEY).ok().flatten());
            self.token.set(stored.clone());
            stored
        }
        #[cfg(not(feature = "csr"))]
        {
            self.current()
        }
    }

    /// Store a credential in memory and in the durable slot.
    pub fn store(&self, token: &str) {
        self.token.set(Some(token.to_owned()));
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
            {
                let _ = storage.set_item(TOKEN_KEY, token);
            }
        }
    }

    /// Remove the credential from memory and from the durable slot.
    pub fn clear(&self) {
        self.token.set(None);
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
            {
                let _ = storage.remove_item(TOKEN_KEY);
            }
        }
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::new()
    }
}
