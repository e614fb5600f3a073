//! Bearer-token session, persisted in browser local storage so a reload
//! keeps the user signed in.

const TOKEN_KEY: &str = "token";

/// Authenticated session state. Constructed once at startup and handed to the
/// API client; absence of a token means "logged out".
#[derive(Clone, PartialEq, Default, Debug)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    /// Restore whatever token a previous visit left behind.
    pub fn load() -> Self {
        let mut token = None;
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(Some(value)) = storage.get_item(TOKEN_KEY) {
                    if !value.is_empty() {
                        token = Some(value);
                    }
                }
            }
        }
        Session { token }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn store(&mut self, token: String) {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(TOKEN_KEY, &token);
            }
        }
        self.token = Some(token);
    }

    pub fn clear(&mut self) {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(TOKEN_KEY);
            }
        }
        self.token = None;
    }
}
