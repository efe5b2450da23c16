use web_sys::window;

/// localStorage key holding the raw bearer token
pub const TOKEN_KEY: &str = "token";

/// Durable key-value slot for the bearer token.
///
/// `load` never yields a blank token; whitespace-only values read as absent.
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// `window.localStorage`, survives reloads.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTokenStore;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

pub fn usable_token(raw: Option<String>) -> Option<String> {
    raw.filter(|t| !t.trim().is_empty())
}

impl TokenStore for BrowserTokenStore {
    fn load(&self) -> Option<String> {
        usable_token(get_local_storage()?.get_item(TOKEN_KEY).ok()?)
    }

    fn save(&self, token: &str) {
        match get_local_storage() {
            Some(storage) => {
                if storage.set_item(TOKEN_KEY, token).is_err() {
                    log::warn!("failed to persist token");
                }
            }
            None => log::warn!("localStorage unavailable, token kept in memory only"),
        }
    }

    fn clear(&self) {
        match get_local_storage() {
            Some(storage) => {
                if storage.remove_item(TOKEN_KEY).is_err() {
                    log::warn!("failed to remove stored token");
                }
            }
            None => log::warn!("localStorage unavailable, stored token not removed"),
        }
    }
}

/// In-memory store. Clones share the same slot.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    slot: std::rc::Rc<std::cell::RefCell<Option<String>>>,
}

#[cfg(test)]
impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        store.save(token);
        store
    }
}

#[cfg(test)]
impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        usable_token(self.slot.borrow().clone())
    }

    fn save(&self, token: &str) {
        *self.slot.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.slot.borrow_mut() = None;
    }
}
