use super::backend::{Slot, StorageBackend};
use crate::error::{PasteError, Result};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since pastebook is single-threaded.
/// This avoids the overhead of `RwLock` while still allowing the
/// `StorageBackend` trait to use `&self` for all methods.
pub struct MemBackend {
    slots: RefCell<HashMap<Slot, String>>,
    simulate_write_error: RefCell<bool>,
    simulate_read_error: RefCell<bool>,
}

impl Default for MemBackend {
    fn default() -> Self {
        Self {
            slots: RefCell::new(HashMap::new()),
            simulate_write_error: RefCell::new(false),
            simulate_read_error: RefCell::new(false),
        }
    }
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    /// Covers both `write` and `remove`.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Enable read error simulation, e.g. storage disabled by the platform.
    pub fn set_simulate_read_error(&self, simulate: bool) {
        *self.simulate_read_error.borrow_mut() = simulate;
    }

    /// Whether a slot currently holds a value.
    pub fn contains(&self, slot: Slot) -> bool {
        self.slots.borrow().contains_key(&slot)
    }
}

impl StorageBackend for MemBackend {
    fn read(&self, slot: Slot) -> Result<Option<String>> {
        if *self.simulate_read_error.borrow() {
            return Err(PasteError::Storage("Simulated read error".to_string()));
        }
        Ok(self.slots.borrow().get(&slot).cloned())
    }

    fn write(&self, slot: Slot, value: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(PasteError::Storage("Simulated write error".to_string()));
        }
        self.slots.borrow_mut().insert(slot, value.to_string());
        Ok(())
    }

    fn remove(&self, slot: Slot) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(PasteError::Storage("Simulated write error".to_string()));
        }
        self.slots.borrow_mut().remove(&slot);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slots_are_independent() {
        let backend = MemBackend::new();
        backend.write(Slot::Pastes, "[]").unwrap();
        backend.write(Slot::CurrentUser, "u1").unwrap();

        backend.remove(Slot::Pastes).unwrap();
        assert_eq!(backend.read(Slot::Pastes).unwrap(), None);
        assert_eq!(backend.read(Slot::CurrentUser).unwrap().as_deref(), Some("u1"));
    }

    #[test]
    fn test_remove_absent_slot_is_ok() {
        let backend = MemBackend::new();
        assert!(backend.remove(Slot::Pastes).is_ok());
        assert!(!backend.contains(Slot::Pastes));
    }

    #[test]
    fn test_simulated_write_error_leaves_value() {
        let backend = MemBackend::new();
        backend.write(Slot::Pastes, "old").unwrap();
        backend.set_simulate_write_error(true);
        assert!(backend.write(Slot::Pastes, "new").is_err());
        assert!(backend.remove(Slot::Pastes).is_err());
        assert_eq!(backend.read(Slot::Pastes).unwrap().as_deref(), Some("old"));
    }
}
