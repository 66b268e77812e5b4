use crate::error::Result;
use std::rc::Rc;

/// A named entry in durable client storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// JSON array holding the whole paste collection.
    Pastes,
    /// The raw anonymous identity string.
    CurrentUser,
}

impl Slot {
    pub fn key(&self) -> &'static str {
        match self {
            Slot::Pastes => "pastes",
            Slot::CurrentUser => "currentUser",
        }
    }
}

/// Abstract interface for raw storage I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while `PasteStore` and the commands handle the "what".
///
/// Methods take `&self`: pastebook is single-threaded, so backends that hold
/// state use interior mutability and several handles may share one backend.
pub trait StorageBackend {
    /// Read a slot. Returns Ok(None) when the slot has never been written or was removed.
    fn read(&self, slot: Slot) -> Result<Option<String>>;

    /// Replace a slot's value.
    /// MUST be atomic: a reader sees either the old or the new value, never a mix.
    fn write(&self, slot: Slot, value: &str) -> Result<()>;

    /// Remove a slot entirely. Removing an absent slot is not an error.
    fn remove(&self, slot: Slot) -> Result<()>;
}

impl<B: StorageBackend + ?Sized> StorageBackend for Rc<B> {
    fn read(&self, slot: Slot) -> Result<Option<String>> {
        (**self).read(slot)
    }

    fn write(&self, slot: Slot, value: &str) -> Result<()> {
        (**self).write(slot, value)
    }

    fn remove(&self, slot: Slot) -> Result<()> {
        (**self).remove(slot)
    }
}

impl<B: StorageBackend + ?Sized> StorageBackend for &B {
    fn read(&self, slot: Slot) -> Result<Option<String>> {
        (**self).read(slot)
    }

    fn write(&self, slot: Slot, value: &str) -> Result<()> {
        (**self).write(slot, value)
    }

    fn remove(&self, slot: Slot) -> Result<()> {
        (**self).remove(slot)
    }
}
