// Durable key-value slot holding the serialized progression record.
use std::cell::RefCell;
use std::rc::Rc;

use crate::error::ProgressionError;

/// Key of the persisted progression record in local storage.
pub const STORAGE_KEY: &str = "portfolio_game_state";

pub trait StateSlot {
    /// `Ok(None)` when nothing has been stored yet.
    fn read(&self) -> Result<Option<String>, ProgressionError>;
    fn write(&self, raw: &str) -> Result<(), ProgressionError>;
    fn remove(&self) -> Result<(), ProgressionError>;
}

/// Browser `localStorage` entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalStorageSlot {
    key: String,
}

impl LocalStorageSlot {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// Whether the current browser context exposes local storage at all.
    pub fn available() -> bool {
        matches!(web_sys::window().map(|w| w.local_storage()), Some(Ok(Some(_))))
    }

    fn storage(&self) -> Result<web_sys::Storage, ProgressionError> {
        let win = web_sys::window()
            .ok_or_else(|| ProgressionError::Storage("no window".to_string()))?;
        match win.local_storage() {
            Ok(Some(store)) => Ok(store),
            Ok(None) => Err(ProgressionError::Storage(
                "localStorage unavailable".to_string(),
            )),
            Err(e) => Err(ProgressionError::Storage(format!("{:?}", e))),
        }
    }
}

impl Default for LocalStorageSlot {
    fn default() -> Self {
        Self::new(STORAGE_KEY)
    }
}

impl StateSlot for LocalStorageSlot {
    fn read(&self) -> Result<Option<String>, ProgressionError> {
        self.storage()?
            .get_item(&self.key)
            .map_err(|e| ProgressionError::Storage(format!("{:?}", e)))
    }

    fn write(&self, raw: &str) -> Result<(), ProgressionError> {
        self.storage()?
            .set_item(&self.key, raw)
            .map_err(|e| ProgressionError::Storage(format!("{:?}", e)))
    }

    fn remove(&self) -> Result<(), ProgressionError> {
        self.storage()?
            .remove_item(&self.key)
            .map_err(|e| ProgressionError::Storage(format!("{:?}", e)))
    }
}

/// In-memory slot. Clones share the same cell, so a second store built from
/// a clone sees what the first one wrote (like a page reload).
#[derive(Clone, Debug, Default)]
pub struct MemorySlot {
    cell: Rc<RefCell<Option<String>>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_raw(raw: &str) -> Self {
        Self {
            cell: Rc::new(RefCell::new(Some(raw.to_string()))),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.cell.borrow().clone()
    }
}

impl PartialEq for MemorySlot {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.cell, &other.cell)
    }
}

impl StateSlot for MemorySlot {
    fn read(&self) -> Result<Option<String>, ProgressionError> {
        Ok(self.cell.borrow().clone())
    }

    fn write(&self, raw: &str) -> Result<(), ProgressionError> {
        *self.cell.borrow_mut() = Some(raw.to_string());
        Ok(())
    }

    fn remove(&self) -> Result<(), ProgressionError> {
        *self.cell.borrow_mut() = None;
        Ok(())
    }
}

/// Local storage when the browser offers it, memory otherwise.
#[derive(Clone, Debug, PartialEq)]
pub enum BrowserSlot {
    Local(LocalStorageSlot),
    Memory(MemorySlot),
}

impl BrowserSlot {
    pub fn detect() -> Self {
        if LocalStorageSlot::available() {
            BrowserSlot::Local(LocalStorageSlot::default())
        } else {
            BrowserSlot::Memory(MemorySlot::new())
        }
    }
}

impl StateSlot for BrowserSlot {
    fn read(&self) -> Result<Option<String>, ProgressionError> {
        match self {
            BrowserSlot::Local(s) => s.read(),
            BrowserSlot::Memory(s) => s.read(),
        }
    }

    fn write(&self, raw: &str) -> Result<(), ProgressionError> {
        match self {
            BrowserSlot::Local(s) => s.write(raw),
            BrowserSlot::Memory(s) => s.write(raw),
        }
    }

    fn remove(&self) -> Result<(), ProgressionError> {
        match self {
            BrowserSlot::Local(s) => s.remove(),
            BrowserSlot::Memory(s) => s.remove(),
        }
    }
}
