//! Logical keys and the query the simulation uses to read them.

use std::collections::HashSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LogicalKey {
    Left,
    Right,
    Fire,
}

impl LogicalKey {
    pub const ALL: [LogicalKey; 3] = [LogicalKey::Left, LogicalKey::Right, LogicalKey::Fire];

    pub fn name(self) -> &'static str {
        match self {
            LogicalKey::Left => "left",
            LogicalKey::Right => "right",
            LogicalKey::Fire => " ",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }
}

/// Point-in-time view of which keys are held.
pub trait KeyInput {
    fn is_key_pressed(&self, key: LogicalKey) -> bool;
}

/// Set of currently held keys, refreshed by the driver every frame.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeldKeys {
    held: HashSet<LogicalKey>,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(keys: &[LogicalKey]) -> Self {
        HeldKeys {
            held: keys.iter().copied().collect(),
        }
    }

    pub fn set(&mut self, key: LogicalKey, held: bool) {
        if held {
            self.held.insert(key);
        } else {
            self.held.remove(&key);
        }
    }

    pub fn press(&mut self, key: LogicalKey) {
        self.set(key, true);
    }

    pub fn release(&mut self, key: LogicalKey) {
        self.set(key, false);
    }

    pub fn clear(&mut self) {
        self.held.clear();
    }
}

impl KeyInput for HeldKeys {
    fn is_key_pressed(&self, key: LogicalKey) -> bool {
        self.held.contains(&key)
    }
}
