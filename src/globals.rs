//! Named session counters shared by every entity.

use std::collections::HashMap;

pub const SCORE: &str = "score";
pub const LIVES_LEFT: &str = "lives_left";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GlobalValue {
    Integer(i64),
    Text(String),
}

impl GlobalValue {
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            GlobalValue::Integer(n) => Some(*n),
            GlobalValue::Text(_) => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Globals {
    values: HashMap<String, GlobalValue>,
}

impl Globals {
    /// `score = 0`, `lives_left = lives`.
    pub fn new(lives: i64) -> Self {
        let mut globals = Globals::default();
        globals.set_integer(SCORE, 0);
        globals.set_integer(LIVES_LEFT, lives);
        globals
    }

    pub fn get(&self, name: &str) -> Option<&GlobalValue> {
        self.values.get(name)
    }

    pub fn set(&mut self, name: &str, value: GlobalValue) {
        self.values.insert(name.to_string(), value);
    }

    /// Integer value of `name`; missing or textual entries read as zero.
    pub fn integer(&self, name: &str) -> i64 {
        self.get(name).and_then(GlobalValue::as_integer).unwrap_or(0)
    }

    pub fn set_integer(&mut self, name: &str, value: i64) {
        self.set(name, GlobalValue::Integer(value));
    }

    pub fn add(&mut self, name: &str, delta: i64) -> i64 {
        let value = self.integer(name) + delta;
        self.set_integer(name, value);
        value
    }

    pub fn score(&self) -> i64 {
        self.integer(SCORE)
    }

    pub fn lives_left(&self) -> i64 {
        self.integer(LIVES_LEFT)
    }

    /// Spend one life if any remain. Returns whether one was spent.
    pub fn take_life(&mut self) -> bool {
        let lives = self.lives_left();
        if lives <= 0 {
            return false;
        }
        self.set_integer(LIVES_LEFT, lives - 1);
        true
    }
}
