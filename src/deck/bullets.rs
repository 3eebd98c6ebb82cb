//! Bullet items.
//!
//! Callers hand over bullets in whichever shape is convenient: a plain
//! string, a `(text, level)` pair, or a mapping-like [`BulletEntry`] whose
//! fields are both optional. Everything is resolved into a [`BulletItem`]
//! once, before rendering.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// One bullet: its text and outline level (0 is top level).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BulletItem {
    pub text: String,
    pub level: u8,
}

impl BulletItem {
    pub fn new(text: impl Into<String>, level: u8) -> Self {
        Self {
            text: text.into(),
            level,
        }
    }

    /// Stringify any displayable value into a top-level bullet.
    pub fn coerce<T: Display>(value: T) -> Self {
        Self::new(value.to_string(), 0)
    }
}

/// Mapping-like bullet input. Missing text is empty; missing level is 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BulletEntry {
    pub text: Option<String>,
    pub level: Option<u8>,
}

impl From<&str> for BulletItem {
    fn from(text: &str) -> Self {
        Self::new(text, 0)
    }
}

impl From<String> for BulletItem {
    fn from(text: String) -> Self {
        Self::new(text, 0)
    }
}

impl From<(&str, u8)> for BulletItem {
    fn from((text, level): (&str, u8)) -> Self {
        Self::new(text, level)
    }
}

impl From<(String, u8)> for BulletItem {
    fn from((text, level): (String, u8)) -> Self {
        Self::new(text, level)
    }
}

impl From<BulletEntry> for BulletItem {
    fn from(entry: BulletEntry) -> Self {
        Self::new(entry.text.unwrap_or_default(), entry.level.unwrap_or(0))
    }
}

/// Build a `Vec<BulletItem>` from mixed item shapes.
///
/// ```
/// use pitchdeck::bullets;
///
/// let items = bullets!["核心价值：", ("速度", 1)];
/// assert_eq!(items[1].level, 1);
/// ```
#[macro_export]
macro_rules! bullets {
    ($($item:expr),* $(,)?) => {
        vec![$($crate::deck::BulletItem::from($item)),*]
    };
}
