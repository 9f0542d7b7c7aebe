use std::{error::Error, fmt};

/// Returned when a write would give a key or a value a second partner.
///
/// The map is left untouched whenever this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionError {
    /// The key is already paired on its own side.
    Key,
    /// The value is already paired on the opposite side.
    Value,
}

impl Error for CollisionError {}

impl fmt::Display for CollisionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CollisionError::Key => write!(f, "key or value exists: key is already paired"),
            CollisionError::Value => write!(f, "key or value exists: value is already paired"),
        }
    }
}
