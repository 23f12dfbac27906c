//! Password generation settings.

use crate::pass::{CharacterClass, ClassSet};

/// Exclusive upper bound on password length.
pub const MAX_LEN: usize = 128;
pub const DEFAULT_LENGTH: usize = 12;

/// Classes used when no class flag is given. Special is never a default.
pub const DEFAULT_CLASSES: [CharacterClass; 3] = [
    CharacterClass::Upper,
    CharacterClass::Lower,
    CharacterClass::Digit,
];

#[derive(Debug, Clone)]
pub struct Settings {
    pub pass_length: usize,
    pub classes: ClassSet,
    pub quiet: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: DEFAULT_LENGTH,
            classes: ClassSet::from_iter(DEFAULT_CLASSES),
            quiet: false,
        }
    }
}
