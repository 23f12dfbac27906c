//! Validated generation request.

use super::charset::{ClassSet, Pool};
use crate::error::{ArgumentError, Error, Result};
use crate::settings::{DEFAULT_CLASSES, MAX_LEN, Settings};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    length: usize,
    classes: ClassSet,
}

impl GenerationRequest {
    /// An empty class set is replaced with the defaults before validation.
    pub fn new(length: usize, classes: ClassSet) -> Result<Self> {
        if length == 0 || length >= MAX_LEN {
            return Err(ArgumentError::LengthOutOfRange(length as i64).into());
        }

        let classes = if classes.is_empty() {
            ClassSet::from_iter(DEFAULT_CLASSES)
        } else {
            classes
        };

        Ok(Self { length, classes })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn classes(&self) -> ClassSet {
        self.classes
    }

    pub fn pool(&self) -> Result<Pool> {
        Pool::build(self.classes)
    }
}

impl TryFrom<&Settings> for GenerationRequest {
    type Error = Error;

    fn try_from(settings: &Settings) -> Result<Self> {
        Self::new(settings.pass_length, settings.classes)
    }
}
