//! Character classes and pool building.

use crate::error::{Error, Result};

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SPECIAL: &str = "!@#$%^&*()-_=+[]{};',.<>?/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterClass {
    Upper,
    Lower,
    Digit,
    Special,
}

impl CharacterClass {
    /// Pool concatenation order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Upper,
        CharacterClass::Lower,
        CharacterClass::Digit,
        CharacterClass::Special,
    ];

    pub fn alphabet(self) -> &'static str {
        match self {
            CharacterClass::Upper => UPPERCASE,
            CharacterClass::Lower => LOWERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Special => SPECIAL,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CharacterClass::Upper => "upper",
            CharacterClass::Lower => "lower",
            CharacterClass::Digit => "digits",
            CharacterClass::Special => "special",
        }
    }

    fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Set of enabled classes. Inserting twice is a no-op.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassSet(u8);

impl ClassSet {
    pub fn empty() -> Self {
        Self(0)
    }

    pub fn insert(&mut self, class: CharacterClass) {
        self.0 |= class.bit();
    }

    pub fn contains(self, class: CharacterClass) -> bool {
        self.0 & class.bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Enabled classes in pool order.
    pub fn iter(self) -> impl Iterator<Item = CharacterClass> {
        CharacterClass::ALL
            .into_iter()
            .filter(move |class| self.contains(*class))
    }
}

impl FromIterator<CharacterClass> for ClassSet {
    fn from_iter<I: IntoIterator<Item = CharacterClass>>(iter: I) -> Self {
        let mut set = ClassSet::empty();
        for class in iter {
            set.insert(class);
        }
        set
    }
}

/// Characters eligible for sampling. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool(Vec<u8>);

impl Pool {
    /// Concatenate the alphabets of `classes` in Upper, Lower, Digit, Special order.
    pub fn build(classes: ClassSet) -> Result<Self> {
        let capacity = classes.iter().map(|c| c.alphabet().len()).sum();
        let mut chars = Vec::with_capacity(capacity);
        for class in classes.iter() {
            chars.extend_from_slice(class.alphabet().as_bytes());
        }

        if chars.is_empty() {
            return Err(Error::EmptyPool);
        }
        Ok(Self(chars))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[cfg(test)]
    pub fn contains(&self, c: char) -> bool {
        c.is_ascii() && self.0.contains(&(c as u8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabets_are_disjoint() {
        for (i, a) in CharacterClass::ALL.iter().enumerate() {
            for b in &CharacterClass::ALL[i + 1..] {
                assert!(!a.alphabet().chars().any(|c| b.alphabet().contains(c)));
            }
        }
    }

    #[test]
    fn pool_sizes() {
        let all = ClassSet::from_iter(CharacterClass::ALL);
        assert_eq!(Pool::build(all).unwrap().len(), 88);

        let special = ClassSet::from_iter([CharacterClass::Special]);
        assert_eq!(Pool::build(special).unwrap().len(), 26);

        let default = ClassSet::from_iter([
            CharacterClass::Upper,
            CharacterClass::Lower,
            CharacterClass::Digit,
        ]);
        assert_eq!(Pool::build(default).unwrap().len(), 62);
    }

    #[test]
    fn pool_order_ignores_insertion_order() {
        let set = ClassSet::from_iter([CharacterClass::Special, CharacterClass::Digit]);
        let pool = Pool::build(set).unwrap();
        assert_eq!(
            pool.as_bytes(),
            b"0123456789!@#$%^&*()-_=+[]{};',.<>?/".as_slice()
        );
    }

    #[test]
    fn duplicate_insert_is_idempotent() {
        let set = ClassSet::from_iter([CharacterClass::Lower, CharacterClass::Lower]);
        assert_eq!(set.iter().count(), 1);
        assert_eq!(Pool::build(set).unwrap().len(), 26);
    }

    #[test]
    fn empty_set_is_rejected() {
        assert!(matches!(
            Pool::build(ClassSet::empty()),
            Err(Error::EmptyPool)
        ));
    }
}
