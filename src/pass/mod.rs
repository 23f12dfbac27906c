//! Password generation.

mod charset;
mod generate;
mod request;

pub use charset::{CharacterClass, ClassSet};
pub use generate::{Password, generate};
pub use request::GenerationRequest;
