use crate::pass::ClassSet;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub verbose: bool,
    pub length: Option<usize>,
    pub classes: ClassSet,
}

impl CliFlags {
    pub fn has_class_flags(&self) -> bool {
        !self.classes.is_empty()
    }
}
