//! CLI context - bundles settings and parsed flags.

use super::{CliFlags, prompts};
use crate::error::Result;
use crate::pass::{self, GenerationRequest};
use crate::settings::Settings;

/// Application context for one invocation.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
}

impl Context {
    /// Create a new context by parsing command-line arguments.
    pub fn new(args: &[String]) -> Result<Self> {
        let flags = super::parse(args)?;
        Ok(Self {
            settings: Settings::default(),
            flags,
        })
    }

    /// Run CLI: info flags short-circuit, otherwise print one password.
    pub fn run(&mut self) -> Result<()> {
        if self.handle_info_flags() {
            return Ok(());
        }
        self.apply_flags();
        self.generate_output()
    }

    /// Returns true when an info flag was handled and nothing else should run.
    fn handle_info_flags(&self) -> bool {
        if self.flags.help {
            prompts::help();
            return true;
        }
        if self.flags.version {
            prompts::version();
            return true;
        }
        false
    }

    /// Apply CLI flags to settings.
    fn apply_flags(&mut self) {
        if let Some(len) = self.flags.length {
            self.settings.pass_length = len;
        }
        // Any class flag replaces the default set rather than adding to it.
        if self.flags.has_class_flags() {
            self.settings.classes = self.flags.classes;
        }
        self.settings.quiet = self.flags.quiet;
    }

    fn generate_output(&self) -> Result<()> {
        let request = GenerationRequest::try_from(&self.settings)?;
        let password = pass::generate(&request)?;
        prompts::password(&password, self.settings.quiet)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::{CharacterClass, ClassSet};

    fn context(list: &[&str]) -> Context {
        let args: Vec<String> = std::iter::once("passgen")
            .chain(list.iter().copied())
            .map(String::from)
            .collect();
        Context::new(&args).unwrap()
    }

    #[test]
    fn no_class_flags_keeps_defaults() {
        let mut ctx = context(&["--length", "20"]);
        ctx.apply_flags();
        assert_eq!(ctx.settings.pass_length, 20);
        assert_eq!(ctx.settings.classes, Settings::default().classes);
    }

    #[test]
    fn class_flags_replace_defaults() {
        let mut ctx = context(&["--special"]);
        ctx.apply_flags();
        assert_eq!(
            ctx.settings.classes,
            ClassSet::from_iter([CharacterClass::Special])
        );
        assert_eq!(ctx.settings.pass_length, 12);
    }

    #[test]
    fn quiet_flag_reaches_settings() {
        let mut ctx = context(&["-q"]);
        ctx.apply_flags();
        assert!(ctx.settings.quiet);
    }
}
