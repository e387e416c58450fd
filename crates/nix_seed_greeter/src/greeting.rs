use nix_seed_base::SeedResult;

use crate::template::MessageTemplate;

/// The subject of a greeting.
///
/// The subject is heap allocated once and owned exclusively by its `Greeting`.
/// It is never reassigned, so it stays valid for as long as the greeting lives.
#[derive(Debug, PartialEq, Eq)]
pub struct Greeting {
    subject: Box<str>,
}

impl Greeting {
    pub fn new(subject: impl Into<Box<str>>) -> Self {
        Self {
            subject: subject.into(),
        }
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Render the greeting through `template`, which must take exactly one argument.
    pub fn render(&self, template: &MessageTemplate) -> SeedResult<String> {
        template.render(&[self.subject()])
    }
}
