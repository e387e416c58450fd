use nix_seed_base::tracing::{debug, instrument};
use nix_seed_base::{PalHandle, ResultExt, SeedResult};

use crate::config::GreeterConfig;
use crate::greeting::Greeting;
use crate::template::MessageTemplate;

/// Owns a greeting and prints it.
#[derive(Debug)]
pub struct Greeter {
    greeting: Greeting,
    template: MessageTemplate,
    pal: PalHandle,
}

impl Greeter {
    pub fn new(greeting: Greeting, template: MessageTemplate, pal: PalHandle) -> Self {
        Self {
            greeting,
            template,
            pal,
        }
    }

    /// Build a greeter from `config`, parsing its template.
    pub fn from_config(config: &GreeterConfig, pal: PalHandle) -> SeedResult<Self> {
        let template = MessageTemplate::parse(&config.template)
            .context("Failed to load greeting template")?;
        Ok(Self::new(
            Greeting::new(config.subject.as_str()),
            template,
            pal,
        ))
    }

    pub fn greeting(&self) -> &Greeting {
        &self.greeting
    }

    /// Render the greeting without the trailing line break.
    pub fn render(&self) -> SeedResult<String> {
        self.greeting.render(&self.template).with_context(|| {
            format!(
                "Failed to render greeting for '{}'",
                self.greeting.subject()
            )
        })
    }

    /// Render the greeting and write it, followed by a line break, to stdout in a single write.
    #[instrument(skip(self), fields(subject = %self.greeting().subject()))]
    pub fn run(&self) -> SeedResult<()> {
        let mut line = self.render()?;
        debug!(greeting = %line, "rendered greeting");
        line.push('\n');
        self.pal.write_stdout(&line)
    }
}
