/* 📖 # Why is the configuration compiled in?

The greeter reads nothing from its environment: no files, no flags, no variables.
GreeterConfig still exists so the two literals live in one place and tests can build
greeters with other subjects and templates.
*/

/// Subject greeted by the `nix-seed` binary.
pub const DEFAULT_SUBJECT: &str = "Nix Seed";
/// Template the subject is rendered into.
pub const DEFAULT_TEMPLATE: &str = "Hello from %1%!";

/// Settings a `Greeter` is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreeterConfig {
    /// Text substituted for `%1%`.
    pub subject: String,
    /// Message template, see `MessageTemplate` for the syntax.
    pub template: String,
}

impl Default for GreeterConfig {
    fn default() -> Self {
        Self {
            subject: DEFAULT_SUBJECT.to_string(),
            template: DEFAULT_TEMPLATE.to_string(),
        }
    }
}
