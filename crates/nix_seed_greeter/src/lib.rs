/* 📖 # How does the greeter fit together?

A `Greeting` owns the subject text. A `MessageTemplate` describes where the subject goes.
The `Greeter` holds both plus a `PalHandle`, renders once per `run()` and writes the line
to stdout through the PAL. `GreeterConfig` supplies the compiled-in defaults.
*/

pub mod config;
pub mod greeter;
pub mod greeting;
pub mod template;

pub use config::{DEFAULT_SUBJECT, DEFAULT_TEMPLATE, GreeterConfig};
pub use greeter::Greeter;
pub use greeting::Greeting;
pub use template::MessageTemplate;
