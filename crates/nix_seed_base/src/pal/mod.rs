/* 📖 # What is the Platform Abstraction Layer?

The PAL is the trait through which the program touches the outside world. Here that is a
single stream: standard output. Routing the write through a trait lets unit tests capture
the exact bytes a greeter produces, and inject write failures, without spawning a process.
*/

pub mod mock;
pub mod real_pal;
mod traits;

pub use mock::MockPal;
pub use real_pal::RealPal;
pub use traits::{Pal, PalHandle};
