/* 📖 # Why does the CLI take no arguments?

`nix-seed` does one thing: print `Hello from Nix Seed!` and exit. There is nothing to
configure, so nothing is parsed. Arguments, stdin and environment variables are ignored;
only `RUST_LOG` is read, and it only changes what ends up on stderr.

Exit codes:
- 0: Greeting written
- 1: The greeting could not be rendered or written to stdout
*/

use std::process;

use nix_seed_base::tracing::init_tracing;
use nix_seed_base::{PalHandle, RealPal, SeedResult};
use nix_seed_greeter::{Greeter, GreeterConfig};

fn run() -> SeedResult<()> {
    let pal = PalHandle::new(RealPal::new());
    let greeter = Greeter::from_config(&GreeterConfig::default(), pal)?;
    greeter.run()
}

fn main() {
    if let Err(e) = init_tracing() {
        eprintln!("Warning: {}", e);
    }

    if let Err(e) = run() {
        eprintln!("Error: {:?}", e);
        process::exit(1);
    }
}
