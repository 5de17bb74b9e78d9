//! Random Source Adapters.
//!
//! - `SystemRandom` - `rand`-backed source, entropy or fixed seed
//! - `ScriptedRandom` - replays a fixed sequence of draws for tests

mod scripted_random;
mod system_random;

pub use scripted_random::ScriptedRandom;
pub use system_random::SystemRandom;
