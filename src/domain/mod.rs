mod account;
mod money;

pub use account::*;
pub use money::*;
