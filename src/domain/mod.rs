mod committee;
mod member;
mod money;

pub use committee::*;
pub use member::*;
pub use money::*;
