mod convert;
mod core;
mod descriptor;
mod values;

pub use self::core::*;
pub use convert::*;
pub use descriptor::*;
pub use values::*;
