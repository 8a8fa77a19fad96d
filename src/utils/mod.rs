//! Various unsorted utilities.

pub use self::interrupt::{Interrupt, NoInterrupt};

mod interrupt;
