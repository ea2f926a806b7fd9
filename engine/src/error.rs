pub use core::error::{ReplayError, Result};
