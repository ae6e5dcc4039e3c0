pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;

pub use application::calculator::{ChangeCalculator, compute, make_change};
pub use error::{ChangeError, Result};
