pub mod decorate;
pub mod manager;
pub mod render;
pub mod rules;

pub use crate::domain::model::{Domain, Forward, NewForward};
pub use crate::domain::ports::{ConfigProvider, ForwardBackend};
pub use crate::utils::error::Result;
