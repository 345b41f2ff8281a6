pub mod clock;
pub mod funcmap;
pub mod math;
pub mod number;
pub mod pagination;
pub mod text;
pub mod time;
pub mod values;

pub use crate::domain::model::Pagination;
pub use crate::domain::ports::{Clock, IsZero, Length, Sequence};
pub use crate::utils::error::Result;
