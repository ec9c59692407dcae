pub mod compose;
pub mod directory;
pub mod engine;
pub mod input;
pub mod pipeline;
pub mod qr;
pub mod vcard;

pub use crate::domain::model::{Record, RenderJob, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
