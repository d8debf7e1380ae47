pub mod error;
pub mod models;
pub mod types;

pub use error::Error;
pub use models::{Classifier, TextModel};
pub use types::Prediction;

pub type Result<T> = std::result::Result<T, Error>;
