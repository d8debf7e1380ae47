pub mod gemini;
pub mod roboflow;

pub use gemini::GeminiModel;
pub use roboflow::RoboflowClassifier;

pub mod prelude {
    pub use crate::gemini::GeminiModel;
    pub use crate::roboflow::RoboflowClassifier;
    pub use petal_core::{Classifier, Error, Prediction, Result, TextModel};
}
