use petal_core::{Classifier, TextModel};
use std::sync::Arc;

pub struct AppState {
    pub classifier: Arc<dyn Classifier>,
    pub text_model: Arc<dyn TextModel>,
}
