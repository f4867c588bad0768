//! ClassifyNumberHandler - Query handler for number classification.

use tracing::debug;

use crate::domain::classification::{NumberClassification, NumberClassifier};

#[derive(Debug, Clone, Copy)]
pub struct ClassifyNumberQuery {
    pub value: i64,
}

#[derive(Default)]
pub struct ClassifyNumberHandler;

impl ClassifyNumberHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, query: ClassifyNumberQuery) -> NumberClassification {
        let classification = NumberClassifier::classify(query.value);
        debug!(
            value = query.value,
            sign = ?classification.sign,
            magnitude = ?classification.magnitude,
            "Classified number"
        );
        classification
    }
}
