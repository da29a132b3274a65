pub mod binary_type;
pub mod evaluation;
pub mod roc;
pub mod scores;
