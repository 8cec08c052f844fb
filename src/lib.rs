pub mod analyzers;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod scores;
pub mod source;
