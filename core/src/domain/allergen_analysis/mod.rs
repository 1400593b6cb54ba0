pub mod entities;
pub mod parser;
pub mod pipeline;
pub mod ports;
pub mod prompt;
pub mod risk_scorer;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use pipeline::AllergenAnalysisPipeline;
pub use ports::*;
pub use value_objects::*;
