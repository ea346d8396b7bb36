//! Merchmock processing: the simulated upload round-trip, the mockup
//! generation pipeline, sample product content generation, and the demo
//! pipeline chaining the two.

pub mod generator;
pub mod pipeline;
pub mod product;
pub mod upload;

pub use generator::{process_product_mockup, MockupGenerator};
pub use pipeline::{run_pipeline, PipelineResult};
pub use product::ProductContentGenerator;
pub use upload::UploadSimulator;
