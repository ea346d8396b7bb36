pub mod mockup;
pub mod product;
pub mod template;
pub mod upload;

pub use mockup::{
    MockupExtra, MockupResponse, MockupResult, MockupSummary, Placement,
};
pub use product::ProductData;
pub use template::{Dimensions, OverlayArea, ProductType, Template};
pub use upload::UploadResponse;
