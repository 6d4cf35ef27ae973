mod attribution;
mod classification;
mod exposure;
mod label;
mod note;
mod route;

pub use attribution::{Contribution, Signal, SizeBucket};
pub use classification::{ClassificationInput, ClassificationResult, DEFAULT_RECENCY_WEIGHT};
pub use exposure::{Direction, ExposureLine};
pub use label::{Label, LabelPreset, UnknownLabel};
pub use note::OperationalNote;
pub use route::Route;
