//! Cloud image labeling
//!
//! Request/response types for the Vision `images:annotate` endpoint, a
//! blocking client, and the text shown for the returned labels.

mod client;
mod display;
pub mod error;
pub mod types;


pub use client::{DEFAULT_ENDPOINT, DEFAULT_MAX_RESULTS, LabelService, VisionApiClient, VisionConfig, VisionConfigBuilder};
pub use display::{DEFAULT_WAITING_TEXT, LabelDisplay, LabelState, format_labels};
pub use error::{LabelError, Result};
pub use types::{AnnotateRequestBody, AnnotateResponseBody, LabelAnnotation};
