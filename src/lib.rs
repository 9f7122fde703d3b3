pub mod image_pipeline;
pub mod logger;
pub mod shot;
pub mod vision;
