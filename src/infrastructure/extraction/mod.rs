mod mock_extraction_starter;
mod tracking_extraction_starter;

pub use mock_extraction_starter::MockExtractionStarter;
pub use tracking_extraction_starter::TrackingExtractionStarter;
