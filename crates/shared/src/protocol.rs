/// Path of the crop recommendation endpoint.
pub const RECOMMEND_PATH: &str = "/api/recommend";
/// Path of the PDF report endpoint.
pub const GENERATE_REPORT_PATH: &str = "/api/generate-report";

/// Session storage key holding the last successful result as JSON.
pub const RESULT_SESSION_KEY: &str = "cropRecommendationResult";

/// File name given to downloaded reports.
pub const REPORT_FILE_NAME: &str = "crop_recommendation.pdf";
