//! Client side of the crop recommendation service.
//!
//! [`FormWorkflow`] drives one recommendation form: it reads the inputs,
//! calls the service through a [`RecommendationApi`], shows the result
//! through a [`ResultView`] and caches it in a [`SessionStore`] so that a
//! [`ResultPage`] or a later report download can reuse it.

pub mod api;
pub mod error;
pub mod form;
pub mod render;
pub mod session;
pub mod workflow;

pub use api::{HttpRecommendationApi, Recommendation, RecommendationApi};
pub use error::ClientError;
pub use form::{FormInputs, MapFormInputs};
pub use render::{HtmlView, Layout, ResultView, TextView};
pub use session::{FileSessionStore, MemorySessionStore, SessionStore};
pub use workflow::{
    Alerts, DownloadSink, FileDownloadSink, FormWorkflow, PageBindings, ReportOutcome,
    ResultPage, SubmitControl, SubmitOutcome,
};

#[cfg(test)]
#[path = "tests/mock_service.rs"]
mod mock_service;
