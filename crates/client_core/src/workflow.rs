//! Form submission, result caching and report download.

use std::{fs, path::PathBuf, sync::Arc};

use shared::{
    domain::RecommendationResult,
    protocol::{REPORT_FILE_NAME, RESULT_SESSION_KEY},
};
use tracing::{info, warn};

use crate::{
    api::RecommendationApi,
    error::ClientError,
    form::{read_request, FormInputs},
    render::ResultView,
    session::SessionStore,
};

/// Label shown on the submit control while a request is in flight.
pub const BUSY_LABEL: &str = "Analyzing...";

/// Submit button plus busy indicator.
pub trait SubmitControl: Send {
    fn label(&self) -> String;
    fn set_label(&mut self, label: &str);
    fn set_disabled(&mut self, disabled: bool);
    fn set_busy_visible(&mut self, visible: bool);
}

/// Blocking, user-visible error surface.
pub trait Alerts: Send {
    fn alert(&mut self, message: &str);
}

/// Receives downloaded files.
pub trait DownloadSink: Send {
    fn save(&mut self, file_name: &str, bytes: &[u8]) -> Result<(), ClientError>;
}

/// Saves downloads into a directory, replacing same-named files.
#[derive(Debug, Clone)]
pub struct FileDownloadSink {
    dir: PathBuf,
}

impl FileDownloadSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

}

impl DownloadSink for FileDownloadSink {
    fn save(&mut self, file_name: &str, bytes: &[u8]) -> Result<(), ClientError> {
        fs::create_dir_all(&self.dir).map_err(|err| {
            ClientError::Download(format!("cannot create '{}': {err}", self.dir.display()))
        })?;
        let path = self.dir.join(file_name);
        fs::write(&path, bytes).map_err(|err| {
            ClientError::Download(format!("cannot write '{}': {err}", path.display()))
        })?;
        info!(path = %path.display(), size_bytes = bytes.len(), "download: saved");
        Ok(())
    }
}

/// Page elements the workflow talks to.
pub struct PageBindings {
    /// `None` when the page has no recommendation form.
    pub form: Option<Box<dyn FormInputs>>,
    pub submit: Box<dyn SubmitControl>,
    pub view: Box<dyn ResultView>,
    pub alerts: Box<dyn Alerts>,
    pub downloads: Box<dyn DownloadSink>,
}

#[derive(Debug)]
pub enum SubmitOutcome {
    /// No form on the page; nothing happened.
    Detached,
    Rendered(RecommendationResult),
    /// The failure was surfaced as an alert.
    Failed(ClientError),
}

#[derive(Debug)]
pub enum ReportOutcome {
    Saved { file_name: &'static str, size_bytes: usize },
    /// The failure was surfaced as an alert.
    Failed(ClientError),
}

/// One recommendation form and its result region, created at page load.
///
/// `submit` borrows the workflow mutably, so at most one request is in
/// flight per instance.
pub struct FormWorkflow {
    api: Arc<dyn RecommendationApi>,
    session: Arc<dyn SessionStore>,
    page: PageBindings,
}

impl FormWorkflow {
    pub fn new(
        api: Arc<dyn RecommendationApi>,
        session: Arc<dyn SessionStore>,
        page: PageBindings,
    ) -> Self {
        Self { api, session, page }
    }

    pub fn is_attached(&self) -> bool {
        self.page.form.is_some()
    }

    /// Handles one form submission.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let Some(form) = self.page.form.as_deref() else {
            return SubmitOutcome::Detached;
        };

        let submit = self.page.submit.as_mut();
        let original_label = submit.label();
        submit.set_label(BUSY_LABEL);
        submit.set_disabled(true);
        submit.set_busy_visible(true);

        let outcome = submit_form(
            form,
            self.api.as_ref(),
            self.session.as_ref(),
            self.page.view.as_mut(),
        )
        .await;

        let submit = self.page.submit.as_mut();
        submit.set_label(&original_label);
        submit.set_disabled(false);
        submit.set_busy_visible(false);

        match outcome {
            Ok(result) => SubmitOutcome::Rendered(result),
            Err(err) => {
                warn!(error = %err, "workflow: submission failed");
                self.page.alerts.alert(&format!("Error: {err}"));
                SubmitOutcome::Failed(err)
            }
        }
    }

    /// Downloads a PDF report for the cached result.
    pub async fn generate_report(&mut self) -> ReportOutcome {
        match download_report(
            self.api.as_ref(),
            self.session.as_ref(),
            self.page.downloads.as_mut(),
        )
        .await
        {
            Ok(size_bytes) => ReportOutcome::Saved {
                file_name: REPORT_FILE_NAME,
                size_bytes,
            },
            Err(err) => {
                warn!(error = %err, "workflow: report failed");
                let message = match err {
                    ClientError::MissingResult => err.to_string(),
                    _ => format!("PDF generation failed: {err}"),
                };
                self.page.alerts.alert(&message);
                ReportOutcome::Failed(err)
            }
        }
    }
}

async fn submit_form(
    form: &dyn FormInputs,
    api: &dyn RecommendationApi,
    session: &dyn SessionStore,
    view: &mut dyn ResultView,
) -> Result<RecommendationResult, ClientError> {
    let request = read_request(form)?;
    let recommendation = api.recommend(&request).await?;

    // Cache before display: a failed write must not leave a result on screen.
    session.set_item(RESULT_SESSION_KEY, &recommendation.body)?;
    info!(crop = %recommendation.result.crop, "workflow: result cached");

    view.display(&recommendation.result)?;
    Ok(recommendation.result)
}

async fn download_report(
    api: &dyn RecommendationApi,
    session: &dyn SessionStore,
    downloads: &mut dyn DownloadSink,
) -> Result<usize, ClientError> {
    let cached = session
        .get_item(RESULT_SESSION_KEY)?
        .ok_or(ClientError::MissingResult)?;
    let bytes = api.generate_report(&cached).await?;
    downloads.save(REPORT_FILE_NAME, &bytes)?;
    Ok(bytes.len())
}

/// The secondary page that shows the cached result once on load.
pub struct ResultPage {
    session: Arc<dyn SessionStore>,
    view: Box<dyn ResultView>,
}

impl ResultPage {
    pub fn new(session: Arc<dyn SessionStore>, view: Box<dyn ResultView>) -> Self {
        Self { session, view }
    }

    /// Renders the cached result, if any, and returns it.
    pub fn load(&mut self) -> Result<Option<RecommendationResult>, ClientError> {
        let Some(cached) = self.session.get_item(RESULT_SESSION_KEY)? else {
            return Ok(None);
        };
        let result: RecommendationResult = serde_json::from_str(&cached)
            .map_err(|err| ClientError::Storage(format!("cached result unreadable: {err}")))?;
        self.view.display(&result)?;
        Ok(Some(result))
    }
}

#[cfg(test)]
#[path = "tests/workflow_tests.rs"]
mod tests;
