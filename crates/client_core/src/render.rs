//! Result fragments and the views that show them.
//!
//! Service-provided text is inserted as-is. A hostile service can inject
//! markup into the HTML fragments.

use std::io::Write;

use shared::domain::RecommendationResult;

use crate::error::ClientError;

/// Sink that shows a decoded result.
pub trait ResultView: Send {
    fn display(&mut self, result: &RecommendationResult) -> Result<(), ClientError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Under the form on the recommendation page.
    Inline,
    /// The standalone result page.
    ResultPage,
}

fn tip_items(tips: &[String]) -> String {
    tips.iter().map(|tip| format!("<li>{tip}</li>")).collect()
}

pub fn render_inline(result: &RecommendationResult) -> String {
    format!(
        r#"<div class="result-header">
    <div class="crop-image-placeholder">🌱</div>
    <div>
        <h2>Recommended Crop: {crop}</h2>
        <div class="confidence-badge">AI Confidence: {confidence}%</div>
    </div>
</div>
<div class="crop-details">
    <h3>Crop Information</h3>
    <ul>
        <li>Best Season: {season}</li>
        <li>Growth Duration: {duration}</li>
        <li>Water Requirement: {water}</li>
        <li>Soil Type: {soil}</li>
    </ul>
</div>
<div class="growth-tips">
    <h3>Growth Tips</h3>
    <ul>{tips}</ul>
</div>
"#,
        crop = result.crop,
        confidence = result.confidence,
        season = result.season,
        duration = result.duration,
        water = result.water_requirement,
        soil = result.soil_type,
        tips = tip_items(&result.tips),
    )
}

pub fn render_result_page(result: &RecommendationResult) -> String {
    format!(
        r#"<h2>Recommended Crop: {crop}</h2>
<p>Confidence: {confidence}%</p>
<p>Season: {season}</p>
<p>Growth Duration: {duration}</p>
<p>Water Requirement: {water}</p>
<p>Soil Type: {soil}</p>
<h3>Growth Tips</h3>
<ul>{tips}</ul>
"#,
        crop = result.crop,
        confidence = result.confidence,
        season = result.season,
        duration = result.duration,
        water = result.water_requirement,
        soil = result.soil_type,
        tips = tip_items(&result.tips),
    )
}

/// Plain-text summary for terminals.
pub fn render_text(result: &RecommendationResult) -> String {
    let mut out = format!(
        "Recommended crop: {}\nConfidence: {}%\nSeason: {}\nGrowth duration: {}\nWater requirement: {}\nSoil type: {}\n",
        result.crop,
        result.confidence,
        result.season,
        result.duration,
        result.water_requirement,
        result.soil_type,
    );
    if let Some(temp) = &result.ideal_temp {
        out.push_str(&format!("Ideal temperature: {temp}\n"));
    }
    if let Some(rainfall) = &result.ideal_rainfall {
        out.push_str(&format!("Ideal rainfall: {rainfall}\n"));
    }
    if !result.tips.is_empty() {
        out.push_str("Growth tips:\n");
        for tip in &result.tips {
            out.push_str(&format!("  - {tip}\n"));
        }
    }
    out
}

/// Writes HTML fragments to any writer, replacing nothing previously written.
pub struct HtmlView<W> {
    layout: Layout,
    out: W,
}

impl<W: Write + Send> HtmlView<W> {
    pub fn new(layout: Layout, out: W) -> Self {
        Self { layout, out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> ResultView for HtmlView<W> {
    fn display(&mut self, result: &RecommendationResult) -> Result<(), ClientError> {
        let html = match self.layout {
            Layout::Inline => render_inline(result),
            Layout::ResultPage => render_result_page(result),
        };
        self.out
            .write_all(html.as_bytes())
            .and_then(|()| self.out.flush())
            .map_err(|err| ClientError::Display(err.to_string()))
    }
}

pub struct TextView<W> {
    out: W,
}

impl<W: Write + Send> TextView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> ResultView for TextView<W> {
    fn display(&mut self, result: &RecommendationResult) -> Result<(), ClientError> {
        self.out
            .write_all(render_text(result).as_bytes())
            .and_then(|()| self.out.flush())
            .map_err(|err| ClientError::Display(err.to_string()))
    }
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
