//! Analytics page: the same mock metrics cut per topic.

use askama::Template;
use axum::extract::State;
use axum::response::Html;

use super::NavContext;
use super::dashboard::{MasteryRow, mastery_row};
use crate::auth::AuthContext;
use crate::state::AppState;

#[derive(Template)]
#[template(path = "analytics.html")]
pub struct AnalyticsTemplate {
  pub nav: NavContext,
  pub average_accuracy: u32,
  pub total_answered: u32,
  pub strongest_topic: String,
  pub weakest_topic: String,
  pub mastery: Vec<MasteryRow>,
}

/// GET /analytics - Per-topic performance breakdown
pub async fn analytics(State(state): State<AppState>, auth: AuthContext) -> Html<String> {
  let data = state.metrics.overview().await;
  let topics = &data.topic_mastery;

  let average_accuracy = if topics.is_empty() {
    0
  } else {
    topics.iter().map(|t| t.percent_correct as u32).sum::<u32>() / topics.len() as u32
  };
  let strongest_topic = topics
    .iter()
    .max_by_key(|t| t.percent_correct)
    .map(|t| t.name.clone())
    .unwrap_or_default();
  let weakest_topic = topics
    .iter()
    .max_by_key(|t| t.recommended_priority)
    .map(|t| t.name.clone())
    .unwrap_or_default();

  let template = AnalyticsTemplate {
    nav: NavContext::new(&auth, "analytics"),
    average_accuracy,
    total_answered: data.questions_answered,
    strongest_topic,
    weakest_topic,
    mastery: topics.iter().map(mastery_row).collect(),
  };
  Html(template.render().unwrap_or_default())
}
