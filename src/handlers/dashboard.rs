//! Dashboard page: stat cards, topic mastery, and the study plan.

use askama::Template;
use axum::extract::State;
use axum::response::Html;

use super::NavContext;
use crate::auth::AuthContext;
use crate::dashboard::{StudyPlanItem, TopicMastery};
use crate::state::AppState;

pub struct MasteryRow {
  pub name: String,
  pub level: &'static str,
  pub level_label: &'static str,
  pub percent_correct: u8,
  pub questions_answered: u32,
}

pub struct PlanRow {
  pub kind_label: &'static str,
  pub topic: String,
  pub description: String,
  pub priority: u8,
}

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
  pub nav: NavContext,
  pub overall_progress: u8,
  pub questions_answered: u32,
  pub hours_studied: u32,
  pub due_for_review: u32,
  pub mastery: Vec<MasteryRow>,
  pub plan: Vec<PlanRow>,
}

pub(crate) fn mastery_row(topic: &TopicMastery) -> MasteryRow {
  MasteryRow {
    name: topic.name.clone(),
    level: topic.level.as_str(),
    level_label: topic.level.label(),
    percent_correct: topic.percent_correct,
    questions_answered: topic.questions_answered,
  }
}

fn plan_row(item: &StudyPlanItem) -> PlanRow {
  PlanRow {
    kind_label: item.kind.label(),
    topic: item.topic.clone(),
    description: item.description.clone(),
    priority: item.priority,
  }
}

/// GET /dashboard - Progress overview
pub async fn dashboard(State(state): State<AppState>, auth: AuthContext) -> Html<String> {
  let data = state.metrics.overview().await;

  let mut plan: Vec<PlanRow> = data.study_plan.iter().map(plan_row).collect();
  plan.sort_by(|a, b| b.priority.cmp(&a.priority));

  let template = DashboardTemplate {
    nav: NavContext::new(&auth, "dashboard"),
    overall_progress: data.overall_progress,
    questions_answered: data.questions_answered,
    hours_studied: data.hours_studied,
    due_for_review: data.due_for_review,
    mastery: data.topic_mastery.iter().map(mastery_row).collect(),
    plan,
  };
  Html(template.render().unwrap_or_default())
}
