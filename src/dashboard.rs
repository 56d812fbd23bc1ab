//! Mock progress metrics backing the dashboard and analytics views.
//!
//! Stands in for a real analytics pipeline: mastery levels, the study plan,
//! and the aggregate counters are fixed sample values served after a
//! simulated fetch delay.

use std::time::Duration;

use serde::Serialize;

use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MasteryLevel {
  Novice,
  Developing,
  Proficient,
  Mastered,
}

impl MasteryLevel {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Novice => "novice",
      Self::Developing => "developing",
      Self::Proficient => "proficient",
      Self::Mastered => "mastered",
    }
  }

  pub fn label(&self) -> &'static str {
    match self {
      Self::Novice => "Novice",
      Self::Developing => "Developing",
      Self::Proficient => "Proficient",
      Self::Mastered => "Mastered",
    }
  }
}

/// Per-topic mastery snapshot. `recommended_priority` runs 1-10, 10 meaning
/// "study this first"; the question source uses it for the weak-area bias.
#[derive(Debug, Clone, Serialize)]
pub struct TopicMastery {
  pub id: String,
  pub name: String,
  pub level: MasteryLevel,
  pub percent_correct: u8,
  pub questions_answered: u32,
  pub recommended_priority: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PlanKind {
  Review,
  Quiz,
  Flashcards,
}

impl PlanKind {
  pub fn label(&self) -> &'static str {
    match self {
      Self::Review => "Review",
      Self::Quiz => "Quiz",
      Self::Flashcards => "Flashcards",
    }
  }
}

#[derive(Debug, Clone, Serialize)]
pub struct StudyPlanItem {
  pub id: String,
  pub kind: PlanKind,
  pub topic: String,
  pub description: String,
  pub priority: u8,
}

/// Everything the dashboard renders in one fetch.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardData {
  pub topic_mastery: Vec<TopicMastery>,
  pub study_plan: Vec<StudyPlanItem>,
  pub overall_progress: u8,
  pub questions_answered: u32,
  pub hours_studied: u32,
  pub due_for_review: u32,
}

pub fn sample_topic_mastery() -> Vec<TopicMastery> {
  vec![
    mastery("cardiovascular", "Cardiovascular", MasteryLevel::Developing, 65, 45, 8),
    mastery("renal", "Renal", MasteryLevel::Novice, 45, 20, 10),
    mastery("neurology", "Neurology", MasteryLevel::Proficient, 82, 60, 3),
    mastery("endocrine", "Endocrine", MasteryLevel::Novice, 40, 15, 9),
    mastery("respiratory", "Respiratory", MasteryLevel::Developing, 70, 35, 6),
  ]
}

pub fn sample_study_plan() -> Vec<StudyPlanItem> {
  vec![
    plan("1", PlanKind::Review, "Renal", "Review nephron function and glomerular filtration", 10),
    plan("2", PlanKind::Quiz, "Cardiovascular", "Take targeted quiz on cardioembolic stroke", 8),
    plan("3", PlanKind::Flashcards, "Respiratory", "Complete due flashcards on pulmonary function tests", 6),
  ]
}

/// Serves the mock metrics after a simulated fetch delay.
#[derive(Clone)]
pub struct MetricsService {
  latency: Duration,
}

impl Default for MetricsService {
  fn default() -> Self {
    Self::new()
  }
}

impl MetricsService {
  pub fn new() -> Self {
    Self::with_latency(Duration::from_millis(config::METRICS_LATENCY_MS))
  }

  pub fn with_latency(latency: Duration) -> Self {
    Self { latency }
  }

  pub async fn overview(&self) -> DashboardData {
    if !self.latency.is_zero() {
      tokio::time::sleep(self.latency).await;
    }
    DashboardData {
      topic_mastery: sample_topic_mastery(),
      study_plan: sample_study_plan(),
      overall_progress: 58,
      questions_answered: 345,
      hours_studied: 42,
      due_for_review: 24,
    }
  }

  /// Weakest topics first, for the "focus areas" card.
  pub async fn weak_topics(&self, limit: usize) -> Vec<TopicMastery> {
    let mut topics = self.overview().await.topic_mastery;
    topics.sort_by(|a, b| b.recommended_priority.cmp(&a.recommended_priority));
    topics.truncate(limit);
    topics
  }
}

fn mastery(
  id: &str,
  name: &str,
  level: MasteryLevel,
  percent_correct: u8,
  questions_answered: u32,
  recommended_priority: u8,
) -> TopicMastery {
  TopicMastery {
    id: id.to_string(),
    name: name.to_string(),
    level,
    percent_correct,
    questions_answered,
    recommended_priority,
  }
}

fn plan(id: &str, kind: PlanKind, topic: &str, description: &str, priority: u8) -> StudyPlanItem {
  StudyPlanItem {
    id: id.to_string(),
    kind,
    topic: topic.to_string(),
    description: description.to_string(),
    priority,
  }
}
