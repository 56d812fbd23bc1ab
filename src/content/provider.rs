//! Sample question source with simulated network behavior.
//!
//! Filters the built-in bank by the configured criteria and trims the result
//! to the requested count. The weak-area bias is a weighted draw: categories
//! the mock mastery data marks as high priority are proportionally more
//! likely to be picked.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;
use rand::seq::SliceRandom;

use super::{ProviderError, QuestionSource, bank};
use crate::config;
use crate::dashboard;
use crate::domain::{Question, QuizConfig};

pub struct SampleQuestionBank {
  questions: Vec<Question>,
  topic_priority: HashMap<String, u8>,
  latency: Duration,
}

impl Default for SampleQuestionBank {
  fn default() -> Self {
    Self::new()
  }
}

impl SampleQuestionBank {
  pub fn new() -> Self {
    Self::with_latency(Duration::from_millis(config::PROVIDER_LATENCY_MS))
  }

  /// Zero latency makes the source synchronous enough for tests.
  pub fn with_latency(latency: Duration) -> Self {
    let topic_priority = dashboard::sample_topic_mastery()
      .into_iter()
      .map(|m| (m.id, m.recommended_priority))
      .collect();
    Self {
      questions: bank::sample_questions(),
      topic_priority,
      latency,
    }
  }

  fn matches(question: &Question, config: &QuizConfig) -> bool {
    if let Some(category) = &config.category_id {
      if &question.category_id != category {
        return false;
      }
    }
    if let Some(subtopic) = &config.subtopic_id {
      if question.subtopic_id.as_ref() != Some(subtopic) {
        return false;
      }
    }
    if let Some(difficulty) = config.difficulty {
      if question.difficulty != difficulty {
        return false;
      }
    }
    if let Some(domain) = &config.domain_id {
      if question.domain_id.as_ref() != Some(domain) {
        return false;
      }
    }
    true
  }

  /// Selection weight for the weak-area draw: neutral 1.0 plus the topic's
  /// recommended priority (1-10), so a priority-10 topic is ~11x as likely
  /// per draw as an untracked one.
  fn weight(&self, question: &Question) -> f64 {
    let priority = self
      .topic_priority
      .get(&question.category_id)
      .copied()
      .unwrap_or(0);
    1.0 + priority as f64
  }
}

#[async_trait]
impl QuestionSource for SampleQuestionBank {
  async fn fetch_questions(&self, config: &QuizConfig) -> Result<Vec<Question>, ProviderError> {
    if !self.latency.is_zero() {
      tokio::time::sleep(self.latency).await;
    }

    let mut pool: Vec<Question> = self
      .questions
      .iter()
      .filter(|q| Self::matches(q, config))
      .cloned()
      .collect();
    let count = config.question_count.min(pool.len());

    let mut rng = rand::rng();
    let selected = if config.focus_weak_areas {
      weighted_sample(pool, count, &mut rng, |q| self.weight(q))
    } else {
      pool.shuffle(&mut rng);
      pool.truncate(count);
      pool
    };

    tracing::debug!(
      "question fetch: {} selected (count limit {})",
      selected.len(),
      config.question_count
    );
    Ok(selected)
  }
}

/// Draw `count` items without replacement, probability proportional to weight.
fn weighted_sample<R: Rng>(
  mut pool: Vec<Question>,
  count: usize,
  rng: &mut R,
  weight: impl Fn(&Question) -> f64,
) -> Vec<Question> {
  let mut picked = Vec::with_capacity(count);
  while picked.len() < count && !pool.is_empty() {
    let total: f64 = pool.iter().map(&weight).sum();
    let mut roll = rng.random_range(0.0..total);
    let mut chosen = pool.len() - 1;
    for (i, question) in pool.iter().enumerate() {
      roll -= weight(question);
      if roll <= 0.0 {
        chosen = i;
        break;
      }
    }
    picked.push(pool.swap_remove(chosen));
  }
  picked
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::Difficulty;

  fn source() -> SampleQuestionBank {
    SampleQuestionBank::with_latency(Duration::ZERO)
  }

  fn config() -> QuizConfig {
    QuizConfig {
      question_count: 50,
      ..QuizConfig::default()
    }
  }

  #[tokio::test]
  async fn test_category_filter_is_honored() {
    let questions = source()
      .fetch_questions(&QuizConfig {
        category_id: Some("renal".to_string()),
        ..config()
      })
      .await
      .unwrap();
    assert!(!questions.is_empty());
    assert!(questions.iter().all(|q| q.category_id == "renal"));
  }

  #[tokio::test]
  async fn test_subtopic_and_difficulty_filters_compose() {
    let questions = source()
      .fetch_questions(&QuizConfig {
        category_id: Some("cardiovascular".to_string()),
        subtopic_id: Some("cardio-pathology".to_string()),
        difficulty: Some(Difficulty::Medium),
        ..config()
      })
      .await
      .unwrap();
    assert!(!questions.is_empty());
    for q in &questions {
      assert_eq!(q.subtopic_id.as_deref(), Some("cardio-pathology"));
      assert_eq!(q.difficulty, Difficulty::Medium);
    }
  }

  #[tokio::test]
  async fn test_domain_filter_is_honored() {
    let questions = source()
      .fetch_questions(&QuizConfig {
        domain_id: Some("management".to_string()),
        ..config()
      })
      .await
      .unwrap();
    assert!(!questions.is_empty());
    assert!(questions.iter().all(|q| q.domain_id.as_deref() == Some("management")));
  }

  #[tokio::test]
  async fn test_result_never_exceeds_requested_count() {
    let questions = source()
      .fetch_questions(&QuizConfig {
        question_count: 3,
        ..QuizConfig::default()
      })
      .await
      .unwrap();
    assert_eq!(questions.len(), 3);
  }

  #[tokio::test]
  async fn test_unmatchable_filters_yield_empty_set_not_error() {
    let questions = source()
      .fetch_questions(&QuizConfig {
        category_id: Some("dermatology".to_string()),
        ..config()
      })
      .await
      .unwrap();
    assert!(questions.is_empty());
  }

  #[tokio::test]
  async fn test_weak_area_draw_returns_distinct_questions() {
    let questions = source()
      .fetch_questions(&QuizConfig {
        focus_weak_areas: true,
        question_count: 8,
        ..QuizConfig::default()
      })
      .await
      .unwrap();
    assert_eq!(questions.len(), 8);
    let mut ids: Vec<&str> = questions.iter().map(|q| q.id.as_str()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 8);
  }

  #[test]
  fn test_weaker_topics_weigh_more() {
    let bank = source();
    let questions = bank::sample_questions();
    let renal = questions.iter().find(|q| q.category_id == "renal").unwrap();
    let neuro = questions.iter().find(|q| q.category_id == "neurology").unwrap();
    // Mock mastery ranks renal (novice) well above neurology (proficient)
    assert!(bank.weight(renal) > bank.weight(neuro));
  }
}
