use serde::{Deserialize, Serialize};

use super::question::Difficulty;

/// Quiz selection criteria. Retained across runs so the last settings come
/// back pre-filled on the configuration view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizConfig {
  pub category_id: Option<String>,
  pub subtopic_id: Option<String>,
  pub difficulty: Option<Difficulty>,
  pub domain_id: Option<String>,
  pub question_count: usize,
  pub focus_weak_areas: bool,
}

impl Default for QuizConfig {
  fn default() -> Self {
    Self {
      category_id: None,
      subtopic_id: None,
      difficulty: None,
      domain_id: None,
      question_count: crate::config::DEFAULT_QUESTION_COUNT,
      focus_weak_areas: false,
    }
  }
}

/// Partial update for a `QuizConfig`. Fields left `None` are untouched; an
/// empty string clears the corresponding filter (how the selection form
/// encodes "all").
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizConfigPatch {
  pub category_id: Option<String>,
  pub subtopic_id: Option<String>,
  pub difficulty: Option<String>,
  pub domain_id: Option<String>,
  pub question_count: Option<usize>,
  pub focus_weak_areas: Option<bool>,
}

impl QuizConfig {
  /// Merge a patch into this configuration. Accepts whatever it is given:
  /// an unparseable difficulty clears the filter, counts are stored as-is
  /// (the form handler clamps before building the patch).
  pub fn apply(&mut self, patch: QuizConfigPatch) {
    if let Some(category) = patch.category_id {
      let cleared = category.is_empty();
      self.category_id = (!cleared).then_some(category);
      // A subtopic only makes sense inside its category
      if cleared {
        self.subtopic_id = None;
      }
    }
    if let Some(subtopic) = patch.subtopic_id {
      self.subtopic_id = (!subtopic.is_empty()).then_some(subtopic);
    }
    if let Some(difficulty) = patch.difficulty {
      self.difficulty = Difficulty::from_str(&difficulty);
    }
    if let Some(domain) = patch.domain_id {
      self.domain_id = (!domain.is_empty()).then_some(domain);
    }
    if let Some(count) = patch.question_count {
      self.question_count = count;
    }
    if let Some(focus) = patch.focus_weak_areas {
      self.focus_weak_areas = focus;
    }
  }
}

/// Running tally for one quiz run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QuizProgress {
  pub correct: usize,
  pub incorrect: usize,
  pub skipped: usize,
  pub total: usize,
  pub current_index: usize,
}

impl QuizProgress {
  pub fn new(total: usize) -> Self {
    Self {
      total,
      ..Self::default()
    }
  }

  /// Questions with a recorded outcome (graded or skipped past).
  pub fn settled(&self) -> usize {
    self.correct + self.incorrect + self.skipped
  }

  /// Percentage of graded answers that were correct, for summary display.
  pub fn percent_correct(&self) -> usize {
    let graded = self.correct + self.incorrect;
    if graded == 0 {
      0
    } else {
      self.correct * 100 / graded
    }
  }

  /// 1-based position for display ("Question 3 of 10").
  pub fn display_position(&self) -> usize {
    self.current_index + 1
  }
}
