use serde::{Deserialize, Serialize};

/// Question formats supported by the practice flow.
///
/// Closed set on purpose: the grader matches exhaustively over this enum, so
/// adding a format is a compile-time-checked change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionKind {
  MultipleChoice,
  Flashcard,
  Cloze,
  FillInBlank,
}

impl QuestionKind {
  pub fn from_str(s: &str) -> Option<Self> {
    match s {
      "mcq" | "multiple_choice" => Some(Self::MultipleChoice),
      "flashcard" => Some(Self::Flashcard),
      "cloze" => Some(Self::Cloze),
      "fill_in_blank" | "fill-in-blank" => Some(Self::FillInBlank),
      _ => None,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::MultipleChoice => "mcq",
      Self::Flashcard => "flashcard",
      Self::Cloze => "cloze",
      Self::FillInBlank => "fill_in_blank",
    }
  }

  /// Whether submissions of this kind carry a right/wrong signal at all.
  pub fn is_gradable(&self) -> bool {
    !matches!(self, Self::Flashcard)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
  Easy,
  Medium,
  Hard,
}

impl Difficulty {
  pub fn from_str(s: &str) -> Option<Self> {
    match s {
      "easy" => Some(Self::Easy),
      "medium" => Some(Self::Medium),
      "hard" => Some(Self::Hard),
      _ => None,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Easy => "easy",
      Self::Medium => "medium",
      Self::Hard => "hard",
    }
  }
}

/// One selectable choice on a multiple-choice question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerOption {
  pub id: String,
  pub text: String,
  pub is_correct: bool,
}

/// Immutable content unit delivered by a question source.
///
/// `options` is populated for multiple-choice questions only;
/// `correct_answer` is the canonical text for cloze / fill-in-blank grading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
  pub id: String,
  pub kind: QuestionKind,
  pub stem: String,
  pub options: Vec<AnswerOption>,
  pub correct_answer: Option<String>,
  pub explanation: String,
  pub category_id: String,
  pub subtopic_id: Option<String>,
  pub difficulty: Difficulty,
  pub domain_id: Option<String>,
}

impl Question {
  /// The option marked correct, if any. Exactly one should carry the flag;
  /// content with zero or several flagged options still grades deterministically
  /// (first flagged wins for display purposes).
  pub fn correct_option(&self) -> Option<&AnswerOption> {
    self.options.iter().find(|o| o.is_correct)
  }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subtopic {
  pub id: String,
  pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
  pub id: String,
  pub name: String,
  pub subtopics: Vec<Subtopic>,
}

/// Exam competency domain a question maps to (e.g. diagnosis, management).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompetencyDomain {
  pub id: String,
  pub name: String,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_kind_round_trip() {
    for kind in [
      QuestionKind::MultipleChoice,
      QuestionKind::Flashcard,
      QuestionKind::Cloze,
      QuestionKind::FillInBlank,
    ] {
      assert_eq!(QuestionKind::from_str(kind.as_str()), Some(kind));
    }
    assert_eq!(QuestionKind::from_str("essay"), None);
  }

  #[test]
  fn test_difficulty_round_trip() {
    for d in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
      assert_eq!(Difficulty::from_str(d.as_str()), Some(d));
    }
    assert_eq!(Difficulty::from_str("impossible"), None);
  }

  #[test]
  fn test_only_flashcards_are_ungradable() {
    assert!(QuestionKind::MultipleChoice.is_gradable());
    assert!(QuestionKind::Cloze.is_gradable());
    assert!(QuestionKind::FillInBlank.is_gradable());
    assert!(!QuestionKind::Flashcard.is_gradable());
  }
}
