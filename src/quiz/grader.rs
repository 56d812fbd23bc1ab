//! Pure answer grading.
//!
//! Grading never touches session state: given a question and a candidate
//! answer it produces a verdict, or a named error for formats that carry no
//! right/wrong signal.

use crate::domain::{Question, QuestionKind};

/// Raised when a question's format cannot be graded. Callers degrade to
/// "no correctness signal" instead of failing the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UngradableKind(pub QuestionKind);

impl std::fmt::Display for UngradableKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "question kind '{}' has no gradable answer", self.0.as_str())
  }
}

impl std::error::Error for UngradableKind {}

/// Grade a submission against a question.
///
/// Multiple choice takes `option_id`; cloze and fill-in-blank take
/// `free_text`, compared case-insensitively against the canonical answer
/// with no trimming or fuzzy matching. An unknown option id and a missing
/// canonical answer both grade as wrong rather than erroring.
pub fn grade(
  question: &Question,
  option_id: Option<&str>,
  free_text: Option<&str>,
) -> Result<bool, UngradableKind> {
  match question.kind {
    QuestionKind::MultipleChoice => {
      let correct = option_id
        .and_then(|id| question.options.iter().find(|o| o.id == id))
        .map(|o| o.is_correct)
        .unwrap_or(false);
      Ok(correct)
    }
    QuestionKind::Cloze | QuestionKind::FillInBlank => {
      let Some(expected) = question.correct_answer.as_deref() else {
        return Ok(false);
      };
      let correct = free_text
        .map(|text| text.to_lowercase() == expected.to_lowercase())
        .unwrap_or(false);
      Ok(correct)
    }
    QuestionKind::Flashcard => Err(UngradableKind(QuestionKind::Flashcard)),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::{AnswerOption, Difficulty};

  fn mcq() -> Question {
    Question {
      id: "q1".to_string(),
      kind: QuestionKind::MultipleChoice,
      stem: "Which artery is most likely occluded?".to_string(),
      options: vec![
        AnswerOption {
          id: "a".to_string(),
          text: "Left anterior descending artery".to_string(),
          is_correct: false,
        },
        AnswerOption {
          id: "c".to_string(),
          text: "Right coronary artery".to_string(),
          is_correct: true,
        },
      ],
      correct_answer: None,
      explanation: String::new(),
      category_id: "cardiovascular".to_string(),
      subtopic_id: None,
      difficulty: Difficulty::Medium,
      domain_id: None,
    }
  }

  fn fill_in(expected: Option<&str>) -> Question {
    Question {
      id: "q2".to_string(),
      kind: QuestionKind::FillInBlank,
      stem: "Low serum potassium is called ___.".to_string(),
      options: vec![],
      correct_answer: expected.map(str::to_string),
      explanation: String::new(),
      category_id: "renal".to_string(),
      subtopic_id: None,
      difficulty: Difficulty::Easy,
      domain_id: None,
    }
  }

  #[test]
  fn test_mcq_correct_option() {
    assert_eq!(grade(&mcq(), Some("c"), None), Ok(true));
  }

  #[test]
  fn test_mcq_wrong_option() {
    assert_eq!(grade(&mcq(), Some("a"), None), Ok(false));
  }

  #[test]
  fn test_mcq_unknown_option_id_is_wrong_not_an_error() {
    assert_eq!(grade(&mcq(), Some("zz"), None), Ok(false));
    assert_eq!(grade(&mcq(), None, None), Ok(false));
  }

  #[test]
  fn test_free_text_is_case_insensitive() {
    let q = fill_in(Some("hypokalemia"));
    assert_eq!(grade(&q, None, Some("Hypokalemia")), Ok(true));
    assert_eq!(grade(&q, None, Some("HYPOKALEMIA")), Ok(true));
  }

  #[test]
  fn test_free_text_no_trimming() {
    let q = fill_in(Some("hypokalemia"));
    assert_eq!(grade(&q, None, Some(" hypokalemia")), Ok(false));
    assert_eq!(grade(&q, None, Some("hypokalemia ")), Ok(false));
  }

  #[test]
  fn test_missing_canonical_answer_grades_wrong() {
    let q = fill_in(None);
    assert_eq!(grade(&q, None, Some("anything")), Ok(false));
  }

  #[test]
  fn test_flashcards_are_ungradable() {
    let mut q = fill_in(Some("x"));
    q.kind = QuestionKind::Flashcard;
    assert_eq!(grade(&q, None, Some("x")), Err(UngradableKind(QuestionKind::Flashcard)));
  }
}
