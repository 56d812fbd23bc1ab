//! Practice flow: quiz configuration, question rendering, grading feedback.
//!
//! The session state machine decides what this page is: Idle renders the
//! configuration form (plus the last run's summary when one just finished),
//! Active renders the current question. Grading feedback is carried in the
//! POST response only — a refresh falls back to the ungraded question view.

use askama::Template;
use axum::Form;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde::Deserialize;

use super::NavContext;
use crate::auth::AuthContext;
use crate::config;
use crate::content;
use crate::domain::{Question, QuestionKind, QuizConfig, QuizConfigPatch, QuizProgress};
use crate::quiz::{AnswerOutcome, QuizView};
use crate::state::AppState;

// ==================== Templates ====================

pub struct WeakTopicRow {
  pub name: String,
  pub level_label: &'static str,
  pub percent_correct: u8,
}

pub struct SummaryRow {
  pub correct: usize,
  pub incorrect: usize,
  pub skipped: usize,
  pub total: usize,
  pub percent: usize,
}

#[derive(Template)]
#[template(path = "practice/configure.html")]
pub struct ConfigureTemplate {
  pub nav: NavContext,
  pub categories: Vec<crate::domain::Category>,
  pub domains: Vec<crate::domain::CompetencyDomain>,
  pub weak_topics: Vec<WeakTopicRow>,
  pub selected_category: String,
  pub selected_subtopic: String,
  pub selected_difficulty: String,
  pub selected_domain: String,
  pub question_count: usize,
  pub focus_weak_areas: bool,
  pub summary: Option<SummaryRow>,
  pub error: Option<String>,
}

pub struct OptionRow {
  pub id: String,
  pub text: String,
  pub is_correct: bool,
}

pub struct QuestionCard {
  pub id: String,
  pub stem: String,
  pub options: Vec<OptionRow>,
  pub explanation: String,
  pub category: String,
  pub difficulty: &'static str,
  pub is_multiple_choice: bool,
  pub is_flashcard: bool,
}

pub struct FeedbackView {
  pub graded: bool,
  pub is_correct: bool,
  pub selected_option: String,
  pub submitted_text: String,
  pub correct_answer: String,
}

#[derive(Template)]
#[template(path = "practice/question.html")]
pub struct QuestionTemplate {
  pub nav: NavContext,
  pub position: usize,
  pub total: usize,
  pub correct: usize,
  pub incorrect: usize,
  pub question: QuestionCard,
  pub feedback: Option<FeedbackView>,
}

#[derive(Template)]
#[template(path = "practice/no_questions.html")]
pub struct NoQuestionsTemplate {
  pub nav: NavContext,
}

// ==================== Forms ====================

#[derive(Deserialize)]
pub struct StartForm {
  #[serde(default)]
  pub category_id: String,
  #[serde(default)]
  pub subtopic_id: String,
  #[serde(default)]
  pub difficulty: String,
  #[serde(default)]
  pub domain_id: String,
  #[serde(default = "default_question_count")]
  pub question_count: usize,
  /// Checkbox: present iff checked
  #[serde(default)]
  pub focus_weak_areas: Option<String>,
}

fn default_question_count() -> usize {
  config::DEFAULT_QUESTION_COUNT
}

#[derive(Deserialize)]
pub struct AnswerForm {
  pub question_id: String,
  #[serde(default)]
  pub option_id: String,
  #[serde(default)]
  pub answer_text: String,
}

// ==================== Handlers ====================

/// GET /practice - Configuration form or the current question
pub async fn practice_page(State(state): State<AppState>, auth: AuthContext) -> Html<String> {
  match auth.study.quiz.view().await {
    QuizView::Idle { config, last_run } => {
      configure_page(&state, &auth, &config, last_run, None).await
    }
    QuizView::Active { question, progress } => active_page(&auth, question, &progress, None),
  }
}

/// POST /practice/start - Apply the submitted criteria and start a run
pub async fn start_quiz(
  State(state): State<AppState>,
  auth: AuthContext,
  Form(form): Form<StartForm>,
) -> Response {
  let patch = QuizConfigPatch {
    category_id: Some(form.category_id),
    subtopic_id: Some(form.subtopic_id),
    difficulty: Some(form.difficulty),
    domain_id: Some(form.domain_id),
    question_count: Some(config::clamp_question_count(form.question_count)),
    focus_weak_areas: Some(form.focus_weak_areas.is_some()),
  };
  auth.study.quiz.set_config(patch).await;

  match auth.study.quiz.start(state.questions.as_ref()).await {
    Ok(_) => Redirect::to("/practice").into_response(),
    Err(e) => {
      tracing::warn!("question fetch failed: {}", e);
      match auth.study.quiz.view().await {
        QuizView::Idle { config, last_run } => {
          let error = Some(format!("Could not load questions: {}", e));
          configure_page(&state, &auth, &config, last_run, error)
            .await
            .into_response()
        }
        // A competing start got through; show its run
        QuizView::Active { .. } => Redirect::to("/practice").into_response(),
      }
    }
  }
}

/// POST /practice/answer - Grade a submission and show feedback
pub async fn submit_answer(auth: AuthContext, Form(form): Form<AnswerForm>) -> Response {
  let option_id = (!form.option_id.is_empty()).then_some(form.option_id.as_str());
  let free_text = (!form.answer_text.is_empty()).then_some(form.answer_text.as_str());

  let Some(outcome) = auth
    .study
    .quiz
    .answer(&form.question_id, option_id, free_text)
    .await
  else {
    // Stale or out-of-session submission: just show whatever is current
    return Redirect::to("/practice").into_response();
  };

  match auth.study.quiz.view().await {
    QuizView::Active {
      question: Some(question),
      progress,
    } => {
      let feedback = FeedbackView {
        graded: outcome != AnswerOutcome::Ungraded,
        is_correct: outcome.is_correct(),
        selected_option: form.option_id,
        submitted_text: form.answer_text,
        correct_answer: correct_answer_text(&question),
      };
      active_page(&auth, Some(question), &progress, Some(feedback)).into_response()
    }
    _ => Redirect::to("/practice").into_response(),
  }
}

/// POST /practice/next - Advance; a finished run lands back on the summary
pub async fn next_question(auth: AuthContext) -> Redirect {
  let finished = auth.study.quiz.advance().await;
  if finished {
    tracing::debug!("quiz run finished for user {}", auth.user.id);
  }
  Redirect::to("/practice")
}

/// POST /practice/end - Abandon the run
pub async fn end_quiz(auth: AuthContext) -> Redirect {
  auth.study.quiz.end().await;
  Redirect::to("/practice")
}

// ==================== Rendering ====================

async fn configure_page(
  state: &AppState,
  auth: &AuthContext,
  config: &QuizConfig,
  last_run: Option<QuizProgress>,
  error: Option<String>,
) -> Html<String> {
  let weak_topics = state
    .metrics
    .weak_topics(config::WEAK_TOPIC_LIMIT)
    .await
    .iter()
    .map(|topic| WeakTopicRow {
      name: topic.name.clone(),
      level_label: topic.level.label(),
      percent_correct: topic.percent_correct,
    })
    .collect();

  let template = ConfigureTemplate {
    nav: NavContext::new(auth, "practice"),
    categories: content::categories(),
    domains: content::competency_domains(),
    weak_topics,
    selected_category: config.category_id.clone().unwrap_or_default(),
    selected_subtopic: config.subtopic_id.clone().unwrap_or_default(),
    selected_difficulty: config
      .difficulty
      .map(|d| d.as_str().to_string())
      .unwrap_or_default(),
    selected_domain: config.domain_id.clone().unwrap_or_default(),
    question_count: config.question_count,
    focus_weak_areas: config.focus_weak_areas,
    summary: last_run.map(|run| SummaryRow {
      correct: run.correct,
      incorrect: run.incorrect,
      skipped: run.skipped,
      total: run.total,
      percent: run.percent_correct(),
    }),
    error,
  };
  Html(template.render().unwrap_or_default())
}

fn active_page(
  auth: &AuthContext,
  question: Option<Question>,
  progress: &QuizProgress,
  feedback: Option<FeedbackView>,
) -> Html<String> {
  let Some(question) = question else {
    let template = NoQuestionsTemplate {
      nav: NavContext::new(auth, "practice"),
    };
    return Html(template.render().unwrap_or_default());
  };

  let template = QuestionTemplate {
    nav: NavContext::new(auth, "practice"),
    position: progress.display_position(),
    total: progress.total,
    correct: progress.correct,
    incorrect: progress.incorrect,
    question: question_card(&question),
    feedback,
  };
  Html(template.render().unwrap_or_default())
}

fn question_card(question: &Question) -> QuestionCard {
  QuestionCard {
    id: question.id.clone(),
    stem: question.stem.clone(),
    options: question
      .options
      .iter()
      .map(|o| OptionRow {
        id: o.id.clone(),
        text: o.text.clone(),
        is_correct: o.is_correct,
      })
      .collect(),
    explanation: question.explanation.clone(),
    category: category_name(&question.category_id),
    difficulty: match question.difficulty {
      crate::domain::Difficulty::Easy => "Easy",
      crate::domain::Difficulty::Medium => "Medium",
      crate::domain::Difficulty::Hard => "Hard",
    },
    is_multiple_choice: question.kind == QuestionKind::MultipleChoice,
    is_flashcard: question.kind == QuestionKind::Flashcard,
  }
}

fn category_name(category_id: &str) -> String {
  content::categories()
    .into_iter()
    .find(|c| c.id == category_id)
    .map(|c| c.name)
    .unwrap_or_else(|| category_id.to_string())
}

/// What to show next to a wrong answer
fn correct_answer_text(question: &Question) -> String {
  match question.kind {
    QuestionKind::MultipleChoice => question
      .correct_option()
      .map(|o| o.text.clone())
      .unwrap_or_default(),
    QuestionKind::Cloze | QuestionKind::FillInBlank => {
      question.correct_answer.clone().unwrap_or_default()
    }
    QuestionKind::Flashcard => String::new(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::{AnswerOption, Difficulty};

  #[test]
  fn test_correct_answer_text_prefers_option_text_for_mcq() {
    let question = Question {
      id: "q".to_string(),
      kind: QuestionKind::MultipleChoice,
      stem: String::new(),
      options: vec![AnswerOption {
        id: "c".to_string(),
        text: "Right coronary artery".to_string(),
        is_correct: true,
      }],
      correct_answer: None,
      explanation: String::new(),
      category_id: "cardiovascular".to_string(),
      subtopic_id: None,
      difficulty: Difficulty::Medium,
      domain_id: None,
    };
    assert_eq!(correct_answer_text(&question), "Right coronary artery");
  }

  #[test]
  fn test_category_name_falls_back_to_id() {
    assert_eq!(category_name("cardiovascular"), "Cardiovascular");
    assert_eq!(category_name("unknown-topic"), "unknown-topic");
  }
}
