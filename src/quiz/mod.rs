//! Quiz session state machine.
//!
//! One `QuizSession` orchestrates a run from configuration to completion:
//! fetch a question set, hand out the current question, record graded
//! answers, advance, finish. The session is either Idle (holding the
//! configuration and possibly the last run's summary) or Active (holding the
//! immutable question list and the running progress). Everything else in the
//! app is presentation glue around these transitions.

pub mod grader;

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::content::{ProviderError, QuestionSource};
use crate::domain::{Question, QuizConfig, QuizConfigPatch, QuizProgress};

/// What `answer()` recorded, surfaced so the view can show feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
  Correct,
  Incorrect,
  /// The question's format carries no right/wrong signal (flashcards).
  Ungraded,
}

impl AnswerOutcome {
  pub fn is_correct(&self) -> bool {
    matches!(self, Self::Correct)
  }
}

/// Result of a completed `start()` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
  /// The fetched set was installed; carries the question count.
  Started(usize),
  /// Another `start()` overtook this one while its fetch was in flight;
  /// the fetched set was discarded.
  Superseded,
}

enum Phase {
  Idle {
    /// Progress of the last naturally finished run, kept for the summary
    /// view until the next start or an explicit end.
    last_run: Option<QuizProgress>,
  },
  Active {
    questions: Vec<Question>,
    progress: QuizProgress,
    /// One flag per question: set once a grade was recorded. Guards against
    /// double-counting a re-submitted answer.
    answered: Vec<bool>,
  },
}

pub struct QuizSession {
  config: QuizConfig,
  phase: Phase,
  /// Bumped by every `begin_start`; a fetch only installs if its token is
  /// still current, so a late result from an overtaken start is dropped.
  generation: u64,
}

impl Default for QuizSession {
  fn default() -> Self {
    Self::new()
  }
}

impl QuizSession {
  pub fn new() -> Self {
    Self {
      config: QuizConfig::default(),
      phase: Phase::Idle { last_run: None },
      generation: 0,
    }
  }

  pub fn config(&self) -> &QuizConfig {
    &self.config
  }

  pub fn is_active(&self) -> bool {
    matches!(self.phase, Phase::Active { .. })
  }

  /// Merge selection criteria. Never fails and never touches an active
  /// run's question list.
  pub fn set_config(&mut self, patch: QuizConfigPatch) {
    self.config.apply(patch);
  }

  /// First half of `start()`: claim a generation token and snapshot the
  /// configuration for the fetch. The phase is left untouched, so answer
  /// and advance stay guarded while the fetch is in flight.
  pub fn begin_start(&mut self) -> (u64, QuizConfig) {
    self.generation += 1;
    (self.generation, self.config.clone())
  }

  /// Second half of `start()`: install the fetched question list, unless a
  /// newer start has claimed the session since `begin_start`.
  pub fn install_questions(&mut self, token: u64, questions: Vec<Question>) -> bool {
    if token != self.generation {
      return false;
    }
    let total = questions.len();
    self.phase = Phase::Active {
      progress: QuizProgress::new(total),
      answered: vec![false; total],
      questions,
    };
    true
  }

  /// Record a graded answer for the current question.
  ///
  /// Silently ignored unless the session is active, `question_id` names the
  /// question at the current index (stale submissions arrive after
  /// navigation), and no grade was recorded for it yet. Does not advance.
  pub fn answer(
    &mut self,
    question_id: &str,
    option_id: Option<&str>,
    free_text: Option<&str>,
  ) -> Option<AnswerOutcome> {
    let Phase::Active {
      questions,
      progress,
      answered,
    } = &mut self.phase
    else {
      return None;
    };
    let index = progress.current_index;
    let question = questions.get(index)?;
    if question.id != question_id || answered[index] {
      return None;
    }
    match grader::grade(question, option_id, free_text) {
      Ok(true) => {
        progress.correct += 1;
        answered[index] = true;
        Some(AnswerOutcome::Correct)
      }
      Ok(false) => {
        progress.incorrect += 1;
        answered[index] = true;
        Some(AnswerOutcome::Incorrect)
      }
      Err(_) => Some(AnswerOutcome::Ungraded),
    }
  }

  /// Move to the next question; finishes the run when already on the last
  /// one (or when the list is empty). Returns true if the run ended.
  /// A question left without a grade counts as skipped on the way out.
  pub fn advance(&mut self) -> bool {
    let Phase::Active {
      progress, answered, ..
    } = &mut self.phase
    else {
      return false;
    };
    let index = progress.current_index;
    if index < progress.total && !answered[index] {
      progress.skipped += 1;
    }
    if index + 1 >= progress.total {
      let summary = progress.clone();
      self.phase = Phase::Idle {
        last_run: Some(summary),
      };
      true
    } else {
      progress.current_index += 1;
      false
    }
  }

  /// Abandon the run, discarding questions and progress.
  pub fn end(&mut self) {
    self.phase = Phase::Idle { last_run: None };
  }

  pub fn current_question(&self) -> Option<&Question> {
    match &self.phase {
      Phase::Active {
        questions, progress, ..
      } => questions.get(progress.current_index),
      Phase::Idle { .. } => None,
    }
  }

  pub fn progress(&self) -> Option<&QuizProgress> {
    match &self.phase {
      Phase::Active { progress, .. } => Some(progress),
      Phase::Idle { .. } => None,
    }
  }

  pub fn last_run(&self) -> Option<&QuizProgress> {
    match &self.phase {
      Phase::Idle { last_run } => last_run.as_ref(),
      Phase::Active { .. } => None,
    }
  }
}

/// Render-ready snapshot of a session.
#[derive(Debug, Clone)]
pub enum QuizView {
  Idle {
    config: QuizConfig,
    last_run: Option<QuizProgress>,
  },
  Active {
    /// None when the provider returned an empty set.
    question: Option<Question>,
    progress: QuizProgress,
  },
}

/// Cloneable handle to one session, shared between request handlers.
///
/// All mutation goes through a single async mutex; `start` releases it
/// around the provider await so the state-machine guards (not the lock)
/// keep overlapping calls well-defined.
#[derive(Clone, Default)]
pub struct SharedQuizSession {
  inner: Arc<Mutex<QuizSession>>,
}

impl SharedQuizSession {
  pub fn new() -> Self {
    Self::default()
  }

  pub async fn set_config(&self, patch: QuizConfigPatch) {
    self.inner.lock().await.set_config(patch);
  }

  /// Fetch a question set for the current configuration and install it.
  /// On provider failure the session state is untouched and the error is
  /// returned for the caller to surface.
  pub async fn start(&self, source: &dyn QuestionSource) -> Result<StartOutcome, ProviderError> {
    let (token, config) = self.inner.lock().await.begin_start();
    let questions = source.fetch_questions(&config).await?;
    let count = questions.len();
    let mut session = self.inner.lock().await;
    if session.install_questions(token, questions) {
      Ok(StartOutcome::Started(count))
    } else {
      Ok(StartOutcome::Superseded)
    }
  }

  pub async fn answer(
    &self,
    question_id: &str,
    option_id: Option<&str>,
    free_text: Option<&str>,
  ) -> Option<AnswerOutcome> {
    self
      .inner
      .lock()
      .await
      .answer(question_id, option_id, free_text)
  }

  pub async fn advance(&self) -> bool {
    self.inner.lock().await.advance()
  }

  pub async fn end(&self) {
    self.inner.lock().await.end();
  }

  pub async fn view(&self) -> QuizView {
    let session = self.inner.lock().await;
    match &session.phase {
      Phase::Idle { last_run } => QuizView::Idle {
        config: session.config.clone(),
        last_run: last_run.clone(),
      },
      Phase::Active {
        questions, progress, ..
      } => QuizView::Active {
        question: questions.get(progress.current_index).cloned(),
        progress: progress.clone(),
      },
    }
  }
}
