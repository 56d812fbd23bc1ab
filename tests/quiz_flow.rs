//! End-to-end tests over the HTTP surface: auth gating, the full quiz flow,
//! provider failure handling, and the upload lifecycle. Question sources are
//! stubbed so page contents are deterministic.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::http::StatusCode;
use axum_test::TestServer;
use axum_test::multipart::{MultipartForm, Part};

use medprep::content::{ProviderError, QuestionSource};
use medprep::dashboard::MetricsService;
use medprep::domain::{AnswerOption, Difficulty, Question, QuestionKind, QuizConfig};
use medprep::router;
use medprep::state::AppState;

struct FixedSource(Vec<Question>);

#[async_trait]
impl QuestionSource for FixedSource {
  async fn fetch_questions(&self, config: &QuizConfig) -> Result<Vec<Question>, ProviderError> {
    let mut questions = self.0.clone();
    questions.truncate(config.question_count);
    Ok(questions)
  }
}

struct FailingSource;

#[async_trait]
impl QuestionSource for FailingSource {
  async fn fetch_questions(&self, _config: &QuizConfig) -> Result<Vec<Question>, ProviderError> {
    Err(ProviderError::Unavailable("content service is down".to_string()))
  }
}

fn mcq_question() -> Question {
  Question {
    id: "q-artery".to_string(),
    kind: QuestionKind::MultipleChoice,
    stem: "Which artery supplies the inferior wall of the heart?".to_string(),
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
    explanation: "The RCA supplies the inferior wall in right-dominant circulation.".to_string(),
    category_id: "cardiovascular".to_string(),
    subtopic_id: None,
    difficulty: Difficulty::Medium,
    domain_id: None,
  }
}

fn cloze_question() -> Question {
  Question {
    id: "q-potassium".to_string(),
    kind: QuestionKind::Cloze,
    stem: "Serum potassium below 3.5 mmol/L is termed ___.".to_string(),
    options: vec![],
    correct_answer: Some("hypokalemia".to_string()),
    explanation: "Low potassium flattens T waves and produces U waves.".to_string(),
    category_id: "renal".to_string(),
    subtopic_id: None,
    difficulty: Difficulty::Easy,
    domain_id: None,
  }
}

fn server_with(source: Arc<dyn QuestionSource>) -> TestServer {
  let state = AppState::with_parts(source, MetricsService::with_latency(Duration::ZERO), Duration::ZERO);
  TestServer::builder()
    .save_cookies()
    .build(router(state))
    .expect("test server should start")
}

async fn sign_in(server: &TestServer) {
  let response = server
    .post("/login")
    .form(&[("email", "doc@example.com"), ("password", "hunter2secure")])
    .await;
  response.assert_status(StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_protected_pages_redirect_anonymous_users_to_login() {
  let server = server_with(Arc::new(FixedSource(vec![])));
  for path in ["/dashboard", "/practice", "/content", "/analytics"] {
    let response = server.get(path).await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/login");
  }
}

#[tokio::test]
async fn test_login_round_trip_authenticates_the_session() {
  let server = server_with(Arc::new(FixedSource(vec![])));
  sign_in(&server).await;

  let dashboard = server.get("/dashboard").await;
  dashboard.assert_status_ok();
  let body = dashboard.text();
  assert!(body.contains("Topic mastery"));
  assert!(body.contains("doc@example.com"));
}

#[tokio::test]
async fn test_logout_clears_the_session() {
  let server = server_with(Arc::new(FixedSource(vec![])));
  sign_in(&server).await;

  server.post("/logout").await.assert_status(StatusCode::SEE_OTHER);
  let response = server.get("/dashboard").await;
  response.assert_status(StatusCode::SEE_OTHER);
  assert_eq!(response.header("location"), "/login");
}

#[tokio::test]
async fn test_full_quiz_run_over_http() {
  let server = server_with(Arc::new(FixedSource(vec![mcq_question(), cloze_question()])));
  sign_in(&server).await;

  // Idle session shows the configuration form
  let configure = server.get("/practice").await;
  configure.assert_status_ok();
  assert!(configure.text().contains("Custom quiz"));

  // Start a two-question run
  let start = server
    .post("/practice/start")
    .form(&[
      ("category_id", ""),
      ("subtopic_id", ""),
      ("difficulty", ""),
      ("domain_id", ""),
      ("question_count", "2"),
    ])
    .await;
  start.assert_status(StatusCode::SEE_OTHER);

  let first = server.get("/practice").await;
  first.assert_status_ok();
  let body = first.text();
  assert!(body.contains("Question 1 of 2"));
  assert!(body.contains("Which artery supplies the inferior wall"));

  // Correct answer gets graded and explained
  let graded = server
    .post("/practice/answer")
    .form(&[("question_id", "q-artery"), ("option_id", "c")])
    .await;
  graded.assert_status_ok();
  let body = graded.text();
  assert!(body.contains("Correct!"));
  assert!(body.contains("Explanation"));
  assert!(body.contains("1 correct"));

  server.post("/practice/next").await.assert_status(StatusCode::SEE_OTHER);

  let second = server.get("/practice").await;
  assert!(second.text().contains("Question 2 of 2"));

  // Wrong free-text answer shows the canonical one
  let graded = server
    .post("/practice/answer")
    .form(&[("question_id", "q-potassium"), ("answer_text", "hyperkalemia")])
    .await;
  graded.assert_status_ok();
  let body = graded.text();
  assert!(body.contains("Incorrect"));
  assert!(body.contains("hypokalemia"));

  // Advancing past the last question finishes the run
  server.post("/practice/next").await.assert_status(StatusCode::SEE_OTHER);

  let summary = server.get("/practice").await;
  summary.assert_status_ok();
  let body = summary.text();
  assert!(body.contains("Last quiz"));
  assert!(body.contains("1 correct"));
  assert!(body.contains("1 incorrect"));
}

#[tokio::test]
async fn test_free_text_grading_is_case_insensitive_over_http() {
  let server = server_with(Arc::new(FixedSource(vec![cloze_question()])));
  sign_in(&server).await;

  server
    .post("/practice/start")
    .form(&[("question_count", "1")])
    .await
    .assert_status(StatusCode::SEE_OTHER);

  let graded = server
    .post("/practice/answer")
    .form(&[("question_id", "q-potassium"), ("answer_text", "Hypokalemia")])
    .await;
  graded.assert_status_ok();
  assert!(graded.text().contains("Correct!"));
}

#[tokio::test]
async fn test_empty_question_set_renders_no_questions_view() {
  let server = server_with(Arc::new(FixedSource(vec![])));
  sign_in(&server).await;

  server
    .post("/practice/start")
    .form(&[("question_count", "10")])
    .await
    .assert_status(StatusCode::SEE_OTHER);

  let page = server.get("/practice").await;
  page.assert_status_ok();
  assert!(page.text().contains("No questions matched"));

  // Advancing out of the empty run lands back on the configuration form
  server.post("/practice/next").await.assert_status(StatusCode::SEE_OTHER);
  let page = server.get("/practice").await;
  assert!(page.text().contains("Custom quiz"));
}

#[tokio::test]
async fn test_provider_failure_surfaces_an_error_and_stays_idle() {
  let server = server_with(Arc::new(FailingSource));
  sign_in(&server).await;

  let response = server
    .post("/practice/start")
    .form(&[("question_count", "5")])
    .await;
  response.assert_status_ok();
  let body = response.text();
  assert!(body.contains("Could not load questions"));
  assert!(body.contains("Custom quiz"));

  // Still idle: the practice page offers configuration, not a question
  let page = server.get("/practice").await;
  assert!(page.text().contains("Custom quiz"));
}

#[tokio::test]
async fn test_upload_appears_in_content_list_and_can_be_deleted() {
  let server = server_with(Arc::new(FixedSource(vec![])));
  sign_in(&server).await;

  let form = MultipartForm::new().add_part(
    "file",
    Part::bytes("fake pdf bytes".as_bytes().to_vec())
      .file_name("renal-notes.pdf")
      .mime_type("application/pdf"),
  );
  server
    .post("/content/upload")
    .multipart(form)
    .await
    .assert_status(StatusCode::SEE_OTHER);

  let listing = server.get("/content").await;
  listing.assert_status_ok();
  let body = listing.text();
  assert!(body.contains("renal-notes.pdf"));

  // Pull the generated id out of the delete form and remove the file
  let id = body
    .split("name=\"file_id\" value=\"")
    .nth(1)
    .and_then(|rest| rest.split('"').next())
    .expect("file id should be rendered")
    .to_string();
  server
    .post("/content/delete")
    .form(&[("file_id", id.as_str())])
    .await
    .assert_status(StatusCode::SEE_OTHER);

  assert!(!server.get("/content").await.text().contains("renal-notes.pdf"));
}

#[tokio::test]
async fn test_diagnostic_report_is_logged_and_acknowledged() {
  let server = server_with(Arc::new(FixedSource(vec![])));
  sign_in(&server).await;

  let response = server
    .post("/diagnostic")
    .json(&serde_json::json!({
      "page": "/practice",
      "message": "option list rendered empty",
      "detail": { "question_id": "q-artery" }
    }))
    .await;
  response.assert_status(StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_quiz_sessions_are_per_user() {
  let server = server_with(Arc::new(FixedSource(vec![mcq_question()])));
  sign_in(&server).await;
  server
    .post("/practice/start")
    .form(&[("question_count", "1")])
    .await
    .assert_status(StatusCode::SEE_OTHER);
  assert!(server.get("/practice").await.text().contains("Question 1 of 1"));

  // A different account sees its own idle session
  server.post("/logout").await.assert_status(StatusCode::SEE_OTHER);
  server
    .post("/login")
    .form(&[("email", "other@example.com"), ("password", "pw12345678")])
    .await
    .assert_status(StatusCode::SEE_OTHER);
  assert!(server.get("/practice").await.text().contains("Custom quiz"));
}
