pub mod question;
pub mod quiz;

pub use question::{
  AnswerOption, Category, CompetencyDomain, Difficulty, Question, QuestionKind, Subtopic,
};
pub use quiz::{QuizConfig, QuizConfigPatch, QuizProgress};
