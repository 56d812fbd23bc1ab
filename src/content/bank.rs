//! Built-in sample content: topic taxonomy and question bank.
//!
//! Stands in for a real content service. Every question is classified by
//! category, optional subtopic, difficulty, and competency domain so the
//! selection filters have something to bite on.

use crate::domain::{
  AnswerOption, Category, CompetencyDomain, Difficulty, Question, QuestionKind, Subtopic,
};

pub fn categories() -> Vec<Category> {
  vec![
    Category {
      id: "cardiovascular".to_string(),
      name: "Cardiovascular".to_string(),
      subtopics: vec![
        subtopic("cardio-anatomy", "Cardiac Anatomy"),
        subtopic("cardio-physiology", "Cardiac Physiology"),
        subtopic("cardio-pathology", "Cardiac Pathology"),
      ],
    },
    Category {
      id: "renal".to_string(),
      name: "Renal".to_string(),
      subtopics: vec![
        subtopic("renal-anatomy", "Renal Anatomy"),
        subtopic("renal-physiology", "Renal Physiology"),
        subtopic("renal-pathology", "Renal Pathology"),
      ],
    },
    Category {
      id: "neurology".to_string(),
      name: "Neurology".to_string(),
      subtopics: vec![
        subtopic("neuro-anatomy", "Neuroanatomy"),
        subtopic("neuro-physiology", "Neurophysiology"),
        subtopic("neuro-pathology", "Neuropathology"),
      ],
    },
  ]
}

pub fn competency_domains() -> Vec<CompetencyDomain> {
  vec![
    domain("medical-knowledge", "Medical Knowledge"),
    domain("diagnosis", "Patient Care & Diagnosis"),
    domain("management", "Management & Treatment"),
  ]
}

pub fn sample_questions() -> Vec<Question> {
  vec![
    mcq(
      "cv-inferior-mi",
      "A 65-year-old man presents with crushing chest pain radiating to the left arm. \
       ECG shows ST-segment elevation in leads II, III, and aVF. Which artery is most \
       likely occluded?",
      &[
        ("a", "Left anterior descending artery", false),
        ("b", "Left circumflex artery", false),
        ("c", "Right coronary artery", true),
        ("d", "Left main coronary artery", false),
      ],
      "ST-segment elevation in leads II, III, and aVF indicates an inferior wall MI, \
       which is typically supplied by the right coronary artery.",
      "cardiovascular",
      Some("cardio-pathology"),
      Difficulty::Medium,
      Some("diagnosis"),
    ),
    mcq(
      "rn-nephrotic",
      "Which of the following is NOT a characteristic feature of nephrotic syndrome?",
      &[
        ("a", "Proteinuria", false),
        ("b", "Hypoalbuminemia", false),
        ("c", "Hyperlipidemia", false),
        ("d", "Hematuria", true),
      ],
      "Classic nephrotic syndrome is characterized by heavy proteinuria (>3.5g/day), \
       hypoalbuminemia, hyperlipidemia, and edema. Hematuria is more commonly \
       associated with nephritic syndrome.",
      "renal",
      Some("renal-pathology"),
      Difficulty::Medium,
      Some("medical-knowledge"),
    ),
    mcq(
      "nr-broca",
      "A patient produces effortful, non-fluent speech with intact comprehension. \
       The lesion is most likely in which lobe?",
      &[
        ("a", "Frontal", true),
        ("b", "Temporal", false),
        ("c", "Parietal", false),
        ("d", "Occipital", false),
      ],
      "Broca's area sits in the inferior frontal gyrus of the dominant hemisphere; \
       damage produces expressive aphasia with preserved comprehension.",
      "neurology",
      Some("neuro-anatomy"),
      Difficulty::Easy,
      Some("medical-knowledge"),
    ),
    mcq(
      "cv-isovolumetric",
      "Isovolumetric ventricular contraction begins immediately after closure of which valve?",
      &[
        ("a", "Aortic valve", false),
        ("b", "Mitral valve", true),
        ("c", "Pulmonic valve", false),
        ("d", "Eustachian valve", false),
      ],
      "Closure of the atrioventricular valves (mitral on the left) marks the start of \
       isovolumetric contraction; all four valves are closed while ventricular \
       pressure rises.",
      "cardiovascular",
      Some("cardio-physiology"),
      Difficulty::Hard,
      Some("medical-knowledge"),
    ),
    mcq(
      "rn-proximal-sodium",
      "The majority of filtered sodium is reabsorbed in which nephron segment?",
      &[
        ("a", "Proximal tubule", true),
        ("b", "Thick ascending limb", false),
        ("c", "Distal convoluted tubule", false),
        ("d", "Collecting duct", false),
      ],
      "Roughly two thirds of filtered sodium and water is reclaimed in the proximal \
       tubule, coupled to glucose, amino acid, and bicarbonate transport.",
      "renal",
      Some("renal-physiology"),
      Difficulty::Medium,
      Some("medical-knowledge"),
    ),
    mcq(
      "nr-mca-stroke",
      "A 70-year-old woman develops sudden right arm and face weakness with global \
       aphasia. Which vessel is most likely occluded?",
      &[
        ("a", "Left middle cerebral artery", true),
        ("b", "Right middle cerebral artery", false),
        ("c", "Left posterior cerebral artery", false),
        ("d", "Basilar artery", false),
      ],
      "Face-and-arm-predominant weakness with aphasia localizes to the dominant \
       (usually left) MCA territory.",
      "neurology",
      Some("neuro-pathology"),
      Difficulty::Medium,
      Some("diagnosis"),
    ),
    mcq(
      "rn-hyperkalemia-rx",
      "A dialysis patient has a potassium of 7.1 mmol/L with peaked T waves. What is \
       the first medication to give?",
      &[
        ("a", "IV calcium gluconate", true),
        ("b", "Oral sodium polystyrene sulfonate", false),
        ("c", "IV insulin with dextrose", false),
        ("d", "Nebulized albuterol", false),
      ],
      "Calcium stabilizes the myocardial membrane and is given first when ECG changes \
       are present; insulin/dextrose and albuterol shift potassium afterwards.",
      "renal",
      Some("renal-pathology"),
      Difficulty::Hard,
      Some("management"),
    ),
    free_text(
      "rn-hypokalemia",
      QuestionKind::Cloze,
      "A serum potassium concentration below 3.5 mmol/L is termed ___.",
      "hypokalemia",
      "Hypokalemia presents with weakness, ileus, and characteristic ECG changes \
       (flattened T waves, U waves).",
      "renal",
      Some("renal-physiology"),
      Difficulty::Easy,
      Some("medical-knowledge"),
    ),
    free_text(
      "nr-parkinson-nt",
      QuestionKind::Cloze,
      "The neurotransmitter depleted in the substantia nigra in Parkinson disease is ___.",
      "dopamine",
      "Loss of dopaminergic neurons in the substantia nigra pars compacta underlies \
       the bradykinesia, rigidity, and tremor of Parkinson disease.",
      "neurology",
      Some("neuro-physiology"),
      Difficulty::Easy,
      Some("medical-knowledge"),
    ),
    free_text(
      "cv-mitral-valve",
      QuestionKind::FillInBlank,
      "Name the valve separating the left atrium from the left ventricle.",
      "mitral valve",
      "The mitral (bicuspid) valve closes at the onset of systole; its incompetence \
       produces a holosystolic murmur radiating to the axilla.",
      "cardiovascular",
      Some("cardio-anatomy"),
      Difficulty::Easy,
      Some("medical-knowledge"),
    ),
    free_text(
      "nr-csf-glucose",
      QuestionKind::FillInBlank,
      "In bacterial meningitis, CSF analysis classically shows a low concentration of ___.",
      "glucose",
      "Bacterial consumption and impaired transport drop CSF glucose below ~40% of \
       serum; viral meningitis usually leaves it normal.",
      "neurology",
      Some("neuro-pathology"),
      Difficulty::Medium,
      Some("diagnosis"),
    ),
    flashcard(
      "cv-as-triad",
      "What is the classic symptom triad of severe aortic stenosis?",
      "Angina, syncope, and exertional dyspnea — each marks a step down in median \
       survival without valve replacement.",
      "cardiovascular",
      Some("cardio-pathology"),
      Difficulty::Medium,
    ),
    flashcard(
      "rn-raas",
      "Walk through the renin-angiotensin-aldosterone cascade.",
      "Renin cleaves angiotensinogen to angiotensin I; ACE converts it to \
       angiotensin II, which vasoconstricts and triggers aldosterone release, \
       promoting distal sodium retention.",
      "renal",
      Some("renal-physiology"),
      Difficulty::Medium,
    ),
    mcq(
      "cv-stable-angina",
      "Which agent is first-line for symptom control in chronic stable angina?",
      &[
        ("a", "A beta blocker", true),
        ("b", "Ranolazine", false),
        ("c", "Ivabradine", false),
        ("d", "A loop diuretic", false),
      ],
      "Beta blockade lowers heart rate and contractility, cutting myocardial oxygen \
       demand; the other agents are add-on or niche therapy.",
      "cardiovascular",
      Some("cardio-pathology"),
      Difficulty::Hard,
      Some("management"),
    ),
  ]
}

fn subtopic(id: &str, name: &str) -> Subtopic {
  Subtopic {
    id: id.to_string(),
    name: name.to_string(),
  }
}

fn domain(id: &str, name: &str) -> CompetencyDomain {
  CompetencyDomain {
    id: id.to_string(),
    name: name.to_string(),
  }
}

#[allow(clippy::too_many_arguments)]
fn mcq(
  id: &str,
  stem: &str,
  options: &[(&str, &str, bool)],
  explanation: &str,
  category_id: &str,
  subtopic_id: Option<&str>,
  difficulty: Difficulty,
  domain_id: Option<&str>,
) -> Question {
  Question {
    id: id.to_string(),
    kind: QuestionKind::MultipleChoice,
    stem: stem.to_string(),
    options: options
      .iter()
      .map(|(id, text, is_correct)| AnswerOption {
        id: id.to_string(),
        text: text.to_string(),
        is_correct: *is_correct,
      })
      .collect(),
    correct_answer: None,
    explanation: explanation.to_string(),
    category_id: category_id.to_string(),
    subtopic_id: subtopic_id.map(str::to_string),
    difficulty,
    domain_id: domain_id.map(str::to_string),
  }
}

#[allow(clippy::too_many_arguments)]
fn free_text(
  id: &str,
  kind: QuestionKind,
  stem: &str,
  answer: &str,
  explanation: &str,
  category_id: &str,
  subtopic_id: Option<&str>,
  difficulty: Difficulty,
  domain_id: Option<&str>,
) -> Question {
  Question {
    id: id.to_string(),
    kind,
    stem: stem.to_string(),
    options: vec![],
    correct_answer: Some(answer.to_string()),
    explanation: explanation.to_string(),
    category_id: category_id.to_string(),
    subtopic_id: subtopic_id.map(str::to_string),
    difficulty,
    domain_id: domain_id.map(str::to_string),
  }
}

fn flashcard(
  id: &str,
  stem: &str,
  explanation: &str,
  category_id: &str,
  subtopic_id: Option<&str>,
  difficulty: Difficulty,
) -> Question {
  Question {
    id: id.to_string(),
    kind: QuestionKind::Flashcard,
    stem: stem.to_string(),
    options: vec![],
    correct_answer: None,
    explanation: explanation.to_string(),
    category_id: category_id.to_string(),
    subtopic_id: subtopic_id.map(str::to_string),
    difficulty,
    domain_id: None,
  }
}
