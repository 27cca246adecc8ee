//! The question catalog — a fixed, ordered list of one-word trivia questions.
//!
//! Records are built once at startup and never mutated. Lookup by id goes
//! through an index built alongside the ordered list.

use std::collections::HashMap;

use serde::Serialize;

use crate::{Error, Result};

// ─── Record ──────────────────────────────────────────────────────────────────

/// A single question. Immutable once the catalog is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRecord {
  pub id:               u32,
  pub prompt:           String,
  /// Single-token answers, compared case-insensitively.
  pub accepted_answers: Vec<String>,
  /// A pointer into the dataset; usually a query sketch.
  pub hint:             String,
}

impl QuestionRecord {
  pub fn new(
    id: u32,
    prompt: impl Into<String>,
    accepted_answers: &[&str],
    hint: impl Into<String>,
  ) -> Self {
    Self {
      id,
      prompt: prompt.into(),
      accepted_answers: accepted_answers.iter().map(|a| (*a).to_owned()).collect(),
      hint: hint.into(),
    }
  }

  /// Whether `answer` matches one of the accepted answers, ignoring case.
  pub fn accepts(&self, answer: &str) -> bool {
    let answer = answer.to_lowercase();
    self
      .accepted_answers
      .iter()
      .any(|accepted| accepted.to_lowercase() == answer)
  }

  /// The public face of the question; never carries the answers.
  pub fn view(&self) -> QuestionView {
    QuestionView { id: self.id, prompt: self.prompt.clone() }
  }
}

/// What the player is allowed to see of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionView {
  pub id:     u32,
  pub prompt: String,
}

/// The eight questions of "The Missing Trophy", in play order.
fn standard_questions() -> Vec<QuestionRecord> {
  vec![
    QuestionRecord::new(
      1,
      "What is the name of the guard?",
      &["Rohan"],
      "SELECT name FROM people WHERE role = 'guard'",
    ),
    QuestionRecord::new(
      2,
      "What is the name of the teacher?",
      &["Neha"],
      "SELECT name FROM people WHERE role = 'teacher'",
    ),
    QuestionRecord::new(
      3,
      "Who was at the Stage during theft?",
      &["Aisha"],
      "Join movements and locations, filter by place = 'Stage'",
    ),
    QuestionRecord::new(
      4,
      "What is at location id 3?",
      &["StorageRoom"],
      "SELECT place FROM locations WHERE id = 3",
    ),
    QuestionRecord::new(
      5,
      "Who is the volunteer?",
      &["Kabir"],
      "SELECT name FROM people WHERE role = 'volunteer'",
    ),
    QuestionRecord::new(
      6,
      "What role has storage access according to clues?",
      &["volunteer"],
      "SELECT description FROM clues WHERE id = 2",
    ),
    QuestionRecord::new(
      7,
      "Who went to location 3 at time 18:10?",
      &["Kabir"],
      "Find person_id from movements, then get name from people",
    ),
    QuestionRecord::new(
      8,
      "Who is the thief?",
      &["Kabir"],
      "The volunteer who had access and went to Storage Room",
    ),
  ]
}

// ─── Catalog ─────────────────────────────────────────────────────────────────

/// Ordered questions plus an id index.
#[derive(Debug, Clone)]
pub struct Catalog {
  questions: Vec<QuestionRecord>,
  by_id:     HashMap<u32, usize>,
}

impl Catalog {
  /// Build a catalog, rejecting zero or duplicate ids.
  pub fn new(questions: Vec<QuestionRecord>) -> Result<Self> {
    let mut by_id = HashMap::with_capacity(questions.len());
    for (index, q) in questions.iter().enumerate() {
      if q.id == 0 {
        return Err(Error::ZeroQuestionId);
      }
      if by_id.insert(q.id, index).is_some() {
        return Err(Error::DuplicateQuestion(q.id));
      }
    }
    Ok(Self { questions, by_id })
  }

  /// The fixed catalog for "The Missing Trophy" dataset, validated like any
  /// other.
  pub fn standard() -> Result<Self> { Self::new(standard_questions()) }

  pub fn get(&self, id: u32) -> Option<&QuestionRecord> {
    self.by_id.get(&id).map(|&i| &self.questions[i])
  }

  /// Like [`Catalog::get`], but an unknown id is an error.
  pub fn require(&self, id: u32) -> Result<&QuestionRecord> {
    self.get(id).ok_or(Error::UnknownQuestion(id))
  }

  pub fn contains(&self, id: u32) -> bool { self.by_id.contains_key(&id) }

  /// Questions in catalog order.
  pub fn questions(&self) -> &[QuestionRecord] { &self.questions }

  pub fn len(&self) -> usize { self.questions.len() }

  pub fn is_empty(&self) -> bool { self.questions.is_empty() }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn standard_catalog_has_eight_ordered_questions() {
    let catalog = Catalog::standard().unwrap();
    let ids: Vec<u32> = catalog.questions().iter().map(|q| q.id).collect();
    assert_eq!(ids, (1..=8).collect::<Vec<_>>());
  }

  #[test]
  fn standard_answers_match_the_dataset() {
    let catalog = Catalog::standard().unwrap();
    let expected = [
      "Rohan", "Neha", "Aisha", "StorageRoom", "Kabir", "volunteer", "Kabir", "Kabir",
    ];
    for (q, answer) in catalog.questions().iter().zip(expected) {
      assert_eq!(q.accepted_answers, vec![answer.to_owned()], "question {}", q.id);
    }
  }

  #[test]
  fn standard_catalog_goes_through_validation() {
    let catalog = Catalog::standard().unwrap();
    assert_eq!(catalog.len(), standard_questions().len());
    for q in standard_questions() {
      assert_eq!(catalog.require(q.id).unwrap().prompt, q.prompt);
    }

    let mut doubled = standard_questions();
    doubled.push(QuestionRecord::new(8, "again?", &["Kabir"], ""));
    assert!(matches!(Catalog::new(doubled), Err(Error::DuplicateQuestion(8))));
  }

  #[test]
  fn accepts_ignores_case() {
    let q = QuestionRecord::new(1, "?", &["StorageRoom"], "");
    assert!(q.accepts("storageroom"));
    assert!(q.accepts("STORAGEROOM"));
    assert!(!q.accepts("Storage"));
  }

  #[test]
  fn duplicate_ids_are_rejected() {
    let err = Catalog::new(vec![
      QuestionRecord::new(1, "a", &["x"], ""),
      QuestionRecord::new(1, "b", &["y"], ""),
    ])
    .unwrap_err();
    assert!(matches!(err, Error::DuplicateQuestion(1)));
  }

  #[test]
  fn zero_id_is_rejected() {
    let err = Catalog::new(vec![QuestionRecord::new(0, "a", &["x"], "")]).unwrap_err();
    assert!(matches!(err, Error::ZeroQuestionId));
  }

  #[test]
  fn require_unknown_id_is_an_error() {
    let catalog = Catalog::standard().unwrap();
    assert!(matches!(catalog.require(99), Err(Error::UnknownQuestion(99))));
    assert_eq!(catalog.require(4).unwrap().accepted_answers[0], "StorageRoom");
  }

  #[test]
  fn view_hides_answers() {
    let catalog = Catalog::standard().unwrap();
    let json = serde_json::to_string(&catalog.questions()[0].view()).unwrap();
    assert!(!json.contains("Rohan"), "answer leaked: {json}");
  }
}
