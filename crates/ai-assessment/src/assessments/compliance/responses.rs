use std::collections::{BTreeMap, HashSet};

use super::domain::{AnswerStatus, Question, QuestionId};
use crate::assessments::ValidationError;

/// Raw answers keyed by qualified question id, as supplied by a caller.
pub type Answers = BTreeMap<QuestionId, AnswerStatus>;

/// One answered question.
#[derive(Debug, Clone, Copy)]
pub struct Response<'c> {
    pub question: &'c Question,
    pub status: AnswerStatus,
}

/// Complete, validated answer set for one assessment session. Immutable once built:
/// a resubmission goes through [`submit_responses`] again and yields a new set.
#[derive(Debug, Clone)]
pub struct ResponseSet<'c> {
    responses: Vec<Response<'c>>,
}

impl<'c> ResponseSet<'c> {
    /// Responses in the order of the question list they were validated against.
    pub fn responses(&self) -> &[Response<'c>] {
        &self.responses
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    pub fn status_of(&self, id: &QuestionId) -> Option<AnswerStatus> {
        self.responses
            .iter()
            .find(|response| &response.question.id == id)
            .map(|response| response.status)
    }
}

/// Pair every filtered question with its answer. Fails when an answer references a
/// question outside `questions`, or when any question has no answer.
pub fn submit_responses<'c>(
    questions: &[&'c Question],
    answers: &Answers,
) -> Result<ResponseSet<'c>, ValidationError> {
    let known: HashSet<&QuestionId> = questions.iter().map(|question| &question.id).collect();

    let unknown: Vec<String> = answers
        .keys()
        .filter(|id| !known.contains(id))
        .map(|id| id.0.clone())
        .collect();
    if !unknown.is_empty() {
        return Err(ValidationError::UnknownQuestions(unknown));
    }

    let mut responses = Vec::with_capacity(questions.len());
    let mut missing = Vec::new();
    for &question in questions {
        match answers.get(&question.id) {
            Some(status) => responses.push(Response {
                question,
                status: *status,
            }),
            None => missing.push(question.id.0.clone()),
        }
    }

    if !missing.is_empty() {
        return Err(ValidationError::MissingResponses(missing));
    }

    Ok(ResponseSet { responses })
}
