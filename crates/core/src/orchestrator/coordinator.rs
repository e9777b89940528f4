//! # Answer Coordinator
//!
//! Runs the two answer phases in order:
//!
//! 1. **Primary** - tool-augmented generation, bounded by a timeout.
//! 2. **Fallback** - direct Wikipedia search, answer assembled from snippets.
//!
//! Generation failures are logged and swallowed. Every path ends in a
//! well-formed [`Answer`].

use std::sync::Arc;
use std::time::Duration;

use super::answer::{Answer, Question};
use super::fallback::extractive_answer;
use super::generator::AnswerGenerator;
use super::phase::{AnswerOutcome, AnswerPhase};
use crate::wiki::SnippetSource;

/// Default upper bound on one generation attempt
pub const DEFAULT_GENERATION_TIMEOUT: Duration = Duration::from_secs(60);

/// Answers questions, degrading from generation to extraction
#[derive(Clone)]
pub struct AnswerOrchestrator {
    generator: Arc<dyn AnswerGenerator>,
    source: Arc<dyn SnippetSource>,
    generation_timeout: Duration,
}

impl AnswerOrchestrator {
    pub fn new(generator: Arc<dyn AnswerGenerator>, source: Arc<dyn SnippetSource>) -> Self {
        Self {
            generator,
            source,
            generation_timeout: DEFAULT_GENERATION_TIMEOUT,
        }
    }

    pub fn with_generation_timeout(mut self, timeout: Duration) -> Self {
        self.generation_timeout = timeout;
        self
    }

    /// Answer `question`. Never fails.
    pub async fn answer_question(&self, question: &Question) -> Answer {
        self.answer_question_traced(question).await.answer
    }

    /// Like [`answer_question`](Self::answer_question), also reporting which
    /// phase produced the answer.
    #[tracing::instrument(skip(self), fields(question_preview = %question.as_str().chars().take(50).collect::<String>()))]
    pub async fn answer_question_traced(&self, question: &Question) -> AnswerOutcome {
        if let Some(answer) = self.primary(question).await {
            tracing::info!(sources = answer.sources.len(), "Answered by generation");
            return AnswerOutcome {
                answer,
                phase: AnswerPhase::Primary,
            };
        }

        let answer = self.fallback(question).await;
        tracing::info!(sources = answer.sources.len(), "Answered by extraction");
        AnswerOutcome {
            answer,
            phase: AnswerPhase::Fallback,
        }
    }

    /// One generation attempt. `None` means move on to the fallback.
    async fn primary(&self, question: &Question) -> Option<Answer> {
        let attempt = tokio::time::timeout(self.generation_timeout, self.generator.generate(question));

        match attempt.await {
            Ok(Ok(Some(answer))) if !answer.answer.trim().is_empty() => Some(answer),
            Ok(Ok(Some(_))) => {
                tracing::warn!("Generation returned a blank answer, falling back");
                None
            }
            Ok(Ok(None)) => {
                tracing::warn!("Generation returned no output, falling back");
                None
            }
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "Generation failed, falling back");
                None
            }
            Err(_) => {
                tracing::warn!(
                    timeout_secs = self.generation_timeout.as_secs_f32(),
                    "Generation timed out, falling back"
                );
                None
            }
        }
    }

    async fn fallback(&self, question: &Question) -> Answer {
        let snippets = self.source.search(question.as_str()).await;
        tracing::debug!(count = snippets.len(), "Fallback search complete");
        extractive_answer(&snippets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orchestrator::answer::NOT_FOUND_ANSWER;
    use crate::wiki::{page_url, SearchSnippet};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    const BASE: &str = "https://en.wikipedia.org/wiki/";

    enum Behaviour {
        Succeed(Answer),
        Fail,
        Empty,
        Hang,
    }

    struct FakeGenerator {
        behaviour: Behaviour,
        calls: AtomicUsize,
    }

    impl FakeGenerator {
        fn new(behaviour: Behaviour) -> Arc<Self> {
            Arc::new(Self {
                behaviour,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl AnswerGenerator for FakeGenerator {
        async fn generate(&self, _question: &Question) -> anyhow::Result<Option<Answer>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.behaviour {
                Behaviour::Succeed(answer) => Ok(Some(answer.clone())),
                Behaviour::Fail => anyhow::bail!("model unavailable"),
                Behaviour::Empty => Ok(None),
                Behaviour::Hang => {
                    tokio::time::sleep(Duration::from_secs(30)).await;
                    Ok(None)
                }
            }
        }
    }

    struct FakeSource {
        snippets: Vec<SearchSnippet>,
        queries: Mutex<Vec<String>>,
    }

    impl FakeSource {
        fn new(pages: &[(&str, &str)]) -> Arc<Self> {
            Arc::new(Self {
                snippets: pages
                    .iter()
                    .map(|(title, extract)| SearchSnippet {
                        title: title.to_string(),
                        extract: extract.to_string(),
                        url: page_url(BASE, title),
                    })
                    .collect(),
                queries: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl SnippetSource for FakeSource {
        async fn search(&self, query: &str) -> Vec<SearchSnippet> {
            self.queries.lock().unwrap().push(query.to_string());
            self.snippets.clone()
        }
    }

    fn question(text: &str) -> Question {
        Question::new(text).unwrap()
    }

    #[tokio::test]
    async fn test_generated_answer_is_returned_verbatim() {
        let generated = Answer::new(
            "Mount Everest is 8,849 m tall.",
            vec![page_url(BASE, "Mount Everest")],
        );
        let generator = FakeGenerator::new(Behaviour::Succeed(generated.clone()));
        let source = FakeSource::new(&[("Unrelated", "should not appear")]);
        let orchestrator = AnswerOrchestrator::new(generator.clone(), source.clone());

        let outcome = orchestrator
            .answer_question_traced(&question("How tall is Everest?"))
            .await;

        assert_eq!(outcome.answer, generated);
        assert_eq!(outcome.phase, AnswerPhase::Primary);
        assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
        assert!(source.queries.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_generation_failure_falls_back_to_extracts() {
        let generator = FakeGenerator::new(Behaviour::Fail);
        let source = FakeSource::new(&[("A", "foo"), ("B", "")]);
        let orchestrator = AnswerOrchestrator::new(generator, source.clone());

        let outcome = orchestrator.answer_question_traced(&question("letters")).await;

        assert_eq!(outcome.phase, AnswerPhase::Fallback);
        assert_eq!(outcome.answer.answer, "A: foo\n\nB: No summary available.");
        assert_eq!(
            outcome.answer.sources,
            vec![page_url(BASE, "A"), page_url(BASE, "B")]
        );
        assert_eq!(*source.queries.lock().unwrap(), vec!["letters"]);
    }

    #[tokio::test]
    async fn test_missing_output_falls_back() {
        let orchestrator = AnswerOrchestrator::new(
            FakeGenerator::new(Behaviour::Empty),
            FakeSource::new(&[("Rust (programming language)", "A systems language.")]),
        );

        let answer = orchestrator.answer_question(&question("What is Rust?")).await;

        assert_eq!(
            answer.answer,
            "Rust (programming language): A systems language."
        );
    }

    #[tokio::test]
    async fn test_blank_generated_answer_falls_back() {
        let orchestrator = AnswerOrchestrator::new(
            FakeGenerator::new(Behaviour::Succeed(Answer::new("   ", vec![]))),
            FakeSource::new(&[("Moon", "Natural satellite.")]),
        );

        let outcome = orchestrator.answer_question_traced(&question("moon")).await;

        assert_eq!(outcome.phase, AnswerPhase::Fallback);
        assert_eq!(outcome.answer.answer, "Moon: Natural satellite.");
    }

    #[tokio::test]
    async fn test_generation_timeout_falls_back() {
        let orchestrator = AnswerOrchestrator::new(
            FakeGenerator::new(Behaviour::Hang),
            FakeSource::new(&[("Sun", "A star.")]),
        )
        .with_generation_timeout(Duration::from_millis(50));

        let outcome = orchestrator.answer_question_traced(&question("sun")).await;

        assert_eq!(outcome.phase, AnswerPhase::Fallback);
        assert_eq!(outcome.answer.answer, "Sun: A star.");
    }

    #[tokio::test]
    async fn test_nothing_anywhere_is_sentinel() {
        let orchestrator =
            AnswerOrchestrator::new(FakeGenerator::new(Behaviour::Fail), FakeSource::new(&[]));

        let answer = orchestrator.answer_question(&question("xyzzy plugh")).await;

        assert_eq!(
            answer,
            Answer {
                answer: NOT_FOUND_ANSWER.to_string(),
                sources: vec![],
            }
        );
    }

    #[tokio::test]
    async fn test_answer_is_never_empty() {
        let cases: Vec<(Behaviour, Vec<(&str, &str)>)> = vec![
            (Behaviour::Fail, vec![]),
            (Behaviour::Empty, vec![("X", "")]),
            (Behaviour::Fail, vec![("Y", "y"), ("Z", "")]),
            (
                Behaviour::Succeed(Answer::new("ok", vec![])),
                vec![],
            ),
        ];

        for (behaviour, pages) in cases {
            let orchestrator =
                AnswerOrchestrator::new(FakeGenerator::new(behaviour), FakeSource::new(&pages));
            let answer = orchestrator.answer_question(&question("anything")).await;
            assert!(!answer.answer.trim().is_empty());
        }
    }

    #[tokio::test]
    async fn test_fallback_sources_come_from_retrieved_snippets() {
        let source = FakeSource::new(&[
            ("New York City", "Largest city in the US."),
            ("Brooklyn", ""),
            ("Manhattan", "Borough."),
        ]);
        let orchestrator =
            AnswerOrchestrator::new(FakeGenerator::new(Behaviour::Fail), source.clone());

        let answer = orchestrator.answer_question(&question("nyc")).await;

        let retrieved: Vec<String> = source
            .snippets
            .iter()
            .map(|s| page_url(BASE, &s.title))
            .collect();
        assert_eq!(answer.sources, retrieved);
    }
}
