use crate::error::{ContentError, DeckError};
use crate::inline_check::InlineCheck;
use crate::models::{Question, QuestionSet, RawQuestion};
use crate::quiz::{DEFAULT_PASS_THRESHOLD, QuizSession};
use crate::selection::{DifficultyWeights, draw_balanced};
use rand::Rng;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DECK_EXTENSION: &str = "json";

#[derive(Debug, Deserialize)]
struct RawDeck {
    #[serde(default)]
    title: Option<String>,
    #[serde(default, alias = "quickChecks", alias = "quickCheckQuestions")]
    quick_checks: Vec<RawQuestion>,
    #[serde(alias = "quizQuestions")]
    questions: Vec<RawQuestion>,
    #[serde(default, alias = "passThreshold")]
    pass_threshold: Option<u8>,
    #[serde(default, alias = "totalQuestions")]
    question_count: Option<usize>,
    #[serde(default)]
    categories: Vec<String>,
    #[serde(default, alias = "difficultyWeights")]
    difficulty_weights: Option<DifficultyWeights>,
}

/// A titled bundle of inline checks and quiz questions loaded from one file.
#[derive(Debug, Clone)]
pub struct Deck {
    pub title: String,
    pub quick_checks: Vec<Question>,
    pub questions: QuestionSet,
    pub pass_threshold: u8,
}

impl Deck {
    pub fn inline_checks(&self) -> Vec<InlineCheck> {
        self.quick_checks.iter().cloned().map(InlineCheck::new).collect()
    }

    pub fn start_quiz(&self) -> QuizSession {
        QuizSession::new(self.questions.clone())
    }
}

pub fn get_deck_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    if dir.is_dir()
        && let Ok(entries) = fs::read_dir(dir)
    {
        for entry in entries.flatten() {
            if let Some(ext) = entry.path().extension()
                && ext == DECK_EXTENSION
            {
                files.push(entry.path());
            }
        }
    }

    files.sort();
    files
}

pub fn deck_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

pub fn load_deck<R: Rng + ?Sized>(path: &Path, rng: &mut R) -> Result<Deck, DeckError> {
    let content = fs::read_to_string(path).map_err(|source| DeckError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let raw: RawDeck = serde_json::from_str(&content).map_err(|source| DeckError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    let deck = build_deck(raw, deck_name(path), rng).map_err(|source| DeckError::Content {
        path: path.to_path_buf(),
        source,
    })?;

    log::info!(
        "loaded deck {:?} from {}: {} questions, {} inline checks",
        deck.title,
        path.display(),
        deck.questions.len(),
        deck.quick_checks.len()
    );
    Ok(deck)
}

fn build_deck<R: Rng + ?Sized>(
    raw: RawDeck,
    fallback_title: String,
    rng: &mut R,
) -> Result<Deck, ContentError> {
    let pass_threshold = raw.pass_threshold.unwrap_or(DEFAULT_PASS_THRESHOLD);
    if pass_threshold > 100 {
        return Err(ContentError::InvalidPassThreshold(pass_threshold));
    }
    if let Some(weights) = &raw.difficulty_weights {
        weights.validate()?;
    }

    let quick_checks = raw
        .quick_checks
        .into_iter()
        .map(Question::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    let bank = raw
        .questions
        .into_iter()
        .map(Question::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    let questions = match raw.question_count {
        Some(count) if count != bank.len() => draw_balanced(
            rng,
            &bank,
            count,
            &raw.categories,
            raw.difficulty_weights.as_ref(),
        )?,
        _ => bank,
    };

    Ok(Deck {
        title: raw.title.unwrap_or(fallback_title),
        quick_checks,
        questions: QuestionSet::new(questions)?,
        pass_threshold,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Difficulty, QuestionId};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    const COSHH_DECK: &str = r#"{
        "title": "COSHH Awareness - Section 1",
        "passThreshold": 70,
        "quickCheckQuestions": [
            {
                "id": "coshh-stands-for",
                "question": "What does COSHH stand for?",
                "options": ["Harmful to Humans", "Hazardous to Health"],
                "correctIndex": 1,
                "explanation": "Control of Substances Hazardous to Health."
            }
        ],
        "quizQuestions": [
            {
                "id": 1,
                "question": "Primary COSHH legislation?",
                "options": ["Regulations 2002", "Act 2002", "Regulations 2005"],
                "correctAnswer": 0,
                "explanation": "SI 2002/2677."
            },
            {
                "id": 2,
                "question": "Which substance is excluded?",
                "options": ["Solvent", "Silica", "Asbestos"],
                "correctAnswer": 2,
                "explanation": "Asbestos has its own regulations."
            }
        ]
    }"#;

    fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(5)
    }

    #[test]
    fn test_get_deck_files_filters_and_sorts() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "b.json", "{}");
        write_file(&dir, "a.json", "{}");
        write_file(&dir, "notes.txt", "");

        let files = get_deck_files(dir.path());
        let names: Vec<String> = files.iter().map(|p| deck_name(p)).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_get_deck_files_missing_dir() {
        let dir = TempDir::new().unwrap();
        assert!(get_deck_files(&dir.path().join("missing")).is_empty());
    }

    #[test]
    fn test_load_deck_with_content_spellings() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "coshh.json", COSHH_DECK);

        let deck = load_deck(&path, &mut rng()).unwrap();
        assert_eq!(deck.title, "COSHH Awareness - Section 1");
        assert_eq!(deck.pass_threshold, 70);
        assert_eq!(deck.questions.len(), 2);
        assert_eq!(deck.questions.get(1).unwrap().correct().get(), 2);

        let mut checks = deck.inline_checks();
        assert_eq!(checks.len(), 1);
        assert!(checks[0].select_option(1));
        assert_eq!(checks[0].is_correct(), Some(true));

        let session = deck.start_quiz();
        assert_eq!(session.len(), 2);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_title_defaults_to_file_name() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "fire-safety.json",
            r#"{"questions": [{"id": 1, "prompt": "P", "options": ["a", "b"], "correct": 1}]}"#,
        );

        let deck = load_deck(&path, &mut rng()).unwrap();
        assert_eq!(deck.title, "fire-safety");
        assert_eq!(deck.pass_threshold, DEFAULT_PASS_THRESHOLD);
        assert!(deck.quick_checks.is_empty());
    }

    #[test]
    fn test_question_count_draws_subset() {
        let questions: Vec<String> = (0..10)
            .map(|i| {
                format!(
                    r#"{{"id": {}, "prompt": "Q{}", "options": ["a", "b"], "correct": 0, "category": "{}"}}"#,
                    i,
                    i,
                    if i % 2 == 0 { "even" } else { "odd" }
                )
            })
            .collect();
        let content = format!(
            r#"{{"totalQuestions": 4, "questions": [{}]}}"#,
            questions.join(",")
        );
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "bank.json", &content);

        let first = load_deck(&path, &mut rng()).unwrap();
        let second = load_deck(&path, &mut rng()).unwrap();
        assert_eq!(first.questions.len(), 4);
        assert_eq!(first.questions, second.questions);
        let even = first
            .questions
            .iter()
            .filter(|q| q.category() == Some("even"))
            .count();
        assert_eq!(even, 2);
    }

    #[test]
    fn test_malformed_content_fails_fast() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "bad.json",
            r#"{"questions": [{"id": 1, "prompt": "P", "options": ["a", "b"], "correct": 2}]}"#,
        );

        match load_deck(&path, &mut rng()) {
            Err(DeckError::Content { source, .. }) => assert_eq!(
                source,
                ContentError::CorrectIndexOutOfRange {
                    id: QuestionId::Number(1),
                    index: 2,
                    len: 2
                }
            ),
            other => panic!("expected content error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_threshold_and_empty_set() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "empty.json", r#"{"questions": []}"#);
        assert!(matches!(
            load_deck(&path, &mut rng()),
            Err(DeckError::Content {
                source: ContentError::EmptyQuestionSet,
                ..
            })
        ));

        let path = write_file(
            &dir,
            "threshold.json",
            r#"{"pass_threshold": 120, "questions": [{"id": 1, "prompt": "P", "options": ["a"], "correct": 0}]}"#,
        );
        assert!(matches!(
            load_deck(&path, &mut rng()),
            Err(DeckError::Content {
                source: ContentError::InvalidPassThreshold(120),
                ..
            })
        ));
    }

    #[test]
    fn test_parse_and_io_errors() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "broken.json", "{ not json");
        assert!(matches!(
            load_deck(&path, &mut rng()),
            Err(DeckError::Parse { .. })
        ));
        assert!(matches!(
            load_deck(&dir.path().join("absent.json"), &mut rng()),
            Err(DeckError::Io { .. })
        ));
    }

    fn graded_deck(weights: &str) -> String {
        let questions: Vec<String> = (0..20)
            .map(|i| {
                let difficulty = match i {
                    0..6 => "basic",
                    6..12 => "intermediate",
                    _ => "advanced",
                };
                format!(
                    r#"{{"id": {}, "question": "Q{}", "options": ["a", "b"], "correctIndex": 0, "difficulty": "{}"}}"#,
                    i, i, difficulty
                )
            })
            .collect();
        format!(
            r#"{{"totalQuestions": 10, "difficultyWeights": {}, "quizQuestions": [{}]}}"#,
            weights,
            questions.join(",")
        )
    }

    #[test]
    fn test_difficulty_weights_shape_the_draw() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "weighted.json",
            &graded_deck(r#"{"basic": 0.3, "intermediate": 0.5, "advanced": 0.2}"#),
        );

        let deck = load_deck(&path, &mut rng()).unwrap();
        assert_eq!(deck.questions.len(), 10);
        let level = |d: Difficulty| deck.questions.iter().filter(|q| q.difficulty() == Some(d)).count();
        assert_eq!(level(Difficulty::Basic), 3);
        assert_eq!(level(Difficulty::Intermediate), 5);
        assert_eq!(level(Difficulty::Advanced), 2);
    }

    #[test]
    fn test_invalid_difficulty_weights_are_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "weighted.json",
            &graded_deck(r#"{"basic": 0.6, "intermediate": 0.6, "advanced": 0.2}"#),
        );
        assert!(matches!(
            load_deck(&path, &mut rng()),
            Err(DeckError::Content {
                source: ContentError::InvalidDifficultyWeights,
                ..
            })
        ));
    }
}
