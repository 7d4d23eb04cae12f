use crate::error::ContentError;
use crate::models::{Difficulty, Question};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Deserialize;

/// Share of each difficulty level inside a category's draw.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct DifficultyWeights {
    pub basic: f64,
    pub intermediate: f64,
    pub advanced: f64,
}

impl DifficultyWeights {
    pub fn validate(&self) -> Result<(), ContentError> {
        let weights = [self.basic, self.intermediate, self.advanced];
        let sum: f64 = weights.iter().sum();
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) || (sum - 1.0).abs() > 0.01 {
            return Err(ContentError::InvalidDifficultyWeights);
        }
        Ok(())
    }

    /// Per-level counts for a category target. Advanced takes the remainder.
    fn split(&self, target: usize) -> [(Difficulty, usize); 3] {
        let basic = (target as f64 * self.basic).round() as usize;
        let intermediate = (target as f64 * self.intermediate).round() as usize;
        let advanced = target.saturating_sub(basic + intermediate);
        [
            (Difficulty::Basic, basic),
            (Difficulty::Intermediate, intermediate),
            (Difficulty::Advanced, advanced),
        ]
    }
}

/// Draws `count` questions from `bank`, spread evenly across categories.
///
/// Buckets follow the order of `categories`, then any other category in
/// order of first appearance, then uncategorised questions. Buckets are
/// shuffled, drained round-robin, and the draw is shuffled again. Pass a
/// seeded RNG for a reproducible draw.
///
/// With `weights`, each non-empty bucket gets an equal share of `count`
/// (earlier buckets take the remainder), split across difficulty levels by
/// weight. Shortfalls are filled from the rest of the bank.
pub fn draw_balanced<R: Rng + ?Sized>(
    rng: &mut R,
    bank: &[Question],
    count: usize,
    categories: &[String],
    weights: Option<&DifficultyWeights>,
) -> Result<Vec<Question>, ContentError> {
    if count == 0 || count > bank.len() {
        return Err(ContentError::InvalidQuestionCount {
            requested: count,
            available: bank.len(),
        });
    }
    if let Some(weights) = weights {
        weights.validate()?;
    }

    let listed = categories.iter().map(String::as_str);
    let mut keys: Vec<Option<&str>> = Vec::new();
    for category in listed.chain(bank.iter().filter_map(Question::category)) {
        if !keys.contains(&Some(category)) {
            keys.push(Some(category));
        }
    }
    keys.push(None);

    let mut buckets: Vec<Vec<&Question>> = keys
        .iter()
        .map(|key| bank.iter().filter(|q| q.category() == *key).collect())
        .collect();
    for bucket in &mut buckets {
        bucket.shuffle(rng);
    }

    let mut drawn = match weights {
        Some(weights) => drain_weighted(rng, bank, &buckets, count, weights),
        None => drain_round_robin(&mut buckets, count),
    };

    drawn.shuffle(rng);
    drawn.truncate(count);
    log::debug!(
        "drew {} of {} questions across {} buckets",
        drawn.len(),
        bank.len(),
        buckets.len()
    );
    Ok(drawn.into_iter().cloned().collect())
}

fn drain_round_robin<'a>(buckets: &mut [Vec<&'a Question>], count: usize) -> Vec<&'a Question> {
    let mut drawn = Vec::with_capacity(count);
    while drawn.len() < count {
        for bucket in buckets.iter_mut() {
            if drawn.len() == count {
                break;
            }
            if let Some(question) = bucket.pop() {
                drawn.push(question);
            }
        }
    }
    drawn
}

fn drain_weighted<'a, R: Rng + ?Sized>(
    rng: &mut R,
    bank: &'a [Question],
    buckets: &[Vec<&'a Question>],
    count: usize,
    weights: &DifficultyWeights,
) -> Vec<&'a Question> {
    let filled: Vec<&Vec<&Question>> = buckets.iter().filter(|b| !b.is_empty()).collect();
    let per_bucket = count / filled.len();
    let remainder = count % filled.len();

    let mut drawn: Vec<&Question> = Vec::with_capacity(count);
    for (i, bucket) in filled.iter().enumerate() {
        let target = per_bucket + usize::from(i < remainder);
        for (difficulty, wanted) in weights.split(target) {
            drawn.extend(
                bucket
                    .iter()
                    .filter(|q| q.difficulty() == Some(difficulty))
                    .take(wanted)
                    .copied(),
            );
        }
    }

    if drawn.len() < count {
        let mut rest: Vec<&Question> = bank
            .iter()
            .filter(|q| !drawn.iter().any(|d| std::ptr::eq(*d, *q)))
            .collect();
        rest.shuffle(rng);
        let needed = count - drawn.len();
        drawn.extend(rest.into_iter().take(needed));
    }
    drawn
}
