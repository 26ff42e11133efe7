//! Precision, recall and F1 from confusion counts

use std::collections::BTreeMap;

/// Counts for one label (or the positive class of a binary problem)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Confusion {
    /// Predicted the label and it was the label
    pub tp: usize,
    /// Predicted the label but it was not
    pub fp: usize,
    /// Missed the label
    pub fn_: usize,
}

impl Confusion {
    /// Support of the label in the ground truth
    pub fn support(&self) -> usize {
        self.tp + self.fn_
    }

    /// `tp / (tp + fp)`
    pub fn precision(&self, zero_division: f64) -> f64 {
        ratio(self.tp, self.tp + self.fp, zero_division)
    }

    /// `tp / (tp + fn)`
    pub fn recall(&self, zero_division: f64) -> f64 {
        ratio(self.tp, self.tp + self.fn_, zero_division)
    }

    /// `2tp / (2tp + fp + fn)`
    pub fn f1(&self, zero_division: f64) -> f64 {
        ratio(2 * self.tp, 2 * self.tp + self.fp + self.fn_, zero_division)
    }

    /// All three scores
    pub fn scores(&self, zero_division: f64) -> Scores {
        Scores {
            precision: self.precision(zero_division),
            recall: self.recall(zero_division),
            f1: self.f1(zero_division),
        }
    }
}

/// Precision, recall and F1 for one field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scores {
    /// Precision
    pub precision: f64,
    /// Recall
    pub recall: f64,
    /// F1 score
    pub f1: f64,
}

impl Scores {
    /// The same value for all three scores
    pub fn uniform(value: f64) -> Self {
        Self {
            precision: value,
            recall: value,
            f1: value,
        }
    }
}

fn ratio(numerator: usize, denominator: usize, zero_division: f64) -> f64 {
    if denominator == 0 {
        zero_division
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Per-label counts over `(truth, predicted)` pairs
///
/// Every label seen on either side gets an entry.
pub fn confusions<L, I>(pairs: I) -> BTreeMap<L, Confusion>
where
    L: Ord + Copy,
    I: IntoIterator<Item = (L, L)>,
{
    let mut counts: BTreeMap<L, Confusion> = BTreeMap::new();
    for (truth, predicted) in pairs {
        if truth == predicted {
            counts.entry(truth).or_default().tp += 1;
        } else {
            counts.entry(predicted).or_default().fp += 1;
            counts.entry(truth).or_default().fn_ += 1;
        }
    }
    counts
}

/// Multi-class scores averaged over labels, weighted by ground-truth support
///
/// Labels present only in predictions carry zero weight. When nothing has
/// support, every score is `zero_division`.
pub fn weighted<L, I>(pairs: I, zero_division: f64) -> Scores
where
    L: Ord + Copy,
    I: IntoIterator<Item = (L, L)>,
{
    let counts = confusions(pairs);
    let total: usize = counts.values().map(Confusion::support).sum();
    if total == 0 {
        return Scores::uniform(zero_division);
    }

    let mut sums = Scores::uniform(0.0);
    for confusion in counts.values() {
        let weight = confusion.support() as f64;
        let scores = confusion.scores(zero_division);
        sums.precision += scores.precision * weight;
        sums.recall += scores.recall * weight;
        sums.f1 += scores.f1 * weight;
    }

    let total = total as f64;
    Scores {
        precision: sums.precision / total,
        recall: sums.recall / total,
        f1: sums.f1 / total,
    }
}

/// Binary scores on the positive class over `(truth, predicted)` flags
pub fn binary<I>(pairs: I, zero_division: f64) -> Scores
where
    I: IntoIterator<Item = (bool, bool)>,
{
    let mut confusion = Confusion::default();
    for (truth, predicted) in pairs {
        match (truth, predicted) {
            (true, true) => confusion.tp += 1,
            (false, true) => confusion.fp += 1,
            (true, false) => confusion.fn_ += 1,
            (false, false) => {}
        }
    }
    confusion.scores(zero_division)
}
