/// Append-only sequence of benchmark scores in arrival order.
#[derive(Debug, Clone, Default)]
pub struct ScoreSeries {
    scores: Vec<i64>,
}

impl ScoreSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, score: i64) {
        self.scores.push(score);
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn last(&self) -> Option<i64> {
        self.scores.last().copied()
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.scores
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/samples.rs"]
mod tests;
