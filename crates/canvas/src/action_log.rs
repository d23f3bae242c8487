use stroke::Stroke;

/// Ordered record of everything drawn on the canvas.
///
/// Strokes are only ever appended, popped from the end, or cleared all at
/// once, so iteration order is always creation order.
#[derive(Clone, Debug, Default)]
pub struct ActionLog {
    strokes: Vec<Stroke>,
}

impl ActionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }

    /// Remove the most recent stroke. Does nothing on an empty log.
    pub fn undo_last(&mut self) -> Option<Stroke> {
        self.strokes.pop()
    }

    /// Remove every stroke, returning how many were dropped.
    pub fn clear(&mut self) -> usize {
        let count = self.strokes.len();
        self.strokes.clear();
        count
    }

    /// Strokes front to back, in the order they were drawn.
    pub fn iter(&self) -> std::slice::Iter<'_, Stroke> {
        self.strokes.iter()
    }

    pub fn last(&self) -> Option<&Stroke> {
        self.strokes.last()
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    pub fn as_slice(&self) -> &[Stroke] {
        &self.strokes
    }
}

impl<'a> IntoIterator for &'a ActionLog {
    type Item = &'a Stroke;
    type IntoIter = std::slice::Iter<'a, Stroke>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stroke::{CanvasPoint, StrokeId};

    fn line(n: f32) -> Stroke {
        Stroke::line(CanvasPoint::new(n, n), CanvasPoint::new(n + 1.0, n + 1.0))
    }

    #[test]
    fn test_undo_n_times_empties_log() {
        let mut log = ActionLog::new();
        for n in 0..7 {
            log.append(line(n as f32));
        }
        assert_eq!(log.len(), 7);
        for _ in 0..7 {
            assert!(log.undo_last().is_some());
        }
        assert!(log.is_empty());
    }

    #[test]
    fn test_undo_removes_most_recent() {
        let mut log = ActionLog::new();
        let first = line(0.0);
        let second = line(1.0);
        let second_id = second.id();
        log.append(first.clone());
        log.append(second);

        let undone = log.undo_last().unwrap();
        assert_eq!(undone.id(), second_id);
        assert_eq!(log.as_slice(), &[first]);
    }

    #[test]
    fn test_undo_on_empty_is_noop() {
        let mut log = ActionLog::new();
        assert!(log.undo_last().is_none());
        assert!(log.is_empty());
    }

    #[test]
    fn test_clear_always_empties() {
        let mut log = ActionLog::new();
        assert_eq!(log.clear(), 0);
        assert!(log.is_empty());

        for n in 0..3 {
            log.append(line(n as f32));
        }
        assert_eq!(log.clear(), 3);
        assert!(log.is_empty());
    }

    #[test]
    fn test_undo_after_clear_is_noop() {
        let mut log = ActionLog::new();
        log.append(line(0.0));
        log.clear();
        assert!(log.undo_last().is_none());
        assert!(log.is_empty());
    }

    #[test]
    fn test_iteration_is_creation_order_and_restartable() {
        let mut log = ActionLog::new();
        let strokes: Vec<Stroke> = (0..4).map(|n| line(n as f32)).collect();
        for s in &strokes {
            log.append(s.clone());
        }

        let expected: Vec<StrokeId> = strokes.iter().map(Stroke::id).collect();
        let first_pass: Vec<StrokeId> = log.iter().map(Stroke::id).collect();
        let second_pass: Vec<StrokeId> = (&log).into_iter().map(Stroke::id).collect();
        assert_eq!(first_pass, expected);
        assert_eq!(second_pass, expected);
        assert_eq!(log.last().map(Stroke::id), expected.last().copied());
    }
}
