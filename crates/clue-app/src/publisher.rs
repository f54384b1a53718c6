use clue_core::logic::matrix::KnowledgeMatrix;
use once_cell::sync::Lazy;
use parking_lot::RwLock;

static LATEST: Lazy<RwLock<Option<KnowledgeMatrix>>> = Lazy::new(|| RwLock::new(None));

/// Atomically replaces the published snapshot. Consumers only ever observe
/// whole matrices, never a partial update.
pub fn publish(matrix: &KnowledgeMatrix) {
    *LATEST.write() = Some(matrix.clone());
}

/// The latest published snapshot, cloned out as an immutable value.
pub fn latest() -> Option<KnowledgeMatrix> {
    LATEST.read().clone()
}

#[cfg(test)]
mod tests {
    use super::{latest, publish};
    use clue_core::logic::matrix::KnowledgeMatrix;
    use clue_core::model::player::Roster;

    #[test]
    fn publish_then_read_back() {
        let matrix = KnowledgeMatrix::empty(Roster::new(3).expect("valid roster"));
        publish(&matrix);
        assert_eq!(latest(), Some(matrix));
    }
}
