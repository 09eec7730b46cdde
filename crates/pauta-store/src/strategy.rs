//! Client-strategy helpers on [`ContentStore`].

use crate::models::ClientStrategy;
use crate::store::ContentStore;

impl ContentStore {
    /// The single active client strategy.
    pub fn strategy(&self) -> &ClientStrategy {
        &self.strategy
    }

    /// Wholesale replace of the active strategy.
    pub fn update_strategy(&mut self, strategy: ClientStrategy) {
        self.strategy = strategy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn update_strategy_replaces_wholesale() {
        let mut store = ContentStore::new(seed::initial_strategy());
        let mut replacement = store.strategy().clone();
        replacement.persona.tone = "Descontraído e direto".to_string();
        replacement.identity.fonts = "Poppins".to_string();

        store.update_strategy(replacement.clone());
        assert_eq!(store.strategy(), &replacement);
    }
}
