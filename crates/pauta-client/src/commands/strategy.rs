//! Strategy view commands: edit the client brief, or ask the generative
//! collaborator for a suggested persona and merge it in.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use tracing::info;

use pauta_store::{ClientStrategy, Persona, VisualIdentity};

use crate::collaborators::TextGenerator;
use crate::genai::{parse_strategy_suggestion, strategy_prompt};
use crate::state::AppState;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonaDto {
    pub pains: String,
    pub goals: String,
    pub tone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityDto {
    pub colors: String,
    pub fonts: String,
    pub inspiration_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyDto {
    pub id: String,
    pub name: String,
    pub persona: PersonaDto,
    pub identity: IdentityDto,
}

impl From<ClientStrategy> for StrategyDto {
    fn from(s: ClientStrategy) -> Self {
        Self {
            id: s.id,
            name: s.name,
            persona: PersonaDto {
                pains: s.persona.pains,
                goals: s.persona.goals,
                tone: s.persona.tone,
            },
            identity: IdentityDto {
                colors: s.identity.colors,
                fonts: s.identity.fonts,
                inspiration_url: s.identity.inspiration_url,
            },
        }
    }
}

impl From<StrategyDto> for ClientStrategy {
    fn from(dto: StrategyDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            persona: Persona {
                pains: dto.persona.pains,
                goals: dto.persona.goals,
                tone: dto.persona.tone,
            },
            identity: VisualIdentity {
                colors: dto.identity.colors,
                fonts: dto.identity.fonts,
                inspiration_url: dto.identity.inspiration_url,
            },
        }
    }
}

pub fn get_strategy(state: &Arc<Mutex<AppState>>) -> Result<StrategyDto, String> {
    let guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;
    Ok(guard.store.strategy().clone().into())
}

/// Wholesale replace of the active strategy, as submitted by the view.
pub fn update_strategy(state: &Arc<Mutex<AppState>>, dto: StrategyDto) -> Result<(), String> {
    let mut guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;
    guard.store.update_strategy(dto.into());

    info!("Strategy updated");
    Ok(())
}

/// Ask the generative collaborator for a persona/identity suggestion and
/// merge the returned fields into the active strategy.  Fields the
/// suggestion omits (including the inspiration URL) are left untouched.
pub async fn generate_strategy(
    state: &Arc<Mutex<AppState>>,
    generator: &dyn TextGenerator,
) -> Result<StrategyDto, String> {
    let prompt = {
        let mut guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;
        if guard.is_generating_strategy {
            return Err("Strategy generation already in flight".to_string());
        }
        let prompt = strategy_prompt(&guard.store.strategy().name);
        guard.is_generating_strategy = true;
        prompt
    };

    let result = generator.generate(&prompt).await;

    let mut guard = state.lock().map_err(|e| format!("Lock poisoned: {e}"))?;
    guard.is_generating_strategy = false;

    let text = result.map_err(|e| format!("Strategy generation failed: {e}"))?;
    let suggestion =
        parse_strategy_suggestion(&text).map_err(|e| format!("Strategy generation failed: {e}"))?;

    let mut strategy = guard.store.strategy().clone();
    if let Some(pains) = suggestion.persona.pains {
        strategy.persona.pains = pains;
    }
    if let Some(goals) = suggestion.persona.goals {
        strategy.persona.goals = goals;
    }
    if let Some(tone) = suggestion.persona.tone {
        strategy.persona.tone = tone;
    }
    if let Some(colors) = suggestion.identity.colors {
        strategy.identity.colors = colors;
    }
    if let Some(fonts) = suggestion.identity.fonts {
        strategy.identity.fonts = fonts;
    }
    guard.store.update_strategy(strategy.clone());

    info!("Strategy generated and merged");
    Ok(strategy.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use pauta_shared::ServiceError;

    fn shared_state() -> Arc<Mutex<AppState>> {
        Arc::new(Mutex::new(AppState::new()))
    }

    struct FixedGenerator(Option<String>);

    #[async_trait]
    impl TextGenerator for FixedGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, ServiceError> {
            self.0
                .clone()
                .ok_or_else(|| ServiceError::Status(503))
        }
    }

    #[test]
    fn update_replaces_wholesale() {
        let state = shared_state();
        let mut dto = get_strategy(&state).unwrap();
        dto.persona.goals = "Dobrar o alcance orgânico".to_string();

        update_strategy(&state, dto.clone()).unwrap();
        assert_eq!(
            get_strategy(&state).unwrap().persona.goals,
            "Dobrar o alcance orgânico"
        );
    }

    #[tokio::test]
    async fn generated_suggestion_merges_present_fields_only() {
        let state = shared_state();
        let before = get_strategy(&state).unwrap();
        let generator = FixedGenerator(Some(
            r##"{ "persona": { "tone": "Ousado e direto" }, "identity": { "colors": "#FF0055, #111827" } }"##
                .to_string(),
        ));

        let merged = generate_strategy(&state, &generator).await.unwrap();
        assert_eq!(merged.persona.tone, "Ousado e direto");
        assert_eq!(merged.identity.colors, "#FF0055, #111827");
        // Untouched fields survive, including the inspiration URL.
        assert_eq!(merged.persona.pains, before.persona.pains);
        assert_eq!(merged.identity.inspiration_url, before.identity.inspiration_url);
        assert!(!state.lock().unwrap().is_generating_strategy);
    }

    #[tokio::test]
    async fn failed_generation_leaves_strategy_unchanged() {
        let state = shared_state();
        let before = get_strategy(&state).unwrap();

        assert!(generate_strategy(&state, &FixedGenerator(None)).await.is_err());

        let after = get_strategy(&state).unwrap();
        assert_eq!(after.persona.tone, before.persona.tone);
        assert!(!state.lock().unwrap().is_generating_strategy);
    }

    #[tokio::test]
    async fn malformed_suggestion_is_a_service_error() {
        let state = shared_state();
        let generator = FixedGenerator(Some("não consegui gerar".to_string()));

        let err = generate_strategy(&state, &generator).await.unwrap_err();
        assert!(err.contains("Strategy generation failed"));
        assert!(!state.lock().unwrap().is_generating_strategy);
    }
}
