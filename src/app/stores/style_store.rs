use crate::domain::prompt::{compose_style_optimizer_payload, style_optimizer_system_instruction};
use crate::domain::style::next_custom_style_id;
use crate::domain::{AppError, CustomStyle};
use crate::ports::{GenerationClient, GenerationRequest, KeyValueStore, keys, require_credential};

use super::{load_json_or_default, save_json};

/// User-defined styles in insertion order.
#[derive(Debug, Clone, Default)]
pub struct StyleStore {
    styles: Vec<CustomStyle>,
}

impl StyleStore {
    pub fn load<S: KeyValueStore>(kv: &S) -> Result<Self, AppError> {
        Ok(Self { styles: load_json_or_default(kv, keys::CUSTOM_STYLES)? })
    }

    pub fn list(&self) -> &[CustomStyle] {
        &self.styles
    }

    pub fn get(&self, id: &str) -> Option<&CustomStyle> {
        self.styles.iter().find(|style| style.id == id)
    }

    /// Add a style and persist. Returns the generated id so callers can select it.
    pub fn add<S: KeyValueStore>(
        &mut self,
        kv: &S,
        name: &str,
        description: &str,
        now_millis: i64,
    ) -> Result<String, AppError> {
        let label = name.trim();
        let description = description.trim();
        if label.is_empty() {
            return Err(AppError::InvalidStyle("name must not be empty".to_string()));
        }
        if description.is_empty() {
            return Err(AppError::InvalidStyle("description must not be empty".to_string()));
        }

        let id = next_custom_style_id(now_millis, &self.styles);
        self.styles.push(CustomStyle {
            id: id.clone(),
            label: label.to_string(),
            description: description.to_string(),
        });
        save_json(kv, keys::CUSTOM_STYLES, &self.styles)?;
        Ok(id)
    }

    /// Remove a style if present. Clearing a selection that pointed at it is the caller's job.
    pub fn remove<S: KeyValueStore>(&mut self, kv: &S, id: &str) -> Result<bool, AppError> {
        let before = self.styles.len();
        self.styles.retain(|style| style.id != id);
        if self.styles.len() == before {
            return Ok(false);
        }
        save_json(kv, keys::CUSTOM_STYLES, &self.styles)?;
        Ok(true)
    }

    /// Expand a rough description into an aesthetic-only style definition.
    pub fn optimize_description<G: GenerationClient>(
        client: &G,
        model: &str,
        name: &str,
        rough_description: &str,
        credential: &str,
    ) -> Result<String, AppError> {
        require_credential(credential)?;

        let request = GenerationRequest {
            model: model.to_string(),
            system_instruction: style_optimizer_system_instruction()?,
            user_content: compose_style_optimizer_payload(name, rough_description),
        };
        client.generate(&request, credential)
    }
}
