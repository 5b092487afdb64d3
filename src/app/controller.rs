//! Application controller.
//!
//! Owns the session state plus the persisted collections and sequences each
//! generation: trigger check, credential check, loading, then success or
//! failure back to idle. Actions take `&mut self`, so only one request can be
//! in flight; the flag still mirrors the disabled trigger for callers.

use crate::app::AppContext;
use crate::app::stores::{CredentialStore, HistoryStore, SessionStore, StyleStore};
use crate::domain::prompt::{CompositionInput, compose_payload, video_prompt_system_instruction};
use crate::domain::{
    AppError, BuiltinStyle, CustomStyle, GENERATION_FAILED_MESSAGE, HistoryEntry, ResolvedStyle,
    SessionState,
};
use crate::ports::{ClipboardWriter, GenerationClient, GenerationRequest, KeyValueStore};

/// Result of a generate or remix action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// The new output, already stored in session state and history.
    Generated(String),
    /// No credential is saved; the credential prompt was opened and nothing was sent.
    CredentialPromptOpened,
    /// The trigger is disabled (blank idea or a request already in flight).
    Disabled,
    /// The remote call failed; the message is the user-facing one.
    Failed(String),
}

pub struct Controller<S: KeyValueStore, G: GenerationClient> {
    ctx: AppContext<S, G>,
    state: SessionState,
    styles: StyleStore,
    history: HistoryStore,
    credential_prompt_open: bool,
}

impl<S: KeyValueStore, G: GenerationClient> Controller<S, G> {
    /// Load credential, collections and the last session from the store.
    pub fn load(ctx: AppContext<S, G>) -> Result<Self, AppError> {
        let credential = CredentialStore::load(ctx.store())?;
        let styles = StyleStore::load(ctx.store())?;
        let history = HistoryStore::load(ctx.store())?;
        let snapshot = SessionStore::load(ctx.store())?;

        let state = SessionState {
            credential,
            idea: snapshot.idea,
            selected_style: snapshot.selected_style,
            output: snapshot.output,
            in_flight: false,
            error: None,
        };

        Ok(Self { ctx, state, styles, history, credential_prompt_open: false })
    }

    pub fn context(&self) -> &AppContext<S, G> {
        &self.ctx
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn custom_styles(&self) -> &[CustomStyle] {
        self.styles.list()
    }

    pub fn history(&self) -> &[HistoryEntry] {
        self.history.entries()
    }

    pub fn credential_prompt_open(&self) -> bool {
        self.credential_prompt_open
    }

    pub fn dismiss_credential_prompt(&mut self) {
        self.credential_prompt_open = false;
    }

    /// Whether `id` names a built-in or saved custom style.
    pub fn is_known_style(&self, id: &str) -> bool {
        BuiltinStyle::from_id(id).is_some() || self.styles.get(id).is_some()
    }

    pub fn resolved_style(&self) -> ResolvedStyle<'_> {
        ResolvedStyle::resolve(self.state.selected_style.as_deref(), self.styles.list())
    }

    // ---------------------------------------------------------------------
    // Credential
    // ---------------------------------------------------------------------

    pub fn save_credential(&mut self, credential: &str) -> Result<(), AppError> {
        self.state.credential = CredentialStore::save(self.ctx.store(), credential)?;
        self.credential_prompt_open = false;
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Idea and style selection
    // ---------------------------------------------------------------------

    pub fn set_idea(&mut self, idea: &str) -> Result<(), AppError> {
        self.state.idea = idea.to_string();
        self.persist_session()
    }

    /// Select a style id, or clear the selection with `None`.
    ///
    /// The id is not validated; unknown ids compose as unstyled.
    pub fn select_style(&mut self, id: Option<&str>) -> Result<(), AppError> {
        self.state.selected_style = id.map(str::to_string);
        self.persist_session()
    }

    /// Select `id`, or clear the selection when it is already selected.
    pub fn toggle_style(&mut self, id: &str) -> Result<(), AppError> {
        if self.state.selected_style.as_deref() == Some(id) {
            self.select_style(None)
        } else {
            self.select_style(Some(id))
        }
    }

    /// Save a custom style and select it.
    pub fn add_custom_style(&mut self, name: &str, description: &str) -> Result<String, AppError> {
        let id = self.styles.add(self.ctx.store(), name, description, now_millis())?;
        self.select_style(Some(&id))?;
        Ok(id)
    }

    /// Delete a custom style, clearing the selection if it pointed at it.
    pub fn delete_custom_style(&mut self, id: &str) -> Result<bool, AppError> {
        let removed = self.styles.remove(self.ctx.store(), id)?;
        if removed && self.state.selected_style.as_deref() == Some(id) {
            self.select_style(None)?;
        }
        Ok(removed)
    }

    /// Expand a rough style description with the remote model.
    ///
    /// A missing credential opens the credential prompt and fails with
    /// `CredentialMissing` without contacting the model.
    pub fn optimize_style_description(
        &mut self,
        name: &str,
        rough_description: &str,
    ) -> Result<String, AppError> {
        let result = StyleStore::optimize_description(
            self.ctx.client(),
            &self.ctx.config().gemini.model,
            name,
            rough_description,
            &self.state.credential,
        );
        if matches!(result, Err(AppError::CredentialMissing)) {
            self.credential_prompt_open = true;
        }
        result
    }

    // ---------------------------------------------------------------------
    // Generation
    // ---------------------------------------------------------------------

    /// The exact user payload the next generate (or remix) would send.
    pub fn compose_payload(&self, remix: Option<&str>) -> String {
        compose_payload(&CompositionInput {
            idea: &self.state.idea,
            style: self.resolved_style(),
            remix,
        })
    }

    pub fn generate(&mut self) -> Result<GenerateOutcome, AppError> {
        self.run_generation(None)
    }

    /// Regenerate from the current idea with `(Make it <instruction>)` folded in.
    ///
    /// The stored idea is left unchanged, so successive remixes do not stack.
    pub fn remix(&mut self, instruction: &str) -> Result<GenerateOutcome, AppError> {
        let instruction = instruction.trim();
        if instruction.is_empty() {
            return Ok(GenerateOutcome::Disabled);
        }
        self.run_generation(Some(instruction))
    }

    fn run_generation(&mut self, remix: Option<&str>) -> Result<GenerateOutcome, AppError> {
        if !self.state.can_generate() {
            return Ok(GenerateOutcome::Disabled);
        }

        if !self.state.has_credential() {
            self.credential_prompt_open = true;
            return Ok(GenerateOutcome::CredentialPromptOpened);
        }

        let style_label = self.resolved_style().history_label();
        let request = GenerationRequest {
            model: self.ctx.config().gemini.model.clone(),
            system_instruction: video_prompt_system_instruction()?,
            user_content: self.compose_payload(remix),
        };

        self.state.in_flight = true;
        self.state.error = None;
        let result = self.ctx.client().generate(&request, &self.state.credential);
        self.state.in_flight = false;

        match result {
            Ok(text) => {
                tracing::info!(
                    style = %style_label,
                    chars = text.chars().count(),
                    "prompt generated"
                );
                self.state.output = text.clone();
                // The session keeps the result even when history cannot be written.
                let recorded = self
                    .history
                    .append(self.ctx.store(), &text, &style_label, now_millis())
                    .map(|_| ());
                self.persist_session()?;
                recorded?;
                Ok(GenerateOutcome::Generated(text))
            }
            Err(AppError::CredentialMissing) => {
                self.credential_prompt_open = true;
                Ok(GenerateOutcome::CredentialPromptOpened)
            }
            Err(err) => {
                tracing::warn!(error = %err, "prompt generation failed");
                self.state.error = Some(GENERATION_FAILED_MESSAGE.to_string());
                Ok(GenerateOutcome::Failed(GENERATION_FAILED_MESSAGE.to_string()))
            }
        }
    }

    // ---------------------------------------------------------------------
    // History and output
    // ---------------------------------------------------------------------

    /// Restore a prior output into the result view. Idea and style are untouched.
    pub fn select_history(&mut self, id: &str) -> Result<String, AppError> {
        let output = self.history.select(id)?.to_string();
        self.state.output = output.clone();
        self.persist_session()?;
        Ok(output)
    }

    pub fn clear_history(&mut self) -> Result<(), AppError> {
        self.history.clear(self.ctx.store())
    }

    pub fn copy_output<C: ClipboardWriter>(&self, clipboard: &mut C) -> Result<(), AppError> {
        if self.state.output.is_empty() {
            return Err(AppError::NothingToDo("No generated prompt to copy yet".to_string()));
        }
        clipboard.write_text(&self.state.output)
    }

    fn persist_session(&self) -> Result<(), AppError> {
        SessionStore::save(self.ctx.store(), &self.state.snapshot())
    }
}

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AppConfig, HISTORY_LIMIT};
    use crate::ports::keys;
    use crate::testing::{FakeGenerationClient, MemoryKeyValueStore, MockClipboard};

    type TestController = Controller<MemoryKeyValueStore, FakeGenerationClient>;

    fn controller_with(kv: MemoryKeyValueStore, client: &FakeGenerationClient) -> TestController {
        Controller::load(AppContext::new(kv, client.clone(), AppConfig::default())).unwrap()
    }

    fn keyed_store() -> MemoryKeyValueStore {
        MemoryKeyValueStore::new().with_value(keys::CREDENTIAL, "test-key")
    }

    #[test]
    fn cinematic_scenario_sends_once_and_records_history() {
        let client = FakeGenerationClient::responding("Setting: rooftop\nScene: cat kickflips");
        let mut controller = controller_with(keyed_store(), &client);

        controller.set_idea("a cat on a skateboard").unwrap();
        controller.select_style(Some("CINEMATIC")).unwrap();
        let outcome = controller.generate().unwrap();

        assert_eq!(
            outcome,
            GenerateOutcome::Generated("Setting: rooftop\nScene: cat kickflips".to_string())
        );
        let requests = client.recorded();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].user_content.contains("APPLY STYLE: CINEMATIC"));
        assert!(requests[0].user_content.contains(BuiltinStyle::Cinematic.flavor().focus));
        assert_eq!(requests[0].model, "gemini-2.5-pro");

        assert_eq!(controller.history().len(), 1);
        assert_eq!(controller.history()[0].style, "CINEMATIC");
        assert_eq!(controller.state().output, "Setting: rooftop\nScene: cat kickflips");
        assert!(!controller.state().in_flight);
    }

    #[test]
    fn missing_credential_opens_prompt_without_network() {
        let client = FakeGenerationClient::responding("unused");
        let mut controller = controller_with(MemoryKeyValueStore::new(), &client);

        controller.set_idea("a fox in snow").unwrap();
        let outcome = controller.generate().unwrap();

        assert_eq!(outcome, GenerateOutcome::CredentialPromptOpened);
        assert!(controller.credential_prompt_open());
        assert_eq!(client.call_count(), 0);
        assert!(controller.state().error.is_none());
    }

    #[test]
    fn blank_idea_is_disabled_even_without_credential() {
        let client = FakeGenerationClient::responding("unused");
        let mut controller = controller_with(MemoryKeyValueStore::new(), &client);

        controller.set_idea("   ").unwrap();
        assert_eq!(controller.generate().unwrap(), GenerateOutcome::Disabled);
        assert!(!controller.credential_prompt_open());
        assert_eq!(client.call_count(), 0);
    }

    #[test]
    fn failure_sets_message_and_keeps_previous_output() {
        let client = FakeGenerationClient::failing("HTTP 500");
        let kv = keyed_store().with_value(
            keys::SESSION,
            r#"{"idea":"a fox","selected_style":null,"output":"Setting: old"}"#,
        );
        let mut controller = controller_with(kv, &client);

        let outcome = controller.generate().unwrap();

        assert_eq!(outcome, GenerateOutcome::Failed(GENERATION_FAILED_MESSAGE.to_string()));
        assert_eq!(controller.state().error.as_deref(), Some(GENERATION_FAILED_MESSAGE));
        assert_eq!(controller.state().output, "Setting: old");
        assert!(controller.history().is_empty());
        assert!(!controller.state().in_flight);
    }

    #[test]
    fn success_clears_previous_error() {
        let failing = FakeGenerationClient::failing("boom");
        let mut controller = controller_with(keyed_store(), &failing);
        controller.set_idea("a fox").unwrap();
        controller.generate().unwrap();
        assert!(controller.state().error.is_some());

        let ok = FakeGenerationClient::responding("Setting: new");
        let kv = keyed_store();
        let mut controller = controller_with(kv, &ok);
        controller.state.error = Some("stale".to_string());
        controller.set_idea("a fox").unwrap();
        controller.generate().unwrap();
        assert!(controller.state().error.is_none());
    }

    #[test]
    fn remix_folds_instruction_into_idea() {
        let client = FakeGenerationClient::responding("Setting: dark alley");
        let mut controller = controller_with(keyed_store(), &client);
        controller.set_idea("a cat on a skateboard").unwrap();

        controller.remix("Darker").unwrap();
        controller.remix("More Cinematic").unwrap();

        let requests = client.recorded();
        assert!(requests[0].user_content.contains("a cat on a skateboard (Make it Darker)"));
        assert!(
            requests[1].user_content.contains("a cat on a skateboard (Make it More Cinematic)")
        );
        assert!(!requests[1].user_content.contains("Darker"));
        assert_eq!(controller.state().idea, "a cat on a skateboard");
    }

    #[test]
    fn unknown_style_composes_without_directive() {
        let client = FakeGenerationClient::responding("ok");
        let mut controller = controller_with(keyed_store(), &client);
        controller.set_idea("a fox").unwrap();
        controller.select_style(Some("VAPORWAVE")).unwrap();

        controller.generate().unwrap();

        let payload = &client.recorded()[0].user_content;
        assert_eq!(payload, "User Idea: a fox");
        assert_eq!(controller.history()[0].style, "Auto");
    }

    #[test]
    fn saved_custom_style_stays_selected_until_deleted() {
        let client = FakeGenerationClient::responding("ok");
        let mut controller = controller_with(keyed_store(), &client);
        controller.set_idea("a detective").unwrap();

        let id = controller.add_custom_style("Noir", "rain-slick neon, hard shadows").unwrap();
        assert_eq!(controller.state().selected_style.as_deref(), Some(id.as_str()));

        controller.generate().unwrap();
        controller.generate().unwrap();
        for request in client.recorded() {
            assert!(request.user_content.contains("APPLY CUSTOM STYLE: Noir"));
            assert!(request.user_content.contains("rain-slick neon, hard shadows"));
        }
        assert_eq!(controller.history()[0].style, "Noir");

        assert!(controller.delete_custom_style(&id).unwrap());
        assert_eq!(controller.state().selected_style, None);
    }

    #[test]
    fn deleting_unselected_style_keeps_selection() {
        let client = FakeGenerationClient::responding("ok");
        let mut controller = controller_with(keyed_store(), &client);
        let id = controller.add_custom_style("Noir", "shadows").unwrap();
        controller.select_style(Some("PRODUCT")).unwrap();

        controller.delete_custom_style(&id).unwrap();
        assert_eq!(controller.state().selected_style.as_deref(), Some("PRODUCT"));
    }

    #[test]
    fn known_styles_cover_builtin_and_custom() {
        let client = FakeGenerationClient::responding("ok");
        let mut controller = controller_with(keyed_store(), &client);
        let id = controller.add_custom_style("Noir", "shadows").unwrap();

        assert!(controller.is_known_style("CINEMATIC"));
        assert!(controller.is_known_style(&id));
        assert!(!controller.is_known_style("cinematic"));
        assert!(!controller.is_known_style("custom-0"));
    }

    #[test]
    fn toggle_style_deselects_current() {
        let client = FakeGenerationClient::responding("ok");
        let mut controller = controller_with(keyed_store(), &client);

        controller.toggle_style("SOCIAL").unwrap();
        assert_eq!(controller.state().selected_style.as_deref(), Some("SOCIAL"));
        controller.toggle_style("SOCIAL").unwrap();
        assert_eq!(controller.state().selected_style, None);
    }

    #[test]
    fn selection_survives_reload() {
        let client = FakeGenerationClient::responding("ok");
        let mut controller = controller_with(keyed_store(), &client);
        let id = controller.add_custom_style("Noir", "shadows").unwrap();
        controller.set_idea("a detective").unwrap();

        let Controller { ctx, .. } = controller;
        let reloaded = Controller::load(ctx).unwrap();
        assert_eq!(reloaded.state().selected_style.as_deref(), Some(id.as_str()));
        assert_eq!(reloaded.state().idea, "a detective");
        assert!(matches!(reloaded.resolved_style(), ResolvedStyle::Custom(style) if style.id == id));
    }

    #[test]
    fn history_is_bounded_across_generations() {
        let client = FakeGenerationClient::responding("Setting: loop");
        let mut controller = controller_with(keyed_store(), &client);
        controller.set_idea("a loop").unwrap();

        for _ in 0..HISTORY_LIMIT + 3 {
            controller.generate().unwrap();
        }
        assert_eq!(controller.history().len(), HISTORY_LIMIT);
    }

    #[test]
    fn history_write_failure_still_keeps_result_in_session() {
        let client = FakeGenerationClient::responding("Setting: kept");
        let kv = keyed_store().with_failing_key(keys::HISTORY);
        let mut controller = controller_with(kv, &client);
        controller.set_idea("a fox").unwrap();

        let result = controller.generate();

        assert!(matches!(result, Err(AppError::Io(_))));
        assert_eq!(controller.state().output, "Setting: kept");
        assert!(controller.history().is_empty());
        let session = controller.context().store().raw(keys::SESSION).unwrap();
        assert!(session.contains("Setting: kept"));
        assert!(!controller.state().in_flight);
    }

    #[test]
    fn select_history_restores_output_only() {
        let client = FakeGenerationClient::responding("Setting: first");
        let mut controller = controller_with(keyed_store(), &client);
        controller.set_idea("first idea").unwrap();
        controller.generate().unwrap();
        let id = controller.history()[0].id.clone();

        controller.set_idea("second idea").unwrap();
        controller.state.output = "Setting: second".to_string();

        let restored = controller.select_history(&id).unwrap();
        assert_eq!(restored, "Setting: first");
        assert_eq!(controller.state().output, "Setting: first");
        assert_eq!(controller.state().idea, "second idea");
    }

    #[test]
    fn clear_history_removes_persisted_slot() {
        let client = FakeGenerationClient::responding("Setting: x");
        let mut controller = controller_with(keyed_store(), &client);
        controller.set_idea("x").unwrap();
        controller.generate().unwrap();
        assert!(controller.context().store().contains(keys::HISTORY));

        controller.clear_history().unwrap();
        assert!(controller.history().is_empty());
        assert!(!controller.context().store().contains(keys::HISTORY));
    }

    #[test]
    fn malformed_persisted_history_starts_empty() {
        let client = FakeGenerationClient::responding("ok");
        let kv = keyed_store().with_value(keys::HISTORY, "[[[");
        let controller = controller_with(kv, &client);
        assert!(controller.history().is_empty());
        assert!(controller.context().store().writes.borrow().is_empty());
    }

    #[test]
    fn save_credential_closes_prompt() {
        let client = FakeGenerationClient::responding("ok");
        let mut controller = controller_with(MemoryKeyValueStore::new(), &client);
        controller.set_idea("a fox").unwrap();
        controller.generate().unwrap();
        assert!(controller.credential_prompt_open());

        controller.save_credential(" new-key ").unwrap();
        assert!(!controller.credential_prompt_open());
        assert_eq!(controller.state().credential, "new-key");
        assert_eq!(controller.context().store().raw(keys::CREDENTIAL).as_deref(), Some("new-key"));
    }

    #[test]
    fn optimize_without_credential_opens_prompt() {
        let client = FakeGenerationClient::responding("unused");
        let mut controller = controller_with(MemoryKeyValueStore::new(), &client);

        let result = controller.optimize_style_description("Noir", "dark");
        assert!(matches!(result, Err(AppError::CredentialMissing)));
        assert!(controller.credential_prompt_open());
        assert_eq!(client.call_count(), 0);
    }

    #[test]
    fn copy_output_writes_current_result() {
        let client = FakeGenerationClient::responding("Setting: beach");
        let mut controller = controller_with(keyed_store(), &client);
        let mut clipboard = MockClipboard::new();
        assert!(matches!(
            controller.copy_output(&mut clipboard),
            Err(AppError::NothingToDo(_))
        ));

        controller.set_idea("a beach").unwrap();
        controller.generate().unwrap();
        controller.copy_output(&mut clipboard).unwrap();
        assert_eq!(clipboard.written_text.as_deref(), Some("Setting: beach"));
    }

    #[test]
    fn clipboard_failure_propagates() {
        let client = FakeGenerationClient::responding("Setting: beach");
        let mut controller = controller_with(keyed_store(), &client);
        controller.set_idea("a beach").unwrap();
        controller.generate().unwrap();

        let mut clipboard = MockClipboard::failing();
        assert!(matches!(
            controller.copy_output(&mut clipboard),
            Err(AppError::ClipboardError(_))
        ));
    }
}
