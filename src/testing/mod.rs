mod fake_generation_client;
mod memory_key_value_store;
mod mock_clipboard;

pub use fake_generation_client::FakeGenerationClient;
pub use memory_key_value_store::MemoryKeyValueStore;
pub use mock_clipboard::MockClipboard;
