mod clipboard_writer;
mod generation_client;
mod key_value_store;

pub use clipboard_writer::ClipboardWriter;
pub use generation_client::{GenerationClient, GenerationRequest, require_credential};
pub use key_value_store::{KeyValueStore, keys};
