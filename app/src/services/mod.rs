// luxecart_server/src/services/mod.rs

pub mod chat;
pub mod fakestore;

pub use chat::ChatAssistant;
pub use fakestore::FakeStoreProvider;
