//! Chat Completion Provider Implementations
//!
//! Generates assistant replies for a chat history.
//!
//! ## Available Providers
//!
//! | Provider | Type | Status |
//! |----------|------|--------|
//! | `NullChatCompletionProvider` | Testing | Complete |
//! | `OpenAIChatCompletionProvider` | Cloud | Complete |
//! | `AzureOpenAIChatCompletionProvider` | Cloud | Complete |

pub mod azure_openai;
pub mod helpers;
pub mod null;
pub mod openai;

// Re-export for convenience
pub use azure_openai::{AzureOpenAIChatCompletionProvider, AzureOpenAIChatSettings};
pub use null::NullChatCompletionProvider;
pub use openai::OpenAIChatCompletionProvider;
