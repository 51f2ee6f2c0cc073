//! View-state synchronization engine for the log overlay console
//!
//! This crate provides:
//! - Log entry and level types decoded leniently from host messages
//! - The bounded live buffer ([`RingBuffer`])
//! - The display mode state machine ([`ViewMode`], [`ConsoleState`], [`reduce`])
//! - Debounced search dispatch ([`Debouncer`], [`SearchInput`])
//! - Outbound host intents ([`ActionDispatcher`]) over an abstract [`HostChannel`]
//! - UI-local interaction state (context menu, expanded rows, copy payloads)
//!
//! Nothing in here touches the terminal. The binary crate wires these pieces
//! into its middleware chain and renders the resulting [`ConsoleState`].

pub mod action_dispatcher;
pub mod clipboard;
pub mod debounce;
pub mod entry;
pub mod host;
pub mod interaction;
pub mod levels;
pub mod pagination;
pub mod protocol;
pub mod reducer;
pub mod ring_buffer;
pub mod view_state;

mod lenient;

pub use action_dispatcher::ActionDispatcher;
pub use clipboard::{ClipboardError, ClipboardWriter, FallbackClipboard};
pub use debounce::{Debouncer, SearchInput, SearchIntent, SEARCH_DEBOUNCE};
pub use entry::{ClientField, ClientInfo, EntryId, LogEntry, Source};
pub use host::{HostChannel, HostError};
pub use interaction::{copy_text, CopyTarget, InteractionState, COPY_NOTIFY_MESSAGE};
pub use levels::{LevelDescriptor, LevelRegistry};
pub use pagination::PaginationMeta;
pub use protocol::{HostPush, HostRequest, ProtocolError};
pub use reducer::reduce;
pub use ring_buffer::{RingBuffer, DEFAULT_MAX_LOGS};
pub use view_state::{ConsoleState, ViewMode, NO_RESULTS_FOOTER};
