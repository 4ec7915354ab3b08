//! Command, event and shared-type definitions for the subset of the Chrome DevTools
//! Protocol that browsercdp drives.
//!
//! Unlike the upstream protocol.json, this schema is not code-generated: only the
//! domains, commands, events and types actually exercised by browsercdp are modeled
//! here, by hand, in the shape the real protocol uses on the wire.

pub mod browser_protocol;
pub mod js_protocol;

pub mod browser {
    pub use crate::browser_protocol::browser::*;
}

pub mod target {
    pub use crate::browser_protocol::target::*;
}

pub mod page {
    pub use crate::browser_protocol::page::*;
}

pub mod dom {
    pub use crate::browser_protocol::dom::*;
}

pub mod network {
    pub use crate::browser_protocol::network::*;
}

pub mod fetch {
    pub use crate::browser_protocol::fetch::*;
}

pub mod storage {
    pub use crate::browser_protocol::storage::*;
}

pub mod input {
    pub use crate::browser_protocol::input::*;
}

pub mod log {
    pub use crate::browser_protocol::log::*;
}

pub mod runtime {
    pub use crate::js_protocol::runtime::*;
}
