//! Value Objects - Immutable, identity-less domain primitives

mod attribute_name;
mod server_port;
mod workspace_name;

pub use attribute_name::{AttributeKey, RESERVED_ATTRIBUTE_PREFIX, is_valid_attribute_name};
pub use server_port::{is_valid_server_port, is_valid_server_protocol};
pub use workspace_name::WorkspaceName;
