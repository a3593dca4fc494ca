// Domain layer modules
pub mod invocation_context;
pub mod response_envelope;

// Re-exports
pub use invocation_context::InvocationContext;
pub use response_envelope::{
    GreetingBody, ResponseEnvelope, CONTENT_TYPE_JSON, GREETING_MESSAGE, STATUS_OK,
};
