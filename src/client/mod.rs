//! Client-facing glue: the interception hook and feedback delivery.

pub mod feedback;
pub mod interceptor;

// Re-export main types for convenience
pub use feedback::{feedback_channel, ChatDisplay, FeedbackReceiver, FeedbackSender};
pub use interceptor::{ChatInterceptor, IdentityResolver, InterceptOutcome};
