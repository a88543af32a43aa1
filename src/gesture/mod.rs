pub mod client;
pub mod session;

pub use client::{SuggestionClient, SuggestionRequest};
pub use session::{GesturePoint, GestureSession, GestureState};
