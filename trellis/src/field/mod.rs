//! Text input field: input type, reveal toggle and clear affordance.

pub mod controller;
pub mod events;
pub mod item;
pub mod render;
mod state;

pub use controller::{clear_affordance_visible, effective_type, toggle_reveal};
pub use events::FieldEvent;
pub use item::{InputSize, InputType, InputVariant};
pub use render::{FieldView, TextNote};
pub use state::InputField;
