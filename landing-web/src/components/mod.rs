//! UI Components

pub mod action_link;

pub use action_link::ActionLink;
