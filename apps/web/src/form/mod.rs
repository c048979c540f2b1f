// Interactive drafting form: page rendering and the per-interaction handlers.

pub mod handlers;
pub mod view;
