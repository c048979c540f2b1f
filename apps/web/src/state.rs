use crate::drafting::generator::DocumentGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
/// Built once in `main` and never mutated afterwards.
#[derive(Clone)]
pub struct AppState {
    /// Bound to the OpenAI client when an API key was found at startup; disabled otherwise.
    pub generator: DocumentGenerator,
}
