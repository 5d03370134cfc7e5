//! Live conversion for editing surfaces.
//!
//! A [`LiveConverter`] holds the latest input and its rendered output. Every
//! update recomputes the whole output from scratch and replaces the previous
//! one; errors become a visible comment line instead of stopping the loop.

use crate::SymbolDslService;

/// Recomputes the symbol DSL for the latest markup on every edit
#[derive(Debug, Clone)]
pub struct LiveConverter {
    service: SymbolDslService,
    input: String,
    output: String,
}

impl LiveConverter {
    /// Create a converter and render the initial input immediately
    pub fn new(service: SymbolDslService, initial: impl Into<String>) -> Self {
        let input = initial.into();
        let output = render(&service, &input);
        Self {
            service,
            input,
            output,
        }
    }

    /// Replace the input and recompute. Returns whether the output changed.
    pub fn update(&mut self, input: &str) -> bool {
        self.input.clear();
        self.input.push_str(input);

        let output = render(&self.service, &self.input);
        let changed = output != self.output;
        self.output = output;
        changed
    }

    /// The input the current output was computed from
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The current output
    pub fn output(&self) -> &str {
        &self.output
    }

    /// The service used for every recomputation
    pub fn service(&self) -> &SymbolDslService {
        &self.service
    }
}

fn render(service: &SymbolDslService, input: &str) -> String {
    match service.convert_html(input) {
        Ok(output) => {
            tracing::debug!(input_bytes = input.len(), output_bytes = output.len(), "live output recomputed");
            output
        }
        Err(err) => {
            tracing::warn!(error = %err, "live conversion failed");
            format!("// error: {err}")
        }
    }
}
