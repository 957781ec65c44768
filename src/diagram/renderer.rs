//! Asynchronous diagram rendering into named containers.
//!
//! Every request clears the container and is tagged with a per-container
//! token. Completions carrying anything but the latest token are dropped, so
//! a slow render can never overwrite a newer one.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;

use super::engine::{DiagramEngine, DiagramError, DiagramOptions, RenderedDiagram};
use crate::event::AppEvent;

/// Inline replacement text shown when a diagram cannot be rendered
pub const RENDER_ERROR_TEXT: &str = "Error rendering diagram. Please check syntax.";

/// What a container currently shows
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PaneOutput {
    #[default]
    Empty,
    Rendering,
    Rendered(RenderedDiagram),
    Failed,
}

#[derive(Debug, Default)]
struct DiagramPane {
    latest_token: u64,
    output: PaneOutput,
}

/// Renders diagrams off the UI loop and tracks each container's output
pub struct DiagramRenderer {
    engine: Arc<dyn DiagramEngine>,
    tx: UnboundedSender<AppEvent>,
    panes: HashMap<String, DiagramPane>,
}

impl DiagramRenderer {
    pub fn new<E>(mut engine: E, options: &DiagramOptions, tx: UnboundedSender<AppEvent>) -> Self
    where
        E: DiagramEngine + 'static,
    {
        engine.initialize(options);
        Self {
            engine: Arc::new(engine),
            tx,
            panes: HashMap::new(),
        }
    }

    /// Start rendering `text` into container `id`, returning the request token
    pub fn request(&mut self, id: &str, text: &str) -> u64 {
        let pane = self.panes.entry(id.to_string()).or_default();
        pane.latest_token += 1;
        pane.output = PaneOutput::Rendering;
        let token = pane.latest_token;

        let engine = Arc::clone(&self.engine);
        let tx = self.tx.clone();
        let container = id.to_string();
        let text = text.to_string();

        tokio::spawn(async move {
            let render_id = container.clone();
            let outcome =
                match tokio::task::spawn_blocking(move || engine.render(&render_id, &text)).await {
                    Ok(result) => result,
                    Err(e) => Err(DiagramError::Task(e.to_string())),
                };
            let _ = tx.send(AppEvent::DiagramRendered {
                container,
                token,
                outcome,
            });
        });

        token
    }

    /// Apply a finished render; returns false when the result was stale
    pub fn complete(
        &mut self,
        container: &str,
        token: u64,
        outcome: Result<RenderedDiagram, DiagramError>,
    ) -> bool {
        let Some(pane) = self.panes.get_mut(container) else {
            tracing::trace!("Dropping render for unknown container {}", container);
            return false;
        };

        if token != pane.latest_token {
            tracing::trace!(
                "Dropping stale render for {} (token {}, latest {})",
                container,
                token,
                pane.latest_token
            );
            return false;
        }

        pane.output = match outcome {
            Ok(diagram) => {
                tracing::debug!(
                    "Rendered {:?} diagram {} ({} lines)",
                    diagram.kind,
                    diagram.id,
                    diagram.lines.len()
                );
                PaneOutput::Rendered(diagram)
            }
            Err(e) => {
                tracing::error!("Diagram render error in {}: {}", container, e);
                PaneOutput::Failed
            }
        };
        true
    }

    pub fn output(&self, container: &str) -> &PaneOutput {
        static EMPTY: PaneOutput = PaneOutput::Empty;
        self.panes
            .get(container)
            .map(|pane| &pane.output)
            .unwrap_or(&EMPTY)
    }

    #[cfg(test)]
    pub fn latest_token(&self, container: &str) -> Option<u64> {
        self.panes.get(container).map(|pane| pane.latest_token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagram::engine::{DiagramKind, TextDiagramEngine};
    use tokio::sync::mpsc;

    struct FailingEngine;

    impl DiagramEngine for FailingEngine {
        fn initialize(&mut self, _options: &DiagramOptions) {}

        fn render(&self, _id: &str, _text: &str) -> Result<RenderedDiagram, DiagramError> {
            Err(DiagramError::Parse {
                line: 1,
                message: "boom".to_string(),
            })
        }
    }

    fn diagram(id: &str) -> RenderedDiagram {
        RenderedDiagram {
            id: id.to_string(),
            kind: DiagramKind::Flowchart,
            lines: Vec::new(),
        }
    }

    async fn next_render(
        rx: &mut mpsc::UnboundedReceiver<AppEvent>,
    ) -> (String, u64, Result<RenderedDiagram, DiagramError>) {
        match rx.recv().await {
            Some(AppEvent::DiagramRendered {
                container,
                token,
                outcome,
            }) => (container, token, outcome),
            other => panic!("expected render completion, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_request_renders_into_container() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut renderer =
            DiagramRenderer::new(TextDiagramEngine::new(), &DiagramOptions::default(), tx);

        let token = renderer.request("flow", "graph TD\nA --> B");
        assert_eq!(renderer.output("flow"), &PaneOutput::Rendering);

        let (container, got_token, outcome) = next_render(&mut rx).await;
        assert_eq!(container, "flow");
        assert_eq!(got_token, token);
        assert!(renderer.complete(&container, got_token, outcome));

        match renderer.output("flow") {
            PaneOutput::Rendered(d) => assert_eq!(d.plain_lines(), vec!["[A] ──▶ [B]"]),
            other => panic!("expected rendered output, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_engine_failure_becomes_failed_output() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut renderer = DiagramRenderer::new(FailingEngine, &DiagramOptions::default(), tx);

        renderer.request("flow", "anything");
        let (container, token, outcome) = next_render(&mut rx).await;
        renderer.complete(&container, token, outcome);

        assert_eq!(renderer.output("flow"), &PaneOutput::Failed);
    }

    #[tokio::test]
    async fn test_rerender_clears_previous_output() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut renderer =
            DiagramRenderer::new(TextDiagramEngine::new(), &DiagramOptions::default(), tx);

        renderer.request("flow", "graph TD\nA --> B");
        let (container, token, outcome) = next_render(&mut rx).await;
        renderer.complete(&container, token, outcome);

        // Identical input is rendered again from scratch
        let second = renderer.request("flow", "graph TD\nA --> B");
        assert_eq!(second, token + 1);
        assert_eq!(renderer.output("flow"), &PaneOutput::Rendering);
    }

    #[tokio::test]
    async fn test_stale_completion_is_discarded() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut renderer =
            DiagramRenderer::new(TextDiagramEngine::new(), &DiagramOptions::default(), tx);

        let first = renderer.request("flow", "graph TD\nA --> B");
        let second = renderer.request("flow", "graph TD\nC --> D");

        // Newer completion lands first, then the older one resolves
        assert!(renderer.complete("flow", second, Ok(diagram("second"))));
        assert!(!renderer.complete("flow", first, Ok(diagram("first"))));

        match renderer.output("flow") {
            PaneOutput::Rendered(d) => assert_eq!(d.id, "second"),
            other => panic!("expected rendered output, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_tokens_are_per_container() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut renderer =
            DiagramRenderer::new(TextDiagramEngine::new(), &DiagramOptions::default(), tx);

        assert_eq!(renderer.request("a", "graph TD\nA --> B"), 1);
        assert_eq!(renderer.request("b", "graph TD\nA --> B"), 1);
        assert_eq!(renderer.request("a", "graph TD\nA --> B"), 2);
        assert_eq!(renderer.latest_token("a"), Some(2));
        assert_eq!(renderer.latest_token("c"), None);
    }

    #[test]
    fn test_unknown_container_is_empty() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut renderer =
            DiagramRenderer::new(TextDiagramEngine::new(), &DiagramOptions::default(), tx);
        assert_eq!(renderer.output("missing"), &PaneOutput::Empty);
        assert!(!renderer.complete("missing", 1, Ok(diagram("x"))));
    }
}
