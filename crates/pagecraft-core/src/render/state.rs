//! Render pipeline states
//!
//! ```text
//! Idle ─> Resolving ─> TokensCompiled ─> BodyComposed ─> DocumentAssembled ─> Done
//!             │
//!             └──> Error
//! ```
//!
//! Lookups and validation happen while `Resolving`; once the theme CSS is
//! compiled the remaining steps only fail on a broken template source, which
//! is reported as an error from the state it occurred in.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderState {
    Idle,
    Resolving,
    TokensCompiled,
    BodyComposed,
    DocumentAssembled,
    Done,
    Error,
}

impl RenderState {
    /// Successor on the success path
    pub fn next(self) -> Option<RenderState> {
        match self {
            RenderState::Idle => Some(RenderState::Resolving),
            RenderState::Resolving => Some(RenderState::TokensCompiled),
            RenderState::TokensCompiled => Some(RenderState::BodyComposed),
            RenderState::BodyComposed => Some(RenderState::DocumentAssembled),
            RenderState::DocumentAssembled => Some(RenderState::Done),
            RenderState::Done | RenderState::Error => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, RenderState::Done | RenderState::Error)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RenderState::Idle => "idle",
            RenderState::Resolving => "resolving",
            RenderState::TokensCompiled => "tokens-compiled",
            RenderState::BodyComposed => "body-composed",
            RenderState::DocumentAssembled => "document-assembled",
            RenderState::Done => "done",
            RenderState::Error => "error",
        }
    }
}

impl fmt::Display for RenderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tracks one render through its states and logs every transition
#[derive(Debug)]
pub(crate) struct RenderRun<'a> {
    template_id: &'a str,
    state: RenderState,
}

impl<'a> RenderRun<'a> {
    pub fn start(template_id: &'a str) -> Self {
        let mut run = Self {
            template_id,
            state: RenderState::Idle,
        };
        run.advance();
        run
    }

    pub fn state(&self) -> RenderState {
        self.state
    }

    /// Move along the success path
    pub fn advance(&mut self) {
        if let Some(next) = self.state.next() {
            tracing::trace!(template = self.template_id, from = %self.state, to = %next, "render state");
            self.state = next;
        }
    }

    /// Record a failure; the error itself is returned by the caller
    pub fn fail(&mut self, error: &dyn fmt::Display) {
        tracing::debug!(
            template = self.template_id,
            from = %self.state,
            error = %error,
            "render failed"
        );
        self.state = RenderState::Error;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_path() {
        let mut state = RenderState::Idle;
        let mut visited = vec![state];
        while let Some(next) = state.next() {
            state = next;
            visited.push(state);
        }
        assert_eq!(
            visited,
            vec![
                RenderState::Idle,
                RenderState::Resolving,
                RenderState::TokensCompiled,
                RenderState::BodyComposed,
                RenderState::DocumentAssembled,
                RenderState::Done,
            ]
        );
        assert!(state.is_terminal());
    }

    #[test]
    fn test_run_starts_resolving_and_fails_to_error() {
        let mut run = RenderRun::start("portfolio");
        assert_eq!(run.state(), RenderState::Resolving);
        run.fail(&"boom");
        assert_eq!(run.state(), RenderState::Error);
        run.advance();
        assert_eq!(run.state(), RenderState::Error);
    }
}
