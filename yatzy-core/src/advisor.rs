//! The strategy-advice boundary.
//!
//! Advice is a read-only collaborator: it gets a snapshot of the turn in
//! progress and produces a suggestion string for the player. Nothing it
//! returns feeds back into the game state, and any fault on the advice
//! path degrades to [`UNAVAILABLE`] at the presentation layer.

use crate::category::Category;
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// Shown in place of advice when the provider fails or times out.
pub const UNAVAILABLE: &str = "AI-tjenesten er midlertidig utilgjengelig.";

/// Errors from an advice provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdviceError {
    #[error("advice provider error: {0}")]
    Provider(String),

    #[error("advice request timed out")]
    Timeout,
}

/// Read-only snapshot handed to an advisor.
///
/// Produced by [`Game::advice_context`](crate::game::Game::advice_context),
/// which refuses to build one before the first roll of a turn or after the
/// game is over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdviceContext {
    /// Current face values, in slot order.
    pub faces: [u8; 5],
    /// Categories the current player can still choose.
    pub open_categories: Vec<Category>,
    /// Rolls remaining this turn (always < 3 here).
    pub rolls_left: u8,
}

/// Boxed advice future, so providers can be used behind `dyn Advisor`.
pub type AdviceFuture<'a> = Pin<Box<dyn Future<Output = Result<String, AdviceError>> + Send + 'a>>;

/// An injected advice capability.
///
/// The core ships no provider; the frontend supplies one (or none, in
/// which case every request renders as [`UNAVAILABLE`]).
pub trait Advisor: Send + Sync {
    fn advise<'a>(&'a self, ctx: &'a AdviceContext) -> AdviceFuture<'a>;
}
