//! Background advice worker and the Gemini-backed advisor.
//!
//! The worker owns the provider and runs on its own task; the UI thread
//! only ever touches the channels. Every request gets exactly one reply,
//! and any fault on the provider side (error, timeout, missing API key)
//! degrades to the fallback message instead of surfacing as an error.

use gemini::Gemini;
use std::time::Duration;
use tokio::sync::mpsc;
use yatzy_core::advisor::{self, AdviceContext, AdviceError, AdviceFuture, Advisor};

/// Upper bound on a single advice lookup.
const ADVICE_TIMEOUT: Duration = Duration::from_secs(12);

/// Advice provider backed by the Gemini API.
pub struct GeminiAdvisor {
    client: Gemini,
}

impl GeminiAdvisor {
    /// Build from `GEMINI_API_KEY`, or `None` when it is not set. The
    /// game is fully playable without a provider.
    pub fn from_env() -> Option<Self> {
        Gemini::from_env().ok().map(|client| Self { client })
    }
}

impl Advisor for GeminiAdvisor {
    fn advise<'a>(&'a self, ctx: &'a AdviceContext) -> AdviceFuture<'a> {
        Box::pin(async move {
            let prompt = build_prompt(ctx);
            self.client
                .generate(&prompt)
                .await
                .map_err(|e| AdviceError::Provider(e.to_string()))
        })
    }
}

/// The Norwegian coaching prompt, built from the turn snapshot.
fn build_prompt(ctx: &AdviceContext) -> String {
    let dice = ctx
        .faces
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    let open = ctx
        .open_categories
        .iter()
        .map(|c| c.label())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Du er en ekspert på brettspillet Norsk Yatzy.\n\n\
         Nåværende terninger: [{dice}]\n\
         Antall kast igjen denne turen: {rolls}\n\
         Åpne kategorier spilleren kan velge: {open}\n\n\
         Gi et kort, strategisk råd (maks 2 setninger) om hvilke terninger \
         som bør beholdes og hva spilleren bør satse på. \
         Vær entusiastisk og snakk direkte til spilleren. Svar på norsk.",
        rolls = ctx.rolls_left,
    )
}

/// Spawn the advice worker and return its channel endpoints.
pub fn spawn_worker<A>(advisor: Option<A>) -> (mpsc::Sender<AdviceContext>, mpsc::Receiver<String>)
where
    A: Advisor + 'static,
{
    let (request_tx, mut request_rx) = mpsc::channel::<AdviceContext>(4);
    let (reply_tx, reply_rx) = mpsc::channel::<String>(4);

    tokio::spawn(async move {
        while let Some(ctx) = request_rx.recv().await {
            let text = match &advisor {
                Some(advisor) => {
                    match tokio::time::timeout(ADVICE_TIMEOUT, advisor.advise(&ctx)).await {
                        Ok(Ok(text)) => text,
                        Ok(Err(_)) | Err(_) => advisor::UNAVAILABLE.to_string(),
                    }
                }
                None => advisor::UNAVAILABLE.to_string(),
            };
            if reply_tx.send(text).await.is_err() {
                break;
            }
        }
    });

    (request_tx, reply_rx)
}
