use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

use super::{NutrientForm, ProductDetails, UiRequest};
use crate::model::{ArticleId, Category, FoodKind, Product};

/// Why a prompt produced no answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UiError {
    #[error("UI collaborator is gone")]
    Closed,
    #[error("Prompt was abandoned")]
    Abandoned,
}

/// Sending half of the UI channel.
///
/// The channel is unbounded, so fire-and-forget requests never wait. The catalog actor relies
/// on this to report problems without awaiting the UI.
#[derive(Debug, Clone)]
pub struct UiClient {
    sender: mpsc::UnboundedSender<UiRequest>,
}

impl UiClient {
    /// Creates a client and the receiver to hand to [`serve`](super::serve).
    pub fn new() -> (Self, mpsc::UnboundedReceiver<UiRequest>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }

    fn send(&self, request: UiRequest) {
        if self.sender.send(request).is_err() {
            warn!("UI collaborator is gone, dropping request");
        }
    }

    async fn ask<R>(&self, build: impl FnOnce(oneshot::Sender<R>) -> UiRequest) -> Result<R, UiError> {
        let (reply, answer) = oneshot::channel();
        self.sender.send(build(reply)).map_err(|_| UiError::Closed)?;
        answer.await.map_err(|_| {
            debug!("Prompt abandoned");
            UiError::Abandoned
        })
    }

    pub fn report_error(&self, message: impl Into<String>) {
        self.send(UiRequest::ReportError(message.into()));
    }

    pub fn show_text(&self, title: impl Into<String>, body: impl Into<String>) {
        self.send(UiRequest::ShowText {
            title: title.into(),
            body: body.into(),
        });
    }

    pub fn display_product(&self, product: Product) {
        self.send(UiRequest::DisplayProduct(product));
    }

    pub async fn prompt_input(&self, prompt: impl Into<String>) -> Result<String, UiError> {
        let prompt = prompt.into();
        self.ask(|reply| UiRequest::PromptInput { prompt, reply }).await
    }

    /// Asks for name, price and description of the product about to get `id`.
    pub async fn prompt_product_details(&self, id: ArticleId) -> Result<ProductDetails, UiError> {
        self.ask(|reply| UiRequest::PromptProductDetails { id, reply })
            .await
    }

    /// Offers every category label and returns the user's choice as typed.
    pub async fn choose_category(&self) -> Result<String, UiError> {
        let choices: Vec<&'static str> = Category::ALL.iter().map(|c| c.label()).collect();
        self.ask(|reply| UiRequest::ChooseCategory { choices, reply })
            .await
    }

    pub async fn prompt_nutrients(&self, kind: FoodKind) -> Result<NutrientForm, UiError> {
        self.ask(|reply| UiRequest::PromptNutrients { kind, reply })
            .await
    }
}
