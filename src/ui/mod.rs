//! # UI Collaborator Contract
//!
//! The inventory logic never renders anything. It talks to a UI collaborator through
//! [`UiRequest`] messages sent by a [`UiClient`]. Requests that need an answer carry a
//! `oneshot` sender (the continuation); the flow that sent them suspends until the UI replies.
//!
//! ```text
//! Inventory flow ──UiRequest──▶ serve(receiver, collaborator)
//!        ▲                                   │
//!        └──────── oneshot reply ────────────┘
//! ```
//!
//! A collaborator implements [`UiCollaborator`] and is driven by [`serve`]. Returning `None`
//! from a prompt drops the continuation, which abandons the waiting flow.
//!
//! Two collaborators ship with the crate:
//! - [`console::ConsoleUi`]: line-oriented, over any async reader and writer (stdin/stdout in
//!   the demo binary).
//! - [`scripted::ScriptedUi`]: answers from a script and records a transcript, for tests.

mod client;
pub mod console;
pub mod scripted;

pub use client::{UiClient, UiError};

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};

use crate::model::{ArticleId, FoodKind, Product};

/// Text typed into the product details prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDetails {
    pub name: String,
    pub price: String,
    pub description: String,
}

/// Text typed into the nutrient prompt. `caffeine` is only asked for energy drinks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NutrientForm {
    pub kcal: String,
    pub fat: String,
    pub carbs: String,
    pub protein: String,
    pub caffeine: Option<String>,
}

/// A message from the inventory logic to the UI collaborator.
#[derive(Debug)]
pub enum UiRequest {
    /// Fire and forget.
    ReportError(String),
    /// Fire and forget.
    ShowText { title: String, body: String },
    PromptInput {
        prompt: String,
        reply: oneshot::Sender<String>,
    },
    PromptProductDetails {
        id: ArticleId,
        reply: oneshot::Sender<ProductDetails>,
    },
    ChooseCategory {
        choices: Vec<&'static str>,
        reply: oneshot::Sender<String>,
    },
    PromptNutrients {
        kind: FoodKind,
        reply: oneshot::Sender<NutrientForm>,
    },
    /// Fire and forget.
    DisplayProduct(Product),
}

/// Something that can answer [`UiRequest`]s.
#[async_trait]
pub trait UiCollaborator: Send {
    async fn report_error(&mut self, message: String);

    async fn show_text(&mut self, title: String, body: String);

    async fn prompt_input(&mut self, prompt: String) -> Option<String>;

    async fn prompt_product_details(&mut self, id: ArticleId) -> Option<ProductDetails>;

    async fn choose_category(&mut self, choices: Vec<&'static str>) -> Option<String>;

    async fn prompt_nutrients(&mut self, kind: FoodKind) -> Option<NutrientForm>;

    async fn display_product(&mut self, product: Product);
}

/// Answers requests one at a time until every [`UiClient`] is dropped, then hands the
/// collaborator back.
pub async fn serve<C: UiCollaborator>(mut requests: mpsc::UnboundedReceiver<UiRequest>, mut ui: C) -> C {
    while let Some(request) = requests.recv().await {
        match request {
            UiRequest::ReportError(message) => ui.report_error(message).await,
            UiRequest::ShowText { title, body } => ui.show_text(title, body).await,
            UiRequest::PromptInput { prompt, reply } => {
                if let Some(answer) = ui.prompt_input(prompt).await {
                    let _ = reply.send(answer);
                }
            }
            UiRequest::PromptProductDetails { id, reply } => {
                if let Some(details) = ui.prompt_product_details(id).await {
                    let _ = reply.send(details);
                }
            }
            UiRequest::ChooseCategory { choices, reply } => {
                if let Some(choice) = ui.choose_category(choices).await {
                    let _ = reply.send(choice);
                }
            }
            UiRequest::PromptNutrients { kind, reply } => {
                if let Some(form) = ui.prompt_nutrients(kind).await {
                    let _ = reply.send(form);
                }
            }
            UiRequest::DisplayProduct(product) => ui.display_product(product).await,
        }
    }
    ui
}
