//! Scripted UI collaborator for tests.
//!
//! ```rust,ignore
//! let (ui, handle) = spawn_scripted([Answer::text("10000"), Answer::text("5")]);
//! // ... run flows with `ui` ...
//! drop(ui);
//! let transcript = handle.await?.into_transcript();
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use tokio::task::JoinHandle;

use super::{serve, NutrientForm, ProductDetails, UiClient, UiCollaborator};
use crate::model::{ArticleId, FoodKind, Product};

/// One scripted reply, consumed in order.
#[derive(Debug, Clone)]
pub enum Answer {
    Text(String),
    Details(ProductDetails),
    Category(String),
    Nutrients(NutrientForm),
    /// Drop the continuation instead of answering.
    Abandon,
}

impl Answer {
    pub fn text(text: impl Into<String>) -> Self {
        Answer::Text(text.into())
    }

    pub fn category(label: impl Into<String>) -> Self {
        Answer::Category(label.into())
    }

    pub fn details(name: &str, price: &str, description: &str) -> Self {
        Answer::Details(ProductDetails {
            name: name.to_string(),
            price: price.to_string(),
            description: description.to_string(),
        })
    }

    /// Nutrient values in table order; a fifth value fills caffeine.
    pub fn nutrients(values: &[&str]) -> Self {
        let value = |i: usize| values.get(i).map(|v| v.to_string()).unwrap_or_default();
        Answer::Nutrients(NutrientForm {
            kcal: value(0),
            fat: value(1),
            carbs: value(2),
            protein: value(3),
            caffeine: values.get(4).map(|v| v.to_string()),
        })
    }
}

/// Everything the collaborator was asked to do, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    Error(String),
    Text { title: String, body: String },
    Prompt(String),
    DetailsPrompt(ArticleId),
    CategoryChoice(Vec<&'static str>),
    NutrientPrompt(FoodKind),
    Product(Product),
}

#[derive(Debug, Default)]
pub struct ScriptedUi {
    answers: VecDeque<Answer>,
    transcript: Vec<UiEvent>,
}

impl ScriptedUi {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            transcript: Vec::new(),
        }
    }

    pub fn transcript(&self) -> &[UiEvent] {
        &self.transcript
    }

    pub fn into_transcript(self) -> Vec<UiEvent> {
        self.transcript
    }

    /// Reported error messages, in order.
    pub fn errors(&self) -> Vec<&str> {
        self.transcript
            .iter()
            .filter_map(|event| match event {
                UiEvent::Error(message) => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Answers not consumed yet.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next_answer(&mut self, event: UiEvent) -> Option<Answer> {
        self.transcript.push(event);
        match self.answers.pop_front() {
            Some(Answer::Abandon) | None => None,
            Some(answer) => Some(answer),
        }
    }
}

#[async_trait]
impl UiCollaborator for ScriptedUi {
    async fn report_error(&mut self, message: String) {
        self.transcript.push(UiEvent::Error(message));
    }

    async fn show_text(&mut self, title: String, body: String) {
        self.transcript.push(UiEvent::Text { title, body });
    }

    async fn prompt_input(&mut self, prompt: String) -> Option<String> {
        match self.next_answer(UiEvent::Prompt(prompt.clone()))? {
            Answer::Text(text) => Some(text),
            other => panic!("prompt {prompt:?} got scripted {other:?}"),
        }
    }

    async fn prompt_product_details(&mut self, id: ArticleId) -> Option<ProductDetails> {
        match self.next_answer(UiEvent::DetailsPrompt(id))? {
            Answer::Details(details) => Some(details),
            other => panic!("details prompt for {id} got scripted {other:?}"),
        }
    }

    async fn choose_category(&mut self, choices: Vec<&'static str>) -> Option<String> {
        match self.next_answer(UiEvent::CategoryChoice(choices))? {
            Answer::Category(label) | Answer::Text(label) => Some(label),
            other => panic!("category choice got scripted {other:?}"),
        }
    }

    async fn prompt_nutrients(&mut self, kind: FoodKind) -> Option<NutrientForm> {
        match self.next_answer(UiEvent::NutrientPrompt(kind))? {
            Answer::Nutrients(form) => Some(form),
            other => panic!("nutrient prompt for {kind} got scripted {other:?}"),
        }
    }

    async fn display_product(&mut self, product: Product) {
        self.transcript.push(UiEvent::Product(product));
    }
}

/// Spawns [`serve`] over a [`ScriptedUi`]. The handle resolves once every clone of the returned
/// client is dropped.
pub fn spawn_scripted(
    answers: impl IntoIterator<Item = Answer>,
) -> (UiClient, JoinHandle<ScriptedUi>) {
    let (client, requests) = UiClient::new();
    let handle = tokio::spawn(serve(requests, ScriptedUi::new(answers)));
    (client, handle)
}
