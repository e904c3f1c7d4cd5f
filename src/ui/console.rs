//! Line-oriented UI collaborator.

use async_trait::async_trait;
use tokio::io::{
    self, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Lines, Stdin,
    Stdout,
};
use tracing::warn;

use super::{NutrientForm, ProductDetails, UiCollaborator};
use crate::model::{ArticleId, FoodKind, NutrientTable, Product};

/// Answers prompts by reading lines from `R` and writes everything else to `W`.
///
/// End of input abandons the pending prompt.
pub struct ConsoleUi<R, W> {
    input: Lines<R>,
    output: W,
}

impl ConsoleUi<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R, W> ConsoleUi<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: input.lines(),
            output,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    async fn write(&mut self, text: &str) {
        let result = async {
            self.output.write_all(text.as_bytes()).await?;
            self.output.flush().await
        }
        .await;
        if let Err(e) = result {
            warn!(error = %e, "Console write failed");
        }
    }

    async fn read_line(&mut self) -> Option<String> {
        match self.input.next_line().await {
            Ok(line) => line.map(|l| l.trim_end().to_string()),
            Err(e) => {
                warn!(error = %e, "Console read failed");
                None
            }
        }
    }

    async fn ask(&mut self, prompt: &str) -> Option<String> {
        self.write(&format!("{prompt} ")).await;
        self.read_line().await
    }
}

#[async_trait]
impl<R, W> UiCollaborator for ConsoleUi<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn report_error(&mut self, message: String) {
        self.write(&format!("Error: {message}\n")).await;
    }

    async fn show_text(&mut self, title: String, body: String) {
        self.write(&format!("\n== {title} ==\n{body}\n")).await;
    }

    async fn prompt_input(&mut self, prompt: String) -> Option<String> {
        self.ask(&prompt).await
    }

    async fn prompt_product_details(&mut self, id: ArticleId) -> Option<ProductDetails> {
        self.write(&format!("Article ID: {id}\n")).await;
        Some(ProductDetails {
            name: self.ask("Name:").await?,
            price: self.ask("Price:").await?,
            description: self.ask("Description:").await?,
        })
    }

    async fn choose_category(&mut self, choices: Vec<&'static str>) -> Option<String> {
        let mut menu = String::new();
        for (n, label) in choices.iter().enumerate() {
            menu.push_str(&format!("{}) {label}\n", n + 1));
        }
        self.write(&menu).await;

        let answer = self.ask("Category:").await?;
        // A menu number picks the label, anything else goes through as typed
        let picked = answer
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| choices.get(i))
            .map(|label| label.to_string());
        Some(picked.unwrap_or(answer))
    }

    async fn prompt_nutrients(&mut self, kind: FoodKind) -> Option<NutrientForm> {
        let mut answers = Vec::with_capacity(kind.nutrient_count());
        for name in NutrientTable::names(kind) {
            answers.push(self.ask(&format!("{name}:")).await?);
        }
        let mut answers = answers.into_iter();
        Some(NutrientForm {
            kcal: answers.next().unwrap_or_default(),
            fat: answers.next().unwrap_or_default(),
            carbs: answers.next().unwrap_or_default(),
            protein: answers.next().unwrap_or_default(),
            caffeine: answers.next(),
        })
    }

    async fn display_product(&mut self, product: Product) {
        self.write(&format!("{product}\n")).await;
    }
}
