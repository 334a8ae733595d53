use anyhow::{Result, anyhow};
use tokio::task::JoinHandle;
use weathernow_core::{ApiClient, CurrentWeather};

use crate::handler;
use crate::tui::{AppEvent, EventHandler, Tui};
use crate::ui;

/// Fixed message shown for any failed lookup. The specific cause never
/// reaches the view.
pub const FETCH_ERROR_MESSAGE: &str = "Error fetching weather data";

pub struct App {
    pub should_quit: bool,

    /// Current input text of the search form.
    pub input: String,

    /// Last successful result, shown in the result panel.
    pub weather: Option<CurrentWeather>,

    /// Last error message, shown instead of the result panel.
    pub error: Option<String>,

    /// In-flight lookup, if any. A resubmission replaces it.
    pub fetch_task: Option<JoinHandle<Result<CurrentWeather>>>,

    client: ApiClient,
}

impl App {
    pub fn new(server_url: String) -> Self {
        Self {
            should_quit: false,
            input: String::new(),
            weather: None,
            error: None,
            fetch_task: None,
            client: ApiClient::new(server_url),
        }
    }

    pub async fn run(mut self, terminal: &mut Tui) -> Result<()> {
        let mut events = EventHandler::new();

        while !self.should_quit {
            terminal.draw(|frame| ui::render(&self, frame))?;

            match events.next().await {
                Some(AppEvent::Key(key)) => handler::handle_key(&mut self, key),
                Some(AppEvent::Tick) => self.poll_fetch().await,
                Some(AppEvent::Resize) | None => {}
            }
        }

        Ok(())
    }

    /// Kick off a lookup for the current input text, even when it is empty.
    pub fn submit(&mut self) {
        let client = self.client.clone();
        let city = self.input.clone();

        self.fetch_task = Some(tokio::spawn(async move { client.current_weather(&city).await }));
    }

    /// Apply a finished lookup if one is ready.
    async fn poll_fetch(&mut self) {
        match &self.fetch_task {
            Some(task) if task.is_finished() => {}
            _ => return,
        }

        if let Some(task) = self.fetch_task.take() {
            let result = task
                .await
                .unwrap_or_else(|err| Err(anyhow!("Weather lookup task failed: {err}")));
            self.apply_fetch_result(result);
        }
    }

    /// Atomically update the view state: a success stores the result and
    /// clears the error; a failure stores the fixed message and clears the
    /// result.
    pub fn apply_fetch_result(&mut self, result: Result<CurrentWeather>) {
        match result {
            Ok(weather) => {
                self.weather = Some(weather);
                self.error = None;
            }
            Err(_) => {
                self.error = Some(FETCH_ERROR_MESSAGE.to_string());
                self.weather = None;
            }
        }
    }
}
