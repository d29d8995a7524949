use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use banjara_core::attachment;
use banjara_core::session::{perform_listing, perform_send, perform_upload};
use banjara_core::{
    Chat, ChatBackend, ChatSession, ChatSummary, GatewayError, ListingState, Tab, UploadReply,
};
use ratatui::widgets::ListState;
use tokio::sync::mpsc::UnboundedSender;

use crate::tui::AppEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPane {
    Sidebar,
    Conversation,
}

/// What a typed-in file path will be used for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathTarget {
    ChatAttachment,
    ListingImage,
}

#[derive(Debug, Clone)]
pub struct PathPrompt {
    pub target: PathTarget,
    pub input: String,
    pub cursor: usize,
}

impl PathPrompt {
    fn new(target: PathTarget) -> Self {
        Self {
            target,
            input: String::new(),
            cursor: 0,
        }
    }
}

/// Result of a backend call made from a background task
#[derive(Debug)]
pub enum Outcome {
    ChatList(Result<Vec<ChatSummary>, GatewayError>),
    ChatLoaded {
        chat_id: String,
        result: Result<Chat, GatewayError>,
    },
    ChatCreated(Result<ChatSummary, GatewayError>),
    Reply {
        chat_id: String,
        result: Result<String, GatewayError>,
    },
    Uploaded {
        chat_id: String,
        result: Result<UploadReply, GatewayError>,
    },
    Listing(Result<String, GatewayError>),
}

pub struct App {
    // Core state
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub focus: FocusPane,

    // Conversation and listing state
    pub session: ChatSession,
    pub listing: ListingState,
    pub composer_cursor: usize, // cursor position in session.composer
    pub history_state: ListState,

    // Chat scroll state
    pub chat_scroll: u16,
    pub chat_height: u16, // Height of chat area for scroll calculations
    pub chat_width: u16,  // Width of chat area for wrap calculations
    pub chat_rows: u16,   // Wrapped rows of the whole conversation
    pub follow_tail: bool,

    // File path popup
    pub path_prompt: Option<PathPrompt>,

    /// One-line notice for failures that have no chat bubble to land in
    pub status: Option<String>,

    // Animation state
    pub animation_frame: u8, // 0-2 for ellipsis animation

    // Backend
    pub backend: Arc<dyn ChatBackend>,
    events: UnboundedSender<AppEvent>,
}

impl App {
    pub fn new(backend: Arc<dyn ChatBackend>, events: UnboundedSender<AppEvent>) -> Self {
        Self {
            should_quit: false,
            input_mode: InputMode::Normal,
            focus: FocusPane::Sidebar,

            session: ChatSession::new(),
            listing: ListingState::new(),
            composer_cursor: 0,
            history_state: ListState::default(),

            chat_scroll: 0,
            chat_height: 0,
            chat_width: 0,
            chat_rows: 0,
            follow_tail: true,

            path_prompt: None,
            status: None,

            animation_frame: 0,

            backend,
            events,
        }
    }

    /// Run a backend call off the UI loop; its outcome comes back as an event.
    fn spawn<F>(&self, call: F)
    where
        F: Future<Output = Outcome> + Send + 'static,
    {
        let tx = self.events.clone();
        tokio::spawn(async move {
            let outcome = call.await;
            if tx.send(AppEvent::Backend(outcome)).is_err() {
                tracing::debug!("event loop gone, dropping backend outcome");
            }
        });
    }

    pub fn fetch_chats(&self) {
        let backend = Arc::clone(&self.backend);
        self.spawn(async move { Outcome::ChatList(backend.list_chats().await) });
    }

    pub fn load_chat(&self, chat_id: String) {
        let backend = Arc::clone(&self.backend);
        self.spawn(async move {
            let result = backend.load_chat(&chat_id).await;
            Outcome::ChatLoaded { chat_id, result }
        });
    }

    pub fn new_chat(&self) {
        let backend = Arc::clone(&self.backend);
        self.spawn(async move { Outcome::ChatCreated(backend.create_chat().await) });
    }

    /// Send whatever is in the composer. Does nothing while the send control
    /// is disabled.
    pub fn send_message(&mut self) {
        if !self.session.can_send() {
            return;
        }
        let text = self.session.composer.clone();
        let Some(request) = self.session.begin_send(&text) else {
            return;
        };
        self.composer_cursor = 0;
        self.messages_changed();

        let backend = Arc::clone(&self.backend);
        self.spawn(async move {
            let result = perform_send(backend.as_ref(), &request).await;
            Outcome::Reply {
                chat_id: request.chat_id,
                result,
            }
        });
    }

    pub fn upload_file(&mut self, path: &Path) {
        let Some(request) = self.session.begin_upload(path) else {
            return;
        };
        self.messages_changed();

        let backend = Arc::clone(&self.backend);
        self.spawn(async move {
            let result = perform_upload(backend.as_ref(), &request).await;
            Outcome::Uploaded {
                chat_id: request.chat_id,
                result,
            }
        });
    }

    pub fn submit_listing_image(&mut self, path: &Path) {
        let Some(path) = self.listing.begin(path) else {
            return;
        };

        let backend = Arc::clone(&self.backend);
        self.spawn(async move { Outcome::Listing(perform_listing(backend.as_ref(), &path).await) });
    }

    pub fn apply_outcome(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::ChatList(Ok(chats)) => {
                tracing::info!(count = chats.len(), "loaded chat history");
                if let Some(first) = self.session.apply_chat_list(chats) {
                    self.load_chat(first);
                }
                self.sync_history_selection();
            }
            Outcome::ChatList(Err(e)) => self.report("Could not fetch chats", &e),
            Outcome::ChatLoaded { chat_id, result } => match result {
                Ok(chat) => {
                    self.session.apply_loaded_chat(chat_id, chat.messages);
                    self.sync_history_selection();
                    self.messages_changed();
                }
                Err(e) => self.report("Could not load chat", &e),
            },
            Outcome::ChatCreated(Ok(chat)) => {
                self.session.apply_new_chat(chat);
                self.sync_history_selection();
                self.messages_changed();
            }
            Outcome::ChatCreated(Err(e)) => self.report("Could not create chat", &e),
            Outcome::Reply { chat_id, result } => {
                self.session.finish_send(&chat_id, result);
                self.messages_changed();
            }
            Outcome::Uploaded { chat_id, result } => {
                self.session.finish_upload(&chat_id, result);
                self.messages_changed();
            }
            Outcome::Listing(result) => self.listing.finish(result),
        }
    }

    fn report(&mut self, context: &str, error: &GatewayError) {
        tracing::warn!(error = %error, "{}", context);
        self.status = Some(format!("{}: {}", context, error));
    }

    /// Keep the newest message in view after any change to the sequence
    fn messages_changed(&mut self) {
        self.follow_tail = true;
    }

    fn sync_history_selection(&mut self) {
        let idx = self
            .session
            .current_chat_id
            .as_deref()
            .and_then(|id| self.session.history.iter().position(|c| c.id == id))
            .or(if self.session.history.is_empty() { None } else { Some(0) });
        self.history_state.select(idx);
    }

    pub fn busy(&self) -> bool {
        match self.session.tab {
            Tab::Chat => self.session.busy,
            Tab::Listing => self.listing.busy,
        }
    }

    // Sidebar navigation
    pub fn history_down(&mut self) {
        let len = self.session.history.len();
        if len == 0 {
            return;
        }
        let next = self.history_state.selected().map_or(0, |i| (i + 1).min(len - 1));
        self.history_state.select(Some(next));
    }

    pub fn history_up(&mut self) {
        if self.session.history.is_empty() {
            return;
        }
        let prev = self.history_state.selected().map_or(0, |i| i.saturating_sub(1));
        self.history_state.select(Some(prev));
    }

    pub fn open_selected_chat(&self) {
        let selected = self
            .history_state
            .selected()
            .and_then(|i| self.session.history.get(i));
        if let Some(chat) = selected {
            self.load_chat(chat.id.clone());
        }
    }

    pub fn show_tab(&mut self, tab: Tab) {
        self.session.tab = tab;
        if tab == Tab::Listing {
            self.input_mode = InputMode::Normal;
        }
    }

    /// Put a suggested prompt in the composer and start editing it
    pub fn choose_suggestion(&mut self, idx: usize) {
        if !self.session.messages.is_empty() {
            return;
        }
        if self.session.choose_suggestion(idx) {
            self.composer_cursor = self.session.composer.chars().count();
            self.input_mode = InputMode::Editing;
        }
    }

    pub fn open_path_prompt(&mut self, target: PathTarget) {
        let allowed = match target {
            PathTarget::ChatAttachment => self.session.can_send(),
            PathTarget::ListingImage => !self.listing.busy,
        };
        if allowed {
            self.path_prompt = Some(PathPrompt::new(target));
        }
    }

    /// Submit the typed path. Unsupported or missing files keep the prompt
    /// open with a status notice.
    pub fn submit_path_prompt(&mut self) {
        let Some(prompt) = self.path_prompt.as_ref() else {
            return;
        };
        let raw = prompt.input.trim();
        if raw.is_empty() {
            self.path_prompt = None;
            return;
        }

        let path = expand_home(raw);
        let target = prompt.target;
        let accepted = match target {
            PathTarget::ChatAttachment => attachment::accepts_chat_upload(&path),
            PathTarget::ListingImage => attachment::accepts_listing_image(&path),
        };
        if !accepted {
            self.status = Some(match target {
                PathTarget::ChatAttachment => format!(
                    "Unsupported file type (use .{})",
                    attachment::CHAT_UPLOAD_EXTENSIONS.join(", .")
                ),
                PathTarget::ListingImage => "Choose an image file".to_string(),
            });
            return;
        }
        if !path.is_file() {
            self.status = Some(format!("No such file: {}", path.display()));
            return;
        }

        self.path_prompt = None;
        match target {
            PathTarget::ChatAttachment => self.upload_file(&path),
            PathTarget::ListingImage => self.submit_listing_image(&path),
        }
    }

    /// Tick animation frame (called by Tick event)
    pub fn tick_animation(&mut self) {
        if self.session.busy || self.listing.busy {
            self.animation_frame = (self.animation_frame + 1) % 3;
        }
    }

    /// Record how many rows the wrapped conversation occupies, as measured by the renderer
    pub fn set_chat_rows(&mut self, rows: usize) {
        self.chat_rows = u16::try_from(rows).unwrap_or(u16::MAX);
    }

    /// Pin the scroll to the newest message while following the tail
    pub fn update_chat_scroll(&mut self) {
        if !self.follow_tail {
            return;
        }
        self.chat_scroll = self.chat_rows.saturating_sub(self.chat_height);
    }

    pub fn scroll_up(&mut self) {
        self.follow_tail = false;
        self.chat_scroll = self.chat_scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        let max = self.chat_rows.saturating_sub(self.chat_height);
        self.chat_scroll = self.chat_scroll.saturating_add(1).min(max);
        self.follow_tail = self.chat_scroll >= max;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.follow_tail = true;
        self.update_chat_scroll();
    }
}

fn expand_home(raw: &str) -> PathBuf {
    match raw.strip_prefix("~/") {
        Some(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| PathBuf::from(raw)),
        None => PathBuf::from(raw),
    }
}
