//! Reading session controller.
//!
//! One task owns the session state. Front ends talk to it through a
//! [`ReadingHandle`]: commands go in over a channel and every state change
//! comes back out as a [`SessionSnapshot`] on a watch channel. The controller
//! also receives catalog results from its fetch tasks and reveal ticks from
//! its own timer, all in one `select!` loop, so nothing else ever mutates the
//! session.

use std::sync::Arc;

use rand::{rngs::StdRng, SeedableRng};
use shared::{
    domain::{CardId, CatalogCard, DrawnCard, LocalizedCard},
    error::CatalogError,
};
use tokio::{
    sync::{mpsc, oneshot, watch},
    task::JoinHandle,
    time::{sleep_until, Instant},
};
use tracing::{debug, info, warn};

use crate::{
    catalog::CatalogSource,
    config::SessionSettings,
    draw::DrawSequence,
    interpretation::interpret,
    SessionError,
};

const COMMAND_QUEUE_DEPTH: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckStatus {
    Idle,
    Loading,
    Ready,
    /// Holds the user-facing message.
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Towards the next card.
    Left,
    /// Towards the previous card.
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    AlreadyLoading,
    DeckUnavailable,
    DrawInProgress,
    UnknownCard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Applied,
    Ignored(IgnoreReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    LoadDeck,
    Draw,
    Reset,
    SelectCard(Option<CardId>),
    GoToCard(usize),
    Swipe(SwipeDirection),
}

impl SessionCommand {
    fn name(&self) -> &'static str {
        match self {
            Self::LoadDeck => "load_deck",
            Self::Draw => "draw",
            Self::Reset => "reset",
            Self::SelectCard(_) => "select_card",
            Self::GoToCard(_) => "go_to_card",
            Self::Swipe(_) => "swipe",
        }
    }
}

struct Envelope {
    command: SessionCommand,
    reply: oneshot::Sender<CommandOutcome>,
}

/// Read-only view of the session, published after every change.
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    pub deck: Arc<[LocalizedCard]>,
    pub status: DeckStatus,
    pub drawn_cards: Vec<DrawnCard>,
    pub is_drawing: bool,
    pub selected: Option<CardId>,
    pub current_card_index: usize,
}

impl SessionSnapshot {
    pub fn is_loading(&self) -> bool {
        self.status == DeckStatus::Loading
    }

    pub fn is_ready(&self) -> bool {
        self.status == DeckStatus::Ready
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            DeckStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn selected_card(&self) -> Option<&DrawnCard> {
        let selected = self.selected.as_ref()?;
        self.drawn_cards.iter().find(|card| &card.id == selected)
    }

    pub fn focused_card(&self) -> Option<&DrawnCard> {
        self.drawn_cards.get(self.current_card_index)
    }

    /// Summary of a finished spread. Picks a fresh template on every call.
    pub fn interpretation(&self) -> Option<String> {
        if self.is_drawing {
            return None;
        }
        interpret(&self.drawn_cards, &mut rand::rng())
    }
}

struct ReadingSession {
    deck: Arc<[LocalizedCard]>,
    status: DeckStatus,
    drawn_cards: Vec<DrawnCard>,
    is_drawing: bool,
    selected: Option<CardId>,
    current_card_index: usize,
}

impl ReadingSession {
    fn new() -> Self {
        Self {
            deck: Arc::from(Vec::new()),
            status: DeckStatus::Idle,
            drawn_cards: Vec::new(),
            is_drawing: false,
            selected: None,
            current_card_index: 0,
        }
    }

    fn clear_spread(&mut self) {
        self.drawn_cards.clear();
        self.selected = None;
        self.current_card_index = 0;
    }

    fn last_index(&self) -> usize {
        self.drawn_cards.len().saturating_sub(1)
    }

    fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            deck: Arc::clone(&self.deck),
            status: self.status.clone(),
            drawn_cards: self.drawn_cards.clone(),
            is_drawing: self.is_drawing,
            selected: self.selected.clone(),
            current_card_index: self.current_card_index,
        }
    }
}

struct PendingReveal {
    sequence: DrawSequence,
    deadline: Instant,
}

type LoadResult = Result<Vec<CatalogCard>, CatalogError>;

pub struct SessionController {
    state: ReadingSession,
    settings: SessionSettings,
    source: Arc<dyn CatalogSource>,
    rng: StdRng,
    reveal: Option<PendingReveal>,
    commands: mpsc::Receiver<Envelope>,
    loads_tx: mpsc::Sender<LoadResult>,
    loads_rx: mpsc::Receiver<LoadResult>,
    snapshots: watch::Sender<SessionSnapshot>,
}

/// Cloneable front-end access to a running session.
#[derive(Clone)]
pub struct ReadingHandle {
    commands: mpsc::Sender<Envelope>,
    snapshots: watch::Receiver<SessionSnapshot>,
}

/// Starts a controller task. The task ends once every handle is dropped.
pub fn spawn_session(
    settings: SessionSettings,
    source: Arc<dyn CatalogSource>,
) -> (ReadingHandle, JoinHandle<()>) {
    let (controller, handle) = SessionController::new(settings, source);
    let task = tokio::spawn(controller.run());
    (handle, task)
}

impl SessionController {
    pub fn new(settings: SessionSettings, source: Arc<dyn CatalogSource>) -> (Self, ReadingHandle) {
        let state = ReadingSession::new();
        let (commands_tx, commands) = mpsc::channel(COMMAND_QUEUE_DEPTH);
        let (loads_tx, loads_rx) = mpsc::channel(1);
        let (snapshots, snapshots_rx) = watch::channel(state.snapshot());
        let rng = settings
            .seed
            .map(StdRng::seed_from_u64)
            .unwrap_or_else(StdRng::from_os_rng);

        let controller = Self {
            state,
            settings,
            source,
            rng,
            reveal: None,
            commands,
            loads_tx,
            loads_rx,
            snapshots,
        };
        let handle = ReadingHandle {
            commands: commands_tx,
            snapshots: snapshots_rx,
        };
        (controller, handle)
    }

    pub async fn run(mut self) {
        if self.settings.load_on_start {
            self.begin_load();
            self.publish();
        }

        loop {
            let reveal_at = self.reveal.as_ref().map(|pending| pending.deadline);
            tokio::select! {
                envelope = self.commands.recv() => {
                    let Some(Envelope { command, reply }) = envelope else {
                        break;
                    };
                    let outcome = self.handle(command);
                    let _ = reply.send(outcome);
                }
                Some(result) = self.loads_rx.recv() => self.finish_load(result),
                _ = sleep_until(reveal_at.unwrap_or_else(Instant::now)), if reveal_at.is_some() => {
                    self.reveal_next();
                }
            }
        }

        debug!("reading session closed");
    }

    fn handle(&mut self, command: SessionCommand) -> CommandOutcome {
        let name = command.name();
        debug!(command = name, "handling session command");

        let outcome = match command {
            SessionCommand::LoadDeck => self.begin_load(),
            SessionCommand::Draw => self.begin_draw(),
            SessionCommand::Reset => self.reset(),
            SessionCommand::SelectCard(id) => self.select_card(id),
            SessionCommand::GoToCard(index) => self.go_to_card(index),
            SessionCommand::Swipe(direction) => self.swipe(direction),
        };

        match outcome {
            CommandOutcome::Applied => self.publish(),
            CommandOutcome::Ignored(reason) => {
                debug!(command = name, ?reason, "session command ignored")
            }
        }
        outcome
    }

    fn publish(&self) {
        self.snapshots.send_replace(self.state.snapshot());
    }

    /// Rejected while a draw is revealing; loading and drawing never overlap.
    fn begin_load(&mut self) -> CommandOutcome {
        if self.state.is_drawing {
            return CommandOutcome::Ignored(IgnoreReason::DrawInProgress);
        }
        if self.state.status == DeckStatus::Loading {
            return CommandOutcome::Ignored(IgnoreReason::AlreadyLoading);
        }
        self.state.status = DeckStatus::Loading;

        let source = Arc::clone(&self.source);
        let results = self.loads_tx.clone();
        tokio::spawn(async move {
            let result = source.fetch_cards().await;
            let _ = results.send(result).await;
        });
        CommandOutcome::Applied
    }

    fn finish_load(&mut self, result: LoadResult) {
        match result {
            Ok(cards) => {
                let deck: Arc<[LocalizedCard]> = locale::localize_all(&cards).into();
                info!(cards = deck.len(), "tarot deck loaded");
                self.state.deck = deck;
                self.state.status = DeckStatus::Ready;
            }
            Err(err) => {
                warn!(code = ?err.code(), error = %err, "failed to load tarot deck");
                self.state.status = DeckStatus::Failed(err.user_message().to_string());
            }
        }
        self.publish();
    }

    fn begin_draw(&mut self) -> CommandOutcome {
        if self.state.is_drawing {
            return CommandOutcome::Ignored(IgnoreReason::DrawInProgress);
        }
        if self.state.status != DeckStatus::Ready {
            return CommandOutcome::Ignored(IgnoreReason::DeckUnavailable);
        }
        let Some(mut sequence) =
            DrawSequence::new(Arc::clone(&self.state.deck), &self.settings.image_base_url)
        else {
            return CommandOutcome::Ignored(IgnoreReason::DeckUnavailable);
        };

        sequence.start();
        self.state.clear_spread();
        self.state.is_drawing = true;
        self.reveal = Some(PendingReveal {
            sequence,
            deadline: Instant::now() + self.settings.reveal_interval,
        });
        CommandOutcome::Applied
    }

    fn reveal_next(&mut self) {
        let Some(pending) = self.reveal.as_mut() else {
            return;
        };

        if let Some(card) = pending.sequence.reveal_next(&mut self.rng) {
            debug!(
                position = card.position.index(),
                card = card.card.name(),
                reversed = card.reversed,
                "revealed card"
            );
            self.state.drawn_cards.push(card);
        }

        if pending.sequence.is_finished() {
            self.reveal = None;
            self.state.is_drawing = false;
        } else {
            pending.deadline = Instant::now() + self.settings.reveal_interval;
        }
        self.publish();
    }

    /// Rejected while a draw is revealing; the draw cannot be cancelled.
    fn reset(&mut self) -> CommandOutcome {
        if self.state.is_drawing {
            return CommandOutcome::Ignored(IgnoreReason::DrawInProgress);
        }
        self.state.clear_spread();
        CommandOutcome::Applied
    }

    fn select_card(&mut self, id: Option<CardId>) -> CommandOutcome {
        let Some(id) = id else {
            self.state.selected = None;
            return CommandOutcome::Applied;
        };

        if self.state.selected.as_ref() == Some(&id) {
            self.state.selected = None;
        } else if self.state.drawn_cards.iter().any(|card| card.id == id) {
            self.state.selected = Some(id);
        } else {
            return CommandOutcome::Ignored(IgnoreReason::UnknownCard);
        }
        CommandOutcome::Applied
    }

    fn go_to_card(&mut self, index: usize) -> CommandOutcome {
        self.state.current_card_index = index.min(self.state.last_index());
        CommandOutcome::Applied
    }

    fn swipe(&mut self, direction: SwipeDirection) -> CommandOutcome {
        let current = self.state.current_card_index;
        let target = match direction {
            SwipeDirection::Left if current < self.state.last_index() => current + 1,
            SwipeDirection::Right if current > 0 => current - 1,
            _ => current,
        };
        self.go_to_card(target)
    }
}

impl ReadingHandle {
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.snapshots.clone()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.snapshots.borrow().clone()
    }

    pub async fn load_deck(&self) -> Result<CommandOutcome, SessionError> {
        self.dispatch(SessionCommand::LoadDeck).await
    }

    pub async fn draw(&self) -> Result<CommandOutcome, SessionError> {
        self.dispatch(SessionCommand::Draw).await
    }

    pub async fn reset(&self) -> Result<CommandOutcome, SessionError> {
        self.dispatch(SessionCommand::Reset).await
    }

    pub async fn select_card(&self, id: Option<CardId>) -> Result<CommandOutcome, SessionError> {
        self.dispatch(SessionCommand::SelectCard(id)).await
    }

    pub async fn go_to_card(&self, index: usize) -> Result<CommandOutcome, SessionError> {
        self.dispatch(SessionCommand::GoToCard(index)).await
    }

    pub async fn swipe(&self, direction: SwipeDirection) -> Result<CommandOutcome, SessionError> {
        self.dispatch(SessionCommand::Swipe(direction)).await
    }

    pub async fn dispatch(&self, command: SessionCommand) -> Result<CommandOutcome, SessionError> {
        let (reply, outcome) = oneshot::channel();
        self.commands
            .send(Envelope { command, reply })
            .await
            .map_err(|_| SessionError::ControllerClosed)?;
        outcome.await.map_err(|_| SessionError::ControllerClosed)
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
