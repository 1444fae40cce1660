use std::collections::VecDeque;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use art_logging::art_debug;
use emoji_art_core::{
    update, Background, DocumentState, DocumentView, Emoji, FetchStatus, Msg, Size,
};
use emoji_art_engine::{EngineHandle, FetchSettings};

use crate::effects::{map_event, EffectRunner};

/// Owner of one document. Every mutation, including the application of fetch
/// completions, happens on the thread that holds the session.
pub struct DocumentSession {
    state: DocumentState,
    runner: EffectRunner,
    subscribers: Vec<mpsc::Sender<DocumentView>>,
}

impl DocumentSession {
    pub fn new(settings: FetchSettings) -> std::io::Result<Self> {
        Ok(Self::with_engine(EngineHandle::new(settings)?))
    }

    pub fn with_engine(engine: EngineHandle) -> Self {
        Self {
            state: DocumentState::new(),
            runner: EffectRunner::new(engine),
            subscribers: Vec::new(),
        }
    }

    pub fn state(&self) -> &DocumentState {
        &self.state
    }

    pub fn view(&self) -> DocumentView {
        self.state.view()
    }

    /// Receives a snapshot every time observable state changes.
    pub fn subscribe(&mut self) -> mpsc::Receiver<DocumentView> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    pub fn set_background(&mut self, background: Background) {
        self.dispatch(Msg::SetBackground(background));
    }

    pub fn add_emoji(&mut self, text: impl Into<String>, at: (i32, i32), size: f64) {
        self.dispatch(Msg::AddEmoji {
            text: text.into(),
            at,
            size,
        });
    }

    pub fn move_emoji(&mut self, emoji: &Emoji, offset: Size) {
        self.dispatch(Msg::MoveEmoji {
            emoji: emoji.clone(),
            offset,
        });
    }

    pub fn scale_emoji(&mut self, emoji: &Emoji, factor: f64) {
        self.dispatch(Msg::ScaleEmoji {
            emoji: emoji.clone(),
            factor,
        });
    }

    /// Applies every engine completion that has already arrived.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Some(event) = self.runner.engine().try_recv() {
            self.dispatch(map_event(event));
            applied += 1;
        }
        applied
    }

    /// Blocks for at most `timeout` until one engine completion arrives and
    /// applies it.
    pub fn wait_for_event(&mut self, timeout: Duration) -> bool {
        match self.runner.engine().recv_timeout(timeout) {
            Some(event) => {
                self.dispatch(map_event(event));
                true
            }
            None => false,
        }
    }

    /// Applies completions until the fetch status returns to idle or the
    /// timeout elapses.
    pub fn wait_until_idle(&mut self, timeout: Duration) -> bool {
        // Durations too large for an `Instant` mean no deadline.
        let deadline = Instant::now().checked_add(timeout);
        while self.state.fetch_status() == FetchStatus::Fetching {
            let remaining = match deadline {
                Some(deadline) => deadline.saturating_duration_since(Instant::now()),
                None => timeout,
            };
            if remaining.is_zero() || !self.wait_for_event(remaining) {
                return false;
            }
        }
        true
    }

    fn dispatch(&mut self, msg: Msg) {
        let mut inbox = VecDeque::from([msg]);
        while let Some(msg) = inbox.pop_front() {
            let state = std::mem::take(&mut self.state);
            let (state, effects) = update(state, msg);
            self.state = state;
            inbox.extend(self.runner.run(effects));
        }

        if self.state.consume_dirty() {
            self.publish();
        }
    }

    fn publish(&mut self) {
        let view = self.state.view();
        self.subscribers
            .retain(|subscriber| subscriber.send(view.clone()).is_ok());
        art_debug!(
            "Published view: {} emojis, status {:?}",
            view.emojis.len(),
            view.fetch_status
        );
    }
}
