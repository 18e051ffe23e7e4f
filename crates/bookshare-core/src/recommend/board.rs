//! Latest-selection-wins recommendation display state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::types::{BookRecord, Genre};

use super::recommender::Recommender;
use super::source::TextSource;

/// What a recommendation view should show.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BoardState {
    /// No genre selected yet.
    #[default]
    Idle,
    /// A fetch for `genre` is in flight.
    Loading { genre: Genre },
    /// Recommendations for the selected genre.
    Ready { genre: Genre, books: Vec<BookRecord> },
}

/// Tracks the selected genre and its recommendations.
///
/// Each [`select`](Self::select) starts a background fetch and supersedes
/// the previous one: the older task is aborted, and a result that still
/// arrives for a superseded selection is dropped. Only the most recent
/// selection can ever reach [`BoardState::Ready`].
pub struct RecommendationBoard<S> {
    recommender: Recommender<S>,
    state: Arc<watch::Sender<BoardState>>,
    generation: Arc<AtomicU64>,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl<S: TextSource + 'static> RecommendationBoard<S> {
    pub fn new(recommender: Recommender<S>) -> Self {
        let (state, _) = watch::channel(BoardState::Idle);
        Self {
            recommender,
            state: Arc::new(state),
            generation: Arc::new(AtomicU64::new(0)),
            task: Mutex::new(None),
        }
    }

    /// Select `genre` and fetch its recommendations in the background.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn select(&self, genre: Genre) {
        let mut task = self.task.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = task.take() {
            previous.abort();
        }

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(%genre, generation, "Genre selected");
        self.state.send_replace(BoardState::Loading { genre });

        let recommender = self.recommender.clone();
        let state = Arc::clone(&self.state);
        let latest = Arc::clone(&self.generation);

        *task = Some(tokio::spawn(async move {
            let books = recommender.fetch_recommendations(genre.label()).await;
            state.send_if_modified(|current| {
                if latest.load(Ordering::SeqCst) != generation {
                    debug!(%genre, generation, "Dropping superseded recommendations");
                    return false;
                }
                *current = BoardState::Ready { genre, books };
                true
            });
        }));
    }

    /// Snapshot of the current state.
    pub fn current(&self) -> BoardState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<BoardState> {
        self.state.subscribe()
    }

    /// Wait until the current selection's recommendations are ready.
    ///
    /// Returns `None` when nothing has been selected.
    pub async fn wait_ready(&self) -> Option<(Genre, Vec<BookRecord>)> {
        let mut rx = self.state.subscribe();
        let state = rx
            .wait_for(|state| !matches!(state, BoardState::Loading { .. }))
            .await
            .ok()?;

        match &*state {
            BoardState::Ready { genre, books } => Some((*genre, books.clone())),
            BoardState::Idle | BoardState::Loading { .. } => None,
        }
    }
}

impl<S> Drop for RecommendationBoard<S> {
    fn drop(&mut self) {
        let task = self.task.get_mut().unwrap_or_else(PoisonError::into_inner);
        if let Some(task) = task.take() {
            task.abort();
        }
    }
}
