//! STUN server list editor
//!
//! Owns the rows shown in the admin panel, applies edits immediately and
//! coalesces them into a single debounced save.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

use tokio::sync::watch;

use crate::error::{CoreError, CoreResult};
use crate::services::DebounceTimer;
use crate::traits::{InitialStateSource, ServerListPersister};
use crate::types::{SaveState, ServerList, SettingKey, DEFAULT_STUN_SERVER};

/// Quiescence window before edits are saved
pub const DEFAULT_SAVE_DEBOUNCE: Duration = Duration::from_millis(1000);

/// How long the saved checkmark stays visible
pub const DEFAULT_SAVED_DISPLAY: Duration = Duration::from_millis(3000);

/// Editor tuning
#[derive(Debug, Clone)]
pub struct EditorOptions {
    /// Setting the initial list is read from
    pub key: SettingKey,
    pub save_debounce: Duration,
    pub saved_display: Duration,
    /// Row inserted when the list would become empty
    pub default_server: String,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            key: SettingKey::default(),
            save_debounce: DEFAULT_SAVE_DEBOUNCE,
            saved_display: DEFAULT_SAVED_DISPLAY,
            default_server: DEFAULT_STUN_SERVER.to_string(),
        }
    }
}

/// Editable STUN server list with debounced saving.
///
/// Cloning yields another handle to the same editor. Row operations are
/// synchronous; saving runs on the tokio runtime, so row edits must be
/// made from within a runtime context.
///
/// Overlap policy:
/// - an edit cancels a pending (not yet fired) save and hides the saved checkmark
/// - a save that already started is never cancelled
/// - saves run one at a time; each writes the rows as they are when it starts
/// - a timer that fires after a newer edit re-armed it does nothing
/// - the checkmark is only shown when no edit is pending and no other save is
///   in flight; each new success restarts its display timer
#[derive(Clone)]
pub struct StunServerListEditor {
    inner: Arc<EditorInner>,
}

struct EditorInner {
    options: EditorOptions,
    source: Arc<dyn InitialStateSource>,
    persister: Arc<dyn ServerListPersister>,
    servers: Mutex<ServerList>,
    state: watch::Sender<SaveState>,
    save_timer: DebounceTimer,
    saved_timer: DebounceTimer,
    save_lock: tokio::sync::Mutex<()>,
    in_flight: AtomicUsize,
    /// Bumped by every edit; only the timer armed by the latest edit may save.
    save_generation: AtomicU64,
}

impl StunServerListEditor {
    /// Create an editor holding only the placeholder row; call
    /// [`initialize`](Self::initialize) to load the configured list.
    #[must_use]
    pub fn new(
        source: Arc<dyn InitialStateSource>,
        persister: Arc<dyn ServerListPersister>,
        options: EditorOptions,
    ) -> Self {
        let servers = ServerList::placeholder_only(options.default_server.clone());
        let (state, _) = watch::channel(SaveState::default());
        Self {
            inner: Arc::new(EditorInner {
                options,
                source,
                persister,
                servers: Mutex::new(servers),
                state,
                save_timer: DebounceTimer::new(),
                saved_timer: DebounceTimer::new(),
                save_lock: tokio::sync::Mutex::new(()),
                in_flight: AtomicUsize::new(0),
                save_generation: AtomicU64::new(0),
            }),
        }
    }

    pub fn options(&self) -> &EditorOptions {
        &self.inner.options
    }

    /// Load the list from the initial-state source.
    ///
    /// No validation is applied to the supplied strings. When the source has
    /// nothing configured the list holds one placeholder row. When the source
    /// fails the list is populated the same way and
    /// `CoreError::InitialStateUnavailable` is returned so the caller can warn;
    /// the editor stays usable either way.
    pub async fn initialize(&self) -> CoreResult<()> {
        let key = &self.inner.options.key;
        let (servers, outcome) = match self.inner.source.initial_servers(key).await {
            Ok(Some(servers)) => (servers, Ok(())),
            Ok(None) => {
                log::debug!("No initial state for {key}, starting from placeholder");
                (Vec::new(), Ok(()))
            }
            Err(e) => {
                log::warn!("Failed to read initial state for {key}: {e}");
                let err = if matches!(e, CoreError::InitialStateUnavailable(_)) {
                    e
                } else {
                    CoreError::InitialStateUnavailable(e.to_string())
                };
                (Vec::new(), Err(err))
            }
        };

        let count = {
            let mut list = self.inner.lock_servers();
            list.replace(servers);
            list.len()
        };
        log::info!("STUN server editor initialized with {count} row(s)");
        outcome
    }

    /// Snapshot of the current rows
    pub fn servers(&self) -> Vec<String> {
        self.inner.lock_servers().to_vec()
    }

    pub fn len(&self) -> usize {
        self.inner.lock_servers().len()
    }

    /// Always `false`; the list keeps at least one row.
    pub fn is_empty(&self) -> bool {
        self.inner.lock_servers().is_empty()
    }

    pub fn get(&self, index: usize) -> Option<String> {
        self.inner.lock_servers().get(index).map(str::to_string)
    }

    /// Append an empty row and return its index. Nothing is saved until the
    /// row is edited.
    pub fn add_row(&self) -> usize {
        self.inner.lock_servers().push_empty()
    }

    /// Remove the row at `index` and schedule a save.
    ///
    /// Removing the last row leaves the default server in its place. An
    /// out-of-range index fails with `IndexOutOfRange` and changes nothing.
    pub fn remove_row(&self, index: usize) -> CoreResult<()> {
        let removed = self.inner.lock_servers().remove(index)?;
        log::debug!("Removed STUN server row {index} ({removed})");
        self.schedule_save();
        Ok(())
    }

    /// Replace the text of the row at `index` and schedule a save.
    pub fn edit_row(&self, index: usize, value: impl Into<String>) -> CoreResult<()> {
        self.inner.lock_servers().set(index, value.into())?;
        self.schedule_save();
        Ok(())
    }

    /// (Re)start the debounce window. When it elapses without another edit,
    /// the list as it is at that moment gets saved.
    pub fn schedule_save(&self) {
        let inner = &self.inner;
        inner.saved_timer.cancel();
        let mut generation = 0;
        inner.state.send_modify(|state| {
            generation = inner.save_generation.fetch_add(1, Ordering::SeqCst) + 1;
            state.pending = true;
            state.saved = false;
            state.error = None;
        });

        let weak = Arc::downgrade(inner);
        inner.save_timer.schedule(inner.options.save_debounce, move || {
            fire_save(&weak, generation);
        });
    }

    /// Save the current rows now.
    pub async fn save_all(&self) -> CoreResult<()> {
        self.inner.begin_save();
        EditorInner::persist_current(&self.inner).await
    }

    /// Show the saved checkmark and hide it again after the display duration.
    pub fn show_saved_indicator(&self) {
        EditorInner::show_saved_indicator(&self.inner);
    }

    /// Save a pending edit immediately instead of waiting for the debounce
    /// window, then wait for every in-flight save to finish.
    pub async fn flush(&self) -> CoreResult<()> {
        if self.inner.save_timer.cancel() {
            self.inner.state.send_modify(|state| {
                self.inner.save_generation.fetch_add(1, Ordering::SeqCst);
                state.pending = false;
            });
            self.save_all().await?;
        }
        loop {
            {
                let _idle = self.inner.save_lock.lock().await;
                if self.inner.in_flight.load(Ordering::SeqCst) == 0 {
                    return Ok(());
                }
            }
            tokio::task::yield_now().await;
        }
    }

    /// Current save feedback
    pub fn save_state(&self) -> SaveState {
        self.inner.state.borrow().clone()
    }

    /// Receiver notified on every save state change
    pub fn subscribe(&self) -> watch::Receiver<SaveState> {
        self.inner.state.subscribe()
    }
}

/// Debounce window elapsed: hand the save off to its own task.
///
/// A callback that was already running when a newer edit re-armed the timer
/// finds its generation outdated and leaves the save to the newer timer.
fn fire_save(weak: &Weak<EditorInner>, generation: u64) {
    let Some(inner) = weak.upgrade() else {
        return;
    };
    // checked under the watch lock so a concurrent edit cannot slip in between
    let current = inner.state.send_if_modified(|state| {
        if inner.save_generation.load(Ordering::SeqCst) != generation {
            return false;
        }
        state.pending = false;
        true
    });
    if !current {
        log::trace!("Skipping superseded save (generation {generation})");
        return;
    }
    inner.begin_save();
    tokio::spawn(async move {
        // Failures are already logged and reflected in the save state.
        let _ = EditorInner::persist_current(&inner).await;
    });
}

impl EditorInner {
    fn lock_servers(&self) -> MutexGuard<'_, ServerList> {
        self.servers.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Count a save as in flight before its task gets to run.
    fn begin_save(&self) {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        self.state.send_modify(|state| state.loading = true);
    }

    /// Must be preceded by exactly one `begin_save`.
    ///
    /// The rows are read once the save lock is held, so whichever save runs
    /// last writes the latest list.
    async fn persist_current(this: &Arc<Self>) -> CoreResult<()> {
        let (snapshot, result) = {
            let _serial = this.save_lock.lock().await;
            let snapshot = this.lock_servers().to_vec();
            let result = this.persister.persist(&snapshot).await;
            (snapshot, result)
        };

        let remaining = this.in_flight.fetch_sub(1, Ordering::SeqCst) - 1;

        match result {
            Ok(()) => {
                log::info!("Saved {} STUN server(s)", snapshot.len());
                let mut show_saved = false;
                this.state.send_modify(|state| {
                    state.loading = remaining > 0;
                    state.error = None;
                    state.last_saved_at = Some(chrono::Utc::now());
                    show_saved = remaining == 0 && !state.pending;
                });
                if show_saved {
                    Self::show_saved_indicator(this);
                }
                Ok(())
            }
            Err(e) => {
                if e.is_expected() {
                    log::warn!("Failed to save STUN servers: {e}");
                } else {
                    log::error!("Failed to save STUN servers: {e}");
                }
                let message = e.to_string();
                this.state.send_modify(|state| {
                    state.loading = remaining > 0;
                    state.saved = false;
                    state.error = Some(message.clone());
                });
                Err(CoreError::PersistenceFailure(message))
            }
        }
    }

    fn show_saved_indicator(this: &Arc<Self>) {
        this.state.send_modify(|state| state.saved = true);

        let weak = Arc::downgrade(this);
        this.saved_timer.schedule(this.options.saved_display, move || {
            if let Some(inner) = weak.upgrade() {
                inner.state.send_modify(|state| state.saved = false);
            }
        });
    }
}
