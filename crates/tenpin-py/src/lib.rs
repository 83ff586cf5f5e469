//! # Tenpin Python Bindings
//!
//! PyO3 bindings exposing the bowling engine to Python score-sheet UIs.
//!
//! ## Usage
//!
//! ```python
//! import tenpin
//!
//! tenpin.init_logging("debug")
//!
//! game = tenpin.PyGame(max_players=6)
//! game.add_player("Ada")
//! game.add_player("Grace")
//! game.start_game()
//!
//! # Only clickable slots should open a pin picker
//! if game.is_clickable(0, 0, 0):
//!     print(game.available_scores(0, 0, 0))
//!
//! outcome = game.record_roll(0, 0, 0, 10)
//! print(outcome.mark, outcome.total)
//!
//! # Running totals as a numpy array
//! print(game.frame_scores(0))
//! ```

use numpy::{PyArray1, ToPyArray};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use tenpin_core::{Game, GameConfig, GameError, GamePhase, Player, RollOutcome, Slot};

/// Convert an engine error to a Python `ValueError`.
fn game_err(err: GameError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Convert any displayable error to a Python `ValueError`.
fn value_err(err: impl std::fmt::Display) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Install a stderr log subscriber at the given level.
///
/// Returns `False` if a subscriber was already installed.
///
/// # Example
///
/// ```python
/// tenpin.init_logging("warn")
/// ```
#[pyfunction]
#[pyo3(signature = (level="info"))]
fn init_logging(level: &str) -> PyResult<bool> {
    let level: tracing::Level = level.parse().map_err(value_err)?;
    let installed = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .is_ok();
    if installed {
        tracing::info!(%level, "logging initialised");
    }
    Ok(installed)
}

/// Game wrapper for Python.
#[pyclass]
pub struct PyGame {
    inner: Game,
}

#[pymethods]
impl PyGame {
    /// Create a new game in setup.
    #[new]
    #[pyo3(signature = (max_players=None, record_events=true))]
    fn new(max_players: Option<usize>, record_events: bool) -> PyResult<Self> {
        let config = GameConfig {
            max_players,
            record_events,
        };
        config.validate().map_err(value_err)?;
        Ok(Self {
            inner: Game::with_config(config),
        })
    }

    /// Create a new game from a JSON config string.
    ///
    /// ```python
    /// game = PyGame.from_config_json('{"max_players": 4}')
    /// ```
    #[staticmethod]
    fn from_config_json(text: &str) -> PyResult<Self> {
        let config = GameConfig::from_json(text).map_err(value_err)?;
        Ok(Self {
            inner: Game::with_config(config),
        })
    }

    /// Add a player and return their roster index.
    fn add_player(&mut self, name: &str) -> PyResult<usize> {
        self.inner.add_player(name).map_err(game_err)
    }

    /// Start play at the first player's first roll.
    fn start_game(&mut self) -> PyResult<()> {
        self.inner.start_game().map_err(game_err)
    }

    /// Whether the slot may currently be opened for input.
    fn is_clickable(&self, player: usize, frame: usize, roll: usize) -> bool {
        self.inner.is_clickable(Slot::new(player, frame, roll))
    }

    /// Legal pin counts for the slot, ascending.
    fn available_scores(&self, player: usize, frame: usize, roll: usize) -> Vec<u8> {
        self.inner.available_scores(Slot::new(player, frame, roll))
    }

    /// Record a roll at the cursor slot.
    ///
    /// Raises `ValueError` if the slot is not the cursor or the pin count is
    /// not legal there.
    fn record_roll(
        &mut self,
        player: usize,
        frame: usize,
        roll: usize,
        pins: u8,
    ) -> PyResult<PyRollOutcome> {
        self.inner
            .record_roll(Slot::new(player, frame, roll), pins)
            .map(PyRollOutcome::from)
            .map_err(game_err)
    }

    /// Clear every frame, keeping the roster.
    fn reset_game(&mut self) -> PyResult<()> {
        self.inner.reset_game().map_err(game_err)
    }

    /// Clear the roster and return to setup.
    fn return_to_setup(&mut self) {
        self.inner.return_to_setup();
    }

    /// Roster in turn order.
    #[getter]
    fn players(&self) -> Vec<PyPlayer> {
        self.inner.players().iter().map(PyPlayer::from).collect()
    }

    /// Cursor slot as `(player, frame, roll)`, or `None` outside play.
    #[getter]
    fn cursor(&self) -> Option<(usize, usize, usize)> {
        self.inner
            .cursor()
            .active()
            .map(|slot| (slot.player, slot.frame, slot.roll))
    }

    /// Lifecycle phase: `"setup"`, `"in_progress"`, or `"over"`.
    #[getter]
    fn phase(&self) -> &'static str {
        match self.inner.phase() {
            GamePhase::Setup => "setup",
            GamePhase::InProgress => "in_progress",
            GamePhase::Over => "over",
        }
    }

    /// Whether every player has finished.
    #[getter]
    fn game_over(&self) -> bool {
        self.inner.is_game_over()
    }

    /// Winner index as tracked during play.
    #[getter]
    fn winner(&self) -> Option<usize> {
        self.inner.winner()
    }

    /// Roster indices by descending total.
    #[getter]
    fn leaderboard(&self) -> Vec<usize> {
        self.inner.leaderboard()
    }

    /// Running totals for one player as a numpy array of shape `(10,)`.
    fn frame_scores<'py>(
        &self,
        py: Python<'py>,
        player: usize,
    ) -> PyResult<Bound<'py, PyArray1<u32>>> {
        let player = self
            .inner
            .player(player)
            .ok_or_else(|| PyValueError::new_err(format!("no player at index {player}")))?;
        Ok(player.running_scores().as_slice().to_pyarray(py))
    }

    /// Score-sheet marks for one player, one list per frame.
    fn marks(&self, player: usize) -> PyResult<Vec<Vec<String>>> {
        let player = self
            .inner
            .player(player)
            .ok_or_else(|| PyValueError::new_err(format!("no player at index {player}")))?;
        Ok(player.frames().iter().map(|frame| frame.marks()).collect())
    }

    /// Full read-only view as a JSON string.
    fn snapshot_json(&self) -> PyResult<String> {
        self.inner.snapshot().to_json().map_err(value_err)
    }

    /// Drain the event journal as a JSON array string.
    fn take_events_json(&mut self) -> PyResult<String> {
        serde_json::to_string(&self.inner.take_events()).map_err(value_err)
    }

    fn __repr__(&self) -> String {
        format!(
            "Game(players={}, cursor={})",
            self.inner.players().len(),
            self.inner.cursor()
        )
    }
}

/// Read-only copy of a player's sheet.
#[pyclass(frozen, get_all)]
#[derive(Clone)]
pub struct PyPlayer {
    /// Player name.
    name: String,
    /// Total score.
    total_score: u32,
    /// Display marks per frame.
    marks: Vec<Vec<String>>,
    /// Running total through each frame.
    running_scores: Vec<u32>,
}

impl From<&Player> for PyPlayer {
    fn from(player: &Player) -> Self {
        Self {
            name: player.name().to_string(),
            total_score: player.total_score(),
            marks: player.frames().iter().map(|frame| frame.marks()).collect(),
            running_scores: player.running_scores().to_vec(),
        }
    }
}

#[pymethods]
impl PyPlayer {
    fn __repr__(&self) -> String {
        format!("Player(name={:?}, total_score={})", self.name, self.total_score)
    }
}

/// Result of a recorded roll.
#[pyclass(frozen, get_all)]
#[derive(Clone)]
pub struct PyRollOutcome {
    /// Roster index of the bowler.
    player: usize,
    /// Frame index.
    frame: usize,
    /// Roll index within the frame.
    roll: usize,
    /// Score-sheet mark stored in the slot.
    mark: String,
    /// The player's total after the roll.
    total: u32,
    /// Whether this roll ended the game.
    game_over: bool,
}

impl From<RollOutcome> for PyRollOutcome {
    fn from(outcome: RollOutcome) -> Self {
        Self {
            player: outcome.slot.player,
            frame: outcome.slot.frame,
            roll: outcome.slot.roll,
            mark: outcome.roll.to_string(),
            total: outcome.total,
            game_over: outcome.game_over,
        }
    }
}

#[pymethods]
impl PyRollOutcome {
    fn __repr__(&self) -> String {
        format!(
            "RollOutcome(slot=({}, {}, {}), mark={:?}, total={})",
            self.player, self.frame, self.roll, self.mark, self.total
        )
    }
}

/// Python module definition.
#[pymodule]
fn _tenpin(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGame>()?;
    m.add_class::<PyPlayer>()?;
    m.add_class::<PyRollOutcome>()?;
    m.add_function(wrap_pyfunction!(init_logging, m)?)?;
    Ok(())
}
