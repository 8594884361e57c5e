//! The puzzle session state machine.

use std::{
    mem,
    time::{Duration, Instant},
};

use derive_more::{Display, Error, From, IsVariant};
use log::debug;
use tango_core::{Grid, HintSet, Position, PositionSet, RoleGrid, Symbol, find_violations};
use tango_generator::{Difficulty, GenerateError, GeneratedPuzzle};
use tango_solver::{SolveError, Solver};

use crate::{ScorePolicy, StandardScoring};

/// An error returned by session operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum SessionError {
    /// No puzzle has been delivered to the session yet.
    #[display("the puzzle is still loading")]
    StillLoading,
    /// The puzzle has already been completed.
    #[display("the puzzle is already completed")]
    AlreadyCompleted,
    /// The solution has been revealed and the board is frozen.
    #[display("the solution has been revealed")]
    SolutionRevealed,
    /// The targeted cell is part of the problem and cannot be modified.
    #[display("cannot modify a fixed cell")]
    CellLocked,
    /// The fixed cells admit no completion.
    #[from]
    Unsolvable(SolveError),
}

/// Identifies one generation request.
///
/// Each call to [`Session::request_generation`] hands out a fresh ticket and
/// invalidates all earlier ones, so results from abandoned requests can be
/// told apart from the one the session is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GenerationTicket(u64);

/// Tells the caller whether a delivered generation result was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum Receipt {
    /// The result belonged to the current request and was applied.
    Accepted,
    /// The result belonged to a superseded request and was dropped.
    Superseded,
}

/// The externally observable phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum SessionPhase {
    /// Waiting for a puzzle to be generated.
    Loading,
    /// A puzzle is on the board and accepting input.
    InProgress,
    /// The puzzle has been solved; the board is frozen.
    Completed,
}

/// The record of a completed puzzle: the frozen solve time and the score it
/// earned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    /// Time from puzzle delivery to the completing move.
    pub elapsed: Duration,
    /// The score awarded by the session's [`ScorePolicy`].
    pub score: u32,
}

/// The result of a successful cell mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MutationOutcome {
    /// Every cell participating in a rule or hint violation after the move.
    pub violations: PositionSet,
    /// Present exactly once, on the move that completes the puzzle.
    pub completion: Option<Completion>,
}

#[derive(Debug)]
struct Play {
    grid: Grid,
    hints: HintSet,
    roles: RoleGrid,
    started: Instant,
    revealed: bool,
}

impl Play {
    fn new(puzzle: &GeneratedPuzzle) -> Self {
        Self {
            grid: puzzle.problem,
            hints: puzzle.hints,
            roles: RoleGrid::from_problem(&puzzle.problem),
            started: Instant::now(),
            revealed: false,
        }
    }
}

#[derive(Debug)]
enum State {
    Loading { pending: Option<GenerationTicket> },
    InProgress(Play),
    Completed { play: Play, completion: Completion },
}

/// A Tango play session.
///
/// Tracks one puzzle from generation request through play to completion.
/// Puzzle generation is asynchronous from the session's point of view: the
/// session hands out a [`GenerationTicket`], the caller runs the generator
/// however it likes, and delivers the result back. A newer request supersedes
/// older ones, so a slow generation can never clobber a fresher puzzle.
///
/// Fixed cells are locked for the lifetime of the session. Every mutation
/// reports the full set of violated cells, and the move that fills the last
/// cell of a violation-free board completes the session, freezing the clock
/// and awarding a score.
///
/// # Examples
///
/// ```
/// use tango_game::{Receipt, Session};
/// use tango_generator::{Difficulty, PuzzleGenerator};
///
/// let mut session = Session::new(Difficulty::Easy);
/// let ticket = session.request_generation()?;
///
/// let mut generator = PuzzleGenerator::with_seed(42);
/// let puzzle = generator.generate(Difficulty::Easy)?;
/// assert_eq!(session.receive_puzzle(ticket, puzzle), Receipt::Accepted);
/// assert!(session.phase().is_in_progress());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct Session {
    difficulty: Difficulty,
    policy: Box<dyn ScorePolicy>,
    state: State,
    next_ticket: u64,
    last_error: Option<GenerateError>,
}

impl Session {
    /// Creates a session awaiting its first puzzle, scored with
    /// [`StandardScoring`].
    #[must_use]
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_policy(difficulty, Box::new(StandardScoring))
    }

    /// Creates a session with a custom scoring policy.
    #[must_use]
    pub fn with_policy(difficulty: Difficulty, policy: Box<dyn ScorePolicy>) -> Self {
        Self {
            difficulty,
            policy,
            state: State::Loading { pending: None },
            next_ticket: 0,
            last_error: None,
        }
    }

    /// Creates a session that starts in progress with an already generated
    /// puzzle, skipping the loading phase.
    #[must_use]
    pub fn from_puzzle(difficulty: Difficulty, puzzle: &GeneratedPuzzle) -> Self {
        let mut session = Self::new(difficulty);
        session.state = State::InProgress(Play::new(puzzle));
        session
    }

    /// Returns the difficulty this session was created for.
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Returns the session's current phase.
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        match &self.state {
            State::Loading { .. } => SessionPhase::Loading,
            State::InProgress(_) => SessionPhase::InProgress,
            State::Completed { .. } => SessionPhase::Completed,
        }
    }

    /// Requests a new puzzle, superseding any outstanding request and
    /// discarding the board.
    ///
    /// The session moves to [`SessionPhase::Loading`] and stays there until
    /// the returned ticket is redeemed with [`Session::receive_puzzle`].
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::AlreadyCompleted`] on a completed session:
    /// completion is terminal, and a new game belongs to a new session.
    pub fn request_generation(&mut self) -> Result<GenerationTicket, SessionError> {
        if matches!(self.state, State::Completed { .. }) {
            return Err(SessionError::AlreadyCompleted);
        }
        let ticket = GenerationTicket(self.next_ticket);
        self.next_ticket += 1;
        debug!("generation requested: {ticket:?}");
        self.state = State::Loading {
            pending: Some(ticket),
        };
        self.last_error = None;
        Ok(ticket)
    }

    /// Delivers a generated puzzle for `ticket`.
    ///
    /// If the ticket is the one currently pending, the puzzle goes on the
    /// board, the clock starts, and the session moves to
    /// [`SessionPhase::InProgress`]. Results for superseded tickets are
    /// dropped without touching the session.
    pub fn receive_puzzle(&mut self, ticket: GenerationTicket, puzzle: GeneratedPuzzle) -> Receipt {
        match self.state {
            State::Loading {
                pending: Some(expected),
            } if expected == ticket => {}
            _ => return Receipt::Superseded,
        }
        debug!(
            "puzzle accepted for {ticket:?}: {} givens, {} hints",
            puzzle.problem.filled_count(),
            puzzle.hints.len(),
        );
        self.state = State::InProgress(Play::new(&puzzle));
        Receipt::Accepted
    }

    /// Reports that generation for `ticket` failed.
    ///
    /// The session stays in [`SessionPhase::Loading`]; the error is kept for
    /// [`Session::last_generation_error`] and the caller is expected to
    /// retry with a fresh request. Failures of superseded tickets are
    /// dropped.
    pub fn generation_failed(&mut self, ticket: GenerationTicket, error: GenerateError) -> Receipt {
        match self.state {
            State::Loading {
                pending: Some(expected),
            } if expected == ticket => {}
            _ => return Receipt::Superseded,
        }
        debug!("generation failed for {ticket:?}: {error}");
        self.state = State::Loading { pending: None };
        self.last_error = Some(error);
        Receipt::Accepted
    }

    /// Returns the error from the most recent failed generation, if any.
    ///
    /// Cleared by the next [`Session::request_generation`].
    #[must_use]
    pub const fn last_generation_error(&self) -> Option<&GenerateError> {
        self.last_error.as_ref()
    }

    /// Returns the current board, if a puzzle has been delivered.
    #[must_use]
    pub fn grid(&self) -> Option<&Grid> {
        self.play().map(|play| &play.grid)
    }

    /// Returns the hint set of the current puzzle, if one has been
    /// delivered.
    #[must_use]
    pub fn hints(&self) -> Option<&HintSet> {
        self.play().map(|play| &play.hints)
    }

    /// Returns the fixed/free role of every cell, if a puzzle has been
    /// delivered.
    #[must_use]
    pub fn roles(&self) -> Option<&RoleGrid> {
        self.play().map(|play| &play.roles)
    }

    /// Returns every cell currently participating in a violation.
    ///
    /// Empty while loading and on a solved board.
    #[must_use]
    pub fn violations(&self) -> PositionSet {
        self.play()
            .map_or(PositionSet::EMPTY, |play| {
                find_violations(&play.grid, &play.hints)
            })
    }

    /// Returns the time played so far, frozen at the completing move once
    /// the session completes.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        match &self.state {
            State::Loading { .. } => Duration::ZERO,
            State::InProgress(play) => play.started.elapsed(),
            State::Completed { completion, .. } => completion.elapsed,
        }
    }

    /// Returns the completion record once the puzzle is solved.
    #[must_use]
    pub const fn completion(&self) -> Option<Completion> {
        match &self.state {
            State::Completed { completion, .. } => Some(*completion),
            State::Loading { .. } | State::InProgress(_) => None,
        }
    }

    /// Returns `true` if the solution has been revealed on the board.
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.play().is_some_and(|play| play.revealed)
    }

    /// Sets or clears a free cell.
    ///
    /// Returns the full violation set after the move. The move that fills
    /// the last cell of a violation-free board completes the session; the
    /// returned [`MutationOutcome::completion`] carries the frozen time and
    /// score exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::StillLoading`] before a puzzle is delivered,
    /// [`SessionError::AlreadyCompleted`] after the puzzle is solved,
    /// [`SessionError::SolutionRevealed`] after the solution has been shown,
    /// and [`SessionError::CellLocked`] for fixed cells.
    pub fn set_cell(
        &mut self,
        pos: Position,
        value: Option<Symbol>,
    ) -> Result<MutationOutcome, SessionError> {
        let (violations, solved_after) = {
            let play = self.active_play_mut()?;
            if play.roles.is_fixed(pos) {
                return Err(SessionError::CellLocked);
            }
            play.grid.set(pos, value);
            let violations = find_violations(&play.grid, &play.hints);
            let solved = violations.is_empty() && play.grid.is_full();
            (violations, solved.then(|| play.started.elapsed()))
        };

        if let Some(elapsed) = solved_after {
            let score = self.policy.score(elapsed, self.difficulty);
            let completion = Completion { elapsed, score };
            debug!(
                "puzzle completed in {:.1}s for {score} points",
                elapsed.as_secs_f64(),
            );
            self.complete(completion);
            return Ok(MutationOutcome {
                violations,
                completion: Some(completion),
            });
        }
        Ok(MutationOutcome {
            violations,
            completion: None,
        })
    }

    /// Clears a free cell.
    ///
    /// # Errors
    ///
    /// Same as [`Session::set_cell`].
    pub fn clear_cell(&mut self, pos: Position) -> Result<MutationOutcome, SessionError> {
        self.set_cell(pos, None)
    }

    /// Cycles a free cell through empty, sun, moon, and back to empty.
    ///
    /// # Errors
    ///
    /// Same as [`Session::set_cell`].
    pub fn toggle_cell(&mut self, pos: Position) -> Result<MutationOutcome, SessionError> {
        let current = self.active_play()?.grid.get(pos);
        let next = match current {
            None => Some(Symbol::Sun),
            Some(Symbol::Sun) => Some(Symbol::Moon),
            Some(Symbol::Moon) => None,
        };
        self.set_cell(pos, next)
    }

    /// Fills the board with a solution derived from the fixed cells alone,
    /// discarding the player's entries.
    ///
    /// The session stays in [`SessionPhase::InProgress`] but the board is
    /// frozen: revealing the solution never completes the puzzle or awards a
    /// score, and further mutations are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::StillLoading`] or
    /// [`SessionError::AlreadyCompleted`] outside of play, and
    /// [`SessionError::Unsolvable`] if the solver finds no completion of the
    /// fixed cells.
    pub fn show_solution(&mut self, solver: &Solver) -> Result<(), SessionError> {
        let play = self.active_play_mut()?;
        let mut fixed = Grid::new();
        for (pos, symbol) in play.grid.filled_cells() {
            if play.roles.is_fixed(pos) {
                fixed.set(pos, Some(symbol));
            }
        }
        let solution = solver.solve(&fixed, &play.hints)?;
        debug!("solution revealed");
        play.grid = solution;
        play.revealed = true;
        Ok(())
    }

    fn play(&self) -> Option<&Play> {
        match &self.state {
            State::InProgress(play) | State::Completed { play, .. } => Some(play),
            State::Loading { .. } => None,
        }
    }

    fn active_play(&self) -> Result<&Play, SessionError> {
        match &self.state {
            State::Loading { .. } => Err(SessionError::StillLoading),
            State::Completed { .. } => Err(SessionError::AlreadyCompleted),
            State::InProgress(play) if play.revealed => Err(SessionError::SolutionRevealed),
            State::InProgress(play) => Ok(play),
        }
    }

    fn active_play_mut(&mut self) -> Result<&mut Play, SessionError> {
        match &mut self.state {
            State::Loading { .. } => Err(SessionError::StillLoading),
            State::Completed { .. } => Err(SessionError::AlreadyCompleted),
            State::InProgress(play) if play.revealed => Err(SessionError::SolutionRevealed),
            State::InProgress(play) => Ok(play),
        }
    }

    fn complete(&mut self, completion: Completion) {
        let state = mem::replace(&mut self.state, State::Loading { pending: None });
        if let State::InProgress(play) = state {
            self.state = State::Completed { play, completion };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLUTION: &str = "BBABAAAABBABAABABBBBABAAABAABBBABABA";

    fn solution_grid() -> Grid {
        SOLUTION.parse().unwrap()
    }

    /// A one-cell puzzle: the whole solution minus the top-left cell.
    fn one_cell_puzzle() -> GeneratedPuzzle {
        let solution = solution_grid();
        let mut problem = solution;
        problem.set(Position::new(0, 0), None);
        GeneratedPuzzle {
            problem,
            hints: HintSet::new(),
            solution,
            seed: 0,
        }
    }

    fn in_progress_session() -> Session {
        Session::from_puzzle(Difficulty::Medium, &one_cell_puzzle())
    }

    #[test]
    fn test_new_session_is_loading() {
        let session = Session::new(Difficulty::Easy);
        assert!(session.phase().is_loading());
        assert!(session.grid().is_none());
        assert!(session.completion().is_none());
        assert!(session.violations().is_empty());
        assert_eq!(session.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_receive_puzzle_starts_play() {
        let mut session = Session::new(Difficulty::Medium);
        let ticket = session.request_generation().unwrap();
        let receipt = session.receive_puzzle(ticket, one_cell_puzzle());
        assert_eq!(receipt, Receipt::Accepted);
        assert!(session.phase().is_in_progress());
        assert_eq!(session.grid(), Some(&one_cell_puzzle().problem));
        assert!(session.roles().unwrap().is_fixed(Position::new(0, 1)));
        assert!(!session.roles().unwrap().is_fixed(Position::new(0, 0)));
    }

    #[test]
    fn test_stale_ticket_is_superseded() {
        let mut session = Session::new(Difficulty::Medium);
        let stale = session.request_generation().unwrap();
        let current = session.request_generation().unwrap();

        assert_eq!(
            session.receive_puzzle(stale, one_cell_puzzle()),
            Receipt::Superseded
        );
        assert!(session.phase().is_loading());

        assert_eq!(
            session.receive_puzzle(current, one_cell_puzzle()),
            Receipt::Accepted
        );
        assert!(session.phase().is_in_progress());
    }

    #[test]
    fn test_result_after_new_request_is_superseded() {
        let mut session = Session::new(Difficulty::Medium);
        let ticket = session.request_generation().unwrap();
        assert_eq!(
            session.receive_puzzle(ticket, one_cell_puzzle()),
            Receipt::Accepted
        );

        // A fresh request discards the board and invalidates the old ticket.
        let _new_ticket = session.request_generation().unwrap();
        assert!(session.phase().is_loading());
        assert_eq!(
            session.receive_puzzle(ticket, one_cell_puzzle()),
            Receipt::Superseded
        );
    }

    #[test]
    fn test_generation_failure_keeps_loading() {
        let mut session = Session::new(Difficulty::Hard);
        let ticket = session.request_generation().unwrap();
        let error = GenerateError { attempts: 1000 };

        assert_eq!(session.generation_failed(ticket, error), Receipt::Accepted);
        assert!(session.phase().is_loading());
        assert_eq!(session.last_generation_error(), Some(&error));

        // Retrying clears the stored error.
        let retry = session.request_generation().unwrap();
        assert!(session.last_generation_error().is_none());
        assert_eq!(
            session.receive_puzzle(retry, one_cell_puzzle()),
            Receipt::Accepted
        );
    }

    #[test]
    fn test_stale_failure_is_dropped() {
        let mut session = Session::new(Difficulty::Hard);
        let stale = session.request_generation().unwrap();
        let _current = session.request_generation().unwrap();
        let error = GenerateError { attempts: 1000 };
        assert_eq!(session.generation_failed(stale, error), Receipt::Superseded);
        assert!(session.last_generation_error().is_none());
    }

    #[test]
    fn test_mutation_while_loading_is_rejected() {
        let mut session = Session::new(Difficulty::Easy);
        assert_eq!(
            session.set_cell(Position::new(0, 0), Some(Symbol::Sun)),
            Err(SessionError::StillLoading)
        );
    }

    #[test]
    fn test_fixed_cell_is_locked() {
        let mut session = in_progress_session();
        assert_eq!(
            session.set_cell(Position::new(3, 3), Some(Symbol::Sun)),
            Err(SessionError::CellLocked)
        );
        assert_eq!(
            session.clear_cell(Position::new(3, 3)),
            Err(SessionError::CellLocked)
        );
        assert_eq!(
            session.toggle_cell(Position::new(3, 3)),
            Err(SessionError::CellLocked)
        );
    }

    #[test]
    fn test_toggle_cycles_through_symbols() {
        let mut session = in_progress_session();
        let pos = Position::new(0, 0);

        session.toggle_cell(pos).unwrap();
        assert_eq!(session.grid().unwrap().get(pos), Some(Symbol::Sun));
        session.toggle_cell(pos).unwrap();
        assert_eq!(session.grid().unwrap().get(pos), Some(Symbol::Moon));

        // The third toggle would clear the cell, but Moon at (0, 0) happens
        // to solve this puzzle, so the session completes first.
        assert!(session.phase().is_completed());
    }

    #[test]
    fn test_toggle_clears_on_third_press() {
        let solution = solution_grid();
        let mut problem = solution;
        problem.set(Position::new(0, 0), None);
        problem.set(Position::new(5, 5), None);
        let puzzle = GeneratedPuzzle {
            problem,
            hints: HintSet::new(),
            solution,
            seed: 0,
        };
        let mut session = Session::from_puzzle(Difficulty::Easy, &puzzle);
        let pos = Position::new(0, 0);

        session.toggle_cell(pos).unwrap();
        session.toggle_cell(pos).unwrap();
        session.toggle_cell(pos).unwrap();
        assert_eq!(session.grid().unwrap().get(pos), None);
    }

    #[test]
    fn test_wrong_symbol_reports_violations() {
        let mut session = in_progress_session();
        let pos = Position::new(0, 0);

        // The solution has Moon here; Sun breaks the row count.
        let outcome = session.set_cell(pos, Some(Symbol::Sun)).unwrap();
        assert!(!outcome.violations.is_empty());
        assert!(outcome.violations.contains(pos));
        assert!(outcome.completion.is_none());
        assert!(session.phase().is_in_progress());

        // Clearing the cell resolves the violation.
        let outcome = session.clear_cell(pos).unwrap();
        assert!(outcome.violations.is_empty());
    }

    #[test]
    fn test_correct_move_completes_session() {
        let mut session = in_progress_session();
        let outcome = session
            .set_cell(Position::new(0, 0), Some(Symbol::Moon))
            .unwrap();

        assert!(outcome.violations.is_empty());
        let completion = outcome.completion.unwrap();
        assert!(session.phase().is_completed());
        assert_eq!(session.completion(), Some(completion));
        // Instant completion at medium difficulty scores the full base
        // times 1.5.
        assert_eq!(completion.score, 1500);
        assert_eq!(session.elapsed(), completion.elapsed);
    }

    #[test]
    fn test_completed_session_rejects_mutation() {
        let mut session = in_progress_session();
        session
            .set_cell(Position::new(0, 0), Some(Symbol::Moon))
            .unwrap();
        assert_eq!(
            session.set_cell(Position::new(0, 0), None),
            Err(SessionError::AlreadyCompleted)
        );
    }

    #[test]
    fn test_completed_session_stays_completed() {
        let mut session = in_progress_session();
        let outcome = session
            .set_cell(Position::new(0, 0), Some(Symbol::Moon))
            .unwrap();
        let completion = outcome.completion.unwrap();

        // Completion is terminal: a new game needs a new session.
        assert_eq!(
            session.request_generation(),
            Err(SessionError::AlreadyCompleted)
        );
        assert!(session.phase().is_completed());
        assert_eq!(session.completion(), Some(completion));
    }

    #[test]
    fn test_completion_fires_only_once() {
        let mut session = in_progress_session();
        let outcome = session
            .set_cell(Position::new(0, 0), Some(Symbol::Moon))
            .unwrap();
        assert!(outcome.completion.is_some());

        // The record stays readable, but no further outcome carries it.
        assert!(session.completion().is_some());
        assert!(session.violations().is_empty());
    }

    #[test]
    fn test_custom_score_policy() {
        #[derive(Debug)]
        struct Flat;
        impl ScorePolicy for Flat {
            fn score(&self, _elapsed: Duration, _difficulty: Difficulty) -> u32 {
                7
            }
        }

        let mut session = Session::with_policy(Difficulty::Easy, Box::new(Flat));
        let ticket = session.request_generation().unwrap();
        session.receive_puzzle(ticket, one_cell_puzzle());
        let outcome = session
            .set_cell(Position::new(0, 0), Some(Symbol::Moon))
            .unwrap();
        assert_eq!(outcome.completion.unwrap().score, 7);
    }

    #[test]
    fn test_show_solution_fills_board_without_completing() {
        let mut session = in_progress_session();
        // A wrong player entry is discarded by the reveal.
        session
            .set_cell(Position::new(0, 0), Some(Symbol::Sun))
            .unwrap();

        let solver = Solver::new();
        session.show_solution(&solver).unwrap();

        assert!(session.phase().is_in_progress());
        assert!(session.is_revealed());
        assert!(session.completion().is_none());
        assert!(session.grid().unwrap().is_full());
        assert!(session.violations().is_empty());

        // The board is frozen after a reveal.
        assert_eq!(
            session.set_cell(Position::new(0, 0), None),
            Err(SessionError::SolutionRevealed)
        );
        assert_eq!(
            session.toggle_cell(Position::new(0, 0)),
            Err(SessionError::SolutionRevealed)
        );
    }

    #[test]
    fn test_show_solution_outside_play_is_rejected() {
        let solver = Solver::new();

        let mut loading = Session::new(Difficulty::Easy);
        assert_eq!(
            loading.show_solution(&solver),
            Err(SessionError::StillLoading)
        );

        let mut completed = in_progress_session();
        completed
            .set_cell(Position::new(0, 0), Some(Symbol::Moon))
            .unwrap();
        assert_eq!(
            completed.show_solution(&solver),
            Err(SessionError::AlreadyCompleted)
        );
    }

    #[test]
    fn test_session_with_generated_puzzle() {
        let mut generator = tango_generator::PuzzleGenerator::with_seed(13);
        let puzzle = generator.generate(Difficulty::Easy).unwrap();
        let mut session = Session::from_puzzle(Difficulty::Easy, &puzzle);

        // Playing the stored solution into the free cells solves the
        // puzzle.
        let mut last = None;
        for (pos, symbol) in puzzle.solution.filled_cells() {
            if !session.roles().unwrap().is_fixed(pos) {
                last = session.set_cell(pos, Some(symbol)).unwrap().completion;
            }
        }
        assert!(last.is_some());
        assert!(session.phase().is_completed());
    }
}
