//! Game session state machine
//!
//! A session owns the hidden target, the guess history, and the hint state,
//! and is the only mutation entry point for all of them. Front-ends read
//! snapshots through the accessors and never mutate state directly.

use super::error::GameError;
use super::hints::{HintGrant, HintLevel, HintState, TagReveal};
use super::picker::{PickerType, TargetPicker};
use crate::core::{Entity, Verdict};

/// Session lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    /// A guess matched the target's id
    Won,
    /// The attempt budget ran out without a match
    Lost,
}

impl Status {
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// One game against a hidden target
///
/// Created with a target drawn from the pool and empty history/hint state;
/// mutated only by [`submit`](Self::submit) and
/// [`buy_hint`](Self::buy_hint); reset wholesale by
/// [`restart`](Self::restart).
pub struct GameSession<'a> {
    pool: &'a [Entity],
    picker: PickerType,
    target: &'a Entity,
    history: Vec<&'a Entity>,
    hints: HintState,
    budget: Option<u32>,
    attempts_left: Option<u32>,
    status: Status,
}

impl<'a> GameSession<'a> {
    /// Start a session with a target drawn by the given picker
    ///
    /// `attempt_budget` of `None` selects the unlimited-attempts variant;
    /// `Some(n)` ends the session in a loss after `n` misses.
    ///
    /// # Errors
    /// Returns `EmptyPool` if the pool holds no candidates.
    pub fn new(
        pool: &'a [Entity],
        picker: PickerType,
        attempt_budget: Option<u32>,
    ) -> Result<Self, GameError> {
        let target = picker.pick(pool).ok_or(GameError::EmptyPool)?;
        Ok(Self::with_target(pool, target, picker, attempt_budget))
    }

    /// Start a session against a specific, already-chosen target
    #[must_use]
    pub fn with_target(
        pool: &'a [Entity],
        target: &'a Entity,
        picker: PickerType,
        attempt_budget: Option<u32>,
    ) -> Self {
        Self {
            pool,
            picker,
            target,
            history: Vec::new(),
            hints: HintState::default(),
            budget: attempt_budget,
            attempts_left: attempt_budget,
            status: Status::InProgress,
        }
    }

    /// Submit a resolved guess and score it against the target
    ///
    /// On success the guess is appended to history, the attempt budget (if
    /// any) is decremented, and the session transitions to `Won` on an id
    /// match or `Lost` on budget exhaustion.
    ///
    /// # Errors
    /// - `AlreadyOver` if the session has ended; no state change
    /// - `DuplicateGuess` if the entity was already submitted; no state
    ///   change
    pub fn submit(&mut self, guess: &'a Entity) -> Result<Verdict, GameError> {
        if self.status.is_over() {
            return Err(GameError::AlreadyOver);
        }
        if self.already_guessed(guess.id()) {
            return Err(GameError::DuplicateGuess);
        }

        let verdict = Verdict::score(guess, self.target);
        self.history.push(guess);

        if let Some(left) = &mut self.attempts_left {
            *left = left.saturating_sub(1);
        }

        if verdict.hit {
            self.status = Status::Won;
        } else if self.attempts_left == Some(0) {
            self.status = Status::Lost;
        }

        Ok(verdict)
    }

    /// Purchase a hint at the given level
    ///
    /// # Errors
    /// - `AlreadyOver` if the session has ended
    /// - `HintUnavailable` per the hint engine's rules; no charge
    pub fn buy_hint(&mut self, level: HintLevel) -> Result<HintGrant, GameError> {
        if self.status.is_over() {
            return Err(GameError::AlreadyOver);
        }
        self.hints.purchase(level, self.target, &self.history)
    }

    /// Draw a fresh target and reset all mutable state
    pub fn restart(&mut self) {
        // The pool was non-empty at construction, so the draw cannot fail
        if let Some(target) = self.picker.pick(self.pool) {
            self.target = target;
        }
        self.history.clear();
        self.hints = HintState::default();
        self.attempts_left = self.budget;
        self.status = Status::InProgress;
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// The hidden target; front-ends read this only after the session ends
    #[inline]
    #[must_use]
    pub const fn target(&self) -> &'a Entity {
        self.target
    }

    /// Guesses in submission order
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[&'a Entity] {
        &self.history
    }

    #[inline]
    #[must_use]
    pub const fn hints(&self) -> &HintState {
        &self.hints
    }

    /// Remaining attempts, `None` in the unlimited variant
    #[inline]
    #[must_use]
    pub const fn attempts_left(&self) -> Option<u32> {
        self.attempts_left
    }

    #[inline]
    #[must_use]
    pub const fn pool(&self) -> &'a [Entity] {
        self.pool
    }

    /// Effective attempt count: guesses made plus accumulated hint penalty
    #[must_use]
    pub fn score(&self) -> u32 {
        self.history.len() as u32 + self.hints.penalty()
    }

    /// Check if an entity id was already submitted this session
    #[must_use]
    pub fn already_guessed(&self, id: u32) -> bool {
        self.history.iter().any(|e| e.id() == id)
    }

    /// Check whether a hint purchase would currently succeed
    #[must_use]
    pub fn hint_available(&self, level: HintLevel) -> bool {
        !self.status.is_over() && self.hints.available(level, self.target, &self.history)
    }

    /// All revealed tag positions of the target, free and paid
    #[must_use]
    pub fn revealed_tags(&self) -> Vec<TagReveal> {
        self.hints.revealed_tags(self.target, &self.history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Direction, EntityData, FieldStatus};
    use crate::game::picker::DailyPicker;

    fn entity(id: u32, year: i32) -> Entity {
        Entity::new(EntityData {
            id,
            title: format!("作品{id}"),
            title_romaji: format!("series-{id}"),
            year,
            tags: vec!["動作".to_string()],
            ..EntityData::default()
        })
    }

    fn daily(seed: u64) -> PickerType {
        PickerType::Daily(DailyPicker::from_seed(seed))
    }

    #[test]
    fn empty_pool_rejects_construction() {
        let empty: Vec<Entity> = Vec::new();
        let result = GameSession::new(&empty, daily(1), None);
        assert!(matches!(result, Err(GameError::EmptyPool)));
    }

    #[test]
    fn winning_guess_transitions_to_won() {
        let pool = vec![entity(1, 2010)];
        let mut session = GameSession::new(&pool, daily(1), None).unwrap();

        let verdict = session.submit(&pool[0]).unwrap();
        assert!(verdict.hit);
        assert_eq!(session.status(), Status::Won);
        assert!(session.status().is_over());
    }

    #[test]
    fn duplicate_guess_leaves_state_unchanged() {
        let pool = vec![entity(1, 2010), entity(2, 2020)];
        let mut session = GameSession::with_target(&pool, &pool[1], daily(1), None);

        session.submit(&pool[0]).unwrap();
        assert_eq!(session.history().len(), 1);

        let result = session.submit(&pool[0]);
        assert_eq!(result.unwrap_err(), GameError::DuplicateGuess);
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.status(), Status::InProgress);
    }

    #[test]
    fn submit_rejected_after_win() {
        let pool = vec![entity(1, 2010), entity(2, 2020)];
        let mut session = GameSession::with_target(&pool, &pool[0], daily(1), None);

        session.submit(&pool[0]).unwrap();
        let result = session.submit(&pool[1]);
        assert_eq!(result.unwrap_err(), GameError::AlreadyOver);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn budget_exhaustion_loses() {
        let pool = vec![entity(1, 2010), entity(2, 2020), entity(3, 2015)];
        let mut session = GameSession::with_target(&pool, &pool[0], daily(1), Some(2));

        session.submit(&pool[1]).unwrap();
        assert_eq!(session.status(), Status::InProgress);
        assert_eq!(session.attempts_left(), Some(1));

        session.submit(&pool[2]).unwrap();
        assert_eq!(session.status(), Status::Lost);
        assert_eq!(session.attempts_left(), Some(0));
    }

    #[test]
    fn winning_on_last_attempt_wins() {
        let pool = vec![entity(1, 2010), entity(2, 2020)];
        let mut session = GameSession::with_target(&pool, &pool[0], daily(1), Some(2));

        session.submit(&pool[1]).unwrap();
        session.submit(&pool[0]).unwrap();
        assert_eq!(session.status(), Status::Won);
    }

    #[test]
    fn hints_rejected_after_terminal() {
        let pool = vec![entity(1, 2010)];
        let mut session = GameSession::new(&pool, daily(1), None).unwrap();

        session.submit(&pool[0]).unwrap();
        let result = session.buy_hint(HintLevel::Image);
        assert_eq!(result.unwrap_err(), GameError::AlreadyOver);
        assert!(!session.hint_available(HintLevel::Image));
    }

    #[test]
    fn restart_resets_everything() {
        let pool = vec![entity(1, 2010), entity(2, 2020)];
        let mut session = GameSession::new(&pool, daily(42), Some(8)).unwrap();
        let first_target = session.target().id();

        let miss = if first_target == 1 { &pool[1] } else { &pool[0] };
        session.submit(miss).unwrap();
        session.buy_hint(HintLevel::Image).unwrap();

        session.restart();

        // Same seed, same pool: the daily draw lands on the same target
        assert_eq!(session.target().id(), first_target);
        assert!(session.history().is_empty());
        assert_eq!(session.hints().penalty(), 0);
        assert_eq!(session.attempts_left(), Some(8));
        assert_eq!(session.status(), Status::InProgress);
    }

    #[test]
    fn daily_sessions_agree_on_the_target() {
        let pool: Vec<Entity> = (1..=30).map(|id| entity(id, 2000 + id as i32)).collect();

        let a = GameSession::new(&pool, daily(2_024_315), None).unwrap();
        let b = GameSession::new(&pool, daily(2_024_315), None).unwrap();
        assert_eq!(a.target().id(), b.target().id());
    }

    #[test]
    fn score_is_guesses_plus_penalty() {
        let pool = vec![entity(1, 2010), entity(2, 2020)];
        let mut session = GameSession::with_target(&pool, &pool[0], daily(1), None);

        session.submit(&pool[1]).unwrap();
        session.buy_hint(HintLevel::Image).unwrap();

        assert_eq!(session.score(), 1 + HintLevel::Image.cost());
    }

    #[test]
    fn year_bracketing_scenario() {
        // Three candidates; the target's year is bracketed by two misses
        let pool = vec![entity(1, 2010), entity(2, 2020), entity(3, 2015)];
        let mut session = GameSession::with_target(&pool, &pool[1], daily(1), None);

        let first = session.submit(&pool[0]).unwrap();
        assert_eq!(first.year.status, FieldStatus::Wrong);
        assert_eq!(first.year.direction, Some(Direction::Higher));

        let second = session.submit(&pool[2]).unwrap();
        assert_eq!(second.year.direction, Some(Direction::Higher));

        let third = session.submit(&pool[1]).unwrap();
        assert!(third.hit);
        assert_eq!(third.year.status, FieldStatus::Exact);
        assert_eq!(session.status(), Status::Won);
        assert_eq!(session.score(), 3);
    }
}
