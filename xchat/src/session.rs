//! Per-template conversation sessions.
//!
//! A session starts `Fresh` with a single seed turn. Whenever a session holds
//! exactly one turn, the next exchange overwrites it and the session becomes
//! `Active`. Otherwise user and assistant turns accumulate.

use std::collections::HashMap;
use std::sync::Mutex;

use xcommon::TemplateLabel;
use xprovider::Turn;

use crate::ChatError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionPhase {
    Absent,
    Fresh,
    Active,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionTransition {
    /// Absent to Fresh: the session is created with one user turn.
    Opened,
    /// The session's only turn is overwritten by the new user turn.
    ReplacedSeed,
    /// Active: the user turn is appended.
    Appended,
}

impl SessionTransition {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Opened => "opened",
            Self::ReplacedSeed => "replaced_seed",
            Self::Appended => "appended",
        }
    }

    pub fn phase_after(self) -> SessionPhase {
        match self {
            Self::Opened => SessionPhase::Fresh,
            Self::ReplacedSeed | Self::Appended => SessionPhase::Active,
        }
    }
}

/// Result of committing a user turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    pub transition: SessionTransition,
    /// Stored turns after the commit, without the system turn.
    pub turns: Vec<Turn>,
}

#[derive(Debug, Clone)]
struct Session {
    phase: SessionPhase,
    turns: Vec<Turn>,
}

#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: Mutex<HashMap<TemplateLabel, Session>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commits `user_content` as the next user turn for `label`.
    pub fn begin_exchange(
        &self,
        label: &TemplateLabel,
        user_content: impl Into<String>,
    ) -> Result<Exchange, ChatError> {
        let turn = Turn::user(user_content);
        let mut sessions = self.lock()?;

        let transition = match sessions.get_mut(label) {
            None => {
                sessions.insert(
                    label.clone(),
                    Session {
                        phase: SessionPhase::Fresh,
                        turns: vec![turn],
                    },
                );
                SessionTransition::Opened
            }
            Some(session) if session.turns.len() == 1 => {
                session.turns = vec![turn];
                session.phase = SessionPhase::Active;
                SessionTransition::ReplacedSeed
            }
            Some(session) => {
                session.turns.push(turn);
                SessionTransition::Appended
            }
        };

        let turns = sessions
            .get(label)
            .map(|session| session.turns.clone())
            .unwrap_or_default();
        Ok(Exchange { transition, turns })
    }

    /// Stores the assistant reply. Returns `false` when the session is still
    /// `Fresh`, since its seed turn is about to be replaced.
    pub fn record_reply(
        &self,
        label: &TemplateLabel,
        reply: impl Into<String>,
    ) -> Result<bool, ChatError> {
        let mut sessions = self.lock()?;
        match sessions.get_mut(label) {
            Some(session) if session.phase == SessionPhase::Active => {
                session.turns.push(Turn::assistant(reply));
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    pub fn snapshot(&self, label: &TemplateLabel) -> Result<Vec<Turn>, ChatError> {
        Ok(self
            .lock()?
            .get(label)
            .map(|session| session.turns.clone())
            .unwrap_or_default())
    }

    pub fn phase(&self, label: &TemplateLabel) -> Result<SessionPhase, ChatError> {
        Ok(self
            .lock()?
            .get(label)
            .map(|session| session.phase)
            .unwrap_or(SessionPhase::Absent))
    }

    /// Drops one session. Returns whether it existed.
    pub fn reset(&self, label: &TemplateLabel) -> Result<bool, ChatError> {
        Ok(self.lock()?.remove(label).is_some())
    }

    pub fn clear(&self) -> Result<(), ChatError> {
        self.lock()?.clear();
        Ok(())
    }

    fn lock(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, HashMap<TemplateLabel, Session>>, ChatError> {
        self.sessions
            .lock()
            .map_err(|_| ChatError::store("session registry lock poisoned"))
    }
}

/// The system turn from the current template, then every stored turn.
pub fn outbound_turns(system_prompt: &str, stored: Vec<Turn>) -> Vec<Turn> {
    let mut turns = Vec::with_capacity(stored.len() + 1);
    turns.push(Turn::system(system_prompt));
    turns.extend(stored);
    turns
}

#[cfg(test)]
mod tests {
    use xcommon::TemplateLabel;
    use xprovider::{Role, Turn};

    use super::{SessionPhase, SessionRegistry, SessionTransition, outbound_turns};

    #[test]
    fn first_exchange_opens_fresh_session_with_one_turn() {
        let registry = SessionRegistry::new();
        let label = TemplateLabel::new("haiku");

        let exchange = registry
            .begin_exchange(&label, "$style, hi")
            .expect("begin");
        assert_eq!(exchange.transition, SessionTransition::Opened);
        assert_eq!(exchange.turns, vec![Turn::user("$style, hi")]);
        assert_eq!(registry.phase(&label).expect("phase"), SessionPhase::Fresh);
    }

    #[test]
    fn second_exchange_replaces_seed_and_third_appends() {
        let registry = SessionRegistry::new();
        let label = TemplateLabel::new("haiku");

        registry.begin_exchange(&label, "one").expect("first");
        assert!(!registry.record_reply(&label, "reply one").expect("reply"));

        let second = registry.begin_exchange(&label, "two").expect("second");
        assert_eq!(second.transition, SessionTransition::ReplacedSeed);
        assert_eq!(second.turns, vec![Turn::user("two")]);
        assert!(registry.record_reply(&label, "reply two").expect("reply"));

        let third = registry.begin_exchange(&label, "three").expect("third");
        assert_eq!(third.transition, SessionTransition::Appended);
        assert_eq!(
            third.turns,
            vec![
                Turn::user("two"),
                Turn::assistant("reply two"),
                Turn::user("three")
            ]
        );
        assert_eq!(registry.phase(&label).expect("phase"), SessionPhase::Active);
    }

    #[test]
    fn lone_turn_left_by_failed_exchange_is_overwritten() {
        let registry = SessionRegistry::new();
        let label = TemplateLabel::new("haiku");

        registry.begin_exchange(&label, "a").expect("first");
        registry.begin_exchange(&label, "b").expect("second");

        let third = registry.begin_exchange(&label, "c").expect("third");
        assert_eq!(third.transition, SessionTransition::ReplacedSeed);
        assert_eq!(third.turns, vec![Turn::user("c")]);
        assert_eq!(registry.phase(&label).expect("phase"), SessionPhase::Active);

        assert!(registry.record_reply(&label, "reply c").expect("reply"));
        let fourth = registry.begin_exchange(&label, "d").expect("fourth");
        assert_eq!(fourth.transition, SessionTransition::Appended);
        assert_eq!(fourth.turns.len(), 3);
    }

    #[test]
    fn sessions_are_isolated_per_label_and_resettable() {
        let registry = SessionRegistry::new();
        let haiku = TemplateLabel::new("haiku");
        let ad = TemplateLabel::new("ad");

        registry.begin_exchange(&haiku, "a").expect("begin");
        registry.begin_exchange(&haiku, "b").expect("begin");
        registry.begin_exchange(&ad, "c").expect("begin");

        assert_eq!(registry.phase(&haiku).expect("phase"), SessionPhase::Active);
        assert_eq!(registry.phase(&ad).expect("phase"), SessionPhase::Fresh);

        assert!(registry.reset(&haiku).expect("reset"));
        assert!(!registry.reset(&haiku).expect("second reset"));
        assert_eq!(registry.phase(&haiku).expect("phase"), SessionPhase::Absent);
        assert!(registry.snapshot(&haiku).expect("snapshot").is_empty());

        registry.clear().expect("clear");
        assert_eq!(registry.phase(&ad).expect("phase"), SessionPhase::Absent);
    }

    #[test]
    fn outbound_turns_lead_with_system_prompt() {
        let turns = outbound_turns("You write haiku.", vec![Turn::user("autumn")]);
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].role, Role::System);
        assert_eq!(turns[0].content, "You write haiku.");
        assert_eq!(turns[1], Turn::user("autumn"));
    }
}
