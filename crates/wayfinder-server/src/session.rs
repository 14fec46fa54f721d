//! Navigation session state.
//!
//! One explicit record with a small set of legal transitions, instead of the
//! scattered flags a planning UI tends to accumulate. The phase enum makes
//! impossible combinations (emergency active while still picking a hub)
//! unrepresentable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use wayfinder_core::{
    emergency_route, plan_route, Language, Path, RouteError, SpatialAdvice, TravelMode,
};

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "lowercase")]
pub enum SessionPhase {
    /// Working through the planning wizard (hub, profile, endpoints).
    Planning { step: u8 },
    /// Following a generated route.
    Navigating,
    /// Following the static evacuation route.
    Emergency,
}

/// Advice tagged with the step index it was fetched for. The tag is what
/// makes stale responses detectable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepAdvice {
    pub step_index: usize,
    #[serde(flatten)]
    pub advice: SpatialAdvice,
}

/// Why a plan request was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanError {
    #[error(transparent)]
    Route(#[from] RouteError),
    #[error(transparent)]
    Transition(#[from] TransitionError),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("no active route")]
    NoActiveRoute,
    #[error("already at the end of the route")]
    AtRouteEnd,
    #[error("already at the start of the route")]
    AtRouteStart,
    #[error("emergency mode is active")]
    EmergencyActive,
    #[error("emergency mode is not active")]
    EmergencyNotActive,
}

/// A navigation session. Exclusively owns its active path; the path is
/// replaced wholesale on every plan, language change, or emergency toggle,
/// never patched in place.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub phase: SessionPhase,
    pub language: Language,
    pub mode: TravelMode,
    pub airport_id: Option<String>,
    pub start_id: Option<String>,
    pub end_id: Option<String>,
    pub path: Option<Path>,
    pub current_step: usize,
    pub advice: Option<StepAdvice>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(id: String) -> Self {
        Self {
            id,
            phase: SessionPhase::Planning { step: 0 },
            language: Language::default(),
            mode: TravelMode::Wheelchair,
            airport_id: None,
            start_id: None,
            end_id: None,
            path: None,
            current_step: 0,
            advice: None,
            created_at: Utc::now(),
        }
    }

    /// Generate a fresh route and enter navigation. Allowed from planning
    /// and from an active route (reroute), but not during an evacuation.
    pub fn plan(
        &mut self,
        airport_id: &str,
        start_id: &str,
        end_id: &str,
        mode: TravelMode,
        language: Language,
    ) -> Result<(), PlanError> {
        if self.phase == SessionPhase::Emergency {
            return Err(TransitionError::EmergencyActive.into());
        }
        let path = plan_route(airport_id, start_id, end_id, mode, language)?;
        self.airport_id = Some(airport_id.to_string());
        self.start_id = Some(start_id.to_string());
        self.end_id = Some(end_id.to_string());
        self.mode = mode;
        self.language = language;
        self.path = Some(path);
        self.current_step = 0;
        self.advice = None;
        self.phase = SessionPhase::Navigating;
        Ok(())
    }

    /// Change the display language. While navigating, the whole path is
    /// regenerated so every instruction reflects the new language; the
    /// geometry is unchanged. The emergency route is never retranslated.
    pub fn set_language(&mut self, language: Language) -> Result<(), RouteError> {
        self.language = language;
        if self.phase != SessionPhase::Navigating {
            return Ok(());
        }
        if let (Some(airport), Some(start), Some(end)) =
            (&self.airport_id, &self.start_id, &self.end_id)
        {
            let path = plan_route(airport, start, end, self.mode, language)?;
            self.path = Some(path);
            self.advice = None;
        }
        Ok(())
    }

    pub fn advance_step(&mut self) -> Result<usize, TransitionError> {
        let path = self.path.as_ref().ok_or(TransitionError::NoActiveRoute)?;
        if self.current_step + 1 >= path.steps.len() {
            return Err(TransitionError::AtRouteEnd);
        }
        self.current_step += 1;
        Ok(self.current_step)
    }

    pub fn retreat_step(&mut self) -> Result<usize, TransitionError> {
        if self.path.is_none() {
            return Err(TransitionError::NoActiveRoute);
        }
        if self.current_step == 0 {
            return Err(TransitionError::AtRouteStart);
        }
        self.current_step -= 1;
        Ok(self.current_step)
    }

    /// Apply an advice result only if it is still for the current step.
    /// Returns false when the result is stale and was discarded.
    pub fn apply_advice(&mut self, step_index: usize, advice: SpatialAdvice) -> bool {
        if self.phase != SessionPhase::Navigating || step_index != self.current_step {
            return false;
        }
        self.advice = Some(StepAdvice { step_index, advice });
        true
    }

    /// Swap the active path wholesale for the static evacuation route.
    /// Suspends regeneration and advice fetching until cancelled.
    pub fn trigger_emergency(&mut self) -> Result<(), TransitionError> {
        match self.phase {
            SessionPhase::Emergency => Err(TransitionError::EmergencyActive),
            SessionPhase::Planning { .. } if self.path.is_none() => {
                Err(TransitionError::NoActiveRoute)
            }
            _ => {
                self.phase = SessionPhase::Emergency;
                self.path = Some(emergency_route());
                self.current_step = 0;
                self.advice = None;
                Ok(())
            }
        }
    }

    /// Leave evacuation and return to planning. Clears the route and any
    /// stored advice so nothing stale survives the toggle.
    pub fn cancel_emergency(&mut self) -> Result<(), TransitionError> {
        if self.phase != SessionPhase::Emergency {
            return Err(TransitionError::EmergencyNotActive);
        }
        self.phase = SessionPhase::Planning { step: 1 };
        self.path = None;
        self.current_step = 0;
        self.advice = None;
        Ok(())
    }

    /// Instruction text of the step the traveler is currently on.
    pub fn current_instruction(&self) -> Option<&str> {
        self.path
            .as_ref()
            .and_then(|p| p.steps.get(self.current_step))
            .map(|s| s.instruction.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfinder_core::fallback_advice;

    fn navigating() -> Session {
        let mut session = Session::new("test".into());
        session
            .plan("del-t3", "del-e1", "del-g15", TravelMode::Wheelchair, Language::En)
            .unwrap();
        session
    }

    #[test]
    fn plan_enters_navigation_at_step_zero() {
        let session = navigating();
        assert_eq!(session.phase, SessionPhase::Navigating);
        assert_eq!(session.current_step, 0);
        assert_eq!(session.path.as_ref().unwrap().steps.len(), 5);
        assert!(session.advice.is_none());
    }

    #[test]
    fn stepping_is_bounds_checked() {
        let mut session = navigating();
        assert_eq!(session.retreat_step(), Err(TransitionError::AtRouteStart));
        for expected in 1..5 {
            assert_eq!(session.advance_step().unwrap(), expected);
        }
        assert_eq!(session.advance_step(), Err(TransitionError::AtRouteEnd));
    }

    #[test]
    fn stale_advice_is_discarded() {
        let mut session = navigating();
        session.advance_step().unwrap();

        // Response tagged for step 0 arrives after the move to step 1.
        assert!(!session.apply_advice(0, fallback_advice(Language::En)));
        assert!(session.advice.is_none());

        assert!(session.apply_advice(1, fallback_advice(Language::En)));
        assert_eq!(session.advice.as_ref().unwrap().step_index, 1);
    }

    #[test]
    fn language_change_regenerates_but_keeps_geometry() {
        let mut session = navigating();
        session.advance_step().unwrap();
        let before = session.path.clone().unwrap();

        session.set_language(Language::Ml).unwrap();
        let after = session.path.as_ref().unwrap();

        assert_eq!(session.current_step, 1);
        assert_eq!(before.steps.len(), after.steps.len());
        for (a, b) in before.steps.iter().zip(&after.steps) {
            assert_eq!(a.point, b.point);
            assert_ne!(a.instruction, b.instruction);
        }
    }

    #[test]
    fn emergency_swaps_wholesale_and_cancel_clears_advice() {
        let mut session = navigating();
        assert!(session.apply_advice(0, fallback_advice(Language::En)));

        session.trigger_emergency().unwrap();
        assert_eq!(session.phase, SessionPhase::Emergency);
        let path = session.path.as_ref().unwrap();
        assert_eq!(path.id, "emergency-1");
        assert_eq!(path.steps.len(), 2);
        assert!(session.advice.is_none());

        // Advice cannot attach while evacuating.
        assert!(!session.apply_advice(0, fallback_advice(Language::En)));

        session.cancel_emergency().unwrap();
        assert_eq!(session.phase, SessionPhase::Planning { step: 1 });
        assert!(session.path.is_none());
        assert!(session.advice.is_none());
    }

    #[test]
    fn emergency_route_ignores_language_changes() {
        let mut session = navigating();
        session.trigger_emergency().unwrap();
        let before = session.path.clone().unwrap();
        session.set_language(Language::Hi).unwrap();
        let after = session.path.as_ref().unwrap();
        assert_eq!(before.steps[0].instruction, after.steps[0].instruction);
        assert_eq!(session.language, Language::Hi);
    }

    #[test]
    fn illegal_transitions_are_rejected() {
        let mut session = Session::new("test".into());
        assert_eq!(session.trigger_emergency(), Err(TransitionError::NoActiveRoute));
        assert_eq!(session.cancel_emergency(), Err(TransitionError::EmergencyNotActive));
        assert_eq!(session.advance_step(), Err(TransitionError::NoActiveRoute));

        let mut session = navigating();
        session.trigger_emergency().unwrap();
        assert_eq!(session.trigger_emergency(), Err(TransitionError::EmergencyActive));
        assert_eq!(
            session
                .plan("del-t3", "del-e1", "del-g15", TravelMode::Standard, Language::En)
                .unwrap_err(),
            PlanError::Transition(TransitionError::EmergencyActive)
        );
    }
}
