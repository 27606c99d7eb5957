//! Drag-to-scroll state machine for horizontal card lists
//!
//! One `DragSession` is owned by each attached container. The binding layer
//! feeds it pointer input and applies the returned `DragEffect` to the
//! element (class toggles and `scrollLeft`). Nothing here touches the DOM.

use tracing::{debug, trace};

/// Displacement above which a click at the end of a drag is swallowed
pub const DEFAULT_CLICK_THRESHOLD: f64 = 5.0;

/// `PointerEvent.button` value of the primary (usually left) button
pub const PRIMARY_BUTTON: i16 = 0;

/// Whether a container is currently being dragged
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        /// Pointer X at drag start
        origin_client_x: f64,
        /// Container `scrollLeft` at drag start
        origin_scroll_offset: f64,
    },
}

/// Pointer input relevant to dragging
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerInput {
    Down {
        button: i16,
        client_x: f64,
        scroll_offset: f64,
    },
    Move {
        client_x: f64,
    },
    Up,
    Cancel,
}

/// What the binding layer should do to the container after an input
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEffect {
    /// Leave the container alone
    None,
    /// Add the dragging class
    Started,
    /// Set `scrollLeft` to the given offset
    ScrollTo(f64),
    /// Remove the dragging class
    Ended,
}

/// How a click on the container should be treated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickDecision {
    /// Let the click reach other listeners
    Propagate,
    /// Call `stopImmediatePropagation` (default action is left alone)
    StopImmediate,
}

/// Pure transition function over the drag state
pub fn transition(state: DragState, input: PointerInput) -> DragState {
    match (state, input) {
        (
            _,
            PointerInput::Down {
                button: PRIMARY_BUTTON,
                client_x,
                scroll_offset,
            },
        ) => DragState::Dragging {
            origin_client_x: client_x,
            origin_scroll_offset: scroll_offset,
        },
        (state, PointerInput::Down { .. }) => state,
        (state, PointerInput::Move { .. }) => state,
        (_, PointerInput::Up | PointerInput::Cancel) => DragState::Idle,
    }
}

/// Per-container drag session
#[derive(Debug, Clone)]
pub struct DragSession {
    state: DragState,
    max_displacement: f64,
    click_threshold: f64,
}

impl Default for DragSession {
    fn default() -> Self {
        Self::new(DEFAULT_CLICK_THRESHOLD)
    }
}

impl DragSession {
    /// Create an idle session with the given click threshold
    pub fn new(click_threshold: f64) -> Self {
        Self {
            state: DragState::Idle,
            max_displacement: 0.0,
            click_threshold,
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Largest horizontal movement of the current or most recent drag
    pub fn max_displacement(&self) -> f64 {
        self.max_displacement
    }

    pub fn click_threshold(&self) -> f64 {
        self.click_threshold
    }

    /// Apply one pointer input and report the effect on the container
    pub fn handle(&mut self, input: PointerInput) -> DragEffect {
        let effect = match (self.state, input) {
            (_, PointerInput::Down { button, .. }) if button != PRIMARY_BUTTON => {
                trace!(button, "ignoring non-primary pointer down");
                DragEffect::None
            }
            (_, PointerInput::Down { client_x, .. }) => {
                self.max_displacement = 0.0;
                debug!(client_x, "drag started");
                DragEffect::Started
            }
            (
                DragState::Dragging {
                    origin_client_x,
                    origin_scroll_offset,
                },
                PointerInput::Move { client_x },
            ) => {
                let dx = client_x - origin_client_x;
                self.max_displacement = self.max_displacement.max(dx.abs());
                DragEffect::ScrollTo(origin_scroll_offset - dx)
            }
            (DragState::Idle, PointerInput::Move { .. }) => DragEffect::None,
            (_, PointerInput::Up | PointerInput::Cancel) => {
                if self.is_dragging() {
                    debug!(max_displacement = self.max_displacement, "drag ended");
                }
                DragEffect::Ended
            }
        };
        self.state = transition(self.state, input);
        effect
    }

    /// Decide whether a click on the container may reach other listeners
    ///
    /// Clicks on links always go through so cards stay navigable.
    pub fn click_decision(&self, target_in_link: bool) -> ClickDecision {
        if target_in_link {
            return ClickDecision::Propagate;
        }
        if self.max_displacement > self.click_threshold {
            debug!(
                max_displacement = self.max_displacement,
                "suppressing click after drag"
            );
            ClickDecision::StopImmediate
        } else {
            ClickDecision::Propagate
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn down(client_x: f64, scroll_offset: f64) -> PointerInput {
        PointerInput::Down {
            button: PRIMARY_BUTTON,
            client_x,
            scroll_offset,
        }
    }

    fn mv(client_x: f64) -> PointerInput {
        PointerInput::Move { client_x }
    }

    #[test]
    fn test_primary_down_starts_drag() {
        let mut session = DragSession::default();
        assert_eq!(session.handle(down(100.0, 40.0)), DragEffect::Started);
        assert_eq!(
            session.state(),
            DragState::Dragging {
                origin_client_x: 100.0,
                origin_scroll_offset: 40.0
            }
        );
    }

    #[test]
    fn test_secondary_button_is_ignored() {
        let mut session = DragSession::default();
        let effect = session.handle(PointerInput::Down {
            button: 2,
            client_x: 10.0,
            scroll_offset: 0.0,
        });
        assert_eq!(effect, DragEffect::None);
        assert_eq!(session.state(), DragState::Idle);
    }

    #[test]
    fn test_move_scrolls_opposite_to_pointer() {
        let mut session = DragSession::default();
        session.handle(down(200.0, 300.0));
        assert_eq!(session.handle(mv(250.0)), DragEffect::ScrollTo(250.0));
        assert_eq!(session.handle(mv(150.0)), DragEffect::ScrollTo(350.0));
        assert_eq!(session.max_displacement(), 50.0);
    }

    #[test]
    fn test_move_while_idle_does_nothing() {
        let mut session = DragSession::default();
        assert_eq!(session.handle(mv(500.0)), DragEffect::None);
        assert_eq!(session.max_displacement(), 0.0);
    }

    #[test]
    fn test_up_and_cancel_end_drag() {
        for end in [PointerInput::Up, PointerInput::Cancel] {
            let mut session = DragSession::default();
            session.handle(down(0.0, 0.0));
            assert_eq!(session.handle(end), DragEffect::Ended);
            assert!(!session.is_dragging());
        }
    }

    #[test]
    fn test_displacement_survives_pointer_up() {
        let mut session = DragSession::default();
        session.handle(down(0.0, 0.0));
        session.handle(mv(-30.0));
        session.handle(PointerInput::Up);
        assert_eq!(session.max_displacement(), 30.0);
        assert_eq!(session.click_decision(false), ClickDecision::StopImmediate);
    }

    #[test]
    fn test_displacement_resets_on_next_down() {
        let mut session = DragSession::default();
        session.handle(down(0.0, 0.0));
        session.handle(mv(40.0));
        session.handle(PointerInput::Up);
        session.handle(down(10.0, 0.0));
        assert_eq!(session.max_displacement(), 0.0);
    }

    #[test]
    fn test_secondary_down_keeps_previous_displacement() {
        let mut session = DragSession::default();
        session.handle(down(0.0, 0.0));
        session.handle(mv(40.0));
        session.handle(PointerInput::Up);
        session.handle(PointerInput::Down {
            button: 1,
            client_x: 0.0,
            scroll_offset: 0.0,
        });
        assert_eq!(session.max_displacement(), 40.0);
    }

    #[test]
    fn test_second_down_while_dragging_overwrites_origin() {
        let mut session = DragSession::default();
        session.handle(down(0.0, 0.0));
        session.handle(down(100.0, 20.0));
        assert_eq!(session.handle(mv(110.0)), DragEffect::ScrollTo(10.0));
    }

    #[test]
    fn test_click_threshold_boundary() {
        let mut session = DragSession::default();
        session.handle(down(0.0, 0.0));
        session.handle(mv(5.0));
        session.handle(PointerInput::Up);
        assert_eq!(session.click_decision(false), ClickDecision::Propagate);

        session.handle(down(0.0, 0.0));
        session.handle(mv(5.5));
        session.handle(PointerInput::Up);
        assert_eq!(session.click_decision(false), ClickDecision::StopImmediate);
    }

    #[test]
    fn test_link_clicks_always_propagate() {
        let mut session = DragSession::default();
        session.handle(down(0.0, 0.0));
        session.handle(mv(300.0));
        session.handle(PointerInput::Up);
        assert_eq!(session.click_decision(true), ClickDecision::Propagate);
    }

    #[test]
    fn test_click_without_drag_propagates() {
        let session = DragSession::default();
        assert_eq!(session.click_decision(false), ClickDecision::Propagate);
    }

    #[test]
    fn test_custom_threshold() {
        let mut session = DragSession::new(20.0);
        session.handle(down(0.0, 0.0));
        session.handle(mv(15.0));
        assert_eq!(session.click_decision(false), ClickDecision::Propagate);
    }

    proptest! {
        /// Property: the final scroll offset depends only on the last pointer X
        #[test]
        fn scroll_offset_independent_of_intermediate_moves(
            origin_x in -2000.0f64..2000.0,
            origin_scroll in 0.0f64..5000.0,
            path in prop::collection::vec(-2000.0f64..2000.0, 1..20),
        ) {
            let mut replayed = DragSession::default();
            replayed.handle(down(origin_x, origin_scroll));
            let mut last = DragEffect::None;
            for x in &path {
                last = replayed.handle(mv(*x));
            }

            let final_x = *path.last().unwrap();
            let mut jumped = DragSession::default();
            jumped.handle(down(origin_x, origin_scroll));
            let single = jumped.handle(mv(final_x));

            prop_assert_eq!(last, single);
            prop_assert_eq!(single, DragEffect::ScrollTo(origin_scroll - (final_x - origin_x)));
        }

        /// Property: max displacement is the largest |dx| seen during the drag
        #[test]
        fn max_displacement_tracks_largest_excursion(
            origin_x in -500.0f64..500.0,
            path in prop::collection::vec(-500.0f64..500.0, 1..20),
        ) {
            let mut session = DragSession::default();
            session.handle(down(origin_x, 0.0));
            for x in &path {
                session.handle(mv(*x));
            }
            session.handle(PointerInput::Up);

            let expected = path
                .iter()
                .map(|x| (x - origin_x).abs())
                .fold(0.0f64, f64::max);
            prop_assert_eq!(session.max_displacement(), expected);
        }
    }
}
