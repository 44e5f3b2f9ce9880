//! E2E integration tests for the greeting counter as a standalone teacup
//! model.
//!
//! These tests verify that the component correctly implements the Model
//! trait and behaves as a host would observe it.
//!
//! Test categories:
//! - Lifecycle tests: init -> update -> view
//! - Notification tests: emission sequences across transition scenarios
//! - Rendering tests: verify view output

#![forbid(unsafe_code)]

use curtsy::greeting_counter::{
    CountChangedMsg, GreetingCounter, GreetingToggledMsg, ResetMsg,
};
use teacup::{Cmd, KeyMsg, KeyType, Message, Model};

/// Executes a transition command and returns the emitted count, if any.
fn count_emission(cmd: Option<Cmd>) -> Option<i32> {
    cmd.and_then(Cmd::execute)
        .and_then(|msg| msg.downcast::<CountChangedMsg>())
        .map(|msg| msg.count)
}

// ============================================================================
// Lifecycle Tests
// ============================================================================

mod lifecycle_tests {
    use super::*;

    #[test]
    fn test_init_returns_no_command() {
        let widget = GreetingCounter::new();
        assert!(Model::init(&widget).is_none());
    }

    #[test]
    fn test_model_update_and_view_roundtrip() {
        let mut widget = GreetingCounter::new().first("Alice");

        let cmd = Model::update(&mut widget, Message::new(KeyMsg::from_char('+')));
        assert_eq!(count_emission(cmd), Some(1));

        let view = Model::view(&widget);
        assert!(view.contains("Hello, Alice!"));
        assert!(view.contains("1 click"));
    }

    #[test]
    fn test_unrelated_messages_are_ignored() {
        struct OtherMsg;

        let mut widget = GreetingCounter::new();
        assert!(Model::update(&mut widget, Message::new(OtherMsg)).is_none());
        assert!(
            Model::update(&mut widget, Message::new(KeyMsg::from_type(KeyType::Enter)))
                .is_none()
        );
        assert_eq!(widget.count(), 0);
    }
}

// ============================================================================
// Notification Scenarios
// ============================================================================

mod notification_tests {
    use super::*;

    #[test]
    fn test_triple_increment_against_max_emits_three_times() {
        let mut widget = GreetingCounter::new().max(2);

        let emissions: Vec<i32> = (0..3)
            .map(|_| count_emission(widget.increment()).expect("increment always emits"))
            .collect();

        assert_eq!(emissions, vec![1, 2, 2]);
        assert_eq!(widget.count(), 2);
        assert!(widget.increment_disabled());
    }

    #[test]
    fn test_increment_then_decrement_round_trip() {
        let mut widget = GreetingCounter::new();

        let up = count_emission(widget.increment());
        let down = count_emission(widget.decrement());

        assert_eq!(up, Some(1));
        assert_eq!(down, Some(0));
        assert_eq!(widget.count(), 0);
    }

    #[test]
    fn test_decrement_at_floor_still_emits() {
        let mut widget = GreetingCounter::new();
        assert!(widget.decrement_disabled());
        assert_eq!(count_emission(widget.decrement()), Some(0));
    }

    #[test]
    fn test_toggle_emission_carries_new_state() {
        let mut widget = GreetingCounter::new();

        let first = widget
            .toggle_greeting()
            .and_then(Cmd::execute)
            .and_then(|msg| msg.downcast::<GreetingToggledMsg>())
            .expect("toggle always emits");
        assert!(first.expanded);
        assert_eq!(first.id, widget.id());

        let second = widget
            .toggle_greeting()
            .and_then(Cmd::execute)
            .and_then(|msg| msg.downcast::<GreetingToggledMsg>())
            .expect("toggle always emits");
        assert!(!second.expanded);
    }

    #[test]
    fn test_remote_reset_through_command_dispatch() {
        let mut widget = GreetingCounter::new().with_count(7);

        // A host asks for a reset command, executes it, and dispatches the
        // resulting message back into the widget.
        let reset_request = widget
            .reset_cmd()
            .and_then(Cmd::execute)
            .expect("reset_cmd produces a message");
        assert!(reset_request.is::<ResetMsg>());

        let emission = Model::update(&mut widget, reset_request);
        assert_eq!(count_emission(emission), Some(0));
        assert_eq!(widget.count(), 0);
    }
}

// ============================================================================
// Key-Driven Interaction
// ============================================================================

mod key_tests {
    use super::*;

    #[test]
    fn test_arrow_keys_move_counter() {
        let mut widget = GreetingCounter::new();

        Model::update(&mut widget, Message::new(KeyMsg::from_type(KeyType::Right)));
        Model::update(&mut widget, Message::new(KeyMsg::from_type(KeyType::Right)));
        assert_eq!(widget.count(), 2);

        Model::update(&mut widget, Message::new(KeyMsg::from_type(KeyType::Left)));
        assert_eq!(widget.count(), 1);
    }

    #[test]
    fn test_space_toggles_greeting() {
        let mut widget = GreetingCounter::new().first("Alice").last("Smith");

        Model::update(&mut widget, Message::new(KeyMsg::from_type(KeyType::Space)));
        assert!(widget.expanded());
        assert_eq!(
            widget.greeting_text(),
            "Hello, World! I'm Alice Smith. Nice to meet you!"
        );

        Model::update(&mut widget, Message::new(KeyMsg::from_type(KeyType::Space)));
        assert!(!widget.expanded());
        assert_eq!(widget.greeting_text(), "Hello, Alice Smith!");
    }

    #[test]
    fn test_key_increment_at_max_emits_unchanged_value() {
        let mut widget = GreetingCounter::new().max(1).with_count(1);

        // Disabled is a rendering affordance; key invocation still emits.
        assert!(widget.increment_disabled());
        let cmd = Model::update(&mut widget, Message::new(KeyMsg::from_char('+')));
        assert_eq!(count_emission(cmd), Some(1));
    }
}

// ============================================================================
// Rendering Scenarios
// ============================================================================

mod rendering_tests {
    use super::*;

    #[test]
    fn test_fresh_widget_has_dead_decrement() {
        let widget = GreetingCounter::new();
        let view = Model::view(&widget);
        assert!(view.contains("(-)"));
        assert!(view.contains("[+]"));
        assert!(view.contains("0 clicks"));
    }

    #[test]
    fn test_double_toggle_restores_rendering() {
        let mut widget = GreetingCounter::new().first("Alice").last("Smith");
        let before = Model::view(&widget);

        Model::update(&mut widget, Message::new(KeyMsg::from_char('g')));
        let expanded = Model::view(&widget);
        assert_ne!(before, expanded);
        assert!(expanded.contains("[Collapse]"));

        Model::update(&mut widget, Message::new(KeyMsg::from_char('g')));
        assert_eq!(Model::view(&widget), before);
    }

    #[test]
    fn test_view_reflects_every_count_change() {
        let mut widget = GreetingCounter::new().max(3);

        for expected in ["1 click", "2 clicks", "3 clicks"] {
            widget.increment();
            assert!(Model::view(&widget).contains(expected));
        }
        assert!(Model::view(&widget).contains("(+)"));
    }
}
