//! Headless self-check.
//!
//! Runs the widget through its notification contract without a terminal:
//! boundary emission, toggle round-trip, floor behavior, and host-dispatched
//! reset. Used by CI and packaging smoke tests; exits nonzero on the first
//! violation.

use anyhow::{bail, Result};
use curtsy::greeting_counter::{CountChangedMsg, GreetingCounter};
use teacup::{Cmd, Model};

use crate::config::Config;

/// Bounds used for the scripted run; name parts come from the resolved
/// config so the greeting path is exercised end to end.
const CHECK_MAX: i32 = 2;

pub fn run(config: &Config) -> Result<()> {
    let mut widget = GreetingCounter::new().min(0).max(CHECK_MAX);
    widget.set_names(
        config.first.as_deref(),
        config.middle.as_deref(),
        config.last.as_deref(),
    );

    // Three increments against max = 2 must emit 1, 2, 2.
    let emissions: Vec<i32> = (0..3)
        .filter_map(|_| count_emission(widget.increment()))
        .collect();
    if emissions != [1, 2, CHECK_MAX] {
        bail!("boundary emission mismatch: {emissions:?}");
    }
    if !widget.increment_disabled() {
        bail!("increment control should be disabled at max");
    }
    println!("ok - boundary emission ({emissions:?})");

    // Toggling twice must restore the rendering exactly.
    let before = Model::view(&widget);
    widget.toggle_greeting();
    if Model::view(&widget) == before {
        bail!("toggle did not change the rendering");
    }
    widget.toggle_greeting();
    if Model::view(&widget) != before {
        bail!("double toggle did not restore the rendering");
    }
    println!("ok - toggle round-trip");

    // A host-dispatched reset message must zero the count and emit it.
    let reset_request = widget
        .reset_cmd()
        .and_then(Cmd::execute)
        .ok_or_else(|| anyhow::anyhow!("reset_cmd produced no message"))?;
    match count_emission(Model::update(&mut widget, reset_request)) {
        Some(0) => {}
        other => bail!("remote reset emitted {other:?}, expected Some(0)"),
    }
    println!("ok - remote reset");

    // At the floor the decrement still emits the unchanged value.
    if !widget.decrement_disabled() {
        bail!("decrement control should be disabled at min");
    }
    match count_emission(widget.decrement()) {
        Some(0) => {}
        other => bail!("floor decrement emitted {other:?}, expected Some(0)"),
    }
    println!("ok - floor emission");

    println!("\n{}", Model::view(&widget));
    Ok(())
}

fn count_emission(cmd: Option<Cmd>) -> Option<i32> {
    cmd.and_then(Cmd::execute)
        .and_then(|msg| msg.downcast::<CountChangedMsg>())
        .map(|msg| msg.count)
}
