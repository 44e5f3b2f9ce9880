//! Interactive host loop.
//!
//! This is the "rendering framework" side of the widget contract: read an
//! input event, translate it to a key message, run the widget's update,
//! execute the returned command, route the produced message, and re-render.
//! Each update runs to completion before the next draw.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType};
use curtsy::greeting_counter::{CountChangedMsg, GreetingCounter, GreetingToggledMsg};
use teacup::{Cmd, KeyMsg, KeyType, Model};
use tracing::{debug, info};

/// Runs the interactive session until the user quits.
pub fn run(mut widget: GreetingCounter) -> Result<()> {
    enable_raw_mode()?;
    let result = event_loop(&mut widget);
    disable_raw_mode()?;
    result
}

fn event_loop(widget: &mut GreetingCounter) -> Result<()> {
    if let Some(cmd) = Model::init(widget) {
        dispatch(widget, cmd);
    }
    draw(widget)?;

    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if is_quit(&key) {
            break;
        }
        let Some(msg) = translate(&key) else {
            debug!(?key, "unmapped key");
            continue;
        };

        if let Some(cmd) = widget.update(teacup::Message::new(msg)) {
            dispatch(widget, cmd);
        }
        draw(widget)?;
    }

    Ok(())
}

/// Executes a command and routes the produced message: notifications are
/// consumed by the host (logged), then the message is offered back to the
/// widget so id-routed control messages keep working.
fn dispatch(widget: &mut GreetingCounter, cmd: Cmd) {
    let Some(msg) = cmd.execute() else {
        return;
    };

    if let Some(changed) = msg.downcast_ref::<CountChangedMsg>() {
        info!(count = changed.count, "countChanged");
    } else if let Some(toggled) = msg.downcast_ref::<GreetingToggledMsg>() {
        info!(expanded = toggled.expanded, "greetingToggled");
    }

    if let Some(follow_up) = widget.update(msg) {
        dispatch(widget, follow_up);
    }
}

fn draw(widget: &GreetingCounter) -> Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
    // Raw mode needs explicit carriage returns.
    for line in Model::view(widget).lines() {
        write!(stdout, "{line}\r\n")?;
    }
    write!(stdout, "\r\n+/- count · space toggle · r reset · q quit\r\n")?;
    stdout.flush()?;
    Ok(())
}

fn is_quit(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Translates a crossterm key event into the widget's key vocabulary.
fn translate(key: &KeyEvent) -> Option<KeyMsg> {
    let msg = match key.code {
        KeyCode::Char(' ') => KeyMsg::from_type(KeyType::Space),
        KeyCode::Char(c) => KeyMsg::from_char(c),
        KeyCode::Enter => KeyMsg::from_type(KeyType::Enter),
        KeyCode::Tab => KeyMsg::from_type(KeyType::Tab),
        KeyCode::Backspace => KeyMsg::from_type(KeyType::Backspace),
        KeyCode::Delete => KeyMsg::from_type(KeyType::Delete),
        KeyCode::Up => KeyMsg::from_type(KeyType::Up),
        KeyCode::Down => KeyMsg::from_type(KeyType::Down),
        KeyCode::Left => KeyMsg::from_type(KeyType::Left),
        KeyCode::Right => KeyMsg::from_type(KeyType::Right),
        KeyCode::Home => KeyMsg::from_type(KeyType::Home),
        KeyCode::End => KeyMsg::from_type(KeyType::End),
        _ => return None,
    };
    Some(msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_chars_and_arrows() {
        let plus = KeyEvent::new(KeyCode::Char('+'), KeyModifiers::NONE);
        assert_eq!(translate(&plus).unwrap().to_string(), "+");

        let left = KeyEvent::new(KeyCode::Left, KeyModifiers::NONE);
        assert_eq!(translate(&left).unwrap().to_string(), "left");

        let space = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
        assert_eq!(translate(&space).unwrap().to_string(), "space");
    }

    #[test]
    fn test_translate_unmapped() {
        let f1 = KeyEvent::new(KeyCode::F(1), KeyModifiers::NONE);
        assert!(translate(&f1).is_none());
    }

    #[test]
    fn test_quit_keys() {
        assert!(is_quit(&KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)));
        assert!(is_quit(&KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(is_quit(&KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!is_quit(&KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::NONE
        )));
    }
}
