use crate::core::game::{Flow, Game};
use anyhow::Result;
use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyCode, KeyEventKind,
    KeyModifiers,
};
use futures_util::StreamExt;
use ratatui::layout::Rect;
use ratatui::DefaultTerminal;
use std::io;
use tracing::{debug, info};

/// Drives a single game: draws a frame, waits for the next terminal event,
/// hands it to the game, repeats.
///
/// Everything happens on one task. A game only ever sees one event at a time,
/// so state changes made while handling an event (a reset, say) are complete
/// before the next event is read.
pub struct Engine<G: Game> {
    game: G,
}

impl<G: Game> Engine<G> {
    pub fn new(game: G) -> Self {
        Self { game }
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    /// Runs until the user quits, then restores the terminal and hands the
    /// game back for inspection.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<G> {
        let result = match crossterm::execute!(io::stdout(), EnableMouseCapture) {
            Ok(()) => self.event_loop(&mut terminal).await,
            Err(e) => Err(e.into()),
        };
        let restored = crossterm::execute!(io::stdout(), DisableMouseCapture);
        ratatui::restore();
        result?;
        restored?;
        Ok(self.game)
    }

    async fn event_loop(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        let mut events = EventStream::new();
        info!("Engine started");

        loop {
            terminal.draw(|f| self.game.render(f))?;

            let Some(event) = events.next().await else {
                debug!("Event stream closed");
                break;
            };
            let size = terminal.size()?;
            let area = Rect::new(0, 0, size.width, size.height);
            if self.dispatch(&event?, area) == Flow::Quit {
                break;
            }
        }

        info!("Engine stopped");
        Ok(())
    }

    /// Engine-level keys first (Esc, Ctrl-C), then the game
    pub fn dispatch(&mut self, event: &Event, area: Rect) -> Flow {
        if let Event::Key(key) = event {
            if key.kind != KeyEventKind::Press {
                return Flow::Continue;
            }
            let ctrl_c = key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);
            if key.code == KeyCode::Esc || ctrl_c {
                return Flow::Quit;
            }
        }
        self.game.handle_input(event, area)
    }
}
