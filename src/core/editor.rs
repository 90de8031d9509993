// pixie-edit/src/core/editor.rs
use super::session::Session;
use super::{EditorError, Result};
use crate::console::Console;
use crate::preview::Preview;
use crate::processors::OperationKind;
use std::io::{BufRead, Write};

pub const EXIT_CHOICE: &str = "8";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Operation(OperationKind),
    Exit,
}

impl MenuChoice {
    pub fn parse(token: &str) -> Option<Self> {
        let token = token.trim();
        if token == EXIT_CHOICE {
            return Some(MenuChoice::Exit);
        }

        let index: usize = token.parse().ok()?;
        OperationKind::ALL
            .get(index.checked_sub(1)?)
            .copied()
            .map(MenuChoice::Operation)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    AwaitingChoice,
    Executing(OperationKind),
    Displaying(OperationKind),
    Exited,
}

/// The interactive menu: owns the session, the console and the preview.
pub struct Editor<R, W, P> {
    session: Session,
    console: Console<R, W>,
    preview: P,
}

impl<R: BufRead, W: Write, P: Preview> Editor<R, W, P> {
    pub fn new(session: Session, console: Console<R, W>, preview: P) -> Self {
        Self {
            session,
            console,
            preview,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn console(&self) -> &Console<R, W> {
        &self.console
    }

    pub fn preview(&self) -> &P {
        &self.preview
    }

    /// Runs until the user picks exit or input runs out.
    pub fn run(&mut self) -> Result<()> {
        let mut state = MenuState::AwaitingChoice;
        while state != MenuState::Exited {
            state = self.step(state)?;
        }

        self.console.say("Exiting...")?;
        Ok(())
    }

    pub fn step(&mut self, state: MenuState) -> Result<MenuState> {
        match state {
            MenuState::AwaitingChoice => self.await_choice(),
            MenuState::Executing(kind) => self.execute(kind),
            MenuState::Displaying(kind) => self.display(kind),
            MenuState::Exited => Ok(MenuState::Exited),
        }
    }

    fn await_choice(&mut self) -> Result<MenuState> {
        self.print_menu()?;

        let token = match self.console.prompt("Enter your choice: ") {
            Ok(token) => token,
            Err(EditorError::InputClosed) => {
                log::debug!("Input closed at menu prompt");
                return Ok(MenuState::Exited);
            }
            Err(e) => return Err(e),
        };

        match MenuChoice::parse(&token) {
            Some(MenuChoice::Operation(kind)) => Ok(MenuState::Executing(kind)),
            Some(MenuChoice::Exit) => Ok(MenuState::Exited),
            None => {
                log::debug!("Rejected menu choice {:?}", token);
                self.console.say("Invalid choice! Please choose again.")?;
                Ok(MenuState::AwaitingChoice)
            }
        }
    }

    fn execute(&mut self, kind: OperationKind) -> Result<MenuState> {
        match self.session.dispatch(kind, &mut self.console) {
            Ok(()) => {}
            Err(EditorError::InputClosed) => return Ok(MenuState::Exited),
            Err(EditorError::Io(e)) => return Err(EditorError::Io(e)),
            Err(e) => {
                log::warn!("{} failed: {}", kind, e);
                self.console
                    .say(format!("Error: {}. The image was left unchanged.", e))?;
            }
        }

        Ok(MenuState::Displaying(kind))
    }

    fn display(&mut self, kind: OperationKind) -> Result<MenuState> {
        if let Err(e) = self
            .preview
            .show(kind.window_title(), self.session.current_image())
        {
            log::warn!("Could not show preview: {}", e);
        }

        Ok(MenuState::AwaitingChoice)
    }

    fn print_menu(&mut self) -> Result<()> {
        self.console.say("\nChoose an operation:")?;
        for (index, kind) in OperationKind::ALL.iter().enumerate() {
            self.console.say(format!("{}. {}", index + 1, kind))?;
        }
        self.console.say(format!("{}. Exit", EXIT_CHOICE))
    }

    pub fn into_session(self) -> Session {
        self.session
    }
}
