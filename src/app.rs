use std::{io::Write, str::FromStr};

use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt},
    sync::oneshot,
};

use crate::{
    data_backend::{
        dinner_client::DinnerFetcher,
        dinner_render::{build_screens_msg, build_selector_msg, build_spin_msg, screens},
    },
    data_types::Category,
    errors::MenuParseError,
    selection::CategorySelection,
    spin::SpinHandle,
};

pub const HELP_MSG: &str = "\
Commands:
  1-5 / <category>   toggle a category
  a                  select all
  c                  clear all
  g / <enter>        get dinner
  r                  retry
  l                  show categories
  h                  help
  q                  quit";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MenuCommand {
    Toggle(Category),
    SelectAll,
    ClearAll,
    GetDinner,
    Retry,
    List,
    Help,
    Quit,
}

impl FromStr for MenuCommand {
    type Err = MenuParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim().to_lowercase();

        if let Ok(pos) = input.parse::<usize>() {
            return pos
                .checked_sub(1)
                .and_then(|idx| Category::ALL.get(idx))
                .map(|cat| MenuCommand::Toggle(*cat))
                .ok_or(MenuParseError::NoSuchPosition(pos));
        }

        match input.as_str() {
            "" | "g" | "get" => Ok(MenuCommand::GetDinner),
            "a" | "all" => Ok(MenuCommand::SelectAll),
            "c" | "clear" => Ok(MenuCommand::ClearAll),
            "r" | "retry" => Ok(MenuCommand::Retry),
            "l" | "list" => Ok(MenuCommand::List),
            "h" | "help" | "?" => Ok(MenuCommand::Help),
            "q" | "quit" | "exit" => Ok(MenuCommand::Quit),
            other => other
                .parse::<Category>()
                .map(MenuCommand::Toggle)
                .map_err(|_| MenuParseError::UnknownCommand(s.trim().to_string())),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
}

/// Owns the selection and the fetch state and drives one spin/fetch cycle
/// per request.
pub struct DinnerApp {
    selection: CategorySelection,
    fetcher: DinnerFetcher,
    spin_enabled: bool,
}

impl DinnerApp {
    pub fn new(fetcher: DinnerFetcher) -> Self {
        Self {
            selection: CategorySelection::default(),
            fetcher,
            spin_enabled: true,
        }
    }

    pub fn with_selection(mut self, selection: CategorySelection) -> Self {
        self.selection = selection;
        self
    }

    pub fn with_spin(mut self, enabled: bool) -> Self {
        self.spin_enabled = enabled;
        self
    }

    pub fn selection(&self) -> &CategorySelection {
        &self.selection
    }

    pub fn fetcher(&self) -> &DinnerFetcher {
        &self.fetcher
    }

    pub async fn handle<W: Write>(
        &mut self,
        cmd: MenuCommand,
        out: &mut W,
    ) -> std::io::Result<Outcome> {
        match cmd {
            MenuCommand::Toggle(cat) => {
                self.selection.toggle(cat);
                write!(out, "{}", build_selector_msg(&self.selection))?;
            }
            MenuCommand::SelectAll => {
                self.selection.select_all();
                write!(out, "{}", build_selector_msg(&self.selection))?;
            }
            MenuCommand::ClearAll => {
                self.selection.clear_all();
                write!(out, "{}", build_selector_msg(&self.selection))?;
            }
            MenuCommand::GetDinner | MenuCommand::Retry => {
                self.get_dinner(out).await?;
            }
            MenuCommand::List => write!(out, "{}", build_selector_msg(&self.selection))?,
            MenuCommand::Help => writeln!(out, "{}", HELP_MSG)?,
            MenuCommand::Quit => return Ok(Outcome::Quit),
        }

        Ok(Outcome::Continue)
    }

    /// Spins and fetches concurrently, then shows whatever the fetch state is
    /// once the spin completes. Returns `false` without doing anything when
    /// no category is selected.
    pub async fn get_dinner<W: Write>(&mut self, out: &mut W) -> std::io::Result<bool> {
        if self.selection.is_empty() {
            writeln!(out, "Select at least one category first.")?;
            return Ok(false);
        }

        let categories = self.selection.to_vec();
        log::debug!("Requesting dinner for {:?}", categories);

        let mut fetch = {
            let fetcher = self.fetcher.clone();
            let categories = categories.clone();
            Some(tokio::spawn(async move {
                fetcher.get_random_dinner(&categories).await
            }))
        };

        if self.spin_enabled {
            let (done_tx, mut done_rx) = oneshot::channel();
            let spin = SpinHandle::start(categories, move || {
                let _ = done_tx.send(());
            });

            let mut frames = spin.subscribe();
            loop {
                tokio::select! {
                    _ = &mut done_rx => break,
                    changed = frames.changed() => {
                        if changed.is_err() {
                            break;
                        }
                        let line = build_spin_msg(&frames.borrow_and_update());
                        write!(out, "\r{}", line)?;
                        out.flush()?;
                    }
                }
            }
            writeln!(out)?;

            drop(spin);
        } else if let Some(handle) = fetch.take() {
            if let Err(e) = handle.await {
                log::error!("Dinner fetch task failed: {}", e);
            }
        }

        let state = self.fetcher.snapshot().await;
        write!(out, "{}", build_screens_msg(&screens(&state, false)))?;

        if state.loading {
            if let Some(handle) = fetch.take() {
                if let Err(e) = handle.await {
                    log::error!("Dinner fetch task failed: {}", e);
                }
            }
            let state = self.fetcher.snapshot().await;
            write!(out, "{}", build_screens_msg(&screens(&state, false)))?;
        }

        Ok(true)
    }

    /// One-shot request for non-interactive use. Returns `false` when no
    /// dinner could be shown; the error has already been written to `out`.
    pub async fn run_once<W: Write>(&mut self, out: &mut W) -> std::io::Result<bool> {
        if !self.get_dinner(out).await? {
            return Ok(false);
        }
        let state = self.fetcher.snapshot().await;
        Ok(state.error.is_none() && state.dinner.is_some())
    }

    pub async fn run_menu<R, W>(&mut self, input: R, out: &mut W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        writeln!(out, "🍽️  Sofra")?;
        write!(out, "{}", build_selector_msg(&self.selection))?;
        writeln!(out, "{}", HELP_MSG)?;
        let state = self.fetcher.snapshot().await;
        write!(out, "{}", build_screens_msg(&screens(&state, false)))?;

        let mut lines = input.lines();
        write!(out, "> ")?;
        out.flush()?;
        while let Some(line) = lines.next_line().await? {
            match line.parse::<MenuCommand>() {
                Ok(cmd) => {
                    if self.handle(cmd, out).await? == Outcome::Quit {
                        break;
                    }
                }
                Err(e) => writeln!(out, "{}", e)?,
            }
            write!(out, "> ")?;
            out.flush()?;
        }

        Ok(())
    }
}
