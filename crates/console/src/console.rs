//! Interactive line-oriented ticket session.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::{debug, warn};

use eyang_core::{
    ConfirmationGate, ConsoleConfig, DeskError, DeskOutcome, FormCollector, FormRequest,
    PromptError, RatingPicker, Ticket, TicketDesk, TicketId, TicketInput, TicketStatus,
    MAX_RATING, MIN_RATING,
};

use crate::command::{Command, CommandError, HELP};
use crate::render::render;

/// Typed at a form prompt to abandon the form.
const CANCEL: &str = ".";

/// Typed at a form prompt to clear the field.
const CLEAR: &str = "-";

/// Answer to a single form field.
enum Field {
    Value(String),
    Cancelled,
}

/// Terminal front-end: renders snapshots and plays every collaborator role
/// the desk needs.
pub struct Console<R, W> {
    input: R,
    output: W,
    config: ConsoleConfig,
    /// Ids in the order of the last rendered list.
    visible: Vec<TicketId>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, config: ConsoleConfig) -> Self {
        Self {
            input,
            output,
            config,
            visible: Vec::new(),
        }
    }

    /// Run until `quit` or end of input.
    pub fn run(&mut self, desk: &TicketDesk) -> Result<()> {
        writeln!(self.output, "Eyang Support Tickets (type 'help' for commands)")?;
        self.show_list(desk)?;

        loop {
            write!(self.output, "{}", self.config.prompt)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                debug!("Input closed");
                break;
            };

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(CommandError::Empty) => continue,
                Err(err) => {
                    writeln!(self.output, "{}", err)?;
                    continue;
                }
            };

            let outcome = match command {
                Command::Quit => break,
                Command::Help => {
                    writeln!(self.output, "{}", HELP)?;
                    continue;
                }
                Command::List => {
                    self.show_list(desk)?;
                    continue;
                }
                Command::Add => desk.create(self),
                Command::Edit(n) => match self.ticket_at(n)? {
                    Some(id) => desk.edit(&id, self),
                    None => continue,
                },
                Command::Delete(n) => match self.ticket_at(n)? {
                    Some(id) => desk.delete(&id, self),
                    None => continue,
                },
                Command::Rate(n) => match self.ticket_at(n)? {
                    Some(id) => desk.rate(&id, self),
                    None => continue,
                },
            };

            match outcome {
                Ok(outcome) => self.report(desk, outcome)?,
                Err(DeskError::Prompt(PromptError::Closed)) => {
                    debug!("Input closed mid-prompt");
                    break;
                }
                Err(DeskError::Prompt(err)) => return Err(err.into()),
                Err(DeskError::Ticket(err)) => {
                    warn!(error = %err, "Ticket operation refused");
                    writeln!(self.output, "Error: {}", err)?;
                }
            }
        }

        writeln!(self.output, "Bye.")?;
        Ok(())
    }

    fn report(&mut self, desk: &TicketDesk, outcome: DeskOutcome) -> Result<()> {
        match outcome {
            DeskOutcome::Saved(ticket) => {
                writeln!(self.output, "Saved \"{}\".", ticket.title)?;
            }
            DeskOutcome::Deleted(ticket) => {
                writeln!(self.output, "Deleted \"{}\".", ticket.title)?;
            }
            DeskOutcome::Cancelled => {
                writeln!(self.output, "Cancelled.")?;
                return Ok(());
            }
        }
        self.show_list(desk)
    }

    fn show_list(&mut self, desk: &TicketDesk) -> Result<()> {
        let tickets = desk.tickets()?;
        self.visible = tickets.iter().map(|t| t.id.clone()).collect();
        render(self.config.format, &tickets, &mut self.output)?;
        Ok(())
    }

    /// Map a list position to a ticket id, telling the user if there is none.
    fn ticket_at(&mut self, n: usize) -> Result<Option<TicketId>> {
        let id = self.visible.get(n - 1).cloned();
        if id.is_none() {
            writeln!(self.output, "No ticket #{} in the list. Try 'list'.", n)?;
        }
        Ok(id)
    }

    /// Next input line without its line ending, `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>, PromptError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn ask(&mut self, question: &str) -> Result<String, PromptError> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;
        self.read_line()?.ok_or(PromptError::Closed)
    }

    fn ask_field(&mut self, label: &str, current: &str) -> Result<Field, PromptError> {
        let question = if current.is_empty() {
            format!("{}: ", label)
        } else {
            format!("{} [{}]: ", label, current)
        };
        let answer = self.ask(&question)?;
        let field = match answer.trim() {
            CANCEL => Field::Cancelled,
            CLEAR => Field::Value(String::new()),
            "" => Field::Value(current.to_string()),
            _ => Field::Value(answer),
        };
        Ok(field)
    }

    fn ask_status(&mut self, current: TicketStatus) -> Result<Option<TicketStatus>, PromptError> {
        let choices: Vec<String> = TicketStatus::ALL
            .iter()
            .enumerate()
            .map(|(i, status)| format!("{}) {}", i + 1, status))
            .collect();
        writeln!(self.output, "  {}", choices.join("  "))?;

        loop {
            let answer = self.ask(&format!("Status [{}]: ", current))?;
            let answer = answer.trim();
            if answer == CANCEL {
                return Ok(None);
            }
            if answer.is_empty() {
                return Ok(Some(current));
            }

            let picked = match answer.parse::<usize>() {
                Ok(n) if (1..=TicketStatus::ALL.len()).contains(&n) => {
                    Some(TicketStatus::ALL[n - 1])
                }
                Ok(_) => None,
                Err(_) => answer.parse::<TicketStatus>().ok(),
            };
            match picked {
                Some(status) => return Ok(Some(status)),
                None => writeln!(self.output, "Unknown status: {}", answer)?,
            }
        }
    }
}

impl<R: BufRead, W: Write> FormCollector for Console<R, W> {
    fn collect(&mut self, request: FormRequest) -> Result<Option<TicketInput>, PromptError> {
        writeln!(self.output, "-- {} --", request.mode.heading())?;
        if let Some(err) = &request.error {
            writeln!(self.output, "Error: {}", err)?;
        }

        let initial = request.initial;
        let Field::Value(title) = self.ask_field("Title", &initial.title)? else {
            return Ok(None);
        };
        let Field::Value(description) = self.ask_field("Details", &initial.description)? else {
            return Ok(None);
        };
        let Some(status) = self.ask_status(initial.status)? else {
            return Ok(None);
        };

        Ok(Some(TicketInput {
            title,
            description,
            status,
        }))
    }
}

impl<R: BufRead, W: Write> ConfirmationGate for Console<R, W> {
    fn confirm(&mut self, message: &str) -> Result<bool, PromptError> {
        let answer = self.ask(&format!("{} [y/N]: ", message))?;
        Ok(matches!(
            answer.trim().to_ascii_lowercase().as_str(),
            "y" | "yes"
        ))
    }
}

impl<R: BufRead, W: Write> RatingPicker for Console<R, W> {
    fn pick(&mut self, ticket: &Ticket) -> Result<Option<u8>, PromptError> {
        let question = format!(
            "Rate \"{}\" ({}-{}, blank to cancel): ",
            ticket.title, MIN_RATING, MAX_RATING
        );
        loop {
            let answer = self.ask(&question)?;
            let answer = answer.trim();
            if answer.is_empty() || answer == CANCEL {
                return Ok(None);
            }
            match answer.parse::<u8>() {
                Ok(rating) => return Ok(Some(rating)),
                Err(_) => writeln!(
                    self.output,
                    "Please enter a number from {} to {}",
                    MIN_RATING, MAX_RATING
                )?,
            }
        }
    }
}
