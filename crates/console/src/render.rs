//! Rendering ticket snapshots.

use std::io::{self, Write};

use eyang_core::{OutputFormat, Ticket, MAX_RATING};

/// Render a snapshot in the configured format.
pub fn render<W: Write + ?Sized>(
    format: OutputFormat,
    tickets: &[Ticket],
    out: &mut W,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => render_text(tickets, out),
        OutputFormat::Json => render_json(tickets, out),
    }
}

/// Numbered, human-readable list.
///
/// Only actions that are allowed for a ticket are shown: no edit once
/// completed, rating only for completed tickets.
pub fn render_text<W: Write + ?Sized>(tickets: &[Ticket], out: &mut W) -> io::Result<()> {
    writeln!(out, "All Tickets")?;
    if tickets.is_empty() {
        writeln!(out, "  No tickets yet")?;
        return Ok(());
    }

    for (index, ticket) in tickets.iter().enumerate() {
        let n = index + 1;
        let actions = if ticket.is_editable() {
            "[edit] [delete]"
        } else {
            "[delete]"
        };
        writeln!(out, "{:>3}. {}  {}", n, ticket.title, actions)?;
        if !ticket.description.is_empty() {
            writeln!(out, "     {}", ticket.description)?;
        }
        writeln!(out, "     Status: {}", ticket.status)?;
        if ticket.can_be_rated() {
            if ticket.is_rated() {
                writeln!(out, "     Rating: {}/{}", ticket.rating, MAX_RATING)?;
            } else {
                writeln!(out, "     Rate this ticket: 'rate {}'", n)?;
            }
        }
    }
    Ok(())
}

/// The snapshot as a pretty-printed JSON array.
pub fn render_json<W: Write + ?Sized>(tickets: &[Ticket], out: &mut W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, tickets)?;
    writeln!(out)
}
