use knights_tour_core::Tour;
use std::io::{self, Write};

/// One line per square, numbered from 1, then a summary line
pub fn write_plain<W: Write>(out: &mut W, tour: &Tour) -> io::Result<()> {
    for (step, square) in tour.path.iter().enumerate() {
        writeln!(out, "{:>4}: {}", step + 1, square)?;
    }
    writeln!(
        out,
        "{}x{} tour, {} moves, {}, found on attempt {}",
        tour.size,
        tour.size,
        tour.move_count(),
        if tour.closed { "closed" } else { "open" },
        tour.attempt
    )
}

pub fn write_json<W: Write>(out: &mut W, tour: &Tour) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, tour)?;
    writeln!(out)
}
