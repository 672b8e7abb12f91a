use std::fmt::Display;
use std::io::{self, Write};

pub const USER_LABEL: &str = "You: ";
pub const ASSISTANT_LABEL: &str = "Assistant: ";
pub const ERROR_MARKER: &str = "❌ Error:";
pub const FAREWELL: &str = "👋 Stay healthy! Goodbye.";

pub fn banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "🩺 Welcome to the Doctor AI Assistant CLI!")?;
    writeln!(out, "Ask your health-related questions. Type 'exit' to quit.")?;
    writeln!(out)?;
    out.flush()
}

pub fn prompt<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "{USER_LABEL}")?;
    out.flush()
}

pub fn reply<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{ASSISTANT_LABEL}{text}")?;
    writeln!(out)?;
    out.flush()
}

pub fn error<W: Write>(out: &mut W, err: &dyn Display) -> io::Result<()> {
    writeln!(out, "{ERROR_MARKER} {err}")?;
    out.flush()
}

pub fn farewell<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{FAREWELL}")?;
    out.flush()
}
