//! Interactive prompts for paragraph and question count input

use std::io::BufRead;

/// Display a prompt on standard error and read one line from standard
/// input
///
/// The returned line is trimmed. End of input yields an empty string.
/// Prompts go to standard error so standard output stays clean for the
/// quiz itself.
///
/// # Errors
///
/// Returns an error if standard input cannot be read.
#[allow(clippy::print_stderr)]
pub fn read_line(prompt: &'static str) -> crate::io::error::Result<String> {
    eprint!("{prompt}");
    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| crate::io::error::QuizError::Prompt { prompt, source: e })?;
    Ok(line.trim().to_string())
}

/// Prompt for a question count, falling back to a default on empty
/// input
///
/// # Errors
///
/// Returns an error if standard input cannot be read or the reply is
/// not a non-negative integer.
pub fn read_question_count(
    prompt: &'static str,
    default: usize,
) -> crate::io::error::Result<usize> {
    let line = read_line(prompt)?;
    parse_question_count(&line, default)
}

/// Interpret a question count reply, falling back to a default on
/// empty input
///
/// # Errors
///
/// Returns an error if the reply is not a non-negative integer.
pub fn parse_question_count(reply: &str, default: usize) -> crate::io::error::Result<usize> {
    let reply = reply.trim();
    if reply.is_empty() {
        return Ok(default);
    }
    reply.parse().map_err(|e: std::num::ParseIntError| {
        crate::io::error::invalid_parameter("question count", &reply, &e)
    })
}
