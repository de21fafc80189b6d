//! Rendering of questions into printable text blocks

use crate::quiz::question::Question;

/// Render one question as a numbered block with its answer-letter line
///
/// The block carries the prompt line, one numbered line per option and
/// a closing line naming the correct options by letter, `(a)` for the
/// first displayed option. When two options share a text, the letter
/// of the first match is reported.
pub fn format_question(question: &Question, index: usize) -> String {
    let mut block = format!("Q{index}: {}\n", question.prompt());
    for (position, option) in question.options().iter().enumerate() {
        block.push_str(&format!("{}. {option}\n", position + 1));
    }

    let letters: Vec<String> = question
        .correct_answers()
        .iter()
        .map(|answer| {
            let position = question
                .options()
                .iter()
                .position(|option| option == answer)
                .unwrap_or(0);
            format!("({})", letter_for(position))
        })
        .collect();
    block.push_str(&format!("Correct Options: {}", letters.join(" & ")));
    block
}

/// Render a question sequence as blocks separated by blank lines
pub fn format_quiz(questions: &[Question]) -> String {
    questions
        .iter()
        .enumerate()
        .map(|(index, question)| format_question(question, index + 1))
        .collect::<Vec<_>>()
        .join("\n\n")
}

const fn letter_for(position: usize) -> char {
    (b'a' + position as u8) as char
}
