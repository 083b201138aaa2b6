use lib::{
    draw::{Draw, format_numbers},
    protocol::{Transcript, format_clock},
};

const BANNER: [&str; 2] = ["Lucky Draw", "=========="];
const ENTRY_PROMPT: &str = "Choose six numbers between 1 and 99, separated by spaces";
const INPUT_MARKER: &str = "> ";

pub(crate) fn welcome() -> String {
    let mut transcript = Transcript::new();
    for line in BANNER {
        transcript.line(line);
    }
    push_entry_prompt(&mut transcript);
    transcript.into_string()
}

pub(crate) fn entry_prompt() -> String {
    let mut transcript = Transcript::new();
    push_entry_prompt(&mut transcript);
    transcript.into_string()
}

pub(crate) fn waiting_for_draw(now_ms: u64, boundary_ms: u64) -> String {
    let mut transcript = Transcript::new();
    transcript
        .blank()
        .line(format!("Current time: {}", format_clock(now_ms)))
        .line(format!("Next draw: {}", format_clock(boundary_ms)));
    transcript.into_string()
}

pub(crate) fn draw_won(draw: &Draw, reward: &str, prompt_again: bool) -> String {
    let mut transcript = draw_result(draw);
    transcript.line("You win!").line(reward);
    if prompt_again {
        push_entry_prompt(&mut transcript);
    }
    transcript.into_string()
}

pub(crate) fn draw_lost(draw: &Draw) -> String {
    let mut transcript = draw_result(draw);
    transcript.line("Better luck next time.");
    push_entry_prompt(&mut transcript);
    transcript.into_string()
}

fn draw_result(draw: &Draw) -> Transcript {
    let mut transcript = Transcript::new();
    transcript.blank().line(format!(
        "Draw result: {}",
        format_numbers(draw.generation_order())
    ));
    transcript
}

fn push_entry_prompt(transcript: &mut Transcript) {
    transcript.blank().line(ENTRY_PROMPT).raw(INPUT_MARKER);
}
