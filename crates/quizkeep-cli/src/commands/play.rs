//! The `quizkeep play` command.

use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use quizkeep_core::{random_unit, QuestionRound};

use crate::commands::open_catalog;
use crate::render::{prompt_for, render_round};
use crate::StoreArgs;

/// What the player typed for one question.
enum Answer {
    Keys(Vec<String>),
    Quit,
}

fn parse_answer(line: &str) -> Answer {
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case("q") {
        return Answer::Quit;
    }
    let keys = trimmed
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect();
    Answer::Keys(keys)
}

/// Apply typed keys to a round. On error the round is left unevaluated.
fn apply_answer(round: &mut QuestionRound, keys: &[String]) -> Result<(), String> {
    let mut unique: Vec<&str> = Vec::with_capacity(keys.len());
    for key in keys {
        if !unique.contains(&key.as_str()) {
            unique.push(key);
        }
    }
    if unique.is_empty() {
        return Err("Enter at least one option key.".to_string());
    }
    if !round.shows_submit() && unique.len() > 1 {
        return Err("This is a single-choice question; enter one option key.".to_string());
    }

    let mut attempt = round.clone();
    for key in unique {
        attempt.choose(key).map_err(|e| e.to_string())?;
    }
    attempt.submit();
    *round = attempt;
    Ok(())
}

pub async fn execute(
    store: &StoreArgs,
    quiz_id: String,
    restart: bool,
    seed: Option<u64>,
) -> Result<()> {
    let catalog = open_catalog(store)?;
    let tracker = catalog.progress();

    let mut rng: Box<dyn FnMut() -> f64 + Send> = match seed {
        Some(seed) => {
            let mut seeded = StdRng::seed_from_u64(seed);
            Box::new(move || seeded.gen::<f64>())
        }
        None => Box::new(random_unit),
    };

    tracing::debug!(?seed, restart, "starting play session for '{quiz_id}'");
    if restart && tracker.reset_progress(&quiz_id).await?.is_none() {
        anyhow::bail!("quiz not found: {quiz_id}");
    }

    let mut input = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    let mut answered = 0usize;

    loop {
        let picked = tracker.pick_random_question(&quiz_id, &mut rng).await?;
        let Some(quiz) = picked.quiz else {
            anyhow::bail!("quiz not found: {quiz_id}");
        };
        if picked.remaining == 0 {
            println!("# {} · Finished", quiz.title);
            println!();
            println!("✅ You have finished this quiz.");
            println!("Run `quizkeep play {quiz_id} --restart` to play it again.");
            return Ok(());
        }
        let Some(question) = picked.question else {
            anyhow::bail!(
                "progress for {quiz_id} refers to a question that no longer exists; \
                 run `quizkeep reset {quiz_id}`"
            );
        };

        let question_id = question.id.clone();
        let mut round = QuestionRound::new(question);
        println!("{}", render_round(&quiz.title, &round));
        println!();
        println!("({} remaining)", picked.remaining);

        while !round.is_evaluated() {
            stdout.write_all(prompt_for(&round).as_bytes()).await?;
            stdout.flush().await?;

            let Some(line) = input.next_line().await? else {
                println!();
                println!("Stopped after {answered} question(s). Progress saved.");
                return Ok(());
            };
            match parse_answer(&line) {
                Answer::Quit => {
                    println!("Stopped after {answered} question(s). Progress saved.");
                    return Ok(());
                }
                Answer::Keys(keys) => {
                    if let Err(message) = apply_answer(&mut round, &keys) {
                        println!("{message}");
                    }
                }
            }
        }

        println!();
        println!("{}", render_round(&quiz.title, &round));
        println!();

        tracker.mark_question_played(&quiz_id, &question_id).await?;
        answered += 1;
    }
}
