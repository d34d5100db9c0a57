use std::error::Error;

use braid_kernel::{performable_moves, BraidMove, BraidWord};
use braid_notation::{parse_word, KnotTable};
use tracing::debug;

/// JSON output structure for each step
#[derive(serde::Serialize)]
struct StepOutput {
    step: usize,
    #[serde(rename = "move")]
    applied: String,
    word: Vec<i32>,
    strand_count: i32,
}

/// Runs the CLI mode
pub fn run_cli() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage(&args[0]);
        std::process::exit(1);
    }

    let mut table_path: Option<String> = None;
    let mut word_text: Option<String> = None;
    let mut knot_name: Option<String> = None;
    let mut notation_index = 0usize;
    let mut list = false;
    let mut specs: Vec<String> = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--table" if i + 1 < args.len() => {
                table_path = Some(args[i + 1].clone());
                i += 2;
            }
            "--word" if i + 1 < args.len() => {
                word_text = Some(args[i + 1].clone());
                i += 2;
            }
            "--knot" if i + 1 < args.len() => {
                knot_name = Some(args[i + 1].clone());
                i += 2;
            }
            "--notation" if i + 1 < args.len() => {
                notation_index = args[i + 1].parse()?;
                i += 2;
            }
            "--list" => {
                list = true;
                i += 1;
            }
            "--apply" => {
                // Everything after --apply is a move spec.
                specs.extend(args[i + 1..].iter().cloned());
                i = args.len();
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage(&args[0]);
                std::process::exit(1);
            }
        }
    }

    let word = resolve_word(word_text, knot_name, table_path, notation_index)?;
    debug!(
        len = word.len(),
        strands = word.strand_count(),
        "resolved input word"
    );

    if list {
        let moves = performable_moves(&word);
        debug!(count = moves.len(), "listing performable moves");
        for (i, mv) in moves.iter().enumerate() {
            let next = mv.apply(&word)?;
            emit(i + 1, &mv.to_string(), &next)?;
        }
        return Ok(());
    }

    let mut current = word;
    emit(0, "input", &current)?;
    for (i, spec) in specs.iter().enumerate() {
        let mv = parse_move_spec(spec)?;
        current = mv.apply(&current)?;
        emit(i + 1, &mv.to_string(), &current)?;
    }

    Ok(())
}

/// Resolves the input word from `--word` text or a `--knot` table lookup.
fn resolve_word(
    word_text: Option<String>,
    knot_name: Option<String>,
    table_path: Option<String>,
    notation_index: usize,
) -> Result<BraidWord, Box<dyn Error>> {
    match (word_text, knot_name) {
        (Some(text), None) => Ok(parse_word(&text)?),
        (None, Some(name)) => {
            let path = table_path.ok_or("--knot requires --table <csv>")?;
            let table = KnotTable::from_path(&path)?;
            debug!(knots = table.len(), table = %path, "loaded knot table");
            let notations = table
                .get(&name)
                .ok_or_else(|| format!("knot '{}' not found in {}", name, path))?;
            let word = notations.get(notation_index).ok_or_else(|| {
                format!(
                    "knot '{}' has {} notation(s), index {} is out of range",
                    name,
                    notations.len(),
                    notation_index
                )
            })?;
            Ok(word.clone())
        }
        (Some(_), Some(_)) => Err("--word and --knot are mutually exclusive".into()),
        (None, None) => Err("one of --word or --knot is required".into()),
    }
}

/// Parses a move spec of the form `name:args`, e.g. `braid_relation1:0`,
/// `conjugation:3,0` or `stabilization:1,top,inverse`.
fn parse_move_spec(spec: &str) -> Result<BraidMove, Box<dyn Error>> {
    let (name, rest) = spec.split_once(':').unwrap_or((spec, ""));
    let parts: Vec<&str> = rest.split(',').filter(|p| !p.is_empty()).collect();

    let index_at = |position: usize| -> Result<usize, Box<dyn Error>> {
        let token = parts
            .get(position)
            .ok_or_else(|| format!("move '{}' is missing an index", name))?;
        Ok(token.trim().parse()?)
    };

    match name {
        "shift_left" | "shift_right" => {
            let amount = if parts.is_empty() { 1 } else { index_at(0)? };
            if name == "shift_left" {
                Ok(BraidMove::ShiftLeft { amount })
            } else {
                Ok(BraidMove::ShiftRight { amount })
            }
        }
        "braid_relation1" => Ok(BraidMove::BraidRelation1 { index: index_at(0)? }),
        "braid_relation2" => Ok(BraidMove::BraidRelation2 { index: index_at(0)? }),
        "conjugation" => {
            let value = parts
                .first()
                .ok_or_else(|| format!("move '{}' is missing a value", name))?
                .trim()
                .parse::<i32>()?;
            Ok(BraidMove::Conjugation {
                value,
                index: index_at(1)?,
            })
        }
        "stabilization" => {
            let index = index_at(0)?;
            let mut on_top = false;
            let mut inverse = false;
            for flag in &parts[1..] {
                match flag.trim() {
                    "top" => on_top = true,
                    "inverse" => inverse = true,
                    other => return Err(format!("unknown stabilization flag '{}'", other).into()),
                }
            }
            Ok(BraidMove::Stabilization {
                index,
                on_top,
                inverse,
            })
        }
        "destabilization" => Ok(BraidMove::Destabilization { index: index_at(0)? }),
        "remove_sigma_inverse_pair" => Ok(BraidMove::RemoveSigmaInversePair {
            index: index_at(0)?,
        }),
        other => Err(format!("unknown move '{}'", other).into()),
    }
}

fn emit(step: usize, applied: &str, word: &BraidWord) -> Result<(), Box<dyn Error>> {
    let output = StepOutput {
        step,
        applied: applied.to_string(),
        word: word.to_vec(),
        strand_count: word.strand_count(),
    };
    println!("{}", serde_json::to_string(&output)?);
    Ok(())
}

fn print_usage(program: &str) {
    eprintln!(
        "Usage: {} (--word \"1 -2 3\" | --knot 4_1 --table knots.csv [--notation N]) [--list | --apply MOVE...]",
        program
    );
    eprintln!("Moves: shift_left:N shift_right:N braid_relation1:I braid_relation2:I");
    eprintln!("       conjugation:V,I stabilization:I[,top][,inverse] destabilization:I");
    eprintln!("       remove_sigma_inverse_pair:I");
}
