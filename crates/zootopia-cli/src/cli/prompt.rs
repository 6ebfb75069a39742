//! Interactive prompts. Generic over reader/writer so tests can drive them.

use std::io::{self, BufRead, Write};

use zootopia_core::filter::SkinSelection;

/// Input that ends the program like an explicit quit.
const QUIT: &str = "q";

/// Reads one line. `None` on EOF or a read failure (treated as quit).
fn read_answer<R: BufRead>(input: &mut R) -> Option<String> {
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim().to_string()),
        Err(e) => {
            tracing::debug!("prompt read failed: {}", e);
            None
        }
    }
}

/// Asks for an animal name until a non-empty one is given.
/// `None` means quit: `q`/`Q`, end of input, or a read failure.
pub fn prompt_animal_name<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<Option<String>> {
    loop {
        write!(out, "Enter a name of an animal (or 'q' to quit): ")?;
        out.flush()?;
        let Some(answer) = read_answer(input) else {
            writeln!(out)?;
            return Ok(None);
        };
        if answer.eq_ignore_ascii_case(QUIT) {
            return Ok(None);
        }
        if answer.is_empty() {
            writeln!(out, "Animal name cannot be empty. Please try again.")?;
            continue;
        }
        return Ok(Some(answer));
    }
}

/// Lists the skin types and asks for one. Accepts `0`/`all`, a listed number,
/// or a skin type name (case-insensitive, Unicode-aware like the filter). `None` on quit or end of input.
pub fn prompt_skin_selection<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    skin_types: &[String],
) -> io::Result<Option<SkinSelection>> {
    writeln!(out, "Available skin types:")?;
    writeln!(out, "0. Show all animals (ignore skin type)")?;
    for (i, skin) in skin_types.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, skin)?;
    }

    loop {
        write!(out, "\nEnter the skin type you want to filter by: ")?;
        out.flush()?;
        let Some(answer) = read_answer(input) else {
            writeln!(out)?;
            return Ok(None);
        };
        if answer.eq_ignore_ascii_case(QUIT) {
            return Ok(None);
        }
        if answer == "0" || answer.eq_ignore_ascii_case("all") {
            return Ok(Some(SkinSelection::All));
        }
        let wanted = answer.to_lowercase();
        if let Some(skin) = skin_types.iter().find(|s| s.to_lowercase() == wanted) {
            return Ok(Some(SkinSelection::Only(skin.clone())));
        }
        if let Ok(n) = answer.parse::<usize>() {
            if (1..=skin_types.len()).contains(&n) {
                return Ok(Some(SkinSelection::Only(skin_types[n - 1].clone())));
            }
        }
        writeln!(out, "Invalid selection. Please choose from the listed skin types.")?;
    }
}
