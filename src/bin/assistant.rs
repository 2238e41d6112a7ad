use std::io::{self, BufRead, Write};

use anyhow::Result;
use portfoliobase::assistant::AssistantSession;
use portfoliobase::prefs::PreferenceStore;

/// Terminal front end for the portfolio assistant. Lines are chat input;
/// `:theme` cycles the saved theme, `:lang` toggles the saved language,
/// `:quit` exits.
fn main() -> Result<()> {
    let mut prefs = PreferenceStore::open_default()?;
    let mut session = AssistantSession::new();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", session.transcript()[0].text)?;
    writeln!(
        out,
        "(theme: {}, language: {})",
        prefs.theme().display_name(),
        prefs.language().slug()
    )?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        match line.trim() {
            ":quit" | ":q" => break,
            ":theme" => {
                let theme = prefs.cycle_theme()?;
                writeln!(out, "Theme saved: {}", theme.display_name())?;
            }
            ":lang" => {
                let language = prefs.toggle_language()?;
                writeln!(out, "Language saved: {}", language.slug())?;
            }
            _ => {
                if let Some(reply) = session.send(&line) {
                    writeln!(out, "Maan: {}", reply.text)?;
                }
            }
        }
        out.flush()?;
    }

    Ok(())
}
