//! Terminal front end: stdin confirmation, stderr notices, plain-text table.

use super::{Confirmation, Notice, Prompt};
use crate::model::Empleado;
use async_trait::async_trait;
use std::fmt::Write as _;
use std::io::Write as _;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::warn;

/// Asks on stderr and reads the answer from stdin.
pub struct TerminalPrompt {
    assume_yes: bool,
}

impl TerminalPrompt {
    /// `assume_yes` answers every question with yes without asking.
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }

    /// Print a notice on stderr.
    pub fn alert(notice: &Notice) {
        eprintln!("{}: {}", notice.title, notice.text);
    }
}

#[async_trait]
impl Prompt for TerminalPrompt {
    async fn confirm(&self, confirmation: &Confirmation) -> bool {
        if self.assume_yes {
            return true;
        }

        eprint!(
            "{} {} ({}) [s/N]: ",
            confirmation.title, confirmation.text, confirmation.confirm_label
        );
        let _ = std::io::stderr().flush();

        let mut line = String::new();
        let mut reader = BufReader::new(tokio::io::stdin());
        match reader.read_line(&mut line).await {
            Ok(_) => is_yes(&line),
            Err(e) => {
                warn!(error = %e, "Could not read confirmation");
                false
            }
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "s" | "si" | "sí" | "y" | "yes"
    )
}

/// Render the collection as an aligned text table.
pub fn render_table(empleados: &[Empleado]) -> String {
    let rows: Vec<[String; 4]> = empleados
        .iter()
        .map(|e| {
            [
                e.id_empleado.map(|id| id.to_string()).unwrap_or_default(),
                e.nombre.clone(),
                e.correo.clone(),
                e.sueldo.to_string(),
            ]
        })
        .collect();

    let header = ["Id", "Nombre", "Correo", "Sueldo"].map(String::from);
    let mut widths = header.clone().map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for row in std::iter::once(&header).chain(rows.iter()) {
        let line: Vec<String> = row
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect();
        let _ = writeln!(out, "{}", line.join("  ").trim_end());
    }
    out
}
