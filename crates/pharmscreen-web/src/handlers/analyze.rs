//! The single-page front-end: paste-or-upload both inputs, trigger the
//! analyser as a subprocess, and render the report table with a pass/fail
//! glyph. Pasted text wins over an uploaded file when both are supplied.

use crate::state::SharedState;
use axum::{
    extract::{Multipart, State},
    response::Html,
};
use pharmscreen::core::io::report;
use pharmscreen::core::models::pair::PairRecord;
use tokio::process::Command;
use tracing::{error, info, warn};

pub async fn index(State(state): State<SharedState>) -> Html<String> {
    Html(render_page(&state, None, None).await)
}

pub async fn run_analysis(
    State(state): State<SharedState>,
    multipart: Multipart,
) -> Html<String> {
    let inputs = match collect_inputs(multipart).await {
        Ok(inputs) => inputs,
        Err(message) => return Html(render_page(&state, Some(Banner::error(&message)), None).await),
    };

    let (Some(drug_input), Some(protein_input)) = (inputs.drugs, inputs.proteins) else {
        let banner = Banner::error("Both a drug table and a protein FASTA are required. Paste or upload each one.");
        return Html(render_page(&state, Some(banner), None).await);
    };

    if let Err(e) = tokio::fs::write(state.drugs_path(), &drug_input).await {
        let banner = Banner::error(&format!("Failed to save drug.csv: {e}"));
        return Html(render_page(&state, Some(banner), None).await);
    }
    if let Err(e) = tokio::fs::write(state.proteins_path(), &protein_input).await {
        let banner = Banner::error(&format!("Failed to save proteins.fasta: {e}"));
        return Html(render_page(&state, Some(banner), None).await);
    }

    info!(analyser = %state.analyser_bin.display(), "Launching analysis run.");
    // The front-end blocks on the subprocess until it completes or fails;
    // there is no timeout or cancellation.
    let output = Command::new(&state.analyser_bin)
        .arg("screen")
        .current_dir(&state.work_dir)
        .output()
        .await;

    let output = match output {
        Ok(output) => output,
        Err(e) => {
            error!("Failed to launch analyser: {e}");
            let banner = Banner::error(&format!(
                "Failed to launch '{}': {e}",
                state.analyser_bin.display()
            ));
            return Html(render_page(&state, Some(banner), None).await);
        }
    };

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        warn!(status = %output.status, "Analysis run failed.");
        let banner = Banner::error_with_details("Error running analysis!", &stderr);
        return Html(render_page(&state, Some(banner), None).await);
    }

    match report::read_report(&state.report_path()) {
        Ok(rows) => {
            let banner = Banner::success(&format!("Analysis complete! {} pairing(s).", rows.len()));
            Html(render_page(&state, Some(banner), Some(&rows)).await)
        }
        Err(_) if !state.report_path().exists() => {
            Html(render_page(&state, Some(Banner::error("output.csv not found!")), None).await)
        }
        Err(e) => {
            let banner = Banner::error(&format!("Failed to read output.csv: {e}"));
            Html(render_page(&state, Some(banner), None).await)
        }
    }
}

// ── Multipart input collection ───────────────────────────────────────────────

struct RunInputs {
    drugs: Option<String>,
    proteins: Option<String>,
}

async fn collect_inputs(mut multipart: Multipart) -> Result<RunInputs, String> {
    let mut drug_text = String::new();
    let mut protein_text = String::new();
    let mut drug_file = String::new();
    let mut protein_file = String::new();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => return Err(format!("Malformed upload: {e}")),
        };
        let name = field.name().unwrap_or_default().to_string();
        let value = field
            .text()
            .await
            .map_err(|e| format!("Failed to read field '{name}': {e}"))?;
        match name.as_str() {
            "drug_text" => drug_text = value,
            "protein_text" => protein_text = value,
            "drug_file" => drug_file = value,
            "protein_file" => protein_file = value,
            _ => {}
        }
    }

    let pick = |pasted: String, uploaded: String| {
        if !pasted.trim().is_empty() {
            Some(pasted)
        } else if !uploaded.trim().is_empty() {
            Some(uploaded)
        } else {
            None
        }
    };

    Ok(RunInputs {
        drugs: pick(drug_text, drug_file),
        proteins: pick(protein_text, protein_file),
    })
}

// ── Banners ──────────────────────────────────────────────────────────────────

struct Banner {
    class: &'static str,
    message: String,
    details: Option<String>,
}

impl Banner {
    fn success(message: &str) -> Self {
        Self {
            class: "banner-success",
            message: message.to_string(),
            details: None,
        }
    }

    fn error(message: &str) -> Self {
        Self {
            class: "banner-error",
            message: message.to_string(),
            details: None,
        }
    }

    fn error_with_details(message: &str, details: &str) -> Self {
        Self {
            class: "banner-error",
            message: message.to_string(),
            details: Some(details.to_string()),
        }
    }

    fn render(&self) -> String {
        let details = match &self.details {
            Some(text) => format!("<pre class=\"diagnostics\">{}</pre>", escape_html(text)),
            None => String::new(),
        };
        format!(
            r#"<div class="banner {}">{}{}</div>"#,
            self.class,
            escape_html(&self.message),
            details
        )
    }
}

// ── Renderer ─────────────────────────────────────────────────────────────────

async fn render_page(
    state: &SharedState,
    banner: Option<Banner>,
    rows: Option<&[PairRecord]>,
) -> String {
    let banner_html = banner.map(|b| b.render()).unwrap_or_default();
    let results_html = rows.map(render_results).unwrap_or_default();
    let log_html = render_log_tail(state).await;

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Drug-Target Descriptor Analyzer</title>
    <style>
        body {{ font-family: system-ui, sans-serif; margin: 2rem auto; max-width: 1200px; padding: 0 1rem; color: #1c2530; }}
        h1 {{ font-size: 1.6rem; }}
        fieldset {{ border: 1px solid #cfd8e3; border-radius: 6px; margin-bottom: 1rem; }}
        textarea {{ width: 100%; min-height: 120px; font-family: monospace; box-sizing: border-box; }}
        .hint {{ color: #5b6b7c; font-size: 0.85rem; }}
        .banner {{ padding: 0.75rem 1rem; border-radius: 6px; margin: 1rem 0; }}
        .banner-success {{ background: #e4f5e9; border: 1px solid #3f9e5a; }}
        .banner-error {{ background: #fbe9e7; border: 1px solid #c0392b; }}
        .diagnostics {{ background: #1c2530; color: #f0f3f6; padding: 0.75rem; overflow-x: auto; }}
        table {{ border-collapse: collapse; width: 100%; font-size: 0.85rem; }}
        th, td {{ border: 1px solid #cfd8e3; padding: 0.3rem 0.5rem; text-align: left; white-space: nowrap; }}
        th {{ background: #eef2f7; }}
        .glyph {{ text-align: center; }}
        pre.logfile {{ background: #f4f6f9; border: 1px solid #cfd8e3; padding: 0.75rem; overflow-x: auto; font-size: 0.8rem; }}
        button {{ padding: 0.5rem 1.5rem; font-size: 1rem; }}
    </style>
</head>
<body>
    <h1>Drug-Target Descriptor Analyzer</h1>
    {banner_html}
    <form method="POST" action="/run" enctype="multipart/form-data">
        <fieldset>
            <legend>Drugs</legend>
            <textarea name="drug_text" placeholder="Paste drug.csv content here (Name,SMILES)"></textarea>
            <p class="hint">Or upload drug.csv (pasted text wins): <input type="file" name="drug_file" accept=".csv"></p>
        </fieldset>
        <fieldset>
            <legend>Proteins</legend>
            <textarea name="protein_text" placeholder="Paste proteins.fasta content here (FASTA format)"></textarea>
            <p class="hint">Or upload proteins.fasta (pasted text wins): <input type="file" name="protein_file" accept=".fasta,.fa"></p>
        </fieldset>
        <button type="submit">Run Analysis</button>
    </form>
    {results_html}
    {log_html}
</body>
</html>"#
    )
}

fn render_results(rows: &[PairRecord]) -> String {
    let body: String = rows.iter().map(render_row).collect();
    format!(
        r#"
    <h2>Results</h2>
    <p><a href="/output.csv" download>Download output.csv</a></p>
    <table>
        <thead>
            <tr>
                <th>Drug_Name</th><th>SMILES</th><th>MolWeight</th><th>LogP</th>
                <th>HBD</th><th>HBA</th><th>RotBonds</th><th>TPSA</th>
                <th>Protein_ID</th><th>Protein_Length</th><th>Protein_MW</th>
                <th>Aromaticity</th><th>Instability</th><th>pI</th>
                <th>Score</th><th>Lipinski_Pass</th><th>Lipinski</th>
            </tr>
        </thead>
        <tbody>{body}</tbody>
    </table>"#
    )
}

fn render_row(row: &PairRecord) -> String {
    let glyph = if row.lipinski_pass { "✅" } else { "❌" };
    format!(
        r#"<tr>
            <td>{}</td><td>{}</td><td>{}</td><td>{}</td>
            <td>{}</td><td>{}</td><td>{}</td><td>{}</td>
            <td>{}</td><td>{}</td><td>{:.2}</td>
            <td>{:.4}</td><td>{:.2}</td><td>{:.2}</td>
            <td>{}</td><td>{}</td><td class="glyph">{}</td>
        </tr>"#,
        escape_html(&row.drug_name),
        escape_html(&row.smiles),
        fmt_opt(row.mol_weight, 3),
        fmt_opt(row.log_p, 3),
        fmt_opt_count(row.h_donors),
        fmt_opt_count(row.h_acceptors),
        fmt_opt_count(row.rotatable_bonds),
        fmt_opt(row.tpsa, 2),
        escape_html(&row.protein_id),
        row.protein_length,
        row.protein_mw,
        row.aromaticity,
        row.instability,
        row.isoelectric_point,
        fmt_opt(row.score, 2),
        row.lipinski_pass,
        glyph,
    )
}

async fn render_log_tail(state: &SharedState) -> String {
    const TAIL_LINES: usize = 40;

    let Ok(content) = tokio::fs::read_to_string(state.log_path()).await else {
        return String::new();
    };
    let lines: Vec<&str> = content.lines().collect();
    let start = lines.len().saturating_sub(TAIL_LINES);
    format!(
        r#"
    <h2>Log File</h2>
    <pre class="logfile">{}</pre>"#,
        escape_html(&lines[start..].join("\n"))
    )
}

fn fmt_opt(value: Option<f64>, decimals: usize) -> String {
    value
        .map(|v| format!("{v:.decimals$}"))
        .unwrap_or_default()
}

fn fmt_opt_count(value: Option<usize>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row(pass: bool) -> PairRecord {
        PairRecord {
            drug_name: "Aspirin".into(),
            smiles: "CC(=O)OC1=CC=CC=C1C(=O)O".into(),
            mol_weight: pass.then_some(180.16),
            log_p: pass.then_some(1.2),
            h_donors: pass.then_some(1),
            h_acceptors: pass.then_some(4),
            rotatable_bonds: pass.then_some(3),
            tpsa: pass.then_some(63.6),
            protein_id: "sp1".into(),
            protein_length: 20,
            protein_mw: 2395.8,
            aromaticity: 0.1,
            instability: 28.5,
            isoelectric_point: 6.82,
            score: pass.then_some(1.23),
            lipinski_pass: pass,
        }
    }

    #[test]
    fn passing_row_renders_check_glyph() {
        let html = render_row(&sample_row(true));
        assert!(html.contains("✅"));
        assert!(html.contains("Aspirin"));
        assert!(html.contains("180.160"));
    }

    #[test]
    fn failing_row_renders_cross_glyph_and_empty_cells() {
        let html = render_row(&sample_row(false));
        assert!(html.contains("❌"));
        assert!(html.contains("<td></td>"));
        assert!(html.contains("false"));
    }

    #[test]
    fn results_table_includes_download_link() {
        let html = render_results(&[sample_row(true)]);
        assert!(html.contains(r#"href="/output.csv""#));
        assert!(html.contains("<th>Lipinski_Pass</th>"));
    }

    #[test]
    fn html_is_escaped_in_user_data() {
        let mut row = sample_row(true);
        row.drug_name = "<script>alert(1)</script>".into();
        let html = render_row(&row);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
