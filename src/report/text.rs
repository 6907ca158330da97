use crate::display::short_name;
use crate::views::ViewBundle;
use crate::views::matrix::MatrixView;

pub fn render_report_text(bundle: &ViewBundle) -> String {
    let mut out = String::new();

    out.push_str("Model Evaluation Report\n");
    out.push_str("=======================\n\n");

    out.push_str(&format!(
        "1. Leaderboard ({} evaluations)\n",
        bundle.n_records
    ));
    for row in &bundle.summary.rows {
        let rank = match row.rank {
            Some(r) => format!("#{r}"),
            None => "  ".to_string(),
        };
        out.push_str(&format!(
            "{} {:<28} {:>6} ({} evals)\n",
            rank,
            short_name(&row.model),
            fmt1(row.total),
            row.count
        ));
    }
    out.push('\n');

    out.push_str("2. Insights\n");
    if let Some(insights) = &bundle.insights {
        out.push_str(&format!(
            "Top performer: {} ({})\n",
            short_name(&insights.top_performer.model),
            fmt1(insights.top_performer.value)
        ));
        out.push_str(&format!(
            "Lowest performer: {} ({})\n",
            short_name(&insights.lowest_performer.model),
            fmt1(insights.lowest_performer.value)
        ));
        if let Some(tm) = &insights.top_metric {
            out.push_str(&format!(
                "{} leader: {} ({}/{})\n",
                tm.label,
                short_name(&tm.model),
                fmt1(tm.mean),
                fmt1(tm.max_weight)
            ));
        }
        out.push_str(&format!(
            "Verdict: {}\n",
            performance_statement(insights.top_performer.value)
        ));
    } else {
        out.push_str("No evaluations available.\n");
    }
    out.push('\n');

    out.push_str("3. Totals by prompt\n");
    render_matrix(&mut out, &bundle.breakdown);
    out.push('\n');

    out.push_str("4. Totals by evaluator\n");
    render_matrix(&mut out, &bundle.evaluators);

    out
}

fn render_matrix(out: &mut String, matrix: &MatrixView) {
    let mut header = format!("{:<24}", "");
    for col in &matrix.columns {
        header.push_str(&format!(" {:>12}", truncate(&short_name(col), 12)));
    }
    out.push_str(&header);
    out.push('\n');
    for row in &matrix.rows {
        let mut line = format!("{:<24}", truncate(&short_name(&row.label), 24));
        for cell in &row.cells {
            line.push_str(&format!(" {:>12}", fmt_opt(cell.mean)));
        }
        out.push_str(&line);
        out.push('\n');
    }
}

fn performance_statement(top_total: f64) -> &'static str {
    if top_total >= 70.0 {
        "The leading model meets the passing bar."
    } else if top_total >= 50.0 {
        "The leading model is borderline; no model clears the passing bar comfortably."
    } else {
        "No model approaches the passing bar."
    }
}

pub fn fmt1(v: f64) -> String {
    format!("{v:.1}")
}

fn fmt_opt(v: Option<f64>) -> String {
    match v {
        Some(v) => fmt1(v),
        None => "-".to_string(),
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        s.chars().take(max).collect()
    }
}
