use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tokio_util::sync::CancellationToken;

use crate::cli::commands::ScanArgs;
use crate::dashboard::ViewModel;
use crate::errors::VajraError;
use crate::pipeline::ScanPipeline;
use crate::scanner::ExternalScanner;

pub async fn handle_scan(args: ScanArgs, quiet: bool) -> Result<(), VajraError> {
    let path = Path::new(&args.file);
    if !path.exists() {
        return Err(VajraError::InvalidTarget(format!(
            "file not found: {}",
            args.file
        )));
    }

    let scanner = Arc::new(ExternalScanner::new(
        &args.scanner,
        Duration::from_secs(args.timeout),
    ));
    let pipeline = ScanPipeline::new(scanner);

    // Ctrl-C propagates into the invoker and kills the child promptly.
    let cancel = CancellationToken::new();
    let ctrl_c_cancel = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrl_c_cancel.cancel();
        }
    });

    let spinner = if quiet || args.json {
        None
    } else {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
            pb.set_style(style);
        }
        pb.set_message(format!("Scanning {}...", args.file));
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    };

    let outcome = pipeline.run(path, &cancel).await;

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    let outcome = outcome?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome.view).map_err(
            |e| VajraError::Internal(format!("failed to serialize view model: {}", e)),
        )?);
    } else {
        render_report(&outcome.view);
    }

    // Pipeline-gate semantics: findings fail the invocation.
    if !outcome.result.is_empty() {
        std::process::exit(1);
    }

    Ok(())
}

fn render_report(view: &ViewModel) {
    println!();
    println!(
        "  Security Score:    {}",
        match view.score_band {
            crate::dashboard::ScoreBand::Good => style(format!("{}%", view.score)).green().bold(),
            crate::dashboard::ScoreBand::Warn => style(format!("{}%", view.score)).yellow().bold(),
            crate::dashboard::ScoreBand::Critical => style(format!("{}%", view.score)).red().bold(),
        }
    );
    println!("  Critical Failures: {}", view.critical_count);
    println!("  Cloud Platforms:   {}", view.clouds_label);
    println!();

    if view.rows.is_empty() {
        println!("  {}", style("Scan passed: no issues found.").green());
        return;
    }

    let headers = ["CLOUD", "RESOURCE", "SEVERITY", "COMPLIANCE", "FIX"];
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in &view.rows {
        let cells = [
            row.cloud.as_str(),
            row.resource.as_str(),
            row.severity.as_str(),
            row.compliance.as_str(),
            row.fix.as_str(),
        ];
        for (w, cell) in widths.iter_mut().zip(cells) {
            *w = (*w).max(cell.len());
        }
    }

    let header_line: Vec<String> = headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| format!("{:<width$}", h, width = *w))
        .collect();
    println!("  {}", style(header_line.join("  ")).bold());

    for row in &view.rows {
        let severity = format!("{:<width$}", row.severity, width = widths[2]);
        let severity = match row.severity.as_str() {
            "CRITICAL" => style(severity).red().bold(),
            "MEDIUM" => style(severity).blue(),
            _ => style(severity).yellow(),
        };
        println!(
            "  {:<w0$}  {:<w1$}  {}  {:<w3$}  {:<w4$}",
            row.cloud,
            row.resource,
            severity,
            row.compliance,
            row.fix,
            w0 = widths[0],
            w1 = widths[1],
            w3 = widths[3],
            w4 = widths[4],
        );
    }

    println!();
    println!(
        "  {}",
        style(format!("{} issue(s) found.", view.total_count)).red()
    );
}
