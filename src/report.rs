use std::io::Write;

use crate::engine::ScanReport;

/// Print the scan summary to stdout.
pub fn print_report(report: &ScanReport) {
    let stdout = std::io::stdout();
    write_report(&mut stdout.lock(), report).ok();
}

fn write_report<W: Write>(out: &mut W, report: &ScanReport) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "====== RESULTS ======")?;
    writeln!(out, "[+] Total scanned {} domains", report.total_scanned)?;

    if report.findings.is_empty() {
        writeln!(out, "[+] No results found")?;
        return Ok(());
    }

    writeln!(out, "[+] Found {} results", report.findings.len())?;
    writeln!(out)?;
    for finding in &report.findings {
        writeln!(out, "{}", finding)?;
    }
    Ok(())
}
