//! Text rendering of simulation reports.

use std::fmt::Write;

use cpu_schedule::{SimulationReport, Timeline};

/// Per-process table, averages, and Gantt chart for one report.
pub fn report_table(report: &SimulationReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} - {}", report.policy, report.policy.kind().description());
    let _ = writeln!(
        out,
        "{:<8}{:>6}{:>6}{:>6}{:>6}{:>6}{:>6}{:>6}{:>6}",
        "PID", "AT", "BT", "PR", "ST", "CT", "TAT", "WT", "RT"
    );
    let _ = writeln!(out, "{}", "-".repeat(56));
    for p in &report.scheduled_processes {
        let priority = p.priority.map(|v| v.to_string()).unwrap_or_else(|| "-".into());
        let _ = writeln!(
            out,
            "{:<8}{:>6}{:>6}{:>6}{:>6}{:>6}{:>6}{:>6}{:>6}",
            p.pid,
            p.arrival_time,
            p.burst_time,
            priority,
            p.start_time,
            p.completion_time,
            p.turnaround_time,
            p.waiting_time,
            p.response_time()
        );
    }
    let _ = writeln!(out, "{}", "-".repeat(56));
    let _ = writeln!(out, "Average Waiting Time: {:.2}", report.average_waiting_time);
    let _ = writeln!(out, "Average Turnaround Time: {:.2}", report.average_turnaround_time);
    let _ = writeln!(
        out,
        "CPU Utilization: {:.1}%  Context Switches: {}",
        report.metrics.cpu_utilization * 100.0,
        report.metrics.context_switches
    );
    out.push('\n');
    out.push_str(&gantt_chart(&report.timeline));
    out
}

/// One summary row per policy.
pub fn comparison_table(reports: &[SimulationReport]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<26}{:>9}{:>9}{:>9}{:>10}{:>8}{:>10}",
        "Policy", "Avg WT", "Avg TAT", "Avg RT", "Makespan", "Util%", "Switches"
    );
    for r in reports {
        let m = &r.metrics;
        let _ = writeln!(
            out,
            "{:<26}{:>9.2}{:>9.2}{:>9.2}{:>10}{:>8.1}{:>10}",
            r.policy.to_string(),
            m.average_waiting_time,
            m.average_turnaround_time,
            m.average_response_time,
            m.makespan,
            m.cpu_utilization * 100.0,
            m.context_switches
        );
    }
    out
}

/// Two-line Gantt chart: labeled cells over a tick ruler.
///
/// ```text
/// | P1  | P2  |
/// 0     5     8
/// ```
pub fn gantt_chart(timeline: &Timeline) -> String {
    if timeline.is_empty() {
        return String::new();
    }

    // Widths are in chars; pids need not be ASCII.
    let mut bars = String::from("|");
    let mut ruler = String::from("0");
    let mut column = 0;
    let mut ruler_width = 1;
    for seg in timeline {
        let label = seg.label.to_string();
        let end = seg.end.to_string();
        let width = label.chars().count().max(end.len()) + 2;

        let _ = write!(bars, "{label:^width$}|");
        column += width + 1;
        let pad = column.saturating_sub(ruler_width);
        ruler.push_str(&" ".repeat(pad));
        ruler.push_str(&end);
        ruler_width += pad + end.len();
    }
    format!("{bars}\n{ruler}\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use cpu_schedule::{simulate, PolicyKind, Process, SimulationRequest};

    fn report(policy: PolicyKind) -> SimulationReport {
        let processes = vec![Process::new("P1", 0, 5), Process::new("P2", 7, 3)];
        simulate(&SimulationRequest::new(processes, policy).with_quantum(2)).unwrap()
    }

    #[test]
    fn test_gantt_chart_aligns_ruler() {
        let chart = gantt_chart(&report(PolicyKind::Fcfs).timeline);
        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(lines[0], "| P1 | IDLE | P2 |");
        assert_eq!(lines[1], "0    5      7    10");
    }

    #[test]
    fn test_gantt_chart_non_ascii_pids() {
        let processes = vec![Process::new("αβ", 0, 5), Process::new("P2", 5, 3)];
        let report = simulate(&SimulationRequest::new(processes, PolicyKind::Fcfs)).unwrap();
        let chart = gantt_chart(&report.timeline);
        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(lines[0], "| αβ | P2 |");
        assert_eq!(lines[1], "0    5    8");
        assert_eq!(lines[0].chars().count(), lines[1].chars().count());
    }

    #[test]
    fn test_gantt_chart_empty() {
        assert_eq!(gantt_chart(&Timeline::default()), "");
    }

    #[test]
    fn test_report_table_contents() {
        let table = report_table(&report(PolicyKind::Fcfs));
        assert!(table.starts_with("FCFS - First-Come-First-Served"));
        assert!(table.contains("Average Waiting Time: 0.00"));
        assert!(table.contains("Average Turnaround Time: 4.00"));
    }

    #[test]
    fn test_comparison_table_rows() {
        let reports = vec![report(PolicyKind::Fcfs), report(PolicyKind::RoundRobin)];
        let table = comparison_table(&reports);
        assert_eq!(table.lines().count(), 3);
        assert!(table.contains("ROUND_ROBIN(q=2)"));
    }
}
