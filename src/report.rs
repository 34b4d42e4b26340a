//! Plain-text project report: status, recent progress, and the best
//! candidate assets.

use std::fmt;

use jiff::civil::Date;

use crate::model::{DailyLog, Project};
use crate::recommend::Recommendation;

/// Logs shown in the progress table.
pub const REPORT_LOG_LIMIT: usize = 12;

/// Recommendations shown at the end of the report.
pub const REPORT_RECOMMENDATIONS: usize = 5;

/// Mean progress across `logs`, or 0 when there are none.
#[allow(clippy::cast_precision_loss)]
pub fn average_progress(logs: &[DailyLog]) -> f64 {
    if logs.is_empty() {
        return 0.0;
    }
    logs.iter().map(|l| l.progress_value).sum::<f64>() / logs.len() as f64
}

/// A project report, rendered through [`fmt::Display`].
///
/// `logs` are expected newest first, as the store lists them.
#[derive(Debug, Clone, Copy)]
pub struct ProjectReport<'a> {
    pub project: &'a Project,
    pub logs: &'a [DailyLog],
    pub recommendations: &'a [Recommendation<'a>],
    pub generated: Date,
}

/// Render a report for `project`.
pub fn render_project_report(
    project: &Project,
    logs: &[DailyLog],
    recommendations: &[Recommendation<'_>],
    generated: Date,
) -> String {
    ProjectReport {
        project,
        logs,
        recommendations,
        generated,
    }
    .to_string()
}

impl fmt::Display for ProjectReport<'_> {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            project,
            logs,
            recommendations,
            generated,
        } = *self;

        writeln!(out, "# {}", project.name)?;
        writeln!(out)?;
        writeln!(out, "Generated {generated}")?;
        writeln!(out)?;
        writeln!(out, "Client:       {}", project.client_type)?;
        writeln!(out, "Phase:        {}", project.phase)?;
        writeln!(out, "Service line: {}", project.service_line)?;
        writeln!(
            out,
            "Planned:      {} to {}",
            project.planned_start, project.planned_end
        )?;
        writeln!(
            out,
            "Location:     {}, {}",
            project.position.lat, project.position.lng
        )?;
        writeln!(out, "Priority:     {}", project.priority)?;
        if let Some(risks) = &project.risks {
            writeln!(out, "Risks:        {risks}")?;
        }

        let unit = logs.first().map_or("", |l| l.progress_unit.as_str());
        writeln!(
            out,
            "Average progress from logs: {:.2} {unit}",
            average_progress(logs)
        )?;
        writeln!(out, "Forecast is an estimate.")?;

        writeln!(out)?;
        writeln!(out, "## Recent progress")?;
        writeln!(out)?;
        if logs.is_empty() {
            writeln!(out, "No daily logs")?;
        } else {
            writeln!(out, "{:<10}  {:>5}  {:<16}  Downtime", "Date", "Hours", "Progress")?;
            for log in logs.iter().take(REPORT_LOG_LIMIT) {
                let progress = format!("{} {}", log.progress_value, log.progress_unit);
                let tags = if log.downtime_tags.is_empty() {
                    "-".to_string()
                } else {
                    log.downtime_tags.join(", ")
                };
                writeln!(
                    out,
                    "{:<10}  {:>5}  {progress:<16}  {tags}",
                    log.date.to_string(),
                    log.hours_worked
                )?;
            }
        }

        writeln!(out)?;
        writeln!(out, "## Recommended assets")?;
        writeln!(out)?;
        if recommendations.is_empty() {
            writeln!(out, "No candidate assets")?;
        }
        for (rank, rec) in recommendations
            .iter()
            .take(REPORT_RECOMMENDATIONS)
            .enumerate()
        {
            writeln!(
                out,
                "{}. {} ({})  score {}  {} km  ETA {} day(s)",
                rank + 1,
                rec.asset.name,
                rec.asset.id,
                rec.score,
                rec.distance_km,
                rec.eta_days
            )?;
            writeln!(out, "   {}", rec.explanation)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use jiff::civil::date;
    use uuid::Uuid;

    use crate::model::{ProjectPhase, ServiceLine};
    use crate::recommend::{SpeedTable, recommend_top};
    use crate::recommend::test_support::{asset, project};
    use crate::seed;

    fn log(day: Date, progress: f64, tags: &[&str]) -> DailyLog {
        DailyLog {
            id: Uuid::new_v4(),
            project_id: "p1".into(),
            asset_id: "a1".into(),
            date: day,
            hours_worked: 8.0,
            progress_value: progress,
            progress_unit: "m3/day".into(),
            downtime_tags: tags.iter().map(ToString::to_string).collect(),
            notes: String::new(),
            attachments: vec![],
        }
    }

    #[test]
    fn report_displays_into_any_formatter() {
        let p = project(ServiceLine::Dredging, ProjectPhase::Operasi);
        let logs = vec![log(date(2026, 2, 25), 5.0, &[])];
        let report = ProjectReport {
            project: &p,
            logs: &logs,
            recommendations: &[],
            generated: date(2026, 2, 26),
        };

        let mut out = String::from("preamble\n");
        fmt::Write::write_fmt(&mut out, format_args!("{report}")).unwrap();
        assert_eq!(
            out,
            format!(
                "preamble\n{}",
                render_project_report(&p, &logs, &[], date(2026, 2, 26))
            )
        );
        assert!(out.ends_with("No candidate assets\n"));
    }

    #[test]
    fn average_of_no_logs_is_zero() {
        assert_eq!(average_progress(&[]), 0.0);
    }

    #[test]
    fn header_shows_status_and_average() {
        let p = project(ServiceLine::Dredging, ProjectPhase::Operasi);
        let logs = vec![
            log(date(2026, 2, 25), 5.0, &[]),
            log(date(2026, 2, 24), 4.5, &["Weather", "Crew"]),
        ];

        let report = render_project_report(&p, &logs, &[], date(2026, 2, 26));
        assert!(report.starts_with("# Pelabuhan Patimban Ext\n"));
        assert!(report.contains("Phase:        Operasi\n"));
        assert!(report.contains("Service line: Dredging\n"));
        assert!(report.contains("Planned:      2026-01-12 to 2026-09-10\n"));
        assert!(report.contains("Average progress from logs: 4.75 m3/day\n"));
        assert!(report.contains("Weather, Crew"));
        assert!(report.contains("No candidate assets"));
    }

    #[test]
    fn progress_table_is_capped() {
        let p = project(ServiceLine::Dredging, ProjectPhase::Operasi);
        let logs: Vec<_> = (1..=15)
            .rev()
            .map(|day| log(date(2026, 2, day), 4.0, &[]))
            .collect();

        let report = render_project_report(&p, &logs, &[], date(2026, 2, 26));
        assert!(report.contains("2026-02-15"));
        assert!(report.contains("2026-02-04"));
        assert!(!report.contains("2026-02-03"));
    }

    #[test]
    fn lists_top_recommendations_in_rank_order() {
        let p = project(ServiceLine::Dredging, ProjectPhase::Operasi);
        let assets: Vec<_> = (1..=7)
            .map(|n| asset(&format!("a{n}"), ServiceLine::Dredging))
            .collect();
        let speeds = SpeedTable::from(seed::default_speed_profiles().as_slice());
        let recs = recommend_top(&p, &assets, &speeds, date(2026, 2, 26), 10);

        let report = render_project_report(&p, &[], &recs, date(2026, 2, 26));
        assert!(report.contains("No daily logs"));
        assert!(report.contains("1. Asset a1 (a1)  score 97  0 km  ETA 1 day(s)"));
        assert!(report.contains("5. Asset a5 (a5)"));
        assert!(!report.contains("6. Asset a6"));
        assert!(report.contains("   Availability 40/40, Distance/ETA 37/40, Capability 20/20"));
    }
}
