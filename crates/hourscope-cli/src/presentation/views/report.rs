use hourscope_engine::{HourlyPoint, optimal_hours_summary};
use hourscope_types::Trend;
use owo_colors::OwoColorize;
use std::fmt;

use crate::presentation::formatters::{CHART_WIDTH, DisplayOptions, bar_len, bar_rgb, pad};
use crate::presentation::view_models::ReportViewModel;

const LABEL_WIDTH: usize = 9;

pub struct ReportView<'a> {
    pub data: &'a ReportViewModel,
    pub options: &'a DisplayOptions,
}

impl<'a> ReportView<'a> {
    pub fn new(data: &'a ReportViewModel, options: &'a DisplayOptions) -> Self {
        Self { data, options }
    }

    fn render_header(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let title = format!("r/{}", self.data.result.subreddit);
        if self.options.enable_color {
            writeln!(f, "{} ({})", title.bold(), self.data.result.timezone)?;
        } else {
            writeln!(f, "{} ({})", title, self.data.result.timezone)?;
        }
        writeln!(f, "{}", optimal_hours_summary(&self.data.result))?;
        writeln!(f, "Trend: {}", self.trend_label(self.data.trend))
    }

    fn trend_label(&self, trend: Trend) -> String {
        if !self.options.enable_color {
            return trend.title().to_string();
        }
        match trend {
            Trend::Increasing => trend.title().green().to_string(),
            Trend::Decreasing => trend.title().red().to_string(),
            Trend::Stable => trend.title().dimmed().to_string(),
        }
    }

    fn render_chart(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let max = self.data.result.max_post_count;
        for point in &self.data.series {
            writeln!(
                f,
                "{} {} {}",
                pad(&point.label, LABEL_WIDTH),
                self.bar(point, max),
                point.posts
            )?;
        }
        Ok(())
    }

    fn bar(&self, point: &HourlyPoint, max: u64) -> String {
        let bar = "█".repeat(bar_len(point.posts, max, CHART_WIDTH));
        if !self.options.enable_color {
            return bar;
        }
        if point.optimal {
            bar.green().to_string()
        } else {
            let (r, g, b) = bar_rgb(self.options.theme);
            bar.truecolor(r, g, b).to_string()
        }
    }

    fn render_comparison(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Some(comparison) = &self.data.comparison else {
            return Ok(());
        };
        writeln!(f)?;
        writeln!(f, "Compared with the previous analysis:")?;
        writeln!(f, "  Previous peak: {}", comparison.previous_max)?;
        writeln!(f, "  Current peak:  {}", comparison.current_max)?;
        writeln!(f, "  {}", self.trend_label(comparison.trend))
    }
}

impl<'a> fmt::Display for ReportView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.render_header(f)?;
        writeln!(f)?;
        self.render_chart(f)?;
        self.render_comparison(f)
    }
}
