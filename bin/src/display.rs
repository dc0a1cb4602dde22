//! Text rendering of a detail view snapshot.

use clap::ValueEnum;
use stockview_lib::prelude::*;

/// Sparkline glyphs, lowest to highest.
const BARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Separator between headlines in the scrolling strip.
const HEADLINE_SEPARATOR: &str = "   •   ";

/// Scroll offset units per character of the headline strip.
pub(crate) const OFFSET_PER_CHAR: u64 = 4;

/// Data source selector for the `fetch` command.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum Source {
    News,
    Prices,
    Profile,
    All,
}

/// Renders one frame of the detail view, `width` columns wide.
pub(crate) fn render_snapshot(snapshot: &ViewSnapshot, width: usize) -> String {
    let state = &snapshot.state;
    let width = width.max(20);
    let mut out = String::new();

    let title = format!(" {} ", state.ticker);
    out.push_str(&format!("{title:═^width$}\n\n"));

    out.push_str(&render_profile(&state.profile, &state.ticker));
    out.push('\n');

    out.push_str(&render_chart("Short-Term Graph (Daily)", &state.short_term, width));
    out.push('\n');
    out.push_str(&render_chart("Long-Term Graph (Yearly)", &state.long_term, width));
    out.push('\n');

    out.push_str("Stock Prediction\n");
    match state.forecast {
        Some(forecast) => out.push_str(&format!("  Predicted Price: ${forecast}\n")),
        None => out.push_str("  Fetching prediction...\n"),
    }
    out.push('\n');

    out.push_str(&"─".repeat(width));
    out.push('\n');
    out.push_str(&headline_strip(&state.headlines, snapshot.scroll_offset, width));
    out.push('\n');
    out
}

fn render_profile(profile: &Slice<Profile>, ticker: &Ticker) -> String {
    match profile {
        Slice::Pending => "Loading company details...\n".to_string(),
        Slice::Empty => "Company details unavailable\n".to_string(),
        Slice::Data(p) => format!(
            "{} ({ticker})\nSector: {} | Industry: {}\nMarket Cap: {}\n\n{}\n",
            p.name, p.sector, p.industry, p.market_cap, p.description
        ),
    }
}

fn render_chart(title: &str, series: &Slice<PriceSeries>, width: usize) -> String {
    let body = match series {
        Slice::Pending => "  Loading...".to_string(),
        Slice::Empty => "  No price data".to_string(),
        Slice::Data(series) => {
            let (Some(low), Some(high), Some(last)) =
                (series.min_price(), series.max_price(), series.last())
            else {
                return format!("{title}\n  No price data\n");
            };
            format!(
                "  {}\n  low {low:.2}  high {high:.2}  last {:.2} ({})",
                sparkline(series, width.saturating_sub(2)),
                last.price,
                last.date
            )
        }
    };
    format!("{title}\n{body}\n")
}

/// Draws a series as a one-line sparkline of at most `width` glyphs.
///
/// Longer series are sampled evenly; order is kept as delivered.
pub(crate) fn sparkline(series: &PriceSeries, width: usize) -> String {
    let points = series.points();
    if points.is_empty() || width == 0 {
        return String::new();
    }
    let low = series.min_price().unwrap_or_default();
    let high = series.max_price().unwrap_or_default();
    let span = high - low;

    let columns = points.len().min(width);
    (0..columns)
        .map(|col| {
            let idx = col * points.len() / columns;
            let price = points[idx].price;
            let level = if span > 0.0 {
                (((price - low) / span) * (BARS.len() - 1) as f64).round() as usize
            } else {
                BARS.len() / 2
            };
            BARS[level.min(BARS.len() - 1)]
        })
        .collect()
}

/// Cuts a `width`-column window out of the looping headline strip.
pub(crate) fn headline_strip(headlines: &Slice<Vec<String>>, offset: u64, width: usize) -> String {
    let text = match headlines {
        Slice::Pending => return "Loading news...".to_string(),
        Slice::Empty => return "No recent news available".to_string(),
        Slice::Data(headlines) => {
            let mut text = headlines.join(HEADLINE_SEPARATOR);
            text.push_str(HEADLINE_SEPARATOR);
            text
        }
    };

    let chars: Vec<char> = text.chars().collect();
    let start = ((offset / OFFSET_PER_CHAR) % chars.len() as u64) as usize;
    chars.iter().cycle().skip(start).take(width).collect()
}
