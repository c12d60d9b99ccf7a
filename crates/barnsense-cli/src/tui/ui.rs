//! TUI rendering — single-barn focus design.
//!
//! ┌──────────────────────────────────────────────┐
//! │  🐮 BarnSense    tick #42    refresh 1.0s    │
//! ├─────────────────────┬────────────────────────┤
//! │  Fleet              │  Barn 4                │
//! │  ▸ Barn 1   12.3 🟢 │  65 ppm · Critical     │
//! │    Barn 2   34.1 🟠 │  32.1°C → 25.0°C       │
//! │    Barn 3   18.7 🟢 │                        │
//! │    Barn 4   63.9 🔴 ├────────────────────────┤
//! │    Barn 5   27.4 🟠 │  layer 0 (floor)       │
//! │                     │  ● ● ● ● ●             │
//! │                     │  ● ● ● ● ●   ...       │
//! │                     ├────────────────────────┤
//! │                     │  ╭ ammonia (ppm)       │
//! │                     │  │  ~~~63.9~~~         │
//! ├─────────────────────┴────────────────────────┤
//! │  ↑↓ navigate   g: layer   p: pause   q: quit │
//! └──────────────────────────────────────────────┘

use super::app::App;
use barnsense_core::{GridPoint, SafetyBand};
use ratatui::{prelude::*, widgets::*};

pub fn draw(f: &mut Frame, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // title
            Constraint::Min(10),   // main
            Constraint::Length(1), // keys
        ])
        .split(f.area());

    draw_title(f, rows[0], app);
    draw_main(f, rows[1], app);
    draw_keys(f, rows[2]);
}

fn draw_title(f: &mut Frame, area: Rect, app: &App) {
    let tick = app.tick_count();
    let rate = app.refresh_rate_secs();
    let paused = if app.is_paused() { "  ⏸ paused" } else { "" };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Line::from(vec![
            Span::styled(" 🐮 BarnSense ", Style::default().bold().fg(Color::Cyan)),
            Span::raw("  watching: "),
            Span::styled(
                app.focused_barn().name.clone(),
                Style::default().bold().fg(Color::Yellow),
            ),
            Span::styled(
                format!("  #{tick}  refresh {rate:.1}s{paused} "),
                Style::default().fg(Color::DarkGray),
            ),
        ]));

    f.render_widget(block, area);
}

fn draw_main(f: &mut Frame, area: Rect, app: &App) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    draw_fleet(f, cols[0], app);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),
            Constraint::Length(9),
            Constraint::Min(6),
        ])
        .split(cols[1]);

    draw_detail(f, right[0], app);
    draw_layer(f, right[1], app);
    draw_chart(f, right[2], app);
}

fn draw_fleet(f: &mut Frame, area: Rect, app: &App) {
    let items: Vec<Row> = app
        .fleet()
        .iter()
        .enumerate()
        .map(|(i, barn)| {
            let is_cursor = i == app.cursor();
            let pointer = if is_cursor { "▸" } else { " " };
            let live = app.live_ppm(i);
            let band = app.live_band(i);

            let style = if is_cursor {
                Style::default().bg(Color::DarkGray).fg(Color::White)
            } else {
                band_style(band)
            };

            Row::new(vec![
                pointer.to_string(),
                barn.name.clone(),
                format!("{live:.1}"),
                band.to_string(),
                format!("{:.1}°C", barn.current_temp),
                format!("{}", barn.vent),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(
        items,
        [
            Constraint::Length(2),  // pointer
            Constraint::Length(14), // name
            Constraint::Length(6),  // live ppm
            Constraint::Length(9),  // band
            Constraint::Length(7),  // temp
            Constraint::Length(4),  // vent
        ],
    )
    .header(
        Row::new(vec!["", "barn", "ppm", "band", "temp", "vent"])
            .style(Style::default().fg(Color::DarkGray)),
    )
    .block(Block::default().borders(Borders::ALL).title(" Fleet "));

    f.render_widget(table, area);
}

fn draw_detail(f: &mut Frame, area: Rect, app: &App) {
    let barn = app.focused_barn();
    let live = app.live_ppm(app.cursor());
    let band = app.live_band(app.cursor());
    let summary = app.map().summary();

    let sensors_on = barn
        .sensors
        .iter()
        .filter(|s| s.status == barnsense_core::SensorStatus::On)
        .count();

    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!("{live:.1} ppm "),
                band_style(band).bold(),
            ),
            Span::styled(format!("· {}", band.label()), Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(format!(
            "{:.1}°C → {:.1}°C   humidity {}%   vent {}",
            barn.current_temp, barn.target_temp, barn.humidity, barn.vent
        )),
        Line::from(format!(
            "{sensors_on}/{} sensors reporting",
            barn.sensors.len()
        )),
        Line::from(vec![
            Span::raw("zones: "),
            Span::styled(
                format!("{} healthy", summary.healthy),
                Style::default().fg(Color::Green),
            ),
            Span::raw("  "),
            Span::styled(
                format!("{} elevated", summary.elevated),
                Style::default().fg(Color::Yellow),
            ),
            Span::raw("  "),
            Span::styled(
                format!("{} critical", summary.critical),
                Style::default().fg(Color::Red),
            ),
        ]),
        Line::from(Span::styled(
            format!(
                "zone range {:.1}–{:.1} ppm, mean {:.1}",
                summary.min_ppm, summary.max_ppm, summary.mean_ppm
            ),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", barn.name));
    f.render_widget(Paragraph::new(lines).block(block), area);
}

/// One horizontal slice of the grid, floor plan orientation: rows are
/// depth (z), columns are width (x). Each cell is a dot colored by its
/// zone plus the reading underneath it.
fn draw_layer(f: &mut Frame, area: Rect, app: &App) {
    let map = app.map();
    let y = app.layer();

    let mut lines = Vec::with_capacity(map.dims.z);
    for z in 0..map.dims.z {
        let mut spans = Vec::with_capacity(map.dims.x * 2);
        for x in 0..map.dims.x {
            if let Some(zone) = map.zone_at(GridPoint { x, y, z }) {
                let (r, g, b) = zone.color.to_u8();
                spans.push(Span::styled(
                    "● ",
                    Style::default().fg(Color::Rgb(r, g, b)),
                ));
                spans.push(Span::styled(
                    format!("{:>5.1}  ", zone.ppm),
                    Style::default().fg(Color::Gray),
                ));
            }
        }
        lines.push(Line::from(spans));
    }

    let label = match y {
        0 => "floor",
        1 => "mid",
        _ => "roof",
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Heat map — layer {y} ({label}), g to cycle "));
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_chart(f: &mut Frame, area: Rect, app: &App) {
    let history = app.focused_history();
    let name = &app.focused_barn().name;

    if history.is_empty() {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {name} — ammonia "));
        let p = Paragraph::new("Waiting for the first reading…")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(p, area);
        return;
    }

    let data: Vec<(f64, f64)> = history
        .iter()
        .enumerate()
        .map(|(i, &v)| (i as f64, v))
        .collect();

    let latest = history.last().copied().unwrap_or(0.0);
    let min_val = history.iter().copied().fold(f64::MAX, f64::min);
    let max_val = history.iter().copied().fold(f64::MIN, f64::max);

    let datasets = vec![
        Dataset::default()
            .name(format!("{latest:.1}"))
            .marker(symbols::Marker::Braille)
            .style(band_style(SafetyBand::from_ppm(latest)))
            .data(&data),
    ];

    let x_max = (history.len() as f64).max(10.0);
    let y_min = (min_val - 2.0).max(0.0);
    let y_max = max_val + 2.0;

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {name}  {latest:.1} ppm ")),
        )
        .x_axis(Axis::default().bounds([0.0, x_max]).labels(vec![
            Line::from("0"),
            Line::from(format!("{}", history.len())),
        ]))
        .y_axis(Axis::default().bounds([y_min, y_max]).labels(vec![
            Line::from(format!("{y_min:.0}")),
            Line::from(format!("{y_max:.0}")),
        ]));

    f.render_widget(chart, area);
}

fn draw_keys(f: &mut Frame, area: Rect) {
    let bar = Paragraph::new(
        " ↑↓ navigate   g: layer   r: regenerate   p: pause   +/-: refresh rate   q: quit",
    )
    .style(Style::default().bg(Color::DarkGray).fg(Color::White));
    f.render_widget(bar, area);
}

fn band_style(band: SafetyBand) -> Style {
    match band {
        SafetyBand::Healthy => Style::default().fg(Color::Green),
        SafetyBand::Elevated => Style::default().fg(Color::Yellow),
        SafetyBand::Critical => Style::default().fg(Color::Red),
    }
}
