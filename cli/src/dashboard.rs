use std::{io, time::Duration};

use anyhow::Result;
use chrono::Local;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use mastery_core::{
    category_mastery, compute_snapshot, evaluate_achievements, level_progress, AchievementStatus,
    Category, CategoryMastery, EntryRepository, LevelProgress, StatsSnapshot, ACHIEVEMENTS,
    CATEGORY_MASTERY_GOAL, LEVELS,
};
use ratatui::{
    prelude::*,
    widgets::{Bar, BarChart, BarGroup, Block, BorderType, Borders, Gauge, Padding, Paragraph},
};

// --- THEME ---
struct Theme {
    primary: Color,
    muted: Color,
    text: Color,
    good: Color,
    accent: Color,
}

const THEME: Theme = Theme {
    primary: Color::Cyan,
    muted: Color::DarkGray,
    text: Color::White,
    good: Color::Green,
    accent: Color::Yellow,
};

fn category_color(category: Category) -> Color {
    match category {
        Category::Software => Color::Indexed(99),
        Category::Design => Color::Indexed(205),
        Category::Ai => Color::Indexed(45),
        Category::Cybersecurity => Color::Indexed(42),
    }
}

pub struct DashboardApp {
    pub snapshot: StatsSnapshot,
    pub level: LevelProgress,
    pub mastery: Vec<CategoryMastery>,
    pub achievements: Vec<AchievementStatus>,
}

impl DashboardApp {
    fn load<R: EntryRepository>(repo: &R) -> Result<Self> {
        let entries = repo.list()?;
        let snapshot = compute_snapshot(&entries, Local::now().date_naive());
        let level = level_progress(snapshot.total_hours, LEVELS);
        let mastery = category_mastery(&snapshot.category_breakdown, CATEGORY_MASTERY_GOAL);
        let achievements =
            evaluate_achievements(snapshot.total_hours, snapshot.streak, ACHIEVEMENTS);
        Ok(Self {
            snapshot,
            level,
            mastery,
            achievements,
        })
    }
}

pub fn run<R: EntryRepository>(repo: &R) -> Result<()> {
    let mut app = DashboardApp::load(repo)?;

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    loop {
        terminal.draw(|f| ui(f, &app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => break,
                        KeyCode::Char('r') => app = DashboardApp::load(repo)?,
                        _ => {}
                    }
                }
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

fn ui(frame: &mut Frame, app: &DashboardApp) {
    let size = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Content
            Constraint::Length(1), // Footer
        ])
        .split(size);

    // --- Header ---
    let header_block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(THEME.muted));
    let title = Paragraph::new(Span::styled(
        "MASTERY DASHBOARD",
        Style::default().fg(THEME.primary).add_modifier(Modifier::BOLD),
    ))
    .block(Block::default().padding(Padding::new(0, 0, 1, 0)));
    frame.render_widget(title, main_layout[0]);
    frame.render_widget(header_block, main_layout[0]);

    // --- Content split ---
    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(58),
            Constraint::Length(1), // Gutter
            Constraint::Percentage(41),
        ])
        .split(main_layout[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(8)])
        .split(content_chunks[0]);

    draw_level_gauge(frame, app, left[0]);
    draw_category_chart(frame, app, left[1]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(10), Constraint::Min(5)])
        .split(content_chunks[2]);

    draw_summary(frame, app, right[0]);
    draw_achievements(frame, app, right[1]);

    // --- Footer ---
    let help = Line::from(vec![
        Span::styled("REFRESH: ", Style::default().fg(THEME.muted)),
        Span::styled("r", Style::default().fg(THEME.text)),
        Span::raw("  "),
        Span::styled("QUIT: ", Style::default().fg(THEME.muted)),
        Span::styled("q", Style::default().fg(THEME.text)),
    ]);
    let footer = Paragraph::new(help)
        .alignment(Alignment::Center)
        .style(Style::default().fg(THEME.muted));
    frame.render_widget(footer, main_layout[2]);
}

fn draw_level_gauge(frame: &mut Frame, app: &DashboardApp, area: Rect) {
    let level = &app.level;
    let label = match &level.next_level {
        Some(next) => format!(
            "{} {} — {:.0}% ({:.0}h to {})",
            level.level.icon, level.level.name, level.progress, level.hours_to_next, next.name
        ),
        None => format!("{} {} — top tier", level.level.icon, level.level.name),
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Level ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(THEME.muted)),
        )
        .gauge_style(Style::default().fg(THEME.primary))
        .ratio((level.progress / 100.0).clamp(0.0, 1.0))
        .label(label);
    frame.render_widget(gauge, area);
}

fn draw_category_chart(frame: &mut Frame, app: &DashboardApp, area: Rect) {
    let bar_items: Vec<Bar> = app
        .mastery
        .iter()
        .map(|m| {
            Bar::default()
                .label(m.category.id())
                .value(m.hours.round() as u64)
                .style(Style::default().fg(category_color(m.category)))
                .text_value(format!("{:.0}h", m.hours))
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(" Hours per Category ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(THEME.muted)),
        )
        .bar_width(13)
        .bar_gap(2)
        .data(BarGroup::default().bars(&bar_items));

    frame.render_widget(chart, area);
}

fn draw_summary(frame: &mut Frame, app: &DashboardApp, area: Rect) {
    let snap = &app.snapshot;
    let text = vec![
        Line::from(Span::styled(
            "Overview",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Total:    ", Style::default().fg(THEME.muted)),
            Span::styled(
                format!("{:.1}h", snap.total_hours),
                Style::default().fg(THEME.text).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Streak:   ", Style::default().fg(THEME.muted)),
            Span::styled(
                format!("{} day(s)", snap.streak),
                Style::default().fg(THEME.accent).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Today:    ", Style::default().fg(THEME.muted)),
            Span::styled(format!("{:.1}h", snap.today_hours), Style::default().fg(THEME.good)),
        ]),
        Line::from(vec![
            Span::styled("Avg/day:  ", Style::default().fg(THEME.muted)),
            Span::styled(
                format!("{:.2}h", snap.daily_average),
                Style::default().fg(THEME.text),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Week:     ", Style::default().fg(THEME.muted)),
            Span::styled(format!("{:.1}h", snap.weekly_hours), Style::default().fg(THEME.text)),
        ]),
        Line::from(vec![
            Span::styled("Month:    ", Style::default().fg(THEME.muted)),
            Span::styled(format!("{:.1}h", snap.monthly_hours), Style::default().fg(THEME.text)),
        ]),
        Line::from(vec![
            Span::styled("Year:     ", Style::default().fg(THEME.muted)),
            Span::styled(format!("{:.1}h", snap.yearly_hours), Style::default().fg(THEME.text)),
        ]),
    ];

    let panel = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(THEME.muted))
            .title(" Summary "),
    );
    frame.render_widget(panel, area);
}

fn draw_achievements(frame: &mut Frame, app: &DashboardApp, area: Rect) {
    let lines: Vec<Line> = app
        .achievements
        .iter()
        .map(|a| {
            if a.unlocked {
                Line::from(vec![
                    Span::styled("✓ ", Style::default().fg(THEME.good)),
                    Span::styled(
                        format!("{} {}", a.icon, a.name),
                        Style::default().fg(THEME.text),
                    ),
                ])
            } else {
                Line::from(Span::styled(
                    format!("  {} {} ({:.0}%)", a.icon, a.name, a.progress),
                    Style::default().fg(THEME.muted),
                ))
            }
        })
        .collect();

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(THEME.muted))
            .title(" Achievements "),
    );
    frame.render_widget(panel, area);
}
