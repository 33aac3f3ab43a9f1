use std::mem;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::KeyCode;
use log::{info, warn};
use open::that as open_link;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Axis, Block, Borders, Chart, Clear, Dataset, Gauge, GraphType, LineGauge, List, ListItem,
    Paragraph, Wrap,
};
use ratatui::Frame;

use crate::catalog::characteristics;
use crate::state::{CatSession, MAX_VOLUME};

use super::forms::{VolumeForm, VOLUME_PROMPT};
use super::helpers::{
    axis_label, carousel_dots, centered_rect, surface_error, top_right_rect,
};

const HEADER_HEIGHT: u16 = 3;
const HERO_HEIGHT: u16 = 3;
/// Height of each row of cards between the hero and the chart.
const CARD_ROW_HEIGHT: u16 = 10;
/// Footer rows: top border, status, two instruction lines, credit.
const FOOTER_HEIGHT: u16 = 5;
/// Change applied by the `+` and `-` keys.
const VOLUME_STEP: i64 = 10;
const TOAST_WIDTH: u16 = 52;
const TOAST_HEIGHT: u16 = 5;

const ACCENT: Color = Color::Magenta;

/// Top-level input modes. Overlays take every key while they are open.
enum Mode {
    Normal,
    Help,
    EnteringVolume(VolumeForm),
}

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Transient notification drawn over the top-right corner.
struct Toast {
    title: &'static str,
    body: String,
    shown_at: Instant,
}

/// The terminal page. Owns the session and maps key presses onto it.
pub struct App {
    session: CatSession,
    mode: Mode,
    status: Option<StatusMessage>,
    toast: Option<Toast>,
    toast_duration: Duration,
}

impl App {
    pub fn new(session: CatSession, toast_duration: Duration) -> Self {
        Self {
            session,
            mode: Mode::Normal,
            status: None,
            toast: None,
            toast_duration,
        }
    }

    pub fn session(&self) -> &CatSession {
        &self.session
    }

    /// Dispatch a key press. Returns `true` when the user asked to quit.
    pub fn handle_key(&mut self, code: KeyCode) -> Result<bool> {
        let mut exit = false;
        let mode = mem::replace(&mut self.mode, Mode::Normal);

        self.mode = match mode {
            Mode::Normal => self.handle_normal_key(code, &mut exit)?,
            Mode::Help => Mode::Normal,
            Mode::EnteringVolume(form) => self.handle_volume_entry(code, form)?,
        };

        Ok(exit)
    }

    /// Drop the toast once it has been visible for the configured duration.
    pub fn tick(&mut self, now: Instant) {
        let expired = self.toast.as_ref().is_some_and(|toast| {
            now.saturating_duration_since(toast.shown_at) >= self.toast_duration
        });
        if expired {
            self.toast = None;
        }
    }

    fn handle_normal_key(&mut self, code: KeyCode, exit: &mut bool) -> Result<Mode> {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => {
                *exit = true;
            }
            KeyCode::Left => {
                self.clear_status();
                self.session.previous_breed();
            }
            KeyCode::Right => {
                self.clear_status();
                self.session.next_breed();
            }
            KeyCode::Up => {
                self.clear_status();
                self.session.previous_sound();
            }
            KeyCode::Down => {
                self.clear_status();
                self.session.next_sound();
            }
            KeyCode::Enter => self.play_sound(),
            KeyCode::Char('f') | KeyCode::Char('F') => self.generate_fact(),
            KeyCode::Char('l') | KeyCode::Char('L') => {
                let likes = self.session.like();
                self.set_status(
                    format!("Thanks for the love! {} likes so far.", likes.count()),
                    StatusKind::Info,
                );
            }
            KeyCode::Char('+') | KeyCode::Char('=') => self.step_volume(VOLUME_STEP),
            KeyCode::Char('-') => self.step_volume(-VOLUME_STEP),
            KeyCode::Char('v') | KeyCode::Char('V') => {
                self.clear_status();
                return Ok(Mode::EnteringVolume(VolumeForm::with_volume(
                    self.session.volume(),
                )));
            }
            KeyCode::Char('o') | KeyCode::Char('O') => {
                if let Err(err) = self.open_breed_image() {
                    warn!("could not open breed image: {err:#}");
                    self.set_status(surface_error(&err), StatusKind::Error);
                }
            }
            KeyCode::Char('?') => return Ok(Mode::Help),
            _ => {}
        }
        Ok(Mode::Normal)
    }

    fn handle_volume_entry(&mut self, code: KeyCode, mut form: VolumeForm) -> Result<Mode> {
        match code {
            KeyCode::Esc => {
                self.set_status("Volume unchanged.", StatusKind::Info);
                return Ok(Mode::Normal);
            }
            KeyCode::Backspace => form.backspace(),
            KeyCode::Enter => match self.apply_volume(&form) {
                Ok(volume) => {
                    self.set_status(format!("Volume set to {volume}%"), StatusKind::Info);
                    return Ok(Mode::Normal);
                }
                Err(err) => {
                    let message = surface_error(&err);
                    form.error = Some(message.clone());
                    self.set_status(message, StatusKind::Error);
                }
            },
            KeyCode::Char(ch) => {
                if form.push_char(ch) {
                    form.error = None;
                }
            }
            _ => {}
        }
        Ok(Mode::EnteringVolume(form))
    }

    fn apply_volume(&mut self, form: &VolumeForm) -> Result<u8> {
        let value = form.parse_input()?;
        let volume = self.session.set_volume(value)?;
        Ok(volume)
    }

    fn step_volume(&mut self, delta: i64) {
        match self.session.step_volume(delta) {
            Ok(volume) => self.set_status(format!("Volume {volume}%"), StatusKind::Info),
            Err(err) => self.set_status(err.to_string(), StatusKind::Error),
        }
    }

    fn generate_fact(&mut self) {
        let fact = self.session.generate_fact().to_string();
        self.clear_status();
        self.toast = Some(Toast {
            title: "New Cat Fact!",
            body: format!("Did you know? {fact}"),
            shown_at: Instant::now(),
        });
    }

    fn play_sound(&mut self) {
        let request = self.session.play_current_sound();
        info!(
            "playback requested: {} ({}) at {}%",
            request.name, request.audio_ref, request.volume
        );
        self.set_status(
            format!(
                "Playing {} ({}) at {}% volume",
                request.name, request.audio_ref, request.volume
            ),
            StatusKind::Info,
        );
    }

    fn open_breed_image(&mut self) -> Result<()> {
        let breed = self.session.current_breed();
        open_link(&breed.image_ref)
            .with_context(|| format!("failed to open image for {}", breed.name))?;
        let message = format!("Opened {} photo.", breed.name);
        self.set_status(message, StatusKind::Info);
        Ok(())
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Length(HERO_HEIGHT),
                Constraint::Length(CARD_ROW_HEIGHT),
                Constraint::Length(CARD_ROW_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);

        self.draw_header(frame, rows[0]);
        self.draw_hero(frame, rows[1]);

        let top = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[2]);
        self.draw_characteristics(frame, top[0]);
        self.draw_breed_card(frame, top[1]);

        let middle = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(50),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
            ])
            .split(rows[3]);
        self.draw_fact_card(frame, middle[0]);
        self.draw_sounds_card(frame, middle[1]);
        self.draw_like_meter(frame, middle[2]);

        self.draw_popularity_chart(frame, rows[4]);
        self.draw_footer(frame, rows[5]);

        if let Some(toast) = &self.toast {
            self.draw_toast(frame, area, toast);
        }

        match &self.mode {
            Mode::Help => self.draw_help(frame, area),
            Mode::EnteringVolume(form) => self.draw_volume_form(frame, area, form),
            Mode::Normal => {}
        }
    }

    fn draw_header(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ACCENT));
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(inner);

        let brand = Paragraph::new(Line::from(vec![
            Span::styled("=^.^= ", Style::default().fg(ACCENT)),
            Span::styled("CatWorld", Style::default().add_modifier(Modifier::BOLD)),
        ]));
        frame.render_widget(brand, columns[0]);

        let links = Paragraph::new(Line::from("Home   About   Contact"))
            .alignment(Alignment::Right);
        frame.render_widget(links, columns[1]);
    }

    fn draw_hero(&self, frame: &mut Frame, area: Rect) {
        let hero = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "Welcome to the Fascinating World of Cats",
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(hero, area);
    }

    fn draw_characteristics(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title("Characteristics of Cats")
            .borders(Borders::ALL);
        let mut lines = vec![
            Line::from(Span::styled(
                "What makes cats unique?",
                Style::default().fg(Color::Gray),
            )),
            Line::from(""),
        ];
        lines.extend(
            characteristics()
                .iter()
                .map(|item| Line::from(format!("• {item}"))),
        );
        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }

    fn draw_breed_card(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title("Popular Cat Breeds")
            .borders(Borders::ALL);
        let breed = self.session.current_breed();
        let (index, len) = self.session.breed_position();

        let lines = vec![
            Line::from(vec![
                Span::styled("◀  ", Style::default().fg(ACCENT)),
                Span::styled(breed.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
                Span::styled("  ▶", Style::default().fg(ACCENT)),
            ])
            .centered(),
            Line::from(""),
            Line::from(breed.description.clone()),
            Line::from(Span::styled(
                format!("Photo: {}", breed.image_ref),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(format!("{}   {}/{}", carousel_dots(index, len), index + 1, len))
                .centered(),
        ];

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }

    fn draw_fact_card(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title("Cat Fact Generator")
            .borders(Borders::ALL);
        let fact_line = match self.session.current_fact() {
            Some(fact) => Line::from(Span::styled(
                fact.to_string(),
                Style::default().add_modifier(Modifier::ITALIC),
            )),
            None => Line::from(Span::styled(
                "Press [f] to generate a cat fact.",
                Style::default().fg(Color::DarkGray),
            )),
        };
        let lines = vec![
            Line::from(Span::styled(
                "Learn interesting facts about cats!",
                Style::default().fg(Color::Gray),
            )),
            Line::from(""),
            fact_line,
        ];
        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }

    fn draw_sounds_card(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().title("Cat Sounds").borders(Borders::ALL);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(inner);

        let selected = self.session.sound_index();
        let items: Vec<ListItem> = self
            .session
            .sounds()
            .iter()
            .enumerate()
            .map(|(idx, sound)| {
                if idx == selected {
                    ListItem::new(Line::from(Span::styled(
                        format!("▶ {}", sound.name),
                        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                    )))
                } else {
                    ListItem::new(Line::from(format!("  {}", sound.name)))
                }
            })
            .collect();
        frame.render_widget(List::new(items), parts[0]);

        let volume = self.session.volume();
        let gauge = LineGauge::default()
            .filled_style(Style::default().fg(ACCENT))
            .line_set(symbols::line::THICK)
            .label(format!("Vol {volume:>3}%"))
            .ratio(f64::from(volume) / f64::from(MAX_VOLUME));
        frame.render_widget(gauge, parts[1]);
    }

    fn draw_like_meter(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().title("Love Cats?").borders(Borders::ALL);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);

        let likes = self.session.likes();
        let label = Paragraph::new(Line::from(format!("Likes: {}", likes.count())))
            .alignment(Alignment::Center);
        frame.render_widget(label, parts[0]);

        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(Color::LightRed))
            .percent(u16::from(likes.progress()))
            .label(format!("{}%", likes.progress()));
        frame.render_widget(gauge, parts[1]);
    }

    fn draw_popularity_chart(&self, frame: &mut Frame, area: Rect) {
        let points = self.session.popularity_series();
        let last_x = (points.len().saturating_sub(1) as f64).max(1.0);
        let names: Vec<Span> = self
            .session
            .breeds()
            .iter()
            .map(|breed| Span::raw(axis_label(&breed.name)))
            .collect();

        let dataset = Dataset::default()
            .name("popularity %")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(ACCENT))
            .data(&points);

        let chart = Chart::new(vec![dataset])
            .block(
                Block::default()
                    .title("Cat Breed Popularity")
                    .borders(Borders::ALL),
            )
            .x_axis(
                Axis::default()
                    .style(Style::default().fg(Color::Gray))
                    .bounds([0.0, last_x])
                    .labels(names),
            )
            .y_axis(
                Axis::default()
                    .style(Style::default().fg(Color::Gray))
                    .bounds([0.0, 100.0])
                    .labels(["0", "50", "100"]),
            );
        frame.render_widget(chart, area);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(2),
                Constraint::Length(1),
            ])
            .split(inner);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };
        frame.render_widget(Paragraph::new(status_line), rows[0]);
        frame.render_widget(Paragraph::new(self.footer_instructions()), rows[1]);

        let credit_columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[2]);
        let muted = Style::default().fg(Color::DarkGray);
        frame.render_widget(
            Paragraph::new(Span::styled("© 2023 CatWorld. All rights reserved.", muted)),
            credit_columns[0],
        );
        frame.render_widget(
            Paragraph::new(Span::styled("Instagram   Facebook   Twitter", muted))
                .alignment(Alignment::Right),
            credit_columns[1],
        );
    }

    /// Key hints for the current mode, at most two lines so they fit an
    /// 80 column terminal.
    fn footer_instructions(&self) -> Vec<Line<'static>> {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        match &self.mode {
            Mode::EnteringVolume(_) => vec![Line::from(vec![
                Span::styled("[0-9]", key_style),
                Span::raw(" Type   "),
                Span::styled("[Enter]", key_style),
                Span::raw(" Apply   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Cancel"),
            ])],
            Mode::Help => vec![Line::from(vec![
                Span::styled("[any key]", key_style),
                Span::raw(" Close help"),
            ])],
            Mode::Normal => vec![
                Line::from(vec![
                    Span::styled("[←→]", key_style),
                    Span::raw(" Breeds   "),
                    Span::styled("[f]", key_style),
                    Span::raw(" Fact   "),
                    Span::styled("[↑↓]", key_style),
                    Span::raw(" Sounds   "),
                    Span::styled("[Enter]", key_style),
                    Span::raw(" Play"),
                ]),
                Line::from(vec![
                    Span::styled("[+/-]", key_style),
                    Span::raw(" Volume   "),
                    Span::styled("[l]", key_style),
                    Span::raw(" Like   "),
                    Span::styled("[?]", key_style),
                    Span::raw(" Help   "),
                    Span::styled("[q]", key_style),
                    Span::raw(" Quit"),
                ]),
            ],
        }
    }

    fn draw_toast(&self, frame: &mut Frame, area: Rect, toast: &Toast) {
        let toast_area = top_right_rect(TOAST_WIDTH, TOAST_HEIGHT, area);
        frame.render_widget(Clear, toast_area);
        let block = Block::default()
            .title(Span::styled(
                toast.title,
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ACCENT));
        let paragraph = Paragraph::new(toast.body.clone())
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, toast_area);
    }

    fn draw_help(&self, frame: &mut Frame, area: Rect) {
        let popup_area = centered_rect(60, 60, area);
        frame.render_widget(Clear, popup_area);

        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let rows = [
            ("← / →", "Previous / next breed"),
            ("o", "Open the breed photo"),
            ("f", "Generate a cat fact"),
            ("↑ / ↓", "Choose a sound"),
            ("Enter", "Play the chosen sound"),
            ("+ / -", "Volume up / down"),
            ("v", "Type an exact volume"),
            ("l", "Like CatWorld"),
            ("q / Esc", "Quit"),
        ];
        let lines: Vec<Line> = rows
            .iter()
            .map(|(keys, action)| {
                Line::from(vec![
                    Span::styled(format!("{keys:>9}  "), key_style),
                    Span::raw(*action),
                ])
            })
            .collect();

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Keys").borders(Borders::ALL))
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, popup_area);
    }

    fn draw_volume_form(&self, frame: &mut Frame, area: Rect, form: &VolumeForm) {
        let popup_area = centered_rect(50, 30, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title("Set Volume").borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let mut lines = vec![form.build_line(), Line::from("")];
        if let Some(error) = &form.error {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "Enter to apply • Esc to cancel",
                Style::default().fg(Color::Gray),
            )));
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);

        let cursor_x = inner.x + VOLUME_PROMPT.len() as u16 + form.value_len() as u16;
        frame.set_cursor_position((cursor_x, inner.y));
    }

    fn set_status<S: Into<String>>(&mut self, text: S, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use super::*;

    fn test_app() -> App {
        App::new(CatSession::with_seed(3).unwrap(), Duration::from_secs(5))
    }

    fn render(app: &App) -> String {
        render_rows(app, 120, 48).concat()
    }

    fn render_rows(app: &App, width: u16, height: u16) -> Vec<String> {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .chunks(usize::from(width))
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }

    #[test]
    fn arrow_keys_rotate_breeds() {
        let mut app = test_app();
        assert!(!app.handle_key(KeyCode::Left).unwrap());
        assert_eq!(app.session().current_breed().name, "British Shorthair");
        app.handle_key(KeyCode::Right).unwrap();
        app.handle_key(KeyCode::Right).unwrap();
        assert_eq!(app.session().current_breed().name, "Persian");
    }

    #[test]
    fn fact_key_sets_fact_and_toast() {
        let mut app = test_app();
        app.handle_key(KeyCode::Char('f')).unwrap();
        let fact = app.session().current_fact().unwrap().to_string();
        assert!(app.session().facts().contains(&fact));
        let toast = app.toast.as_ref().unwrap();
        assert_eq!(toast.title, "New Cat Fact!");
        assert_eq!(toast.body, format!("Did you know? {fact}"));
    }

    #[test]
    fn toast_expires_after_duration() {
        let mut app = test_app();
        app.handle_key(KeyCode::Char('f')).unwrap();
        let shown_at = app.toast.as_ref().unwrap().shown_at;
        app.tick(shown_at + Duration::from_secs(1));
        assert!(app.toast.is_some());
        app.tick(shown_at + Duration::from_secs(5));
        assert!(app.toast.is_none());
    }

    #[test]
    fn like_key_fills_meter() {
        let mut app = test_app();
        for _ in 0..12 {
            app.handle_key(KeyCode::Char('l')).unwrap();
        }
        assert_eq!(app.session().likes().count(), 12);
        assert_eq!(app.session().likes().progress(), 100);
    }

    #[test]
    fn volume_keys_step_and_clamp() {
        let mut app = test_app();
        for _ in 0..7 {
            app.handle_key(KeyCode::Char('+')).unwrap();
        }
        assert_eq!(app.session().volume(), 100);
        app.handle_key(KeyCode::Char('-')).unwrap();
        assert_eq!(app.session().volume(), 90);
    }

    #[test]
    fn volume_form_rejects_out_of_range() {
        let mut app = test_app();
        app.handle_key(KeyCode::Char('v')).unwrap();
        app.handle_key(KeyCode::Backspace).unwrap();
        app.handle_key(KeyCode::Backspace).unwrap();
        for ch in ['1', '2', '0'] {
            app.handle_key(KeyCode::Char(ch)).unwrap();
        }
        app.handle_key(KeyCode::Enter).unwrap();
        assert!(matches!(
            &app.mode,
            Mode::EnteringVolume(form) if form.error.as_deref() == Some("volume must be between 0 and 100, got 120")
        ));
        assert_eq!(app.session().volume(), 50);

        app.handle_key(KeyCode::Backspace).unwrap();
        app.handle_key(KeyCode::Enter).unwrap();
        assert!(matches!(app.mode, Mode::Normal));
        assert_eq!(app.session().volume(), 12);
    }

    #[test]
    fn escape_leaves_volume_form_without_quitting() {
        let mut app = test_app();
        app.handle_key(KeyCode::Char('v')).unwrap();
        assert!(!app.handle_key(KeyCode::Esc).unwrap());
        assert!(matches!(app.mode, Mode::Normal));
        assert!(app.handle_key(KeyCode::Esc).unwrap());
    }

    #[test]
    fn enter_reports_playback() {
        let mut app = test_app();
        app.handle_key(KeyCode::Down).unwrap();
        app.handle_key(KeyCode::Enter).unwrap();
        let status = app.status.as_ref().unwrap();
        assert_eq!(status.text, "Playing Purr (sounds/purr.mp3) at 50% volume");
    }

    #[test]
    fn help_closes_on_any_key() {
        let mut app = test_app();
        app.handle_key(KeyCode::Char('?')).unwrap();
        assert!(matches!(app.mode, Mode::Help));
        assert!(!app.handle_key(KeyCode::Char('q')).unwrap());
        assert!(matches!(app.mode, Mode::Normal));
    }

    #[test]
    fn page_renders_all_sections() {
        let app = test_app();
        let text = render(&app);
        assert!(text.contains("CatWorld"));
        assert!(text.contains("Welcome to the Fascinating World of Cats"));
        assert!(text.contains("Characteristics of Cats"));
        assert!(text.contains("Siamese"));
        assert!(text.contains("Cat Fact Generator"));
        assert!(text.contains("Press [f] to generate a cat fact."));
        assert!(text.contains("Meow"));
        assert!(text.contains("Likes: 0"));
        assert!(text.contains("Cat Breed Popularity"));
        assert!(text.contains("2023 CatWorld"));
        assert!(text.contains("Instagram   Facebook   Twitter"));
    }

    #[test]
    fn footer_and_chart_fit_eighty_columns() {
        let app = test_app();
        let rows = render_rows(&app, 80, 40);
        let text = rows.concat();

        assert!(rows[39].contains("© 2023 CatWorld. All rights reserved."));
        assert!(rows[39].contains("Twitter"));
        assert!(rows[37].contains("[Enter] Play"));
        assert!(rows[38].contains("[q] Quit"));
        assert!(rows.iter().any(|row| row.contains("British")));
        assert!(!text.contains("tish Shorthair"));
    }

    #[test]
    fn toast_and_overlays_render() {
        let mut app = test_app();
        app.handle_key(KeyCode::Char('f')).unwrap();
        assert!(render(&app).contains("New Cat Fact!"));

        app.handle_key(KeyCode::Char('?')).unwrap();
        assert!(render(&app).contains("Previous / next breed"));

        app.handle_key(KeyCode::Char('x')).unwrap();
        app.handle_key(KeyCode::Char('v')).unwrap();
        assert!(render(&app).contains("Set Volume"));
    }
}
