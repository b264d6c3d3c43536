use glam::{Vec2, Vec3};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};

use strider::{Buttons, Simulation};

pub struct DemoStats {
    pub elapsed: f32,
    pub tick: u64,
    pub phase: &'static str,
    pub position: Vec3,
    pub vertical_velocity: f32,
    pub grounded: bool,
    pub crouching: bool,
    pub height: f32,
    pub standing_height: f32,
    pub eye_height: f32,
    pub yaw: f32,
    pub pitch: f32,
    pub jump_count: u32,
    pub coyote_timer: f32,
    pub move_axes: Vec2,
    pub auto_run: bool,
    pub sprint_held: bool,
    pub crouch_held: bool,
}

impl DemoStats {
    pub fn collect(sim: &Simulation, phase: &'static str, elapsed: f32) -> Self {
        let state = &sim.state;
        Self {
            elapsed,
            tick: sim.tick_count(),
            phase,
            position: sim.feet_position(),
            vertical_velocity: state.vertical_velocity,
            grounded: sim.grounded(),
            crouching: state.is_crouching,
            height: state.current_height,
            standing_height: sim.controller().standing_height(),
            eye_height: sim.camera.eye_height(),
            yaw: state.yaw,
            pitch: state.pitch,
            jump_count: state.jump_count,
            coyote_timer: state.coyote_timer,
            move_axes: state.move_axes,
            auto_run: state.auto_run,
            sprint_held: state.sprint_held,
            crouch_held: state.crouch_held,
        }
    }

    fn held_buttons(&self) -> Buttons {
        let mut buttons = Buttons::empty();
        buttons.set(Buttons::SPRINT, self.sprint_held);
        buttons.set(Buttons::CROUCH, self.crouch_held);
        buttons.set(Buttons::AUTO_RUN, self.auto_run);
        buttons
    }
}

pub fn render(frame: &mut Frame, stats: &DemoStats) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(8),
            Constraint::Length(5),
            Constraint::Min(0),
        ])
        .split(frame.area());

    render_header(frame, chunks[0], stats);
    render_posture(frame, chunks[1], stats);
    render_movement(frame, chunks[2], stats);
    render_script(frame, chunks[3], stats);
    render_help(frame, chunks[4]);
}

fn render_header(frame: &mut Frame, area: Rect, stats: &DemoStats) {
    let block = Block::default()
        .title(" Strider Demo ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let text = format!(
        "Elapsed: {:6.1}s  |  Tick: {}  |  Phase: {}",
        stats.elapsed, stats.tick, stats.phase
    );

    let paragraph = Paragraph::new(text)
        .block(block)
        .style(Style::default().fg(Color::White));

    frame.render_widget(paragraph, area);
}

fn render_posture(frame: &mut Frame, area: Rect, stats: &DemoStats) {
    let block = Block::default()
        .title(" Posture ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let ratio = (stats.height / stats.standing_height).clamp(0.0, 1.0) as f64;
    let color = if stats.crouching { Color::Yellow } else { Color::Green };
    let gauge = Gauge::default()
        .block(block)
        .gauge_style(Style::default().fg(color))
        .ratio(ratio)
        .label(format!(
            "{:.2}m / {:.2}m{}",
            stats.height,
            stats.standing_height,
            if stats.crouching { "  (crouched)" } else { "" }
        ));

    frame.render_widget(gauge, area);
}

fn render_movement(frame: &mut Frame, area: Rect, stats: &DemoStats) {
    let block = Block::default()
        .title(" Movement ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let grounded_style = if stats.grounded {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Red)
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("Position: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!(
                    "({:7.2}, {:6.2}, {:7.2})",
                    stats.position.x, stats.position.y, stats.position.z
                ),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(vec![
            Span::styled("Vertical: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{:6.2} m/s", stats.vertical_velocity),
                Style::default().fg(Color::White),
            ),
            Span::styled("   Grounded: ", Style::default().fg(Color::Gray)),
            Span::styled(format!("{}", stats.grounded), grounded_style),
        ]),
        Line::from(vec![
            Span::styled("View: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("yaw {:6.1}  pitch {:6.1}", stats.yaw, stats.pitch),
                Style::default().fg(Color::White),
            ),
            Span::styled("   Eye: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{:.2}m", stats.eye_height),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(vec![
            Span::styled("Jumps: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{}", stats.jump_count),
                Style::default().fg(Color::White),
            ),
            Span::styled("   Coyote: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{:5.2}s", stats.coyote_timer.max(0.0)),
                Style::default().fg(Color::White),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

fn render_script(frame: &mut Frame, area: Rect, stats: &DemoStats) {
    let block = Block::default()
        .title(" Input ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));

    let buttons = stats.held_buttons();
    let button_label = |flag: Buttons, name: &'static str| {
        if buttons.contains(flag) {
            Span::styled(
                format!("{name} "),
                Style::default().fg(Color::Black).bg(Color::Magenta),
            )
        } else {
            Span::styled(format!("{name} "), Style::default().fg(Color::DarkGray))
        }
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("Axes: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("({:5.2}, {:5.2})", stats.move_axes.x, stats.move_axes.y),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(vec![
            Span::styled("Held: ", Style::default().fg(Color::Gray)),
            button_label(Buttons::SPRINT, "SPRINT"),
            button_label(Buttons::CROUCH, "CROUCH"),
            button_label(Buttons::AUTO_RUN, "AUTO-RUN"),
        ]),
    ];

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

fn render_help(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Controls ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let text = Paragraph::new("Press 'q' or ESC to quit")
        .block(block)
        .style(Style::default().add_modifier(Modifier::DIM));

    frame.render_widget(text, area);
}
