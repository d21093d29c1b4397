use std::time::Duration;

use iced::{
    alignment, event, executor, mouse, subscription,
    widget::canvas::{self, Cache, Geometry, Path, Stroke},
    window, Application, Color, Command, Element, Event, Length, Point, Rectangle, Renderer,
    Subscription, Theme,
};
use tracing::{debug, error, info};

use crate::{
    render::recorder::{DrawCommand, FrameRecorder},
    sim::{body::Rgb, units::AU, vector::Vector},
    simulation_loop::{LoopState, SimulationLoop},
};

const LABEL_SIZE: f32 = 16.;
const TRAJECTORY_WIDTH: f32 = 2.;

pub(crate) struct Flags {
    pub(crate) simulation: SimulationLoop<FrameRecorder>,
    pub(crate) tick_period: Duration,
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum Message {
    Tick,
    CloseRequested,
    Resized { width: u32, height: u32 },
}

pub(crate) struct Gui {
    simulation: SimulationLoop<FrameRecorder>,
    tick_period: Duration,
    scene: Cache,
}

impl Application for Gui {
    type Executor = executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = Flags;

    fn new(flags: Flags) -> (Self, Command<Message>) {
        let gui = Gui {
            simulation: flags.simulation,
            tick_period: flags.tick_period,
            scene: Cache::new(),
        };
        (gui, Command::none())
    }

    fn title(&self) -> String {
        format!(
            "Planet Simulation - day {:.0}",
            self.simulation.system().elapsed_days()
        )
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::CloseRequested => {
                info!("window close requested");
                self.simulation.surface_mut().request_quit();
                Command::none()
            }
            Message::Resized { width, height } => {
                debug!(width, height, "window resized");
                self.simulation.resize(width, height);
                self.scene.clear();
                Command::none()
            }
            Message::Tick => match self.simulation.tick() {
                Ok(LoopState::Running) => {
                    self.scene.clear();
                    Command::none()
                }
                Ok(LoopState::Stopped) => window::close(),
                Err(err) => {
                    error!(%err, "simulation failed");
                    std::process::exit(1);
                }
            },
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch(vec![
            iced::time::every(self.tick_period).map(|_| Message::Tick),
            subscription::events_with(window_events),
        ])
    }

    fn view(&self) -> Element<'_, Message> {
        canvas::Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn window_events(event: Event, _status: event::Status) -> Option<Message> {
    match event {
        Event::Window(window::Event::CloseRequested) => Some(Message::CloseRequested),
        Event::Window(window::Event::Resized { width, height }) => {
            Some(Message::Resized { width, height })
        }
        _ => None,
    }
}

fn to_color(color: Rgb) -> Color {
    Color::from_rgb8(color.r, color.g, color.b)
}

fn to_point(vector: &Vector) -> Point {
    Point::new(vector.x as f32, vector.y as f32)
}

fn paint(frame: &mut canvas::Frame, command: &DrawCommand) {
    match command {
        DrawCommand::Trajectory { points, color } => {
            let path = Path::new(|builder| {
                let mut points = points.iter();
                if let Some(first) = points.next() {
                    builder.move_to(to_point(first));
                }
                for point in points {
                    builder.line_to(to_point(point));
                }
            });
            frame.stroke(
                &path,
                Stroke::default()
                    .with_color(to_color(*color))
                    .with_width(TRAJECTORY_WIDTH),
            );
        }
        DrawCommand::Disk {
            center,
            radius,
            color,
        } => {
            frame.fill(&Path::circle(to_point(center), *radius), to_color(*color));
        }
        DrawCommand::Label { position, text } => frame.fill_text(canvas::Text {
            content: text.clone(),
            position: to_point(position),
            color: Color::WHITE,
            size: LABEL_SIZE,
            horizontal_alignment: alignment::Horizontal::Center,
            vertical_alignment: alignment::Vertical::Center,
            ..canvas::Text::default()
        }),
    }
}

impl canvas::Program<Message> for Gui {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let scene = self.scene.draw(renderer, bounds.size(), |frame| {
            frame.fill_rectangle(Point::ORIGIN, frame.size(), Color::BLACK);
            for command in self.simulation.surface().presented() {
                paint(frame, command);
            }
        });

        let mut overlay = canvas::Frame::new(renderer, bounds.size());
        if let Some(position) = cursor.position_in(bounds) {
            let screen = Vector::new(position.x as f64, position.y as f64);
            let world = self.simulation.viewport().screen_to_world(&screen);
            overlay.fill_text(canvas::Text {
                content: format!("{:.3} AU, {:.3} AU", world.x / AU, world.y / AU),
                position: Point::new(10., bounds.height - 10.),
                color: Color::WHITE,
                size: LABEL_SIZE,
                vertical_alignment: alignment::Vertical::Bottom,
                ..canvas::Text::default()
            });
        }

        vec![scene, overlay.into_geometry()]
    }
}
