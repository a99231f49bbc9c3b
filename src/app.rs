use std::process::ExitCode;

use anyhow::{anyhow, Context as _};
use egui::{Align2, Color32, Context, FontId, Id, Key, LayerId, Order, Painter, Vec2};

use crate::console;
use crate::pong::app_game_drawer::AppGameDrawer;
use crate::pong::mechanics::{GameInput, PaddleControl, PongMechanics, ReplayChoice};
use crate::pong::rules::{ReplayPrompt, Variant, FRAME_DELAY, SCREEN_HEIGHT, SCREEN_WIDTH, WINDOW_TITLE};

/// What the window should do after a frame's game logic has run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameAction {
    Paint,
    Quit,
}

/// Owns the game state and decides per frame between quitting, asking on the console and stepping.
pub struct FrameDriver {
    pub game_state: PongMechanics,
    /// the win frame is on screen; block on the console question next frame
    console_prompt_due: bool,
}

impl FrameDriver {
    pub fn new(game_state: PongMechanics) -> Self {
        Self {
            game_state,
            console_prompt_due: false,
        }
    }

    /// One frame of input -> time step.
    /// `ask_console` is only called on the frame after the win message was painted.
    pub fn next_frame(
        &mut self,
        mut input: GameInput,
        ask_console: impl FnOnce() -> bool,
    ) -> FrameAction {
        if self.console_prompt_due {
            self.console_prompt_due = false;
            input.replay = if ask_console() {
                ReplayChoice::PlayAgain
            } else {
                ReplayChoice::Quit
            };
            log::info!("replay decision: {:?}", input.replay);
        }

        if input.exit || (self.game_state.is_over() && input.replay == ReplayChoice::Quit) {
            log::info!("quit; final score {}", self.game_state.score);
            return FrameAction::Quit;
        }

        self.game_state.time_step(input);

        if self.game_state.is_over() && self.game_state.rules.replay == ReplayPrompt::Console {
            self.console_prompt_due = true;
        }
        FrameAction::Paint
    }
}

/// eframe front end: reads keys, runs the [FrameDriver] and paints the result
pub struct PongApp {
    driver: FrameDriver,
}

impl PongApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        game_state: PongMechanics,
    ) -> Self {
        Self {
            driver: FrameDriver::new(game_state),
        }
    }

    fn read_ui_control(
        &self,
        ctx: &Context,
    ) -> GameInput {
        let left = ctx.input(|i| paddle_control(i.key_down(Key::W), i.key_down(Key::S)));
        let right = ctx.input(|i| paddle_control(i.key_down(Key::ArrowUp), i.key_down(Key::ArrowDown)));
        let replay = ctx.input(|i| {
            replay_choice(
                self.driver.game_state.rules.replay,
                i.key_pressed(Key::Y) || i.key_pressed(Key::Enter),
                i.key_pressed(Key::N),
            )
        });
        let exit = ctx.input(|i| i.key_pressed(Key::Escape));
        GameInput { left, right, replay, exit }
    }

    fn draw_game_content(&self, painter: &Painter) {
        let paint_offset = painter.clip_rect().min.to_vec2();
        let canvas_size = painter.clip_rect().size();

        let drawer = AppGameDrawer::new(canvas_size, &self.driver.game_state);
        for mut shape in drawer.shapes() {
            shape.translate(paint_offset);
            painter.add(shape);
        }
        for label in drawer.labels() {
            painter.text(
                label.pos + paint_offset,
                Align2::CENTER_CENTER,
                label.text,
                FontId::proportional(label.font_size),
                Color32::WHITE,
            );
        }
    }
}

impl eframe::App for PongApp {
    fn update(
        &mut self,
        ctx: &Context,
        frame: &mut eframe::Frame,
    ) {
        let input = self.read_ui_control(ctx);
        match self.driver.next_frame(input, console::ask_keep_playing_on_stdio) {
            FrameAction::Quit => frame.close(),
            FrameAction::Paint => {
                let game_painter = ctx.layer_painter(LayerId::new(Order::Background, Id::new("pong")));
                self.draw_game_content(&game_painter);
                ctx.request_repaint_after(FRAME_DELAY);
            }
        }
    }
}

/// Both keys or none held: the paddle stays
pub fn paddle_control(up_held: bool, down_held: bool) -> PaddleControl {
    match (up_held, down_held) {
        (true, false) => PaddleControl::Up,
        (false, true) => PaddleControl::Down,
        _ => PaddleControl::None,
    }
}

/// Keyboard answer to the replay question; the console variant ignores the keys
pub fn replay_choice(prompt: ReplayPrompt, yes_pressed: bool, no_pressed: bool) -> ReplayChoice {
    match prompt {
        ReplayPrompt::Console => ReplayChoice::Undecided,
        ReplayPrompt::Keyboard if yes_pressed => ReplayChoice::PlayAgain,
        ReplayPrompt::Keyboard if no_pressed => ReplayChoice::Quit,
        ReplayPrompt::Keyboard => ReplayChoice::Undecided,
    }
}

pub fn run_native_game(variant: Variant) -> anyhow::Result<()> {
    let rules = variant.rules();
    log::info!("starting {:?}: {:?}", variant, rules);

    let native_options = eframe::NativeOptions {
        initial_window_size: Some(Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT)),
        resizable: false,
        default_theme: eframe::Theme::Dark,
        ..Default::default()
    };
    eframe::run_native(WINDOW_TITLE, native_options, Box::new(move |cc| {
        Box::new(PongApp::new(cc, PongMechanics::new(rules)))
    }))
    .map_err(|e| anyhow!("{e}"))
    .context("could not start the game window")
}

/// Runs a variant to the end; exit code 1 if the window could not be opened
pub fn launch(variant: Variant) -> ExitCode {
    match run_native_game(variant) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("Error initializing graphics: {e:#}");
            ExitCode::FAILURE
        }
    }
}
