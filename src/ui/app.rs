//! Main Assister application struct and eframe integration
//!
//! Owns the shell state, theme, and navigation port, and wires the two input
//! events (mic tap, nav tap) into them. Optionally drives a scripted scenario.

use egui::{CentralPanel, Frame, RichText, TopBottomPanel};
use tracing::info;

use crate::nav::{Destination, LoggingNavigator, NavigationPort};
use crate::scenario::{CheckContext, Scenario, ScenarioCommand, ScenarioRunner};
use crate::ui::components::{MicButton, NavBar};
use crate::ui::state::{MicVisuals, ShellState};
use crate::ui::theme::Theme;

/// Height of the centered column (title through status label), used to pad
/// the content into the vertical middle of the page.
const CENTER_CONTENT_HEIGHT: f32 = 371.0;

/// Main Assister application
pub struct AssisterApp {
    /// Whether the app has been initialized
    initialized: bool,
    /// Shell state
    state: ShellState,
    /// UI theme
    theme: Theme,
    /// Where nav taps are routed
    navigator: Box<dyn NavigationPort>,
    /// Scenario runner (if running a scripted scenario)
    scenario_runner: Option<ScenarioRunner>,
    /// Exit code requested by a scenario (if any)
    pending_exit: Option<i32>,
}

impl AssisterApp {
    /// Create a new Assister application
    pub fn new(cc: &eframe::CreationContext<'_>, scenario: Option<Scenario>) -> Self {
        let theme = Theme::dark();
        theme.apply(&cc.egui_ctx);

        let scenario_runner = scenario.map(ScenarioRunner::new);

        Self {
            initialized: false,
            state: ShellState::new(),
            theme,
            navigator: Box::new(LoggingNavigator::new()),
            scenario_runner,
            pending_exit: None,
        }
    }

    /// Replace the navigation port (a real router would plug in here)
    pub fn with_navigator(mut self, navigator: Box<dyn NavigationPort>) -> Self {
        self.navigator = navigator;
        self
    }

    /// Initialize the application (called on first frame)
    fn initialize(&mut self) {
        if self.initialized {
            return;
        }
        self.initialized = true;

        if let Some(ref mut runner) = self.scenario_runner {
            runner.start();
        }

        info!("Assister UI initialized");
    }

    /// Record a nav selection and route it through the port
    fn navigate(&mut self, destination: Destination) {
        self.state.select(destination);
        self.navigator.navigate_to(destination);
    }

    /// Process pending scenario commands
    fn process_scenario_commands(&mut self, ctx: &egui::Context) {
        // Collect pending commands first so the runner borrow ends before
        // command execution mutates the rest of the app
        let mut pending = Vec::new();
        if let Some(ref mut runner) = self.scenario_runner {
            while let Some(entry) = runner.poll() {
                pending.push(entry);
            }
        }

        for (command, check) in pending {
            match command {
                ScenarioCommand::TapMic => {
                    info!("[SCENARIO] Executing: TapMic");
                    self.state.toggle_listening();
                }
                ScenarioCommand::SelectNav(destination) => {
                    info!("[SCENARIO] Executing: SelectNav({destination})");
                    self.navigate(destination);
                }
                ScenarioCommand::Log => {}
                ScenarioCommand::Exit { code } => {
                    info!("[SCENARIO] Executing: Exit with code {code}");
                    self.pending_exit = Some(code);
                }
            }

            if let Some(ref check) = check {
                let context = CheckContext {
                    listening: self.state.is_listening(),
                    selected_index: self.state.selected.index(),
                    status_text: self.state.status_text(),
                };
                if let Some(ref mut runner) = self.scenario_runner {
                    runner.run_check(check, &context);
                }
            }
        }

        // Close out the run once every action has executed
        if let Some(ref runner) = self.scenario_runner {
            if runner.is_completed() {
                info!("{}", runner.summary());

                if let Some(code) = self.pending_exit.take() {
                    let final_code = if runner.passed() { code } else { 1 };
                    info!("[SCENARIO] Exiting with code {final_code}");
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    std::process::exit(final_code);
                }
            }
        }
    }
}

impl eframe::App for AssisterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.initialize();

        self.process_scenario_commands(ctx);

        // Scenario timing needs a live frame clock
        if self.scenario_runner.is_some() {
            ctx.request_repaint();
        }

        // Bottom navigation bar
        TopBottomPanel::bottom("nav_bar")
            .exact_height(self.theme.nav_height)
            .frame(Frame::none().fill(self.theme.nav_bar))
            .show(ctx, |ui| {
                let tapped = NavBar::new(&mut self.state, &self.theme).show(ui);
                if let Some(destination) = tapped {
                    self.navigator.navigate_to(destination);
                }
            });

        // Main page
        CentralPanel::default()
            .frame(Frame::none().fill(self.theme.bg_primary))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    // Center the column in the remaining page height
                    let top = ((ui.available_height() - CENTER_CONTENT_HEIGHT) / 2.0).max(0.0);
                    ui.add_space(top);

                    ui.label(
                        RichText::new("Assister")
                            .size(32.0)
                            .strong()
                            .color(self.theme.text_primary),
                    );
                    ui.add_space(5.0);
                    ui.label(
                        RichText::new("Your AI assistant")
                            .size(16.0)
                            .color(self.theme.text_muted),
                    );

                    ui.add_space(60.0);

                    MicButton::new(&mut self.state, &self.theme).show(ui);

                    ui.add_space(30.0);

                    let visuals = MicVisuals::for_state(&self.theme, self.state.listening);
                    ui.label(
                        RichText::new(visuals.status_text)
                            .size(18.0)
                            .color(visuals.status_color),
                    );
                });
            });
    }
}
