use {
    anyhow::Context as _,
    eframe::{
        Frame, Storage,
        egui::{CentralPanel, Context, RichText, ScrollArea, SidePanel, TopBottomPanel, Visuals},
    },
    serde::{Deserialize, Serialize},
    std::{sync::Arc, time::Duration},
};

use crate::{
    Cli,
    app::{AppState, FormState},
    config::{DashboardConfig, PLOT_CONFIG},
    data::HttpTransport,
    engine::{Command, DashboardEngine, Dispatch, Operation, RepaintHook},
    ui::{
        AlertStack, ControlStatus, ControlsPanel, HistoryTable, PlotView, SummaryCard, UI_CONFIG,
        UI_TEXT,
    },
    utils::AppInstant,
};

/// Spinner refresh while a request is outstanding.
const BUSY_REPAINT: Duration = Duration::from_millis(100);

#[derive(Deserialize, Serialize)]
#[serde(default)]
pub struct App {
    pub(crate) form: FormState, // persists across sessions.
    #[serde(skip)]
    pub(crate) engine: Option<DashboardEngine<PlotView>>,
    #[serde(skip)]
    state: AppState,
}

impl Default for App {
    fn default() -> Self {
        Self {
            form: FormState::default(),
            engine: None,
            state: AppState::default(),
        }
    }
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let mut app: App = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };

        let config = args.dashboard_config();
        app.form = app.form.seeded(&config);
        app.state = AppState::Starting;
        app.engine = match Self::build_engine(&cc.egui_ctx, &args.api_base_url, config) {
            Ok(engine) => Some(engine),
            Err(e) => {
                log::error!("Dashboard engine unavailable: {:#}", e);
                None
            }
        };
        app
    }

    fn build_engine(
        ctx: &Context,
        base_url: &str,
        config: DashboardConfig,
    ) -> anyhow::Result<DashboardEngine<PlotView>> {
        let transport = HttpTransport::new(base_url)
            .with_context(|| format!("building HTTP client for {}", base_url))?;
        log::info!("Talking to prediction server at {}", base_url);

        let repaint_ctx = ctx.clone();
        let repaint: RepaintHook = Arc::new(move || repaint_ctx.request_repaint());

        Ok(DashboardEngine::new(
            config,
            Arc::new(transport),
            PlotView::new(),
            Some(repaint),
        ))
    }

    fn control_status(engine: &DashboardEngine<PlotView>) -> ControlStatus {
        let c = engine.coordinator();
        ControlStatus {
            loading: c.is_pending(Operation::LoadHistory),
            training: c.is_pending(Operation::Train),
            predicting: c.is_pending(Operation::Predict),
            train_enabled: c.is_control_enabled(Operation::Train),
            predict_enabled: c.is_control_enabled(Operation::Predict),
        }
    }

    pub(crate) fn tick_running_state(&mut self, ctx: &Context) {
        let Some(engine) = self.engine.as_mut() else {
            CentralPanel::default()
                .frame(UI_CONFIG.central_panel_frame())
                .show(ctx, |ui| {
                    ui.label(RichText::new(&UI_TEXT.error_no_engine).color(PLOT_CONFIG.color_danger));
                });
            return;
        };

        engine.update();

        let mut commands: Vec<Command> = Vec::new();
        let status = Self::control_status(engine);

        TopBottomPanel::top("title_bar")
            .frame(UI_CONFIG.top_panel_frame())
            .show(ctx, |ui| {
                ui.heading(RichText::new(&UI_TEXT.app_title).color(UI_CONFIG.colors.heading));
            });

        SidePanel::left("controls")
            .resizable(false)
            .exact_width(UI_CONFIG.side_panel_width)
            .frame(UI_CONFIG.side_panel_frame())
            .show(ctx, |ui| {
                commands.extend(ControlsPanel::new(&mut self.form, status).render(ui));
            });

        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                commands.extend(AlertStack::render(
                    ui,
                    engine.coordinator().notifications().visible(),
                ));

                let plot_height = (ui.available_height() * PLOT_CONFIG.plot_height_pct).max(240.0);
                ScrollArea::vertical().show(ui, |ui| {
                    engine.coordinator_mut().sink_mut().show(ui, plot_height);

                    ui.add_space(8.0);
                    SummaryCard::render(ui, engine.coordinator().summary());

                    ui.add_space(8.0);
                    HistoryTable::render(ui, engine.coordinator().table_rows());
                });
            });

        for command in commands {
            if let Dispatch::Rejected(reason) = engine.dispatch(command) {
                log::debug!("UI command rejected: {:?}", reason);
            }
        }

        let coordinator = engine.coordinator();
        if coordinator.any_pending() {
            ctx.request_repaint_after(BUSY_REPAINT);
        }
        if let Some(wait) = coordinator
            .notifications()
            .next_expiry_in(AppInstant::now())
        {
            ctx.request_repaint_after(wait);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);
        self.state = match self.state {
            AppState::Starting => {
                if let Some(engine) = self.engine.as_mut() {
                    engine.start();
                }
                AppState::Running
            }
            AppState::Running => AppState::Running,
        };
        self.tick_running_state(ctx);
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        log::debug!(
            "💾 SAVE [App]: time_step={} epochs={} days={}",
            self.form.time_step,
            self.form.epochs,
            self.form.days
        );
        eframe::set_value(storage, eframe::APP_KEY, self);
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    ctx.set_visuals(visuals);
}
