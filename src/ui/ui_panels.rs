use eframe::egui::{
    Align, Button, ComboBox, DragValue, Layout, RichText, Spinner, TextEdit, Ui,
};
use egui_extras::{Column, TableBuilder};
use strum::IntoEnumIterator;

use crate::app::FormState;
use crate::config::PLOT_CONFIG;
use crate::config::constants::form::{MAX_EPOCHS, MAX_PREDICTION_DAYS, MAX_TIME_STEP};
use crate::domain::Period;
use crate::engine::Command;
use crate::models::Notification;
use crate::projection::{Sentiment, SummaryView, TableRow};
use crate::ui::styles::{LevelColor, UiStyleExt, apply_opacity};
use crate::ui::{UI_CONFIG, UI_TEXT};

/// Which controls accept a press this frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct ControlStatus {
    pub loading: bool,
    pub training: bool,
    pub predicting: bool,
    pub train_enabled: bool,
    pub predict_enabled: bool,
}

/// Ticker, period and the train/predict forms.
pub struct ControlsPanel<'a> {
    form: &'a mut FormState,
    status: ControlStatus,
}

impl<'a> ControlsPanel<'a> {
    pub fn new(form: &'a mut FormState, status: ControlStatus) -> Self {
        Self { form, status }
    }

    pub fn render(&mut self, ui: &mut Ui) -> Vec<Command> {
        let mut commands = Vec::new();

        ui.label_subheader(UI_TEXT.label_ticker.as_str());
        let ticker_edit = ui.add(TextEdit::singleline(&mut self.form.ticker).desired_width(120.0));
        if ticker_edit.changed() {
            commands.push(Command::SelectTicker(self.form.ticker.clone()));
        }

        ui.add_space(4.0);
        ui.label_subheader(UI_TEXT.label_period.as_str());
        ComboBox::from_id_salt("period_select")
            .selected_text(self.form.period.to_string())
            .show_ui(ui, |ui| {
                for period in Period::iter() {
                    ui.selectable_value(&mut self.form.period, period, period.to_string());
                }
            });

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            // Loads are never refused, a busy slot defers them
            if ui.button(UI_TEXT.button_load.as_str()).clicked() {
                commands.push(self.load_command());
            }
            if self.status.loading {
                ui.add(Spinner::new());
                ui.label_subdued(UI_TEXT.busy_loading.as_str());
            }
        });

        ui.separator();
        ui.heading(UI_TEXT.heading_train.as_str());
        ui.horizontal(|ui| {
            ui.label(UI_TEXT.label_time_step.as_str());
            ui.add(DragValue::new(&mut self.form.time_step).range(1..=MAX_TIME_STEP));
        });
        ui.horizontal(|ui| {
            ui.label(UI_TEXT.label_epochs.as_str());
            ui.add(DragValue::new(&mut self.form.epochs).range(1..=MAX_EPOCHS));
        });
        ui.horizontal(|ui| {
            let train = ui.add_enabled(
                self.status.train_enabled,
                Button::new(UI_TEXT.button_train.as_str()),
            );
            if train.clicked() {
                commands.push(Command::TrainModel {
                    ticker: self.form.ticker.clone(),
                    time_step: self.form.time_step,
                    epochs: self.form.epochs,
                });
            }
            if self.status.training {
                ui.add(Spinner::new());
                ui.label_subdued(UI_TEXT.busy_training.as_str());
            }
        });

        ui.separator();
        ui.heading(UI_TEXT.heading_predict.as_str());
        ui.horizontal(|ui| {
            ui.label(UI_TEXT.label_days.as_str());
            ui.add(DragValue::new(&mut self.form.days).range(1..=MAX_PREDICTION_DAYS));
        });
        ui.horizontal(|ui| {
            let predict = ui
                .add_enabled(
                    self.status.predict_enabled,
                    Button::new(UI_TEXT.button_predict.as_str()),
                )
                .on_disabled_hover_text(UI_TEXT.hint_predict_locked.as_str());
            if predict.clicked() {
                commands.push(Command::RequestPrediction {
                    days: self.form.days,
                });
            }
            if self.status.predicting {
                ui.add(Spinner::new());
                ui.label_subdued(UI_TEXT.busy_predicting.as_str());
            }
        });

        commands
    }

    fn load_command(&self) -> Command {
        Command::LoadHistory {
            ticker: self.form.ticker.clone(),
            period: self.form.period,
        }
    }
}

/// Stack of dismissible alerts, newest on top.
pub struct AlertStack;

impl AlertStack {
    pub fn render<'n>(ui: &mut Ui, notices: impl Iterator<Item = &'n Notification>) -> Vec<Command> {
        let mut commands = Vec::new();
        for notice in notices {
            let color = notice.level.color();
            UI_CONFIG
                .card_frame(apply_opacity(color, 0.25))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(&notice.message).color(PLOT_CONFIG.color_text_neutral));
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            if ui.small_button(UI_TEXT.icon_close.as_str()).clicked() {
                                commands.push(Command::DismissNotification(notice.id));
                            }
                        });
                    });
                });
            ui.add_space(4.0);
        }
        commands
    }
}

pub struct SummaryCard;

impl SummaryCard {
    pub fn render(ui: &mut Ui, summary: Option<&SummaryView>) {
        UI_CONFIG.card_frame(UI_CONFIG.colors.card).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label_subheader(UI_TEXT.heading_summary.as_str());
            let Some(view) = summary else {
                ui.label_subdued(UI_TEXT.summary_empty.as_str());
                return;
            };
            let color = view.sentiment.color();
            let arrow = match view.sentiment {
                Sentiment::Positive => UI_TEXT.icon_up.as_str(),
                Sentiment::Negative => UI_TEXT.icon_down.as_str(),
            };
            ui.horizontal(|ui| {
                ui.metric(
                    UI_TEXT.label_current.as_str(),
                    &view.current_price,
                    PLOT_CONFIG.color_text_neutral,
                );
                ui.add_space(16.0);
                ui.metric(
                    UI_TEXT.label_predicted.as_str(),
                    &view.predicted_price,
                    PLOT_CONFIG.color_text_neutral,
                );
                ui.add_space(16.0);
                ui.metric(
                    UI_TEXT.label_change.as_str(),
                    &format!("{} {}", arrow, view.change_pct),
                    color,
                );
            });
        });
    }
}

/// Most-recent-first OHLCV rows.
pub struct HistoryTable;

impl HistoryTable {
    pub fn render(ui: &mut Ui, rows: &[TableRow]) {
        ui.label_subheader(UI_TEXT.heading_table.as_str());
        if rows.is_empty() {
            ui.label_subdued(UI_TEXT.table_empty.as_str());
            return;
        }

        let height = UI_CONFIG.table_row_height;
        TableBuilder::new(ui)
            .id_salt("history_table")
            .striped(true)
            .column(Column::auto().at_least(90.0))
            .columns(Column::remainder(), 5)
            .header(height, |mut header| {
                for title in [
                    &UI_TEXT.col_date,
                    &UI_TEXT.col_open,
                    &UI_TEXT.col_high,
                    &UI_TEXT.col_low,
                    &UI_TEXT.col_close,
                    &UI_TEXT.col_volume,
                ] {
                    header.col(|ui| {
                        ui.strong(title.as_str());
                    });
                }
            })
            .body(|mut body| {
                for row in rows {
                    body.row(height, |mut table_row| {
                        for cell in [
                            &row.date,
                            &row.open,
                            &row.high,
                            &row.low,
                            &row.close,
                            &row.volume,
                        ] {
                            table_row.col(|ui| {
                                ui.label(cell.as_str());
                            });
                        }
                    });
                }
            });
    }
}
