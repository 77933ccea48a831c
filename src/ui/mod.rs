mod styles;
mod ui_config;
mod ui_panels;
mod ui_plot_view;
mod ui_text;

pub(crate) use ui_config::{UI_CONFIG, UI_TEXT};
pub(crate) use ui_panels::{AlertStack, ControlStatus, ControlsPanel, HistoryTable, SummaryCard};
pub use ui_plot_view::PlotView;
