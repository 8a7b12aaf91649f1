pub mod chart_view;
pub mod output_format;
pub mod theme;
