pub mod detail_panel;
pub mod empty_state;
pub mod filter_bar;
pub mod help_bar;
pub mod help_popup;
pub mod loading_indicator;
pub mod nav_tabs;
pub mod notice_popup;
pub mod popup;
pub mod screen_title;
