pub mod tabs;
pub mod ui;
