mod menu_model;
mod view;

pub use {
    menu_model::{MenuContext, MenuEntry, MenuItemModel, MenuModel, SubmenuModel},
    view::{TOOLTIP_MAX_CHARS, TrayView, tray_tooltip},
};
