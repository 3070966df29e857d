//! System tray icon driven by the core's view and menu model.
//!
//! The icon, tooltip and context menu are replaced wholesale from
//! [`TrayView`] and [`MenuModel`] values rendered by the controller.

use crate::{AppError, AppResult, icons};

use power_tray_core::{Language, MenuEntry, MenuModel, PresentationKey, TrayView};

use std::panic::Location;

use error_location::ErrorLocation;
use tracing::{debug, info, instrument};
use tray_icon::menu::{CheckMenuItem, IsMenuItem, Menu, MenuItem, PredefinedMenuItem, Submenu};
use tray_icon::{TrayIcon, TrayIconBuilder};

/// System tray icon manager.
pub struct TrayManager {
    tray_icon: TrayIcon,
    shown_icon: Option<PresentationKey>,
}

impl TrayManager {
    /// Create the tray icon with the application icon and an empty menu.
    #[track_caller]
    #[instrument]
    pub fn new(language: Language) -> AppResult<Self> {
        let icon = icons::load_icon(None)?;

        let tray_icon = TrayIconBuilder::new()
            .with_tooltip(language.app_title())
            .with_menu(Box::new(Menu::new()))
            .with_menu_on_left_click(false)
            .with_icon(icon)
            .build()
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to create tray icon: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!("System tray icon initialized");

        Ok(Self {
            tray_icon,
            shown_icon: None,
        })
    }

    /// Show `view`, replacing the context menu when `menu` is given.
    #[track_caller]
    #[instrument(skip(self, menu), fields(icon = ?view.icon, has_menu = menu.is_some()))]
    pub fn render(&mut self, view: &TrayView, menu: Option<&MenuModel>) -> AppResult<()> {
        if view.icon != self.shown_icon {
            self.tray_icon
                .set_icon(Some(icons::load_icon(view.icon)?))
                .map_err(|e| AppError::TrayError {
                    reason: format!("Failed to update icon: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                })?;
            self.shown_icon = view.icon;
        }

        self.tray_icon
            .set_tooltip(Some(&view.tooltip))
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to update tooltip: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        if let Some(model) = menu {
            self.tray_icon.set_menu(Some(Box::new(build_menu(model)?)));
            debug!("Tray menu replaced");
        }

        Ok(())
    }
}

/// Build a native menu from the model.
#[track_caller]
pub(crate) fn build_menu(model: &MenuModel) -> AppResult<Menu> {
    let items = build_items(&model.entries)?;
    let menu = Menu::new();
    menu.append_items(&as_refs(&items))
        .map_err(|e| AppError::TrayError {
            reason: format!("Failed to populate menu: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;
    Ok(menu)
}

#[track_caller]
fn build_items(entries: &[MenuEntry]) -> AppResult<Vec<Box<dyn IsMenuItem>>> {
    entries.iter().map(build_item).collect()
}

#[track_caller]
fn build_item(entry: &MenuEntry) -> AppResult<Box<dyn IsMenuItem>> {
    let item: Box<dyn IsMenuItem> = match entry {
        MenuEntry::Separator => Box::new(PredefinedMenuItem::separator()),
        MenuEntry::Item(item) => match (&item.id, item.checked) {
            (Some(id), Some(checked)) => Box::new(CheckMenuItem::with_id(
                id.as_str(),
                &item.label,
                item.enabled,
                checked,
                None,
            )),
            (Some(id), None) => Box::new(MenuItem::with_id(
                id.as_str(),
                &item.label,
                item.enabled,
                None,
            )),
            (None, _) => Box::new(MenuItem::new(&item.label, item.enabled, None)),
        },
        MenuEntry::Submenu(sub) => {
            let children = build_items(&sub.entries)?;
            let submenu =
                Submenu::with_items(&sub.label, true, &as_refs(&children)).map_err(|e| {
                    AppError::TrayError {
                        reason: format!("Failed to build submenu {:?}: {}", sub.label, e),
                        location: ErrorLocation::from(Location::caller()),
                    }
                })?;
            Box::new(submenu)
        }
    };
    Ok(item)
}

fn as_refs(items: &[Box<dyn IsMenuItem>]) -> Vec<&dyn IsMenuItem> {
    items.iter().map(|item| item.as_ref()).collect()
}
