// SPDX-License-Identifier: MPL-2.0
//! Application root state and wiring between the gallery, localization and
//! preferences.
//!
//! The `App` owns the [`GalleryController`] outright. Button and keyboard
//! messages mutate it in `update`, and `view` reads the current entry back,
//! so there is no other copy of the page index anywhere.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::GalleryController;
use crate::config;
use crate::i18n::fluent::I18n;
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    controller: GalleryController,
    theme_mode: ThemeMode,
    /// Resolved once at startup so System mode does not query the OS per frame.
    colors: ColorScheme,
    theme: Theme,
    show_page_indicator: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("current_index", &self.controller.current_index())
            .field("theme_mode", &self.theme_mode)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const WINDOW_DEFAULT_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 560;
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Iced asks for an `Fn` boot closure; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            controller: GalleryController::default(),
            theme_mode: ThemeMode::Light,
            colors: ColorScheme::light(),
            theme: Theme::Light,
            show_page_indicator: config::DEFAULT_SHOW_PAGE_INDICATOR,
        }
    }
}

impl App {
    /// Initializes application state from the CLI flags and persisted config.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir);

        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);

        if let Some(key) = config_warning {
            tracing::warn!("{}", i18n.tr(&key));
        }

        let theme_mode = config.general.theme_mode;
        let app = App {
            i18n,
            controller: GalleryController::default(),
            theme_mode,
            colors: theme_mode.colors(),
            theme: theme_mode.iced_theme(),
            show_page_indicator: config
                .display
                .show_page_indicator
                .unwrap_or(config::DEFAULT_SHOW_PAGE_INDICATOR),
        };
        tracing::info!(artworks = app.controller.len(), "gallery ready");

        (app, Task::none())
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        let title = self.i18n.text(self.controller.current_entry().title);
        format!("{title} - {app_name}")
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            controller: &mut self.controller,
        };
        update::update(&mut ctx, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            controller: &self.controller,
            colors: self.colors,
            show_page_indicator: self.show_page_indicator,
        })
    }
}
