//! Update available banner
//!
//! A dismissible card pinned near the top of the screen that announces a new
//! release. The parent supplies the version label, a short message and two
//! callbacks; the banner only owns its own visibility.
//!
//! Both buttons hide the banner for good. The update path calls back first
//! and then hides, the dismiss path hides first and then calls back.

use std::sync::Arc;
use std::time::Instant;

use iced::alignment::Vertical;
use iced::font::Weight;
use iced::widget::{Space, button, column, container, row, svg, text};
use iced::{Alignment, Element, Fill, Font, Length, Padding};

use crate::features::haptics::{HapticFeedback, HapticsManager};
use crate::ui::animation::PresenceTransition;
use crate::ui::icons;
use crate::ui::theme::{self, faded};

const TITLE: &str = "Update Available";
const UPDATE_LABEL: &str = "Update";

const ICON_BADGE_SIZE: f32 = 36.0;
const ICON_SIZE: f32 = 18.0;
const DISMISS_SIZE: f32 = 28.0;
const DISMISS_ICON_SIZE: f32 = 10.0;
const CARD_PADDING: f32 = 16.0;
const CARD_SPACING: f32 = 12.0;
const INSET_HORIZONTAL: f32 = 16.0;
const INSET_TOP: f32 = 8.0;
const TITLE_SIZE: f32 = 15.0;
const SUBTITLE_SIZE: f32 = 12.0;
const TEXT_SPACING: f32 = 2.0;
const LINE_HEIGHT: f32 = 1.3;
const BUTTON_PADDING_VERTICAL: f32 = 8.0;
const BUTTON_PADDING_HORIZONTAL: f32 = 16.0;

const fn max(a: f32, b: f32) -> f32 {
    if a > b { a } else { b }
}

/// Two stacked text lines
const MESSAGE_HEIGHT: f32 = (TITLE_SIZE + SUBTITLE_SIZE) * LINE_HEIGHT + TEXT_SPACING;
const UPDATE_BUTTON_HEIGHT: f32 = TITLE_SIZE * LINE_HEIGHT + BUTTON_PADDING_VERTICAL * 2.0;

/// Tallest child of the card row
const ROW_HEIGHT: f32 = max(
    max(ICON_BADGE_SIZE, MESSAGE_HEIGHT),
    max(UPDATE_BUTTON_HEIGHT, DISMISS_SIZE),
);

/// Distance the banner travels when sliding in from the top edge
const SLOT_HEIGHT: f32 = INSET_TOP + CARD_PADDING * 2.0 + ROW_HEIGHT;

const SEMIBOLD: Font = Font {
    weight: Weight::Semibold,
    ..Font::DEFAULT
};

/// Zero-argument callback supplied by the parent. Never awaited.
pub type Callback = Box<dyn Fn() + Send + Sync>;

/// Construction parameters, fixed for the lifetime of the banner
pub struct BannerProps {
    pub version: String,
    pub message: String,
    pub on_dismiss: Callback,
    pub on_update: Callback,
}

impl BannerProps {
    /// Props with no-op callbacks
    pub fn new(version: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            message: message.into(),
            on_dismiss: Box::new(|| {}),
            on_update: Box::new(|| {}),
        }
    }

    pub fn on_dismiss(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_dismiss = Box::new(callback);
        self
    }

    pub fn on_update(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_update = Box::new(callback);
        self
    }

    /// `"<message> (v<version>)"`
    pub fn subtitle(&self) -> String {
        format!("{} (v{})", self.message, self.version)
    }
}

impl std::fmt::Debug for BannerProps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BannerProps")
            .field("version", &self.version)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// User interactions produced by [`UpdateBanner::view`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    UpdatePressed,
    DismissPressed,
}

/// Text shown by a visible banner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerContent {
    pub title: &'static str,
    pub subtitle: String,
}

pub struct UpdateBanner {
    props: BannerProps,
    is_visible: bool,
    presence: PresenceTransition,
    haptics: Arc<dyn HapticFeedback>,
}

impl std::fmt::Debug for UpdateBanner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpdateBanner")
            .field("props", &self.props)
            .field("is_visible", &self.is_visible)
            .field("presence", &self.presence)
            .finish_non_exhaustive()
    }
}

impl UpdateBanner {
    /// Mount a visible banner that slides in from the top
    pub fn new(props: BannerProps) -> Self {
        tracing::debug!("Mounting update banner for v{}", props.version);
        Self {
            props,
            is_visible: true,
            presence: PresenceTransition::entering(false),
            haptics: HapticsManager::shared(),
        }
    }

    /// Use a specific haptics service instead of the shared manager
    pub fn with_haptics(mut self, haptics: Arc<dyn HapticFeedback>) -> Self {
        self.haptics = haptics;
        self
    }

    /// Skip the slide/fade transitions
    pub fn reduce_motion(mut self, reduce_motion: bool) -> Self {
        self.presence = PresenceTransition::entering(reduce_motion);
        self
    }

    pub fn is_visible(&self) -> bool {
        self.is_visible
    }

    /// Rendered text while visible, `None` once hidden
    pub fn content(&self) -> Option<BannerContent> {
        self.is_visible.then(|| self.snapshot())
    }

    fn snapshot(&self) -> BannerContent {
        BannerContent {
            title: TITLE,
            subtitle: self.props.subtitle(),
        }
    }

    /// Handle a button press. Presses on a hidden banner are ignored.
    pub fn update(&mut self, event: Event) {
        if !self.is_visible {
            tracing::debug!("Ignoring {:?} on hidden update banner", event);
            return;
        }

        match event {
            Event::UpdatePressed => {
                tracing::info!("Update to v{} requested from banner", self.props.version);
                (self.props.on_update)();
                self.hide();
                self.haptics.success();
            }
            Event::DismissPressed => {
                tracing::info!("Update banner for v{} dismissed", self.props.version);
                self.hide();
                (self.props.on_dismiss)();
                self.haptics.soft_impact();
            }
        }
    }

    /// Start the removal transition and flip visibility. One-way.
    fn hide(&mut self) {
        self.presence.exit();
        self.is_visible = false;
    }

    /// Whether the enter/exit transition needs animation frames
    pub fn is_animating(&self) -> bool {
        self.presence.is_animating()
    }

    /// Whether anything is painted, including a fading exit
    pub fn is_on_screen(&self) -> bool {
        self.is_visible || self.presence.is_on_screen()
    }

    pub fn tick(&mut self, now: Instant) {
        self.presence.tick(now);
    }

    pub fn view(&self) -> Element<'_, Event> {
        if !self.is_on_screen() {
            return Space::new().width(0).height(0).into();
        }

        let opacity = self.presence.progress();
        // A banner fading out keeps painting its last frame but accepts no input
        let interactive = self.is_visible;
        let content = self.content().unwrap_or_else(|| self.snapshot());

        let icon_badge = container(
            svg(svg::Handle::from_memory(
                icons::ARROW_DOWN_CIRCLE_FILL.as_bytes(),
            ))
            .width(ICON_SIZE)
            .height(ICON_SIZE)
            .style(move |theme, _status| svg::Style {
                color: Some(faded(theme::accent(theme), opacity)),
            }),
        )
        .center_x(ICON_BADGE_SIZE)
        .center_y(ICON_BADGE_SIZE)
        .style(move |theme| theme::update_icon_badge(theme, opacity));

        let title = text(content.title)
            .size(TITLE_SIZE)
            .line_height(LINE_HEIGHT)
            .font(SEMIBOLD)
            .style(move |theme| text::Style {
                color: Some(faded(theme::text_primary(theme), opacity)),
            });

        let subtitle = text(content.subtitle)
            .size(SUBTITLE_SIZE)
            .line_height(LINE_HEIGHT)
            .wrapping(text::Wrapping::None)
            .style(move |theme| text::Style {
                color: Some(faded(theme::text_secondary(theme), opacity)),
            });

        // Clipping keeps the subtitle to a single line
        let message = container(column![title, subtitle].spacing(TEXT_SPACING))
            .width(Fill)
            .clip(true);

        let update_button = button(
            text(UPDATE_LABEL)
                .size(TITLE_SIZE)
                .line_height(LINE_HEIGHT)
                .font(SEMIBOLD),
        )
        .padding(Padding::from([BUTTON_PADDING_VERTICAL, BUTTON_PADDING_HORIZONTAL]))
            .style(move |theme, status| theme::update_pill_button(theme, status, opacity))
            .on_press_maybe(interactive.then_some(Event::UpdatePressed));

        let dismiss_button = button(
            container(
                svg(svg::Handle::from_memory(icons::XMARK.as_bytes()))
                    .width(DISMISS_ICON_SIZE)
                    .height(DISMISS_ICON_SIZE)
                    .style(move |theme, _status| svg::Style {
                        color: Some(faded(theme::text_secondary(theme), opacity)),
                    }),
            )
            .center_x(DISMISS_SIZE)
            .center_y(DISMISS_SIZE),
        )
        .padding(0)
        .style(move |theme, status| theme::dismiss_button(theme, status, opacity))
        .on_press_maybe(interactive.then_some(Event::DismissPressed));

        let card = container(
            row![icon_badge, message, update_button, dismiss_button]
                .spacing(CARD_SPACING)
                .height(ROW_HEIGHT)
                .align_y(Alignment::Center),
        )
        .padding(CARD_PADDING)
        .width(Fill)
        .style(move |theme| theme::update_banner_card(theme, opacity));

        let inset = container(card).padding(
            Padding::new(0.0)
                .left(INSET_HORIZONTAL)
                .right(INSET_HORIZONTAL)
                .top(INSET_TOP),
        );

        // Slide from the top edge: the slot grows while the card stays
        // anchored to its bottom, so the card appears to move down
        let height = if self.presence.is_animating() || self.presence.is_exiting() {
            Length::Fixed(SLOT_HEIGHT + self.presence.slide_offset(SLOT_HEIGHT))
        } else {
            Length::Shrink
        };

        container(inset)
            .width(Fill)
            .height(height)
            .align_y(Vertical::Bottom)
            .clip(true)
            .into()
    }
}
