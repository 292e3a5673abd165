//! Demo application state, messages and view

use iced::time::Instant;
use iced::widget::{button, column, row, text};
use iced::{Element, Length, Subscription, Task, Theme};
use valuebar_core::{ColorFormatter, TextFormatter, ValueBar};
use valuebar_widgets::{animation_frames, apply_input, value_bar, BarInput};

use crate::config::DemoConfig;
use crate::formatters::{CurrencyText, MidpointColor, SelectionLogger};

/// Value bars animate up to this value from the menu
const ANIMATE_UP_TARGET: f32 = 800.0;

#[derive(Debug, Clone)]
pub enum Message {
    /// Pointer input on bar `index`
    Bar(usize, BarInput),
    /// Animation frame
    Tick(Instant),
    AnimateUp,
    AnimateDown,
    ToggleMinMaxLabel,
    ToggleValueLabel,
}

pub struct DemoApp {
    bars: Vec<ValueBar>,
    bar_height: f32,
    animation_ms: u64,
}

impl DemoApp {
    pub fn new(config: DemoConfig) -> (Self, Task<Message>) {
        let bars = (0..config.bar_count)
            .map(|index| {
                let mut bar = ValueBar::from_config(&config.bar);
                bar.set_selection_listener(Some(Box::new(SelectionLogger)));
                // Last two bars show the custom strategies
                match index {
                    3 => bar.set_color_formatter(ColorFormatter::color(MidpointColor)),
                    4 => bar.set_value_text_formatter(TextFormatter::text(CurrencyText::default())),
                    _ => {}
                }
                bar.animate(config.bar.min, config.intro_target, config.animation_ms);
                bar
            })
            .collect();

        log::info!("DemoApp: created {} bars", config.bar_count);

        let app = Self {
            bars,
            bar_height: config.bar_height,
            animation_ms: config.animation_ms,
        };
        (app, Task::none())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Bar(index, input) => {
                if let Some(bar) = self.bars.get_mut(index) {
                    let outcome = apply_input(bar, input);
                    log::debug!("bar {}: {:?}", index, outcome);
                }
            }
            Message::Tick(now) => {
                for bar in &mut self.bars {
                    bar.tick(now);
                }
            }
            Message::AnimateUp => {
                for bar in &mut self.bars {
                    bar.animate_up(ANIMATE_UP_TARGET, self.animation_ms);
                }
            }
            Message::AnimateDown => {
                for bar in &mut self.bars {
                    let min = bar.min();
                    bar.animate_down(min, self.animation_ms);
                }
            }
            Message::ToggleMinMaxLabel => {
                for bar in &mut self.bars {
                    bar.set_draw_min_max_text(!bar.is_draw_min_max_text_enabled());
                }
            }
            Message::ToggleValueLabel => {
                for bar in &mut self.bars {
                    bar.set_draw_value_text(!bar.is_draw_value_text_enabled());
                }
            }
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let controls = row![
            button(text("Animate up")).on_press(Message::AnimateUp),
            button(text("Animate down")).on_press(Message::AnimateDown),
            button(text("Toggle min/max")).on_press(Message::ToggleMinMaxLabel),
            button(text("Toggle value")).on_press(Message::ToggleValueLabel),
        ]
        .spacing(10);

        let bars = self.bars.iter().enumerate().map(|(index, bar)| {
            value_bar(bar, self.bar_height, move |input| Message::Bar(index, input))
        });

        column![controls]
            .extend(bars)
            .spacing(16)
            .padding(20)
            .width(Length::Fill)
            .into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let animating = self.bars.iter().any(ValueBar::is_animating);
        animation_frames(animating).map(Message::Tick)
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    #[cfg(test)]
    pub(crate) fn bars(&self) -> &[ValueBar] {
        &self.bars
    }
}
