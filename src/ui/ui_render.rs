use eframe::egui::{
    Button, CentralPanel, CollapsingHeader, Color32, Context, CornerRadius, Frame, Image, Key,
    Margin, RichText, ScrollArea, Stroke, TextEdit, TextStyle, Ui, load::SizedTexture, vec2,
};

use crate::config::TESTING;
use crate::domain::instructions::{
    MOBILE_STEPS, android_command, command_script, ios_simulator_command,
};
use crate::domain::{ResolvedLink, group_by_category};
use crate::ui::config::UI_CONFIG;
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_text::UI_TEXT;
use crate::ui::utils::{section_heading, spaced_separator};

use super::app::DeepLinkTesterApp;

/// Assets listed in the simulator snippets.
const IOS_SCRIPT_ASSETS: usize = 3;
const ANDROID_SCRIPT_ASSETS: usize = 1;

/// User actions collected during a frame and applied once rendering is done.
pub(super) enum PageEvent {
    ToggleEnvironment,
    Copy { url: String, index: usize },
    Open(String),
}

impl DeepLinkTesterApp {
    pub(super) fn render_central_panel(&mut self, ctx: &Context, frame: &mut eframe::Frame) {
        let mut events = Vec::new();
        let panel_frame = Frame::new()
            .fill(UI_CONFIG.colors.central_panel)
            .inner_margin(Margin::same(16));

        CentralPanel::default().frame(panel_frame).show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    self.render_header(ui, &mut events);
                    spaced_separator(ui);
                    self.render_catalog(ui, ctx, &mut events);
                    if self.show_instructions {
                        spaced_separator(ui);
                        self.render_instructions(ui);
                    }
                });
        });

        for event in events {
            match event {
                PageEvent::ToggleEnvironment => self.toggle_environment(frame),
                PageEvent::Copy { url, index } => self.copy_link(&url, index),
                PageEvent::Open(url) => self.open_link(ctx, &url),
            }
        }
    }

    fn render_header(&self, ui: &mut Ui, events: &mut Vec<PageEvent>) {
        ui.vertical_centered(|ui| {
            ui.add_space(8.0);
            ui.label_header(UI_TEXT.page_title);
            ui.add_space(6.0);
            ui.label_subdued(UI_TEXT.page_blurb);
            ui.add_space(4.0);
            ui.hyperlink_to(format!("🔗 {}", TESTING.pr_label), TESTING.pr_url);
            ui.add_space(10.0);

            let environment = self.state.environment();
            let color = if self.state.selected_environment() == 0 {
                UI_CONFIG.colors.production
            } else {
                UI_CONFIG.colors.development
            };

            ui.horizontal(|ui| {
                ui.label_subdued(UI_TEXT.environment_label);
                let label = RichText::new(format!("● {}", environment.name))
                    .strong()
                    .color(color);
                let mut hover = UI_TEXT.environment_toggle_hint.to_string();
                if let Some(alt) = environment.alt_domain {
                    hover = format!("{}\n{}{}", hover, UI_TEXT.alt_domain_prefix, alt);
                }
                if ui.button(label).on_hover_text(hover).clicked() {
                    events.push(PageEvent::ToggleEnvironment);
                }
                ui.label(RichText::new(environment.domain).monospace().color(color));
            });
        });
    }

    fn render_catalog(&mut self, ui: &mut Ui, ctx: &Context, events: &mut Vec<PageEvent>) {
        let groups = group_by_category(self.state.resolved_links());

        for (category, links) in groups {
            section_heading(ui, category.to_string());
            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing = vec2(16.0, 16.0);
                for resolved in &links {
                    self.render_card(ui, ctx, resolved, events);
                }
            });
        }
    }

    fn render_card(
        &mut self,
        ui: &mut Ui,
        ctx: &Context,
        resolved: &ResolvedLink,
        events: &mut Vec<PageEvent>,
    ) {
        let link = resolved.link;
        let texture = self.qr_texture(ctx, &resolved.url);
        let generating = self.is_generating_qr();
        let copied = self.state.copy_feedback.is_flashed(resolved.index);
        let width = UI_CONFIG.card_width;
        let qr_size = UI_CONFIG.qr_display_size;

        ui.vertical(|ui| {
            ui.set_width(width);
            Frame::new()
                .fill(UI_CONFIG.colors.card)
                .stroke(Stroke::new(1.0, UI_CONFIG.colors.card_border))
                .corner_radius(CornerRadius::same(10))
                .inner_margin(Margin::same(14))
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.horizontal(|ui| {
                            ui.label(
                                RichText::new(format!("{} {}", link.icon.glyph(), link.title))
                                    .strong()
                                    .size(17.0)
                                    .color(UI_CONFIG.colors.heading),
                            );
                            if link.is_new {
                                ui.badge(UI_TEXT.new_badge, UI_CONFIG.colors.new_badge);
                            }
                        });
                        ui.horizontal(|ui| {
                            if let Some(symbol) = link.symbol {
                                ui.badge(symbol, UI_CONFIG.colors.symbol_badge);
                            }
                            if let Some((dex, _)) = link.hip3_parts() {
                                ui.badge(
                                    format!("{}{}", UI_TEXT.hip3_dex_prefix, dex),
                                    UI_CONFIG.colors.hip3_badge,
                                );
                            }
                        });
                        ui.label_subdued(link.description);
                        ui.add_space(8.0);

                        match &texture {
                            Some(texture) => {
                                ui.add(
                                    Image::from_texture(SizedTexture::from_handle(texture))
                                        .fit_to_exact_size(vec2(qr_size, qr_size)),
                                )
                                .on_hover_text(format!("{}{}", UI_TEXT.qr_alt_prefix, link.title));
                            }
                            None if generating => {
                                ui.add_space(qr_size / 2.0 - 12.0);
                                ui.spinner();
                                ui.label_subdued(UI_TEXT.qr_pending);
                                ui.add_space(qr_size / 2.0 - 12.0);
                            }
                            None => ui.label_subdued(UI_TEXT.qr_unavailable),
                        }
                        ui.add_space(8.0);

                        ui.horizontal(|ui| {
                            let mut text = resolved.url.as_str();
                            ui.add(
                                TextEdit::singleline(&mut text)
                                    .font(TextStyle::Monospace)
                                    .desired_width(width - 72.0),
                            );
                            let (glyph, hint, color) = if copied {
                                ("✔", UI_TEXT.copied_hint, UI_CONFIG.colors.copied)
                            } else {
                                ("🗐", UI_TEXT.copy_hint, Color32::WHITE)
                            };
                            if ui
                                .button(RichText::new(glyph).color(color))
                                .on_hover_text(hint)
                                .clicked()
                            {
                                events.push(PageEvent::Copy {
                                    url: resolved.url.clone(),
                                    index: resolved.index,
                                });
                            }
                        });

                        ui.add_space(4.0);
                        if ui
                            .add_sized([width - 28.0, 28.0], Button::new(UI_TEXT.open_link))
                            .clicked()
                        {
                            events.push(PageEvent::Open(resolved.url.clone()));
                        }
                    });
                });
        });
    }

    fn render_instructions(&self, ui: &mut Ui) {
        let links = self.state.resolved_links();
        let ios = command_script(links, IOS_SCRIPT_ASSETS, ios_simulator_command);
        let android = command_script(links, ANDROID_SCRIPT_ASSETS, |url| {
            android_command(url, TESTING.android_package)
        });

        CollapsingHeader::new(RichText::new(UI_TEXT.instructions_heading).strong().size(20.0))
            .default_open(true)
            .show(ui, |ui| {
                ui.label_subheader(UI_TEXT.mobile_heading);
                for (step, text) in MOBILE_STEPS.iter().enumerate() {
                    ui.label(format!("{}. {}", step + 1, text));
                }

                ui.add_space(10.0);
                ui.label_subheader(UI_TEXT.ios_heading);
                ui.code_block(&ios);

                ui.add_space(10.0);
                ui.label_subheader(UI_TEXT.android_heading);
                ui.code_block(&android);
            });
    }

    pub(super) fn handle_global_shortcuts(&mut self, ctx: &Context, frame: &mut eframe::Frame) {
        if ctx.memory(|m| m.focused().is_some()) {
            return;
        }

        let (toggle_env, toggle_instructions) =
            ctx.input(|i| (i.key_pressed(Key::E), i.key_pressed(Key::I)));

        // 'E'nvironment toggle
        if toggle_env {
            self.toggle_environment(frame);
        }
        // 'I'nstructions
        if toggle_instructions {
            self.show_instructions = !self.show_instructions;
        }
    }
}
