use egui;

use super::UiState;
use crate::config;
use crate::ruleset::Variant;
use crate::simulation::SimState;

/// Slim status strip + compact controls.
pub fn draw_toolbar(ctx: &egui::Context, sim: &mut SimState, ui_state: &mut UiState) {
    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.add_space(3.0);
        ui.horizontal_wrapped(|ui| {
            title_badge(ui, "ANTWALK");

            ui.separator();
            compact_group(ui, "Sim", |ui| {
                let pause_label = if sim.paused { "Play" } else { "Pause" };
                if ui.button(pause_label).clicked() {
                    sim.paused = !sim.paused;
                }
                if ui.button("Step").clicked() {
                    ui_state.step_requested = true;
                }
                if ui.button("Reset").clicked() {
                    ui_state.reset_requested = true;
                }
            });

            compact_group(ui, "Ruleset", |ui| {
                for variant in Variant::ALL {
                    variant_button(ui, sim, ui_state, variant);
                }
            });

            if sim.ruleset.speed_slider {
                compact_group(ui, "Speed", |ui| {
                    let mut speed = sim.ant_speed;
                    let slider = egui::Slider::new(
                        &mut speed,
                        config::ANT_SPEED_MIN..=config::ANT_SPEED_MAX,
                    )
                    .integer();
                    if ui.add(slider).changed() {
                        sim.set_ant_speed(speed);
                    }
                });
            }

            compact_group(ui, "Panels", |ui| {
                ui.toggle_value(&mut ui_state.show_graphs, "Graphs");
            });
        });

        ui.add_space(4.0);
        ui.horizontal_wrapped(|ui| {
            metric_chip(ui, "Ants", format!("{}", sim.arena.count));
            metric_chip(ui, "Exited", format!("{}", sim.exited_total));
            metric_chip(ui, "Tiles", format!("{}", sim.terrain.live_count()));
            metric_chip(ui, "Tick", format!("{}", sim.tick_count));
        });
        ui.add_space(3.0);
    });
}

fn variant_button(ui: &mut egui::Ui, sim: &SimState, ui_state: &mut UiState, variant: Variant) {
    let selected = sim.ruleset.variant == variant;
    if ui.selectable_label(selected, variant.label()).clicked() && !selected {
        ui_state.variant_request = Some(variant);
    }
}

fn title_badge(ui: &mut egui::Ui, label: &str) {
    let text = egui::RichText::new(label)
        .strong()
        .color(egui::Color32::from_rgb(190, 220, 255));
    ui.label(text);
}

fn compact_group(ui: &mut egui::Ui, heading: &str, add_contents: impl FnOnce(&mut egui::Ui)) {
    ui.group(|ui| {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(heading)
                    .small()
                    .color(egui::Color32::from_rgb(150, 170, 185)),
            );
            add_contents(ui);
        });
    });
}

fn metric_chip(ui: &mut egui::Ui, key: &str, value: String) {
    let text = egui::RichText::new(format!("{key}: {value}"))
        .small()
        .color(egui::Color32::from_rgb(205, 215, 225));
    ui.group(|ui| {
        ui.label(text);
    });
}
