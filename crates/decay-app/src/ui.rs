use decay_core::menu::MenuState;
use egui::{Align2, Area, Color32, Id, LayerId, Order, RichText};

// ---------------------------------------------------------------------------
// Menu overlay — a corner toggle button plus a dimmed nav layer when open
// ---------------------------------------------------------------------------

/// Draw the overlay for the current menu state. Returns `true` when the
/// corner button was clicked this frame so the caller can flip the state.
///
/// The nav entries are decorative; the photo keeps decaying behind the dim
/// layer the whole time the menu is up.
pub fn menu_layer(ctx: &egui::Context, menu: MenuState) -> bool {
    if menu.is_open() {
        let painter = ctx.layer_painter(LayerId::new(Order::Middle, Id::new("menu-dim")));
        painter.rect_filled(ctx.screen_rect(), 0.0, Color32::from_black_alpha(200));

        Area::new(Id::new("menu-nav"))
            .order(Order::Foreground)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    for entry in ["HOME", "ARCHIVE", "ABOUT", "CONTACT"] {
                        ui.label(RichText::new(entry).size(32.0).color(Color32::WHITE));
                        ui.add_space(12.0);
                    }
                });
            });
    }

    let mut clicked = false;
    Area::new(Id::new("menu-button"))
        .order(Order::Foreground)
        .anchor(Align2::RIGHT_TOP, [-24.0, 24.0])
        .show(ctx, |ui| {
            if ui.button(RichText::new(menu.button_label()).size(16.0)).clicked() {
                clicked = true;
            }
        });
    clicked
}
